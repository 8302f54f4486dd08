//! # Pet API Module
//!
//! Search, sort and statistics for the pets list page.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use super::filter::{self, Listing};
use crate::models::pet::{Pet, PetStatus, Species};

#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum PetSortKey {
    Name,
    #[default]
    LastVisit,
    NextVaccine,
}

impl PetSortKey {
    /// Most recent visit first, closest vaccine first
    pub fn default_order(&self) -> SortOrder {
        match self {
            PetSortKey::Name => SortOrder::Asc,
            PetSortKey::LastVisit => SortOrder::Desc,
            PetSortKey::NextVaccine => SortOrder::Asc,
        }
    }
}

#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn apply(&self, ordering: Ordering) -> Ordering {
        match self {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    }
}

/// Query string of `GET /mascotas`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PetQuery {
    #[serde(default)]
    pub search: String,
    #[serde(default, deserialize_with = "filter::selector")]
    pub status: Option<PetStatus>,
    #[serde(default, deserialize_with = "filter::selector")]
    pub species: Option<Species>,
    #[serde(default)]
    pub sort: PetSortKey,
    /// Falls back to [PetSortKey::default_order]
    pub order: Option<SortOrder>,
    #[serde(default)]
    pub preview: bool,
}

pub fn pet_matches(pet: &Pet, query: &PetQuery) -> bool {
    filter::matches_query(
        &query.search,
        &[&pet.name, &pet.owner, &pet.breed, &pet.microchip],
    ) && filter::matches_selector(query.status.as_ref(), &pet.status)
        && filter::matches_selector(query.species.as_ref(), &pet.species)
}

pub fn filter_pets(pets: Vec<Pet>, query: &PetQuery) -> Vec<Pet> {
    pets.into_iter().filter(|p| pet_matches(p, query)).collect()
}

/// Stable sort, equal keys keep their fixture order
pub fn sort_pets(pets: &mut [Pet], key: PetSortKey, order: SortOrder) {
    pets.sort_by(|a, b| {
        let ordering = match key {
            PetSortKey::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
            PetSortKey::LastVisit => a.last_visit.cmp(&b.last_visit),
            PetSortKey::NextVaccine => a.next_vaccine.cmp(&b.next_vaccine),
        };
        order.apply(ordering)
    });
}

#[derive(Debug, Default, Serialize, Clone, PartialEq)]
pub struct PetStats {
    pub total: usize,
    pub healthy: usize,
    pub in_treatment: usize,
    pub pending_appointment: usize,
}

pub fn pet_stats(pets: &[Pet]) -> PetStats {
    let count = |status: PetStatus| pets.iter().filter(|p| p.status == status).count();

    PetStats {
        total: pets.len(),
        healthy: count(PetStatus::Saludable),
        in_treatment: count(PetStatus::Tratamiento),
        pending_appointment: count(PetStatus::CitaPendiente),
    }
}

#[derive(Debug, Serialize)]
pub struct PetsPage {
    pub pets: Listing<Pet>,
    pub stats: PetStats,
}

/// Stats are computed over the full list, not the filtered one
pub fn build_pets_page(pets: Vec<Pet>, query: &PetQuery) -> PetsPage {
    let stats = pet_stats(&pets);
    let mut filtered = filter_pets(pets, query);
    sort_pets(
        &mut filtered,
        query.sort,
        query.order.unwrap_or_else(|| query.sort.default_order()),
    );

    PetsPage {
        pets: Listing::new(filtered, query.preview),
        stats,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    fn names(pets: &[Pet]) -> Vec<&str> {
        pets.iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn test_empty_query_returns_all_pets_in_order() {
        let result = filter_pets(fixtures::pets(), &PetQuery::default());

        assert_eq!(result, fixtures::pets());
    }

    #[test]
    fn test_non_matching_query_returns_empty() {
        let query = PetQuery {
            search: "zzz".into(),
            ..Default::default()
        };

        assert!(filter_pets(fixtures::pets(), &query).is_empty());
    }

    #[test]
    fn test_query_and_selector_intersection() {
        let query = PetQuery {
            search: "García".into(),
            species: Some(Species::Perro),
            ..Default::default()
        };

        assert_eq!(names(&filter_pets(fixtures::pets(), &query)), vec!["Max"]);
    }

    #[test]
    fn test_query_matches_microchip_and_breed() {
        let by_chip = PetQuery {
            search: "mch001234570".into(),
            ..Default::default()
        };
        let by_breed = PetQuery {
            search: "maine".into(),
            ..Default::default()
        };

        assert_eq!(names(&filter_pets(fixtures::pets(), &by_chip)), vec!["Mimi"]);
        assert_eq!(
            names(&filter_pets(fixtures::pets(), &by_breed)),
            vec!["Whiskers"]
        );
    }

    #[test]
    fn test_status_selector() {
        let query = PetQuery {
            status: Some(PetStatus::Tratamiento),
            ..Default::default()
        };

        assert_eq!(
            names(&filter_pets(fixtures::pets(), &query)),
            vec!["Luna", "Whiskers"]
        );
    }

    #[test]
    fn test_sort_by_name_is_case_insensitive() {
        let mut pets = fixtures::pets();
        pets[0].name = "max".into();
        sort_pets(&mut pets, PetSortKey::Name, SortOrder::Asc);

        assert_eq!(
            names(&pets),
            vec![
                "Bella", "Buddy", "Coco", "Felix", "Luna", "max", "Mimi", "Rocky", "Whiskers"
            ]
        );
    }

    #[test]
    fn test_default_sort_is_last_visit_descending() {
        let page = build_pets_page(fixtures::pets(), &PetQuery::default());
        let visits = page
            .pets
            .items
            .iter()
            .map(|p| p.last_visit)
            .collect::<Vec<_>>();

        assert_eq!(page.pets.items[0].name, "Bella");
        assert!(visits.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn test_sort_next_vaccine_ascending() {
        let mut pets = fixtures::pets();
        sort_pets(&mut pets, PetSortKey::NextVaccine, SortOrder::Asc);

        assert_eq!(pets[0].name, "Mimi");
        assert_eq!(pets[pets.len() - 1].name, "Coco");
    }

    #[test]
    fn test_pet_stats_over_full_list() {
        let query = PetQuery {
            search: "zzz".into(),
            ..Default::default()
        };
        let page = build_pets_page(fixtures::pets(), &query);

        assert_eq!(
            page.stats,
            PetStats {
                total: 9,
                healthy: 5,
                in_treatment: 2,
                pending_appointment: 2,
            }
        );
        assert_eq!(page.pets.total, 0);
    }
}
