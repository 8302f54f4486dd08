use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use super::filter::{self, Listing};
use crate::models::{invoice::Invoice, owner::Owner, pet::Pet};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OwnerQuery {
    #[serde(default)]
    pub search: String,
    #[serde(default)]
    pub preview: bool,
}

/// Owner with the values derived from pets and invoices
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct OwnerCard {
    #[serde(flatten)]
    pub owner: Owner,
    pub pet_count: usize,
    pub pet_names: Vec<String>,
    /// Sum of the owner's invoice totals
    pub total_spend: Decimal,
}

pub fn build_owner_cards(owners: Vec<Owner>, pets: &[Pet], invoices: &[Invoice]) -> Vec<OwnerCard> {
    owners
        .into_iter()
        .map(|owner| {
            let pet_names = pets
                .iter()
                .filter(|p| p.owner_id == owner.id)
                .map(|p| p.name.clone())
                .collect::<Vec<String>>();

            let total_spend = invoices
                .iter()
                .filter(|i| i.owner_id == owner.id)
                .map(|i| i.totals.total)
                .sum();

            OwnerCard {
                pet_count: pet_names.len(),
                pet_names,
                total_spend,
                owner,
            }
        })
        .collect()
}

/// Name and email are matched case-insensitively, the phone verbatim
pub fn owner_matches(owner: &Owner, search: &str) -> bool {
    let search = search.trim();

    search.is_empty()
        || filter::contains_ci(&owner.name, search)
        || filter::contains_ci(&owner.email, search)
        || owner.phone.contains(search)
}

#[derive(Debug, Default, Serialize, Clone, PartialEq)]
pub struct OwnerStats {
    pub total_owners: usize,
    pub total_pets: usize,
    /// Rounded half away from zero to one decimal, 0 without owners
    pub avg_pets_per_owner: Decimal,
}

pub fn owner_stats(cards: &[OwnerCard]) -> OwnerStats {
    let total_owners = cards.len();
    let total_pets = cards.iter().map(|c| c.pet_count).sum::<usize>();

    let avg_pets_per_owner = if total_owners == 0 {
        Decimal::ZERO
    } else {
        (Decimal::from(total_pets) / Decimal::from(total_owners))
            .round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero)
    };

    OwnerStats {
        total_owners,
        total_pets,
        avg_pets_per_owner,
    }
}

#[derive(Debug, Serialize)]
pub struct OwnersPage {
    pub owners: Listing<OwnerCard>,
    pub stats: OwnerStats,
}

pub fn build_owners_page(
    owners: Vec<Owner>,
    pets: &[Pet],
    invoices: &[Invoice],
    query: &OwnerQuery,
) -> OwnersPage {
    let cards = build_owner_cards(owners, pets, invoices);
    let stats = owner_stats(&cards);
    let filtered = cards
        .into_iter()
        .filter(|c| owner_matches(&c.owner, &query.search))
        .collect();

    OwnersPage {
        owners: Listing::new(filtered, query.preview),
        stats,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use rust_decimal_macros::dec;

    fn cards() -> Vec<OwnerCard> {
        build_owner_cards(fixtures::owners(), &fixtures::pets(), &fixtures::invoices())
    }

    #[test]
    fn test_owner_cards_derive_pets_and_spend() {
        let cards = cards();
        let maria = &cards[0];

        assert_eq!(maria.pet_count, 2);
        assert_eq!(maria.pet_names, vec!["Max", "Coco"]);
        assert_eq!(maria.total_spend, dec!(145.60));
        assert_eq!(cards[7].total_spend, Decimal::ZERO);
    }

    #[test]
    fn test_owner_search_fields() {
        let cards = cards();
        let matching = |search: &str| {
            cards
                .iter()
                .filter(|c| owner_matches(&c.owner, search))
                .map(|c| c.owner.id)
                .collect::<Vec<_>>()
        };

        assert_eq!(matching("LÓPEZ"), vec![2]);
        assert_eq!(matching("ANA.MARTINEZ@"), vec![3]);
        assert_eq!(matching("303-567"), vec![4]);
        assert_eq!(matching("").len(), 8);
        assert!(matching("nadie").is_empty());
    }

    #[test]
    fn test_owner_stats() {
        let stats = owner_stats(&cards());

        assert_eq!(stats.total_owners, 8);
        assert_eq!(stats.total_pets, 9);
        assert_eq!(stats.avg_pets_per_owner, dec!(1.1));
    }

    #[test]
    fn test_owner_stats_rounds_ties_up() {
        let cards = cards()
            .into_iter()
            .take(4)
            .zip([2, 1, 1, 1])
            .map(|(card, pet_count)| OwnerCard { pet_count, ..card })
            .collect::<Vec<_>>();

        let stats = owner_stats(&cards);
        assert_eq!(stats.total_pets, 5);
        assert_eq!(stats.avg_pets_per_owner, dec!(1.3));
    }

    #[test]
    fn test_owner_stats_without_owners() {
        assert_eq!(owner_stats(&[]).avg_pets_per_owner, Decimal::ZERO);
    }
}
