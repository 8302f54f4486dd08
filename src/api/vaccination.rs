//! Vaccination status is always derived from the next due date and the
//! reference day, never read from storage.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::filter::{self, Listing};
use crate::{
    consts,
    models::{
        pet::Pet,
        vaccination::{Vaccination, VaccinationStatus},
    },
    utils,
};

/// `vencido` once the due date passed, `proximo` within the upcoming
/// window (both ends included), otherwise `vigente`
pub fn derive_status(next_due: NaiveDate, today: NaiveDate) -> VaccinationStatus {
    let days = days_until_due(next_due, today);

    if days < 0 {
        VaccinationStatus::Vencido
    } else if days <= consts::VACCINE_UPCOMING_WINDOW_DAYS {
        VaccinationStatus::Proximo
    } else {
        VaccinationStatus::Vigente
    }
}

pub fn days_until_due(next_due: NaiveDate, today: NaiveDate) -> i64 {
    next_due.signed_duration_since(today).num_days()
}

pub fn days_label(days: i64) -> String {
    match days {
        i64::MIN..=0 => "Vencida".to_string(),
        1 => "1 día".to_string(),
        n => format!("{n} días"),
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct VaccinationQuery {
    #[serde(default)]
    pub search: String,
    #[serde(default, deserialize_with = "filter::selector")]
    pub status: Option<VaccinationStatus>,
    #[serde(default)]
    pub preview: bool,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct VaccinationView {
    #[serde(flatten)]
    pub vaccination: Vaccination,
    pub status: VaccinationStatus,
    pub days_until_due: i64,
    pub days_label: String,
}

impl VaccinationView {
    pub fn new(vaccination: Vaccination, today: NaiveDate) -> Self {
        let days = days_until_due(vaccination.next_due, today);

        Self {
            status: derive_status(vaccination.next_due, today),
            days_until_due: days,
            days_label: days_label(days),
            vaccination,
        }
    }
}

#[derive(Debug, Default, Serialize, Clone, PartialEq)]
pub struct VaccinationStats {
    pub total: usize,
    pub current: usize,
    pub upcoming: usize,
    pub overdue: usize,
}

pub fn vaccination_stats(views: &[VaccinationView]) -> VaccinationStats {
    let count = |status: VaccinationStatus| views.iter().filter(|v| v.status == status).count();

    VaccinationStats {
        total: views.len(),
        current: count(VaccinationStatus::Vigente),
        upcoming: count(VaccinationStatus::Proximo),
        overdue: count(VaccinationStatus::Vencido),
    }
}

#[derive(Debug, Serialize)]
pub struct VaccinationsPage {
    pub vaccinations: Listing<VaccinationView>,
    /// Upcoming and overdue records, the alerts panel
    pub alerts: Vec<VaccinationView>,
    pub stats: VaccinationStats,
}

pub fn build_vaccinations_page(
    vaccinations: Vec<Vaccination>,
    query: &VaccinationQuery,
    today: NaiveDate,
) -> VaccinationsPage {
    let views = vaccinations
        .into_iter()
        .map(|v| VaccinationView::new(v, today))
        .collect::<Vec<VaccinationView>>();
    let stats = vaccination_stats(&views);

    let alerts = views
        .iter()
        .filter(|v| v.status != VaccinationStatus::Vigente)
        .cloned()
        .collect();

    let filtered = views
        .into_iter()
        .filter(|v| {
            filter::matches_query(
                &query.search,
                &[
                    &v.vaccination.pet_name,
                    &v.vaccination.owner_name,
                    &v.vaccination.vaccine,
                ],
            ) && filter::matches_selector(query.status.as_ref(), &v.status)
        })
        .collect();

    VaccinationsPage {
        vaccinations: Listing::new(filtered, query.preview),
        alerts,
        stats,
    }
}

/// Data needed to record a new vaccination, already validated
#[derive(Debug, Clone)]
pub struct NewVaccination {
    pub pet_id: i64,
    pub vaccine: String,
    pub applied_date: NaiveDate,
    pub next_due: NaiveDate,
    pub lot: String,
    pub veterinarian: String,
}

/// Builds the record for a known pet with a fresh cosmetic hash
pub fn register_vaccination(
    new_vaccination: NewVaccination,
    pets: &[Pet],
    existing: &[Vaccination],
) -> anyhow::Result<Vaccination> {
    let pet = pets
        .iter()
        .find(|p| p.id == new_vaccination.pet_id)
        .ok_or_else(|| anyhow::anyhow!("pet {} not found", new_vaccination.pet_id))?;

    Ok(Vaccination {
        id: existing.iter().map(|v| v.id).max().unwrap_or_default() + 1,
        pet_name: pet.name.clone(),
        owner_name: pet.owner.clone(),
        vaccine: new_vaccination.vaccine,
        species: pet.species,
        applied_date: new_vaccination.applied_date,
        next_due: new_vaccination.next_due,
        lot: new_vaccination.lot,
        veterinarian: new_vaccination.veterinarian,
        blockchain_hash: utils::random_blockchain_hash(),
    })
}
