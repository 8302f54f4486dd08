use chrono::NaiveDate;
use derive_more::Display;
use serde::{Deserialize, Serialize};

use super::pet::Species;

/// Derived from the next due date, never stored
#[derive(Debug, Display, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum VaccinationStatus {
    #[display("vigente")]
    Vigente,
    #[display("proximo")]
    Proximo,
    #[display("vencido")]
    Vencido,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct Vaccination {
    pub id: i64,
    pub pet_name: String,
    pub owner_name: String,
    pub vaccine: String,
    pub species: Species,
    pub applied_date: NaiveDate,
    pub next_due: NaiveDate,
    pub lot: String,
    pub veterinarian: String,
    /// Cosmetic, see [`crate::utils::random_blockchain_hash`]
    pub blockchain_hash: String,
}
