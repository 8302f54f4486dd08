use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Clinic client. Pet count, spend and pet names are derived, see
/// [`crate::api::owner::OwnerCard`]
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct Owner {
    pub id: i64,
    pub name: String,
    /// Cedula
    pub national_id: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub occupation: String,
    pub last_visit: NaiveDate,
}
