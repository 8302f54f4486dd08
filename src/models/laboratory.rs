use chrono::NaiveDate;
use derive_more::Display;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Display, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisStatus {
    #[default]
    #[display("pendiente")]
    Pendiente,
    #[display("procesando")]
    Procesando,
    #[display("completado")]
    Completado,
}

/// Declared from lowest to highest so the derived `Ord` ranks `alta` first
/// when sorting descending
#[derive(
    Debug, Display, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq, PartialOrd, Ord,
)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisPriority {
    #[default]
    #[display("normal")]
    Normal,
    #[display("media")]
    Media,
    #[display("alta")]
    Alta,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct Analysis {
    pub id: i64,
    pub pet_name: String,
    pub owner_name: String,
    pub test_type: String,
    pub requested_at: NaiveDate,
    pub result_at: Option<NaiveDate>,
    pub status: AnalysisStatus,
    pub veterinarian: String,
    pub laboratory: String,
    pub priority: AnalysisPriority,
    pub cost: Decimal,
}
