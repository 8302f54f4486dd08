use chrono::{NaiveDate, NaiveTime};
use derive_more::Display;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Display, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ServiceSpecies {
    #[display("perros")]
    Perros,
    #[display("gatos")]
    Gatos,
    #[default]
    #[display("ambos")]
    Ambos,
}

#[derive(Debug, Display, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ServiceAvailability {
    #[default]
    #[display("disponible")]
    Disponible,
    #[display("no_disponible")]
    NoDisponible,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct Service {
    pub id: i64,
    pub name: String,
    pub category: String,
    pub description: String,
    pub price: Decimal,
    pub duration_minutes: u32,
    pub veterinarian: String,
    pub species: ServiceSpecies,
    pub requires_anesthesia: bool,
    pub availability: ServiceAvailability,
    pub next_availability: Option<NaiveDate>,
}

#[derive(Debug, Display, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AppointmentStatus {
    #[default]
    #[display("programada")]
    Programada,
    #[display("completada")]
    Completada,
    #[display("cancelada")]
    Cancelada,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct Appointment {
    pub id: i64,
    pub service_id: i64,
    pub service_name: String,
    pub pet_name: String,
    pub owner_name: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub veterinarian: String,
    pub status: AppointmentStatus,
    pub notes: Option<String>,
    pub price: Decimal,
}
