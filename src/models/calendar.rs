use chrono::NaiveDate;
use derive_more::Display;
use serde::{Deserialize, Serialize};

use super::police::Urgency;

#[derive(Debug, Display, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    #[default]
    #[display("vacuna")]
    Vacuna,
    #[display("cita")]
    Cita,
    #[display("seguimiento")]
    Seguimiento,
    /// Payment deadline
    #[display("corte")]
    Corte,
}

#[derive(Debug, Display, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum EventStatus {
    #[default]
    #[display("pendiente")]
    Pendiente,
    #[display("completado")]
    Completado,
    #[display("vencido")]
    Vencido,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct AlertEvent {
    pub id: i64,
    pub event_type: EventType,
    pub title: String,
    pub pet_name: Option<String>,
    pub owner_name: String,
    pub date: NaiveDate,
    /// Same `alta|media|baja` scale as police urgency
    pub priority: Urgency,
    pub status: EventStatus,
    pub description: String,
}
