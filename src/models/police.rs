use chrono::NaiveDate;
use derive_more::Display;
use serde::{Deserialize, Serialize};

#[derive(Debug, Display, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Urgency {
    #[display("alta")]
    Alta,
    #[default]
    #[display("media")]
    Media,
    #[display("baja")]
    Baja,
}

/// Monitored endangered species sighting
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct SpeciesAlert {
    pub id: i64,
    pub scientific_name: String,
    pub common_name: String,
    /// Conservation state, e.g. "En Peligro Crítico"
    pub conservation_state: String,
    pub location: String,
    pub reported_at: NaiveDate,
    pub reported_by: String,
    pub description: String,
    pub urgency: Urgency,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct Seizure {
    pub id: i64,
    pub date: NaiveDate,
    pub location: String,
    pub seized_species: String,
    pub responsible: String,
    /// e.g. "En Proceso", "Completado"
    pub status: String,
    pub animal_destination: String,
    /// Legal act number, e.g. "ACTA-AMB-2024-158"
    pub legal_document: String,
    pub suspect: String,
}

#[derive(Debug, Display, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ReportType {
    #[default]
    #[display("incautacion")]
    Incautacion,
    /// Species follow-up
    #[display("seguimiento")]
    Seguimiento,
    /// Environmental alert
    #[display("alerta")]
    Alerta,
    /// Inter-agency coordination
    #[display("coordinacion")]
    Coordinacion,
    #[display("estadistico")]
    Estadistico,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct PoliceReport {
    /// `RPT-AMB-<year>-<3 digits>`
    pub number: String,
    pub date: NaiveDate,
    pub report_type: ReportType,
    pub responsible: String,
    pub unit: String,
    pub subject: String,
    pub description: String,
    pub recommendations: String,
    pub attachments: String,
}
