use chrono::{Datelike, NaiveDate};
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::filter::{self, Listing};
use crate::models::police::{PoliceReport, ReportType, Seizure, SpeciesAlert, Urgency};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SpeciesAlertQuery {
    #[serde(default)]
    pub search: String,
    #[serde(default, deserialize_with = "filter::selector")]
    pub urgency: Option<Urgency>,
    #[serde(default)]
    pub preview: bool,
}

pub fn filter_species_alerts(
    alerts: Vec<SpeciesAlert>,
    query: &SpeciesAlertQuery,
) -> Vec<SpeciesAlert> {
    alerts
        .into_iter()
        .filter(|a| {
            filter::matches_query(
                &query.search,
                &[&a.common_name, &a.scientific_name, &a.location],
            ) && filter::matches_selector(query.urgency.as_ref(), &a.urgency)
        })
        .collect()
}

#[derive(Debug, Default, Serialize, Clone, PartialEq)]
pub struct PoliceStats {
    pub high_urgency_alerts: usize,
    pub seizures: usize,
    pub monitored_species: usize,
}

pub fn police_stats(alerts: &[SpeciesAlert], seizures: &[Seizure]) -> PoliceStats {
    PoliceStats {
        high_urgency_alerts: alerts
            .iter()
            .filter(|a| a.urgency == Urgency::Alta)
            .count(),
        seizures: seizures.len(),
        monitored_species: alerts.len(),
    }
}

#[derive(Debug, Serialize)]
pub struct PolicePage {
    pub species_alerts: Listing<SpeciesAlert>,
    pub seizures: Vec<Seizure>,
    pub stats: PoliceStats,
}

pub fn build_police_page(
    alerts: Vec<SpeciesAlert>,
    seizures: Vec<Seizure>,
    query: &SpeciesAlertQuery,
) -> PolicePage {
    let stats = police_stats(&alerts, &seizures);

    PolicePage {
        species_alerts: Listing::new(filter_species_alerts(alerts, query), query.preview),
        seizures,
        stats,
    }
}

/// Seizure record as filled in the field act, validated
#[derive(Debug, Clone)]
pub struct NewSeizure {
    pub date: NaiveDate,
    pub location: String,
    pub seized_species: String,
    pub responsible: String,
    pub animal_destination: String,
    pub legal_document: String,
    pub suspect: String,
}

/// Registered seizures start `En Proceso`
pub fn register_seizure(new_seizure: NewSeizure, existing: &[Seizure]) -> Seizure {
    Seizure {
        id: existing.iter().map(|s| s.id).max().unwrap_or_default() + 1,
        date: new_seizure.date,
        location: new_seizure.location,
        seized_species: new_seizure.seized_species,
        responsible: new_seizure.responsible,
        status: "En Proceso".to_string(),
        animal_destination: new_seizure.animal_destination,
        legal_document: new_seizure.legal_document,
        suspect: new_seizure.suspect,
    }
}

/// `RPT-AMB-<year>-<000..999>`
pub fn build_report_number(year: i32, sequence: u32) -> String {
    format!("RPT-AMB-{year}-{:03}", sequence % 1000)
}

#[derive(Debug, Clone)]
pub struct NewPoliceReport {
    pub date: NaiveDate,
    pub report_type: ReportType,
    pub responsible: String,
    pub unit: String,
    pub subject: String,
    pub description: String,
    pub recommendations: String,
    pub attachments: String,
}

pub fn generate_report(new_report: NewPoliceReport) -> PoliceReport {
    let sequence = rand::thread_rng().gen_range(0..1000);

    PoliceReport {
        number: build_report_number(new_report.date.year(), sequence),
        date: new_report.date,
        report_type: new_report.report_type,
        responsible: new_report.responsible,
        unit: new_report.unit,
        subject: new_report.subject,
        description: new_report.description,
        recommendations: new_report.recommendations,
        attachments: new_report.attachments,
    }
}
