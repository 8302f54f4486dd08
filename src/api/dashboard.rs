use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use super::{invoice, pharmacy, vaccination};
use crate::models::{
    invoice::Invoice,
    iot::IotDevice,
    laboratory::{Analysis, AnalysisStatus},
    owner::Owner,
    pet::Pet,
    pharmacy::{Medicine, StockLevel},
    vaccination::{Vaccination, VaccinationStatus},
};

/// Everything the landing page needs, borrowed from the fixtures
pub struct ClinicSnapshot<'a> {
    pub pets: &'a [Pet],
    pub owners: &'a [Owner],
    pub vaccinations: &'a [Vaccination],
    pub analyses: &'a [Analysis],
    pub medicines: &'a [Medicine],
    pub devices: &'a [IotDevice],
    pub invoices: &'a [Invoice],
}

#[derive(Debug, Default, Serialize, Clone, PartialEq)]
pub struct DashboardSummary {
    pub pets: usize,
    pub owners: usize,
    pub upcoming_vaccinations: usize,
    pub pending_analyses: usize,
    pub low_stock_medicines: usize,
    pub online_devices: usize,
    pub revenue: Decimal,
}

#[derive(Debug, Serialize)]
pub struct DashboardPage {
    pub summary: DashboardSummary,
    /// Upcoming and overdue vaccinations, closest due date first
    pub vaccine_alerts: Vec<vaccination::VaccinationView>,
}

pub fn build_dashboard(snapshot: ClinicSnapshot<'_>, today: NaiveDate) -> DashboardPage {
    let mut vaccine_alerts = snapshot
        .vaccinations
        .iter()
        .cloned()
        .map(|v| vaccination::VaccinationView::new(v, today))
        .filter(|v| v.status != VaccinationStatus::Vigente)
        .collect::<Vec<_>>();
    vaccine_alerts.sort_by_key(|v| v.days_until_due);

    let summary = DashboardSummary {
        pets: snapshot.pets.len(),
        owners: snapshot.owners.len(),
        upcoming_vaccinations: vaccine_alerts
            .iter()
            .filter(|v| v.status == VaccinationStatus::Proximo)
            .count(),
        pending_analyses: snapshot
            .analyses
            .iter()
            .filter(|a| a.status == AnalysisStatus::Pendiente)
            .count(),
        low_stock_medicines: snapshot
            .medicines
            .iter()
            .filter(|m| pharmacy::stock_level(m) == StockLevel::Bajo)
            .count(),
        online_devices: snapshot.devices.iter().filter(|d| d.is_online()).count(),
        revenue: invoice::billing_stats(snapshot.invoices).revenue,
    };

    DashboardPage {
        summary,
        vaccine_alerts,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use rust_decimal_macros::dec;

    #[test]
    fn test_build_dashboard() {
        let (pets, owners, vaccinations) = (
            fixtures::pets(),
            fixtures::owners(),
            fixtures::vaccinations(),
        );
        let (analyses, medicines, devices, invoices) = (
            fixtures::analyses(),
            fixtures::medicines(),
            fixtures::devices(),
            fixtures::invoices(),
        );

        let page = build_dashboard(
            ClinicSnapshot {
                pets: &pets,
                owners: &owners,
                vaccinations: &vaccinations,
                analyses: &analyses,
                medicines: &medicines,
                devices: &devices,
                invoices: &invoices,
            },
            NaiveDate::from_ymd_opt(2024, 7, 8).unwrap(),
        );

        assert_eq!(
            page.summary,
            DashboardSummary {
                pets: 9,
                owners: 8,
                upcoming_vaccinations: 1,
                pending_analyses: 1,
                low_stock_medicines: 1,
                online_devices: 2,
                revenue: dec!(145.60),
            }
        );

        let alerts = page
            .vaccine_alerts
            .iter()
            .map(|v| (v.vaccination.pet_name.as_str(), v.days_label.as_str()))
            .collect::<Vec<_>>();
        assert_eq!(alerts, vec![("Mimi", "Vencida"), ("Buddy", "2 días")]);
    }
}
