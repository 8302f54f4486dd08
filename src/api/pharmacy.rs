use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::filter::{self, Listing};
use crate::{
    consts,
    models::pharmacy::{Medicine, StockLevel},
};

pub fn stock_level(medicine: &Medicine) -> StockLevel {
    let stock = Decimal::from(medicine.stock);
    let min_stock = Decimal::from(medicine.min_stock);

    if stock <= min_stock {
        StockLevel::Bajo
    } else if stock <= min_stock * consts::STOCK_MEDIUM_FACTOR {
        StockLevel::Medio
    } else {
        StockLevel::Normal
    }
}

/// Expires between today and the expiry window, both included
pub fn is_expiring(medicine: &Medicine, today: NaiveDate) -> bool {
    let days = medicine.expiry_date.signed_duration_since(today).num_days();
    (0..=consts::MEDICINE_EXPIRY_WINDOW_DAYS).contains(&days)
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MedicineQuery {
    #[serde(default)]
    pub search: String,
    #[serde(default, deserialize_with = "filter::selector")]
    pub stock_level: Option<StockLevel>,
    #[serde(default)]
    pub preview: bool,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MedicineView {
    #[serde(flatten)]
    pub medicine: Medicine,
    pub stock_level: StockLevel,
    pub expiring: bool,
}

impl MedicineView {
    pub fn new(medicine: Medicine, today: NaiveDate) -> Self {
        Self {
            stock_level: stock_level(&medicine),
            expiring: is_expiring(&medicine, today),
            medicine,
        }
    }
}

#[derive(Debug, Default, Serialize, Clone, PartialEq)]
pub struct PharmacyStats {
    pub total: usize,
    pub low_stock: usize,
    pub expiring: usize,
    /// Σ stock × price
    pub stock_value: Decimal,
}

pub fn pharmacy_stats(medicines: &[Medicine], today: NaiveDate) -> PharmacyStats {
    PharmacyStats {
        total: medicines.len(),
        low_stock: medicines
            .iter()
            .filter(|m| stock_level(m) == StockLevel::Bajo)
            .count(),
        expiring: medicines.iter().filter(|m| is_expiring(m, today)).count(),
        stock_value: medicines
            .iter()
            .map(|m| Decimal::from(m.stock) * m.price)
            .sum(),
    }
}

#[derive(Debug, Serialize)]
pub struct PharmacyPage {
    pub medicines: Listing<MedicineView>,
    pub stats: PharmacyStats,
}

pub fn build_pharmacy_page(
    medicines: Vec<Medicine>,
    query: &MedicineQuery,
    today: NaiveDate,
) -> PharmacyPage {
    let stats = pharmacy_stats(&medicines, today);

    let filtered = medicines
        .into_iter()
        .map(|medicine| MedicineView::new(medicine, today))
        .filter(|v| {
            filter::matches_query(
                &query.search,
                &[
                    &v.medicine.name,
                    &v.medicine.active_ingredient,
                    &v.medicine.category,
                ],
            ) && filter::matches_selector(query.stock_level.as_ref(), &v.stock_level)
        })
        .collect();

    PharmacyPage {
        medicines: Listing::new(filtered, query.preview),
        stats,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn medicine(stock: u32, min_stock: u32) -> Medicine {
        Medicine {
            stock,
            min_stock,
            ..Default::default()
        }
    }

    #[test]
    fn test_stock_level_thresholds() {
        assert_eq!(stock_level(&medicine(10, 10)), StockLevel::Bajo);
        assert_eq!(stock_level(&medicine(0, 0)), StockLevel::Bajo);
        assert_eq!(stock_level(&medicine(15, 10)), StockLevel::Medio);
        assert_eq!(stock_level(&medicine(16, 10)), StockLevel::Normal);
        assert_eq!(stock_level(&medicine(25, 20)), StockLevel::Medio);
    }

    #[test]
    fn test_is_expiring_window() {
        let today = date(2025, 6, 1);
        let expiring_on = |expiry_date| Medicine {
            expiry_date,
            ..Default::default()
        };

        assert!(is_expiring(&expiring_on(date(2025, 6, 1)), today));
        assert!(is_expiring(&expiring_on(date(2025, 8, 30)), today));
        assert!(!is_expiring(&expiring_on(date(2025, 8, 31)), today));
        assert!(!is_expiring(&expiring_on(date(2025, 5, 31)), today));
    }

    #[test]
    fn test_pharmacy_stats() {
        let stats = pharmacy_stats(&fixtures::medicines(), date(2025, 6, 1));

        assert_eq!(stats.total, 3);
        assert_eq!(stats.low_stock, 1);
        assert_eq!(stats.expiring, 1);
        assert_eq!(stats.stock_value, dec!(2401.25));
    }

    #[test]
    fn test_stock_level_selector() {
        let query = MedicineQuery {
            stock_level: Some(StockLevel::Bajo),
            ..Default::default()
        };
        let page = build_pharmacy_page(fixtures::medicines(), &query, date(2025, 6, 1));

        assert_eq!(page.medicines.total, 1);
        assert_eq!(page.medicines.items[0].medicine.name, "Metacam 5mg/ml");
    }

    #[test]
    fn test_search_active_ingredient() {
        let query = MedicineQuery {
            search: "fipronil".into(),
            ..Default::default()
        };
        let page = build_pharmacy_page(fixtures::medicines(), &query, date(2025, 6, 1));

        assert_eq!(page.medicines.items[0].stock_level, StockLevel::Medio);
    }
}
