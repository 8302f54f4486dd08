//! In-memory fixtures standing in for the clinic database tables.
//!
//! Each function returns a fresh owned copy, callers are free to filter,
//! sort or mutate it.

mod billing;
mod clinic;
mod operations;

pub use billing::{invoices, products};
pub use clinic::{owners, pets, vaccinations};
pub use operations::{
    alert_events, analyses, appointments, devices, medicines, seizures, services, species_alerts,
};

use chrono::{NaiveDate, NaiveTime};

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn hm(hour: u32, min: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, min, 0).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_every_pet_has_a_known_owner() {
        let owner_ids = owners().into_iter().map(|o| o.id).collect::<HashSet<_>>();

        assert!(pets().iter().all(|p| owner_ids.contains(&p.owner_id)));
    }

    #[test]
    fn test_every_invoice_has_a_known_owner() {
        let owner_ids = owners().into_iter().map(|o| o.id).collect::<HashSet<_>>();

        assert!(invoices().iter().all(|i| owner_ids.contains(&i.owner_id)));
    }

    #[test]
    fn test_fixture_ids_are_unique() {
        let pet_ids = pets().into_iter().map(|p| p.id).collect::<HashSet<_>>();
        let service_ids = services().into_iter().map(|s| s.id).collect::<HashSet<_>>();

        assert_eq!(pet_ids.len(), pets().len());
        assert_eq!(service_ids.len(), services().len());
    }

    #[test]
    fn test_appointments_reference_services() {
        let service_ids = services().into_iter().map(|s| s.id).collect::<HashSet<_>>();

        assert!(
            appointments()
                .iter()
                .all(|a| service_ids.contains(&a.service_id))
        );
    }
}
