use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use super::filter::{self, Listing};
use crate::models::{
    pet::Pet,
    service::{Appointment, AppointmentStatus, Service, ServiceAvailability, ServiceSpecies},
};

const SURGERY_CATEGORY: &str = "Cirugías";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ServiceQuery {
    #[serde(default)]
    pub search: String,
    #[serde(default, deserialize_with = "filter::category_selector")]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "filter::selector")]
    pub species: Option<ServiceSpecies>,
    #[serde(default)]
    pub preview: bool,
}

/// A service for `ambos` is compatible with any selected species
pub fn species_matches(selector: Option<&ServiceSpecies>, species: ServiceSpecies) -> bool {
    species == ServiceSpecies::Ambos || filter::matches_selector(selector, &species)
}

pub fn filter_services(services: Vec<Service>, query: &ServiceQuery) -> Vec<Service> {
    services
        .into_iter()
        .filter(|s| {
            filter::matches_query(&query.search, &[&s.name, &s.description, &s.veterinarian])
                && filter::matches_category(query.category.as_ref(), &s.category)
                && species_matches(query.species.as_ref(), s.species)
        })
        .collect()
}

#[derive(Debug, Default, Serialize, Clone, PartialEq)]
pub struct ServiceStats {
    pub total: usize,
    pub available: usize,
    pub surgeries: usize,
    pub scheduled_appointments: usize,
}

pub fn service_stats(services: &[Service], appointments: &[Appointment]) -> ServiceStats {
    ServiceStats {
        total: services.len(),
        available: services
            .iter()
            .filter(|s| s.availability == ServiceAvailability::Disponible)
            .count(),
        surgeries: services
            .iter()
            .filter(|s| s.category == SURGERY_CATEGORY)
            .count(),
        scheduled_appointments: appointments
            .iter()
            .filter(|a| a.status == AppointmentStatus::Programada)
            .count(),
    }
}

/// Distinct categories in fixture order, used to build the selector
pub fn service_categories(services: &[Service]) -> Vec<String> {
    let mut categories: Vec<String> = Vec::new();
    for service in services {
        if !categories.contains(&service.category) {
            categories.push(service.category.clone());
        }
    }
    categories
}

#[derive(Debug, Serialize)]
pub struct ServicesPage {
    pub services: Listing<Service>,
    pub categories: Vec<String>,
    pub stats: ServiceStats,
}

pub fn build_services_page(
    services: Vec<Service>,
    appointments: &[Appointment],
    query: &ServiceQuery,
) -> ServicesPage {
    let stats = service_stats(&services, appointments);
    let categories = service_categories(&services);

    ServicesPage {
        services: Listing::new(filter_services(services, query), query.preview),
        categories,
        stats,
    }
}

/// Validated appointment request
#[derive(Debug, Clone)]
pub struct NewAppointment {
    pub service_id: i64,
    pub pet_id: i64,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub notes: Option<String>,
}

/// Schedules an appointment, price and vet come from the service
pub fn book_appointment(
    new_appointment: NewAppointment,
    services: &[Service],
    pets: &[Pet],
    existing: &[Appointment],
) -> anyhow::Result<Appointment> {
    let service = services
        .iter()
        .find(|s| s.id == new_appointment.service_id)
        .ok_or_else(|| anyhow::anyhow!("service {} not found", new_appointment.service_id))?;

    if service.availability == ServiceAvailability::NoDisponible {
        anyhow::bail!("service {} is not available", service.name)
    }

    let pet = pets
        .iter()
        .find(|p| p.id == new_appointment.pet_id)
        .ok_or_else(|| anyhow::anyhow!("pet {} not found", new_appointment.pet_id))?;

    Ok(Appointment {
        id: existing.iter().map(|a| a.id).max().unwrap_or_default() + 1,
        service_id: service.id,
        service_name: service.name.clone(),
        pet_name: pet.name.clone(),
        owner_name: pet.owner.clone(),
        date: new_appointment.date,
        time: new_appointment.time,
        veterinarian: service.veterinarian.clone(),
        status: AppointmentStatus::Programada,
        notes: new_appointment.notes,
        price: service.price,
    })
}
