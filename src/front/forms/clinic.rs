//! Owner, analysis, service, medicine and unified registration forms

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidateEmail, ValidationErrors};

use super::{FieldError, clean_text, ensure, finish, finish_nested, parse_enum, rule_errors, trimmed};
use crate::models;

fn next_id(ids: impl Iterator<Item = i64>) -> i64 {
    ids.max().unwrap_or_default() + 1
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct OwnerForm {
    #[serde(deserialize_with = "trimmed")]
    #[validate(length(min = 1, message = "Campo obligatorio"))]
    pub name: String,
    #[serde(deserialize_with = "trimmed")]
    pub national_id: String,
    #[serde(deserialize_with = "trimmed")]
    #[validate(length(min = 1, message = "Campo obligatorio"))]
    pub phone: String,
    #[serde(deserialize_with = "trimmed")]
    pub email: String,
    #[serde(deserialize_with = "trimmed")]
    #[validate(length(min = 1, message = "Campo obligatorio"))]
    pub address: String,
    pub occupation: String,
    pub notes: String,
}

impl OwnerForm {
    fn check(&self) -> ValidationErrors {
        let mut errors = rule_errors(self);
        ensure(
            &mut errors,
            self.email.is_empty() || self.email.validate_email(),
            "email",
            "Email inválido",
        );

        errors
    }

    fn into_owner(self, existing: &[models::owner::Owner], today: NaiveDate) -> models::owner::Owner {
        models::owner::Owner {
            id: next_id(existing.iter().map(|o| o.id)),
            name: clean_text(&self.name),
            national_id: clean_text(&self.national_id),
            phone: clean_text(&self.phone),
            email: clean_text(&self.email),
            address: clean_text(&self.address),
            occupation: clean_text(&self.occupation),
            last_visit: today,
        }
    }

    pub fn validate(
        self,
        existing: &[models::owner::Owner],
        today: NaiveDate,
    ) -> Result<models::owner::Owner, Vec<FieldError>> {
        let errors = self.check();

        finish(errors, self.into_owner(existing, today))
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct AnalysisForm {
    #[serde(deserialize_with = "trimmed")]
    #[validate(length(min = 1, message = "Campo obligatorio"))]
    pub pet_name: String,
    #[serde(deserialize_with = "trimmed")]
    #[validate(length(min = 1, message = "Campo obligatorio"))]
    pub owner_name: String,
    pub test_type: String,
    pub veterinarian: String,
    pub laboratory: String,
    pub priority: String,
    pub cost: Option<Decimal>,
    pub notes: String,
}

impl AnalysisForm {
    pub fn validate(
        self,
        existing: &[models::laboratory::Analysis],
        today: NaiveDate,
    ) -> Result<models::laboratory::Analysis, Vec<FieldError>> {
        let mut errors = rule_errors(&self);

        let priority = if self.priority.trim().is_empty() {
            Some(models::laboratory::AnalysisPriority::Normal)
        } else {
            parse_enum(&self.priority)
        };
        ensure(&mut errors, priority.is_some(), "priority", "Prioridad inválida");

        let cost = self.cost.unwrap_or_default();
        ensure(
            &mut errors,
            !cost.is_sign_negative(),
            "cost",
            "El costo no puede ser negativo",
        );

        finish(
            errors,
            models::laboratory::Analysis {
                id: next_id(existing.iter().map(|a| a.id)),
                pet_name: clean_text(&self.pet_name),
                owner_name: clean_text(&self.owner_name),
                test_type: clean_text(&self.test_type),
                requested_at: today,
                result_at: None,
                status: models::laboratory::AnalysisStatus::Pendiente,
                veterinarian: clean_text(&self.veterinarian),
                laboratory: clean_text(&self.laboratory),
                priority: priority.unwrap_or_default(),
                cost,
            },
        )
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct ServiceForm {
    #[serde(deserialize_with = "trimmed")]
    #[validate(length(min = 1, message = "Campo obligatorio"))]
    pub name: String,
    pub category: String,
    pub description: String,
    pub price: Option<Decimal>,
    pub duration_minutes: u32,
    pub veterinarian: String,
    pub species: String,
    pub requires_anesthesia: bool,
}

impl ServiceForm {
    pub fn validate(
        self,
        existing: &[models::service::Service],
    ) -> Result<models::service::Service, Vec<FieldError>> {
        let mut errors = rule_errors(&self);
        ensure(
            &mut errors,
            self.price.is_some_and(|p| !p.is_sign_negative()),
            "price",
            "Precio inválido",
        );

        let species = if self.species.trim().is_empty() {
            Some(models::service::ServiceSpecies::Ambos)
        } else {
            parse_enum(&self.species)
        };
        ensure(
            &mut errors,
            species.is_some(),
            "species",
            "Especie compatible inválida",
        );

        finish(
            errors,
            models::service::Service {
                id: next_id(existing.iter().map(|s| s.id)),
                name: clean_text(&self.name),
                category: clean_text(&self.category),
                description: clean_text(&self.description),
                price: self.price.unwrap_or_default(),
                duration_minutes: self.duration_minutes,
                veterinarian: clean_text(&self.veterinarian),
                species: species.unwrap_or_default(),
                requires_anesthesia: self.requires_anesthesia,
                availability: models::service::ServiceAvailability::Disponible,
                next_availability: None,
            },
        )
    }
}

/// Pharmacy product
#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct MedicineForm {
    #[serde(deserialize_with = "trimmed")]
    #[validate(length(min = 1, message = "Campo obligatorio"))]
    pub name: String,
    pub category: String,
    pub active_ingredient: String,
    pub description: String,
    pub price: Option<Decimal>,
    #[validate(required(message = "Campo obligatorio"))]
    pub stock: Option<u32>,
    pub min_stock: u32,
    pub lot: String,
    #[validate(required(message = "Fecha de vencimiento obligatoria"))]
    pub expiry_date: Option<NaiveDate>,
    pub supplier: String,
    pub species: Vec<String>,
}

impl MedicineForm {
    pub fn validate(
        self,
        existing: &[models::pharmacy::Medicine],
    ) -> Result<models::pharmacy::Medicine, Vec<FieldError>> {
        let mut errors = rule_errors(&self);
        ensure(
            &mut errors,
            self.price.is_some_and(|p| !p.is_sign_negative()),
            "price",
            "Precio inválido",
        );

        let species = self
            .species
            .iter()
            .map(|s| parse_enum::<models::pet::Species>(s))
            .collect::<Option<Vec<_>>>();
        ensure(
            &mut errors,
            species.is_some(),
            "species",
            "Selecciona una especie válida",
        );

        finish(
            errors,
            models::pharmacy::Medicine {
                id: next_id(existing.iter().map(|m| m.id)),
                name: clean_text(&self.name),
                active_ingredient: clean_text(&self.active_ingredient),
                stock: self.stock.unwrap_or_default(),
                min_stock: self.min_stock,
                price: self.price.unwrap_or_default(),
                lot: clean_text(&self.lot),
                expiry_date: self.expiry_date.unwrap_or_default(),
                supplier: clean_text(&self.supplier),
                category: clean_text(&self.category),
                species: species.unwrap_or_default(),
            },
        )
    }
}

/// Pet tab of the unified registration
#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct RegistrationPetForm {
    #[serde(deserialize_with = "trimmed")]
    #[validate(length(min = 1, message = "Campo obligatorio"))]
    pub name: String,
    pub species: String,
    pub breed: String,
    pub age: String,
    pub weight: String,
    pub color: String,
    pub sex: String,
    pub notes: String,
    pub microchip: String,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct RegistrationForm {
    pub owner: OwnerForm,
    pub pet: RegistrationPetForm,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Registration {
    pub owner: models::owner::Owner,
    pub pet: models::pet::Pet,
}

impl RegistrationForm {
    /// Registers an owner together with a first pet
    pub fn validate(
        self,
        owners: &[models::owner::Owner],
        pets: &[models::pet::Pet],
        today: NaiveDate,
    ) -> Result<Registration, Vec<FieldError>> {
        let mut owner_errors = self.owner.check();
        ensure(
            &mut owner_errors,
            !self.owner.national_id.is_empty(),
            "national_id",
            super::REQUIRED_FIELD_MSG,
        );

        let mut pet_errors = rule_errors(&self.pet);
        let species = if self.pet.species.trim().is_empty() {
            Some(models::pet::Species::Otro)
        } else {
            parse_enum(&self.pet.species)
        };
        ensure(
            &mut pet_errors,
            species.is_some(),
            "species",
            "Selecciona una especie válida",
        );

        let owner = self.owner.into_owner(owners, today);
        let pet = models::pet::Pet {
            id: next_id(pets.iter().map(|p| p.id)),
            name: clean_text(&self.pet.name),
            species: species.unwrap_or_default(),
            breed: clean_text(&self.pet.breed),
            age: clean_text(&self.pet.age),
            weight: clean_text(&self.pet.weight),
            owner: owner.name.clone(),
            owner_id: owner.id,
            phone: owner.phone.clone(),
            status: models::pet::PetStatus::Saludable,
            microchip: clean_text(&self.pet.microchip),
            last_visit: today,
            next_vaccine: today,
            photo: None,
        };

        finish_nested(
            &[("", owner_errors), ("pet.", pet_errors)],
            Registration { owner, pet },
        )
    }
}
