use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use validator::{Validate, ValidationErrors};

use super::{
    FieldError, clean_text, ensure, finish, finish_nested, parse_enum, rule_errors, trimmed,
};
use crate::{api, models};

/// `25.5 kg`, `300g`
pub static WEIGHT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+(\.\d+)?\s*(kg|g)$").unwrap());

/// 15 uppercase alphanumerics
pub static MICROCHIP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z0-9]{15}$").unwrap());

/// `+57 300-123-4567`
pub static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+\d{1,3}\s\d{3}-\d{3}-\d{4}$").unwrap());

#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct PetForm {
    #[serde(deserialize_with = "trimmed")]
    #[validate(length(
        min = 2,
        max = 50,
        message = "El nombre debe tener entre 2 y 50 caracteres"
    ))]
    pub name: String,
    pub species: String,
    #[serde(deserialize_with = "trimmed")]
    #[validate(length(
        min = 2,
        max = 100,
        message = "La raza debe tener entre 2 y 100 caracteres"
    ))]
    pub breed: String,
    #[serde(deserialize_with = "trimmed")]
    #[validate(length(min = 1, message = "La edad es obligatoria"))]
    pub age: String,
    #[serde(deserialize_with = "trimmed")]
    #[validate(regex(path = *WEIGHT_RE, message = "Formato de peso inválido (ej: 25.5 kg)"))]
    pub weight: String,
    pub owner: String,
    #[validate(range(min = 1, message = "ID del dueño debe ser positivo"))]
    pub owner_id: i64,
    #[serde(deserialize_with = "trimmed")]
    #[validate(regex(path = *PHONE_RE, message = "Formato de teléfono inválido (+57 300-123-4567)"))]
    pub phone: String,
    #[serde(deserialize_with = "trimmed")]
    #[validate(regex(
        path = *MICROCHIP_RE,
        message = "El microchip debe tener 15 caracteres alfanuméricos"
    ))]
    pub microchip: String,
    pub status: String,
    pub last_visit: Option<NaiveDate>,
    pub next_vaccine: Option<NaiveDate>,
}

impl PetForm {
    pub fn validate(self, today: NaiveDate) -> Result<models::pet::NewPet, Vec<FieldError>> {
        let mut errors = rule_errors(&self);

        let species = parse_enum::<models::pet::Species>(&self.species);
        ensure(
            &mut errors,
            species.is_some(),
            "species",
            "Selecciona una especie válida",
        );

        let status = parse_enum::<models::pet::PetStatus>(&self.status);
        ensure(&mut errors, status.is_some(), "status", "Estado inválido");

        finish(
            errors,
            models::pet::NewPet {
                name: clean_text(&self.name),
                species: species.unwrap_or_default(),
                breed: clean_text(&self.breed),
                age: clean_text(&self.age),
                weight: self.weight,
                owner: clean_text(&self.owner),
                owner_id: self.owner_id,
                phone: self.phone,
                status: status.unwrap_or_default(),
                microchip: self.microchip,
                last_visit: self.last_visit.unwrap_or(today),
                next_vaccine: self.next_vaccine.unwrap_or(today),
                photo: None,
            },
        )
    }
}

#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AppointmentType {
    Consulta,
    Vacunacion,
    Cirugia,
    Revision,
    Emergencia,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct AppointmentForm {
    #[validate(range(min = 1, message = "ID de servicio inválido"))]
    pub service_id: i64,
    #[validate(range(min = 1, message = "ID de mascota inválido"))]
    pub pet_id: i64,
    #[validate(range(min = 1, message = "ID de veterinario inválido"))]
    pub vet_id: i64,
    #[serde(rename = "type")]
    pub appointment_type: String,
    pub date: Option<NaiveDate>,
    pub time: Option<NaiveTime>,
    /// Minutes
    #[validate(range(
        min = 15,
        max = 480,
        message = "La duración debe estar entre 15 minutos y 8 horas"
    ))]
    pub duration: u32,
    #[validate(length(max = 500, message = "Las notas no pueden superar los 500 caracteres"))]
    pub notes: Option<String>,
}

impl AppointmentForm {
    pub fn validate(
        self,
        now: NaiveDateTime,
    ) -> Result<api::service::NewAppointment, Vec<FieldError>> {
        let mut errors = rule_errors(&self);

        let scheduled_at = self
            .date
            .map(|d| d.and_time(self.time.unwrap_or_default()));
        ensure(
            &mut errors,
            scheduled_at.is_some_and(|at| at > now),
            "date",
            "La fecha debe ser futura",
        );
        ensure(
            &mut errors,
            parse_enum::<AppointmentType>(&self.appointment_type).is_some(),
            "type",
            "Tipo de cita inválido",
        );

        finish(
            errors,
            api::service::NewAppointment {
                service_id: self.service_id,
                pet_id: self.pet_id,
                date: self.date.unwrap_or_default(),
                time: self.time.unwrap_or_default(),
                notes: self
                    .notes
                    .as_deref()
                    .map(clean_text)
                    .filter(|n| !n.is_empty()),
            },
        )
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct MedicationForm {
    #[serde(deserialize_with = "trimmed")]
    #[validate(length(min = 2, message = "Nombre del medicamento obligatorio"))]
    pub name: String,
    #[serde(deserialize_with = "trimmed")]
    #[validate(length(min = 1, message = "Dosis obligatoria"))]
    pub dosage: String,
    #[serde(deserialize_with = "trimmed")]
    #[validate(length(min = 1, message = "Frecuencia obligatoria"))]
    pub frequency: String,
    /// RFC 3339
    pub start_date: String,
    pub end_date: Option<String>,
    pub instructions: String,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct MedicalRecordForm {
    #[validate(range(min = 1, message = "ID de mascota inválido"))]
    pub pet_id: i64,
    #[serde(deserialize_with = "trimmed")]
    #[validate(length(
        min = 5,
        max = 1000,
        message = "El diagnóstico debe tener entre 5 y 1000 caracteres"
    ))]
    pub diagnosis: String,
    #[serde(deserialize_with = "trimmed")]
    #[validate(length(
        min = 5,
        max = 1000,
        message = "El tratamiento debe tener entre 5 y 1000 caracteres"
    ))]
    pub treatment: String,
    #[validate(range(
        exclusive_min = 0.0,
        max = 200.0,
        message = "El peso debe ser positivo, máximo 200kg"
    ))]
    pub weight: f64,
    #[validate(range(
        min = 35.0,
        max = 45.0,
        message = "La temperatura debe estar entre 35°C y 45°C"
    ))]
    pub temperature: f64,
    #[validate(length(max = 20, message = "Máximo 20 alergias"))]
    pub allergies: Vec<String>,
    #[validate(length(max = 10, message = "Máximo 10 medicamentos activos"))]
    pub medications: Vec<MedicationForm>,
}

/// Validated visit entry of a medical record
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MedicalRecordEntry {
    pub pet_id: i64,
    pub diagnosis: String,
    pub treatment: String,
    pub weight: f64,
    pub temperature: f64,
    pub allergies: Vec<String>,
    pub medications: Vec<models::pet::Medication>,
}

fn parse_rfc3339_date(value: &str) -> Option<NaiveDate> {
    DateTime::parse_from_rfc3339(value)
        .ok()
        .map(|dt| dt.date_naive())
}

impl MedicationForm {
    fn into_medication(self, id: i64) -> (models::pet::Medication, ValidationErrors) {
        let mut errors = rule_errors(&self);

        let start_date = parse_rfc3339_date(&self.start_date);
        ensure(
            &mut errors,
            start_date.is_some(),
            "start_date",
            "Fecha de inicio inválida",
        );

        let end_date = self.end_date.as_deref().map(parse_rfc3339_date);
        ensure(
            &mut errors,
            end_date.is_none_or(|d| d.is_some()),
            "end_date",
            "Fecha de fin inválida",
        );

        let medication = models::pet::Medication {
            id,
            name: clean_text(&self.name),
            dosage: clean_text(&self.dosage),
            frequency: clean_text(&self.frequency),
            start_date: start_date.unwrap_or_default(),
            end_date: end_date.flatten(),
            instructions: clean_text(&self.instructions),
        };

        (medication, errors)
    }
}

impl MedicalRecordForm {
    pub fn validate(self) -> Result<MedicalRecordEntry, Vec<FieldError>> {
        let mut parts = vec![("", rule_errors(&self))];

        let mut medications = Vec::with_capacity(self.medications.len());
        for (idx, medication) in self.medications.into_iter().enumerate() {
            let (medication, errors) = medication.into_medication(idx as i64 + 1);
            parts.push(("medications.", errors));
            medications.push(medication);
        }

        finish_nested(
            &parts,
            MedicalRecordEntry {
                pet_id: self.pet_id,
                diagnosis: clean_text(&self.diagnosis),
                treatment: clean_text(&self.treatment),
                weight: self.weight,
                temperature: self.temperature,
                allergies: self.allergies.iter().map(|a| clean_text(a)).collect(),
                medications,
            },
        )
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct VaccinationForm {
    #[validate(range(min = 1, message = "ID de mascota inválido"))]
    pub pet_id: i64,
    #[serde(deserialize_with = "trimmed")]
    #[validate(length(min = 2, message = "Nombre de la vacuna obligatorio"))]
    pub name: String,
    pub date: Option<NaiveDate>,
    pub next_dose: Option<NaiveDate>,
    #[serde(deserialize_with = "trimmed")]
    #[validate(length(min = 3, message = "Número de lote obligatorio"))]
    pub batch_number: String,
    #[validate(range(min = 1, message = "ID de veterinario inválido"))]
    pub vet_id: i64,
    pub veterinarian: String,
}

impl VaccinationForm {
    pub fn validate(
        self,
        today: NaiveDate,
    ) -> Result<api::vaccination::NewVaccination, Vec<FieldError>> {
        let mut errors = rule_errors(&self);

        ensure(
            &mut errors,
            self.date.is_some_and(|d| d <= today),
            "date",
            "La fecha no puede ser futura",
        );
        ensure(
            &mut errors,
            self.next_dose.is_some_and(|d| d > today),
            "next_dose",
            "La próxima dosis debe ser futura",
        );

        finish(
            errors,
            api::vaccination::NewVaccination {
                pet_id: self.pet_id,
                vaccine: clean_text(&self.name),
                applied_date: self.date.unwrap_or(today),
                next_due: self.next_dose.unwrap_or(today),
                lot: clean_text(&self.batch_number),
                veterinarian: clean_text(&self.veterinarian),
            },
        )
    }
}
