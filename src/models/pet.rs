use chrono::NaiveDate;
use derive_more::Display;
use serde::{Deserialize, Serialize};

#[derive(Debug, Display, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Species {
    #[default]
    #[display("perro")]
    Perro,
    #[display("gato")]
    Gato,
    #[display("otro")]
    Otro,
}

#[derive(Debug, Display, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PetStatus {
    #[default]
    #[display("saludable")]
    Saludable,
    #[display("tratamiento")]
    Tratamiento,
    #[display("cita_pendiente")]
    CitaPendiente,
}

/// Pet as exchanged with the pets REST api
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Pet {
    pub id: i64,
    pub name: String,
    pub species: Species,
    pub breed: String,
    /// Free text, e.g. "2 años 4 meses"
    pub age: String,
    /// Free text with unit, e.g. "28.5 kg"
    pub weight: String,
    pub owner: String,
    pub owner_id: i64,
    pub phone: String,
    pub status: PetStatus,
    pub microchip: String,
    pub last_visit: NaiveDate,
    pub next_vaccine: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
}

/// Pet payload without id, sent on creation
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewPet {
    pub name: String,
    pub species: Species,
    pub breed: String,
    pub age: String,
    pub weight: String,
    pub owner: String,
    pub owner_id: i64,
    pub phone: String,
    pub status: PetStatus,
    pub microchip: String,
    pub last_visit: NaiveDate,
    pub next_vaccine: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
}

impl NewPet {
    pub fn with_id(self, id: i64) -> Pet {
        Pet {
            id,
            name: self.name,
            species: self.species,
            breed: self.breed,
            age: self.age,
            weight: self.weight,
            owner: self.owner,
            owner_id: self.owner_id,
            phone: self.phone,
            status: self.status,
            microchip: self.microchip,
            last_visit: self.last_visit,
            next_vaccine: self.next_vaccine,
            photo: self.photo,
        }
    }
}

/// Partial update, only the present fields are sent
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PetPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub species: Option<Species>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub breed: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<PetStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub microchip: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_visit: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_vaccine: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
}

impl Pet {
    /// Overwrites the fields present in `patch`
    pub fn merge(&mut self, patch: PetPatch) {
        if let Some(v) = patch.name {
            self.name = v;
        }
        if let Some(v) = patch.species {
            self.species = v;
        }
        if let Some(v) = patch.breed {
            self.breed = v;
        }
        if let Some(v) = patch.age {
            self.age = v;
        }
        if let Some(v) = patch.weight {
            self.weight = v;
        }
        if let Some(v) = patch.owner {
            self.owner = v;
        }
        if let Some(v) = patch.owner_id {
            self.owner_id = v;
        }
        if let Some(v) = patch.phone {
            self.phone = v;
        }
        if let Some(v) = patch.status {
            self.status = v;
        }
        if let Some(v) = patch.microchip {
            self.microchip = v;
        }
        if let Some(v) = patch.last_visit {
            self.last_visit = v;
        }
        if let Some(v) = patch.next_vaccine {
            self.next_vaccine = v;
        }
        if patch.photo.is_some() {
            self.photo = patch.photo;
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Visit {
    pub id: i64,
    pub date: NaiveDate,
    pub diagnosis: String,
    pub treatment: String,
    #[serde(default)]
    pub attachments: Vec<String>,
    pub vet_id: i64,
    pub vet_name: String,
    pub weight: f64,
    pub temperature: f64,
    #[serde(default)]
    pub notes: String,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VaccinationEntry {
    pub id: i64,
    pub name: String,
    pub date: NaiveDate,
    pub next_dose: NaiveDate,
    pub batch_number: String,
    pub vet_id: i64,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Medication {
    pub id: i64,
    pub name: String,
    pub dosage: String,
    pub frequency: String,
    pub start_date: NaiveDate,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub instructions: String,
}

/// Medical record sub-resource of a pet
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MedicalRecord {
    pub id: i64,
    pub pet_id: i64,
    #[serde(default)]
    pub visits: Vec<Visit>,
    #[serde(default)]
    pub allergies: Vec<String>,
    #[serde(default)]
    pub vaccinations: Vec<VaccinationEntry>,
    #[serde(default)]
    pub current_medications: Vec<Medication>,
}
