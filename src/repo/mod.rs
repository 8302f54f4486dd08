pub mod http;

use crate::{api::filter, consts, models};
use async_trait::async_trait;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

/// Failures of the write paths. Read paths never fail, they log and fall
/// back to an empty value
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
pub enum RepoError {
    #[display("Error creating pet")]
    CreatePet,
    #[display("Error updating pet")]
    UpdatePet,
    #[display("Error deleting pet")]
    DeletePet,
    #[display("Error uploading photo")]
    UploadPhoto,
}

/// Query params of the pets listing, absent values are not sent
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct PetListParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "filter::selector"
    )]
    pub status: Option<models::pet::PetStatus>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "filter::selector"
    )]
    pub species: Option<models::pet::Species>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct PetPage {
    pub pets: Vec<models::pet::Pet>,
    pub total: u64,
    pub page: u32,
    pub limit: u32,
}

impl Default for PetPage {
    fn default() -> Self {
        Self {
            pets: Vec::new(),
            total: 0,
            page: consts::DEFAULT_PAGE,
            limit: consts::DEFAULT_PAGE_LIMIT,
        }
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PetRepository {
    async fn create(&self, pet: &models::pet::NewPet) -> anyhow::Result<models::pet::Pet>;

    /// `None` when the pet does not exist or the api failed
    async fn find_by_id(&self, id: i64) -> Option<models::pet::Pet>;

    async fn find_by_owner(&self, owner_id: i64) -> Vec<models::pet::Pet>;

    async fn find_all(&self, params: &PetListParams) -> PetPage;

    async fn update(
        &self,
        id: i64,
        patch: &models::pet::PetPatch,
    ) -> anyhow::Result<models::pet::Pet>;

    async fn delete(&self, id: i64) -> anyhow::Result<()>;

    async fn get_medical_record(&self, pet_id: i64) -> Option<models::pet::MedicalRecord>;

    /// Returns the url of the stored photo
    async fn upload_photo(&self, pet_id: i64, photo: models::Pic) -> anyhow::Result<String>;
}

pub type ImplPetRepository = Box<dyn PetRepository + Send + Sync>;
