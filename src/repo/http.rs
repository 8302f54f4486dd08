//! # Pets REST client
//!
//! [PetRepository] backed by the external pets api. Write operations
//! surface a [RepoError], reads log the failure and return an empty value.
//! There is no retry and no caching.

use anyhow::Context;
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use tracing::Instrument;

use super::{PetListParams, PetPage, PetRepository, RepoError};
use crate::{config, metric, models, utils};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PhotoUploadResponse {
    photo_url: String,
}

#[derive(Clone)]
pub struct HttpPetRepo {
    client: reqwest::Client,
    /// `<base url>/pets`
    endpoint: String,
}

impl HttpPetRepo {
    pub fn new(endpoint: impl Into<String>, timeout_secs: Option<u64>) -> anyhow::Result<Self> {
        Ok(Self {
            client: utils::build_request_client(timeout_secs)?,
            endpoint: endpoint.into(),
        })
    }

    /// Builds the client from [APP_CONFIG](config::APP_CONFIG)
    pub fn from_config() -> anyhow::Result<Self> {
        let app_config = config::APP_CONFIG
            .get()
            .context("failed to get app config")?;

        Self::new(app_config.pets_endpoint(), app_config.pets_api_timeout_secs)
    }

    fn pet_url(&self, id: i64) -> String {
        format!("{}/{id}", self.endpoint)
    }

    async fn try_find_by_id(&self, id: i64) -> anyhow::Result<Option<models::pet::Pet>> {
        let response = self.client.get(self.pet_url(id)).send().await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        Ok(Some(response.error_for_status()?.json().await?))
    }

    async fn try_find_by_owner(&self, owner_id: i64) -> anyhow::Result<Vec<models::pet::Pet>> {
        Ok(self
            .client
            .get(&self.endpoint)
            .query(&[("ownerId", owner_id)])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?)
    }

    async fn try_find_all(&self, params: &PetListParams) -> anyhow::Result<PetPage> {
        Ok(self
            .client
            .get(&self.endpoint)
            .query(params)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?)
    }

    async fn try_get_medical_record(
        &self,
        pet_id: i64,
    ) -> anyhow::Result<Option<models::pet::MedicalRecord>> {
        let response = self
            .client
            .get(format!("{}/medical-record", self.pet_url(pet_id)))
            .send()
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        Ok(Some(response.error_for_status()?.json().await?))
    }
}

/// Logs a failed read and records it in the metrics
fn log_read_failure(operation: &str, e: &anyhow::Error) {
    log::error!("pets api {operation} failed: {e:#}");
    metric::incr_pets_api_statds("read_error");
}

fn write_outcome<T>(result: anyhow::Result<T>, error: RepoError) -> anyhow::Result<T> {
    match result {
        Ok(v) => {
            metric::incr_pets_api_statds("write_ok");
            Ok(v)
        }
        Err(e) => {
            log::error!("pets api write failed: {e:#}");
            metric::incr_pets_api_statds("write_error");
            Err(e.context(error))
        }
    }
}

fn ensure_success(
    response: reqwest::Response,
    error: RepoError,
) -> anyhow::Result<reqwest::Response> {
    if !response.status().is_success() {
        anyhow::bail!("{error}: status {}", response.status())
    }

    Ok(response)
}

#[async_trait]
impl PetRepository for HttpPetRepo {
    async fn create(&self, pet: &models::pet::NewPet) -> anyhow::Result<models::pet::Pet> {
        let result: anyhow::Result<models::pet::Pet> = async {
            let response = self.client.post(&self.endpoint).json(pet).send().await?;
            Ok(ensure_success(response, RepoError::CreatePet)?.json().await?)
        }
        .instrument(logfire::span!("pets_api_create"))
        .await;

        write_outcome(result, RepoError::CreatePet)
    }

    async fn find_by_id(&self, id: i64) -> Option<models::pet::Pet> {
        self.try_find_by_id(id)
            .instrument(logfire::span!("pets_api_find_by_id"))
            .await
            .inspect_err(|e| log_read_failure("find_by_id", e))
            .unwrap_or_default()
    }

    async fn find_by_owner(&self, owner_id: i64) -> Vec<models::pet::Pet> {
        self.try_find_by_owner(owner_id)
            .instrument(logfire::span!("pets_api_find_by_owner"))
            .await
            .inspect_err(|e| log_read_failure("find_by_owner", e))
            .unwrap_or_default()
    }

    async fn find_all(&self, params: &PetListParams) -> PetPage {
        self.try_find_all(params)
            .instrument(logfire::span!("pets_api_find_all"))
            .await
            .inspect_err(|e| log_read_failure("find_all", e))
            .unwrap_or_default()
    }

    async fn update(
        &self,
        id: i64,
        patch: &models::pet::PetPatch,
    ) -> anyhow::Result<models::pet::Pet> {
        let result: anyhow::Result<models::pet::Pet> = async {
            let response = self
                .client
                .patch(self.pet_url(id))
                .json(patch)
                .send()
                .await?;
            Ok(ensure_success(response, RepoError::UpdatePet)?.json().await?)
        }
        .instrument(logfire::span!("pets_api_update"))
        .await;

        write_outcome(result, RepoError::UpdatePet)
    }

    async fn delete(&self, id: i64) -> anyhow::Result<()> {
        let result: anyhow::Result<()> = async {
            let response = self.client.delete(self.pet_url(id)).send().await?;
            ensure_success(response, RepoError::DeletePet)?;
            Ok(())
        }
        .instrument(logfire::span!("pets_api_delete"))
        .await;

        write_outcome(result, RepoError::DeletePet)
    }

    async fn get_medical_record(&self, pet_id: i64) -> Option<models::pet::MedicalRecord> {
        self.try_get_medical_record(pet_id)
            .instrument(logfire::span!("pets_api_get_medical_record"))
            .await
            .inspect_err(|e| log_read_failure("get_medical_record", e))
            .unwrap_or_default()
    }

    async fn upload_photo(&self, pet_id: i64, photo: models::Pic) -> anyhow::Result<String> {
        let result: anyhow::Result<String> = async {
            let part = reqwest::multipart::Part::bytes(photo.body)
                .file_name(photo.filename)
                .mime_str(&photo.mime_type)?;
            let form = reqwest::multipart::Form::new().part("photo", part);

            let response = self
                .client
                .post(format!("{}/photo", self.pet_url(pet_id)))
                .multipart(form)
                .send()
                .await?;

            let uploaded: PhotoUploadResponse = ensure_success(response, RepoError::UploadPhoto)?
                .json()
                .await?;

            Ok(uploaded.photo_url)
        }
        .instrument(logfire::span!("pets_api_upload_photo"))
        .await;

        write_outcome(result, RepoError::UploadPhoto)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Nothing listens on the discard port, every request is refused
    fn unreachable_repo() -> HttpPetRepo {
        HttpPetRepo::new("http://127.0.0.1:9/api/pets", Some(2)).unwrap()
    }

    #[test]
    fn test_pet_url() {
        let repo = unreachable_repo();

        assert_eq!(repo.pet_url(7), "http://127.0.0.1:9/api/pets/7");
    }

    #[ntex::test]
    async fn test_reads_fall_back_to_empty_values() {
        let repo = unreachable_repo();

        assert!(repo.find_by_id(1).await.is_none());
        assert!(repo.find_by_owner(1).await.is_empty());
        assert!(repo.get_medical_record(1).await.is_none());
        assert_eq!(
            repo.find_all(&PetListParams::default()).await,
            PetPage::default()
        );
    }

    #[ntex::test]
    async fn test_writes_fail_with_fixed_messages() {
        let repo = unreachable_repo();

        let created = repo.create(&models::pet::NewPet::default()).await;
        assert_eq!(created.unwrap_err().to_string(), "Error creating pet");

        let updated = repo.update(1, &models::pet::PetPatch::default()).await;
        assert_eq!(updated.unwrap_err().to_string(), "Error updating pet");

        let deleted = repo.delete(1).await;
        assert_eq!(deleted.unwrap_err().to_string(), "Error deleting pet");

        let uploaded = repo
            .upload_photo(
                1,
                models::Pic {
                    filename: "max.png".into(),
                    filename_extension: "png".into(),
                    mime_type: "image/png".into(),
                    body: vec![0u8; 8],
                },
            )
            .await;
        assert_eq!(uploaded.unwrap_err().to_string(), "Error uploading photo");
    }

    #[test]
    fn test_default_page() {
        assert_eq!(
            PetPage::default(),
            PetPage {
                pets: vec![],
                total: 0,
                page: 1,
                limit: 10,
            }
        );
    }
}
