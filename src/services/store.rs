//! Shared pet state container.
//!
//! [PetStoreState] holds the plain setters. [PetStore] wraps it behind a
//! lock and runs the repository actions, keeping `loading` and `error` in
//! sync. The lock is never held while waiting on the repository, so
//! concurrent actions are not de-duplicated and the last response wins.

use serde::Serialize;
use tokio::sync::RwLock;
use tracing::Instrument;

use crate::{
    consts, models,
    repo::{ImplPetRepository, PetListParams, PetPage},
};

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Pagination {
    pub page: u32,
    pub limit: u32,
    pub total: u64,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: consts::DEFAULT_PAGE,
            limit: consts::DEFAULT_PAGE_LIMIT,
            total: 0,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct PetStoreState {
    pub pets: Vec<models::pet::Pet>,
    pub current_pet: Option<models::pet::Pet>,
    pub loading: bool,
    pub error: Option<String>,
    pub pagination: Pagination,
}

impl PetStoreState {
    pub fn set_pets(&mut self, pets: Vec<models::pet::Pet>) {
        self.pets = pets;
    }

    pub fn add_pet(&mut self, pet: models::pet::Pet) {
        self.pets.push(pet);
    }

    /// Merges `patch` into the listed pet and the current pet with `id`
    pub fn update_pet(&mut self, id: i64, patch: models::pet::PetPatch) {
        if let Some(pet) = self.pets.iter_mut().find(|p| p.id == id) {
            pet.merge(patch.clone());
        }

        if let Some(pet) = self.current_pet.as_mut().filter(|p| p.id == id) {
            pet.merge(patch);
        }
    }

    pub fn delete_pet(&mut self, id: i64) {
        self.pets.retain(|p| p.id != id);
    }

    pub fn set_current_pet(&mut self, pet: Option<models::pet::Pet>) {
        self.current_pet = pet;
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    pub fn set_error(&mut self, error: Option<String>) {
        self.error = error;
    }

    fn replace_pet(&mut self, pet: models::pet::Pet) {
        if let Some(listed) = self.pets.iter_mut().find(|p| p.id == pet.id) {
            *listed = pet.clone();
        }

        if self.current_pet.as_ref().is_some_and(|p| p.id == pet.id) {
            self.current_pet = Some(pet);
        }
    }
}

pub struct PetStore {
    repo: ImplPetRepository,
    state: RwLock<PetStoreState>,
}

impl PetStore {
    pub fn new(repo: ImplPetRepository) -> Self {
        Self {
            repo,
            state: RwLock::new(PetStoreState::default()),
        }
    }

    /// Copy of the current state
    pub async fn snapshot(&self) -> PetStoreState {
        self.state.read().await.clone()
    }

    /// Applies a setter under the write lock
    pub async fn apply<F>(&self, f: F)
    where
        F: FnOnce(&mut PetStoreState),
    {
        f(&mut *self.state.write().await)
    }

    async fn begin(&self) {
        self.apply(|s| {
            s.set_error(None);
            s.set_loading(true);
        })
        .await;
    }

    /// Ends an action. A failure is recorded in the state and raised again
    async fn finish<T>(
        &self,
        result: anyhow::Result<T>,
        on_success: impl FnOnce(&mut PetStoreState, &T),
    ) -> anyhow::Result<T> {
        let mut state = self.state.write().await;
        state.set_loading(false);

        match result {
            Ok(v) => {
                on_success(&mut state, &v);
                Ok(v)
            }
            Err(e) => {
                state.set_error(Some(e.to_string()));
                Err(e)
            }
        }
    }

    pub async fn fetch_pets(&self, params: PetListParams) -> PetPage {
        self.begin().await;

        let page = self
            .repo
            .find_all(&params)
            .instrument(logfire::span!("store_fetch_pets"))
            .await;

        let mut state = self.state.write().await;
        state.set_pets(page.pets.clone());
        state.pagination = Pagination {
            page: page.page,
            limit: page.limit,
            total: page.total,
        };
        state.set_loading(false);

        page
    }

    pub async fn fetch_pet_by_id(&self, id: i64) -> Option<models::pet::Pet> {
        self.begin().await;

        let pet = self
            .repo
            .find_by_id(id)
            .instrument(logfire::span!("store_fetch_pet_by_id"))
            .await;

        self.apply(|s| {
            s.set_current_pet(pet.clone());
            s.set_loading(false);
        })
        .await;

        pet
    }

    pub async fn create_pet(
        &self,
        new_pet: models::pet::NewPet,
    ) -> anyhow::Result<models::pet::Pet> {
        self.begin().await;

        let result = self
            .repo
            .create(&new_pet)
            .instrument(logfire::span!("store_create_pet"))
            .await;

        self.finish(result, |s, pet| {
            s.add_pet(pet.clone());
            s.pagination.total += 1;
        })
        .await
    }

    pub async fn update_pet_by_id(
        &self,
        id: i64,
        patch: models::pet::PetPatch,
    ) -> anyhow::Result<models::pet::Pet> {
        self.begin().await;

        let result = self
            .repo
            .update(id, &patch)
            .instrument(logfire::span!("store_update_pet"))
            .await;

        self.finish(result, |s, pet| s.replace_pet(pet.clone()))
            .await
    }

    pub async fn delete_pet_by_id(&self, id: i64) -> anyhow::Result<()> {
        self.begin().await;

        let result = self
            .repo
            .delete(id)
            .instrument(logfire::span!("store_delete_pet"))
            .await;

        self.finish(result, |s, _| {
            s.delete_pet(id);
            if s.current_pet.as_ref().is_some_and(|p| p.id == id) {
                s.set_current_pet(None);
            }
            s.pagination.total = s.pagination.total.saturating_sub(1);
        })
        .await
    }

    /// Uploads the photo and stores the returned url on the pet
    pub async fn upload_pet_photo(
        &self,
        pet_id: i64,
        photo: models::Pic,
    ) -> anyhow::Result<String> {
        self.begin().await;

        let result = self
            .repo
            .upload_photo(pet_id, photo)
            .instrument(logfire::span!("store_upload_pet_photo"))
            .await;

        self.finish(result, |s, url| {
            s.update_pet(
                pet_id,
                models::pet::PetPatch {
                    photo: Some(url.clone()),
                    ..Default::default()
                },
            )
        })
        .await
    }

    pub async fn medical_record(&self, pet_id: i64) -> Option<models::pet::MedicalRecord> {
        self.repo
            .get_medical_record(pet_id)
            .instrument(logfire::span!("store_medical_record"))
            .await
    }

    pub async fn pets_by_owner(&self, owner_id: i64) -> Vec<models::pet::Pet> {
        self.repo
            .find_by_owner(owner_id)
            .instrument(logfire::span!("store_pets_by_owner"))
            .await
    }
}
