//! Pets backed by the external pets api, every call goes through the
//! shared [PetStore](crate::services::store::PetStore).

use ntex::web;
use serde_json::json;

use crate::{
    front::{
        AppState,
        errors::{ServerError, UserError},
        forms, utils as front_utils,
    },
    models, repo, utils,
};

#[web::get("")]
async fn list_pets(
    app_state: web::types::State<AppState>,
    query: web::types::Query<repo::PetListParams>,
) -> Result<impl web::Responder, web::Error> {
    let page = app_state.store.fetch_pets(query.into_inner()).await;

    Ok(web::HttpResponse::Ok().json(&page))
}

#[web::post("")]
async fn create_pet(
    app_state: web::types::State<AppState>,
    form: web::types::Json<forms::pet::PetForm>,
) -> Result<impl web::Responder, web::Error> {
    let new_pet = form
        .into_inner()
        .validate(utils::today())
        .map_err(front_utils::invalid_form)?;

    let pet = app_state
        .store
        .create_pet(new_pet)
        .await
        .map_err(|e| ServerError::ExternalServiceError(e.to_string()))?;

    Ok(web::HttpResponse::Created().json(&pet))
}

#[web::get("/store")]
async fn get_store_state(
    app_state: web::types::State<AppState>,
) -> Result<impl web::Responder, web::Error> {
    Ok(web::HttpResponse::Ok().json(&app_state.store.snapshot().await))
}

#[web::get("/owner/{owner_id}")]
async fn get_owner_pets(
    app_state: web::types::State<AppState>,
    path: web::types::Path<(i64,)>,
) -> Result<impl web::Responder, web::Error> {
    let pets = app_state.store.pets_by_owner(path.0).await;

    Ok(web::HttpResponse::Ok().json(&json!({ "pets": pets })))
}

#[web::get("/{pet_id}")]
async fn get_pet(
    app_state: web::types::State<AppState>,
    path: web::types::Path<(i64,)>,
) -> Result<impl web::Responder, web::Error> {
    let pet = app_state
        .store
        .fetch_pet_by_id(path.0)
        .await
        .ok_or(UserError::UrlNotFound)?;

    Ok(web::HttpResponse::Ok().json(&pet))
}

#[web::patch("/{pet_id}")]
async fn update_pet(
    app_state: web::types::State<AppState>,
    path: web::types::Path<(i64,)>,
    patch: web::types::Json<models::pet::PetPatch>,
) -> Result<impl web::Responder, web::Error> {
    let pet = app_state
        .store
        .update_pet_by_id(path.0, patch.into_inner())
        .await
        .map_err(|e| ServerError::ExternalServiceError(e.to_string()))?;

    Ok(web::HttpResponse::Ok().json(&pet))
}

#[web::delete("/{pet_id}")]
async fn delete_pet(
    app_state: web::types::State<AppState>,
    path: web::types::Path<(i64,)>,
) -> Result<impl web::Responder, web::Error> {
    app_state
        .store
        .delete_pet_by_id(path.0)
        .await
        .map_err(|e| ServerError::ExternalServiceError(e.to_string()))?;

    Ok(web::HttpResponse::NoContent().finish())
}

#[web::get("/{pet_id}/medical-record")]
async fn get_medical_record(
    app_state: web::types::State<AppState>,
    path: web::types::Path<(i64,)>,
) -> Result<impl web::Responder, web::Error> {
    let record = app_state
        .store
        .medical_record(path.0)
        .await
        .ok_or(UserError::UrlNotFound)?;

    Ok(web::HttpResponse::Ok().json(&record))
}

#[web::post("/{pet_id}/photo")]
async fn upload_photo(
    app_state: web::types::State<AppState>,
    path: web::types::Path<(i64,)>,
    payload: ntex_multipart::Multipart,
) -> Result<impl web::Responder, web::Error> {
    let photo = front_utils::deserialize_photo(payload)
        .await
        .map_err(|e| UserError::BadRequest(e.to_string()))?;

    let photo_url = app_state
        .store
        .upload_pet_photo(path.0, photo)
        .await
        .map_err(|e| ServerError::ExternalServiceError(e.to_string()))?;

    Ok(web::HttpResponse::Ok().json(&json!({ "photoUrl": photo_url })))
}
