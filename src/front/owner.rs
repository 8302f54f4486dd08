use ntex::web;

use crate::{
    api, fixtures,
    front::{forms, utils as front_utils},
    metric, utils,
};

#[web::get("")]
async fn get_owners_view(
    query: web::types::Query<api::owner::OwnerQuery>,
) -> Result<impl web::Responder, web::Error> {
    Ok(web::HttpResponse::Ok().json(&api::owner::build_owners_page(
        fixtures::owners(),
        &fixtures::pets(),
        &fixtures::invoices(),
        &query,
    )))
}

#[web::post("")]
async fn submit_owner_form(
    form: web::types::Json<forms::clinic::OwnerForm>,
) -> Result<impl web::Responder, web::Error> {
    let owner = form
        .into_inner()
        .validate(&fixtures::owners(), utils::today())
        .map_err(front_utils::invalid_form)?;

    log::info!("owner form submitted: {}", owner.name);
    metric::incr_form_submission_statds("owner");

    Ok(web::HttpResponse::Created().json(&owner))
}

/// Owner and first pet in one submission
#[web::post("/registro")]
async fn register_owner_and_pet(
    form: web::types::Json<forms::clinic::RegistrationForm>,
) -> Result<impl web::Responder, web::Error> {
    let registration = form
        .into_inner()
        .validate(&fixtures::owners(), &fixtures::pets(), utils::today())
        .map_err(front_utils::invalid_form)?;

    log::info!(
        "registration submitted: owner {} with pet {}",
        registration.owner.name,
        registration.pet.name
    );
    metric::incr_form_submission_statds("registration");

    Ok(web::HttpResponse::Created().json(&registration))
}
