//! Frontend route configuration module.
//!
//! Every dashboard page has its own scope. Pages answer JSON built from the
//! fixtures, forms are validated and echoed back. Only
//! [pets_api](super::pets_api) reaches the external pets api.

use super::{
    calendar, iot, laboratory, marketplace, owner, pet, pets_api, pharmacy, police, service,
    session, vaccination,
};
use ntex::web;

/// # Routes
/// - `GET /mascotas` - Pets list with search, selectors and sorting
/// - `POST /mascotas` - Validate a new pet form
/// - `POST /mascotas/historial` - Validate a medical record entry
pub fn pets(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/mascotas").service((
        pet::get_pets_view,
        pet::submit_pet_form,
        pet::submit_medical_record_form,
    )));
}

/// # Routes
/// - `GET /duenos` - Owner cards and stats
/// - `POST /duenos` - Validate a new owner form
pub fn owners(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/duenos").service((owner::get_owners_view, owner::submit_owner_form)),
    );
}

/// # Routes
/// - `GET /vacunas` - Vaccinations with derived status and alerts
/// - `POST /vacunas` - Register a vaccination
pub fn vaccinations(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/vacunas").service((
        vaccination::get_vaccinations_view,
        vaccination::register_vaccination_request,
    )));
}

/// # Routes
/// - `GET /calendar` - Alert events, optionally for one day
pub fn calendar(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/calendar").service((calendar::get_calendar_view,)));
}

/// # Routes
/// - `GET /control-policial` - Species alerts, seizures and stats
/// - `POST /control-policial/incautaciones` - Register a seizure
/// - `POST /control-policial/reportes` - Generate a police report
pub fn police(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/control-policial").service((
        police::get_police_view,
        police::register_seizure_request,
        police::generate_report_request,
    )));
}

/// # Routes
/// - `GET /laboratorio` - Lab analyses
/// - `POST /laboratorio` - Request a new analysis
pub fn laboratory(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/laboratorio").service((
        laboratory::get_laboratory_view,
        laboratory::submit_analysis_form,
    )));
}

/// # Routes
/// - `GET /servicios` - Clinic services catalogue
/// - `POST /servicios` - Validate a new service form
/// - `GET /servicios/citas` - Appointments
/// - `POST /servicios/citas` - Book an appointment
pub fn services(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/servicios").service((
        service::get_services_view,
        service::submit_service_form,
        service::get_appointments,
        service::book_appointment_request,
    )));
}

/// # Routes
/// - `GET /farmacia` - Medicine inventory
/// - `POST /farmacia` - Validate a new pharmacy product
pub fn pharmacy(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/farmacia").service((
        pharmacy::get_pharmacy_view,
        pharmacy::submit_medicine_form,
    )));
}

/// # Routes
/// - `GET /marketplace` - Products
/// - `GET /marketplace/facturas` - Invoices and billing stats
/// - `POST /marketplace/facturas` - Create an invoice
/// - `POST /marketplace/facturas/preview` - Invoice totals without creating it
pub fn marketplace(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/marketplace").service((
        marketplace::get_marketplace_view,
        web::scope("/facturas").service((
            marketplace::get_billing_view,
            marketplace::preview_invoice_request,
            marketplace::create_invoice_request,
        )),
    )));
}

/// # Routes
/// - `GET /iot-dashboard` - Collar readings, `?device=<id>` selects one
pub fn iot(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/iot-dashboard").service((iot::get_iot_view,)));
}

/// # Routes
/// - `GET /session` - Current user
/// - `POST /session` - Sign in
/// - `DELETE /session` - Sign out
pub fn session(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/session").service((
        session::get_session,
        session::sign_in,
        session::sign_out,
    )));
}

/// # Routes
/// - `GET /api/pets` - Page of pets from the pets api
/// - `POST /api/pets` - Create a pet
/// - `GET /api/pets/store` - Current store state
/// - `GET /api/pets/owner/{owner_id}` - Pets of an owner
/// - `GET /api/pets/{pet_id}` - One pet
/// - `PATCH /api/pets/{pet_id}` - Partial update
/// - `DELETE /api/pets/{pet_id}` - Delete
/// - `GET /api/pets/{pet_id}/medical-record` - Medical record
/// - `POST /api/pets/{pet_id}/photo` - Multipart photo upload
pub fn pets_api(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/api/pets").service((
        pets_api::list_pets,
        pets_api::create_pet,
        pets_api::get_store_state,
        pets_api::get_owner_pets,
        pets_api::get_pet,
        pets_api::update_pet,
        pets_api::delete_pet,
        pets_api::get_medical_record,
        pets_api::upload_photo,
    )));
}
