use chrono::Utc;
use ntex::web;
use serde_json::json;

use crate::{
    api, fixtures,
    front::{errors, forms, utils as front_utils},
    metric,
};

#[web::get("")]
async fn get_services_view(
    query: web::types::Query<api::service::ServiceQuery>,
) -> Result<impl web::Responder, web::Error> {
    Ok(
        web::HttpResponse::Ok().json(&api::service::build_services_page(
            fixtures::services(),
            &fixtures::appointments(),
            &query,
        )),
    )
}

#[web::post("")]
async fn submit_service_form(
    form: web::types::Json<forms::clinic::ServiceForm>,
) -> Result<impl web::Responder, web::Error> {
    let service = form
        .into_inner()
        .validate(&fixtures::services())
        .map_err(front_utils::invalid_form)?;

    log::info!("service form submitted: {} ({})", service.name, service.category);
    metric::incr_form_submission_statds("service");

    Ok(web::HttpResponse::Created().json(&service))
}

#[web::get("/citas")]
async fn get_appointments() -> Result<impl web::Responder, web::Error> {
    let appointments = fixtures::appointments();

    Ok(web::HttpResponse::Ok().json(&json!({
        "total": appointments.len(),
        "appointments": appointments,
    })))
}

#[web::post("/citas")]
async fn book_appointment_request(
    form: web::types::Json<forms::pet::AppointmentForm>,
) -> Result<impl web::Responder, web::Error> {
    let new_appointment = form
        .into_inner()
        .validate(Utc::now().naive_utc())
        .map_err(front_utils::invalid_form)?;

    let appointment = api::service::book_appointment(
        new_appointment,
        &fixtures::services(),
        &fixtures::pets(),
        &fixtures::appointments(),
    )
    .map_err(|e| errors::UserError::BadRequest(e.to_string()))?;

    log::info!(
        "appointment booked: {} for {} on {} {}",
        appointment.service_name,
        appointment.pet_name,
        appointment.date,
        appointment.time
    );
    metric::incr_form_submission_statds("appointment");

    Ok(web::HttpResponse::Created().json(&appointment))
}

#[cfg(test)]
mod tests {
    use crate::{front::routes, utils};
    use ntex::http::StatusCode;
    use ntex::web::{App, test};
    use serde_json::{Value, json};

    fn appointment_body(service_id: i64) -> Value {
        json!({
            "serviceId": service_id,
            "petId": 1,
            "vetId": 2,
            "type": "consulta",
            "date": utils::today() + chrono::Days::new(7),
            "time": "10:30:00",
            "duration": 30,
            "notes": "Control anual"
        })
    }

    #[ntex::test]
    async fn test_get_services_view_by_category() {
        let app = test::init_service(App::new().configure(routes::services)).await;

        let req = test::TestRequest::get()
            .uri("/servicios?category=Cirug%C3%ADas")
            .to_request();
        let page: Value = test::read_response_json(&app, req).await;

        assert_eq!(page["services"]["total"], 3);
        assert_eq!(page["stats"]["total"], 11);
        assert_eq!(page["stats"]["surgeries"], 3);
    }

    #[ntex::test]
    async fn test_get_appointments() {
        let app = test::init_service(App::new().configure(routes::services)).await;

        let req = test::TestRequest::get().uri("/servicios/citas").to_request();
        let body: Value = test::read_response_json(&app, req).await;

        assert_eq!(body["total"], 2);
    }

    #[ntex::test]
    async fn test_book_appointment_request() {
        let app = test::init_service(App::new().configure(routes::services)).await;

        let req = test::TestRequest::post()
            .uri("/servicios/citas")
            .set_json(&appointment_body(7))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let body: Value = serde_json::from_slice(&test::read_body(resp).await).unwrap();
        assert_eq!(body["service_name"], "Consulta General");
        assert_eq!(body["pet_name"], "Max");
        assert_eq!(body["status"], "programada");
    }

    #[ntex::test]
    async fn test_book_unavailable_service() {
        let app = test::init_service(App::new().configure(routes::services)).await;

        let req = test::TestRequest::post()
            .uri("/servicios/citas")
            .set_json(&appointment_body(5))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
