use ntex::web;

use crate::{
    api, fixtures,
    front::{forms, utils as front_utils},
    metric, utils,
};

#[web::get("")]
async fn get_police_view(
    query: web::types::Query<api::police::SpeciesAlertQuery>,
) -> Result<impl web::Responder, web::Error> {
    Ok(web::HttpResponse::Ok().json(&api::police::build_police_page(
        fixtures::species_alerts(),
        fixtures::seizures(),
        &query,
    )))
}

#[web::post("/incautaciones")]
async fn register_seizure_request(
    form: web::types::Json<forms::police::SeizureForm>,
) -> Result<impl web::Responder, web::Error> {
    let new_seizure = form
        .into_inner()
        .validate(utils::today())
        .map_err(front_utils::invalid_form)?;

    let seizure = api::police::register_seizure(new_seizure, &fixtures::seizures());

    log::info!(
        "seizure registered at {}: {}",
        seizure.location,
        seizure.seized_species
    );
    metric::incr_form_submission_statds("seizure");

    Ok(web::HttpResponse::Created().json(&seizure))
}

#[web::post("/reportes")]
async fn generate_report_request(
    form: web::types::Json<forms::police::PoliceReportForm>,
) -> Result<impl web::Responder, web::Error> {
    let new_report = form
        .into_inner()
        .validate(utils::today())
        .map_err(front_utils::invalid_form)?;

    let report = api::police::generate_report(new_report);

    log::info!("police report generated: {} ({})", report.number, report.report_type);
    metric::incr_form_submission_statds("police_report");

    Ok(web::HttpResponse::Created().json(&report))
}

#[cfg(test)]
mod tests {
    use crate::front::routes;
    use ntex::http::StatusCode;
    use ntex::web::{App, test};
    use serde_json::{Value, json};

    #[ntex::test]
    async fn test_get_police_view_high_urgency() {
        let app = test::init_service(App::new().configure(routes::police)).await;

        let req = test::TestRequest::get()
            .uri("/control-policial?urgency=alta")
            .to_request();
        let page: Value = test::read_response_json(&app, req).await;

        assert_eq!(page["species_alerts"]["total"], 2);
        assert_eq!(page["stats"]["high_urgency_alerts"], 2);
        assert_eq!(page["stats"]["seizures"], 2);
    }

    #[ntex::test]
    async fn test_register_seizure_request() {
        let app = test::init_service(App::new().configure(routes::police)).await;

        let req = test::TestRequest::post()
            .uri("/control-policial/incautaciones")
            .set_json(&json!({
                "date": "2024-07-01",
                "location": "Terminal de Transporte, Cali",
                "seizedSpecies": "Loro orejiamarillo (3)",
                "responsible": "Patrullero Díaz"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let body: Value = serde_json::from_slice(&test::read_body(resp).await).unwrap();
        assert_eq!(body["id"], 3);
        assert_eq!(body["status"], "En Proceso");
    }

    #[ntex::test]
    async fn test_generate_report_request_number() {
        let app = test::init_service(App::new().configure(routes::police)).await;

        let req = test::TestRequest::post()
            .uri("/control-policial/reportes")
            .set_json(&json!({
                "date": "2024-07-08",
                "reportType": "estadistico",
                "responsible": "Subintendente Rojas",
                "subject": "Balance semestral",
                "description": "Incautaciones del primer semestre"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let body: Value = serde_json::from_slice(&test::read_body(resp).await).unwrap();
        let number = body["number"].as_str().unwrap();
        assert!(number.starts_with("RPT-AMB-2024-"));
        assert_eq!(number.len(), "RPT-AMB-2024-000".len());
    }
}
