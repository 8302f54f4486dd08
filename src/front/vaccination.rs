use ntex::web;

use crate::{
    api,
    front::{errors, forms, utils as front_utils},
    fixtures, metric, utils,
};

#[web::get("")]
async fn get_vaccinations_view(
    query: web::types::Query<api::vaccination::VaccinationQuery>,
) -> Result<impl web::Responder, web::Error> {
    Ok(
        web::HttpResponse::Ok().json(&api::vaccination::build_vaccinations_page(
            fixtures::vaccinations(),
            &query,
            utils::today(),
        )),
    )
}

#[web::post("")]
async fn register_vaccination_request(
    form: web::types::Json<forms::pet::VaccinationForm>,
) -> Result<impl web::Responder, web::Error> {
    let today = utils::today();
    let new_vaccination = form
        .into_inner()
        .validate(today)
        .map_err(front_utils::invalid_form)?;

    let vaccination = api::vaccination::register_vaccination(
        new_vaccination,
        &fixtures::pets(),
        &fixtures::vaccinations(),
    )
    .map_err(|e| errors::UserError::BadRequest(e.to_string()))?;

    log::info!(
        "vaccination registered: {} for {} [{}]",
        vaccination.vaccine,
        vaccination.pet_name,
        vaccination.blockchain_hash
    );
    metric::incr_form_submission_statds("vaccination");

    Ok(web::HttpResponse::Created().json(&api::vaccination::VaccinationView::new(
        vaccination,
        today,
    )))
}

#[cfg(test)]
mod tests {
    use crate::{front::routes, utils};
    use ntex::http::StatusCode;
    use ntex::web::{App, test};
    use serde_json::{Value, json};

    #[ntex::test]
    async fn test_get_vaccinations_view_search() {
        let app = test::init_service(App::new().configure(routes::vaccinations)).await;

        let req = test::TestRequest::get()
            .uri("/vacunas?search=rocky")
            .to_request();
        let page: Value = test::read_response_json(&app, req).await;

        assert_eq!(page["vaccinations"]["total"], 1);
        assert_eq!(page["stats"]["total"], 5);
    }

    #[ntex::test]
    async fn test_register_vaccination_for_known_pet() {
        let app = test::init_service(App::new().configure(routes::vaccinations)).await;
        let today = utils::today();

        let req = test::TestRequest::post()
            .uri("/vacunas")
            .set_json(&json!({
                "petId": 2,
                "name": "Triple Felina",
                "date": today,
                "nextDose": today + chrono::Days::new(365),
                "batchNumber": "TF-2024-08",
                "vetId": 1,
                "veterinarian": "Dra. Rodríguez"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let body: Value = serde_json::from_slice(&test::read_body(resp).await).unwrap();
        assert_eq!(body["pet_name"], "Luna");
        assert_eq!(body["status"], "vigente");
        assert_eq!(body["id"], 6);
    }

    #[ntex::test]
    async fn test_register_vaccination_for_unknown_pet() {
        let app = test::init_service(App::new().configure(routes::vaccinations)).await;
        let today = utils::today();

        let req = test::TestRequest::post()
            .uri("/vacunas")
            .set_json(&json!({
                "petId": 99,
                "name": "Rabia",
                "date": today,
                "nextDose": today + chrono::Days::new(365),
                "batchNumber": "RB-001",
                "vetId": 1
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
