use ntex::web;

use crate::{
    api, fixtures,
    front::{forms, utils as front_utils},
    metric, utils,
};

#[web::get("")]
async fn get_pets_view(
    query: web::types::Query<api::pet::PetQuery>,
) -> Result<impl web::Responder, web::Error> {
    Ok(web::HttpResponse::Ok().json(&api::pet::build_pets_page(fixtures::pets(), &query)))
}

#[web::post("")]
async fn submit_pet_form(
    form: web::types::Json<forms::pet::PetForm>,
) -> Result<impl web::Responder, web::Error> {
    let new_pet = form
        .into_inner()
        .validate(utils::today())
        .map_err(front_utils::invalid_form)?;

    log::info!("pet form submitted: {} ({})", new_pet.name, new_pet.species);
    metric::incr_form_submission_statds("pet");

    Ok(web::HttpResponse::Created().json(&new_pet))
}

#[web::post("/historial")]
async fn submit_medical_record_form(
    form: web::types::Json<forms::pet::MedicalRecordForm>,
) -> Result<impl web::Responder, web::Error> {
    let entry = form
        .into_inner()
        .validate()
        .map_err(front_utils::invalid_form)?;

    log::info!(
        "medical record entry submitted for pet {}: {} medications",
        entry.pet_id,
        entry.medications.len()
    );
    metric::incr_form_submission_statds("medical_record");

    Ok(web::HttpResponse::Created().json(&entry))
}

#[cfg(test)]
mod tests {
    use crate::front::{routes, test_utils};
    use ntex::http::StatusCode;
    use ntex::web::{App, test};
    use serde_json::{Value, json};

    #[ntex::test]
    async fn test_get_pets_view_filters_and_keeps_full_stats() {
        let app = test::init_service(
            App::new()
                .state(test_utils::app_state())
                .configure(routes::pets),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/mascotas?species=gato&sort=name")
            .to_request();
        let page: Value = test::read_response_json(&app, req).await;

        let names = page["pets"]["items"]
            .as_array()
            .unwrap()
            .iter()
            .map(|p| p["name"].as_str().unwrap().to_string())
            .collect::<Vec<_>>();
        assert_eq!(names, vec!["Felix", "Luna", "Mimi", "Whiskers"]);
        assert_eq!(page["stats"]["total"], 9);
    }

    #[ntex::test]
    async fn test_get_pets_view_no_match() {
        let app = test::init_service(App::new().configure(routes::pets)).await;

        let req = test::TestRequest::get()
            .uri("/mascotas?search=zzz")
            .to_request();
        let page: Value = test::read_response_json(&app, req).await;

        assert_eq!(page["pets"]["total"], 0);
        assert_eq!(page["pets"]["items"], json!([]));
    }

    #[ntex::test]
    async fn test_submit_pet_form_rejects_invalid_values() {
        let app = test::init_service(App::new().configure(routes::pets)).await;

        let req = test::TestRequest::post()
            .uri("/mascotas")
            .set_json(&json!({
                "name": "Nala",
                "species": "gato",
                "breed": "Angora",
                "age": "1 año",
                "weight": "3,2 kilos",
                "ownerId": 2,
                "phone": "+57 300-123-4567",
                "microchip": "982000123456789",
                "status": "saludable"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = serde_json::from_slice(&test::read_body(resp).await).unwrap();
        assert_eq!(body["details"][0]["field"], "weight");
        assert_eq!(
            body["details"][0]["message"],
            "Formato de peso inválido (ej: 25.5 kg)"
        );
    }

    #[ntex::test]
    async fn test_submit_pet_form_echoes_new_pet() {
        let app = test::init_service(App::new().configure(routes::pets)).await;

        let req = test::TestRequest::post()
            .uri("/mascotas")
            .set_json(&json!({
                "name": "Nala",
                "species": "gato",
                "breed": "Angora",
                "age": "1 año",
                "weight": "3.2 kg",
                "ownerId": 2,
                "phone": "+57 300-123-4567",
                "microchip": "982000123456789",
                "status": "tratamiento"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let body: Value = serde_json::from_slice(&test::read_body(resp).await).unwrap();
        assert_eq!(body["name"], "Nala");
        assert_eq!(body["status"], "tratamiento");
    }
}
