use ntex::web;

use crate::{
    api, fixtures,
    front::{forms, utils as front_utils},
    metric, utils,
};

#[web::get("")]
async fn get_pharmacy_view(
    query: web::types::Query<api::pharmacy::MedicineQuery>,
) -> Result<impl web::Responder, web::Error> {
    Ok(
        web::HttpResponse::Ok().json(&api::pharmacy::build_pharmacy_page(
            fixtures::medicines(),
            &query,
            utils::today(),
        )),
    )
}

#[web::post("")]
async fn submit_medicine_form(
    form: web::types::Json<forms::clinic::MedicineForm>,
) -> Result<impl web::Responder, web::Error> {
    let medicine = form
        .into_inner()
        .validate(&fixtures::medicines())
        .map_err(front_utils::invalid_form)?;

    log::info!(
        "pharmacy product submitted: {} (stock {})",
        medicine.name,
        medicine.stock
    );
    metric::incr_form_submission_statds("medicine");

    Ok(web::HttpResponse::Created().json(&api::pharmacy::MedicineView::new(
        medicine,
        utils::today(),
    )))
}

#[cfg(test)]
mod tests {
    use crate::front::routes;
    use ntex::http::StatusCode;
    use ntex::web::{App, test};
    use serde_json::{Value, json};

    #[ntex::test]
    async fn test_get_pharmacy_view_low_stock() {
        let app = test::init_service(App::new().configure(routes::pharmacy)).await;

        let req = test::TestRequest::get()
            .uri("/farmacia?stock_level=bajo")
            .to_request();
        let page: Value = test::read_response_json(&app, req).await;

        assert_eq!(page["medicines"]["total"], 1);
        assert_eq!(page["medicines"]["items"][0]["name"], "Metacam 5mg/ml");
        assert_eq!(page["stats"]["low_stock"], 1);
    }

    #[ntex::test]
    async fn test_submit_medicine_form() {
        let app = test::init_service(App::new().configure(routes::pharmacy)).await;

        let req = test::TestRequest::post()
            .uri("/farmacia")
            .set_json(&json!({
                "name": "Ivermectina",
                "category": "Antiparasitarios",
                "price": "12.50",
                "stock": 5,
                "minStock": 10,
                "expiryDate": "2030-01-31",
                "species": ["perro", "gato"]
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let body: Value = serde_json::from_slice(&test::read_body(resp).await).unwrap();
        assert_eq!(body["id"], 4);
        assert_eq!(body["stock_level"], "bajo");
    }
}
