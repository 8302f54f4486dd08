use ntex::web;

use crate::{
    api, fixtures,
    front::{AppState, forms, utils as front_utils},
    metric, utils,
};

#[web::get("")]
async fn get_marketplace_view(
    query: web::types::Query<api::marketplace::ProductQuery>,
) -> Result<impl web::Responder, web::Error> {
    Ok(
        web::HttpResponse::Ok().json(&api::marketplace::build_marketplace_page(
            fixtures::products(),
            &query,
        )),
    )
}

#[web::get("")]
async fn get_billing_view(
    app_state: web::types::State<AppState>,
    query: web::types::Query<api::invoice::InvoiceQuery>,
) -> Result<impl web::Responder, web::Error> {
    Ok(web::HttpResponse::Ok().json(&api::invoice::build_billing_page(
        fixtures::invoices(),
        &query,
        app_state.tax_rule,
    )))
}

#[web::post("/preview")]
async fn preview_invoice_request(
    app_state: web::types::State<AppState>,
    form: web::types::Json<forms::invoice::InvoiceForm>,
) -> Result<impl web::Responder, web::Error> {
    let draft = form
        .into_inner()
        .validate()
        .map_err(front_utils::invalid_form)?;

    Ok(web::HttpResponse::Ok().json(&api::invoice::preview_invoice(&draft, app_state.tax_rule)))
}

#[web::post("")]
async fn create_invoice_request(
    app_state: web::types::State<AppState>,
    form: web::types::Json<forms::invoice::InvoiceForm>,
) -> Result<impl web::Responder, web::Error> {
    let draft = form
        .into_inner()
        .validate()
        .map_err(front_utils::invalid_form)?;

    let invoice = api::invoice::create_invoice(draft, app_state.tax_rule, utils::today());

    log::info!(
        "invoice {} created for {}: {}",
        invoice.number,
        invoice.client,
        api::invoice::fmt_money(invoice.totals.total)
    );
    metric::incr_form_submission_statds("invoice");

    Ok(web::HttpResponse::Created().json(&invoice))
}

#[cfg(test)]
mod tests {
    use crate::api::invoice::TaxRule;
    use crate::front::{routes, test_utils};
    use crate::repo::MockPetRepository;
    use ntex::http::StatusCode;
    use ntex::web::{App, test};
    use serde_json::{Value, json};

    fn invoice_body(client_type: &str) -> Value {
        json!({
            "ownerId": 1,
            "client": "María García Rodríguez",
            "petName": "Max",
            "veterinarian": "Dr. García",
            "clientType": client_type,
            "services": [{ "name": "Consulta General", "price": "25.00" }],
            "products": [{ "name": "Collar antipulgas", "price": "10.00", "quantity": 2 }],
            "paymentMethod": "tarjeta"
        })
    }

    #[ntex::test]
    async fn test_get_marketplace_view() {
        let app = test::init_service(App::new().configure(routes::marketplace)).await;

        let req = test::TestRequest::get().uri("/marketplace").to_request();
        let page: Value = test::read_response_json(&app, req).await;

        assert_eq!(page["stats"]["total_products"], 4);
        assert_eq!(page["stats"]["on_promotion"], 2);
        assert_eq!(page["stats"]["free_shipping"], 2);
    }

    #[ntex::test]
    async fn test_get_billing_view_by_status() {
        let app = test::init_service(
            App::new()
                .state(test_utils::app_state())
                .configure(routes::marketplace),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/marketplace/facturas?status=pagada")
            .to_request();
        let page: Value = test::read_response_json(&app, req).await;

        assert_eq!(page["invoices"]["total"], 2);
        assert_eq!(page["stats"]["overdue"], 1);
        assert_eq!(page["tax_rule"], "unconditional");
    }

    #[ntex::test]
    async fn test_preview_invoice_unconditional_tax() {
        let app = test::init_service(
            App::new()
                .state(test_utils::app_state())
                .configure(routes::marketplace),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/marketplace/facturas/preview")
            .set_json(&invoice_body("consumidor_final"))
            .to_request();
        let preview: Value = test::read_response_json(&app, req).await;

        assert_eq!(preview["display"]["subtotal"], "$45.00");
        assert_eq!(preview["display"]["tax"], "$5.40");
        assert_eq!(preview["display"]["total"], "$50.40");
        assert_eq!(preview["tax_applied"], true);
    }

    #[ntex::test]
    async fn test_preview_invoice_final_consumer_threshold() {
        let app = test::init_service(
            App::new()
                .state(test_utils::app_state_with(
                    MockPetRepository::new(),
                    TaxRule::FinalConsumerThreshold,
                ))
                .configure(routes::marketplace),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/marketplace/facturas/preview")
            .set_json(&invoice_body("consumidor_final"))
            .to_request();
        let preview: Value = test::read_response_json(&app, req).await;

        assert_eq!(preview["display"]["tax"], "$0.00");
        assert_eq!(preview["display"]["total"], "$45.00");
        assert_eq!(preview["tax_applied"], false);
    }

    #[ntex::test]
    async fn test_create_invoice_request() {
        let app = test::init_service(
            App::new()
                .state(test_utils::app_state())
                .configure(routes::marketplace),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/marketplace/facturas")
            .set_json(&invoice_body("con_datos"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let body: Value = serde_json::from_slice(&test::read_body(resp).await).unwrap();
        assert!(body["number"].as_str().unwrap().starts_with("F-"));
        assert_eq!(body["status"], "pendiente");
    }
}
