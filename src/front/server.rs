//! Handlers not linked to a specific scope

use ntex::web;

use crate::{
    api, fixtures,
    front::{AppState, errors},
    utils,
};

/// Return a [UrlNotFound](errors::UserError::UrlNotFound) error for urls not defined
pub async fn serve_not_found() -> Result<web::HttpResponse, web::Error> {
    Err(errors::UserError::UrlNotFound.into())
}

/// Dashboard summary and vaccine alerts
#[web::get("/")]
async fn index(app_state: web::types::State<AppState>) -> Result<impl web::Responder, web::Error> {
    let devices = app_state.devices.read().await;
    let (pets, owners, vaccinations) = (
        fixtures::pets(),
        fixtures::owners(),
        fixtures::vaccinations(),
    );
    let (analyses, medicines, invoices) = (
        fixtures::analyses(),
        fixtures::medicines(),
        fixtures::invoices(),
    );

    let page = api::dashboard::build_dashboard(
        api::dashboard::ClinicSnapshot {
            pets: &pets,
            owners: &owners,
            vaccinations: &vaccinations,
            analyses: &analyses,
            medicines: &medicines,
            devices: &devices,
            invoices: &invoices,
        },
        utils::today(),
    );

    Ok(web::HttpResponse::Ok().json(&page))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::front::test_utils;
    use ntex::http::StatusCode;
    use ntex::web::{App, test};
    use serde_json::Value;

    #[ntex::test]
    async fn test_index_summary() {
        let app = test::init_service(
            App::new()
                .state(test_utils::app_state())
                .service(index),
        )
        .await;

        let req = test::TestRequest::get().uri("/").to_request();
        let page: Value = test::read_response_json(&app, req).await;

        assert_eq!(page["summary"]["pets"], 9);
        assert_eq!(page["summary"]["owners"], 8);
        assert_eq!(page["summary"]["pending_analyses"], 1);
        assert_eq!(page["summary"]["low_stock_medicines"], 1);
        assert_eq!(page["summary"]["online_devices"], 2);
    }

    #[ntex::test]
    async fn test_unknown_url_is_not_found() {
        let app = test::init_service(
            App::new().default_service(web::route().to(serve_not_found)),
        )
        .await;

        let req = test::TestRequest::get().uri("/no-existe").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let body: Value = serde_json::from_slice(&test::read_body(resp).await).unwrap();
        assert_eq!(body["error"], "recurso no encontrado");
    }
}
