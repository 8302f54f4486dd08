use ntex::web;

use crate::{
    api, fixtures,
    front::{forms, utils as front_utils},
    metric, utils,
};

#[web::get("")]
async fn get_laboratory_view(
    query: web::types::Query<api::laboratory::AnalysisQuery>,
) -> Result<impl web::Responder, web::Error> {
    Ok(
        web::HttpResponse::Ok().json(&api::laboratory::build_laboratory_page(
            fixtures::analyses(),
            &query,
        )),
    )
}

#[web::post("")]
async fn submit_analysis_form(
    form: web::types::Json<forms::clinic::AnalysisForm>,
) -> Result<impl web::Responder, web::Error> {
    let analysis = form
        .into_inner()
        .validate(&fixtures::analyses(), utils::today())
        .map_err(front_utils::invalid_form)?;

    log::info!(
        "analysis requested: {} for {} ({})",
        analysis.test_type,
        analysis.pet_name,
        analysis.priority
    );
    metric::incr_form_submission_statds("analysis");

    Ok(web::HttpResponse::Created().json(&analysis))
}

#[cfg(test)]
mod tests {
    use crate::front::routes;
    use ntex::http::StatusCode;
    use ntex::web::{App, test};
    use serde_json::{Value, json};

    #[ntex::test]
    async fn test_get_laboratory_view_sorted_by_priority() {
        let app = test::init_service(App::new().configure(routes::laboratory)).await;

        let req = test::TestRequest::get()
            .uri("/laboratorio?sort=priority")
            .to_request();
        let page: Value = test::read_response_json(&app, req).await;

        assert_eq!(page["analyses"]["items"][0]["pet_name"], "Luna");
        assert_eq!(page["stats"]["pending"], 1);
    }

    #[ntex::test]
    async fn test_submit_analysis_form_requires_pet_and_owner() {
        let app = test::init_service(App::new().configure(routes::laboratory)).await;

        let req = test::TestRequest::post()
            .uri("/laboratorio")
            .set_json(&json!({ "testType": "Hemograma" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = serde_json::from_slice(&test::read_body(resp).await).unwrap();
        assert_eq!(body["details"].as_array().unwrap().len(), 2);
    }
}
