use ntex::web;

use crate::{api, fixtures, utils};

#[web::get("")]
async fn get_calendar_view(
    query: web::types::Query<api::calendar::CalendarQuery>,
) -> Result<impl web::Responder, web::Error> {
    Ok(web::HttpResponse::Ok().json(&api::calendar::build_calendar_page(
        fixtures::alert_events(),
        &query,
        utils::today(),
    )))
}

#[cfg(test)]
mod tests {
    use crate::front::routes;
    use ntex::web::{App, test};
    use serde_json::Value;

    #[ntex::test]
    async fn test_get_calendar_view_type_and_day() {
        let app = test::init_service(App::new().configure(routes::calendar)).await;

        let req = test::TestRequest::get()
            .uri("/calendar?type=vacuna&date=2024-07-10")
            .to_request();
        let page: Value = test::read_response_json(&app, req).await;

        let titles = page["events"]
            .as_array()
            .unwrap()
            .iter()
            .map(|e| e["title"].as_str().unwrap())
            .collect::<Vec<_>>();
        assert_eq!(titles, vec!["Triple Felina - Mimi", "Vacuna Antirrábica - Max"]);
        assert_eq!(page["selected_date"], "2024-07-10");
        assert_eq!(page["selected_day_events"].as_array().unwrap().len(), 1);
        assert_eq!(page["stats"]["total"], 5);
    }
}
