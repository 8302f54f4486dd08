use ntex::web;
use serde::Deserialize;

use crate::{api, front::AppState};

#[derive(Debug, Default, Deserialize)]
pub struct IotQuery {
    pub device: Option<i64>,
}

/// Latest readings written by the simulator
#[web::get("")]
async fn get_iot_view(
    app_state: web::types::State<AppState>,
    query: web::types::Query<IotQuery>,
) -> Result<impl web::Responder, web::Error> {
    let devices = app_state.devices.read().await.clone();

    Ok(web::HttpResponse::Ok().json(&api::iot::build_iot_page(devices, query.device)))
}

#[cfg(test)]
mod tests {
    use crate::front::{routes, test_utils};
    use crate::models::iot::DeviceStatus;
    use ntex::web::{App, test};
    use serde_json::Value;

    #[ntex::test]
    async fn test_get_iot_view_stats() {
        let app = test::init_service(
            App::new()
                .state(test_utils::app_state())
                .configure(routes::iot),
        )
        .await;

        let req = test::TestRequest::get().uri("/iot-dashboard").to_request();
        let page: Value = test::read_response_json(&app, req).await;

        assert_eq!(page["stats"]["total"], 3);
        assert_eq!(page["stats"]["online"], 2);
        assert_eq!(page["stats"]["low_battery"], 1);
        assert_eq!(page["stats"]["alerting"], 1);
        assert!(page["selected"].is_null());
    }

    #[ntex::test]
    async fn test_get_iot_view_reads_shared_devices() {
        let state = test_utils::app_state();
        state.devices.write().await[0].status = DeviceStatus::Offline;

        let app = test::init_service(App::new().state(state).configure(routes::iot)).await;

        let req = test::TestRequest::get()
            .uri("/iot-dashboard?device=3")
            .to_request();
        let page: Value = test::read_response_json(&app, req).await;

        assert_eq!(page["stats"]["online"], 1);
        assert_eq!(page["selected"]["device_id"], "GPS-003");
        assert_eq!(page["selected"]["last_update"], "Hace 2 horas");
    }
}
