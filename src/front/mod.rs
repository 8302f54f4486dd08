pub mod calendar;
pub mod errors;
pub mod forms;
pub mod iot;
pub mod laboratory;
pub mod marketplace;
pub mod owner;
pub mod pet;
pub mod pets_api;
pub mod pharmacy;
pub mod police;
pub mod routes;
pub mod server;
pub mod service;
pub mod session;
pub mod utils;
pub mod vaccination;

use std::sync::Arc;
use tokio::sync::RwLock;

use crate::{api::invoice::TaxRule, models, services};

/// Shared by every worker, the inner values are reference counted
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<services::store::PetStore>,
    pub devices: services::iot_simulator::SharedDevices,
    pub tax_rule: TaxRule,
    pub session: Arc<RwLock<Option<models::user::User>>>,
}

impl AppState {
    pub fn new(
        store: Arc<services::store::PetStore>,
        devices: services::iot_simulator::SharedDevices,
        tax_rule: TaxRule,
    ) -> Self {
        Self {
            store,
            devices,
            tax_rule,
            session: Arc::new(RwLock::new(Some(models::user::User::mock_admin()))),
        }
    }
}
