//! Background refresh of the collar readings.
//!
//! [start_simulator] spawns a task that applies a random
//! [VitalsSample](crate::api::iot::VitalsSample) to every device each
//! period. Dropping the returned [SimulatorHandle] stops the task.

use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;

use crate::{api, models::iot::IotDevice};

pub type SharedDevices = Arc<RwLock<Vec<IotDevice>>>;

#[derive(Debug)]
pub struct SimulatorHandle {
    task: JoinHandle<()>,
}

impl SimulatorHandle {
    pub fn is_running(&self) -> bool {
        !self.task.is_finished()
    }
}

impl Drop for SimulatorHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// One refresh over all devices
pub async fn tick(devices: &SharedDevices) {
    let mut devices = devices.write().await;
    for device in devices.iter_mut() {
        api::iot::refresh_device(device, api::iot::VitalsSample::random());
    }
    log::debug!("refreshed {} iot devices", devices.len());
}

pub fn start_simulator(devices: SharedDevices, period: Duration) -> SimulatorHandle {
    log::info!("🛰️ Starting iot simulator every {period:?}");

    let task = tokio::spawn(async move {
        let mut interval = tokio::time::interval(period);
        // the first tick completes immediately
        interval.tick().await;

        loop {
            interval.tick().await;
            tick(&devices).await;
        }
    });

    SimulatorHandle { task }
}
