use derive_more::Display;
use serde::{Deserialize, Serialize};

#[derive(Debug, Display, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DeviceStatus {
    #[default]
    #[display("online")]
    Online,
    #[display("offline")]
    Offline,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct GpsLocation {
    pub lat: f64,
    pub lng: f64,
    pub address: String,
}

/// Collar reading. Values are synthetic, refreshed by
/// [`crate::services::iot_simulator`]
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct IotDevice {
    pub id: i64,
    pub pet_name: String,
    pub device_id: String,
    pub status: DeviceStatus,
    /// Percentage in `[0, 100]`
    pub battery: f64,
    /// Celsius, 0 while offline
    pub temperature: f64,
    /// Beats per minute, 0 while offline
    pub heart_rate: u32,
    /// e.g. "walking", "resting", "unknown"
    pub activity: String,
    pub location: GpsLocation,
    pub last_update: String,
}

impl IotDevice {
    pub fn is_online(&self) -> bool {
        self.status == DeviceStatus::Online
    }
}
