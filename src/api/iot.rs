use rand::Rng;
use serde::Serialize;

use crate::{consts, models::iot::IotDevice};

/// Uniform values in `[0, 1)` driving one simulated reading
#[derive(Debug, Clone, Copy)]
pub struct VitalsSample {
    pub heart_rate: f64,
    pub temperature: f64,
    pub battery_drain: f64,
}

impl VitalsSample {
    pub fn random() -> Self {
        let mut rng = rand::thread_rng();

        Self {
            heart_rate: rng.gen_range(0.0..1.0),
            temperature: rng.gen_range(0.0..1.0),
            battery_drain: rng.gen_range(0.0..1.0),
        }
    }
}

/// Applies a simulated reading. Offline devices read zero vitals and keep
/// their battery and last update
pub fn refresh_device(device: &mut IotDevice, sample: VitalsSample) {
    if !device.is_online() {
        device.heart_rate = 0;
        device.temperature = 0.0;
        return;
    }

    device.heart_rate = 70 + (sample.heart_rate * 20.0).floor() as u32;
    device.temperature = ((sample.temperature * 2.0 + 37.0) * 10.0).round() / 10.0;
    device.battery = (device.battery - sample.battery_drain * 0.1).max(0.0);
    device.last_update = "Ahora".to_string();
}

#[derive(Debug, Default, Serialize, Clone, PartialEq)]
pub struct IotStats {
    pub total: usize,
    pub online: usize,
    pub low_battery: usize,
    /// Offline or critical battery
    pub alerting: usize,
}

pub fn is_alerting(device: &IotDevice) -> bool {
    !device.is_online() || device.battery < consts::IOT_ALERT_BATTERY
}

pub fn iot_stats(devices: &[IotDevice]) -> IotStats {
    IotStats {
        total: devices.len(),
        online: devices.iter().filter(|d| d.is_online()).count(),
        low_battery: devices
            .iter()
            .filter(|d| d.battery < consts::IOT_LOW_BATTERY)
            .count(),
        alerting: devices.iter().filter(|d| is_alerting(d)).count(),
    }
}

#[derive(Debug, Serialize)]
pub struct IotPage {
    pub devices: Vec<IotDevice>,
    /// Device selected on the map, if any
    pub selected: Option<IotDevice>,
    pub stats: IotStats,
}

pub fn build_iot_page(devices: Vec<IotDevice>, selected_id: Option<i64>) -> IotPage {
    IotPage {
        stats: iot_stats(&devices),
        selected: selected_id.and_then(|id| devices.iter().find(|d| d.id == id).cloned()),
        devices,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    const LOW_SAMPLE: VitalsSample = VitalsSample {
        heart_rate: 0.0,
        temperature: 0.0,
        battery_drain: 0.0,
    };
    const HIGH_SAMPLE: VitalsSample = VitalsSample {
        heart_rate: 0.9999,
        temperature: 0.9999,
        battery_drain: 0.9999,
    };

    #[test]
    fn test_random_samples_stay_in_unit_range() {
        for _ in 0..1_000 {
            let sample = VitalsSample::random();
            for value in [sample.heart_rate, sample.temperature, sample.battery_drain] {
                assert!((0.0..1.0).contains(&value));
            }
        }
    }

    #[test]
    fn test_refresh_online_device_bounds() {
        let mut device = fixtures::devices().remove(0);

        refresh_device(&mut device, LOW_SAMPLE);
        assert_eq!(device.heart_rate, 70);
        assert_eq!(device.temperature, 37.0);
        assert_eq!(device.battery, 85.0);
        assert_eq!(device.last_update, "Ahora");

        refresh_device(&mut device, HIGH_SAMPLE);
        assert_eq!(device.heart_rate, 89);
        assert_eq!(device.temperature, 39.0);
        assert!(device.battery < 85.0 && device.battery > 84.89);
    }

    #[test]
    fn test_refresh_temperature_has_one_decimal() {
        let mut device = fixtures::devices().remove(0);
        refresh_device(
            &mut device,
            VitalsSample {
                temperature: 0.4321,
                ..LOW_SAMPLE
            },
        );

        assert_eq!(device.temperature, 37.9);
    }

    #[test]
    fn test_battery_is_floored_at_zero() {
        let mut device = fixtures::devices().remove(0);
        device.battery = 0.05;
        refresh_device(&mut device, HIGH_SAMPLE);

        assert_eq!(device.battery, 0.0);
    }

    #[test]
    fn test_offline_device_keeps_battery_and_last_update() {
        let mut device = fixtures::devices().remove(2);
        refresh_device(&mut device, HIGH_SAMPLE);

        assert_eq!(device.heart_rate, 0);
        assert_eq!(device.temperature, 0.0);
        assert_eq!(device.battery, 12.0);
        assert_eq!(device.last_update, "Hace 2 horas");
    }

    #[test]
    fn test_iot_stats() {
        assert_eq!(
            iot_stats(&fixtures::devices()),
            IotStats {
                total: 3,
                online: 2,
                low_battery: 1,
                alerting: 1,
            }
        );
    }

    #[test]
    fn test_build_iot_page_selected_device() {
        let page = build_iot_page(fixtures::devices(), Some(2));
        assert_eq!(page.selected.map(|d| d.pet_name), Some("Luna".to_string()));

        assert!(build_iot_page(fixtures::devices(), Some(42)).selected.is_none());
    }
}
