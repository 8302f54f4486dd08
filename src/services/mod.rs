pub mod iot_simulator;
pub mod store;
