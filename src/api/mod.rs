//! # API Module
//!
//! Business logic of the clinic dashboard. Every page has a pure
//! `build_*_page` function composing filters, sorting and aggregates over
//! the records it receives; handlers in [`crate::front`] only feed them.
//!
//! ## Modules
//!
//! - [`filter`] - Search, selector and preview helpers shared by the pages
//! - [`pet`] / [`owner`] - Patients and clients
//! - [`vaccination`] - Derived vaccination status and registration
//! - [`pharmacy`] / [`laboratory`] - Inventory and lab analyses
//! - [`service`] - Clinic services and appointment booking
//! - [`marketplace`] / [`invoice`] - Products, invoice arithmetic and billing
//! - [`iot`] - Collar readings and their simulation step
//! - [`police`] - Wildlife control: species alerts, seizures, reports
//! - [`calendar`] / [`dashboard`] - Alert events and landing summary

pub mod calendar;
pub mod dashboard;
pub mod filter;
pub mod invoice;
pub mod iot;
pub mod laboratory;
pub mod marketplace;
pub mod owner;
pub mod pet;
pub mod pharmacy;
pub mod police;
pub mod service;
pub mod vaccination;
