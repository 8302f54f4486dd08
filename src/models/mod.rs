pub mod calendar;
pub mod invoice;
pub mod iot;
pub mod laboratory;
pub mod marketplace;
pub mod owner;
pub mod pet;
pub mod pharmacy;
pub mod police;
pub mod service;
pub mod user;
pub mod vaccination;

/// Raw image uploaded from a form
#[derive(Debug, Default, Clone)]
pub struct Pic {
    pub filename: String,
    pub filename_extension: String,
    pub mime_type: String,
    pub body: Vec<u8>,
}
