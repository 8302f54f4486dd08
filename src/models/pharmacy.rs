use chrono::NaiveDate;
use derive_more::Display;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::pet::Species;

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct Medicine {
    pub id: i64,
    pub name: String,
    pub active_ingredient: String,
    pub stock: u32,
    pub min_stock: u32,
    pub price: Decimal,
    pub lot: String,
    pub expiry_date: NaiveDate,
    pub supplier: String,
    pub category: String,
    pub species: Vec<Species>,
}

#[derive(Debug, Display, Clone, Copy, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum StockLevel {
    #[display("bajo")]
    Bajo,
    #[display("medio")]
    Medio,
    #[display("normal")]
    Normal,
}
