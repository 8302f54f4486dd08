use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub category: String,
    pub supplier: String,
    pub rating: f32,
    pub stock: u32,
    pub image: String,
    pub free_shipping: bool,
    /// e.g. "20% OFF", "Nuevo"
    pub promotion: Option<String>,
}
