use chrono::NaiveDate;
use derive_more::Display;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Display, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ClientType {
    #[default]
    #[display("consumidor_final")]
    ConsumidorFinal,
    #[display("con_datos")]
    ConDatos,
}

#[derive(Debug, Display, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    #[default]
    #[display("efectivo")]
    Efectivo,
    #[display("tarjeta")]
    Tarjeta,
    #[display("transferencia")]
    Transferencia,
}

#[derive(Debug, Display, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum InvoiceStatus {
    #[display("pagada")]
    Pagada,
    #[default]
    #[display("pendiente")]
    Pendiente,
    #[display("vencida")]
    Vencida,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct ServiceLine {
    pub name: String,
    pub price: Decimal,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct ProductLine {
    pub name: String,
    pub price: Decimal,
    pub quantity: u32,
}

/// Unrounded amounts, round only when displaying
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq)]
pub struct InvoiceTotals {
    pub subtotal: Decimal,
    pub tax: Decimal,
    pub total: Decimal,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct Invoice {
    /// `F-<6 digits>-<year>`
    pub number: String,
    pub owner_id: i64,
    pub client: String,
    pub pet_name: String,
    pub veterinarian: String,
    pub client_type: ClientType,
    pub services: Vec<ServiceLine>,
    pub products: Vec<ProductLine>,
    pub totals: InvoiceTotals,
    pub payment_method: PaymentMethod,
    pub status: InvoiceStatus,
    pub date: NaiveDate,
}
