//! # Invoice API Module
//!
//! Invoice arithmetic, numbering and billing statistics.
//!
//! Amounts are exact [Decimal] values, they are rounded to two decimals only
//! when formatted with [fmt_money].

use chrono::{Datelike, NaiveDate, Utc};
use derive_more::Display;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::filter::{self, Listing};
use crate::{
    consts,
    models::invoice::{
        ClientType, Invoice, InvoiceStatus, InvoiceTotals, PaymentMethod, ProductLine, ServiceLine,
    },
};

/// When the IVA is charged
#[derive(Debug, Display, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TaxRule {
    /// Every invoice pays IVA
    #[default]
    #[display("unconditional")]
    Unconditional,
    /// Final consumers only pay IVA above
    /// [IVA_FINAL_CONSUMER_THRESHOLD](consts::IVA_FINAL_CONSUMER_THRESHOLD)
    #[display("final_consumer_threshold")]
    FinalConsumerThreshold,
}

impl FromStr for TaxRule {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "unconditional" => Ok(TaxRule::Unconditional),
            "final_consumer_threshold" => Ok(TaxRule::FinalConsumerThreshold),
            other => anyhow::bail!("unknown tax rule: {other}"),
        }
    }
}

impl TaxRule {
    pub fn applies(&self, client_type: ClientType, subtotal: Decimal) -> bool {
        match self {
            TaxRule::Unconditional => true,
            TaxRule::FinalConsumerThreshold => {
                client_type != ClientType::ConsumidorFinal
                    || subtotal > consts::IVA_FINAL_CONSUMER_THRESHOLD
            }
        }
    }
}

pub fn compute_subtotal(services: &[ServiceLine], products: &[ProductLine]) -> Decimal {
    let services_total = services.iter().map(|s| s.price).sum::<Decimal>();
    let products_total = products
        .iter()
        .map(|p| p.price * Decimal::from(p.quantity))
        .sum::<Decimal>();

    services_total + products_total
}

pub fn compute_totals(
    services: &[ServiceLine],
    products: &[ProductLine],
    rule: TaxRule,
    client_type: ClientType,
) -> InvoiceTotals {
    let subtotal = compute_subtotal(services, products);
    let tax = if rule.applies(client_type, subtotal) {
        subtotal * consts::IVA_RATE
    } else {
        Decimal::ZERO
    };

    InvoiceTotals {
        subtotal,
        tax,
        total: subtotal + tax,
    }
}

/// `$12.30`
pub fn fmt_money(amount: Decimal) -> String {
    format!(
        "${:.2}",
        amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    )
}

/// Totals formatted for display
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DisplayTotals {
    pub subtotal: String,
    pub tax: String,
    pub total: String,
}

impl From<InvoiceTotals> for DisplayTotals {
    fn from(totals: InvoiceTotals) -> Self {
        Self {
            subtotal: fmt_money(totals.subtotal),
            tax: fmt_money(totals.tax),
            total: fmt_money(totals.total),
        }
    }
}

/// `F-<last 6 digits of epoch millis>-<year>`
pub fn build_invoice_number(epoch_millis: i64, year: i32) -> String {
    format!("F-{:06}-{year}", epoch_millis.rem_euclid(1_000_000))
}

/// Invoice content before numbering and totals
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct InvoiceDraft {
    pub owner_id: i64,
    pub client: String,
    pub pet_name: String,
    pub veterinarian: String,
    #[serde(default)]
    pub client_type: ClientType,
    #[serde(default)]
    pub services: Vec<ServiceLine>,
    #[serde(default)]
    pub products: Vec<ProductLine>,
    #[serde(default)]
    pub payment_method: PaymentMethod,
}

#[derive(Debug, Clone, Serialize)]
pub struct InvoicePreview {
    pub totals: InvoiceTotals,
    pub display: DisplayTotals,
    pub tax_applied: bool,
}

pub fn preview_invoice(draft: &InvoiceDraft, rule: TaxRule) -> InvoicePreview {
    let totals = compute_totals(&draft.services, &draft.products, rule, draft.client_type);

    InvoicePreview {
        tax_applied: rule.applies(draft.client_type, totals.subtotal),
        display: totals.into(),
        totals,
    }
}

/// New invoices start as `pendiente` dated today
pub fn create_invoice(draft: InvoiceDraft, rule: TaxRule, today: NaiveDate) -> Invoice {
    let totals = compute_totals(&draft.services, &draft.products, rule, draft.client_type);

    Invoice {
        number: build_invoice_number(Utc::now().timestamp_millis(), today.year()),
        owner_id: draft.owner_id,
        client: draft.client,
        pet_name: draft.pet_name,
        veterinarian: draft.veterinarian,
        client_type: draft.client_type,
        services: draft.services,
        products: draft.products,
        totals,
        payment_method: draft.payment_method,
        status: InvoiceStatus::Pendiente,
        date: today,
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct InvoiceQuery {
    #[serde(default)]
    pub search: String,
    #[serde(default, deserialize_with = "filter::selector")]
    pub status: Option<InvoiceStatus>,
    #[serde(default)]
    pub preview: bool,
}

pub fn filter_invoices(invoices: Vec<Invoice>, query: &InvoiceQuery) -> Vec<Invoice> {
    invoices
        .into_iter()
        .filter(|i| {
            filter::matches_query(&query.search, &[&i.number, &i.client, &i.pet_name])
                && filter::matches_selector(query.status.as_ref(), &i.status)
        })
        .collect()
}

#[derive(Debug, Default, Serialize, Clone, PartialEq)]
pub struct BillingStats {
    pub invoices: usize,
    /// Σ totals of paid invoices
    pub revenue: Decimal,
    pub pending_amount: Decimal,
    pub overdue: usize,
}

pub fn billing_stats(invoices: &[Invoice]) -> BillingStats {
    let sum_by = |status: InvoiceStatus| {
        invoices
            .iter()
            .filter(|i| i.status == status)
            .map(|i| i.totals.total)
            .sum::<Decimal>()
    };

    BillingStats {
        invoices: invoices.len(),
        revenue: sum_by(InvoiceStatus::Pagada),
        pending_amount: sum_by(InvoiceStatus::Pendiente),
        overdue: invoices
            .iter()
            .filter(|i| i.status == InvoiceStatus::Vencida)
            .count(),
    }
}

#[derive(Debug, Serialize)]
pub struct BillingPage {
    pub invoices: Listing<Invoice>,
    pub stats: BillingStats,
    pub tax_rule: TaxRule,
}

pub fn build_billing_page(
    invoices: Vec<Invoice>,
    query: &InvoiceQuery,
    tax_rule: TaxRule,
) -> BillingPage {
    let stats = billing_stats(&invoices);

    BillingPage {
        invoices: Listing::new(filter_invoices(invoices, query), query.preview),
        stats,
        tax_rule,
    }
}
