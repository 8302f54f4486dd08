use serde::{Deserialize, Serialize};

use validator::Validate;

use super::{FieldError, clean_text, ensure, finish, rule_errors, trimmed};
use crate::{api, models};

/// Invoice modal body, also used for the totals preview
#[derive(Debug, Clone, Default, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct InvoiceForm {
    pub owner_id: i64,
    #[serde(deserialize_with = "trimmed")]
    #[validate(length(min = 1, message = "Campo obligatorio"))]
    pub client: String,
    pub pet_name: String,
    pub veterinarian: String,
    pub client_type: models::invoice::ClientType,
    pub services: Vec<models::invoice::ServiceLine>,
    pub products: Vec<models::invoice::ProductLine>,
    pub payment_method: models::invoice::PaymentMethod,
}

impl InvoiceForm {
    pub fn validate(self) -> Result<api::invoice::InvoiceDraft, Vec<FieldError>> {
        let mut errors = rule_errors(&self);
        ensure(
            &mut errors,
            !self.services.is_empty() || !self.products.is_empty(),
            "services",
            "Agrega al menos un servicio o producto",
        );
        ensure(
            &mut errors,
            self.services.iter().all(|s| !s.price.is_sign_negative())
                && self.products.iter().all(|p| !p.price.is_sign_negative()),
            "price",
            "Precio inválido",
        );
        ensure(
            &mut errors,
            self.products.iter().all(|p| p.quantity >= 1),
            "quantity",
            "La cantidad mínima es 1",
        );

        let draft = api::invoice::InvoiceDraft {
            owner_id: self.owner_id,
            client: clean_text(&self.client),
            pet_name: clean_text(&self.pet_name),
            veterinarian: clean_text(&self.veterinarian),
            client_type: self.client_type,
            services: self
                .services
                .into_iter()
                .map(|s| models::invoice::ServiceLine {
                    name: clean_text(&s.name),
                    price: s.price,
                })
                .collect(),
            products: self
                .products
                .into_iter()
                .map(|p| models::invoice::ProductLine {
                    name: clean_text(&p.name),
                    ..p
                })
                .collect(),
            payment_method: self.payment_method,
        };

        finish(errors, draft)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_invoice_form_requires_client_and_lines() {
        let errors = InvoiceForm::default().validate().unwrap_err();

        assert_eq!(
            errors.iter().map(|e| e.field.as_str()).collect::<Vec<_>>(),
            vec!["client", "services"]
        );
    }

    #[test]
    fn test_invoice_form_rejects_zero_quantity() {
        let form = InvoiceForm {
            client: "María González".into(),
            products: vec![models::invoice::ProductLine {
                name: "Collar".into(),
                price: dec!(10),
                quantity: 0,
            }],
            ..Default::default()
        };

        assert_eq!(form.validate().unwrap_err()[0].field, "quantity");
    }
}
