//! Request bodies of the dashboard forms.
//!
//! Each form deserializes from JSON and derives its field rules with
//! [validator]. `validate` adds the rules that depend on other fields or on
//! the current date, then sanitizes the free text with [ammonia] and returns
//! the typed input expected by [`crate::api`], or every failing field with
//! its message. Rules run on the submitted text, sanitizing only shapes what
//! is stored and echoed back.

pub mod clinic;
pub mod invoice;
pub mod pet;
pub mod police;

use serde::{
    Deserialize, Deserializer, Serialize,
    de::{DeserializeOwned, IntoDeserializer, value::StrDeserializer},
};
use std::borrow::Cow;
use validator::{Validate, ValidationError, ValidationErrors};

pub const REQUIRED_FIELD_MSG: &str = "Campo obligatorio";

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FieldError {
    /// camelCase name of the JSON field, nested fields are dotted
    pub field: String,
    pub message: String,
}

/// Failures of the derived rules, empty when they all pass
pub fn rule_errors(form: &impl Validate) -> ValidationErrors {
    form.validate().err().unwrap_or_else(ValidationErrors::new)
}

/// Records `message` for `field` unless `is_valid`
pub fn ensure(
    errors: &mut ValidationErrors,
    is_valid: bool,
    field: &'static str,
    message: &'static str,
) {
    if !is_valid {
        let mut error = ValidationError::new("invalid");
        error.message = Some(Cow::Borrowed(message));
        errors.add(field, error);
    }
}

fn camel_case(field: &str) -> String {
    let mut camel = String::with_capacity(field.len());
    let mut upper_next = false;

    for c in field.chars() {
        if c == '_' {
            upper_next = true;
        } else if upper_next {
            camel.extend(c.to_uppercase());
            upper_next = false;
        } else {
            camel.push(c);
        }
    }

    camel
}

/// Flattens the failures ordered by field name, `prefix` is prepended to
/// every field
pub fn field_errors(errors: &ValidationErrors, prefix: &str) -> Vec<FieldError> {
    let mut failures = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, field_failures)| {
            let field = format!("{prefix}{}", camel_case(&field));
            field_failures.iter().map(move |failure| FieldError {
                field: field.clone(),
                message: failure
                    .message
                    .as_deref()
                    .unwrap_or(&*failure.code)
                    .to_string(),
            })
        })
        .collect::<Vec<_>>();
    failures.sort_by(|a, b| a.field.cmp(&b.field));

    failures
}

pub fn finish<T>(errors: ValidationErrors, value: T) -> Result<T, Vec<FieldError>> {
    if errors.is_empty() {
        return Ok(value);
    }

    Err(field_errors(&errors, ""))
}

/// [`finish`] over the errors of a form and its nested forms, each paired
/// with the prefix of its fields
pub fn finish_nested<T>(
    parts: &[(&str, ValidationErrors)],
    value: T,
) -> Result<T, Vec<FieldError>> {
    let mut failures = parts
        .iter()
        .flat_map(|(prefix, errors)| field_errors(errors, prefix))
        .collect::<Vec<_>>();
    if failures.is_empty() {
        return Ok(value);
    }
    failures.sort_by(|a, b| a.field.cmp(&b.field));

    Err(failures)
}

/// Strips surrounding whitespace while deserializing
pub fn trimmed<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(String::deserialize(deserializer)?.trim().to_string())
}

/// Trimmed and html-sanitized user text
pub fn clean_text(value: &str) -> String {
    ammonia::clean(value.trim())
}

/// Reads a snake_case enum value, e.g. `cita_pendiente`
pub fn parse_enum<T: DeserializeOwned>(raw: &str) -> Option<T> {
    let value = raw.trim().to_lowercase();
    let deserializer: StrDeserializer<'_, serde::de::value::Error> =
        value.as_str().into_deserializer();

    T::deserialize(deserializer).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::pet::PetStatus;

    #[derive(Debug, Default, Deserialize, Validate)]
    #[serde(rename_all = "camelCase", default)]
    struct ContactForm {
        #[serde(deserialize_with = "trimmed")]
        #[validate(length(min = 1, message = "Campo obligatorio"))]
        full_name: String,
        #[validate(range(min = 1, message = "ID inválido"))]
        owner_id: i64,
    }

    #[test]
    fn test_field_errors_are_camel_case_and_ordered() {
        let mut errors = rule_errors(&ContactForm::default());
        ensure(&mut errors, true, "age", "never");
        ensure(
            &mut errors,
            false,
            "weight",
            "Formato de peso inválido (ej: 25.5 kg)",
        );

        assert_eq!(
            finish(errors, ()).unwrap_err(),
            vec![
                FieldError {
                    field: "fullName".into(),
                    message: REQUIRED_FIELD_MSG.into(),
                },
                FieldError {
                    field: "ownerId".into(),
                    message: "ID inválido".into(),
                },
                FieldError {
                    field: "weight".into(),
                    message: "Formato de peso inválido (ej: 25.5 kg)".into(),
                },
            ]
        );
    }

    #[test]
    fn test_prefixed_field_errors() {
        let errors = rule_errors(&ContactForm {
            full_name: "Ana".into(),
            owner_id: 0,
        });

        assert_eq!(field_errors(&errors, "owner.")[0].field, "owner.ownerId");
    }

    #[test]
    fn test_finish_nested_orders_across_parts() {
        let mut pet = ValidationErrors::new();
        ensure(&mut pet, false, "name", REQUIRED_FIELD_MSG);
        let owner = rule_errors(&ContactForm {
            full_name: "".into(),
            owner_id: 3,
        });

        let errors = finish_nested(&[("pet.", pet), ("", owner)], ()).unwrap_err();
        assert_eq!(
            errors.iter().map(|e| e.field.as_str()).collect::<Vec<_>>(),
            vec!["fullName", "pet.name"]
        );
        assert!(finish_nested(&[("", ValidationErrors::new())], 1).is_ok());
    }

    #[test]
    fn test_whitespace_only_text_is_missing() {
        let form: ContactForm =
            serde_json::from_value(serde_json::json!({ "fullName": "   ", "ownerId": 1 }))
                .unwrap();

        assert_eq!(form.full_name, "");
        assert_eq!(
            field_errors(&rule_errors(&form), "")[0].message,
            REQUIRED_FIELD_MSG
        );
    }

    #[test]
    fn test_camel_case() {
        assert_eq!(camel_case("seized_species"), "seizedSpecies");
        assert_eq!(camel_case("name"), "name");
    }

    #[test]
    fn test_parse_enum() {
        assert_eq!(
            parse_enum::<PetStatus>(" Cita_Pendiente "),
            Some(PetStatus::CitaPendiente)
        );
        assert_eq!(parse_enum::<PetStatus>("dormido"), None);
    }

    #[test]
    fn test_clean_text_strips_scripts() {
        assert_eq!(clean_text(" Max<script>alert(1)</script> "), "Max");
    }
}
