//! Search and selector helpers shared by every list page.

use serde::{
    Deserialize, Deserializer, Serialize,
    de::{DeserializeOwned, Error, IntoDeserializer, value::StrDeserializer},
};

use crate::consts;

/// Selector values meaning "no filter"
const ALL_SELECTOR_VALUES: [&str; 4] = ["", "todos", "todas", "all"];

/// Case-insensitive substring match
pub fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// The empty query matches everything, otherwise any field must contain it.
/// Surrounding spaces are part of the query.
pub fn matches_query(query: &str, fields: &[&str]) -> bool {
    query.is_empty() || fields.iter().any(|f| contains_ci(f, query))
}

/// An inactive selector (`None`) matches every value
pub fn matches_selector<T: PartialEq>(selector: Option<&T>, value: &T) -> bool {
    selector.is_none_or(|s| s == value)
}

fn normalize_selector(raw: &str) -> String {
    raw.trim().to_lowercase().replace([' ', '-'], "_")
}

/// Deserializes an enum selector from a query string value.
///
/// `Todos`, `todas`, `all` and the empty string map to `None`.
/// Values are normalized, so `Cita Pendiente` reads as `cita_pendiente`.
pub fn selector<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    let Some(value) = raw
        .map(|v| normalize_selector(&v))
        .filter(|v| !ALL_SELECTOR_VALUES.contains(&v.as_str()))
    else {
        return Ok(None);
    };

    let value_deserializer: StrDeserializer<'_, serde::de::value::Error> =
        value.as_str().into_deserializer();

    T::deserialize(value_deserializer)
        .map(Some)
        .map_err(|e| D::Error::custom(format!("invalid selector value {value}: {e}")))
}

/// Same as [selector] for free-text categories, the value is kept as sent
pub fn category_selector<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;

    Ok(raw.filter(|v| !ALL_SELECTOR_VALUES.contains(&v.to_lowercase().as_str())))
}

/// Categories are compared exactly
pub fn matches_category(selector: Option<&String>, category: &str) -> bool {
    selector.is_none_or(|s| s == category)
}

/// Filtered records of a page. With `preview` only the first
/// [LIST_PREVIEW_LEN](consts::LIST_PREVIEW_LEN) are kept and `has_more`
/// tells whether the rest were cut.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct Listing<T> {
    pub items: Vec<T>,
    /// Number of matches before the preview cut
    pub total: usize,
    pub has_more: bool,
}

impl<T> Listing<T> {
    pub fn new(mut items: Vec<T>, preview: bool) -> Self {
        let total = items.len();
        let has_more = preview && total > consts::LIST_PREVIEW_LEN;

        if has_more {
            items.truncate(consts::LIST_PREVIEW_LEN);
        }

        Self {
            items,
            total,
            has_more,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::pet::PetStatus;
    use ntex::web::types::Query;

    #[derive(Debug, Deserialize)]
    struct StatusQuery {
        #[serde(default, deserialize_with = "selector")]
        status: Option<PetStatus>,
        #[serde(default, deserialize_with = "category_selector")]
        category: Option<String>,
    }

    fn parse(query: &str) -> StatusQuery {
        Query::<StatusQuery>::from_query(query).unwrap().into_inner()
    }

    #[test]
    fn test_contains_ci() {
        assert!(contains_ci("Golden Retriever", "golden"));
        assert!(contains_ci("María García", "GARCÍA"));
        assert!(!contains_ci("Persa", "siam"));
    }

    #[test]
    fn test_empty_query_matches_everything() {
        assert!(matches_query("", &["Max"]));
        assert!(!matches_query("zzz", &["Max", "Luna"]));
    }

    #[test]
    fn test_query_spaces_are_matched_literally() {
        assert!(!matches_query("   ", &["Max", "Luna"]));
        assert!(!matches_query(" max", &["Max"]));
        assert!(matches_query("n r", &["Golden Retriever"]));
    }

    #[test]
    fn test_selector_all_values_are_inactive() {
        for query in ["", "status=todos", "status=Todas", "status=all", "status="] {
            assert!(parse(query).status.is_none(), "{query}");
        }
    }

    #[test]
    fn test_selector_normalizes_value() {
        assert_eq!(
            parse("status=Cita%20Pendiente").status,
            Some(PetStatus::CitaPendiente)
        );
        assert_eq!(parse("status=saludable").status, Some(PetStatus::Saludable));
    }

    #[test]
    fn test_selector_rejects_unknown_value() {
        assert!(Query::<StatusQuery>::from_query("status=dormido").is_err());
    }

    #[test]
    fn test_category_selector() {
        assert_eq!(parse("category=Todas").category, None);
        assert_eq!(
            parse("category=Cirug%C3%ADas").category,
            Some("Cirugías".to_string())
        );
        assert!(matches_category(Some(&"Cirugías".to_string()), "Cirugías"));
        assert!(!matches_category(Some(&"cirugías".to_string()), "Cirugías"));
        assert!(!matches_category(Some(&" Cirugías".to_string()), "Cirugías"));
    }

    #[test]
    fn test_listing_preview() {
        let listing = Listing::new((0..8).collect::<Vec<_>>(), true);
        assert_eq!(listing.items, vec![0, 1, 2, 3, 4]);
        assert_eq!(listing.total, 8);
        assert!(listing.has_more);

        let listing = Listing::new((0..8).collect::<Vec<_>>(), false);
        assert_eq!(listing.items.len(), 8);
        assert!(!listing.has_more);

        let listing = Listing::new(vec![1, 2], true);
        assert!(!listing.has_more);
    }
}
