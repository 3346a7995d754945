//! Wire types for the lead-search webhook.
//!
//! ## Observed shape
//!
//! The webhook fronts a Google Maps scraping workflow and answers with a bare
//! JSON array of listing objects. Every key is optional in practice:
//!
//! - `name`, `address`, `website`, `city`, `state`, `zipcode` are usually
//!   strings, but `zipcode` has been seen as a number. Numbers are
//!   stringified; empty strings and `null` become `None`.
//! - `rating` and `review_count` are numbers, occasionally numeric strings.
//! - `subtypes` is an array of strings when present; anything else is treated
//!   as "no categories".
//! - `emails_and_contacts.phone_numbers` is an array of strings; only the
//!   first entry is kept downstream.
//!
//! When the workflow fails upstream it may answer `200` with an object such as
//! `{"message": "Workflow was started"}` instead of an array. That case is
//! modelled as [`SearchResponse::NotASequence`].

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::WebhookError;

/// Request body: the search term under its fixed key.
#[derive(Debug, Serialize)]
pub struct SearchRequest<'a> {
    pub termo_de_busca: &'a str,
}

/// One business listing as returned by the webhook.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Listing {
    #[serde(default, deserialize_with = "lenient_text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub address: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub website: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub city: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub state: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub zipcode: Option<String>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub rating: Option<f64>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub review_count: Option<f64>,
    /// Kept raw: only an array contributes categories.
    #[serde(default)]
    pub subtypes: Value,
    /// Kept raw: the nested `phone_numbers` path is probed during normalization.
    #[serde(default)]
    pub emails_and_contacts: Value,
}

/// Decoded webhook body.
#[derive(Debug)]
pub enum SearchResponse {
    Listings(Vec<Listing>),
    /// Top-level JSON value was not an array. Carries the value for diagnostics.
    NotASequence(Value),
}

impl SearchResponse {
    /// Classifies a decoded JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`WebhookError::Deserialize`] if any array element is not a
    /// JSON object; the response is accepted or rejected as a whole.
    pub fn from_value(body: Value) -> Result<Self, WebhookError> {
        let Value::Array(items) = body else {
            return Ok(Self::NotASequence(body));
        };

        items
            .into_iter()
            .enumerate()
            .map(|(idx, item)| {
                if !item.is_object() {
                    return Err(WebhookError::Deserialize {
                        context: format!("listing[{idx}]"),
                        source: serde::de::Error::custom(format!(
                            "expected a JSON object, got {}",
                            json_kind(&item)
                        )),
                    });
                }
                serde_json::from_value::<Listing>(item).map_err(|e| WebhookError::Deserialize {
                    context: format!("listing[{idx}]"),
                    source: e,
                })
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self::Listings)
    }
}

/// Short name of a JSON value's type, for log fields and error messages.
#[must_use]
pub fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Text from a JSON string or number; `None` for null, empty strings and
/// anything structured.
pub(crate) fn text_from_value(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(text_from_value(&value))
}

fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn request_serializes_under_fixed_key() {
        let body = serde_json::to_value(SearchRequest {
            termo_de_busca: "Padarias em Curitiba",
        })
        .unwrap();
        assert_eq!(body, json!({"termo_de_busca": "Padarias em Curitiba"}));
    }

    #[test]
    fn listing_tolerates_missing_keys() {
        let listing: Listing = serde_json::from_value(json!({})).unwrap();
        assert!(listing.name.is_none());
        assert!(listing.rating.is_none());
        assert!(listing.subtypes.is_null());
    }

    #[test]
    fn listing_stringifies_numeric_zipcode() {
        let listing: Listing = serde_json::from_value(json!({"zipcode": 15600000})).unwrap();
        assert_eq!(listing.zipcode.as_deref(), Some("15600000"));
    }

    #[test]
    fn listing_treats_empty_text_as_absent() {
        let listing: Listing =
            serde_json::from_value(json!({"name": "", "address": null})).unwrap();
        assert!(listing.name.is_none());
        assert!(listing.address.is_none());
    }

    #[test]
    fn listing_parses_numeric_strings() {
        let listing: Listing =
            serde_json::from_value(json!({"rating": "4.7", "review_count": "n/a"})).unwrap();
        assert_eq!(listing.rating, Some(4.7));
        assert!(listing.review_count.is_none());
    }

    #[test]
    fn listing_ignores_unknown_keys() {
        let listing: Listing =
            serde_json::from_value(json!({"name": "Zé", "place_id": "abc", "latitude": -20.28}))
                .unwrap();
        assert_eq!(listing.name.as_deref(), Some("Zé"));
    }

    #[test]
    fn from_value_object_is_not_a_sequence() {
        let response = SearchResponse::from_value(json!({"message": "Workflow was started"}))
            .expect("objects are classified, not rejected");
        assert!(matches!(response, SearchResponse::NotASequence(_)));
    }

    #[test]
    fn from_value_rejects_non_object_element() {
        let result = SearchResponse::from_value(json!([{"name": "A"}, null]));
        assert!(
            matches!(result, Err(WebhookError::Deserialize { ref context, .. }) if context == "listing[1]"),
            "expected Deserialize(listing[1]), got: {result:?}"
        );
    }

    #[test]
    fn from_value_keeps_order_and_duplicates() {
        let response =
            SearchResponse::from_value(json!([{"name": "A"}, {"name": "B"}, {"name": "A"}]))
                .unwrap();
        let SearchResponse::Listings(listings) = response else {
            panic!("expected listings");
        };
        let names: Vec<_> = listings.iter().map(|l| l.name.as_deref()).collect();
        assert_eq!(names, vec![Some("A"), Some("B"), Some("A")]);
    }

    #[test]
    fn json_kind_names() {
        assert_eq!(json_kind(&json!(null)), "null");
        assert_eq!(json_kind(&json!({"a": 1})), "object");
        assert_eq!(json_kind(&json!("x")), "string");
    }
}
