//! Normalization of webhook listings into [`leads_core::SearchRecord`].
//!
//! All absence handling happens here: after this module a field is either
//! `Some(non-empty text)` or `None`, whether the provider omitted the key,
//! sent `null`, sent an empty string, or sent an empty list.

use leads_core::SearchRecord;
use serde_json::Value;

use crate::types::{json_kind, text_from_value, Listing, SearchResponse};

/// Records decoded from one webhook response.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NormalizedResponse {
    pub records: Vec<SearchRecord>,
    /// The body was valid JSON but not an array, so it produced zero records.
    pub malformed: bool,
}

/// Maps one raw listing onto the flat record shape.
#[must_use]
pub fn normalize_listing(listing: Listing) -> SearchRecord {
    SearchRecord {
        name: listing.name,
        phone: first_phone(&listing.emails_and_contacts),
        categories: join_subtypes(&listing.subtypes),
        address: listing.address,
        website: listing.website,
        city: listing.city,
        state: listing.state,
        postal_code: listing.zipcode,
        rating: listing.rating,
        review_count: listing.review_count,
    }
}

/// Converts a decoded response into the record set, in response order.
///
/// A non-array body yields zero records with `malformed` set; the offending
/// shape is logged at `warn`.
#[must_use]
pub fn normalize_response(response: SearchResponse) -> NormalizedResponse {
    match response {
        SearchResponse::Listings(listings) => NormalizedResponse {
            records: listings.into_iter().map(normalize_listing).collect(),
            malformed: false,
        },
        SearchResponse::NotASequence(body) => {
            tracing::warn!(
                shape = json_kind(&body),
                body = %truncate_for_log(&body.to_string()),
                "webhook response is not a list; treating as zero results"
            );
            NormalizedResponse {
                records: Vec::new(),
                malformed: true,
            }
        }
    }
}

/// `emails_and_contacts.phone_numbers[0]`, if every step of the path exists.
fn first_phone(contacts: &Value) -> Option<String> {
    contacts
        .get("phone_numbers")
        .and_then(Value::as_array)
        .and_then(|numbers| numbers.first())
        .and_then(text_from_value)
}

fn join_subtypes(subtypes: &Value) -> String {
    let Some(items) = subtypes.as_array() else {
        return String::new();
    };
    items
        .iter()
        .map(|item| match item {
            Value::String(s) => s.clone(),
            Value::Null => String::new(),
            other => other.to_string(),
        })
        .collect::<Vec<_>>()
        .join(", ")
}

fn truncate_for_log(raw: &str) -> String {
    const MAX_LOG_CHARS: usize = 200;
    if raw.chars().count() <= MAX_LOG_CHARS {
        raw.to_owned()
    } else {
        let head: String = raw.chars().take(MAX_LOG_CHARS).collect();
        format!("{head}…")
    }
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
