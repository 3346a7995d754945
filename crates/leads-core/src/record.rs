//! The normalized, display- and export-ready form of one business listing.

use serde::{Deserialize, Serialize};

/// Shown in the results table wherever a field is absent.
pub const PLACEHOLDER_DASH: &str = "-";

/// One business listing after normalization.
///
/// Records carry no identity beyond their position in the result set;
/// duplicates returned by the endpoint are kept as-is.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchRecord {
    pub name: Option<String>,
    /// First number of the provider's contact list.
    pub phone: Option<String>,
    /// Provider subtypes joined with `", "`; empty when none were sent.
    pub categories: String,
    pub address: Option<String>,
    /// Raw host or URL as sent by the provider. May lack a scheme.
    pub website: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub postal_code: Option<String>,
    pub rating: Option<f64>,
    pub review_count: Option<f64>,
}

impl SearchRecord {
    /// Website with any leading `http://` / `https://` removed, so bare hosts
    /// and prefixed URLs converge on the same form.
    #[must_use]
    pub fn website_host(&self) -> Option<&str> {
        self.website.as_deref().map(strip_scheme)
    }

    /// Link target for the website column: always `http://{host}`.
    #[must_use]
    pub fn website_href(&self) -> Option<String> {
        self.website_host().map(|host| format!("http://{host}"))
    }

    /// Categories as an optional value, treating the empty string as absent.
    #[must_use]
    pub fn categories_opt(&self) -> Option<&str> {
        Some(self.categories.as_str()).filter(|c| !c.is_empty())
    }
}

/// Strips one leading `http://` or `https://`, case-sensitively.
#[must_use]
pub fn strip_scheme(url: &str) -> &str {
    url.strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .unwrap_or(url)
}

/// Display value for an optional text field: the text, or the placeholder dash.
#[must_use]
pub fn or_dash(value: Option<&str>) -> &str {
    value.unwrap_or(PLACEHOLDER_DASH)
}
