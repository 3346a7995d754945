//! HTTP client for the lead-search webhook.
//!
//! One search is one `POST` with a JSON body; there is no pagination and no
//! retry. Non-2xx statuses surface as [`WebhookError::UnexpectedStatus`].

use std::time::Duration;

use reqwest::{Client, Url};

use crate::error::WebhookError;
use crate::types::{SearchRequest, SearchResponse};

/// Client for the lead-search webhook.
///
/// Use [`WebhookClient::new`] with the configured endpoint; tests point it
/// at a wiremock server.
pub struct WebhookClient {
    client: Client,
    endpoint: Url,
}

impl WebhookClient {
    /// Creates a client for `endpoint`.
    ///
    /// `timeout_secs` bounds the whole request when set. Searches can take
    /// minutes while the upstream workflow scrapes, so the default is no bound.
    ///
    /// # Errors
    ///
    /// Returns [`WebhookError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`WebhookError::InvalidUrl`] if `endpoint`
    /// is not an absolute http(s) URL.
    pub fn new(
        endpoint: &str,
        timeout_secs: Option<u64>,
        user_agent: &str,
    ) -> Result<Self, WebhookError> {
        let endpoint = parse_endpoint(endpoint)?;

        let mut builder = Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent);
        if let Some(secs) = timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            client: builder.build()?,
            endpoint,
        })
    }

    #[must_use]
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Posts `{"termo_de_busca": term}` and decodes the answer.
    ///
    /// The term is sent as given; trimming and the empty check belong to the
    /// caller.
    ///
    /// # Errors
    ///
    /// - [`WebhookError::Http`] on network or TLS failure.
    /// - [`WebhookError::UnexpectedStatus`] on any non-2xx status.
    /// - [`WebhookError::Deserialize`] if the body is not JSON or an array
    ///   element is not a listing object.
    pub async fn search(&self, term: &str) -> Result<SearchResponse, WebhookError> {
        tracing::debug!(endpoint = %self.endpoint, term, "posting search to webhook");

        let response = self
            .client
            .post(self.endpoint.clone())
            .json(&SearchRequest {
                termo_de_busca: term,
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(WebhookError::UnexpectedStatus {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("").to_owned(),
            });
        }

        let body = response.text().await?;
        let value: serde_json::Value =
            serde_json::from_str(&body).map_err(|e| WebhookError::Deserialize {
                context: format!("search(term={term})"),
                source: e,
            })?;

        SearchResponse::from_value(value)
    }
}

fn parse_endpoint(raw: &str) -> Result<Url, WebhookError> {
    let url = Url::parse(raw).map_err(|e| WebhookError::InvalidUrl {
        url: raw.to_owned(),
        reason: e.to_string(),
    })?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(WebhookError::InvalidUrl {
            url: raw.to_owned(),
            reason: format!("unsupported scheme '{}'", url.scheme()),
        });
    }
    Ok(url)
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
