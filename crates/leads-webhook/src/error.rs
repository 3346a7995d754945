use thiserror::Error;

/// Errors returned by the lead-search webhook client.
#[derive(Debug, Error)]
pub enum WebhookError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The webhook answered with a non-2xx status.
    #[error("webhook returned {status} {reason}")]
    UnexpectedStatus { status: u16, reason: String },

    /// The response body was not JSON, or a listing had the wrong shape.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid webhook URL \"{url}\": {reason}")]
    InvalidUrl { url: String, reason: String },
}
