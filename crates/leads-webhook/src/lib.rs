pub mod client;
pub mod error;
pub mod normalize;
pub mod types;

pub use client::WebhookClient;
pub use error::WebhookError;
pub use normalize::{normalize_listing, normalize_response, NormalizedResponse};
pub use types::{Listing, SearchRequest, SearchResponse};
