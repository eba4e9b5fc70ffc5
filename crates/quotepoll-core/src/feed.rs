use std::sync::Arc;

use crate::domain::QuoteRecord;
use crate::error::PollError;
use crate::http_client::{HttpClient, HttpRequest};

/// One poll cycle against the quotes endpoint: GET, decode, pick the first
/// record.
pub struct QuoteFeed {
    endpoint: String,
    http: Arc<dyn HttpClient>,
}

impl QuoteFeed {
    pub fn new(endpoint: impl Into<String>, http: Arc<dyn HttpClient>) -> Self {
        Self {
            endpoint: endpoint.into(),
            http,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Fetches the endpoint and returns the first record of the decoded
    /// array.
    ///
    /// # Errors
    ///
    /// Returns [`PollError::Transport`] when the request or body read fails,
    /// [`PollError::UpstreamStatus`] (fatal) when the upstream answers with
    /// status >= 400, [`PollError::Decode`] when the body is not a JSON
    /// array of quote records, and [`PollError::EmptyBatch`] when the array
    /// is empty.
    pub async fn fetch_first(&self) -> Result<QuoteRecord, PollError> {
        let request = HttpRequest::get(&self.endpoint);
        let response = self
            .http
            .execute(request)
            .await
            .map_err(|error| PollError::Transport(error.to_string()))?;

        if response.status >= 400 {
            return Err(PollError::UpstreamStatus {
                status: response.status,
            });
        }

        let records: Vec<QuoteRecord> = serde_json::from_str(&response.body)?;
        records.into_iter().next().ok_or(PollError::EmptyBatch)
    }
}
