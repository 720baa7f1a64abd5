//! Demo client for the recommendation service
//!
//! [`RecommendationClient`] performs the single HTTP call; [`page`] renders the
//! interactive page around it.

pub mod page;

use std::time::Duration;

use reqwest::{Client, StatusCode};

use crate::{
    error::ClientError,
    models::{RecommendationRequest, RecommendationResponse},
};

/// Applied to every call, connect and body included
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone)]
pub struct RecommendationClient {
    client: Client,
}

impl RecommendationClient {
    pub fn new() -> Result<Self, ClientError> {
        Self::with_timeout(REQUEST_TIMEOUT)
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self, ClientError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }

    /// Issues one `POST {backend_url}/recommend` with an empty context
    ///
    /// No retry is attempted. A non-200 answer is returned as
    /// [`ClientError::Status`] carrying the raw body.
    pub async fn recommend(
        &self,
        backend_url: &str,
        user_id: i64,
    ) -> Result<RecommendationResponse, ClientError> {
        let url = recommend_url(backend_url);
        tracing::debug!(url = %url, user_id, "Requesting recommendations");

        let response = self
            .client
            .post(&url)
            .json(&RecommendationRequest::new(user_id))
            .send()
            .await
            .map_err(|e| {
                tracing::warn!(url = %url, error = %e, "Backend call failed");
                e
            })?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = match response.text().await {
                Ok(body) => body,
                Err(e) => {
                    tracing::warn!(url = %url, error = %e, "Failed to read error response body");
                    format!("<failed to read response body: {}>", e)
                }
            };
            tracing::warn!(url = %url, status = status.as_u16(), "Backend returned an error");
            return Err(ClientError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.json::<RecommendationResponse>().await?)
    }
}

fn recommend_url(backend_url: &str) -> String {
    format!("{}/recommend", backend_url.trim().trim_end_matches('/'))
}
