use crate::model::{ApiResponse, ScraperError};
use serde::de::DeserializeOwned;

#[async_trait::async_trait]
pub trait StatsClient: Send + Sync {
    /// Fetches `url` and returns the response body as text.
    async fn get_text(&self, url: &str) -> Result<String, ScraperError>;
}

/// Fetches a stats endpoint and unwraps the `result` list of its envelope.
pub async fn fetch_result<T, C>(client: &C, url: &str) -> Result<Vec<T>, ScraperError>
where
    T: DeserializeOwned,
    C: StatsClient + ?Sized,
{
    let body = client.get_text(url).await?;
    let response: ApiResponse<T> =
        serde_json::from_str(&body).map_err(|source| ScraperError::Decode {
            url: url.to_string(),
            source,
        })?;
    Ok(response.result)
}
