// In-memory StatsClient for tests
use crate::model::ScraperError;
use crate::scraper::traits::StatsClient;
use std::collections::HashMap;

#[derive(Default)]
pub struct StubClient {
    responses: HashMap<String, String>,
}

impl StubClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, url: impl Into<String>, body: impl Into<String>) -> Self {
        self.responses.insert(url.into(), body.into());
        self
    }
}

#[async_trait::async_trait]
impl StatsClient for StubClient {
    async fn get_text(&self, url: &str) -> Result<String, ScraperError> {
        self.responses
            .get(url)
            .cloned()
            .ok_or_else(|| ScraperError::InvalidResponse {
                url: url.to_string(),
                status: 404,
            })
    }
}
