use crate::config::AppConfig;
use crate::model::ScraperError;
use crate::scraper::traits::StatsClient;

use reqwest::Client;
use std::time::Duration;
use tracing::debug;

pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    pub fn new(config: &AppConfig) -> Result<Self, ScraperError> {
        let mut builder = Client::builder().user_agent(config.user_agent.as_str());
        if let Some(secs) = config.request_timeout_seconds {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            client: builder.build()?,
        })
    }
}

#[async_trait::async_trait]
impl StatsClient for HttpClient {
    async fn get_text(&self, url: &str) -> Result<String, ScraperError> {
        debug!(url = %url, "GET");
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScraperError::InvalidResponse {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        Ok(response.text().await?)
    }
}
