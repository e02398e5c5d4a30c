use std::time::Duration;

use reqwest::header::USER_AGENT;
use reqwest::Client;

use crate::adapters::user_agent::random_user_agent;
use crate::core::trackers::BEST_TRACKERS_URL;
use crate::domain::ports::TrackerListSource;
use crate::utils::error::{Result, TrackerError};

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Plain-text tracker list served over HTTP(S).
#[derive(Debug, Clone)]
pub struct HttpTrackerSource {
    client: Client,
    url: String,
    timeout: Duration,
}

impl HttpTrackerSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            url: url.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Default for HttpTrackerSource {
    fn default() -> Self {
        Self::new(BEST_TRACKERS_URL)
    }
}

impl TrackerListSource for HttpTrackerSource {
    async fn fetch(&self) -> Result<String> {
        let user_agent = random_user_agent();
        tracing::debug!("Requesting best trackers from: {}", self.url);

        let response = self
            .client
            .get(&self.url)
            .timeout(self.timeout)
            .header(USER_AGENT, user_agent)
            .send()
            .await?;

        tracing::debug!("Best trackers response status: {}", response.status());

        let status = response.status();
        if !status.is_success() {
            return Err(TrackerError::HttpStatusError {
                status: status.as_u16(),
            });
        }

        Ok(response.text().await?)
    }
}
