use crate::config::AppConfig;
use crate::fetch::traits::Scraper;
use crate::model::ScraperError;

use reqwest::Client;
use std::time::Duration;
use tracing::debug;

pub struct ScraperImpl {
    client: Client,
    search_url: String,
}

impl ScraperImpl {
    pub fn new(config: &AppConfig) -> Result<Self, ScraperError> {
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(Duration::from_secs(config.request_timeout_seconds))
            .build()
            .map_err(|e| ScraperError::HttpError(e.to_string()))?;

        Ok(Self {
            client,
            search_url: config.search_url.clone(),
        })
    }

    pub fn search_url_for_mfr(&self, mfr_number: &str) -> String {
        format!("{}{}", self.search_url, encode_search_term(&mfr_number.replace('/', "%2F")))
    }

    pub fn search_url_for_model(&self, model_name: &str) -> String {
        format!("{}{}", self.search_url, encode_search_term(model_name))
    }
}

/// Makes a free-text term safe for the catalog's search query string:
/// inch marks become `in`, commas and parentheses are dropped, spaces are escaped.
pub fn encode_search_term(term: &str) -> String {
    term.replace('"', "in")
        .replace([',', '(', ')'], "")
        .replace(' ', "%20")
}

#[async_trait::async_trait]
impl Scraper for ScraperImpl {
    async fn fetch(&self, url: &str) -> Result<String, ScraperError> {
        debug!("GET {}", url);
        let response = self.client.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                ScraperError::Timeout
            } else {
                ScraperError::HttpError(e.to_string())
            }
        })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ScraperError::HttpError(e.to_string()))?;

        if !status.is_success() {
            return Err(ScraperError::InvalidResponse(body));
        }

        Ok(body)
    }
}
