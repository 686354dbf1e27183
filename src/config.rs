use crate::model::{ConfigError, InputError, SpecTree};
use serde::Deserialize;
use std::fs;

#[derive(Debug, Clone, Deserialize)]
pub struct ProductConfig {
    pub mfr_number: String,
    pub model_name: String,
}

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    /// Prepended to relative product links found on the search page.
    pub site_origin: String,
    /// Search endpoint; the encoded search term is appended verbatim.
    pub search_url: String,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    #[serde(default = "default_timeout")]
    pub request_timeout_seconds: u64,
    pub products: Vec<ProductConfig>,
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) SpecSniperBot/0.1".to_string()
}

fn default_timeout() -> u64 {
    15
}

impl AppConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.search_url.trim().is_empty() {
            return Err(ConfigError::Invalid("search_url is empty".into()));
        }
        if self.site_origin.trim().is_empty() {
            return Err(ConfigError::Invalid("site_origin is empty".into()));
        }
        if self.request_timeout_seconds == 0 {
            return Err(ConfigError::Invalid("request_timeout_seconds must be positive".into()));
        }
        Ok(())
    }
}

pub fn parse_config(content: &str) -> Result<AppConfig, ConfigError> {
    let config: AppConfig = serde_json::from_str(content)?;
    config.validate()?;
    Ok(config)
}

pub fn load_config(path: &str) -> Result<AppConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    parse_config(&content)
}

/// Reads a saved specification tree (category -> label -> value JSON).
pub fn load_spec_tree(path: &str) -> Result<SpecTree, InputError> {
    let content = fs::read_to_string(path)?;
    let value: serde_json::Value = serde_json::from_str(&content)?;
    Ok(SpecTree::from_json(&value))
}
