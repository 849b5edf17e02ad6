//! Destination configuration, loadable from the process environment.

use serde::{Deserialize, Serialize};
use std::env;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct AnalyticsConfig {
    pub segment_write_key: Option<String>,
    pub eddl_collector_url: Option<String>,
    pub marketo_webhook_url: Option<String>,
    pub request_timeout_seconds: u64,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            segment_write_key: None,
            eddl_collector_url: None,
            marketo_webhook_url: None,
            request_timeout_seconds: 10,
        }
    }
}

impl AnalyticsConfig {
    /// Read overrides from the environment (a `.env` file is honored if present).
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();
        let mut config = Self::default();
        if let Ok(key) = env::var("SEGMENT_WRITE_KEY") {
            config.segment_write_key = Some(key);
        }
        if let Ok(url) = env::var("EDDL_COLLECTOR_URL") {
            config.eddl_collector_url = Some(url);
        }
        if let Ok(url) = env::var("MARKETO_WEBHOOK_URL") {
            config.marketo_webhook_url = Some(url);
        }
        if let Ok(secs) = env::var("ANALYTICS_TIMEOUT_SECONDS") {
            if let Ok(secs) = secs.parse() {
                config.request_timeout_seconds = secs;
            }
        }
        config
    }
}
