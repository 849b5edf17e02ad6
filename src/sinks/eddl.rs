//! Enterprise-data-layer collector: ships `Link Clicked` entries to the
//! analytics collector endpoint.

use super::{ClickSink, SinkError};
use crate::event::ClickEvent;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

pub struct EddlSink {
    client: Client,
    collector_url: String,
    timeout: Duration,
}

impl EddlSink {
    pub fn new(collector_url: impl Into<String>, timeout_secs: u64) -> Self {
        Self {
            client: Client::new(),
            collector_url: collector_url.into(),
            timeout: Duration::from_secs(timeout_secs),
        }
    }

    fn entry(event: &ClickEvent) -> serde_json::Value {
        serde_json::json!({
            "event": "Link Clicked",
            "linkClick": {
                "linkName": event.item_name.as_str(),
                "linkType": event.link_type,
                "linkUrl": event.href.as_str(),
                "section": event.section,
            },
        })
    }
}

#[async_trait]
impl ClickSink for EddlSink {
    fn name(&self) -> &'static str {
        "eddl"
    }

    async fn track(&self, event: &ClickEvent) -> anyhow::Result<()> {
        let resp = self
            .client
            .post(&self.collector_url)
            .timeout(self.timeout)
            .json(&Self::entry(event))
            .send()
            .await
            .map_err(SinkError::RequestFailed)?;
        let status = resp.status();
        if !status.is_success() {
            return Err(SinkError::Rejected {
                status: status.as_u16(),
            }
            .into());
        }
        Ok(())
    }
}
