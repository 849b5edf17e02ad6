//! Segment HTTP tracking API client.

use super::{ClickSink, SinkError};
use crate::event::ClickEvent;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

const TRACK_ENDPOINT: &str = "https://api.segment.io/v1/track";

pub struct SegmentSink {
    client: Client,
    write_key: String,
    timeout: Duration,
}

impl SegmentSink {
    pub fn new(write_key: impl Into<String>, timeout_secs: u64) -> Self {
        Self {
            client: Client::new(),
            write_key: write_key.into(),
            timeout: Duration::from_secs(timeout_secs),
        }
    }

    fn payload(event: &ClickEvent) -> serde_json::Value {
        serde_json::json!({
            "event": "Link Clicked",
            "properties": event,
        })
    }
}

#[async_trait]
impl ClickSink for SegmentSink {
    fn name(&self) -> &'static str {
        "segment"
    }

    async fn track(&self, event: &ClickEvent) -> anyhow::Result<()> {
        // Write key goes in as the basic-auth username, empty password
        let resp = self
            .client
            .post(TRACK_ENDPOINT)
            .basic_auth(&self.write_key, None::<&str>)
            .timeout(self.timeout)
            .json(&Self::payload(event))
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{LinkType, Section};

    #[test]
    fn payload_nests_event_as_properties() {
        let event = ClickEvent::new("Sandbox", Section::Catalog, "/sandbox")
            .with_link_type(LinkType::Cta);
        let body = SegmentSink::payload(&event);
        assert_eq!(body["event"], "Link Clicked");
        assert_eq!(body["properties"]["itemName"], "Sandbox");
        assert_eq!(body["properties"]["linkType"], "cta");
    }
}
