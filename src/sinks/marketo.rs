//! Marketing-automation webhook trigger for catalog clicks.

use super::{SinkError, WebhookSink};
use crate::event::UserData;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use url::Url;

pub struct MarketoSink {
    client: Client,
    timeout: Duration,
}

impl MarketoSink {
    pub fn new(timeout_secs: u64) -> Self {
        Self {
            client: Client::new(),
            timeout: Duration::from_secs(timeout_secs),
        }
    }

    fn payload(user: Option<&UserData>, campaign: Option<&str>) -> serde_json::Value {
        serde_json::json!({
            "userData": user,
            "internalCampaign": campaign,
        })
    }
}

#[async_trait]
impl WebhookSink for MarketoSink {
    fn name(&self) -> &'static str {
        "marketo"
    }

    async fn notify(
        &self,
        user: Option<&UserData>,
        campaign: Option<&str>,
        webhook_url: Option<&str>,
    ) -> anyhow::Result<()> {
        let url = webhook_url.ok_or(SinkError::NotConfigured("marketo webhook URL"))?;
        let url = Url::parse(url).map_err(SinkError::InvalidUrl)?;
        let resp = self
            .client
            .post(url)
            .timeout(self.timeout)
            .json(&Self::payload(user, campaign))
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
