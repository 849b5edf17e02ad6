//! Guarded best-effort calls to the two injected collaborators.

use crate::config::AnalyticsConfig;
use crate::event::{ClickEvent, Section, UserData};
use crate::sinks::{ClickSink, EddlSink, Fanout, MarketoSink, SegmentSink, WebhookSink};
use std::sync::Arc;
use tracing::debug;

pub struct Dispatcher {
    click: Option<Arc<dyn ClickSink>>,
    webhook: Arc<dyn WebhookSink>,
    user: Option<UserData>,
    webhook_url: Option<String>,
}

impl Dispatcher {
    pub fn new(
        click: Option<Arc<dyn ClickSink>>,
        webhook: Arc<dyn WebhookSink>,
        user: Option<UserData>,
        webhook_url: Option<String>,
    ) -> Self {
        Self {
            click,
            webhook,
            user,
            webhook_url,
        }
    }

    /// Wire the production sinks from config. Destinations without credentials
    /// or a URL simply aren't registered.
    pub fn from_config(config: &AnalyticsConfig, user: Option<UserData>) -> Self {
        let timeout = config.request_timeout_seconds;
        let mut sinks: Vec<Arc<dyn ClickSink>> = Vec::new();
        if let Some(key) = &config.segment_write_key {
            sinks.push(Arc::new(SegmentSink::new(key.as_str(), timeout)));
        }
        if let Some(url) = &config.eddl_collector_url {
            sinks.push(Arc::new(EddlSink::new(url.as_str(), timeout)));
        }
        let click: Option<Arc<dyn ClickSink>> = if sinks.is_empty() {
            None
        } else {
            Some(Arc::new(Fanout::new(sinks)))
        };
        Self::new(
            click,
            Arc::new(MarketoSink::new(timeout)),
            user,
            config.marketo_webhook_url.clone(),
        )
    }

    /// Forward one click event. Never fails, never blocks the caller on an
    /// analytics outage beyond the outbound calls themselves.
    pub async fn track(&self, event: ClickEvent) {
        if let Some(sink) = &self.click {
            if let Err(err) = sink.track(&event).await {
                debug!(sink = sink.name(), "click tracking failed: {err:#}");
            }
        }

        // Marketing webhook fires for catalog clicks only, and only ever sees
        // the reduced field set.
        if event.section == Section::Catalog {
            if let Err(err) = self
                .webhook
                .notify(
                    self.user.as_ref(),
                    event.internal_campaign.as_deref(),
                    self.webhook_url.as_deref(),
                )
                .await
            {
                debug!(sink = self.webhook.name(), "webhook notify failed: {err:#}");
            }
        }
    }
}
