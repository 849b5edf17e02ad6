//! Destination traits + concrete sink implementations.

pub mod eddl;
pub mod marketo;
pub mod segment;

pub use eddl::EddlSink;
pub use marketo::MarketoSink;
pub use segment::SegmentSink;

use crate::event::{ClickEvent, UserData};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

#[async_trait]
pub trait ClickSink: Send + Sync {
    /// Human-readable name for logging.
    fn name(&self) -> &'static str;

    /// Deliver one click event.
    async fn track(&self, event: &ClickEvent) -> anyhow::Result<()>;
}

#[async_trait]
pub trait WebhookSink: Send + Sync {
    fn name(&self) -> &'static str;

    /// Fire the webhook with the reduced field set, never the full event.
    async fn notify(
        &self,
        user: Option<&UserData>,
        campaign: Option<&str>,
        webhook_url: Option<&str>,
    ) -> anyhow::Result<()>;
}

#[derive(Error, Debug)]
pub enum SinkError {
    #[error("Destination not configured: {0}")]
    NotConfigured(&'static str),
    #[error("Invalid destination URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("Request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),
    #[error("Endpoint rejected the event: HTTP {status}")]
    Rejected { status: u16 },
}

/// Fans a click out to every registered sink in turn. One destination failing
/// never stops the others; per-sink failures are traced and dropped.
pub struct Fanout {
    sinks: Vec<Arc<dyn ClickSink>>,
}

impl Fanout {
    pub fn new(sinks: Vec<Arc<dyn ClickSink>>) -> Self {
        Self { sinks }
    }
}

#[async_trait]
impl ClickSink for Fanout {
    fn name(&self) -> &'static str {
        "fanout"
    }

    async fn track(&self, event: &ClickEvent) -> anyhow::Result<()> {
        for sink in &self.sinks {
            if let Err(err) = sink.track(event).await {
                debug!(sink = sink.name(), "click delivery failed: {err:#}");
            }
        }
        Ok(())
    }
}
