//! Best-effort click analytics: one dispatch hook that forwards
//! user-interaction events to Segment, an enterprise data layer and, for
//! catalog clicks, a Marketo webhook. Delivery failures are swallowed so
//! analytics outages never interrupt the user experience.

pub mod config;
pub mod dispatch;
pub mod event;
pub mod sinks;

pub use config::AnalyticsConfig;
pub use dispatch::Dispatcher;
pub use event::{ClickEvent, LinkType, Section, UserData};
