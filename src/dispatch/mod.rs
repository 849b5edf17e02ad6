//! The dispatch hook: best-effort fan-out of one click event to the
//! click-tracking collaborator and, for catalog clicks, the marketing webhook.

pub mod hook;


pub use hook::Dispatcher;
