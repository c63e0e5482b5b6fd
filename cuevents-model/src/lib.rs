//! Core data model definitions shared across cuevents crates.

pub mod error;
pub mod event;
pub mod ids;

pub use error::{ModelError, Result as ModelResult};
pub use event::{EventRecord, RsvpStatus};
pub use ids::EventId;
