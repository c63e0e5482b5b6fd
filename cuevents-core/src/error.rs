//! Error types for the event lists.

use cuevents_model::{EventId, ModelError};
use thiserror::Error;

use crate::query::types::SortKey;

/// Errors raised while building or driving an event list.
#[derive(Error, Debug)]
pub enum EventsError {
    /// A key outside the context's enabled set was requested
    #[error("sort key {key} is not enabled for the {context} list")]
    KeyNotEnabled {
        /// Name of the list that rejected the key
        context: String,
        /// The rejected key
        key: SortKey,
    },

    /// A list that sorts by location was given a record without one
    #[error("event {id} in the {context} list has no location")]
    MissingLocation {
        /// Name of the list
        context: String,
        /// The offending record
        id: EventId,
    },

    /// A context was built without any sort keys
    #[error("sort context `{0}` has no sort keys")]
    EmptyContext(String),

    /// Reading a records or config file failed

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed JSON records
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Malformed TOML configuration
    #[error("Configuration error: {0}")]
    Config(#[from] toml::de::Error),

    /// A record failed validation
    #[error("Invalid event: {0}")]
    Model(#[from] ModelError),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, EventsError>;
