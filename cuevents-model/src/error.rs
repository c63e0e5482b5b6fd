//! Model-level errors.

use std::fmt::{self, Display};

/// Errors produced by model constructors and validation routines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// An RSVP string that is neither `"RSVP'd"` nor `"Not RSVPd"`.
    InvalidRsvp(String),
    /// A required text field was empty.
    EmptyField(&'static str),
}

impl Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelError::InvalidRsvp(value) => {
                write!(f, "invalid rsvp status: {value:?}")
            }
            ModelError::EmptyField(field) => {
                write!(f, "event field `{field}` must not be empty")
            }
        }
    }
}

impl std::error::Error for ModelError {}

/// Model result alias.
pub type Result<T> = std::result::Result<T, ModelError>;
