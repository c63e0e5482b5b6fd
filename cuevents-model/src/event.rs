//! Event records and RSVP status.

use std::fmt;
use std::str::FromStr;

use crate::error::{ModelError, Result};
use crate::ids::EventId;

/// Attendance marker shown next to each event. Display only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RsvpStatus {
    /// Attendance confirmed.
    #[cfg_attr(feature = "serde", serde(rename = "RSVP'd"))]
    Rsvpd,
    /// No response yet.
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "Not RSVPd"))]
    NotRsvpd,
}

impl RsvpStatus {
    /// Display text, matching the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            RsvpStatus::Rsvpd => "RSVP'd",
            RsvpStatus::NotRsvpd => "Not RSVPd",
        }
    }

    /// Whether the row should be highlighted as confirmed.
    pub fn is_confirmed(&self) -> bool {
        matches!(self, RsvpStatus::Rsvpd)
    }
}

impl fmt::Display for RsvpStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RsvpStatus {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "RSVP'd" => Ok(RsvpStatus::Rsvpd),
            "Not RSVPd" => Ok(RsvpStatus::NotRsvpd),
            other => Err(ModelError::InvalidRsvp(other.to_string())),
        }
    }
}

/// One event's display data.
///
/// Fields are private so a record cannot change after creation; sorting
/// moves whole records around, it never edits them.
///
/// `date` is free-form display text such as `"Sept 15, 2024"`. It is not a
/// calendar type and compares lexically unless a caller opts into calendar
/// parsing.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct EventRecord {
    #[cfg_attr(feature = "serde", serde(default))]
    id: EventId,
    date: String,
    name: String,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    location: Option<String>,
    interested_people: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    rsvp_status: RsvpStatus,
}

impl EventRecord {
    /// Create a record with a freshly generated id and no location.
    pub fn new(
        date: impl Into<String>,
        name: impl Into<String>,
        interested_people: u32,
        rsvp_status: RsvpStatus,
    ) -> Self {
        Self {
            id: EventId::new(),
            date: date.into(),
            name: name.into(),
            location: None,
            interested_people,
            rsvp_status,
        }
    }

    /// Attach a venue.
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Reject records whose date or name is blank.
    pub fn validate(&self) -> Result<()> {
        if self.date.trim().is_empty() {
            return Err(ModelError::EmptyField("date"));
        }
        if self.name.trim().is_empty() {
            return Err(ModelError::EmptyField("name"));
        }
        if self.location.as_deref().is_some_and(|l| l.trim().is_empty()) {
            return Err(ModelError::EmptyField("location"));
        }
        Ok(())
    }

    /// Stable identifier.
    pub fn id(&self) -> EventId {
        self.id
    }

    /// Display date text.
    pub fn date(&self) -> &str {
        &self.date
    }

    /// Event name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Venue, if known.
    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    /// Number of people interested.
    pub fn interested_people(&self) -> u32 {
        self.interested_people
    }

    /// Attendance marker.
    pub fn rsvp_status(&self) -> RsvpStatus {
        self.rsvp_status
    }

    /// Row caption, e.g. `"120 Interested"`.
    pub fn interested_label(&self) -> String {
        format!("{} Interested", self.interested_people)
    }
}
