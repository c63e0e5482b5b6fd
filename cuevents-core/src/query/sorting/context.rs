//! Per-screen sort configuration.
//!
//! A [`SortContext`] names a list, the sort keys its menu offers and how its
//! `Date` comparator reads dates. The two event screens differ only in their
//! context; they share the controller.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{EventsError, Result};
use crate::query::types::{DateOrdering, SortKey};
use crate::source::SampleSource;

/// Enabled sort keys and comparator settings for one list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortContext {
    name: String,
    keys: Vec<SortKey>,
    date_ordering: DateOrdering,
}

impl SortContext {
    /// Start building a context with the given display name.
    pub fn builder(name: impl Into<String>) -> SortContextBuilder {
        SortContextBuilder {
            name: name.into(),
            keys: Vec::new(),
            date_ordering: DateOrdering::default(),
        }
    }

    /// On-campus list: date, name and interest count.
    pub fn on_campus() -> Self {
        Self {
            name: ContextKind::OnCampus.title().to_string(),
            keys: vec![SortKey::Date, SortKey::Name, SortKey::InterestedCount],
            date_ordering: DateOrdering::Lexical,
        }
    }

    /// Off-campus list: the on-campus keys plus location.
    pub fn off_campus() -> Self {
        Self {
            name: ContextKind::OffCampus.title().to_string(),
            keys: vec![
                SortKey::Date,
                SortKey::Name,
                SortKey::InterestedCount,
                SortKey::Location,
            ],
            date_ordering: DateOrdering::Lexical,
        }
    }

    /// Same keys, different `Date` comparator.
    pub fn with_date_ordering(mut self, date_ordering: DateOrdering) -> Self {
        self.date_ordering = date_ordering;
        self
    }

    /// Display name, e.g. `"Off Campus"`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Enabled keys in menu order.
    pub fn keys(&self) -> &[SortKey] {
        &self.keys
    }

    /// Whether the menu offers `key`.
    pub fn is_enabled(&self, key: SortKey) -> bool {
        self.keys.contains(&key)
    }

    /// Comparator used by the `Date` key.
    pub fn date_ordering(&self) -> DateOrdering {
        self.date_ordering
    }

    /// Every record must carry a location when the list sorts by it.
    pub fn requires_location(&self) -> bool {
        self.is_enabled(SortKey::Location)
    }
}

/// Builder for custom [`SortContext`]s.
#[derive(Debug, Clone)]
pub struct SortContextBuilder {
    name: String,
    keys: Vec<SortKey>,
    date_ordering: DateOrdering,
}

impl SortContextBuilder {
    /// Enable a key. Repeats are ignored; the first position wins.
    pub fn key(mut self, key: SortKey) -> Self {
        if !self.keys.contains(&key) {
            self.keys.push(key);
        }
        self
    }

    /// Enable several keys in order.
    pub fn keys(self, keys: impl IntoIterator<Item = SortKey>) -> Self {
        keys.into_iter().fold(self, |builder, key| builder.key(key))
    }

    /// Pick the `Date` comparator.
    pub fn date_ordering(mut self, date_ordering: DateOrdering) -> Self {
        self.date_ordering = date_ordering;
        self
    }

    /// Finish the context.
    ///
    /// Fails when no key is enabled, or when `Date` (the initial sort key)
    /// is missing.
    pub fn build(self) -> Result<SortContext> {
        if self.keys.is_empty() {
            return Err(EventsError::EmptyContext(self.name));
        }
        if !self.keys.contains(&SortKey::Date) {
            return Err(EventsError::KeyNotEnabled {
                context: self.name,
                key: SortKey::Date,
            });
        }
        Ok(SortContext {
            name: self.name,
            keys: self.keys,
            date_ordering: self.date_ordering,
        })
    }
}

/// The two event screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContextKind {
    /// Events held on campus
    OnCampus,
    /// Events held elsewhere; sortable by location
    OffCampus,
}

impl ContextKind {
    /// Screen title, also the context name.
    pub fn title(&self) -> &'static str {
        match self {
            ContextKind::OnCampus => "On Campus",
            ContextKind::OffCampus => "Off Campus",
        }
    }

    /// Context preset for this screen.
    pub fn preset(&self) -> SortContext {
        match self {
            ContextKind::OnCampus => SortContext::on_campus(),
            ContextKind::OffCampus => SortContext::off_campus(),
        }
    }

    /// Compiled-in records for this screen.
    pub fn sample(&self) -> SampleSource {
        match self {
            ContextKind::OnCampus => SampleSource::OnCampus,
            ContextKind::OffCampus => SampleSource::OffCampus,
        }
    }
}

impl fmt::Display for ContextKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContextKind::OnCampus => f.write_str("on-campus"),
            ContextKind::OffCampus => f.write_str("off-campus"),
        }
    }
}

impl FromStr for ContextKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "on-campus" | "on" => Ok(ContextKind::OnCampus),
            "off-campus" | "off" => Ok(ContextKind::OffCampus),
            other => Err(format!(
                "unknown list `{other}` (expected on-campus or off-campus)"
            )),
        }
    }
}
