//! TOML configuration for the event lists.
//!
//! ```toml
//! date_ordering = "lexical"   # or "calendar"
//!
//! [off_campus]
//! records = "off_campus.json"
//! ```
//!
//! Every key is optional; an empty file is the default configuration.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::error::Result;
use crate::query::{ContextKind, DateOrdering, SortController};
use crate::source::{JsonFileSource, RecordSource};

/// Settings for both event lists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EventsConfig {
    /// Comparator used by the `Date` key in both lists
    pub date_ordering: DateOrdering,
    /// `[on_campus]` table
    pub on_campus: ContextConfig,
    /// `[off_campus]` table
    pub off_campus: ContextConfig,
}

/// Per-list settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ContextConfig {
    /// JSON file replacing the compiled-in sample records
    pub records: Option<PathBuf>,
}

impl EventsConfig {
    /// Read and parse a TOML file.
    ///
    /// Relative record paths are resolved against the file's directory.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;
        let mut config = Self::from_toml_str(&contents)?;
        if let Some(base) = path.parent() {
            config.on_campus.resolve_relative_to(base);
            config.off_campus.resolve_relative_to(base);
        }
        info!(path = %path.display(), "Loaded events config");
        Ok(config)
    }

    /// Parse TOML text. Relative paths are kept as written.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Settings for one screen.
    pub fn context(&self, kind: ContextKind) -> &ContextConfig {
        match kind {
            ContextKind::OnCampus => &self.on_campus,
            ContextKind::OffCampus => &self.off_campus,
        }
    }

    /// Build the controller for one screen from this configuration.
    pub fn controller(&self, kind: ContextKind) -> Result<SortController> {
        let context = kind.preset().with_date_ordering(self.date_ordering);
        let source: Box<dyn RecordSource> = match &self.context(kind).records {
            Some(path) => Box::new(JsonFileSource::new(path)),
            None => Box::new(kind.sample()),
        };
        SortController::from_source(context, source.as_ref())
    }
}

impl ContextConfig {
    fn resolve_relative_to(&mut self, base: &Path) {
        if let Some(records) = self.records.as_mut()
            && records.is_relative()
        {
            *records = base.join(&*records);
        }
    }
}
