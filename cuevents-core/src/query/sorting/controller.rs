//! Sortable event list.
//!
//! [`SortController`] owns one screen's records and its [`SortState`].
//! [`SortController::select_key`] is the only operation that reorders the
//! records; reading them never reshuffles anything.

use cuevents_model::{EventId, EventRecord};
use tracing::{debug, info, warn};

use super::context::SortContext;
use super::simple::ordered_indices;
use super::utils::reorder_by_indices;
use crate::error::{EventsError, Result};
use crate::query::types::{SortKey, SortState};
use crate::source::RecordSource;

/// One row of the sort menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortMenuEntry {
    /// Key selected by this entry
    pub key: SortKey,
    /// `"Date"`, or `"Date (Descending)"` for the active key
    pub label: String,
    /// Symbolic icon name
    pub icon: &'static str,
    /// Whether this is the active key
    pub active: bool,
}

/// Owns an event list and keeps it ordered by the current sort selection.
#[derive(Debug, Clone)]
pub struct SortController {
    context: SortContext,
    state: SortState,
    records: Vec<EventRecord>,
    // Insertion position of records[i], used to break ties.
    ranks: Vec<usize>,
}

impl SortController {
    /// Take ownership of `records` and order them by date, ascending.
    ///
    /// Fails with [`EventsError::MissingLocation`] when the context sorts by
    /// location and a record has none.
    pub fn new(context: SortContext, records: Vec<EventRecord>) -> Result<Self> {
        if context.requires_location()
            && let Some(record) = records.iter().find(|r| r.location().is_none())
        {
            return Err(EventsError::MissingLocation {
                context: context.name().to_string(),
                id: record.id(),
            });
        }

        let ranks = (0..records.len()).collect();
        let mut controller = Self {
            context,
            state: SortState::default(),
            records,
            ranks,
        };
        controller.apply_sort();

        info!(
            context = controller.context.name(),
            records = controller.records.len(),
            "Sort controller ready"
        );
        Ok(controller)
    }

    /// Load records from `source` and build a controller over them.
    pub fn from_source(context: SortContext, source: &dyn RecordSource) -> Result<Self> {
        let records = source.load()?;
        Self::new(context, records)
    }

    /// Apply a user's sort selection and reorder the list.
    ///
    /// Selecting the active key flips the direction; selecting another key
    /// makes it active in ascending order. Returns the new state.
    ///
    /// # Panics
    ///
    /// Panics if `key` is not enabled for this controller's context. Menus
    /// only offer enabled keys, so this is a caller bug; use
    /// [`try_select_key`](Self::try_select_key) for unchecked input.
    pub fn select_key(&mut self, key: SortKey) -> SortState {
        assert!(
            self.context.is_enabled(key),
            "sort key {key} is not enabled for the {} list",
            self.context.name()
        );
        self.transition(key)
    }

    /// Like [`select_key`](Self::select_key), but reports a disabled key as
    /// [`EventsError::KeyNotEnabled`] and leaves the state untouched.
    pub fn try_select_key(&mut self, key: SortKey) -> Result<SortState> {
        if !self.context.is_enabled(key) {
            warn!(
                context = self.context.name(),
                %key,
                "Rejected sort key outside the enabled set"
            );
            return Err(EventsError::KeyNotEnabled {
                context: self.context.name().to_string(),
                key,
            });
        }
        Ok(self.transition(key))
    }

    fn transition(&mut self, key: SortKey) -> SortState {
        let previous = self.state;
        self.state = previous.transition(key);
        debug!(
            context = self.context.name(),
            key = %self.state.key,
            order = self.state.order.label(),
            from_key = %previous.key,
            from_order = previous.order.label(),
            "Sort selection changed"
        );
        self.apply_sort();
        self.state
    }

    fn apply_sort(&mut self) {
        let indices = ordered_indices(
            &self.records,
            &self.ranks,
            self.state,
            self.context.date_ordering(),
        );
        reorder_by_indices(&mut self.records, &indices);
        reorder_by_indices(&mut self.ranks, &indices);
    }

    /// Records in display order.
    pub fn records(&self) -> &[EventRecord] {
        &self.records
    }

    /// Current key and direction.
    pub fn state(&self) -> SortState {
        self.state
    }

    /// Context this list was built with.
    pub fn context(&self) -> &SortContext {
        &self.context
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when the list has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Look a record up by id.
    pub fn get(&self, id: EventId) -> Option<&EventRecord> {
        self.records.iter().find(|record| record.id() == id)
    }

    /// Menu entries for every enabled key, in context order.
    pub fn menu(&self) -> Vec<SortMenuEntry> {
        self.context
            .keys()
            .iter()
            .map(|&key| {
                let active = key == self.state.key;
                let label = if active {
                    format!("{} ({})", key.label(), self.state.order.label())
                } else {
                    key.label().to_string()
                };
                SortMenuEntry {
                    key,
                    label,
                    icon: key.icon(),
                    active,
                }
            })
            .collect()
    }
}
