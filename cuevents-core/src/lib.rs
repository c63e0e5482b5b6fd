//! # cuevents core
//!
//! Sortable event lists for the on-campus and off-campus event screens.
//!
//! ## Overview
//!
//! Each screen owns one [`SortController`]: the controller holds the
//! screen's [`EventRecord`]s together with the active [`SortState`]
//! (sort key and direction) and reorders the records whenever the user
//! picks a sort option. The screens differ only in their [`SortContext`],
//! which lists the keys the sort menu offers.
//!
//! - [`query`]: sort keys, comparator table, contexts and the controller
//! - [`source`]: compiled-in sample records and JSON record files
//! - [`config`]: TOML configuration tying contexts and sources together
//!
//! ## Examples
//!
//! ```
//! use cuevents_core::{SampleSource, SortContext, SortController, SortKey};
//!
//! # fn main() -> cuevents_core::Result<()> {
//! let mut list = SortController::from_source(
//!     SortContext::on_campus(),
//!     &SampleSource::OnCampus,
//! )?;
//!
//! list.select_key(SortKey::InterestedCount);
//! let counts: Vec<u32> = list
//!     .records()
//!     .iter()
//!     .map(|event| event.interested_people())
//!     .collect();
//! assert_eq!(counts, [50, 60, 80, 90, 120, 150, 180, 200]);
//!
//! // Picking the same key again flips the direction.
//! list.select_key(SortKey::InterestedCount);
//! assert!(!list.state().ascending());
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod query;
pub mod source;

pub use config::{ContextConfig, EventsConfig};
pub use cuevents_model::{EventId, EventRecord, ModelError, RsvpStatus};
pub use error::{EventsError, Result};
pub use query::{
    ContextKind, DateOrdering, SortContext, SortContextBuilder, SortController, SortKey,
    SortMenuEntry, SortOrder, SortState,
};
pub use source::{JsonFileSource, RecordSource, SampleSource};
