//! Comparator table for event records.
//!
//! | key             | ascending comparison              |
//! |-----------------|-----------------------------------|
//! | Date            | date text, lexical (or calendar)  |
//! | Name            | name, lexical                     |
//! | InterestedCount | interested people, numeric        |
//! | Location        | location, lexical                 |
//!
//! Descending is the exact inverse of the ascending comparison.

use cuevents_model::EventRecord;
use std::cmp::Ordering;

use super::keys::extract_key;
use crate::query::types::{DateOrdering, SortState};

/// Compare two records under `state`.
///
/// Equal keys compare `Equal`; callers that need a total order break ties
/// themselves (see [`ordered_indices`]).
pub fn compare_events(
    a: &EventRecord,
    b: &EventRecord,
    state: SortState,
    dates: DateOrdering,
) -> Ordering {
    let ord = extract_key(a, state.key, dates).cmp(&extract_key(b, state.key, dates));
    state.order.apply(ord)
}

/// Permutation that orders `records` under `state`.
///
/// `ranks[i]` is the insertion position of `records[i]`. Ties on the sort key
/// are broken by rank before the direction is applied, so the result is a
/// total order that depends only on `state` and descending is the exact
/// reverse of ascending.
pub fn ordered_indices(
    records: &[EventRecord],
    ranks: &[usize],
    state: SortState,
    dates: DateOrdering,
) -> Vec<usize> {
    debug_assert_eq!(records.len(), ranks.len());

    // Extract keys once for efficiency
    let keys: Vec<_> = records
        .iter()
        .map(|record| extract_key(record, state.key, dates))
        .collect();

    let mut indices: Vec<usize> = (0..records.len()).collect();
    indices.sort_unstable_by(|&i, &j| {
        state
            .order
            .apply(keys[i].cmp(&keys[j]).then(ranks[i].cmp(&ranks[j])))
    });
    indices
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::types::{SortKey, SortOrder};
    use cuevents_model::RsvpStatus;

    fn event(date: &str, name: &str, interested: u32) -> EventRecord {
        EventRecord::new(date, name, interested, RsvpStatus::Rsvpd)
    }

    #[test]
    fn compare_applies_direction() {
        let a = event("Oct 1, 2024", "Art Exhibition", 80);
        let b = event("Oct 5, 2024", "Startup Pitch", 150);
        let asc = SortState::new(SortKey::InterestedCount, SortOrder::Ascending);
        let desc = SortState::new(SortKey::InterestedCount, SortOrder::Descending);
        assert_eq!(compare_events(&a, &b, asc, DateOrdering::Lexical), Ordering::Less);
        assert_eq!(
            compare_events(&a, &b, desc, DateOrdering::Lexical),
            Ordering::Greater
        );
    }

    #[test]
    fn ordered_indices_reverse_exactly_with_ties() {
        let records = vec![
            event("Oct 1, 2024", "First", 50),
            event("Oct 2, 2024", "Second", 10),
            event("Oct 3, 2024", "Third", 50),
        ];
        let ranks = vec![0, 1, 2];
        let asc = ordered_indices(
            &records,
            &ranks,
            SortState::new(SortKey::InterestedCount, SortOrder::Ascending),
            DateOrdering::Lexical,
        );
        let mut desc = ordered_indices(
            &records,
            &ranks,
            SortState::new(SortKey::InterestedCount, SortOrder::Descending),
            DateOrdering::Lexical,
        );
        assert_eq!(asc, vec![1, 0, 2]);
        desc.reverse();
        assert_eq!(asc, desc);
    }
}
