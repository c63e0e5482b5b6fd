//! Utility functions for sorting operations

use std::cmp::Ordering;

/// Reorder items in place so that position `n` holds the element that was
/// at `indices[n]`.
///
/// `indices` must be a permutation of `0..items.len()`.
pub fn reorder_by_indices<T>(items: &mut Vec<T>, indices: &[usize]) {
    debug_assert_eq!(
        items.len(),
        indices.len(),
        "Indices length must match items length"
    );

    let mut slots: Vec<Option<T>> = items.drain(..).map(Some).collect();
    items.extend(indices.iter().filter_map(|&idx| slots[idx].take()));
}

/// Check if a slice is already sorted according to a comparison function
pub fn is_sorted_by<T, F>(items: &[T], mut compare: F) -> bool
where
    F: FnMut(&T, &T) -> Ordering,
{
    items
        .windows(2)
        .all(|w| compare(&w[0], &w[1]) != Ordering::Greater)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reorders_by_permutation() {
        let mut items = vec!["a", "b", "c", "d"];
        reorder_by_indices(&mut items, &[2, 0, 3, 1]);
        assert_eq!(items, vec!["c", "a", "d", "b"]);
    }

    #[test]
    fn identity_permutation_is_a_no_op() {
        let mut items = vec![String::from("x"), String::from("y")];
        reorder_by_indices(&mut items, &[0, 1]);
        assert_eq!(items, vec!["x", "y"]);
    }

    #[test]
    fn detects_sorted_slices() {
        assert!(is_sorted_by(&[1, 2, 2, 5], |a, b| a.cmp(b)));
        assert!(!is_sorted_by(&[3, 1], |a, b| a.cmp(b)));
        assert!(is_sorted_by::<u8, _>(&[], |a, b| a.cmp(b)));
    }
}
