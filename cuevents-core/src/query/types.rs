//! Sort keys, directions and the sort state machine.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Fields available for sorting an event list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    /// Event date text
    #[default]
    Date,
    /// Event name
    Name,
    /// Number of interested people
    InterestedCount,
    /// Venue; only offered by lists whose records all carry one
    Location,
}

impl SortKey {
    /// Every key, in menu order.
    pub const ALL: [SortKey; 4] = [
        SortKey::Date,
        SortKey::Name,
        SortKey::InterestedCount,
        SortKey::Location,
    ];

    /// Menu label for this key
    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Date => "Date",
            SortKey::Name => "Alphabetically",
            SortKey::InterestedCount => "People Interested",
            SortKey::Location => "Location",
        }
    }

    /// Symbolic icon name for the menu entry
    pub fn icon(&self) -> &'static str {
        match self {
            SortKey::Date => "calendar",
            SortKey::Name => "textformat",
            SortKey::InterestedCount => "person.3",
            SortKey::Location => "mappin.and.ellipse",
        }
    }

    /// Identifier used by the CLI and config files
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Date => "date",
            SortKey::Name => "name",
            SortKey::InterestedCount => "interested_count",
            SortKey::Location => "location",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Returned when a string names no sort key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownSortKey(pub String);

impl fmt::Display for UnknownSortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown sort key `{}` (expected date, name, interested or location)",
            self.0
        )
    }
}

impl std::error::Error for UnknownSortKey {}

impl FromStr for SortKey {
    type Err = UnknownSortKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "date" => Ok(SortKey::Date),
            "name" | "alphabetically" => Ok(SortKey::Name),
            "interested" | "interested_count" | "people_interested" => {
                Ok(SortKey::InterestedCount)
            }
            "location" => Ok(SortKey::Location),
            _ => Err(UnknownSortKey(s.to_string())),
        }
    }
}

/// Sort order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Smallest key first
    #[default]
    Ascending,
    /// Largest key first
    Descending,
}

impl SortOrder {
    /// The opposite direction.
    pub fn toggle(self) -> Self {
        match self {
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Ascending,
        }
    }

    /// True for [`SortOrder::Ascending`].
    pub fn is_ascending(self) -> bool {
        matches!(self, SortOrder::Ascending)
    }

    /// Orient an ascending comparison result.
    #[inline]
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortOrder::Ascending => ordering,
            SortOrder::Descending => ordering.reverse(),
        }
    }

    /// Human-readable direction, as shown in the menu
    pub fn label(self) -> &'static str {
        match self {
            SortOrder::Ascending => "Ascending",
            SortOrder::Descending => "Descending",
        }
    }
}

/// Active sort selection of one list.
///
/// Starts at `(Date, Ascending)`. Together with the context's comparator
/// table this fully determines the order of the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct SortState {
    /// Active sort key
    pub key: SortKey,
    /// Direction of the active key
    pub order: SortOrder,
}

impl SortState {
    /// State with an explicit key and direction.
    pub fn new(key: SortKey, order: SortOrder) -> Self {
        Self { key, order }
    }

    /// Next state after the user picks `requested`.
    ///
    /// Re-selecting the active key flips the direction; any other key
    /// becomes active in ascending order.
    pub fn transition(self, requested: SortKey) -> SortState {
        if requested == self.key {
            SortState {
                key: self.key,
                order: self.order.toggle(),
            }
        } else {
            SortState {
                key: requested,
                order: SortOrder::Ascending,
            }
        }
    }

    /// Whether the list currently sorts ascending.
    pub fn ascending(&self) -> bool {
        self.order.is_ascending()
    }
}

/// How the `Date` key compares its text.
///
/// Dates are display strings such as `"Sept 15, 2024"`. `Lexical` compares
/// them codepoint by codepoint, so `"Oct 1, 2024"` sorts before
/// `"Sept 15, 2024"` and `"Oct 10"` before `"Oct 5"`. `Calendar` parses
/// them into dates first and is opt-in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateOrdering {
    /// Codepoint-wise comparison of the display text
    #[default]
    Lexical,
    /// Chronological comparison of the parsed date
    Calendar,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reselecting_active_key_flips_direction() {
        let state = SortState::default();
        assert_eq!(state, SortState::new(SortKey::Date, SortOrder::Ascending));

        let once = state.transition(SortKey::Date);
        assert_eq!(once, SortState::new(SortKey::Date, SortOrder::Descending));

        let twice = once.transition(SortKey::Date);
        assert_eq!(twice, SortState::new(SortKey::Date, SortOrder::Ascending));
    }

    #[test]
    fn switching_key_resets_to_ascending() {
        let descending = SortState::new(SortKey::Name, SortOrder::Descending);
        let switched = descending.transition(SortKey::InterestedCount);
        assert_eq!(switched.key, SortKey::InterestedCount);
        assert!(switched.ascending());
    }

    #[test]
    fn parses_cli_spellings() {
        assert_eq!("date".parse::<SortKey>(), Ok(SortKey::Date));
        assert_eq!("Alphabetically".parse::<SortKey>(), Ok(SortKey::Name));
        assert_eq!(
            "people-interested".parse::<SortKey>(),
            Ok(SortKey::InterestedCount)
        );
        assert_eq!("interested".parse::<SortKey>(), Ok(SortKey::InterestedCount));
        assert!("rating".parse::<SortKey>().is_err());
    }

    #[test]
    fn menu_icons_match_screen_symbols() {
        let icons: Vec<_> = SortKey::ALL.iter().map(|key| key.icon()).collect();
        assert_eq!(
            icons,
            vec!["calendar", "textformat", "person.3", "mappin.and.ellipse"]
        );
    }

    #[test]
    fn order_apply_reverses() {
        assert_eq!(SortOrder::Ascending.apply(Ordering::Less), Ordering::Less);
        assert_eq!(
            SortOrder::Descending.apply(Ordering::Less),
            Ordering::Greater
        );
        assert_eq!(SortOrder::Descending.toggle(), SortOrder::Ascending);
    }

    #[test]
    fn state_serializes_with_snake_case_keys() {
        let state = SortState::new(SortKey::InterestedCount, SortOrder::Descending);
        let json = serde_json::to_string(&state).unwrap();
        assert_eq!(json, r#"{"key":"interested_count","order":"descending"}"#);
    }
}
