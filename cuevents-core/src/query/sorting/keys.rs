//! Sort key types for comparing event records
//!
//! Keys borrow from the record they were extracted from, so a sort pass
//! extracts every key once and compares the borrowed values.

use chrono::NaiveDate;
use cuevents_model::EventRecord;

use crate::query::types::{DateOrdering, SortKey};

/// Comparable value extracted from one record for one sort key.
///
/// A sort pass only ever compares keys of the same variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum EventSortKey<'a> {
    /// Codepoint-wise string comparison (date text, name, location)
    Text(&'a str),
    /// Numeric comparison
    Count(u32),
    /// Calendar date with the raw text as a secondary key
    Calendar(CalendarDateKey<'a>),
}

/// Parsed date plus its source text.
///
/// Unparseable text (`date == None`) orders before every real date, and
/// equal dates fall back to the text so the comparison stays total.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct CalendarDateKey<'a> {
    date: Option<NaiveDate>,
    text: &'a str,
}

impl<'a> CalendarDateKey<'a> {
    /// Parse `text` once; the key keeps borrowing it.
    pub fn new(text: &'a str) -> Self {
        Self {
            date: parse_event_date(text),
            text,
        }
    }
}

/// Extract the comparable value of `key` from `record`.
///
/// A record without a location yields an empty location key; contexts that
/// sort by location reject such records up front.
pub fn extract_key<'a>(
    record: &'a EventRecord,
    key: SortKey,
    dates: DateOrdering,
) -> EventSortKey<'a> {
    match key {
        SortKey::Date => match dates {
            DateOrdering::Lexical => EventSortKey::Text(record.date()),
            DateOrdering::Calendar => {
                EventSortKey::Calendar(CalendarDateKey::new(record.date()))
            }
        },
        SortKey::Name => EventSortKey::Text(record.name()),
        SortKey::InterestedCount => {
            EventSortKey::Count(record.interested_people())
        }
        SortKey::Location => {
            EventSortKey::Text(record.location().unwrap_or_default())
        }
    }
}

const DATE_FORMATS: [&str; 3] = ["%b %d, %Y", "%B %d, %Y", "%b. %d, %Y"];

/// Parse display dates of the form `"<Month> <day>, <year>"`.
///
/// Month names are case-insensitive and may be abbreviated
/// (`"Sep"`, `"Sept"`, `"September"`). Returns `None` for anything else.
pub fn parse_event_date(text: &str) -> Option<NaiveDate> {
    // chrono only knows the three-letter abbreviation.
    let text = match text.get(..5) {
        Some(prefix)
            if prefix.eq_ignore_ascii_case("sept ") || prefix.eq_ignore_ascii_case("sept.") =>
        {
            format!("Sep{}", &text[4..])
        }
        _ => text.to_string(),
    };
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(&text, format).ok())
}
