//! Record sources feeding the event lists.

use std::fs;
use std::path::{Path, PathBuf};

use cuevents_model::RsvpStatus::{NotRsvpd, Rsvpd};
use cuevents_model::{EventRecord, RsvpStatus};
use tracing::info;

use crate::error::Result;

/// Supplies the initial, insertion-ordered records of one list.
pub trait RecordSource {
    /// Load every record of the list.
    fn load(&self) -> Result<Vec<EventRecord>>;
}

impl RecordSource for Vec<EventRecord> {
    fn load(&self) -> Result<Vec<EventRecord>> {
        Ok(self.clone())
    }
}

/// Compiled-in sample data for the two screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleSource {
    /// Eight on-campus events
    OnCampus,
    /// Eight off-campus events, each with a location
    OffCampus,
}

impl RecordSource for SampleSource {
    fn load(&self) -> Result<Vec<EventRecord>> {
        let rows: &[SampleRow] = match self {
            SampleSource::OnCampus => ON_CAMPUS,
            SampleSource::OffCampus => OFF_CAMPUS,
        };
        Ok(rows.iter().map(SampleRow::to_record).collect())
    }
}

struct SampleRow {
    date: &'static str,
    name: &'static str,
    location: &'static str,
    interested: u32,
    rsvp: RsvpStatus,
}

impl SampleRow {
    fn to_record(&self) -> EventRecord {
        EventRecord::new(self.date, self.name, self.interested, self.rsvp)
            .with_location(self.location)
    }
}

const fn row(
    date: &'static str,
    name: &'static str,
    location: &'static str,
    interested: u32,
    rsvp: RsvpStatus,
) -> SampleRow {
    SampleRow {
        date,
        name,
        location,
        interested,
        rsvp,
    }
}

const ON_CAMPUS: &[SampleRow] = &[
    row("Sept 15, 2024", "Music Festival", "Auditorium", 50, Rsvpd),
    row("Sept 20, 2024", "Tech Talk", "Main Hall", 120, NotRsvpd),
    row("Sept 25, 2024", "Career Fair", "Conference Center", 200, Rsvpd),
    row("Oct 1, 2024", "Art Exhibition", "Gallery", 80, Rsvpd),
    row("Oct 5, 2024", "Startup Pitch", "Startup Hub", 150, NotRsvpd),
    row("Oct 10, 2024", "Networking Event", "Banquet Hall", 90, Rsvpd),
    row("Oct 15, 2024", "Hackathon", "Tech Lab", 180, NotRsvpd),
    row("Oct 20, 2024", "Cooking Class", "Kitchen Studio", 60, Rsvpd),
];

const OFF_CAMPUS: &[SampleRow] = &[
    row("Sept 10, 2024", "Mountain Hike", "Mountain Base", 40, Rsvpd),
    row("Sept 17, 2024", "Beach Cleanup", "Sandy Beach", 75, Rsvpd),
    row("Sept 30, 2024", "City Concert", "Downtown Plaza", 180, Rsvpd),
    row("Oct 5, 2024", "Local Art Show", "City Gallery", 100, NotRsvpd),
    row("Oct 12, 2024", "Food Truck Festival", "Town Square", 220, Rsvpd),
    row("Oct 20, 2024", "Rock Climbing Trip", "Cliffside Park", 50, NotRsvpd),
    row("Oct 27, 2024", "Camping Retreat", "Forest Reserve", 80, Rsvpd),
    row("Nov 5, 2024", "Local Brewery Tour", "City Brewery", 150, Rsvpd),
];

/// Reads a JSON array of event records from disk.
///
/// Records without an `id` get a fresh one; every record is validated.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    /// Source reading `path`; nothing is read until [`RecordSource::load`].
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// File this source reads.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecordSource for JsonFileSource {
    fn load(&self) -> Result<Vec<EventRecord>> {
        let contents = fs::read_to_string(&self.path)?;
        let records: Vec<EventRecord> = serde_json::from_str(&contents)?;
        for record in &records {
            record.validate()?;
        }
        info!(
            path = %self.path.display(),
            records = records.len(),
            "Loaded event records"
        );
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EventsError;
    use std::io::Write;

    #[test]
    fn sample_sets_have_eight_located_records() {
        for source in [SampleSource::OnCampus, SampleSource::OffCampus] {
            let records = source.load().unwrap();
            assert_eq!(records.len(), 8);
            assert!(records.iter().all(|r| r.location().is_some()));
        }
    }

    #[test]
    fn sample_ids_are_generated_per_load() {
        let first = SampleSource::OnCampus.load().unwrap();
        let second = SampleSource::OnCampus.load().unwrap();
        assert_ne!(first[0].id(), second[0].id());
        assert_eq!(first[0].name(), second[0].name());
    }

    #[test]
    fn json_source_reads_records() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[
                {{"date":"Oct 1, 2024","name":"Art Exhibition","location":"Gallery","interestedPeople":80,"rsvpStatus":"RSVP'd"}},
                {{"date":"Sept 20, 2024","name":"Tech Talk","interestedPeople":120}}
            ]"#
        )
        .unwrap();

        let records = JsonFileSource::new(file.path()).load().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].location(), None);
        assert_eq!(records[1].rsvp_status(), RsvpStatus::NotRsvpd);
    }

    #[test]
    fn json_source_rejects_blank_names() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"date":"Oct 1, 2024","name":"","interestedPeople":1}}]"#
        )
        .unwrap();

        let err = JsonFileSource::new(file.path()).load().unwrap_err();
        assert!(matches!(err, EventsError::Model(_)));
    }

    #[test]
    fn json_source_reports_missing_file() {
        let err = JsonFileSource::new("/nonexistent/events.json")
            .load()
            .unwrap_err();
        assert!(matches!(err, EventsError::Io(_)));
    }
}
