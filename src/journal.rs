//! Observation journal
//!
//! Appends one CSV row per effective update, giving an audit trail of the
//! daily cadence: which day committed, at what price, and which trend/band
//! the tracker moved to. Skipped same-day polls are not journaled.

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

use chrono::DateTime;
use serde::{Deserialize, Serialize};

use crate::metadata::Band;
use crate::trend::TrendState;

/// One committed update
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalRecord {
    /// Calendar date of the committed day key (UTC)
    pub date: String,
    /// Day key in unix seconds
    pub day_start: i64,
    /// Committed price in fixed-point units
    pub price: i64,
    /// Committed trend counter
    pub trend: i64,
    /// Projected band index
    pub band: u8,
}

/// Append-only CSV journal of committed updates
#[derive(Debug, Clone)]
pub struct Journal {
    path: PathBuf,
}

impl Journal {
    /// Create a journal backed by the given file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append a committed state to the journal.
    pub fn append(&self, state: &TrendState, band: Band) -> anyhow::Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let exists = self.path.exists();
        let file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(&self.path)?;

        let date = DateTime::from_timestamp(state.latest_date_checked, 0)
            .ok_or_else(|| anyhow::anyhow!("day key {} out of range", state.latest_date_checked))?
            .format("%Y-%m-%d")
            .to_string();

        let mut writer = csv::WriterBuilder::new()
            .has_headers(!exists)
            .from_writer(file);
        writer.serialize(JournalRecord {
            date,
            day_start: state.latest_date_checked,
            price: state.latest_price,
            trend: state.trend,
            band: band.index(),
        })?;
        writer.flush()?;
        Ok(())
    }

    /// Read back all journaled records.
    pub fn read_all(&self) -> anyhow::Result<Vec<JournalRecord>> {
        let mut reader = csv::Reader::from_path(&self.path)?;
        let mut records = Vec::new();
        for record in reader.deserialize() {
            records.push(record?);
        }
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::SECONDS_PER_DAY;

    fn state(day: i64, price: i64, trend: i64) -> TrendState {
        TrendState {
            latest_price: price,
            latest_date_checked: day * SECONDS_PER_DAY,
            trend,
        }
    }

    #[test]
    fn test_append_and_read_back() {
        let dir = tempfile::tempdir().unwrap();
        let journal = Journal::new(dir.path().join("journal.csv"));

        journal
            .append(&state(18_993, 2100_00000000, 1), Band::Up1)
            .unwrap();
        journal
            .append(&state(18_994, 2200_00000000, 2), Band::Up1)
            .unwrap();

        let records = journal.read_all().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].trend, 1);
        assert_eq!(records[1].day_start, 18_994 * SECONDS_PER_DAY);
        assert_eq!(records[1].band, 0);
    }

    #[test]
    fn test_header_written_once() {
        let dir = tempfile::tempdir().unwrap();
        let journal = Journal::new(dir.path().join("journal.csv"));

        journal
            .append(&state(18_993, 2100_00000000, 1), Band::Up1)
            .unwrap();
        journal
            .append(&state(18_994, 1900_00000000, -1), Band::Down1)
            .unwrap();

        let contents = std::fs::read_to_string(journal.path()).unwrap();
        let headers = contents
            .lines()
            .filter(|line| line.starts_with("date,"))
            .count();
        assert_eq!(headers, 1);
    }

    #[test]
    fn test_date_is_utc_calendar_day() {
        let dir = tempfile::tempdir().unwrap();
        let journal = Journal::new(dir.path().join("journal.csv"));

        // 2021-01-02 in day keys
        let day = 18_629;
        journal
            .append(&state(day, 2000_00000000, 0), Band::Up1)
            .unwrap();
        let records = journal.read_all().unwrap();
        assert_eq!(records[0].date, "2021-01-02");
    }
}
