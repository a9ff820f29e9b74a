//! Raw-record mapping and CSV catalog loading.
//!
//! The core does not own a file format; it owns the mapping from
//! spreadsheet-shaped rows to [`SectionMeeting`] values. A row that
//! fails to decode or normalize is skipped and flagged — a bad record
//! never fails the whole load. Only transport errors (I/O) propagate.

use std::io::Read;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{SectionCatalog, SectionMeeting, TimeRange};
use crate::normalize::{normalize_days, normalize_time, NormalizeError};

/// One row of the backing dataset, shaped like the registrar export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawSectionRecord {
    /// e.g. "CS 101".
    #[serde(rename = "Course Code")]
    pub course_code: String,
    /// e.g. "A".
    #[serde(rename = "Section")]
    pub section: String,
    /// Compact day code, e.g. "MWF".
    #[serde(rename = "Days")]
    pub days: String,
    /// 12-hour start time, e.g. "8:30 AM".
    #[serde(rename = "Start Time")]
    pub start_time: String,
    /// 12-hour end time, e.g. "9:50 AM".
    #[serde(rename = "End Time")]
    pub end_time: String,
    /// Instructor name.
    #[serde(rename = "Faculty Name")]
    pub faculty_name: String,
}

/// Why a row could not become a [`SectionMeeting`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RecordError {
    /// A day or time value failed to normalize.
    #[error(transparent)]
    Normalize(#[from] NormalizeError),
    /// A required time value is blank.
    #[error("missing {0} time")]
    MissingTime(&'static str),
    /// Start does not precede end.
    #[error("start minute {start_min} is not before end minute {end_min}")]
    TimeOrder { start_min: i64, end_min: i64 },
    /// The row itself could not be decoded.
    #[error("malformed row: {0}")]
    Malformed(String),
}

/// Maps one raw record to a section meeting.
///
/// This is the seam a data-loading collaborator plugs into: any record
/// shape works as long as it can produce a [`RawSectionRecord`].
/// Display strings keep the source's originals.
pub fn meeting_from_record(record: &RawSectionRecord) -> Result<SectionMeeting, RecordError> {
    let days = normalize_days(&record.days)?;
    let start_min =
        normalize_time(&record.start_time)?.ok_or(RecordError::MissingTime("start"))?;
    let end_min = normalize_time(&record.end_time)?.ok_or(RecordError::MissingTime("end"))?;
    if start_min >= end_min {
        return Err(RecordError::TimeOrder { start_min, end_min });
    }

    Ok(SectionMeeting::new(
        record.course_code.clone(),
        record.section.clone(),
        TimeRange::new(start_min, end_min),
    )
    .with_faculty(record.faculty_name.clone())
    .with_days(days)
    .with_display_times(record.start_time.trim(), record.end_time.trim()))
}

/// A flagged row from [`read_catalog`].
#[derive(Debug, Clone)]
pub struct SkippedRecord {
    /// 1-based data-row index (header excluded).
    pub row: usize,
    /// The decoded record, when the row itself was readable.
    pub record: Option<RawSectionRecord>,
    /// Why the row was skipped.
    pub reason: RecordError,
}

/// Result of a catalog load: the usable meetings plus the flagged rows.
#[derive(Debug, Clone)]
pub struct LoadReport {
    /// Catalog built from the rows that normalized cleanly.
    pub catalog: SectionCatalog,
    /// Rows that did not.
    pub skipped: Vec<SkippedRecord>,
}

/// Reads a headered CSV export into a catalog.
///
/// Expects the registrar columns `Course Code`, `Section`, `Days`,
/// `Start Time`, `End Time`, `Faculty Name`. Malformed rows are
/// skipped and flagged in the report.
pub fn read_catalog<R: Read>(reader: R) -> Result<LoadReport, csv::Error> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut meetings = Vec::new();
    let mut skipped = Vec::new();

    for (idx, row) in csv_reader.deserialize::<RawSectionRecord>().enumerate() {
        let row_no = idx + 1;
        match row {
            Ok(record) => match meeting_from_record(&record) {
                Ok(meeting) => meetings.push(meeting),
                Err(reason) => {
                    log::warn!(
                        "skipping row {} ({} {}): {}",
                        row_no,
                        record.course_code,
                        record.section,
                        reason
                    );
                    skipped.push(SkippedRecord {
                        row: row_no,
                        record: Some(record),
                        reason,
                    });
                }
            },
            Err(err) if is_row_error(&err) => {
                log::warn!("skipping row {}: {}", row_no, err);
                skipped.push(SkippedRecord {
                    row: row_no,
                    record: None,
                    reason: RecordError::Malformed(err.to_string()),
                });
            }
            Err(err) => return Err(err),
        }
    }

    Ok(LoadReport {
        catalog: SectionCatalog::new(meetings),
        skipped,
    })
}

fn is_row_error(err: &csv::Error) -> bool {
    matches!(
        err.kind(),
        csv::ErrorKind::Deserialize { .. } | csv::ErrorKind::UnequalLengths { .. }
    )
}
