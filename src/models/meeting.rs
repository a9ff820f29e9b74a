//! Section meeting model.
//!
//! A [`SectionMeeting`] is one contiguous meeting-day block of a course
//! section. A *logical section* is keyed by [`SectionId`]
//! (`course_code` + `section`) and may be materialized as several
//! meetings, one per day-group; all of them are added to and removed
//! from a schedule together.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::time::format_12h;
use super::{DaySet, TimeRange};

/// Key of a logical section: course code plus section label.
///
/// The course code alone is not unique ("CS 101" offers sections A, B,
/// G); the pair is.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SectionId {
    /// Catalog identifier, e.g. "CS 101".
    pub course_code: String,
    /// Section label within the course, e.g. "A".
    pub section: String,
}

impl SectionId {
    /// Creates a new section key.
    pub fn new(course_code: impl Into<String>, section: impl Into<String>) -> Self {
        Self {
            course_code: course_code.into(),
            section: section.into(),
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.course_code, self.section)
    }
}

/// One contiguous meeting-day block of a course section.
///
/// `display_start`/`display_end` retain the source's human-readable
/// time strings for rendering; comparisons always use `time`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionMeeting {
    /// Catalog identifier, e.g. "CS 101".
    pub course_code: String,
    /// Section label within the course, e.g. "A".
    pub section: String,
    /// Instructor name.
    pub faculty_name: String,
    /// Weekdays this meeting occurs on.
    pub days: DaySet,
    /// Meeting time, minutes since midnight.
    pub time: TimeRange,
    /// Original start string, display only.
    pub display_start: String,
    /// Original end string, display only.
    pub display_end: String,
}

impl SectionMeeting {
    /// Creates a meeting with no days and display strings derived from
    /// `time`.
    pub fn new(
        course_code: impl Into<String>,
        section: impl Into<String>,
        time: TimeRange,
    ) -> Self {
        Self {
            course_code: course_code.into(),
            section: section.into(),
            faculty_name: String::new(),
            days: DaySet::new(),
            time,
            display_start: format_12h(time.start_min),
            display_end: format_12h(time.end_min),
        }
    }

    /// Sets the instructor name.
    pub fn with_faculty(mut self, faculty_name: impl Into<String>) -> Self {
        self.faculty_name = faculty_name.into();
        self
    }

    /// Sets the meeting days.
    pub fn with_days(mut self, days: DaySet) -> Self {
        self.days = days;
        self
    }

    /// Overrides the display strings with the source's originals.
    pub fn with_display_times(
        mut self,
        display_start: impl Into<String>,
        display_end: impl Into<String>,
    ) -> Self {
        self.display_start = display_start.into();
        self.display_end = display_end.into();
        self
    }

    /// Key of the logical section this meeting belongs to.
    pub fn section_id(&self) -> SectionId {
        SectionId::new(self.course_code.clone(), self.section.clone())
    }

    /// Whether this meeting belongs to the given logical section.
    pub fn in_section(&self, course_code: &str, section: &str) -> bool {
        self.course_code == course_code && self.section == section
    }

    /// Whether two meetings belong to the same logical section.
    pub fn same_section(&self, other: &Self) -> bool {
        self.course_code == other.course_code && self.section == other.section
    }
}
