//! Conflict detection between section meetings.
//!
//! A candidate meeting clashes with an accepted one when the two share
//! at least one weekday and their time ranges overlap under the
//! half-open rule — back-to-back meetings are allowed by design.
//! Detection walks the schedule in insertion order and stops at the
//! first hit, so the reported clash is deterministic.
//!
//! # Reference
//! Schaerf (1999), "A Survey of Automated Timetabling"

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::{DaySet, SectionMeeting, TimeRange};

/// A detected clash between a candidate and an accepted meeting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conflict {
    /// The accepted meeting the candidate collides with.
    pub clashing: SectionMeeting,
    /// Weekdays both meetings occupy.
    pub common_days: DaySet,
    /// The overlapping part of the two time ranges.
    pub overlap: TimeRange,
}

impl fmt::Display for Conflict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "clashes with {} on {} during {}",
            self.clashing.section_id(),
            self.common_days,
            self.overlap
        )
    }
}

/// Tests one candidate meeting against the accepted schedule.
///
/// Walks `schedule` in order: intersect day sets, then test time
/// overlap on any common day. Returns the first clash, or `None`.
/// Pure — no mutation, no I/O.
pub fn check_meeting(candidate: &SectionMeeting, schedule: &[SectionMeeting]) -> Option<Conflict> {
    for existing in schedule {
        let common_days = candidate.days.intersection(&existing.days);
        if common_days.is_empty() {
            continue;
        }
        if let Some(overlap) = candidate.time.intersection(&existing.time) {
            return Some(Conflict {
                clashing: existing.clone(),
                common_days,
                overlap,
            });
        }
    }
    None
}

/// Tests every component meeting of a logical section against the
/// accepted schedule, stopping at the first clashing pair.
///
/// One clashing component rejects the whole section; the per-component
/// walk mirrors [`check_meeting`] one level up.
pub fn check_section(meetings: &[SectionMeeting], schedule: &[SectionMeeting]) -> Option<Conflict> {
    meetings.iter().find_map(|m| check_meeting(m, schedule))
}
