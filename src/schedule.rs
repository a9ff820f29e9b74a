//! The per-session schedule store.
//!
//! Owns the accepted meetings and the add/remove policy: duplicate adds
//! are reported, conflicting adds are rejected with full clash details,
//! removals are idempotent. Conflict checks are delegated to
//! [`conflict`](crate::conflict). Each user session owns one
//! [`Schedule`]; there is no shared global state.
//!
//! # State Machine
//!
//! Per logical section key: `Absent → Present → Absent`. Operations are
//! atomic — a multi-meeting section is appended in full or not at all.

use serde::{Deserialize, Serialize};

use crate::conflict::{check_section, Conflict};
use crate::models::{SectionId, SectionMeeting};

/// Outcome of [`Schedule::add_section`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AddResult {
    /// Every meeting of the section was appended.
    Added,
    /// The logical section is already present; nothing changed.
    AlreadyAdded,
    /// A meeting clashes with the accepted schedule; nothing changed.
    Rejected(Conflict),
}

/// Outcome of [`Schedule::remove_section`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RemoveResult {
    /// Every meeting of the section was removed.
    Removed,
    /// No meeting matched; nothing changed.
    NotFound,
}

/// Ordered collection of accepted section meetings.
///
/// Insertion order is display order. Invariant: no two distinct
/// logical sections in the schedule overlap in day and time.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Schedule {
    meetings: Vec<SectionMeeting>,
}

impl Schedule {
    /// Creates an empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Accepted meetings in insertion order — the rendering snapshot.
    pub fn meetings(&self) -> &[SectionMeeting] {
        &self.meetings
    }

    /// Number of accepted meeting records.
    pub fn meeting_count(&self) -> usize {
        self.meetings.len()
    }

    /// Whether the schedule is empty.
    pub fn is_empty(&self) -> bool {
        self.meetings.is_empty()
    }

    /// Whether a logical section is present.
    pub fn contains_section(&self, course_code: &str, section: &str) -> bool {
        self.meetings
            .iter()
            .any(|m| m.in_section(course_code, section))
    }

    /// Distinct logical sections in insertion order.
    pub fn sections(&self) -> Vec<SectionId> {
        let mut ids: Vec<SectionId> = Vec::new();
        for meeting in &self.meetings {
            let id = meeting.section_id();
            if !ids.contains(&id) {
                ids.push(id);
            }
        }
        ids
    }

    /// Adds a logical section.
    ///
    /// `meetings` holds every component meeting of one section (one per
    /// day-group) and must be non-empty with a single shared
    /// `SectionId`. A section already present reports
    /// [`AddResult::AlreadyAdded`]; any component clashing with the
    /// accepted schedule rejects the whole section with the first clash
    /// found. Only [`AddResult::Added`] mutates.
    pub fn add_section(&mut self, meetings: Vec<SectionMeeting>) -> AddResult {
        debug_assert!(
            !meetings.is_empty(),
            "add_section needs at least one meeting"
        );
        debug_assert!(
            meetings.windows(2).all(|w| w[0].same_section(&w[1])),
            "meetings must share one section id"
        );

        let Some(first) = meetings.first() else {
            return AddResult::Added;
        };
        if self.contains_section(&first.course_code, &first.section) {
            log::debug!("{} is already scheduled", first.section_id());
            return AddResult::AlreadyAdded;
        }
        if let Some(conflict) = check_section(&meetings, &self.meetings) {
            log::debug!("{} rejected: {}", first.section_id(), conflict);
            return AddResult::Rejected(conflict);
        }

        log::debug!(
            "{} added with {} meeting(s)",
            first.section_id(),
            meetings.len()
        );
        self.meetings.extend(meetings);
        AddResult::Added
    }

    /// Removes every meeting of a logical section.
    ///
    /// Idempotent: removing an absent section reports
    /// [`RemoveResult::NotFound`] and changes nothing.
    pub fn remove_section(&mut self, course_code: &str, section: &str) -> RemoveResult {
        let before = self.meetings.len();
        self.meetings
            .retain(|m| !m.in_section(course_code, section));
        if self.meetings.len() == before {
            RemoveResult::NotFound
        } else {
            log::debug!("{} {} removed", course_code, section);
            RemoveResult::Removed
        }
    }
}
