//! Section catalog: the immutable set of offered sections.
//!
//! Loaded once (see [`loader`](crate::loader)) and then only queried.
//! Safe to share across threads; each session pairs the shared catalog
//! with its own [`Schedule`](crate::schedule::Schedule).

use serde::{Deserialize, Serialize};

use super::{SectionMeeting, TimeRange};

/// Immutable collection of offered section meetings.
///
/// A logical section split into per-day-group records appears here as
/// multiple meetings sharing one `SectionId`; use
/// [`section_meetings`](Self::section_meetings) to collect them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SectionCatalog {
    meetings: Vec<SectionMeeting>,
}

impl SectionCatalog {
    /// Creates a catalog from meeting records.
    pub fn new(meetings: Vec<SectionMeeting>) -> Self {
        Self { meetings }
    }

    /// All meetings, in load order.
    pub fn meetings(&self) -> &[SectionMeeting] {
        &self.meetings
    }

    /// Number of meeting records.
    pub fn meeting_count(&self) -> usize {
        self.meetings.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.meetings.is_empty()
    }

    /// Distinct course codes, sorted.
    pub fn course_codes(&self) -> Vec<String> {
        let mut codes: Vec<String> = self
            .meetings
            .iter()
            .map(|m| m.course_code.clone())
            .collect();
        codes.sort();
        codes.dedup();
        codes
    }

    /// Distinct faculty names, sorted.
    pub fn faculty_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .meetings
            .iter()
            .map(|m| m.faculty_name.clone())
            .collect();
        names.sort();
        names.dedup();
        names
    }

    /// Every meeting of one logical section, cloned for handing to
    /// [`Schedule::add_section`](crate::schedule::Schedule::add_section).
    pub fn section_meetings(&self, course_code: &str, section: &str) -> Vec<SectionMeeting> {
        self.meetings
            .iter()
            .filter(|m| m.in_section(course_code, section))
            .cloned()
            .collect()
    }

    /// Meetings matching a query, in load order.
    pub fn search(&self, query: &SectionQuery) -> Vec<&SectionMeeting> {
        self.meetings.iter().filter(|m| query.matches(m)).collect()
    }
}

/// Catalog filter: every present criterion must match.
///
/// An empty query matches everything.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SectionQuery {
    /// Restrict to one course code.
    pub course_code: Option<String>,
    /// Restrict to one instructor.
    pub faculty_name: Option<String>,
    /// Keep only meetings lying entirely inside this window.
    pub window: Option<TimeRange>,
}

impl SectionQuery {
    /// Creates a query matching everything.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts to a course code.
    pub fn with_course(mut self, course_code: impl Into<String>) -> Self {
        self.course_code = Some(course_code.into());
        self
    }

    /// Restricts to an instructor.
    pub fn with_faculty(mut self, faculty_name: impl Into<String>) -> Self {
        self.faculty_name = Some(faculty_name.into());
        self
    }

    /// Keeps only meetings contained in `window`.
    pub fn with_window(mut self, window: TimeRange) -> Self {
        self.window = Some(window);
        self
    }

    /// Whether a meeting satisfies every present criterion.
    pub fn matches(&self, meeting: &SectionMeeting) -> bool {
        if let Some(code) = &self.course_code {
            if meeting.course_code != *code {
                return false;
            }
        }
        if let Some(name) = &self.faculty_name {
            if meeting.faculty_name != *name {
                return false;
            }
        }
        if let Some(window) = &self.window {
            if !window.contains_range(&meeting.time) {
                return false;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DaySet;
    use chrono::Weekday;

    fn sample_catalog() -> SectionCatalog {
        SectionCatalog::new(vec![
            SectionMeeting::new("CS 101", "A", TimeRange::new(510, 590))
                .with_faculty("Dr. Smith")
                .with_days(DaySet::from_days([Weekday::Mon, Weekday::Wed, Weekday::Fri])),
            SectionMeeting::new("CS 101", "B", TimeRange::new(671, 750))
                .with_faculty("Prof. Jones")
                .with_days(DaySet::from_days([Weekday::Tue, Weekday::Thu])),
            SectionMeeting::new("MATH 203", "C", TimeRange::new(831, 910))
                .with_faculty("Dr. Smith")
                .with_days(DaySet::from_days([Weekday::Wed])),
            SectionMeeting::new("PHYS 102", "D", TimeRange::new(591, 670))
                .with_faculty("Prof. Chen")
                .with_days(DaySet::from_days([Weekday::Tue, Weekday::Thu])),
        ])
    }

    #[test]
    fn test_distinct_sorted_lists() {
        let catalog = sample_catalog();
        assert_eq!(catalog.course_codes(), ["CS 101", "MATH 203", "PHYS 102"]);
        assert_eq!(
            catalog.faculty_names(),
            ["Dr. Smith", "Prof. Chen", "Prof. Jones"]
        );
    }

    #[test]
    fn test_section_meetings() {
        let catalog = sample_catalog();
        let a = catalog.section_meetings("CS 101", "A");
        assert_eq!(a.len(), 1);
        assert_eq!(a[0].faculty_name, "Dr. Smith");
        assert!(catalog.section_meetings("CS 101", "Z").is_empty());
    }

    #[test]
    fn test_search_by_course_and_faculty() {
        let catalog = sample_catalog();

        let cs = catalog.search(&SectionQuery::new().with_course("CS 101"));
        assert_eq!(cs.len(), 2);

        let smith = catalog.search(&SectionQuery::new().with_faculty("Dr. Smith"));
        assert_eq!(smith.len(), 2);

        let both = catalog.search(
            &SectionQuery::new()
                .with_course("CS 101")
                .with_faculty("Dr. Smith"),
        );
        assert_eq!(both.len(), 1);
        assert_eq!(both[0].section, "A");
    }

    #[test]
    fn test_search_by_window() {
        let catalog = sample_catalog();

        // Morning window: 8:00 AM - 12:00 PM.
        let morning = catalog.search(&SectionQuery::new().with_window(TimeRange::new(480, 720)));
        let sections: Vec<&str> = morning.iter().map(|m| m.section.as_str()).collect();
        assert_eq!(sections, ["A", "D"]);

        // Everything fits the whole day.
        let all = catalog.search(&SectionQuery::new().with_window(TimeRange::new(0, 1440)));
        assert_eq!(all.len(), catalog.meeting_count());
    }

    #[test]
    fn test_empty_query_matches_all() {
        let catalog = sample_catalog();
        assert_eq!(catalog.search(&SectionQuery::new()).len(), 4);
    }

    #[test]
    fn test_catalog_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SectionCatalog>();
    }
}
