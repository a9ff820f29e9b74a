//! Course timetabling core for the U-Engine ecosystem.
//!
//! Builds personal weekly schedules from a catalog of course sections,
//! warning about time conflicts as sections are added. The engine is
//! the interesting part: normalization of heterogeneous day/time
//! representations, pure overlap testing against the accepted set, and
//! the accepted-set state machine with duplicate-prevention and
//! idempotent-removal guarantees. Rendering, filter widgets, and file
//! handling belong to the embedding application.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `SectionMeeting`, `SectionId`,
//!   `DaySet`, `TimeRange`, `SectionCatalog`, `SectionQuery`
//! - **`normalize`**: Raw day/time strings → comparable canonical forms
//! - **`conflict`**: Pure clash detection between meetings
//! - **`schedule`**: The per-session accepted-set store
//! - **`loader`**: Raw-record mapping and CSV catalog ingestion
//!
//! # Example
//!
//! ```
//! use u_timetable::models::{SectionMeeting, TimeRange};
//! use u_timetable::normalize::normalize_days;
//! use u_timetable::schedule::{AddResult, Schedule};
//!
//! let algorithms = SectionMeeting::new("CS 101", "A", TimeRange::new(510, 590))
//!     .with_days(normalize_days("MWF").unwrap());
//!
//! let mut schedule = Schedule::new();
//! assert_eq!(schedule.add_section(vec![algorithms]), AddResult::Added);
//! ```
//!
//! # Reference
//! Schaerf (1999), "A Survey of Automated Timetabling"

pub mod conflict;
pub mod loader;
pub mod models;
pub mod normalize;
pub mod schedule;
