//! Timetabling domain models.
//!
//! Core data types for representing a course catalog and a personal
//! weekly schedule:
//!
//! - [`SectionMeeting`] / [`SectionId`]: one meeting-day block of a
//!   course section, and the logical-section key that groups blocks
//! - [`DaySet`]: canonical weekday set ("MWF")
//! - [`TimeRange`]: half-open minute-of-day interval
//! - [`SectionCatalog`] / [`SectionQuery`]: the immutable offering list
//!   and its filters

mod catalog;
mod day;
mod meeting;
mod time;

pub use catalog::{SectionCatalog, SectionQuery};
pub use day::{day_from_letter, day_letter, DaySet};
pub use meeting::{SectionId, SectionMeeting};
pub use time::TimeRange;
