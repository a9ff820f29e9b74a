//! Canonical weekday sets.
//!
//! Course catalogs describe meeting days with compact letter codes
//! ("MWF", "TR"). A [`DaySet`] is the canonical, order-insensitive form:
//! sorted Monday-first and deduplicated, so two inputs naming the same
//! days compare equal regardless of order or casing.
//!
//! # Letter Scheme
//!
//! One canonical letter per weekday. Thursday is `R` and Sunday is `U`,
//! keeping the alphabet unambiguous:
//!
//! | M   | T   | W   | R   | F   | S   | U   |
//! |-----|-----|-----|-----|-----|-----|-----|
//! | Mon | Tue | Wed | Thu | Fri | Sat | Sun |

use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Canonical letter for a weekday (`R` = Thursday, `U` = Sunday).
pub fn day_letter(day: Weekday) -> char {
    match day {
        Weekday::Mon => 'M',
        Weekday::Tue => 'T',
        Weekday::Wed => 'W',
        Weekday::Thu => 'R',
        Weekday::Fri => 'F',
        Weekday::Sat => 'S',
        Weekday::Sun => 'U',
    }
}

/// Weekday for a canonical letter, if any. Case-insensitive.
pub fn day_from_letter(letter: char) -> Option<Weekday> {
    match letter.to_ascii_uppercase() {
        'M' => Some(Weekday::Mon),
        'T' => Some(Weekday::Tue),
        'W' => Some(Weekday::Wed),
        'R' => Some(Weekday::Thu),
        'F' => Some(Weekday::Fri),
        'S' => Some(Weekday::Sat),
        'U' => Some(Weekday::Sun),
        _ => None,
    }
}

/// An unordered set of weekdays in canonical form.
///
/// Construction sorts Monday-first and removes duplicates, so set
/// equality is plain `==`. Displays as the compact letter string
/// ("MWF").
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Weekday>", into = "Vec<Weekday>")]
pub struct DaySet {
    days: Vec<Weekday>,
}

impl DaySet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a set from any collection of weekdays.
    pub fn from_days(days: impl IntoIterator<Item = Weekday>) -> Self {
        let mut days: Vec<Weekday> = days.into_iter().collect();
        days.sort_by_key(|d| d.num_days_from_monday());
        days.dedup();
        Self { days }
    }

    /// Whether the set contains `day`.
    pub fn contains(&self, day: Weekday) -> bool {
        self.days.contains(&day)
    }

    /// Days common to both sets.
    pub fn intersection(&self, other: &Self) -> Self {
        // Filtering a sorted, deduplicated vec keeps it canonical.
        Self {
            days: self
                .days
                .iter()
                .copied()
                .filter(|d| other.contains(*d))
                .collect(),
        }
    }

    /// Whether the set is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Number of days.
    #[inline]
    pub fn len(&self) -> usize {
        self.days.len()
    }

    /// Days in Monday-first order.
    pub fn days(&self) -> &[Weekday] {
        &self.days
    }

    /// Iterates days in Monday-first order.
    pub fn iter(&self) -> impl Iterator<Item = Weekday> + '_ {
        self.days.iter().copied()
    }
}

impl From<Vec<Weekday>> for DaySet {
    fn from(days: Vec<Weekday>) -> Self {
        Self::from_days(days)
    }
}

impl From<DaySet> for Vec<Weekday> {
    fn from(set: DaySet) -> Self {
        set.days
    }
}

impl FromIterator<Weekday> for DaySet {
    fn from_iter<I: IntoIterator<Item = Weekday>>(iter: I) -> Self {
        Self::from_days(iter)
    }
}

impl fmt::Display for DaySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for day in &self.days {
            write!(f, "{}", day_letter(*day))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letter_round_trip() {
        for day in [
            Weekday::Mon,
            Weekday::Tue,
            Weekday::Wed,
            Weekday::Thu,
            Weekday::Fri,
            Weekday::Sat,
            Weekday::Sun,
        ] {
            assert_eq!(day_from_letter(day_letter(day)), Some(day));
        }
        assert_eq!(day_from_letter('x'), None);
    }

    #[test]
    fn test_from_days_canonicalizes() {
        let a = DaySet::from_days([Weekday::Fri, Weekday::Mon, Weekday::Wed, Weekday::Mon]);
        assert_eq!(a.days(), &[Weekday::Mon, Weekday::Wed, Weekday::Fri]);
        assert_eq!(a.len(), 3);

        let b = DaySet::from_days([Weekday::Wed, Weekday::Fri, Weekday::Mon]);
        assert_eq!(a, b);
    }

    #[test]
    fn test_intersection() {
        let mwf = DaySet::from_days([Weekday::Mon, Weekday::Wed, Weekday::Fri]);
        let wrf = DaySet::from_days([Weekday::Wed, Weekday::Thu, Weekday::Fri]);
        let common = mwf.intersection(&wrf);
        assert_eq!(common.days(), &[Weekday::Wed, Weekday::Fri]);

        let tr = DaySet::from_days([Weekday::Tue, Weekday::Thu]);
        assert!(mwf.intersection(&tr).is_empty());
        assert!(DaySet::new().intersection(&mwf).is_empty());
    }

    #[test]
    fn test_display_compact() {
        let set = DaySet::from_days([Weekday::Fri, Weekday::Mon, Weekday::Wed]);
        assert_eq!(set.to_string(), "MWF");
        assert_eq!(DaySet::from_days([Weekday::Tue, Weekday::Thu]).to_string(), "TR");
        assert_eq!(DaySet::new().to_string(), "");
    }

    #[test]
    fn test_serde_canonicalizes() {
        let json = "[\"Fri\",\"Mon\",\"Fri\"]";
        let set: DaySet = serde_json::from_str(json).unwrap();
        assert_eq!(set.days(), &[Weekday::Mon, Weekday::Fri]);

        let back = serde_json::to_string(&set).unwrap();
        assert_eq!(back, "[\"Mon\",\"Fri\"]");
    }
}
