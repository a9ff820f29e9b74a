//! Normalization of raw day and time representations.
//!
//! Source data describes meeting times on the 12-hour clock ("8:30 AM")
//! and meeting days as compact letter codes ("MWF") or token lists.
//! These parsers produce the comparable forms the conflict detector
//! works on: minutes since midnight and canonical [`DaySet`]s.
//!
//! Empty input is "no value" (`None` / the empty set), never an error;
//! anything non-empty that fails to parse is reported, never silently
//! defaulted.

use std::str::FromStr;

use chrono::Weekday;
use thiserror::Error;

use crate::models::{day_from_letter, DaySet};

/// Failure to normalize a raw day or time value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NormalizeError {
    /// Time string is not 12-hour `H:MM AM|PM`.
    #[error("malformed time `{0}`: expected 12-hour `H:MM AM` or `H:MM PM`")]
    Time(String),
    /// Character outside the canonical day alphabet `M T W R F S U`.
    #[error("unknown day letter `{0}`")]
    DayLetter(char),
    /// Token that is neither a canonical letter nor a day name.
    #[error("unknown day token `{0}`")]
    DayToken(String),
}

/// Parses a 12-hour clock string into minutes since midnight.
///
/// Blank input is `Ok(None)` — a missing value, distinct from midnight.
/// The AM/PM marker may be attached ("8:30AM") or separated ("8:30 am");
/// case is ignored. Two normalized times order by plain integer
/// comparison.
///
/// # Examples
///
/// ```
/// use u_timetable::normalize::normalize_time;
///
/// assert_eq!(normalize_time("8:30 AM").unwrap(), Some(510));
/// assert_eq!(normalize_time("12:05 pm").unwrap(), Some(725));
/// assert_eq!(normalize_time("  ").unwrap(), None);
/// assert!(normalize_time("8:30").is_err());
/// ```
pub fn normalize_time(raw: &str) -> Result<Option<i64>, NormalizeError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    let bad = || NormalizeError::Time(raw.to_string());

    let upper = trimmed.to_ascii_uppercase();
    let (clock, pm) = if let Some(rest) = upper.strip_suffix("AM") {
        (rest.trim_end(), false)
    } else if let Some(rest) = upper.strip_suffix("PM") {
        (rest.trim_end(), true)
    } else {
        return Err(bad());
    };

    let (hour_raw, minute_raw) = clock.split_once(':').ok_or_else(bad)?;
    let hour: i64 = hour_raw.trim().parse().map_err(|_| bad())?;
    let minute: i64 = minute_raw.trim().parse().map_err(|_| bad())?;
    if !(1..=12).contains(&hour) || !(0..=59).contains(&minute) {
        return Err(bad());
    }

    let hour24 = match (hour, pm) {
        (12, false) => 0,
        (12, true) => 12,
        (h, false) => h,
        (h, true) => h + 12,
    };
    Ok(Some(hour24 * 60 + minute))
}

/// Normalizes a compact or delimited day string into a [`DaySet`].
///
/// Blank input is the empty set. Strings containing whitespace or
/// commas are token lists (see [`normalize_day_tokens`]); a bare day
/// name or abbreviation ("TH", "Thu", "monday") names a single day;
/// anything else is read as one canonical letter per character
/// ("MWF", "tr").
pub fn normalize_days(raw: &str) -> Result<DaySet, NormalizeError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(DaySet::new());
    }
    if trimmed.contains(|c: char| c.is_whitespace() || c == ',') {
        return normalize_day_tokens(
            trimmed
                .split(|c: char| c.is_whitespace() || c == ',')
                .filter(|t| !t.is_empty()),
        );
    }
    if let Ok(day) = parse_day_token(trimmed) {
        return Ok(DaySet::from_days([day]));
    }
    trimmed
        .chars()
        .map(|c| day_from_letter(c).ok_or(NormalizeError::DayLetter(c)))
        .collect()
}

/// Normalizes a sequence of day tokens into a [`DaySet`].
///
/// Each token may be a canonical letter ("R"), the `TH` Thursday
/// abbreviation, or any day name `chrono` recognizes ("Thu",
/// "thursday"). Case-insensitive.
pub fn normalize_day_tokens<I, S>(tokens: I) -> Result<DaySet, NormalizeError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tokens
        .into_iter()
        .map(|token| parse_day_token(token.as_ref()))
        .collect()
}

fn parse_day_token(token: &str) -> Result<Weekday, NormalizeError> {
    let trimmed = token.trim();
    let mut chars = trimmed.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return day_from_letter(c).ok_or(NormalizeError::DayLetter(c));
    }
    if trimmed.eq_ignore_ascii_case("th") {
        return Ok(Weekday::Thu);
    }
    Weekday::from_str(trimmed).map_err(|_| NormalizeError::DayToken(trimmed.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_basic() {
        assert_eq!(normalize_time("8:30 AM").unwrap(), Some(510));
        assert_eq!(normalize_time("9:50 AM").unwrap(), Some(590));
        assert_eq!(normalize_time("11:11 AM").unwrap(), Some(671));
        assert_eq!(normalize_time("12:30 PM").unwrap(), Some(750));
        assert_eq!(normalize_time("1:51 PM").unwrap(), Some(831));
        assert_eq!(normalize_time("11:59 PM").unwrap(), Some(1439));
    }

    #[test]
    fn test_time_noon_and_midnight() {
        assert_eq!(normalize_time("12:00 AM").unwrap(), Some(0));
        assert_eq!(normalize_time("12:00 PM").unwrap(), Some(720));
        assert_eq!(normalize_time("12:59 AM").unwrap(), Some(59));
    }

    #[test]
    fn test_time_lenient_forms() {
        assert_eq!(normalize_time(" 8:30 am ").unwrap(), Some(510));
        assert_eq!(normalize_time("8:30AM").unwrap(), Some(510));
        assert_eq!(normalize_time("8:30\tPM").unwrap(), Some(1230));
    }

    #[test]
    fn test_time_empty_is_no_value() {
        assert_eq!(normalize_time("").unwrap(), None);
        assert_eq!(normalize_time("   ").unwrap(), None);
    }

    #[test]
    fn test_time_rejects_malformed() {
        for raw in ["8:30", "8 AM", "ab:cd AM", "13:00 PM", "0:30 AM", "8:60 AM", "8.30 AM"] {
            assert_eq!(
                normalize_time(raw),
                Err(NormalizeError::Time(raw.to_string())),
                "{raw} should not parse"
            );
        }
    }

    #[test]
    fn test_time_order_preserved() {
        use rand::Rng;

        let mut rng = rand::rng();
        for _ in 0..200 {
            let a = rng.random_range(0..1440);
            let b = rng.random_range(0..1440);
            let raw_a = fmt_12h(a);
            let raw_b = fmt_12h(b);
            let norm_a = normalize_time(&raw_a).unwrap().unwrap();
            let norm_b = normalize_time(&raw_b).unwrap().unwrap();
            assert_eq!(norm_a, a, "round trip of {raw_a}");
            assert_eq!(norm_a < norm_b, a < b, "{raw_a} vs {raw_b}");
        }
    }

    fn fmt_12h(minute: i64) -> String {
        let hour24 = minute / 60;
        let marker = if hour24 < 12 { "AM" } else { "PM" };
        let hour12 = match hour24 % 12 {
            0 => 12,
            h => h,
        };
        format!("{}:{:02} {}", hour12, minute % 60, marker)
    }

    #[test]
    fn test_days_compact() {
        let mwf = normalize_days("MWF").unwrap();
        assert_eq!(mwf.to_string(), "MWF");
        assert_eq!(normalize_days("TR").unwrap().to_string(), "TR");
        assert_eq!(normalize_days("mwf").unwrap(), mwf);
    }

    #[test]
    fn test_days_symmetry() {
        let compact = normalize_days("MWF").unwrap();
        let tokens = normalize_day_tokens(["M", "W", "F"]).unwrap();
        let reordered = normalize_days("FWM").unwrap();
        assert_eq!(compact, tokens);
        assert_eq!(compact, reordered);
    }

    #[test]
    fn test_days_token_lists() {
        let set = normalize_days("M, W, F").unwrap();
        assert_eq!(set, normalize_days("MWF").unwrap());
        assert_eq!(normalize_days("Tue Thu").unwrap(), normalize_days("TR").unwrap());
        assert_eq!(
            normalize_day_tokens(["monday", "TH"]).unwrap(),
            normalize_days("MR").unwrap()
        );
    }

    #[test]
    fn test_days_single_abbreviation() {
        assert_eq!(normalize_days("TH").unwrap(), normalize_days("R").unwrap());
        assert_eq!(normalize_days("Thu").unwrap(), normalize_days("R").unwrap());
        assert_eq!(normalize_days("w").unwrap(), normalize_days("W").unwrap());
    }

    #[test]
    fn test_days_empty_is_empty_set() {
        assert!(normalize_days("").unwrap().is_empty());
        assert!(normalize_days("  ").unwrap().is_empty());
    }

    #[test]
    fn test_days_reject_unknown() {
        assert_eq!(normalize_days("MXF"), Err(NormalizeError::DayLetter('X')));
        assert_eq!(
            normalize_day_tokens(["Mon", "Noday"]),
            Err(NormalizeError::DayToken("Noday".to_string()))
        );
    }
}
