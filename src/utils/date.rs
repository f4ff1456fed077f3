//! Content dates: parsing, ordering and display.
//!
//! Dates in chapters and front-matter are plain strings. They are only
//! compared after parsing into a [`ContentDate`], which resolves partial
//! dates to the first instant of the period (UTC).

use crate::error::ContentError;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use std::{cmp::Ordering, fmt};

/// How much of the date was written in the source string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precision {
    /// `YYYY`
    Year,
    /// `YYYY-MM`
    Month,
    /// `YYYY-MM-DD`
    Day,
    /// Date-time, RFC 3339 or local ISO 8601
    Time,
}

/// Date-times without an offset. `%.f` also accepts no fraction.
const LOCAL_DATE_TIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// A parsed content date, comparable as a UTC instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ContentDate {
    instant: NaiveDateTime,
    precision: Precision,
}

impl ContentDate {
    /// Parse from `YYYY`, `YYYY-MM`, `YYYY-MM-DD` or a date-time.
    ///
    /// Date-times without an offset (`2025-06-01T09:00:00`,
    /// `2025-06-01 09:00:00`) are taken as UTC.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        let bytes = s.as_bytes();

        match bytes.len() {
            4 => {
                let year = parse_u16(bytes)?;
                Self::from_parts(year, 1, 1, Precision::Year)
            }
            7 => {
                let year = parse_u16(&bytes[0..4])?;
                if bytes[4] != b'-' {
                    return None;
                }
                let month = parse_u8(&bytes[5..7])?;
                Self::from_parts(year, month, 1, Precision::Month)
            }
            10 => {
                let year = parse_u16(&bytes[0..4])?;
                if bytes[4] != b'-' || bytes[7] != b'-' {
                    return None;
                }
                let month = parse_u8(&bytes[5..7])?;
                let day = parse_u8(&bytes[8..10])?;
                Self::from_parts(year, month, day, Precision::Day)
            }
            _ => Self::parse_date_time(s),
        }
    }

    /// RFC 3339 first, then a local ISO 8601 date-time taken as UTC.
    fn parse_date_time(s: &str) -> Option<Self> {
        let instant = match DateTime::parse_from_rfc3339(s) {
            Ok(dt) => dt.with_timezone(&Utc).naive_utc(),
            Err(_) => LOCAL_DATE_TIME_FORMATS
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())?,
        };
        Some(Self {
            instant,
            precision: Precision::Time,
        })
    }

    /// Like [`ContentDate::parse`], but reports the offending input.
    pub fn parse_strict(s: &str) -> Result<Self, ContentError> {
        Self::parse(s).ok_or_else(|| ContentError::InvalidDate(s.to_owned()))
    }

    fn from_parts(year: u16, month: u8, day: u8, precision: Precision) -> Option<Self> {
        let date = NaiveDate::from_ymd_opt(year.into(), month.into(), day.into())?;
        Some(Self {
            instant: date.and_hms_opt(0, 0, 0)?,
            precision,
        })
    }

    pub const fn precision(&self) -> Precision {
        self.precision
    }

    pub const fn instant(&self) -> NaiveDateTime {
        self.instant
    }

    /// Calendar date as `YYYY-MM-DD`.
    pub fn to_ymd(&self) -> String {
        self.instant.format("%Y-%m-%d").to_string()
    }

    /// Long display form, e.g. "January 15, 2025".
    pub fn format_long(&self) -> String {
        self.instant.format("%B %-d, %Y").to_string()
    }

    /// Short display form, e.g. "Jan 2025".
    pub fn format_short(&self) -> String {
        self.instant.format("%b %Y").to_string()
    }
}

impl fmt::Display for ContentDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.precision {
            Precision::Year => write!(f, "{}", self.instant.format("%Y")),
            Precision::Month => write!(f, "{}", self.instant.format("%Y-%m")),
            Precision::Day => write!(f, "{}", self.instant.format("%Y-%m-%d")),
            Precision::Time => write!(f, "{}", self.instant.format("%Y-%m-%dT%H:%M:%SZ")),
        }
    }
}

/// Compare two raw date strings for sorting (newest first).
///
/// Only the instant is compared, so `2024-01` and `2024-01-01` are equal.
/// Unparsable dates compare as older than any valid date, and equal to
/// each other, so a stable sort keeps their input order.
pub fn compare_newest_first(a: &str, b: &str) -> Ordering {
    sort_key(b).cmp(&sort_key(a))
}

/// Comparable instant for a raw date string; `None` when unparsable.
#[inline]
pub fn sort_key(s: &str) -> Option<NaiveDateTime> {
    ContentDate::parse(s).map(|d| d.instant)
}

/// Parse 2-digit ASCII number
#[inline]
fn parse_u8(bytes: &[u8]) -> Option<u8> {
    if bytes.len() != 2 {
        return None;
    }
    let d1 = bytes[0].wrapping_sub(b'0');
    let d2 = bytes[1].wrapping_sub(b'0');
    if d1 > 9 || d2 > 9 {
        return None;
    }
    Some(d1 * 10 + d2)
}

/// Parse 4-digit ASCII number
#[inline]
fn parse_u16(bytes: &[u8]) -> Option<u16> {
    if bytes.len() != 4 {
        return None;
    }
    let mut result = 0u16;
    for &b in bytes {
        let d = b.wrapping_sub(b'0');
        if d > 9 {
            return None;
        }
        result = result * 10 + d as u16;
    }
    Some(result)
}
