//! Holiday records anchored to a month/day pair.
//!
//! Leap-year and day-of-year helpers are local instead of chrono's so they
//! stay total for every `i32` year, including years `NaiveDate` cannot hold.
//!
//! # Invariants
//! - `MonthDay` never carries a year; a holiday set is only exact for the
//!   year it was computed for.
//! - `MonthDay` values built through `MonthDay::new` are valid for at least
//!   one year (Feb 29 is accepted).

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Recurring annual anchor: month `1..=12`, day `1..=31`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MonthDay {
    pub month: u32,
    pub day: u32,
}

impl MonthDay {
    /// Builds an anchor, rejecting days that do not exist in any year.
    pub fn new(month: u32, day: u32) -> Option<Self> {
        if !(1..=12).contains(&month) || day == 0 {
            return None;
        }
        if day > days_in_month(month, true) {
            return None;
        }
        Some(Self { month, day })
    }

    /// Projects a calendar date onto its annual anchor.
    pub fn of(date: NaiveDate) -> Self {
        Self {
            month: date.month(),
            day: date.day(),
        }
    }

    /// Resolves the anchor inside a concrete year.
    ///
    /// Returns `None` for Feb 29 in non-leap years or years chrono cannot
    /// represent.
    pub fn in_year(self, year: i32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(year, self.month, self.day)
    }

    /// 1-based ordinal of this anchor inside `year`.
    pub(crate) fn ordinal(self, leap: bool) -> u32 {
        (1..self.month)
            .map(|month| days_in_month(month, leap))
            .sum::<u32>()
            + self.day
    }

    /// Inverse of [`MonthDay::ordinal`]; `ordinal` must lie inside the year.
    pub(crate) fn from_ordinal(ordinal: u32, leap: bool) -> Self {
        let mut remaining = ordinal;
        for month in 1..=12 {
            let len = days_in_month(month, leap);
            if remaining <= len {
                return Self {
                    month,
                    day: remaining,
                };
            }
            remaining -= len;
        }
        Self { month: 12, day: 31 }
    }
}

impl Display for MonthDay {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}-{:02}", self.month, self.day)
    }
}

/// Whether a holiday follows a fixed date or the Easter computus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HolidayKind {
    Fixed,
    Moveable,
}

/// One national (or, later, regional) holiday of a single year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Holiday {
    pub date: MonthDay,
    /// Canonical Portuguese name.
    pub name: String,
    pub is_national: bool,
    pub kind: HolidayKind,
}

impl Holiday {
    pub(crate) fn national(date: MonthDay, name: &str, kind: HolidayKind) -> Self {
        Self {
            date,
            name: name.to_string(),
            is_national: true,
            kind,
        }
    }
}

/// Gregorian leap-year rule, total over every `i32`.
pub fn is_leap_year(year: i32) -> bool {
    (year.rem_euclid(4) == 0 && year.rem_euclid(100) != 0) || year.rem_euclid(400) == 0
}

pub(crate) fn days_in_month(month: u32, leap: bool) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if leap => 29,
        2 => 28,
        _ => 0,
    }
}
