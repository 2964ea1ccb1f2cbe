//! Calendar month value used to drive month-scoped computations.

use crate::calendar::CalendarError;
use crate::model::holiday::{days_in_month, is_leap_year};
use chrono::{Datelike, NaiveDate};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// A `(year, month)` pair whose days chrono can represent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    year: i32,
    month: u32,
}

impl YearMonth {
    pub fn new(year: i32, month: u32) -> Result<Self, CalendarError> {
        let valid = (1..=12).contains(&month)
            && NaiveDate::from_ymd_opt(year, month, 1).is_some()
            && NaiveDate::from_ymd_opt(year, month, days_in_month(month, is_leap_year(year)))
                .is_some();
        if !valid {
            return Err(CalendarError::InvalidMonth { year, month });
        }
        Ok(Self { year, month })
    }

    /// Month containing `date`.
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(self) -> i32 {
        self.year
    }

    pub fn month(self) -> u32 {
        self.month
    }

    pub fn days_in_month(self) -> u32 {
        days_in_month(self.month, is_leap_year(self.year))
    }

    pub fn first_day(self) -> NaiveDate {
        self.day(1).unwrap_or(NaiveDate::MIN)
    }

    /// Date of day `day` of this month, if it exists.
    pub fn day(self, day: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, day)
    }

    pub fn days(self) -> impl Iterator<Item = NaiveDate> {
        (1..=self.days_in_month()).filter_map(move |day| self.day(day))
    }

    pub fn contains(self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    /// Following month; saturates at the last representable month.
    pub fn next(self) -> Self {
        let (year, month) = if self.month == 12 {
            (self.year + 1, 1)
        } else {
            (self.year, self.month + 1)
        };
        Self::new(year, month).unwrap_or(self)
    }

    /// Preceding month; saturates at the first representable month.
    pub fn prev(self) -> Self {
        let (year, month) = if self.month == 1 {
            (self.year - 1, 12)
        } else {
            (self.year, self.month - 1)
        };
        Self::new(year, month).unwrap_or(self)
    }
}

impl Display for YearMonth {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for YearMonth {
    type Err = CalendarError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let invalid = || CalendarError::InvalidMonthLiteral(value.to_string());
        let (year, month) = value.trim().split_once('-').ok_or_else(invalid)?;
        let year = year.parse::<i32>().map_err(|_| invalid())?;
        let month = month.parse::<u32>().map_err(|_| invalid())?;
        Self::new(year, month)
    }
}
