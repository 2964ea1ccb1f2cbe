//! Calendar computation: national holidays, month grids and the merged
//! per-day event view.
//!
//! # Responsibility
//! - Compute the Brazilian national holiday set for any year.
//! - Merge tasks, routine occurrences and holidays into one event list per
//!   displayed month.
//! - Track calendar screen state (displayed month, selection).
//!
//! # Invariants
//! - Holiday sets are recomputed for every displayed year; a set computed
//!   for one year is never reused for another.
//! - Event lists are rebuilt from source snapshots, never patched in place.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod aggregator;
pub mod holidays;
pub mod month;
pub mod view;

pub use aggregator::{
    build_month_events, events_for_day, request_toggle, sort_day_events, TaskCompletionHandle,
};
pub use holidays::{
    easter_sunday, find_holiday, get_holidays, holidays_in_month, upcoming_holidays,
};
pub use month::YearMonth;
pub use view::CalendarView;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalendarError {
    InvalidMonth { year: i32, month: u32 },
    InvalidMonthLiteral(String),
}

impl Display for CalendarError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidMonth { year, month } => {
                write!(f, "invalid calendar month {year}-{month:02}")
            }
            Self::InvalidMonthLiteral(value) => {
                write!(f, "invalid month `{value}`; expected YYYY-MM")
            }
        }
    }
}

impl Error for CalendarError {}
