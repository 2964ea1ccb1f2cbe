//! Task record owned by the task list feature.
//!
//! # Invariants
//! - `id` is unique inside one user's task list.
//! - `due_date` is stored as written; `Task::due()` is the only parser and it
//!   never fails loudly.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

const NAIVE_DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    /// Next value in the low -> medium -> high -> low cycle.
    pub fn cycled(self) -> Self {
        match self {
            Self::Low => Self::Medium,
            Self::Medium => Self::High,
            Self::High => Self::Low,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

/// Parsed due date: the calendar day plus an optional explicit time-of-day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskDue {
    pub date: NaiveDate,
    pub time: Option<NaiveTime>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub title: String,
    pub completed: bool,
    pub priority: Priority,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
}

impl Task {
    /// Creates an open, medium-priority task with a generated id.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: title.into(),
            completed: false,
            priority: Priority::Medium,
            due_date: None,
        }
    }

    /// Parses `due_date`, returning `None` when it is missing or malformed.
    pub fn due(&self) -> Option<TaskDue> {
        self.due_date.as_deref().and_then(parse_due)
    }
}

/// Accepts `YYYY-MM-DD`, naive ISO date-times and RFC 3339 timestamps.
///
/// Offset timestamps keep the wall-clock date/time as written.
pub fn parse_due(raw: &str) -> Option<TaskDue> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(TaskDue { date, time: None });
    }

    if let Ok(stamp) = DateTime::parse_from_rfc3339(raw) {
        return Some(from_naive(stamp.naive_local()));
    }

    NAIVE_DATE_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .map(from_naive)
}

fn from_naive(stamp: NaiveDateTime) -> TaskDue {
    let time = stamp.time();
    // Sub-minute precision is noise for a calendar cell.
    let time = time.with_second(0).and_then(|t| t.with_nanosecond(0)).unwrap_or(time);
    TaskDue {
        date: stamp.date(),
        time: Some(time),
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_due, Priority};
    use chrono::{NaiveDate, NaiveTime};

    #[test]
    fn parse_due_accepts_plain_dates_without_time() {
        let due = parse_due("2025-04-10").unwrap();
        assert_eq!(due.date, NaiveDate::from_ymd_opt(2025, 4, 10).unwrap());
        assert_eq!(due.time, None);
    }

    #[test]
    fn parse_due_keeps_wall_clock_of_offset_timestamps() {
        let due = parse_due("2025-04-10T23:00:00.000Z").unwrap();
        assert_eq!(due.date, NaiveDate::from_ymd_opt(2025, 4, 10).unwrap());
        assert_eq!(due.time, NaiveTime::from_hms_opt(23, 0, 0));

        let due = parse_due("2025-04-10T07:30:00-03:00").unwrap();
        assert_eq!(due.time, NaiveTime::from_hms_opt(7, 30, 0));
    }

    #[test]
    fn parse_due_accepts_minute_precision() {
        let due = parse_due("2025-04-10T23:00").unwrap();
        assert_eq!(due.time, NaiveTime::from_hms_opt(23, 0, 0));
    }

    #[test]
    fn parse_due_rejects_garbage() {
        assert!(parse_due("").is_none());
        assert!(parse_due("tomorrow").is_none());
        assert!(parse_due("2025-13-01").is_none());
    }

    #[test]
    fn priority_cycles_through_all_levels() {
        assert_eq!(Priority::Low.cycled(), Priority::Medium);
        assert_eq!(Priority::Medium.cycled(), Priority::High);
        assert_eq!(Priority::High.cycled(), Priority::Low);
    }
}
