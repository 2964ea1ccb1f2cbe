//! Routine records and their recurring sub-tasks.
//!
//! # Responsibility
//! - Model routines as ordered lists of tasks recurring on chosen weekdays.
//! - Parse optional `HH:MM` time windows defensively.
//!
//! # Invariants
//! - Weekday indices follow `0 = Sunday .. 6 = Saturday`.
//! - `WeekdaySet` only ever holds the low 7 bits; unknown indices are dropped.

use chrono::{Datelike, NaiveTime, Weekday};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

static TIME_OF_DAY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{1,2}):(\d{2})$").expect("valid time-of-day regex"));

/// Parses `HH:MM` into a time-of-day, returning `None` for anything else.
pub fn parse_time_of_day(raw: &str) -> Option<NaiveTime> {
    let captures = TIME_OF_DAY_RE.captures(raw.trim())?;
    let hour = captures.get(1)?.as_str().parse::<u32>().ok()?;
    let minute = captures.get(2)?.as_str().parse::<u32>().ok()?;
    NaiveTime::from_hms_opt(hour, minute, 0)
}

/// Set of weekdays, serialized as a sorted list of indices (Sunday = 0).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Vec<i64>", into = "Vec<u8>")]
pub struct WeekdaySet(u8);

impl WeekdaySet {
    pub const EMPTY: Self = Self(0);

    pub fn from_indices(indices: impl IntoIterator<Item = u8>) -> Self {
        indices.into_iter().fold(Self::EMPTY, |set, index| set.with(index))
    }

    /// Adds `index`; indices outside `0..=6` are ignored.
    pub fn with(self, index: u8) -> Self {
        if index > 6 {
            return self;
        }
        Self(self.0 | (1 << index))
    }

    pub fn contains_index(self, index: u8) -> bool {
        index <= 6 && self.0 & (1 << index) != 0
    }

    pub fn contains(self, weekday: Weekday) -> bool {
        self.contains_index(weekday.num_days_from_sunday() as u8)
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn indices(self) -> impl Iterator<Item = u8> {
        (0..7).filter(move |index| self.contains_index(*index))
    }
}

impl From<Vec<i64>> for WeekdaySet {
    fn from(value: Vec<i64>) -> Self {
        Self::from_indices(
            value
                .into_iter()
                .filter_map(|index| u8::try_from(index).ok()),
        )
    }
}

impl From<WeekdaySet> for Vec<u8> {
    fn from(value: WeekdaySet) -> Self {
        value.indices().collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoutineKind {
    Morning,
    Evening,
    #[default]
    Custom,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoutineTask {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub completed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_start: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_end: Option<String>,
    #[serde(default)]
    pub days: WeekdaySet,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_minutes: Option<u32>,
}

impl RoutineTask {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: title.into(),
            completed: false,
            time_start: None,
            time_end: None,
            days: WeekdaySet::EMPTY,
            duration_minutes: None,
        }
    }

    /// Start time when `time_start` is present and well formed.
    pub fn start_time(&self) -> Option<NaiveTime> {
        self.time_start.as_deref().and_then(parse_time_of_day)
    }

    /// End time when `time_end` is present and well formed.
    pub fn end_time(&self) -> Option<NaiveTime> {
        self.time_end.as_deref().and_then(parse_time_of_day)
    }

    pub fn recurs_on(&self, date: impl Datelike) -> bool {
        self.days.contains(date.weekday())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Routine {
    pub id: String,
    pub title: String,
    #[serde(rename = "type", default)]
    pub kind: RoutineKind,
    #[serde(default)]
    pub tasks: Vec<RoutineTask>,
}

impl Routine {
    pub fn new(title: impl Into<String>, kind: RoutineKind) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: title.into(),
            kind,
            tasks: Vec::new(),
        }
    }
}
