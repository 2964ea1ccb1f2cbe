//! Derived calendar events.
//!
//! Events are a disposable view over task, routine and holiday snapshots:
//! they borrow their source records and are rebuilt whenever inputs change.

use crate::model::holiday::Holiday;
use crate::model::routine::{Routine, RoutineTask};
use crate::model::task::{Priority, Task};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// Event variant, declared in per-day display precedence order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EventKind {
    Holiday,
    Task,
    Routine,
}

impl EventKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Holiday => "holiday",
            Self::Task => "task",
            Self::Routine => "routine",
        }
    }
}

/// Back-reference to the record an event was derived from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EventSource<'a> {
    Task(&'a Task),
    Routine {
        routine: &'a Routine,
        task: &'a RoutineTask,
    },
    Holiday(&'a Holiday),
}

#[derive(Debug, Clone, PartialEq)]
pub struct CalendarEvent<'a> {
    /// Unique inside one month build.
    pub id: String,
    pub title: String,
    pub date: NaiveDate,
    pub time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
    pub kind: EventKind,
    pub priority: Option<Priority>,
    pub completed: Option<bool>,
    pub source: EventSource<'a>,
}

impl CalendarEvent<'_> {
    /// Start instant; untimed events start at midnight.
    pub fn starts_at(&self) -> NaiveDateTime {
        self.date.and_time(self.time.unwrap_or(NaiveTime::MIN))
    }

    pub fn is_on(&self, date: NaiveDate) -> bool {
        self.date == date
    }

    /// Id of the source task, for task events only.
    pub fn task_id(&self) -> Option<&str> {
        match self.source {
            EventSource::Task(task) => Some(task.id.as_str()),
            _ => None,
        }
    }
}
