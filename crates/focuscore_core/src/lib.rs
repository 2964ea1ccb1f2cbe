//! Core domain logic for FocusCore, a personal productivity planner.
//! This crate is the single source of truth for business invariants:
//! holiday computation, calendar event aggregation, feature use-cases and
//! the per-user store.

pub mod calendar;
pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use calendar::{
    build_month_events, easter_sunday, events_for_day, find_holiday, get_holidays,
    holidays_in_month, request_toggle, sort_day_events, upcoming_holidays, CalendarError,
    CalendarView, TaskCompletionHandle, YearMonth,
};
pub use config::{default_config_path, AppConfig, ConfigError};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::event::{CalendarEvent, EventKind, EventSource};
pub use model::finance::{Investment, Transaction, TransactionKind};
pub use model::habit::{Habit, HabitFrequency};
pub use model::holiday::{Holiday, HolidayKind, MonthDay};
pub use model::note::Note;
pub use model::routine::{parse_time_of_day, Routine, RoutineKind, RoutineTask, WeekdaySet};
pub use model::task::{Priority, Task, TaskDue};
pub use repo::app_store::{AppStore, Collection};
pub use repo::kv_repo::{KvRepository, SqliteKvRepository};
pub use repo::{RepoError, RepoResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
