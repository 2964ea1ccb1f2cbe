//! Month event aggregation.
//!
//! # Responsibility
//! - Merge task due dates, routine occurrences and holidays of one month into
//!   a single event list.
//! - Provide the per-day filter and display ordering used by detail views.
//!
//! # Invariants
//! - Event ids are unique inside one build.
//! - A routine task yields exactly one occurrence per matching weekday of
//!   the month.
//! - Aggregation never fails: malformed optional fields become absent.

use crate::calendar::holidays::find_holiday;
use crate::calendar::month::YearMonth;
use crate::model::event::{CalendarEvent, EventKind, EventSource};
use crate::model::holiday::Holiday;
use crate::model::routine::Routine;
use crate::model::task::Task;
use chrono::{Datelike, NaiveDate};
use log::debug;
use std::collections::HashSet;
use std::time::Instant;

/// Owner of the task collection, asked to flip completion on behalf of the
/// calendar.
pub trait TaskCompletionHandle {
    /// Returns `false` when no task with `task_id` exists.
    fn toggle_task_completion(&mut self, task_id: &str) -> bool;
}

impl TaskCompletionHandle for Vec<Task> {
    fn toggle_task_completion(&mut self, task_id: &str) -> bool {
        match self.iter_mut().find(|task| task.id == task_id) {
            Some(task) => {
                task.completed = !task.completed;
                true
            }
            None => false,
        }
    }
}

/// Builds every event of `month`: tasks first, then routine occurrences,
/// then holidays.
///
/// `holidays` must be the set computed for `month.year()`.
pub fn build_month_events<'a>(
    month: YearMonth,
    tasks: &'a [Task],
    routines: &'a [Routine],
    holidays: &'a [Holiday],
) -> Vec<CalendarEvent<'a>> {
    let started_at = Instant::now();
    let mut ids = EventIds::default();
    let mut events = Vec::new();

    for task in tasks {
        let Some(due) = task.due() else {
            continue;
        };
        if !month.contains(due.date) {
            continue;
        }
        events.push(CalendarEvent {
            id: ids.claim(format!("task:{}", task.id)),
            title: task.title.clone(),
            date: due.date,
            time: due.time,
            end_time: None,
            kind: EventKind::Task,
            priority: Some(task.priority),
            completed: Some(task.completed),
            source: EventSource::Task(task),
        });
    }

    let task_count = events.len();

    for routine in routines {
        for task in &routine.tasks {
            if task.days.is_empty() {
                continue;
            }
            let start = task.start_time();
            let end = task.end_time();
            for date in month.days().filter(|date| task.recurs_on(*date)) {
                events.push(CalendarEvent {
                    id: ids.claim(format!("routine:{}:{}:{}", routine.id, task.id, date.day())),
                    title: format!("{}: {}", routine.title, task.title),
                    date,
                    time: start,
                    end_time: end,
                    kind: EventKind::Routine,
                    priority: None,
                    completed: Some(task.completed),
                    source: EventSource::Routine { routine, task },
                });
            }
        }
    }

    let routine_count = events.len() - task_count;

    for date in month.days() {
        if let Some(holiday) = find_holiday(date, holidays) {
            events.push(CalendarEvent {
                id: ids.claim(format!("holiday:{}", holiday.date)),
                title: holiday.name.clone(),
                date,
                time: None,
                end_time: None,
                kind: EventKind::Holiday,
                priority: None,
                completed: None,
                source: EventSource::Holiday(holiday),
            });
        }
    }

    debug!(
        "event=calendar_build module=calendar status=ok month={} tasks={} routine_occurrences={} holidays={} duration_us={}",
        month,
        task_count,
        routine_count,
        events.len() - task_count - routine_count,
        started_at.elapsed().as_micros()
    );

    events
}

/// Events whose date equals `date`, time-of-day ignored, in build order.
pub fn events_for_day<'a>(
    events: &[CalendarEvent<'a>],
    date: NaiveDate,
) -> Vec<CalendarEvent<'a>> {
    events
        .iter()
        .filter(|event| event.is_on(date))
        .cloned()
        .collect()
}

/// Orders one day's events: holidays, tasks, routines; inside a kind,
/// untimed events first, then by ascending time. Stable.
pub fn sort_day_events(events: &mut [CalendarEvent<'_>]) {
    events.sort_by(|left, right| {
        left.kind
            .cmp(&right.kind)
            .then_with(|| left.time.cmp(&right.time))
    });
}

/// Forwards a completion toggle for a task event to its owner.
///
/// Non-task events are ignored. The caller rebuilds the month afterwards.
pub fn request_toggle<H: TaskCompletionHandle + ?Sized>(
    event: &CalendarEvent<'_>,
    handle: &mut H,
) -> bool {
    match event.task_id() {
        Some(task_id) => handle.toggle_task_completion(task_id),
        None => false,
    }
}

#[derive(Default)]
struct EventIds {
    seen: HashSet<String>,
}

impl EventIds {
    // Source ids are not guaranteed unique, so collisions get a `#n` suffix.
    fn claim(&mut self, base: String) -> String {
        if self.seen.insert(base.clone()) {
            return base;
        }
        let mut attempt = 2usize;
        loop {
            let candidate = format!("{base}#{attempt}");
            if self.seen.insert(candidate.clone()) {
                return candidate;
            }
            attempt += 1;
        }
    }
}
