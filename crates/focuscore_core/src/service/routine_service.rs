//! Routine use-cases: editing routines and tracking today's progress.

use crate::model::routine::{Routine, RoutineKind, RoutineTask, WeekdaySet};

/// Appends a custom routine; `None` for a blank title.
pub fn add_routine<'a>(routines: &'a mut Vec<Routine>, title: &str) -> Option<&'a Routine> {
    let title = title.trim();
    if title.is_empty() {
        return None;
    }
    routines.push(Routine::new(title, RoutineKind::Custom));
    routines.last()
}

/// Adds a task to routine `routine_id`.
///
/// Returns the new task id, or `None` when the title is blank or the routine
/// does not exist.
pub fn add_routine_task(
    routines: &mut [Routine],
    routine_id: &str,
    title: &str,
    days: WeekdaySet,
    time_start: Option<String>,
) -> Option<String> {
    let title = title.trim();
    if title.is_empty() {
        return None;
    }
    let routine = routines.iter_mut().find(|routine| routine.id == routine_id)?;
    let mut task = RoutineTask::new(title);
    task.days = days;
    task.time_start = time_start;
    let id = task.id.clone();
    routine.tasks.push(task);
    Some(id)
}

pub fn toggle_routine_task(routines: &mut [Routine], routine_id: &str, task_id: &str) -> bool {
    let Some(routine) = routines.iter_mut().find(|routine| routine.id == routine_id) else {
        return false;
    };
    match routine.tasks.iter_mut().find(|task| task.id == task_id) {
        Some(task) => {
            task.completed = !task.completed;
            true
        }
        None => false,
    }
}

pub fn delete_routine_task(routines: &mut [Routine], routine_id: &str, task_id: &str) -> bool {
    let Some(routine) = routines.iter_mut().find(|routine| routine.id == routine_id) else {
        return false;
    };
    let before = routine.tasks.len();
    routine.tasks.retain(|task| task.id != task_id);
    routine.tasks.len() != before
}

pub fn delete_routine(routines: &mut Vec<Routine>, routine_id: &str) -> bool {
    let before = routines.len();
    routines.retain(|routine| routine.id != routine_id);
    routines.len() != before
}

/// Marks every task of the routine as not completed.
pub fn reset_routine(routines: &mut [Routine], routine_id: &str) -> bool {
    let Some(routine) = routines.iter_mut().find(|routine| routine.id == routine_id) else {
        return false;
    };
    for task in &mut routine.tasks {
        task.completed = false;
    }
    true
}

/// Completed share of the routine's tasks in percent; 0 for an empty routine.
pub fn routine_progress(routine: &Routine) -> f64 {
    if routine.tasks.is_empty() {
        return 0.0;
    }
    let done = routine.tasks.iter().filter(|task| task.completed).count();
    done as f64 / routine.tasks.len() as f64 * 100.0
}
