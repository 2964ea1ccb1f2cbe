//! Task list use-cases.
//!
//! # Invariants
//! - Blank titles never create tasks.
//! - Operations addressing an unknown id are no-ops reported as `false`.

use crate::model::task::Task;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TaskFilter {
    #[default]
    All,
    Active,
    Completed,
}

impl TaskFilter {
    pub fn matches(self, task: &Task) -> bool {
        match self {
            Self::All => true,
            Self::Active => !task.completed,
            Self::Completed => task.completed,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskSummary {
    pub completed: usize,
    pub total: usize,
}

/// Appends a new medium-priority task; returns it, or `None` for a blank
/// title.
pub fn add_task<'a>(tasks: &'a mut Vec<Task>, title: &str) -> Option<&'a Task> {
    let title = title.trim();
    if title.is_empty() {
        return None;
    }
    tasks.push(Task::new(title));
    tasks.last()
}

pub fn toggle_task(tasks: &mut [Task], id: &str) -> bool {
    with_task(tasks, id, |task| task.completed = !task.completed)
}

pub fn cycle_priority(tasks: &mut [Task], id: &str) -> bool {
    with_task(tasks, id, |task| task.priority = task.priority.cycled())
}

pub fn delete_task(tasks: &mut Vec<Task>, id: &str) -> bool {
    let before = tasks.len();
    tasks.retain(|task| task.id != id);
    tasks.len() != before
}

pub fn filter_tasks(tasks: &[Task], filter: TaskFilter) -> Vec<&Task> {
    tasks.iter().filter(|task| filter.matches(task)).collect()
}

pub fn task_summary(tasks: &[Task]) -> TaskSummary {
    TaskSummary {
        completed: tasks.iter().filter(|task| task.completed).count(),
        total: tasks.len(),
    }
}

fn with_task(tasks: &mut [Task], id: &str, apply: impl FnOnce(&mut Task)) -> bool {
    match tasks.iter_mut().find(|task| task.id == id) {
        Some(task) => {
            apply(task);
            true
        }
        None => false,
    }
}
