//! Use-case operations over feature collections.
//!
//! # Responsibility
//! - Implement list mutations (add, toggle, delete, cycle) and derived
//!   summaries on in-memory snapshots.
//! - Stay storage-agnostic; persistence goes through `repo::app_store`.

pub mod finance_service;
pub mod habit_service;
pub mod note_service;
pub mod pomodoro;
pub mod routine_service;
pub mod task_service;
