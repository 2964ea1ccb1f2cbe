//! Domain records consumed and produced by core business logic.
//!
//! # Responsibility
//! - Define the canonical shapes of tasks, routines, habits, finance entries,
//!   notes, holidays and derived calendar events.
//! - Keep the stored JSON field naming stable (`camelCase`).
//!
//! # Invariants
//! - Records owned by feature collections are plain data; core logic reads
//!   them as snapshots and never keeps hidden copies.
//! - Optional fields that fail to parse are treated as absent, never as errors.

pub mod event;
pub mod finance;
pub mod habit;
pub mod holiday;
pub mod note;
pub mod routine;
pub mod task;
