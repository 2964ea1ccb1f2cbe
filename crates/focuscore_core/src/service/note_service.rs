//! Notes use-cases.
//!
//! # Invariants
//! - The list is ordered newest-created first.
//! - `updated_at` only moves when the content is rewritten.

use crate::model::note::Note;
use chrono::{DateTime, Utc};

/// Creates an empty note at the front of the list; `None` for a blank title.
pub fn create_note<'a>(
    notes: &'a mut Vec<Note>,
    title: &str,
    now: DateTime<Utc>,
) -> Option<&'a Note> {
    let title = title.trim();
    if title.is_empty() {
        return None;
    }
    notes.insert(0, Note::new(title, now));
    notes.first()
}

/// Replaces the content of note `id` and stamps `updated_at`.
pub fn update_note(notes: &mut [Note], id: &str, content: &str, now: DateTime<Utc>) -> bool {
    match notes.iter_mut().find(|note| note.id == id) {
        Some(note) => {
            note.content = content.to_string();
            note.updated_at = now;
            true
        }
        None => false,
    }
}

pub fn delete_note(notes: &mut Vec<Note>, id: &str) -> bool {
    let before = notes.len();
    notes.retain(|note| note.id != id);
    notes.len() != before
}

/// Notes whose title or content contains `term`, ignoring case, in list
/// order. An empty term matches everything.
pub fn search_notes<'a>(notes: &'a [Note], term: &str) -> Vec<&'a Note> {
    let term = term.trim();
    notes.iter().filter(|note| note.matches(term)).collect()
}
