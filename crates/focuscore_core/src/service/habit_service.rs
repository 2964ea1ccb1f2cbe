//! Habit tracking use-cases.
//!
//! # Invariants
//! - `streak` never underflows: unmarking at zero keeps zero.

use crate::model::habit::{Habit, HabitFrequency};
use chrono::{Days, NaiveDate};

const WEEK_LEN: u64 = 7;

pub fn add_habit<'a>(
    habits: &'a mut Vec<Habit>,
    name: &str,
    frequency: HabitFrequency,
    category: &str,
) -> Option<&'a Habit> {
    let name = name.trim();
    if name.is_empty() {
        return None;
    }
    habits.push(Habit::new(name, frequency, category.trim()));
    habits.last()
}

pub fn delete_habit(habits: &mut Vec<Habit>, id: &str) -> bool {
    let before = habits.len();
    habits.retain(|habit| habit.id != id);
    habits.len() != before
}

/// Flips the completion mark of `date`, adjusting the streak counter.
///
/// Returns the new mark, or `None` when the habit does not exist.
pub fn toggle_habit(habits: &mut [Habit], id: &str, date: NaiveDate) -> Option<bool> {
    let habit = habits.iter_mut().find(|habit| habit.id == id)?;
    let done = !habit.is_done_on(date);
    habit.completion.insert(date, done);
    habit.streak = if done {
        habit.streak.saturating_add(1)
    } else {
        habit.streak.saturating_sub(1)
    };
    Some(done)
}

/// The seven dates ending on `today`, oldest first.
pub fn last_week_dates(today: NaiveDate) -> Vec<NaiveDate> {
    (0..WEEK_LEN)
        .rev()
        .filter_map(|back| today.checked_sub_days(Days::new(back)))
        .collect()
}

/// Percentage of `dates` marked as done.
pub fn weekly_progress(habit: &Habit, dates: &[NaiveDate]) -> f64 {
    if dates.is_empty() {
        return 0.0;
    }
    let done = dates.iter().filter(|date| habit.is_done_on(**date)).count();
    done as f64 / dates.len() as f64 * 100.0
}
