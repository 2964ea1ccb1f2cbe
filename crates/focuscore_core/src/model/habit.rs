use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HabitFrequency {
    #[default]
    Daily,
    Weekly,
}

/// A tracked habit with per-day completion marks.
///
/// `streak` is a running counter adjusted on every toggle, not recomputed
/// from `completion`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Habit {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub frequency: HabitFrequency,
    #[serde(default)]
    pub streak: u32,
    #[serde(default)]
    pub completion: BTreeMap<NaiveDate, bool>,
    #[serde(default)]
    pub category: String,
}

impl Habit {
    pub fn new(
        name: impl Into<String>,
        frequency: HabitFrequency,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            frequency,
            streak: 0,
            completion: BTreeMap::new(),
            category: category.into(),
        }
    }

    pub fn is_done_on(&self, date: NaiveDate) -> bool {
        self.completion.get(&date).copied().unwrap_or(false)
    }
}
