//! Per-user application store.
//!
//! # Responsibility
//! - Map feature collections to keys `focuscore-<user>-<collection>`.
//! - Export and restore every key of one user as a single JSON snapshot.
//! - Act as the task owner the calendar asks to toggle completion.
//!
//! # Invariants
//! - Only `<prefix><collection>` keys of this user are ever read, written or
//!   removed; another user whose id extends this one (`ana` vs `ana-maria`)
//!   shares the prefix but never a collection key.
//! - A missing collection loads as empty; a corrupt one is an error.
//! - Restore writes nothing unless the whole snapshot is acceptable.

use crate::calendar::TaskCompletionHandle;
use crate::model::finance::{Investment, Transaction};
use crate::model::habit::Habit;
use crate::model::note::Note;
use crate::model::routine::Routine;
use crate::model::task::Task;
use crate::repo::kv_repo::KvRepository;
use crate::repo::{RepoError, RepoResult};
use log::{info, warn};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

const KEY_NAMESPACE: &str = "focuscore";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    Tasks,
    Routines,
    Habits,
    Transactions,
    Investments,
    Notes,
}

impl Collection {
    pub const ALL: [Collection; 6] = [
        Self::Tasks,
        Self::Routines,
        Self::Habits,
        Self::Transactions,
        Self::Investments,
        Self::Notes,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Tasks => "tasks",
            Self::Routines => "routines",
            Self::Habits => "habits",
            Self::Transactions => "transactions",
            Self::Investments => "investments",
            Self::Notes => "notes",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|collection| collection.as_str() == name)
    }
}

pub struct AppStore<R: KvRepository> {
    repo: R,
    user_id: String,
}

impl<R: KvRepository> AppStore<R> {
    pub fn new(repo: R, user_id: impl Into<String>) -> Self {
        Self {
            repo,
            user_id: user_id.into(),
        }
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    /// Key prefix shared by every entry of this user.
    pub fn key_prefix(&self) -> String {
        format!("{KEY_NAMESPACE}-{}-", self.user_id)
    }

    pub fn key(&self, collection: Collection) -> String {
        format!("{}{}", self.key_prefix(), collection.as_str())
    }

    /// Whether `key` is one of this user's collection keys.
    pub fn owns_key(&self, key: &str) -> bool {
        key.strip_prefix(&self.key_prefix())
            .and_then(Collection::from_name)
            .is_some()
    }

    pub fn load_tasks(&self) -> RepoResult<Vec<Task>> {
        self.load(Collection::Tasks)
    }

    pub fn save_tasks(&self, tasks: &[Task]) -> RepoResult<()> {
        self.save(Collection::Tasks, tasks)
    }

    pub fn load_routines(&self) -> RepoResult<Vec<Routine>> {
        self.load(Collection::Routines)
    }

    pub fn save_routines(&self, routines: &[Routine]) -> RepoResult<()> {
        self.save(Collection::Routines, routines)
    }

    pub fn load_habits(&self) -> RepoResult<Vec<Habit>> {
        self.load(Collection::Habits)
    }

    pub fn save_habits(&self, habits: &[Habit]) -> RepoResult<()> {
        self.save(Collection::Habits, habits)
    }

    pub fn load_transactions(&self) -> RepoResult<Vec<Transaction>> {
        self.load(Collection::Transactions)
    }

    pub fn save_transactions(&self, transactions: &[Transaction]) -> RepoResult<()> {
        self.save(Collection::Transactions, transactions)
    }

    pub fn load_investments(&self) -> RepoResult<Vec<Investment>> {
        self.load(Collection::Investments)
    }

    pub fn save_investments(&self, investments: &[Investment]) -> RepoResult<()> {
        self.save(Collection::Investments, investments)
    }

    pub fn load_notes(&self) -> RepoResult<Vec<Note>> {
        self.load(Collection::Notes)
    }

    pub fn save_notes(&self, notes: &[Note]) -> RepoResult<()> {
        self.save(Collection::Notes, notes)
    }

    /// Serializes every entry of this user into one JSON object keyed by
    /// storage key.
    pub fn export_snapshot(&self) -> RepoResult<String> {
        let mut snapshot = Map::new();
        for (key, raw) in self.repo.list_prefix(&self.key_prefix())? {
            if !self.owns_key(&key) {
                continue;
            }
            let value: Value = serde_json::from_str(&raw).map_err(|err| RepoError::InvalidData {
                key: key.clone(),
                message: err.to_string(),
            })?;
            snapshot.insert(key, value);
        }

        let entries = snapshot.len();
        let json = Value::Object(snapshot).to_string();
        info!("event=snapshot_export module=store status=ok entries={entries}");
        Ok(json)
    }

    /// Restores entries of this user from an exported snapshot.
    ///
    /// Keys other than this user's collection keys are skipped. Returns the
    /// number of entries written.
    pub fn restore_snapshot(&self, json: &str) -> RepoResult<usize> {
        let parsed: Value = serde_json::from_str(json).map_err(|err| {
            warn!("event=snapshot_restore module=store status=error error_code=invalid_json");
            RepoError::InvalidSnapshot(err.to_string())
        })?;
        let Value::Object(snapshot) = parsed else {
            warn!("event=snapshot_restore module=store status=error error_code=not_an_object");
            return Err(RepoError::InvalidSnapshot(
                "expected a JSON object keyed by storage key".to_string(),
            ));
        };

        let total = snapshot.len();
        let entries: Vec<(String, String)> = snapshot
            .into_iter()
            .filter(|(key, _)| self.owns_key(key))
            .map(|(key, value)| (key, value.to_string()))
            .collect();

        let written = self.repo.put_all(&entries)?;
        info!(
            "event=snapshot_restore module=store status=ok written={written} skipped={}",
            total - written
        );
        Ok(written)
    }

    /// Removes every collection of this user; returns how many existed.
    pub fn clear(&self) -> RepoResult<usize> {
        let mut removed = 0;
        for collection in Collection::ALL {
            if self.repo.delete(&self.key(collection))? {
                removed += 1;
            }
        }
        info!("event=store_clear module=store status=ok removed={removed}");
        Ok(removed)
    }

    fn load<T: DeserializeOwned>(&self, collection: Collection) -> RepoResult<Vec<T>> {
        let key = self.key(collection);
        let Some(raw) = self.repo.get(&key)? else {
            return Ok(Vec::new());
        };
        serde_json::from_str(&raw).map_err(|err| {
            warn!(
                "event=collection_load module=store status=error collection={} error_code=invalid_data",
                collection.as_str()
            );
            RepoError::InvalidData {
                key,
                message: err.to_string(),
            }
        })
    }

    fn save<T: Serialize>(&self, collection: Collection, items: &[T]) -> RepoResult<()> {
        let key = self.key(collection);
        let json = serde_json::to_string(items).map_err(|err| RepoError::InvalidData {
            key: key.clone(),
            message: err.to_string(),
        })?;
        self.repo.put(&key, &json)
    }
}

impl<R: KvRepository> TaskCompletionHandle for AppStore<R> {
    /// Loads, flips and persists in one step so the calendar can rebuild from
    /// the stored list.
    fn toggle_task_completion(&mut self, task_id: &str) -> bool {
        let result = self.load_tasks().and_then(|mut tasks| {
            if !tasks.toggle_task_completion(task_id) {
                return Ok(false);
            }
            self.save_tasks(&tasks)?;
            Ok(true)
        });

        match result {
            Ok(toggled) => toggled,
            Err(err) => {
                warn!("event=task_toggle module=store status=error error={err}");
                false
            }
        }
    }
}
