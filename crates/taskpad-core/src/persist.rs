use tracing::{
  debug,
  warn
};

use crate::error::StorageError;
use crate::storage::KeyValueStorage;
use crate::task::Task;

/// Bumping the suffix is the only way
/// to change the record layout; old
/// entries are simply not read again.
pub const DEFAULT_STORAGE_KEY: &str =
  "tasks.v1";

/// Reads and writes the full task
/// collection as one JSON array under a
/// single key.
#[derive(Debug, Clone)]
pub struct TaskRepository<S> {
  storage: S,
  key:     String
}

impl<S: KeyValueStorage> TaskRepository<S> {
  pub fn new(storage: S) -> Self {
    Self::with_key(
      storage,
      DEFAULT_STORAGE_KEY
    )
  }

  pub fn with_key(
    storage: S,
    key: impl Into<String>
  ) -> Self {
    Self {
      storage,
      key: key.into()
    }
  }

  pub fn key(&self) -> &str {
    &self.key
  }

  pub fn storage(&self) -> &S {
    &self.storage
  }

  /// Never fails: a missing, unreadable
  /// or malformed entry yields an empty
  /// collection.
  #[tracing::instrument(skip(self), fields(key = %self.key))]
  pub fn load(&self) -> Vec<Task> {
    let raw = match self
      .storage
      .get_item(&self.key)
    {
      | Ok(Some(raw)) => raw,
      | Ok(None) => {
        debug!("no stored tasks");
        return Vec::new();
      }
      | Err(error) => {
        warn!(%error, "failed reading stored tasks; starting empty");
        return Vec::new();
      }
    };

    match serde_json::from_str::<Vec<Task>>(
      &raw
    ) {
      | Ok(tasks) => {
        debug!(
          count = tasks.len(),
          "loaded tasks"
        );
        tasks
      }
      | Err(error) => {
        warn!(%error, "discarding unparsable task collection");
        Vec::new()
      }
    }
  }

  #[tracing::instrument(skip(self, tasks), fields(key = %self.key, count = tasks.len()))]
  pub fn save(
    &self,
    tasks: &[Task]
  ) -> Result<(), StorageError> {
    let json =
      serde_json::to_string(tasks)?;
    self
      .storage
      .set_item(&self.key, &json)?;
    debug!(
      bytes = json.len(),
      "saved tasks"
    );
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use chrono::{
    TimeZone,
    Utc
  };

  use super::{
    DEFAULT_STORAGE_KEY,
    TaskRepository
  };
  use crate::storage::{
    KeyValueStorage,
    MemoryStorage
  };
  use crate::task::Task;

  fn sample() -> Vec<Task> {
    let now = Utc
      .with_ymd_and_hms(
        2024, 3, 4, 5, 6, 7
      )
      .unwrap();
    let mut done = Task::new_at(
      "Pay rent",
      "transfer",
      Some("2024-03-01".to_string()),
      now
    );
    done.completed = true;
    vec![
      Task::new_at(
        "Call mom", "", None, now
      ),
      done,
    ]
  }

  #[test]
  fn save_then_load_round_trips() {
    let repo = TaskRepository::new(
      MemoryStorage::new()
    );
    let tasks = sample();

    repo.save(&tasks).unwrap();
    let loaded = repo.load();
    assert_eq!(loaded, tasks);

    repo.save(&repo.load()).unwrap();
    assert_eq!(repo.load(), tasks);
  }

  #[test]
  fn missing_or_corrupt_entry_loads_empty()
  {
    let storage = MemoryStorage::new();
    let repo =
      TaskRepository::new(storage.clone());
    assert!(repo.load().is_empty());

    for garbage in [
      "",
      "not json",
      "{\"id\":\"x\"}",
      "42",
      "null",
      "[{\"title\":\"no id\"}]"
    ] {
      storage
        .set_item(
          DEFAULT_STORAGE_KEY,
          garbage
        )
        .unwrap();
      assert!(
        repo.load().is_empty(),
        "expected empty for {garbage:?}"
      );
    }
  }

  #[test]
  fn null_notes_do_not_drop_the_collection()
  {
    let storage = MemoryStorage::new();
    storage
      .set_item(
        DEFAULT_STORAGE_KEY,
        r#"[{"id":"a","title":"kept","notes":null,"dueISO":null,"completed":false,"createdISO":"2024-03-04T05:06:07Z"},{"id":"b","title":"also kept","createdISO":"2024-03-04T05:06:07Z"}]"#
      )
      .unwrap();

    let loaded =
      TaskRepository::new(storage).load();
    assert_eq!(loaded.len(), 2);
    assert_eq!(loaded[0].notes, "");
    assert_eq!(loaded[1].title, "also kept");
  }

  #[test]
  fn custom_key_is_isolated() {
    let storage = MemoryStorage::new();
    let v1 = TaskRepository::new(
      storage.clone()
    );
    let v2 = TaskRepository::with_key(
      storage.clone(),
      "tasks.v2"
    );

    v1.save(&sample()).unwrap();
    assert!(v2.load().is_empty());
    assert_eq!(v2.key(), "tasks.v2");
    assert_eq!(storage.len(), 1);
  }
}
