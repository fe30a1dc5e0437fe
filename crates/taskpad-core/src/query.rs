use std::fmt;
use std::str::FromStr;

use anyhow::anyhow;
use serde::{
  Deserialize,
  Serialize
};

use crate::task::Task;

#[derive(
  Debug,
  Clone,
  Copy,
  Default,
  PartialEq,
  Eq,
  Hash,
  Serialize,
  Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum TaskFilter {
  #[default]
  All,
  Active,
  Completed,
  Overdue,
  Today
}

impl TaskFilter {
  pub const OPTIONS: [TaskFilter; 5] = [
    TaskFilter::All,
    TaskFilter::Active,
    TaskFilter::Completed,
    TaskFilter::Overdue,
    TaskFilter::Today
  ];

  pub fn as_str(self) -> &'static str {
    match self {
      | TaskFilter::All => "all",
      | TaskFilter::Active => "active",
      | TaskFilter::Completed => {
        "completed"
      }
      | TaskFilter::Overdue => "overdue",
      | TaskFilter::Today => "today"
    }
  }

  pub fn label(self) -> &'static str {
    match self {
      | TaskFilter::All => "All",
      | TaskFilter::Active => "Active",
      | TaskFilter::Completed => {
        "Completed"
      }
      | TaskFilter::Overdue => "Overdue",
      | TaskFilter::Today => "Due today"
    }
  }

  /// `today` is the local date as
  /// `YYYY-MM-DD`.
  pub fn matches(
    self,
    task: &Task,
    today: &str
  ) -> bool {
    match self {
      | TaskFilter::All => true,
      | TaskFilter::Active => {
        !task.completed
      }
      | TaskFilter::Completed => {
        task.completed
      }
      | TaskFilter::Overdue => {
        task.is_overdue(today)
      }
      | TaskFilter::Today => {
        task.is_due_on(today)
      }
    }
  }
}

impl fmt::Display for TaskFilter {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>
  ) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for TaskFilter {
  type Err = anyhow::Error;

  fn from_str(
    s: &str
  ) -> Result<Self, Self::Err> {
    let wanted =
      s.trim().to_ascii_lowercase();
    Self::OPTIONS
      .into_iter()
      .find(|filter| {
        filter.as_str() == wanted
      })
      .ok_or_else(|| {
        anyhow!("unknown filter: {s}")
      })
  }
}

/// Case-insensitive substring match on
/// title or notes. Blank queries match
/// everything.
pub fn matches_search(
  task: &Task,
  search: &str
) -> bool {
  let needle =
    search.trim().to_lowercase();
  needle.is_empty()
    || task.matches_text(&needle)
}

/// Applies the filter, then the search,
/// keeping collection order.
pub fn visible_tasks<'a>(
  tasks: &'a [Task],
  filter: TaskFilter,
  search: &str,
  today: &str
) -> Vec<&'a Task> {
  let needle =
    search.trim().to_lowercase();

  tasks
    .iter()
    .filter(|task| {
      filter.matches(task, today)
    })
    .filter(|task| {
      needle.is_empty()
        || task.matches_text(&needle)
    })
    .collect()
}

#[derive(
  Debug, Clone, Copy, Default, PartialEq, Eq,
)]
pub struct TaskStats {
  pub total:     usize,
  pub active:    usize,
  pub completed: usize
}

impl TaskStats {
  /// Counts over the whole collection,
  /// never the filtered view.
  pub fn of(tasks: &[Task]) -> Self {
    let completed = tasks
      .iter()
      .filter(|task| task.completed)
      .count();
    Self {
      total: tasks.len(),
      active: tasks.len() - completed,
      completed
    }
  }
}
