use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

/// One stored to-do item.
///
/// The serialized field names are the persisted record layout; `dueISO`
/// stays a plain `YYYY-MM-DD` string so it never shifts with the timezone.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Task {
    pub id: String,

    pub title: String,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub notes: String,

    #[serde(rename = "dueISO", default)]
    pub due: Option<String>,

    #[serde(default)]
    pub completed: bool,

    #[serde(rename = "createdISO")]
    pub created: DateTime<Utc>,
}

/// Partial update merged into a task by [`Task::apply`].
///
/// `due` is doubly optional: `None` leaves the date alone, `Some(None)`
/// clears it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub notes: Option<String>,
    pub due: Option<Option<String>>,
}

impl Task {
    pub fn new(title: impl Into<String>, notes: impl Into<String>, due: Option<String>) -> Self {
        Self::new_at(title, notes, due, Utc::now())
    }

    pub fn new_at(
        title: impl Into<String>,
        notes: impl Into<String>,
        due: Option<String>,
        created: DateTime<Utc>,
    ) -> Self {
        Self {
            id: new_task_id(),
            title: title.into(),
            notes: notes.into(),
            due: normalize_due(due),
            completed: false,
            created,
        }
    }

    pub fn apply(&self, patch: &TaskPatch) -> Self {
        let mut next = self.clone();
        if let Some(title) = &patch.title {
            next.title = title.clone();
        }
        if let Some(notes) = &patch.notes {
            next.notes = notes.clone();
        }
        if let Some(due) = &patch.due {
            next.due = normalize_due(due.clone());
        }
        next
    }

    /// `today` must be a `YYYY-MM-DD` string; the format sorts lexicographically.
    pub fn is_overdue(&self, today: &str) -> bool {
        !self.completed && self.due.as_deref().is_some_and(|due| due < today)
    }

    pub fn is_due_on(&self, today: &str) -> bool {
        self.due.as_deref() == Some(today)
    }

    pub fn matches_text(&self, needle_lower: &str) -> bool {
        self.title.to_lowercase().contains(needle_lower)
            || self.notes.to_lowercase().contains(needle_lower)
    }

    pub fn due_label(&self) -> String {
        self.due
            .as_deref()
            .map(|due| format!("Due {due}"))
            .unwrap_or_default()
    }

    pub fn status_label(&self) -> &'static str {
        if self.completed { "Completed" } else { "Active" }
    }
}

pub fn new_task_id() -> String {
    Uuid::new_v4().to_string()
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn normalize_due(due: Option<String>) -> Option<String> {
    due.and_then(|value| {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use chrono::{TimeZone, Utc};

    use super::{Task, TaskPatch, new_task_id};

    #[test]
    fn new_task_starts_open_and_drops_empty_due() {
        let now = Utc.with_ymd_and_hms(2024, 5, 1, 8, 30, 0).unwrap();

        let task = Task::new_at("Buy milk", "", Some(String::new()), now);
        assert_eq!(task.title, "Buy milk");
        assert!(!task.completed);
        assert_eq!(task.due, None);
        assert_eq!(task.created, now);

        let blank = Task::new_at("x", "", Some("   ".to_string()), now);
        assert_eq!(blank.due, None);

        let dated = Task::new_at("x", "n", Some("2024-06-01".to_string()), now);
        assert_eq!(dated.due.as_deref(), Some("2024-06-01"));
        assert_eq!(dated.notes, "n");
    }

    #[test]
    fn ids_do_not_collide() {
        let ids: HashSet<String> = (0..10_000).map(|_| new_task_id()).collect();
        assert_eq!(ids.len(), 10_000);
    }

    #[test]
    fn apply_patch_keeps_identity_and_creation() {
        let task = Task::new("Draft", "old", Some("2024-01-01".to_string()));

        let patched = task.apply(&TaskPatch {
            title: Some("Final".to_string()),
            notes: None,
            due: Some(None),
        });

        assert_eq!(patched.id, task.id);
        assert_eq!(patched.created, task.created);
        assert_eq!(patched.title, "Final");
        assert_eq!(patched.notes, "old");
        assert_eq!(patched.due, None);
    }

    #[test]
    fn serialized_record_uses_stored_field_names() {
        let now = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        let task = Task::new_at("a", "b", None, now);

        let value = serde_json::to_value(&task).unwrap();
        assert_eq!(value["title"], "a");
        assert_eq!(value["notes"], "b");
        assert!(value["dueISO"].is_null());
        assert_eq!(value["completed"], false);
        assert!(value["createdISO"].as_str().unwrap().starts_with("2024-01-02T03:04:05"));
    }

    #[test]
    fn reads_browser_style_timestamps() {
        let raw = r#"{"id":"lq3k9x","title":"t","notes":"","dueISO":"2024-02-03","completed":true,"createdISO":"2024-02-01T10:11:12.345Z"}"#;
        let task: Task = serde_json::from_str(raw).unwrap();
        assert_eq!(task.id, "lq3k9x");
        assert!(task.completed);
        assert_eq!(task.due_label(), "Due 2024-02-03");
        assert_eq!(task.status_label(), "Completed");
    }

    #[test]
    fn null_or_missing_notes_read_as_empty() {
        let null_notes = r#"{"id":"a","title":"t","notes":null,"dueISO":null,"completed":false,"createdISO":"2024-02-01T10:11:12Z"}"#;
        let task: Task = serde_json::from_str(null_notes).unwrap();
        assert_eq!(task.notes, "");

        let no_notes = r#"{"id":"b","title":"t","createdISO":"2024-02-01T10:11:12Z"}"#;
        let task: Task = serde_json::from_str(no_notes).unwrap();
        assert_eq!(task.notes, "");
        assert_eq!(task.due, None);
    }
}
