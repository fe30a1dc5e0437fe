use chrono::{
  DateTime,
  Utc
};

use crate::clock::parse_iso_date;
use crate::error::ValidationError;
use crate::task::Task;

/// Raw values of the creation form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskForm {
  pub title: String,
  pub notes: String,
  pub due:   String
}

/// Trimmed, validated field values
/// shared by creation and inline edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CleanFields {
  pub title: String,
  pub notes: String,
  pub due:   Option<String>
}

impl TaskForm {
  pub fn new(
    title: impl Into<String>,
    notes: impl Into<String>,
    due: impl Into<String>
  ) -> Self {
    Self {
      title: title.into(),
      notes: notes.into(),
      due:   due.into()
    }
  }

  /// Builds the task the form
  /// describes. The form itself is left
  /// untouched; call [`TaskForm::reset`]
  /// once the task is stored.
  pub fn submit(
    &self
  ) -> Result<Task, ValidationError> {
    self.submit_at(Utc::now())
  }

  /// Like [`TaskForm::submit`] with an
  /// explicit creation time.
  pub fn submit_at(
    &self,
    created: DateTime<Utc>
  ) -> Result<Task, ValidationError> {
    let fields = clean_fields(
      &self.title,
      &self.notes,
      &self.due
    )?;
    Ok(Task::new_at(
      fields.title,
      fields.notes,
      fields.due,
      created
    ))
  }

  pub fn reset(&mut self) {
    *self = Self::default();
  }
}

pub(crate) fn clean_fields(
  title: &str,
  notes: &str,
  due: &str
) -> Result<CleanFields, ValidationError>
{
  let title = title.trim();
  if title.is_empty() {
    return Err(
      ValidationError::EmptyTitle
    );
  }

  let due = due.trim();
  let due = if due.is_empty() {
    None
  } else if parse_iso_date(due).is_some()
  {
    Some(due.to_string())
  } else {
    return Err(
      ValidationError::InvalidDueDate(
        due.to_string()
      )
    );
  };

  Ok(CleanFields {
    title: title.to_string(),
    notes: notes.trim().to_string(),
    due
  })
}
