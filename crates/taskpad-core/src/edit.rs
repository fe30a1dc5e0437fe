use tracing::debug;

use crate::error::ValidationError;
use crate::form::clean_fields;
use crate::task::{
  Task,
  TaskPatch
};

/// Raw input values while an item is
/// being edited inline.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditDraft {
  pub title: String,
  pub notes: String,
  pub due:   String
}

impl EditDraft {
  pub fn from_task(task: &Task) -> Self {
    Self {
      title: task.title.clone(),
      notes: task.notes.clone(),
      due:   task
        .due
        .clone()
        .unwrap_or_default()
    }
  }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EditState {
  #[default]
  Display,
  Editing(EditDraft)
}

/// Which of the edit/save/cancel
/// buttons an item shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlVisibility {
  pub edit:   bool,
  pub save:   bool,
  pub cancel: bool
}

/// Per-item display/editing state
/// machine.
///
/// ```text
/// Display --begin--> Editing
/// Editing --commit ok--> Display
/// Editing --commit err--> Editing
/// Editing --cancel--> Display
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemEditor {
  state: EditState
}

impl ItemEditor {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn state(&self) -> &EditState {
    &self.state
  }

  pub fn is_editing(&self) -> bool {
    matches!(
      self.state,
      EditState::Editing(_)
    )
  }

  pub fn draft(
    &self
  ) -> Option<&EditDraft> {
    match &self.state {
      | EditState::Editing(draft) => {
        Some(draft)
      }
      | EditState::Display => None
    }
  }

  pub fn draft_mut(
    &mut self
  ) -> Option<&mut EditDraft> {
    match &mut self.state {
      | EditState::Editing(draft) => {
        Some(draft)
      }
      | EditState::Display => None
    }
  }

  /// Enters editing pre-filled from
  /// `task`. Returns false if already
  /// editing; the open draft is kept.
  pub fn begin(
    &mut self,
    task: &Task
  ) -> bool {
    if self.is_editing() {
      return false;
    }
    debug!(id = %task.id, "entering edit mode");
    self.state = EditState::Editing(
      EditDraft::from_task(task)
    );
    true
  }

  pub fn set_title(
    &mut self,
    value: impl Into<String>
  ) {
    if let Some(draft) = self.draft_mut()
    {
      draft.title = value.into();
    }
  }

  pub fn set_notes(
    &mut self,
    value: impl Into<String>
  ) {
    if let Some(draft) = self.draft_mut()
    {
      draft.notes = value.into();
    }
  }

  pub fn set_due(
    &mut self,
    value: impl Into<String>
  ) {
    if let Some(draft) = self.draft_mut()
    {
      draft.due = value.into();
    }
  }

  /// Validates the draft. On success
  /// the editor drops back to display
  /// and the patch to apply is
  /// returned; on failure it stays in
  /// editing with the draft untouched.
  /// `Ok(None)` means there was nothing
  /// being edited.
  pub fn commit(
    &mut self
  ) -> Result<Option<TaskPatch>, ValidationError>
  {
    let Some(draft) = self.draft() else {
      return Ok(None);
    };

    let fields = clean_fields(
      &draft.title,
      &draft.notes,
      &draft.due
    )?;

    self.state = EditState::Display;
    Ok(Some(TaskPatch {
      title: Some(fields.title),
      notes: Some(fields.notes),
      due:   Some(fields.due)
    }))
  }

  /// Discards the draft. Returns false
  /// when not editing.
  pub fn cancel(&mut self) -> bool {
    if !self.is_editing() {
      return false;
    }
    self.state = EditState::Display;
    true
  }

  pub fn controls(
    &self
  ) -> ControlVisibility {
    let editing = self.is_editing();
    ControlVisibility {
      edit:   !editing,
      save:   editing,
      cancel: editing
    }
  }
}
