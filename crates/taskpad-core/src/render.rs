use tracing::debug;

use crate::edit::{
  ControlVisibility,
  ItemEditor
};
use crate::error::ValidationError;
use crate::query::TaskStats;
use crate::storage::KeyValueStorage;
use crate::store::TaskStore;
use crate::task::Task;

/// The five per-item controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemControl {
  ToggleComplete(bool),
  Edit,
  Save,
  Cancel,
  Delete
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControlOutcome {
  /// State changed or a rebuild was
  /// forced; the list must be rendered
  /// again from the store.
  Rerender,
  /// The item switched to its edit
  /// presentation.
  Editing,
  /// Validation failed; show the notice
  /// and keep the item in editing.
  Blocked(ValidationError),
  Ignored
}

/// View-model for one rendered row,
/// bound to the task as it was when the
/// list was built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskItem {
  task:   Task,
  editor: ItemEditor
}

impl TaskItem {
  pub fn from_task(task: &Task) -> Self {
    Self {
      task:   task.clone(),
      editor: ItemEditor::new()
    }
  }

  pub fn id(&self) -> &str {
    &self.task.id
  }

  pub fn task(&self) -> &Task {
    &self.task
  }

  pub fn title(&self) -> &str {
    &self.task.title
  }

  pub fn notes(&self) -> &str {
    &self.task.notes
  }

  pub fn completed(&self) -> bool {
    self.task.completed
  }

  pub fn due_label(&self) -> String {
    self.task.due_label()
  }

  pub fn status_label(
    &self
  ) -> &'static str {
    self.task.status_label()
  }

  pub fn class_name(
    &self
  ) -> &'static str {
    if self.task.completed {
      "task-item is-completed"
    } else {
      "task-item"
    }
  }

  pub fn editor(&self) -> &ItemEditor {
    &self.editor
  }

  pub fn editor_mut(
    &mut self
  ) -> &mut ItemEditor {
    &mut self.editor
  }

  pub fn controls(
    &self
  ) -> ControlVisibility {
    self.editor.controls()
  }

  /// Runs one control against `store`.
  /// The item's id was captured when it
  /// was rendered; a later render builds
  /// new items.
  pub fn activate<S: KeyValueStorage>(
    &mut self,
    control: ItemControl,
    store: &mut TaskStore<S>
  ) -> ControlOutcome {
    debug!(id = %self.task.id, ?control, "item control activated");
    match control {
      | ItemControl::ToggleComplete(
        done
      ) => {
        store.toggle_complete(
          &self.task.id,
          done
        );
        ControlOutcome::Rerender
      }
      | ItemControl::Delete => {
        store.delete_task(&self.task.id);
        ControlOutcome::Rerender
      }
      | ItemControl::Edit => {
        if self.editor.begin(&self.task)
        {
          ControlOutcome::Editing
        } else {
          ControlOutcome::Ignored
        }
      }
      | ItemControl::Save => {
        match self.editor.commit() {
          | Ok(Some(patch)) => {
            store.update_task(
              &self.task.id,
              patch
            );
            ControlOutcome::Rerender
          }
          | Ok(None) => {
            ControlOutcome::Ignored
          }
          | Err(error) => {
            debug!(%error, "edit blocked by validation");
            ControlOutcome::Blocked(error)
          }
        }
      }
      | ItemControl::Cancel => {
        if self.editor.cancel() {
          store.request_render();
          ControlOutcome::Rerender
        } else {
          ControlOutcome::Ignored
        }
      }
    }
  }
}

/// One full build of the visible list
/// plus the summary counts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedList {
  pub items:    Vec<TaskItem>,
  pub stats:    TaskStats,
  pub revision: u64
}

impl RenderedList {
  pub fn item_mut(
    &mut self,
    id: &str
  ) -> Option<&mut TaskItem> {
    self
      .items
      .iter_mut()
      .find(|item| item.id() == id)
  }
}

/// Rebuilds every item from scratch; no
/// state carries over from a previous
/// render.
pub fn render_list<S: KeyValueStorage>(
  store: &TaskStore<S>
) -> RenderedList {
  let items: Vec<TaskItem> = store
    .visible_tasks()
    .into_iter()
    .map(TaskItem::from_task)
    .collect();
  debug!(
    visible = items.len(),
    revision = store.revision(),
    "rendered task list"
  );
  RenderedList {
    items,
    stats: store.stats(),
    revision: store.revision()
  }
}

#[cfg(test)]
mod tests {
  use chrono::NaiveDate;

  use super::{
    ControlOutcome,
    ItemControl,
    render_list
  };
  use crate::clock::FixedClock;
  use crate::error::ValidationError;
  use crate::persist::TaskRepository;
  use crate::query::TaskFilter;
  use crate::storage::MemoryStorage;
  use crate::store::TaskStore;
  use crate::task::Task;

  fn store_with(
    tasks: Vec<Task>
  ) -> TaskStore<MemoryStorage> {
    let mut store =
      TaskStore::init_with_clock(
        TaskRepository::new(
          MemoryStorage::new()
        ),
        FixedClock::on(
          NaiveDate::from_ymd_opt(
            2024, 6, 1
          )
          .unwrap()
        )
      );
    for task in tasks.into_iter().rev() {
      store.add_task(task);
    }
    store
  }

  #[test]
  fn items_follow_visible_order_and_bind_values()
   {
    let mut done = Task::new(
      "Done thing",
      "",
      None
    );
    done.completed = true;
    let store = store_with(vec![
      Task::new(
        "Open thing",
        "note",
        Some("2024-06-01".to_string())
      ),
      done,
    ]);

    let list = render_list(&store);
    assert_eq!(list.items.len(), 2);
    assert_eq!(list.stats.total, 2);

    let open = &list.items[0];
    assert_eq!(open.title(), "Open thing");
    assert_eq!(open.notes(), "note");
    assert_eq!(
      open.due_label(),
      "Due 2024-06-01"
    );
    assert_eq!(open.status_label(), "Active");
    assert_eq!(open.class_name(), "task-item");
    assert!(open.controls().edit);

    let closed = &list.items[1];
    assert!(closed.completed());
    assert_eq!(closed.due_label(), "");
    assert_eq!(
      closed.class_name(),
      "task-item is-completed"
    );
  }

  #[test]
  fn toggle_and_delete_go_through_the_store()
   {
    let task =
      Task::new("Buy milk", "", None);
    let id = task.id.clone();
    let mut store = store_with(vec![task]);

    let mut list = render_list(&store);
    let outcome = list
      .item_mut(&id)
      .unwrap()
      .activate(
        ItemControl::ToggleComplete(true),
        &mut store
      );
    assert_eq!(
      outcome,
      ControlOutcome::Rerender
    );
    assert!(store.find(&id).unwrap().completed);

    let mut list = render_list(&store);
    assert_eq!(
      list.items[0].status_label(),
      "Completed"
    );
    list.items[0].activate(
      ItemControl::Delete,
      &mut store
    );
    assert!(store.tasks().is_empty());
    assert!(render_list(&store).items.is_empty());
  }

  #[test]
  fn save_with_empty_title_blocks_and_keeps_task()
   {
    let task = Task::new(
      "Keep me",
      "n",
      None
    );
    let id = task.id.clone();
    let mut store = store_with(vec![task]);
    let before = store.tasks().to_vec();
    let revision = store.revision();

    let mut list = render_list(&store);
    let item = list.item_mut(&id).unwrap();
    assert_eq!(
      item.activate(
        ItemControl::Edit,
        &mut store
      ),
      ControlOutcome::Editing
    );
    item.editor_mut().set_title("  ");

    assert_eq!(
      item.activate(
        ItemControl::Save,
        &mut store
      ),
      ControlOutcome::Blocked(
        ValidationError::EmptyTitle
      )
    );
    assert!(item.editor().is_editing());
    assert!(item.controls().save);
    assert_eq!(store.tasks(), before);
    assert_eq!(store.revision(), revision);
  }

  #[test]
  fn save_applies_edit_and_rerenders() {
    let task = Task::new(
      "Draft",
      "",
      Some("2024-05-01".to_string())
    );
    let id = task.id.clone();
    let mut store = store_with(vec![task]);

    let mut list = render_list(&store);
    let item = list.item_mut(&id).unwrap();
    item.activate(
      ItemControl::Edit,
      &mut store
    );
    let editor = item.editor_mut();
    editor.set_title(" Final ");
    editor.set_notes(" reviewed ");
    editor.set_due("");

    assert_eq!(
      item.activate(
        ItemControl::Save,
        &mut store
      ),
      ControlOutcome::Rerender
    );

    let saved = store.find(&id).unwrap();
    assert_eq!(saved.title, "Final");
    assert_eq!(saved.notes, "reviewed");
    assert_eq!(saved.due, None);

    let fresh = render_list(&store);
    assert!(!fresh.items[0].editor().is_editing());
    assert_eq!(fresh.revision, store.revision());
  }

  #[test]
  fn cancel_discards_draft_and_forces_rebuild()
   {
    let task =
      Task::new("Original", "", None);
    let id = task.id.clone();
    let mut store = store_with(vec![task]);
    let revision = store.revision();

    let mut list = render_list(&store);
    let item = list.item_mut(&id).unwrap();
    item.activate(
      ItemControl::Edit,
      &mut store
    );
    item.editor_mut().set_title("Scratch");

    assert_eq!(
      item.activate(
        ItemControl::Cancel,
        &mut store
      ),
      ControlOutcome::Rerender
    );
    assert_eq!(
      store.revision(),
      revision + 1
    );
    assert_eq!(
      store.find(&id).unwrap().title,
      "Original"
    );
    assert_eq!(
      item.activate(
        ItemControl::Cancel,
        &mut store
      ),
      ControlOutcome::Ignored
    );
  }

  #[test]
  fn rendering_respects_filter_and_search() {
    let mut store = store_with(vec![
      Task::new(
        "Team meeting",
        "",
        Some("2024-06-01".to_string())
      ),
      Task::new("Laundry", "", None),
    ]);

    store.set_filter(TaskFilter::Today);
    assert_eq!(
      render_list(&store).items.len(),
      1
    );

    store.set_filter(TaskFilter::All);
    store.set_search("LAUND");
    let list = render_list(&store);
    assert_eq!(list.items.len(), 1);
    assert_eq!(
      list.items[0].title(),
      "Laundry"
    );
    assert_eq!(list.stats.total, 2);
  }
}
