use tracing::{
  debug,
  info
};

use crate::error::ValidationError;
use crate::form::TaskForm;
use crate::query::TaskFilter;
use crate::render::ItemControl;
use crate::storage::KeyValueStorage;
use crate::store::TaskStore;

/// Top-level UI events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
  Submit(TaskForm),
  FilterChanged(String),
  SearchChanged(String),
  /// A control on one list entry.
  /// Edit, save and cancel need the
  /// rendered draft and go through
  /// [`crate::render::TaskItem::activate`];
  /// here they are ignored.
  Item {
    id:      String,
    control: ItemControl
  }
}

impl<S: KeyValueStorage> TaskStore<S> {
  /// Routes one event to its mutation.
  /// A rejected form submission changes
  /// nothing and returns the notice.
  #[tracing::instrument(skip_all)]
  pub fn dispatch(
    &mut self,
    event: AppEvent
  ) -> Result<(), ValidationError> {
    match event {
      | AppEvent::Submit(form) => {
        let task =
          form.submit_at(self.clock().now())?;
        info!(id = %task.id, "task created");
        self.add_task(task);
      }
      | AppEvent::FilterChanged(raw) => {
        let filter = raw
          .parse::<TaskFilter>()
          .unwrap_or_else(|err| {
            debug!(error = %err, "unknown filter value; showing all");
            TaskFilter::All
          });
        self.set_filter(filter);
      }
      | AppEvent::SearchChanged(text) => {
        self.set_search(text);
      }
      | AppEvent::Item {
        id,
        control
      } => match control {
        | ItemControl::ToggleComplete(
          done
        ) => {
          self.toggle_complete(&id, done)
        }
        | ItemControl::Delete => {
          self.delete_task(&id)
        }
        | ItemControl::Edit
        | ItemControl::Save
        | ItemControl::Cancel => {
          debug!(%id, ?control, "edit control needs a rendered item");
        }
      },
    }
    Ok(())
  }
}
