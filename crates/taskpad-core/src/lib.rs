pub mod clock;
pub mod config;
pub mod edit;
pub mod error;
pub mod events;
pub mod form;
pub mod persist;
pub mod query;
pub mod render;
pub mod storage;
pub mod store;
pub mod task;

pub use clock::{
  Clock,
  FixedClock,
  SystemClock
};
pub use config::AppConfig;
pub use edit::{
  ControlVisibility,
  EditDraft,
  EditState,
  ItemEditor
};
pub use error::{
  StorageError,
  ValidationError
};
pub use events::AppEvent;
pub use form::TaskForm;
pub use persist::{
  DEFAULT_STORAGE_KEY,
  TaskRepository
};
pub use query::{
  TaskFilter,
  TaskStats
};
pub use render::{
  ControlOutcome,
  ItemControl,
  RenderedList,
  TaskItem,
  render_list
};
pub use storage::{
  KeyValueStorage,
  MemoryStorage
};
pub use store::TaskStore;
pub use task::{
  Task,
  TaskPatch
};

/// Loads the task store from `storage`
/// under the configured key and applies
/// the configured starting filter.
#[tracing::instrument(skip_all, fields(key = %config.storage.key))]
pub fn open_store<S: KeyValueStorage>(
  storage: S,
  config: &AppConfig
) -> TaskStore<S> {
  open_store_with_clock(
    storage,
    config,
    SystemClock
  )
}

pub fn open_store_with_clock<
  S: KeyValueStorage
>(
  storage: S,
  config: &AppConfig,
  clock: impl Clock + 'static
) -> TaskStore<S> {
  let repository =
    TaskRepository::with_key(
      storage,
      config.storage.key.clone()
    );
  let mut store =
    TaskStore::init_with_clock(
      repository, clock
    );
  if config.view.default_filter
    != TaskFilter::All
  {
    store.set_filter(
      config.view.default_filter
    );
  }
  store
}
