use tracing::{
  error,
  info,
  trace
};

use crate::clock::{
  Clock,
  SystemClock
};
use crate::persist::TaskRepository;
use crate::query::{
  TaskFilter,
  TaskStats,
  visible_tasks
};
use crate::storage::KeyValueStorage;
use crate::task::{
  Task,
  TaskPatch
};

/// Owned application state: the task
/// collection plus the active filter and
/// search text.
///
/// Every change bumps [`revision`]; a
/// front-end re-renders its whole list
/// whenever the revision moves. Task
/// mutations also write the full
/// collection through to storage before
/// returning.
///
/// [`revision`]: TaskStore::revision
#[derive(Debug)]
pub struct TaskStore<S> {
  repository: TaskRepository<S>,
  clock:      Box<dyn Clock>,
  tasks:      Vec<Task>,
  filter:     TaskFilter,
  search:     String,
  revision:   u64
}

impl<S: KeyValueStorage> TaskStore<S> {
  pub fn init(
    repository: TaskRepository<S>
  ) -> Self {
    Self::init_with_clock(
      repository,
      SystemClock
    )
  }

  #[tracing::instrument(skip_all, fields(key = %repository.key()))]
  pub fn init_with_clock(
    repository: TaskRepository<S>,
    clock: impl Clock + 'static
  ) -> Self {
    let tasks = repository.load();
    info!(
      count = tasks.len(),
      "task store initialized"
    );
    Self {
      repository,
      clock: Box::new(clock),
      tasks,
      filter: TaskFilter::default(),
      search: String::new(),
      revision: 0
    }
  }

  pub fn tasks(&self) -> &[Task] {
    &self.tasks
  }

  pub fn find(
    &self,
    id: &str
  ) -> Option<&Task> {
    self
      .tasks
      .iter()
      .find(|task| task.id == id)
  }

  pub fn filter(&self) -> TaskFilter {
    self.filter
  }

  pub fn search(&self) -> &str {
    &self.search
  }

  pub fn revision(&self) -> u64 {
    self.revision
  }

  pub fn repository(
    &self
  ) -> &TaskRepository<S> {
    &self.repository
  }

  pub fn clock(&self) -> &dyn Clock {
    self.clock.as_ref()
  }

  pub fn today(&self) -> String {
    self.clock.today()
  }

  pub fn visible_tasks(
    &self
  ) -> Vec<&Task> {
    visible_tasks(
      &self.tasks,
      self.filter,
      &self.search,
      &self.clock.today()
    )
  }

  pub fn stats(&self) -> TaskStats {
    TaskStats::of(&self.tasks)
  }

  #[tracing::instrument(skip(self, task), fields(id = %task.id))]
  pub fn add_task(&mut self, task: Task) {
    self.tasks.insert(0, task);
    self.commit();
  }

  #[tracing::instrument(skip(self))]
  pub fn toggle_complete(
    &mut self,
    id: &str,
    done: bool
  ) {
    self.replace_with(id, |task| {
      Task {
        completed: done,
        ..task.clone()
      }
    });
  }

  #[tracing::instrument(skip(self))]
  pub fn delete_task(&mut self, id: &str) {
    let before = self.tasks.len();
    self.tasks.retain(|task| task.id != id);
    if self.tasks.len() == before {
      trace!("delete matched no task");
      return;
    }
    self.commit();
  }

  #[tracing::instrument(skip(self, patch))]
  pub fn update_task(
    &mut self,
    id: &str,
    patch: TaskPatch
  ) {
    self.replace_with(id, |task| {
      task.apply(&patch)
    });
  }

  pub fn set_filter(
    &mut self,
    filter: TaskFilter
  ) {
    trace!(%filter, "filter changed");
    self.filter = filter;
    self.request_render();
  }

  pub fn set_search(
    &mut self,
    search: impl Into<String>
  ) {
    self.search = search.into();
    trace!(search = %self.search, "search changed");
    self.request_render();
  }

  /// Forces a full re-render without
  /// changing any task.
  pub fn request_render(&mut self) {
    self.revision += 1;
  }

  fn replace_with(
    &mut self,
    id: &str,
    update: impl FnOnce(&Task) -> Task
  ) {
    let Some(slot) = self
      .tasks
      .iter_mut()
      .find(|task| task.id == id)
    else {
      trace!(
        "mutation matched no task"
      );
      return;
    };
    let next = update(slot);
    *slot = next;
    self.commit();
  }

  fn commit(&mut self) {
    if let Err(err) =
      self.repository.save(&self.tasks)
    {
      error!(error = %err, "failed to persist tasks; keeping in-memory state");
    }
    self.request_render();
  }
}
