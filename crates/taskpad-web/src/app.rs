use taskpad_core::{
  AppConfig,
  AppEvent,
  ControlOutcome,
  ItemControl,
  TaskItem,
  TaskStore,
  ValidationError,
  open_store,
  render_list
};
use yew::{
  Callback,
  Html,
  Properties,
  function_component,
  html,
  use_mut_ref,
  use_state
};

use crate::components::{
  StatsBar,
  TaskFormPanel,
  TaskList,
  Toolbar
};
use crate::storage::BrowserStorage;

#[derive(Properties, PartialEq)]
pub struct AppProps {
  pub config: AppConfig
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
  let store = {
    let config = props.config.clone();
    use_mut_ref(move || -> TaskStore<BrowserStorage> {
      open_store(
        BrowserStorage::open(),
        &config
      )
    })
  };
  let revision = {
    let store = store.clone();
    use_state(move || {
      store.borrow().revision()
    })
  };

  let on_event = {
    let store = store.clone();
    let revision = revision.clone();
    Callback::from(
      move |event: AppEvent| -> Result<(), ValidationError> {
        let result =
          store.borrow_mut().dispatch(event);
        revision.set(
          store.borrow().revision()
        );
        result
      }
    )
  };

  let on_control = {
    let store = store.clone();
    let revision = revision.clone();
    Callback::from(
      move |(mut item, control): (TaskItem, ItemControl)| -> (TaskItem, ControlOutcome) {
        let outcome = {
          let mut store = store.borrow_mut();
          item.activate(control, &mut *store)
        };
        if outcome
          == ControlOutcome::Rerender
        {
          revision.set(
            store.borrow().revision()
          );
        }
        (item, outcome)
      }
    )
  };

  let (list, filter, search) = {
    let store = store.borrow();
    (
      render_list(&*store),
      store.filter(),
      store.search().to_string()
    )
  };

  html! {
      <div class="shell">
          <TaskFormPanel on_event={on_event.clone()} />
          <Toolbar
              filter={filter}
              search={search}
              on_event={on_event}
          />
          <StatsBar stats={list.stats} />
          <TaskList
              items={list.items}
              revision={list.revision}
              on_control={on_control}
          />
      </div>
  }
}
