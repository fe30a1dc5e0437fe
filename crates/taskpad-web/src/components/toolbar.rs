use taskpad_core::{
  AppEvent,
  TaskFilter,
  ValidationError
};
use web_sys::{
  Event,
  HtmlInputElement,
  HtmlSelectElement,
  InputEvent
};
use yew::{
  Callback,
  Html,
  Properties,
  TargetCast,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct ToolbarProps {
  pub filter:   TaskFilter,
  pub search:   String,
  pub on_event:
    Callback<AppEvent, Result<(), ValidationError>>
}

#[function_component(Toolbar)]
pub fn toolbar(
  props: &ToolbarProps
) -> Html {
  let on_filter_change = {
    let on_event = props.on_event.clone();
    Callback::from(move |e: Event| {
      let select: HtmlSelectElement =
        e.target_unchecked_into();
      let _ = on_event.emit(
        AppEvent::FilterChanged(
          select.value()
        )
      );
    })
  };

  let on_search_input = {
    let on_event = props.on_event.clone();
    Callback::from(move |e: InputEvent| {
      let input: HtmlInputElement =
        e.target_unchecked_into();
      let _ = on_event.emit(
        AppEvent::SearchChanged(
          input.value()
        )
      );
    })
  };

  html! {
      <div class="panel toolbar">
          <select aria-label="Filter" onchange={on_filter_change}>
              {
                  for TaskFilter::OPTIONS.into_iter().map(|filter| html! {
                      <option
                          value={filter.as_str()}
                          selected={filter == props.filter}
                      >
                          { filter.label() }
                      </option>
                  })
              }
          </select>
          <input
              type="search"
              placeholder="Search title or notes"
              aria-label="Search"
              value={props.search.clone()}
              oninput={on_search_input}
          />
      </div>
  }
}
