use taskpad_core::{
  AppEvent,
  TaskForm,
  ValidationError
};
use web_sys::{
  HtmlInputElement,
  InputEvent,
  SubmitEvent
};
use yew::{
  Callback,
  Html,
  Properties,
  TargetCast,
  function_component,
  html,
  use_node_ref,
  use_state
};

#[derive(Properties, PartialEq)]
pub struct TaskFormPanelProps {
  pub on_event:
    Callback<AppEvent, Result<(), ValidationError>>
}

#[function_component(TaskFormPanel)]
pub fn task_form_panel(
  props: &TaskFormPanelProps
) -> Html {
  let form = use_state(TaskForm::default);
  let title_ref = use_node_ref();

  let focus_title = {
    let title_ref = title_ref.clone();
    move || {
      if let Some(input) =
        title_ref.cast::<HtmlInputElement>()
      {
        let _ = input.focus();
      }
    }
  };

  let on_submit = {
    let form = form.clone();
    let on_event = props.on_event.clone();
    Callback::from(move |e: SubmitEvent| {
      e.prevent_default();
      match on_event.emit(
        AppEvent::Submit((*form).clone())
      ) {
        | Ok(()) => {
          let mut next = (*form).clone();
          next.reset();
          form.set(next);
        }
        | Err(error) => {
          tracing::debug!(%error, "submit rejected");
          gloo::dialogs::alert(
            &error.to_string()
          );
        }
      }
      focus_title();
    })
  };

  let field_input = |set: fn(&mut TaskForm, String)| {
    let form = form.clone();
    Callback::from(move |e: InputEvent| {
      let input: HtmlInputElement =
        e.target_unchecked_into();
      let mut next = (*form).clone();
      set(&mut next, input.value());
      form.set(next);
    })
  };

  html! {
      <form class="panel task-form" onsubmit={on_submit}>
          <input
              ref={title_ref}
              type="text"
              placeholder="Task title"
              aria-label="Title"
              value={form.title.clone()}
              oninput={field_input(|form, value| form.title = value)}
          />
          <input
              type="text"
              placeholder="Notes (optional)"
              aria-label="Notes"
              value={form.notes.clone()}
              oninput={field_input(|form, value| form.notes = value)}
          />
          <input
              type="date"
              aria-label="Due date"
              value={form.due.clone()}
              oninput={field_input(|form, value| form.due = value)}
          />
          <button class="btn primary" type="submit">{ "Add task" }</button>
      </form>
  }
}
