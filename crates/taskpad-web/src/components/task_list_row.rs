use taskpad_core::{
  ControlOutcome,
  EditDraft,
  ItemControl,
  TaskItem
};
use web_sys::{
  Event,
  HtmlInputElement,
  InputEvent
};
use yew::{
  Callback,
  Html,
  MouseEvent,
  Properties,
  TargetCast,
  function_component,
  html,
  use_state
};

#[derive(Properties, PartialEq)]
pub struct TaskListRowProps {
  pub item:       TaskItem,
  pub on_control: Callback<
    (TaskItem, ItemControl),
    (TaskItem, ControlOutcome)
  >
}

#[derive(Clone, Copy)]
enum DraftField {
  Title,
  Notes,
  Due
}

#[function_component(TaskListRow)]
pub fn task_list_row(
  props: &TaskListRowProps
) -> Html {
  let item = {
    let initial = props.item.clone();
    use_state(move || initial)
  };

  let run = {
    let item = item.clone();
    let on_control =
      props.on_control.clone();
    Callback::from(
      move |control: ItemControl| {
        let (next, outcome) = on_control
          .emit(((*item).clone(), control));
        match outcome {
          | ControlOutcome::Editing => {
            item.set(next)
          }
          | ControlOutcome::Blocked(
            error
          ) => {
            gloo::dialogs::alert(
              &error.to_string()
            );
            item.set(next);
          }
          // The store moved on; the list
          // rebuilds this row from scratch.
          | ControlOutcome::Rerender
          | ControlOutcome::Ignored => {}
        }
      }
    )
  };

  let click = |control: ItemControl| {
    let run = run.clone();
    Callback::from(move |_: MouseEvent| {
      run.emit(control)
    })
  };

  let on_toggle = {
    let run = run.clone();
    Callback::from(move |e: Event| {
      let input: HtmlInputElement =
        e.target_unchecked_into();
      run.emit(
        ItemControl::ToggleComplete(
          input.checked()
        )
      );
    })
  };

  let draft_input = |field: DraftField| {
    let item = item.clone();
    Callback::from(move |e: InputEvent| {
      let input: HtmlInputElement =
        e.target_unchecked_into();
      let mut next = (*item).clone();
      let editor = next.editor_mut();
      match field {
        | DraftField::Title => {
          editor.set_title(input.value())
        }
        | DraftField::Notes => {
          editor.set_notes(input.value())
        }
        | DraftField::Due => {
          editor.set_due(input.value())
        }
      }
      item.set(next);
    })
  };

  let controls = item.controls();
  let body = match item.editor().draft() {
    | Some(draft) => render_edit_fields(
      draft,
      draft_input(DraftField::Title),
      draft_input(DraftField::Notes),
      draft_input(DraftField::Due)
    ),
    | None => html! {
        <>
            <div class="title">{ item.title() }</div>
            <div class="notes">{ item.notes() }</div>
        </>
    }
  };

  html! {
      <li class={item.class_name()} data-id={item.id().to_string()}>
          <input
              type="checkbox"
              class="toggle-complete"
              aria-label="Mark complete"
              checked={item.completed()}
              onchange={on_toggle}
          />
          <div class="body">
              { body }
              <div>
                  <span class="badge due">{ item.due_label() }</span>
                  <span class="badge status">{ item.status_label() }</span>
              </div>
          </div>
          <div class="actions">
              <button class="btn edit" hidden={!controls.edit} onclick={click(ItemControl::Edit)}>{ "Edit" }</button>
              <button class="btn ok save" hidden={!controls.save} onclick={click(ItemControl::Save)}>{ "Save" }</button>
              <button class="btn cancel" hidden={!controls.cancel} onclick={click(ItemControl::Cancel)}>{ "Cancel" }</button>
              <button class="btn danger delete" onclick={click(ItemControl::Delete)}>{ "Delete" }</button>
          </div>
      </li>
  }
}

fn render_edit_fields(
  draft: &EditDraft,
  on_title: Callback<InputEvent>,
  on_notes: Callback<InputEvent>,
  on_due: Callback<InputEvent>
) -> Html {
  html! {
      <>
          <input
              type="text"
              class="edit-title"
              aria-label="Title"
              value={draft.title.clone()}
              oninput={on_title}
          />
          <input
              type="text"
              class="edit-notes"
              aria-label="Notes"
              value={draft.notes.clone()}
              oninput={on_notes}
          />
          <div class="edit-due-row">
              <label>{ "Due" }</label>
              <input
                  type="date"
                  class="edit-due"
                  value={draft.due.clone()}
                  oninput={on_due}
              />
          </div>
      </>
  }
}
