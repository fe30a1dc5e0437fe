use taskpad_core::{
  ControlOutcome,
  ItemControl,
  TaskItem
};
use yew::{
  Callback,
  Html,
  Properties,
  function_component,
  html
};

use super::TaskListRow;

#[derive(Properties, PartialEq)]
pub struct TaskListProps {
  pub items:      Vec<TaskItem>,
  pub revision:   u64,
  pub on_control: Callback<
    (TaskItem, ItemControl),
    (TaskItem, ControlOutcome)
  >
}

#[function_component(TaskList)]
pub fn task_list(
  props: &TaskListProps
) -> Html {
  html! {
      <div class="panel list">
          <div class="header">{ "Tasks" }</div>
          {
              if props.items.is_empty() {
                  html! { <div class="empty">{ "Nothing to show." }</div> }
              } else {
                  html! {
                      <ul class="task-list">
                          {
                              // Keyed by revision so every state change remounts each row.
                              for props.items.iter().cloned().map(|item| {
                                  let key = format!("{}:{}", props.revision, item.id());
                                  html! {
                                      <TaskListRow
                                          key={key}
                                          item={item}
                                          on_control={props.on_control.clone()}
                                      />
                                  }
                              })
                          }
                      </ul>
                  }
              }
          }
      </div>
  }
}
