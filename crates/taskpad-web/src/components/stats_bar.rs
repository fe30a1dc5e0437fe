use taskpad_core::TaskStats;
use yew::{
  Html,
  Properties,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct StatsBarProps {
  pub stats: TaskStats
}

#[function_component(StatsBar)]
pub fn stats_bar(
  props: &StatsBarProps
) -> Html {
  let stats = props.stats;

  html! {
      <div class="panel stats" aria-live="polite">
          <span class="badge">{ format!("Total: {}", stats.total) }</span>
          <span class="badge">{ format!("Active: {}", stats.active) }</span>
          <span class="badge">{ format!("Completed: {}", stats.completed) }</span>
      </div>
  }
}
