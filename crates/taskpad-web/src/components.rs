mod stats_bar;
mod task_form;
mod task_list;
mod task_list_row;
mod toolbar;

pub use stats_bar::StatsBar;
pub use task_form::TaskFormPanel;
pub use task_list::TaskList;
pub use task_list_row::TaskListRow;
pub use toolbar::Toolbar;
