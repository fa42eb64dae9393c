//! UI Components
//!
//! Leptos components for the to-do page.

mod counters;
mod filter_bar;
mod new_task_form;
mod task_list_view;
mod task_row;
mod toast_banner;

pub use counters::Counters;
pub use filter_bar::FilterBar;
pub use new_task_form::NewTaskForm;
pub use task_list_view::TaskListView;
pub use task_row::TaskRow;
pub use toast_banner::ToastBanner;
