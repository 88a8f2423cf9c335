//! UI Components
//!
//! Leptos components for the data-binding variant.

mod new_task_input;
mod toggle_all;
mod task_list;
mod task_row;
mod filter_bar;
mod todo_footer;

pub use new_task_input::NewTaskInput;
pub use toggle_all::ToggleAll;
pub use task_list::TaskList;
pub use task_row::{row_class, row_hidden, TaskRow};
pub use filter_bar::{filter_class, FilterBar};
pub use todo_footer::{remaining_label, TodoFooter};
