//! UI Components
//!
//! Leptos components making up the board page.

mod add_task_form;
mod board_column;
mod display_menu;
mod task_card;

pub use add_task_form::AddTaskForm;
pub use board_column::BoardColumn;
pub use display_menu::DisplayMenu;
pub use task_card::TaskCard;
