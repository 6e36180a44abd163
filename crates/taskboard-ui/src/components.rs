mod dark_mode_toggle;
mod dialog_host;
mod filter_bar;
mod navbar;
mod progress_bar;
mod task_card;
mod task_form;
mod task_grid;
mod toast_stack;

pub use dark_mode_toggle::DarkModeToggle;
pub use dialog_host::DialogHost;
pub use filter_bar::FilterBar;
pub use navbar::Navbar;
pub use progress_bar::ProgressBar;
pub use task_card::TaskCard;
pub use task_form::TaskForm;
pub use task_grid::TaskGrid;
pub use toast_stack::ToastStack;
