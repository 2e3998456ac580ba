//! Reusable UI components.

mod badge;
mod help_bar;
mod input;
mod modal;
mod notification;
mod pagination;
mod search_bar;
mod selection;
mod stat_card;
mod table;

pub use badge::status_span;
pub use help_bar::render_context_help;
pub use input::{InputFilter, TextInput};
pub use modal::Modal;
pub use notification::{Notification, NotificationKind, NotificationManager};
pub use pagination::DEFAULT_PAGE_SIZE;
pub use search_bar::{SearchBar, SearchEvent};
pub use selection::Selection;
pub use stat_card::{render_card_grid, StatCard};
pub use table::{CellValue, Column, DataTable, TableAction, TableRow};
