//! Earnings list screen.
//!
//! Transactions have no detail screen, so the table carries no row action.

use ratatui::layout::Constraint;

use super::list::{ListRecord, ListView};
use crate::data::{mock, Earning};
use crate::ui::components::{Column, Selection};

impl ListRecord for Earning {
    fn id(&self) -> &str {
        &self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.user_name.as_str(), self.id.as_str()]
    }
}

fn columns(selection: &Selection) -> Vec<Column<'_, Earning>> {
    vec![
        Column::compute("Transaction ID", move |e: &Earning| selection.checkbox_line(&e.id))
            .width(Constraint::Length(15)),
        Column::field("User Name", "user_name"),
        Column::field("User ID", "user_id").width(Constraint::Length(10)),
        Column::field("Plan", "plan").width(Constraint::Length(9)),
        Column::field("Amount", "amount").width(Constraint::Length(8)),
        Column::field("Date", "date"),
    ]
}

/// The "Earning Lists" screen.
pub fn earnings_view(items_per_page: usize) -> ListView<Earning> {
    ListView::new("Earning Lists", mock::earnings(), columns, items_per_page)
}
