//! Session list screen.

use ratatui::layout::Constraint;

use super::list::{ListRecord, ListView};
use crate::data::{mock, Session};
use crate::ui::components::{Column, Selection};

impl ListRecord for Session {
    fn id(&self) -> &str {
        &self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.session_name.as_str(), self.id.as_str()]
    }
}

fn columns(selection: &Selection) -> Vec<Column<'_, Session>> {
    vec![
        Column::compute("Session ID", move |s: &Session| selection.checkbox_line(&s.id))
            .width(Constraint::Length(14)),
        Column::field("Session Name", "session_name"),
        Column::field("Field ID", "field_id").width(Constraint::Length(10)),
        Column::field("Player", "player").width(Constraint::Length(8)),
        Column::field("Amount", "amount").width(Constraint::Length(8)),
        Column::field("Status", "status").badge().width(Constraint::Length(11)),
    ]
}

/// The "Session Lists" screen. Enter opens the session detail screen.
pub fn sessions_view(items_per_page: usize) -> ListView<Session> {
    ListView::new("Session Lists", mock::sessions(), columns, items_per_page).with_action()
}
