//! Field owner list screen.

use ratatui::layout::Constraint;

use super::list::{ListRecord, ListView};
use crate::data::{mock, FieldOwner};
use crate::ui::components::{Column, Selection};

impl ListRecord for FieldOwner {
    fn id(&self) -> &str {
        &self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.owner_name.as_str(),
            self.field_name.as_str(),
            self.id.as_str(),
        ]
    }
}

fn columns(selection: &Selection) -> Vec<Column<'_, FieldOwner>> {
    vec![
        Column::compute("Owner ID", move |o: &FieldOwner| selection.checkbox_line(&o.id))
            .width(Constraint::Length(14)),
        Column::field("Owner Name", "owner_name"),
        Column::field("Field Name", "field_name"),
        Column::field("Email", "email"),
        Column::field("Plan", "plan").width(Constraint::Length(9)),
        Column::field("Sessions", "total_sessions").width(Constraint::Length(9)),
        Column::field("Status", "status").badge().width(Constraint::Length(11)),
    ]
}

/// The "Field Owner Lists" screen. Enter opens the owner's detail screen.
pub fn field_owners_view(items_per_page: usize) -> ListView<FieldOwner> {
    ListView::new("Field Owner Lists", mock::field_owners(), columns, items_per_page).with_action()
}
