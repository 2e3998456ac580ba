//! Player list screen.

use ratatui::layout::Constraint;

use super::list::{ListRecord, ListView};
use crate::data::{mock, Player};
use crate::ui::components::{Column, Selection};

impl ListRecord for Player {
    fn id(&self) -> &str {
        &self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.user_name.as_str(), self.id.as_str()]
    }
}

fn columns(selection: &Selection) -> Vec<Column<'_, Player>> {
    vec![
        Column::compute("User ID", move |p: &Player| selection.checkbox_line(&p.id))
            .width(Constraint::Length(14)),
        Column::field("User Name", "user_name"),
        Column::field("Email", "email"),
        Column::field("Country", "country"),
        Column::field("Session Point", "session_point").width(Constraint::Length(13)),
        Column::field("Matches Played", "matches_played").width(Constraint::Length(14)),
        Column::field("Status", "status").badge().width(Constraint::Length(11)),
    ]
}

/// The "Player Lists" screen. Enter opens the player's detail screen.
pub fn players_view(items_per_page: usize) -> ListView<Player> {
    ListView::new("Player Lists", mock::players(), columns, items_per_page).with_action()
}
