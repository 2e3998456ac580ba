//! Field owner detail screen.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};

use super::list::ListView;
use super::player_detail::{render_back_title, render_profile_header, HISTORY_PAGE_SIZE};
use super::DetailAction;
use crate::data::{mock, BookingRecord, FieldOwner};
use crate::ui::components::{render_card_grid, Column, Selection, StatCard};

fn session_columns(selection: &Selection) -> Vec<Column<'_, BookingRecord>> {
    vec![
        Column::compute("Session ID", move |b: &BookingRecord| selection.checkbox_line(&b.id))
            .width(Constraint::Length(14)),
        Column::field("Session Name", "venue_name"),
        Column::field("Venue ID", "venue_id").width(Constraint::Length(10)),
        Column::field("Date", "date").width(Constraint::Length(12)),
        Column::field("Players", "items").width(Constraint::Length(8)),
        Column::field("Amount", "amount").width(Constraint::Length(10)),
    ]
}

/// Detail view for one field owner: contact cards and hosted sessions.
pub struct FieldOwnerDetailView {
    owner: FieldOwner,
    cards: Vec<StatCard>,
    history: ListView<BookingRecord>,
}

impl FieldOwnerDetailView {
    pub fn new(owner: FieldOwner) -> Self {
        let cards = mock::owner_cards(&owner);
        Self {
            owner,
            cards,
            history: ListView::new(
                "Session History",
                mock::owner_sessions(),
                session_columns,
                HISTORY_PAGE_SIZE,
            ),
        }
    }

    pub fn is_editing(&self) -> bool {
        self.history.is_editing()
    }

    pub fn handle_input(&mut self, key: KeyEvent) -> Option<DetailAction> {
        if !self.history.is_editing() && key.code == KeyCode::Esc {
            return Some(DetailAction::Back);
        }
        self.history.handle_input(key);
        None
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(4),
                Constraint::Length(10),
                Constraint::Min(10),
            ])
            .split(area);

        render_back_title(frame, chunks[0], "Field Owner Details");
        render_profile_header(
            frame,
            chunks[1],
            &self.owner.owner_name,
            &format!("Owner ID: {}", self.owner.id),
            &self.owner.status,
        );
        render_card_grid(frame, chunks[2], &self.cards, 3, 5);
        self.history.render(frame, chunks[3], true);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use ratatui::{backend::TestBackend, Terminal};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn render_text(view: &mut FieldOwnerDetailView) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                view.render(f, area);
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_cards_follow_owner() {
        let owner = mock::field_owners()[3].clone();
        let view = FieldOwnerDetailView::new(owner.clone());
        assert_eq!(view.cards.len(), 6);
        assert_eq!(view.cards[0].value, owner.field_name);
        assert_eq!(view.cards[5].value, owner.total_sessions.to_string());
    }

    #[test]
    fn test_history_paging() {
        let mut view = FieldOwnerDetailView::new(mock::field_owners()[0].clone());
        view.handle_input(key(KeyCode::Char('G')));
        assert!(render_text(&mut view).contains("Showing 16 to 20 of 20 entries"));
        assert_eq!(view.handle_input(key(KeyCode::Esc)), Some(DetailAction::Back));
    }

    #[test]
    fn test_render_shows_owner() {
        let mut view = FieldOwnerDetailView::new(mock::field_owners()[0].clone());
        let text = render_text(&mut view);
        assert!(text.contains("Malik Ahmed"));
        assert!(text.contains("Session History"));
    }
}
