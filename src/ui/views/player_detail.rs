//! Player detail screen.
//!
//! Profile header, a grid of stat cards and the player's booking history.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::list::{ListRecord, ListView};
use super::DetailAction;
use crate::data::{mock, BookingRecord, Player};
use crate::ui::components::{render_card_grid, status_span, Column, Selection, StatCard};
use crate::ui::theme::theme;

/// Rows per page of the history tables on detail screens.
pub const HISTORY_PAGE_SIZE: usize = 5;

impl ListRecord for BookingRecord {
    fn id(&self) -> &str {
        &self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.venue_name.as_str(), self.id.as_str()]
    }
}

fn booking_columns(selection: &Selection) -> Vec<Column<'_, BookingRecord>> {
    vec![
        Column::compute("Booking ID", move |b: &BookingRecord| selection.checkbox_line(&b.id))
            .width(Constraint::Length(15)),
        Column::field("Venue Name", "venue_name"),
        Column::field("Venue ID", "venue_id").width(Constraint::Length(10)),
        Column::field("Date", "date").width(Constraint::Length(12)),
        Column::field("Items", "items").width(Constraint::Length(6)),
        Column::field("Amount", "amount").width(Constraint::Length(10)),
    ]
}

/// Detail view for one player.
pub struct PlayerDetailView {
    player: Player,
    cards: Vec<StatCard>,
    history: ListView<BookingRecord>,
}

impl PlayerDetailView {
    pub fn new(player: Player) -> Self {
        Self {
            player,
            cards: mock::player_cards(),
            history: ListView::new(
                "Booking History",
                mock::player_bookings(),
                booking_columns,
                HISTORY_PAGE_SIZE,
            ),
        }
    }

    /// Whether a text field has focus.
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

        render_back_title(frame, chunks[0], "User Details");
        render_profile_header(
            frame,
            chunks[1],
            &self.player.user_name,
            &format!("User ID: {}", self.player.id),
            &self.player.status,
        );
        render_card_grid(frame, chunks[2], &self.cards, 4, 5);
        self.history.render(frame, chunks[3], true);
    }
}

/// "← Title" line shared by detail screens.
pub(super) fn render_back_title(frame: &mut Frame, area: Rect, title: &str) {
    let t = theme();
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled("← ", Style::default().fg(t.muted)),
            Span::styled(title.to_string(), t.title_style()),
        ])),
        area,
    );
}

/// Avatar initials, name, sub-line and status badge in a bordered header.
pub(super) fn render_profile_header(
    frame: &mut Frame,
    area: Rect,
    name: &str,
    subtitle: &str,
    status: &str,
) {
    let t = theme();
    let initials: String = name
        .split_whitespace()
        .filter_map(|w| w.chars().next())
        .take(2)
        .collect();
    let lines = vec![
        Line::from(vec![
            Span::styled(
                format!(" {} ", initials),
                Style::default()
                    .fg(t.selection_fg)
                    .bg(t.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(name.to_string(), t.title_style()),
            Span::raw("  "),
            status_span(status),
        ]),
        Line::from(Span::styled(
            format!("      {}", subtitle),
            Style::default().fg(t.muted),
        )),
    ];
    frame.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(t.border_style(false)),
        ),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use ratatui::{backend::TestBackend, Terminal};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn view() -> PlayerDetailView {
        PlayerDetailView::new(mock::players()[0].clone())
    }

    fn render_text(view: &mut PlayerDetailView) -> String {
        let mut terminal = Terminal::new(TestBackend::new(140, 50)).unwrap();
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
    fn test_history_uses_small_pages() {
        let mut view = view();
        view.handle_input(key(KeyCode::Char('G')));
        assert!(render_text(&mut view).contains("Showing 16 to 20 of 20 entries"));
    }

    #[test]
    fn test_esc_goes_back() {
        let mut view = view();
        assert_eq!(view.handle_input(key(KeyCode::Esc)), Some(DetailAction::Back));
    }

    #[test]
    fn test_esc_in_search_stays() {
        let mut view = view();
        view.handle_input(key(KeyCode::Char('/')));
        assert!(view.is_editing());
        assert_eq!(view.handle_input(key(KeyCode::Esc)), None);
        assert!(!view.is_editing());
    }

    #[test]
    fn test_history_search() {
        let mut view = view();
        view.handle_input(key(KeyCode::Char('/')));
        for c in "pch 570".chars() {
            view.handle_input(key(KeyCode::Char(c)));
        }
        assert_eq!(view.history.filtered().len(), 1);
    }
}
