//! Search bar for list screens.
//!
//! Filtering is a case-insensitive substring match over whichever fields the
//! owning screen passes in. The bar also produces a source token for
//! [`DataTable::bind_source`](super::DataTable::bind_source), so a new query
//! sends the table back to page 1.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::input::TextInput;
use crate::ui::theme::theme;

/// Outcome of a key press while the search bar has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchEvent {
    /// The query changed.
    Changed,
    /// Focus left the search bar.
    Closed,
    /// Nothing of interest.
    Ignored,
}

/// Search state owned by one screen.
#[derive(Debug, Clone)]
pub struct SearchBar {
    input: TextInput,
    active: bool,
}

impl Default for SearchBar {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchBar {
    pub fn new() -> Self {
        Self {
            input: TextInput::new().with_placeholder("Search..."),
            active: false,
        }
    }

    /// Give the bar keyboard focus.
    pub fn activate(&mut self) {
        self.active = true;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn query(&self) -> &str {
        self.input.value()
    }

    /// Whether any of `fields` contains the query, ignoring case.
    ///
    /// An empty query matches everything.
    pub fn matches(&self, fields: &[&str]) -> bool {
        let query = self.query().trim().to_lowercase();
        query.is_empty() || fields.iter().any(|f| f.to_lowercase().contains(&query))
    }

    /// Identity of the filtered collection this query produces.
    pub fn token(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.query().trim().to_lowercase().hash(&mut hasher);
        hasher.finish()
    }

    /// Handle a key press while active.
    pub fn handle_input(&mut self, key: KeyEvent) -> SearchEvent {
        match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Tab => {
                self.active = false;
                SearchEvent::Closed
            }
            _ if self.input.handle_input(key) => SearchEvent::Changed,
            _ => SearchEvent::Ignored,
        }
    }

    /// Render the bar.
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        if self.active {
            self.input.render(frame, area, "/ Search", true);
            return;
        }

        let t = theme();
        let text = if self.query().is_empty() {
            Line::from(Span::styled("Search...", Style::default().fg(t.input_placeholder)))
        } else {
            Line::from(Span::styled(self.query().to_string(), Style::default().fg(t.input_fg)))
        };
        let block = Block::default()
            .title(" / Search ")
            .borders(Borders::ALL)
            .border_style(t.border_style(false));
        frame.render_widget(Paragraph::new(text).block(block), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_empty_query_matches_all() {
        let bar = SearchBar::new();
        assert!(bar.matches(&["anything"]));
        assert!(bar.matches(&[]));
    }

    #[test]
    fn test_case_insensitive_match() {
        let mut bar = SearchBar::new();
        bar.input.set_value("SEAFOOD");
        assert!(bar.matches(&["#CH 565", "Red Seafood Resort"]));
        assert!(!bar.matches(&["#CH 565", "Toggie Fun Club"]));
    }

    #[test]
    fn test_token_tracks_query() {
        let mut bar = SearchBar::new();
        let empty = bar.token();
        bar.input.set_value("ch 57");
        assert_ne!(bar.token(), empty);
        bar.input.set_value("CH 57");
        let upper = bar.token();
        bar.input.set_value("ch 57");
        assert_eq!(bar.token(), upper);
    }

    #[test]
    fn test_typing_reports_change() {
        let mut bar = SearchBar::new();
        bar.activate();
        assert_eq!(bar.handle_input(key(KeyCode::Char('a'))), SearchEvent::Changed);
        assert_eq!(bar.handle_input(key(KeyCode::Left)), SearchEvent::Ignored);
        assert_eq!(bar.handle_input(key(KeyCode::Esc)), SearchEvent::Closed);
        assert!(!bar.is_active());
        assert_eq!(bar.query(), "a");
    }
}
