//! Searchable, selectable list screen.
//!
//! Players, field owners, sessions and earnings all share this screen
//! shape: a title row with a search bar, a [`DataTable`] with a checkbox
//! column, and an optional row action that opens a detail screen. The same
//! view also backs the history tables embedded in the detail screens.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use tracing::{debug, trace};

use crate::ui::components::{
    Column, DataTable, SearchBar, SearchEvent, Selection, TableAction, TableRow,
};
use crate::ui::theme::theme;

/// A record that can be listed, searched and selected.
pub trait ListRecord: TableRow {
    /// Stable id used for selection and navigation.
    fn id(&self) -> &str;
    /// Fields the search box matches against.
    fn search_fields(&self) -> Vec<&str>;
}

/// Builds the columns of a list, borrowing its selection for the checkbox.
pub type ColumnsFn<T> = for<'a> fn(&'a Selection) -> Vec<Column<'a, T>>;

/// Actions returned from the list view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListAction {
    /// Open the record with this id.
    Open(String),
}

/// A list screen over records of type `T`.
pub struct ListView<T> {
    title: String,
    records: Vec<T>,
    columns: ColumnsFn<T>,
    table: DataTable<T>,
    search: SearchBar,
    selection: Selection,
}

impl<T: ListRecord> ListView<T> {
    /// Create a list of `records` with `items_per_page` rows per page.
    pub fn new(
        title: impl Into<String>,
        records: Vec<T>,
        columns: ColumnsFn<T>,
        items_per_page: usize,
    ) -> Self {
        Self {
            title: title.into(),
            records,
            columns,
            table: DataTable::new(items_per_page),
            search: SearchBar::new(),
            selection: Selection::new(),
        }
    }

    /// Let Enter open the row under the cursor.
    pub fn with_action(mut self) -> Self {
        self.table = self.table.with_action();
        self
    }

    /// Whether the search bar has focus.
    pub fn is_editing(&self) -> bool {
        self.search.is_active()
    }

    /// Records matching the current search, in original order.
    pub fn filtered(&self) -> Vec<&T> {
        self.records
            .iter()
            .filter(|r| self.search.matches(&r.search_fields()))
            .collect()
    }

    /// Look a record up by id.
    pub fn find(&self, id: &str) -> Option<&T> {
        self.records.iter().find(|r| r.id() == id)
    }

    /// Handle a key press.
    pub fn handle_input(&mut self, key: KeyEvent) -> Option<ListAction> {
        if self.search.is_active() {
            if self.search.handle_input(key) == SearchEvent::Changed {
                trace!(query = self.search.query(), "Search changed");
                self.table.bind_source(self.search.token());
            }
            return None;
        }

        self.table.bind_source(self.search.token());
        match (key.code, key.modifiers) {
            (KeyCode::Char('/'), _) => {
                self.search.activate();
                None
            }
            (KeyCode::Char(' '), KeyModifiers::NONE) => {
                let id = {
                    let filtered = self.filtered();
                    self.table.selected(&filtered).map(|r| r.id().to_string())
                };
                if let Some(id) = id {
                    let selected = self.selection.toggle(&id);
                    debug!(id = %id, selected, "Row selection toggled");
                }
                None
            }
            _ => {
                let total = self.filtered().len();
                match self.table.handle_input(key, total)? {
                    TableAction::Activate(index) => {
                        let id = self.filtered().get(index).map(|r| r.id().to_string())?;
                        debug!(id = %id, list = %self.title, "Opening record");
                        Some(ListAction::Open(id))
                    }
                    TableAction::PageChanged(page) => {
                        trace!(page, "Page changed");
                        None
                    }
                    TableAction::PageSizeChanged(_) => None,
                }
            }
        }
    }

    /// Render title row, search bar and table.
    pub fn render(&mut self, frame: &mut Frame, area: Rect, focused: bool) {
        let t = theme();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(6)])
            .split(area);
        let header = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Min(20),
                Constraint::Length(22),
                Constraint::Length(32),
            ])
            .split(chunks[0]);

        let mut title = vec![Span::styled(self.title.clone(), t.title_style())];
        if !self.selection.is_empty() {
            title.push(Span::styled(
                format!("  {} selected", self.selection.len()),
                Style::default().fg(t.highlight),
            ));
        }
        frame.render_widget(
            Paragraph::new(vec![Line::default(), Line::from(title)]),
            header[0],
        );
        // Filter and sort are shown for parity with the web dashboard but have
        // no behaviour behind them.
        frame.render_widget(
            Paragraph::new(vec![
                Line::default(),
                Line::from(Span::styled("▿ Filter  ⇅ Sort by", Style::default().fg(t.dim))),
            ]),
            header[1],
        );
        self.search.render(frame, header[2]);

        self.table.bind_source(self.search.token());
        let filtered: Vec<&T> = self
            .records
            .iter()
            .filter(|r| self.search.matches(&r.search_fields()))
            .collect();
        let columns = (self.columns)(&self.selection);
        self.table.render(
            frame,
            chunks[1],
            &filtered,
            &columns,
            focused && !self.search.is_active(),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{mock, Player};
    use crate::ui::views::players;
    use ratatui::{backend::TestBackend, Terminal};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn view() -> ListView<Player> {
        players::players_view(10)
    }

    fn render_text(view: &mut ListView<Player>) -> String {
        let mut terminal = Terminal::new(TestBackend::new(140, 20)).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                view.render(f, area, true);
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

    /// Replace the query through the search bar.
    fn search(view: &mut ListView<Player>, query: &str) {
        view.handle_input(key(KeyCode::Char('/')));
        view.handle_input(KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL));
        for c in query.chars() {
            view.handle_input(key(KeyCode::Char(c)));
        }
        view.handle_input(key(KeyCode::Enter));
    }

    #[test]
    fn test_search_filters_by_id() {
        let mut view = view();
        search(&mut view, "ch 57");
        let ids: Vec<&str> = view.filtered().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids.len(), 10);
        assert!(ids.iter().all(|id| id.starts_with("#CH 57")));
    }

    #[test]
    fn test_search_no_matches() {
        let mut view = view();
        search(&mut view, "zzz");
        assert!(view.filtered().is_empty());
        assert_eq!(view.handle_input(key(KeyCode::Enter)), None);
    }

    #[test]
    fn test_search_resets_page() {
        let mut view = view();
        view.handle_input(key(KeyCode::Char('l')));
        view.handle_input(key(KeyCode::Char('l')));
        assert!(render_text(&mut view).contains("Showing 21 to 30 of 50 entries"));

        view.handle_input(key(KeyCode::Char('/')));
        assert!(view.is_editing());
        view.handle_input(key(KeyCode::Char('5')));
        assert!(render_text(&mut view).contains("Showing 1 to 10 of"));
    }

    #[test]
    fn test_enter_opens_row_under_cursor() {
        let mut view = view().with_action();
        view.handle_input(key(KeyCode::Char('l')));
        view.handle_input(key(KeyCode::Char('j')));
        assert_eq!(
            view.handle_input(key(KeyCode::Enter)),
            Some(ListAction::Open(mock::players()[11].id.clone()))
        );
    }

    #[test]
    fn test_enter_opens_filtered_row() {
        let mut view = view().with_action();
        search(&mut view, "#CH 600");
        assert_eq!(
            view.handle_input(key(KeyCode::Enter)),
            Some(ListAction::Open("#CH 600".to_string()))
        );
    }

    #[test]
    fn test_space_toggles_selection() {
        let mut view = view();
        view.handle_input(key(KeyCode::Char('j')));
        view.handle_input(key(KeyCode::Char(' ')));
        assert!(view.selection.contains("#CH 566"));
        view.handle_input(key(KeyCode::Char(' ')));
        assert!(view.selection.is_empty());
    }

    #[test]
    fn test_find_by_id() {
        let view = view();
        assert!(view.find("#CH 565").is_some());
        assert!(view.find("#CH 1").is_none());
    }
}
