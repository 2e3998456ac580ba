//! Generic paginated data table.
//!
//! [`DataTable`] renders any row type that implements [`TableRow`] as a
//! paged grid. Columns are described per render with [`Column`], either by
//! field name (resolved through [`TableRow::field`]) or by a closure that
//! builds the cell line itself. The closure form borrows whatever it needs
//! from the owning view, such as a selection set for a checkbox column.
//!
//! The table owns only its pagination state and a cursor on the current
//! page. Rows are borrowed for each frame and never mutated; they may be
//! passed owned (`&[T]`) or as a filtered view (`&[&T]`).

use std::borrow::Borrow;
use std::fmt;
use std::marker::PhantomData;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};
use tracing::{debug, trace, warn};

use super::badge::status_span;
use super::pagination::{PageItem, Pagination, DEFAULT_PAGE_SIZE};
use crate::ui::theme::theme;

/// Header label of the trailing action column.
const ACTION_HEADER: &str = "Action";

/// Text of the per-row action affordance.
const ACTION_LABEL: &str = "◉ view";

/// A value resolved from a row by field name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellValue {
    Text(String),
    Number(i64),
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Text(s) => f.write_str(s),
            CellValue::Number(n) => write!(f, "{}", n),
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<&String> for CellValue {
    fn from(value: &String) -> Self {
        CellValue::Text(value.clone())
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        CellValue::Number(value)
    }
}

impl From<u32> for CellValue {
    fn from(value: u32) -> Self {
        CellValue::Number(i64::from(value))
    }
}

/// A record that can be shown in a [`DataTable`].
pub trait TableRow {
    /// Look up a field by name. Unknown names return `None` and render empty.
    fn field(&self, key: &str) -> Option<CellValue>;
}

/// Where a column takes its value from.
pub enum CellSource<'a, T> {
    /// Resolve through [`TableRow::field`].
    Field(&'static str),
    /// Build the cell line from the row directly.
    Compute(Box<dyn Fn(&T) -> Line<'static> + 'a>),
}

/// How a field value is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellKind {
    /// Raw value as text.
    #[default]
    Plain,
    /// Textual values go through the status badge mapping.
    Badge,
}

/// One column of a [`DataTable`].
pub struct Column<'a, T> {
    label: String,
    source: CellSource<'a, T>,
    kind: CellKind,
    width: Constraint,
}

impl<'a, T> Column<'a, T> {
    /// A plain column reading `key` from each row.
    pub fn field(label: impl Into<String>, key: &'static str) -> Self {
        Self {
            label: label.into(),
            source: CellSource::Field(key),
            kind: CellKind::Plain,
            width: Constraint::Fill(1),
        }
    }

    /// A column whose cells are computed by `render`.
    pub fn compute(label: impl Into<String>, render: impl Fn(&T) -> Line<'static> + 'a) -> Self {
        Self {
            label: label.into(),
            source: CellSource::Compute(Box::new(render)),
            kind: CellKind::Plain,
            width: Constraint::Fill(1),
        }
    }

    /// Render textual values of this column as status badges.
    pub fn badge(mut self) -> Self {
        self.kind = CellKind::Badge;
        self
    }

    /// Override the column width.
    pub fn width(mut self, width: Constraint) -> Self {
        self.width = width;
        self
    }
}

/// Build the line shown for `row` in `column`.
fn cell_line<T: TableRow>(row: &T, column: &Column<'_, T>) -> Line<'static> {
    match &column.source {
        CellSource::Compute(render) => render(row),
        CellSource::Field(key) => match (row.field(key), column.kind) {
            (Some(CellValue::Text(text)), CellKind::Badge) => Line::from(status_span(&text)),
            (Some(value), _) => Line::from(value.to_string()),
            (None, _) => {
                trace!(field = key, "Missing field rendered empty");
                Line::default()
            }
        },
    }
}

/// Actions returned from table input handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableAction {
    /// The row action was triggered on the row at this absolute index.
    Activate(usize),
    /// The page changed to this page.
    PageChanged(usize),
    /// The page size changed.
    PageSizeChanged(usize),
}

/// A paginated table over rows of type `T`.
pub struct DataTable<T> {
    /// Page state.
    pagination: Pagination,
    /// Cursor row within the current page.
    cursor: usize,
    /// Whether rows carry the trailing action affordance.
    action: bool,
    _rows: PhantomData<fn(&T)>,
}

impl<T> Default for DataTable<T> {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl<T> DataTable<T> {
    /// Create a table showing `items_per_page` rows per page.
    pub fn new(items_per_page: usize) -> Self {
        Self {
            pagination: Pagination::new(items_per_page),
            cursor: 0,
            action: false,
            _rows: PhantomData,
        }
    }

    /// Enable the per-row action affordance.
    pub fn with_action(mut self) -> Self {
        self.action = true;
        self
    }

    /// Bind to the collection identified by `token`, resetting to page 1 when
    /// it changed since the last bind.
    pub fn bind_source(&mut self, token: u64) {
        if self.pagination.bind_source(token) {
            debug!(token, "Table source changed, resetting to first page");
            self.cursor = 0;
        }
    }

    /// Absolute index of the row under the cursor, if the page has rows.
    pub fn selected_index(&self, total_rows: usize) -> Option<usize> {
        let range = self.pagination.range(total_rows);
        if range.is_empty() {
            return None;
        }
        Some(range.start + self.cursor.min(range.len() - 1))
    }

    /// The row under the cursor.
    pub fn selected<'r, R>(&self, rows: &'r [R]) -> Option<&'r R> {
        self.selected_index(rows.len()).and_then(|i| rows.get(i))
    }

    /// Bring page and cursor back into range for `total_rows`.
    fn clamp(&mut self, total_rows: usize) {
        self.pagination.clamp(total_rows);
        let len = self.pagination.range(total_rows).len();
        self.cursor = self.cursor.min(len.saturating_sub(1));
    }

    /// Handle keyboard input against a collection of `total_rows` rows.
    ///
    /// Returns an action for the parent when something it cares about
    /// happened.
    pub fn handle_input(&mut self, key: KeyEvent, total_rows: usize) -> Option<TableAction> {
        self.clamp(total_rows);
        let page_len = self.pagination.range(total_rows).len();

        match (key.code, key.modifiers) {
            (KeyCode::Char('j'), KeyModifiers::NONE) | (KeyCode::Down, _) => {
                if self.cursor + 1 < page_len {
                    self.cursor += 1;
                }
                None
            }
            (KeyCode::Char('k'), KeyModifiers::NONE) | (KeyCode::Up, _) => {
                self.cursor = self.cursor.saturating_sub(1);
                None
            }
            (KeyCode::Char('l'), KeyModifiers::NONE) | (KeyCode::Right, _) | (KeyCode::PageDown, _) => {
                self.page_changed(|p| p.next_page(total_rows))
            }
            (KeyCode::Char('h'), KeyModifiers::NONE) | (KeyCode::Left, _) | (KeyCode::PageUp, _) => {
                self.page_changed(|p| p.prev_page(total_rows))
            }
            (KeyCode::Home, _) | (KeyCode::Char('g'), KeyModifiers::NONE) => {
                self.page_changed(|p| p.first_page(total_rows))
            }
            (KeyCode::End, _) | (KeyCode::Char('G'), _) => {
                self.page_changed(|p| p.last_page(total_rows))
            }
            (KeyCode::Char('s'), KeyModifiers::NONE) => {
                let size = self.pagination.cycle_page_size();
                self.cursor = 0;
                debug!(size, "Page size changed");
                Some(TableAction::PageSizeChanged(size))
            }
            (KeyCode::Enter, _) if self.action => {
                self.selected_index(total_rows).map(TableAction::Activate)
            }
            _ => None,
        }
    }

    fn page_changed(&mut self, change: impl FnOnce(&mut Pagination) -> bool) -> Option<TableAction> {
        if change(&mut self.pagination) {
            self.cursor = 0;
            Some(TableAction::PageChanged(self.pagination.page()))
        } else {
            None
        }
    }

    /// The pager line: previous, windowed page numbers, next, page size.
    pub fn pager_line(&self, total_rows: usize) -> Line<'static> {
        let t = theme();
        let enabled = Style::default().fg(t.fg);
        let disabled = Style::default().fg(t.dim);

        let mut spans = vec![Span::styled(
            "‹ Prev ",
            if self.pagination.has_prev() { enabled } else { disabled },
        )];
        for item in self.pagination.window(total_rows) {
            match item {
                PageItem::Page(n) if n == self.pagination.page() => {
                    spans.push(Span::styled(
                        format!(" {} ", n),
                        Style::default()
                            .fg(t.selection_fg)
                            .bg(t.accent)
                            .add_modifier(Modifier::BOLD),
                    ));
                }
                PageItem::Page(n) => {
                    spans.push(Span::styled(format!(" {} ", n), Style::default().fg(t.muted)));
                }
                PageItem::Ellipsis => {
                    spans.push(Span::styled(" … ", Style::default().fg(t.muted)));
                }
            }
        }
        spans.push(Span::styled(
            " Next ›",
            if self.pagination.has_next(total_rows) { enabled } else { disabled },
        ));
        spans.push(Span::styled(
            format!("   Show {}", self.pagination.items_per_page()),
            Style::default().fg(t.muted),
        ));
        Line::from(spans)
    }
}

impl<T: TableRow> DataTable<T> {
    /// Render the current page of `rows` with `columns`.
    pub fn render<R: Borrow<T>>(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        rows: &[R],
        columns: &[Column<'_, T>],
        focused: bool,
    ) {
        if columns.is_empty() {
            warn!("Table rendered without columns");
            return;
        }

        self.clamp(rows.len());
        let t = theme();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(3), Constraint::Length(1)])
            .split(area);

        let mut header_cells: Vec<Cell> = columns
            .iter()
            .map(|c| Cell::from(c.label.clone()))
            .collect();
        let mut widths: Vec<Constraint> = columns.iter().map(|c| c.width).collect();
        if self.action {
            header_cells.push(Cell::from(ACTION_HEADER));
            widths.push(Constraint::Length(8));
        }
        let header = Row::new(header_cells)
            .style(Style::default().fg(t.muted).add_modifier(Modifier::BOLD))
            .bottom_margin(1);

        let body: Vec<Row> = self
            .pagination
            .page_slice(rows)
            .iter()
            .map(|row| {
                let mut cells: Vec<Cell> = columns
                    .iter()
                    .map(|column| Cell::from(cell_line(row.borrow(), column)))
                    .collect();
                if self.action {
                    cells.push(Cell::from(Span::styled(
                        ACTION_LABEL,
                        Style::default().fg(t.highlight),
                    )));
                }
                Row::new(cells)
            })
            .collect();

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(t.border_style(focused));

        let table = Table::new(body, widths)
            .header(header)
            .block(block)
            .column_spacing(2)
            .highlight_style(
                Style::default()
                    .bg(t.selection_bg)
                    .fg(t.selection_fg)
                    .add_modifier(Modifier::BOLD),
            );

        let mut state = TableState::default();
        if focused && self.selected_index(rows.len()).is_some() {
            state.select(Some(self.cursor));
        }
        frame.render_stateful_widget(table, chunks[0], &mut state);

        let footer = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(20), Constraint::Length(60)])
            .split(chunks[1]);
        frame.render_widget(
            Paragraph::new(self.pagination.summary(rows.len())).style(Style::default().fg(t.muted)),
            footer[0],
        );
        frame.render_widget(
            Paragraph::new(self.pager_line(rows.len())).alignment(ratatui::layout::Alignment::Right),
            footer[1],
        );
    }
}
