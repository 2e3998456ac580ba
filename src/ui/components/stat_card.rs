//! Stat card widget.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::ui::theme::theme;

/// A headline number with an optional week-over-week change.
#[derive(Debug, Clone, PartialEq)]
pub struct StatCard {
    pub title: String,
    pub value: String,
    /// Percent change from the previous week.
    pub change: Option<f64>,
    pub icon: &'static str,
}

impl StatCard {
    pub fn new(title: impl Into<String>, value: impl Into<String>, icon: &'static str) -> Self {
        Self {
            title: title.into(),
            value: value.into(),
            change: None,
            icon,
        }
    }

    pub fn with_change(mut self, change: f64) -> Self {
        self.change = Some(change);
        self
    }

    /// Whether the change counts as growth. Zero counts as up.
    pub fn is_up(&self) -> bool {
        self.change.map_or(true, |c| c >= 0.0)
    }

    /// "1.3% Up from past week" and the like.
    pub fn change_text(&self) -> Option<String> {
        self.change.map(|c| {
            let (arrow, word) = if self.is_up() { ("↑", "Up") } else { ("↓", "Down") };
            format!("{} {}% {} from past week", arrow, c.abs(), word)
        })
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let t = theme();
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(t.border_style(false));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let mut lines = vec![
            Line::from(vec![
                Span::styled(format!("{} ", self.icon), Style::default().fg(t.highlight)),
                Span::styled(self.title.clone(), Style::default().fg(t.muted)),
            ]),
            Line::from(Span::styled(
                self.value.clone(),
                Style::default().fg(t.fg).add_modifier(Modifier::BOLD),
            )),
        ];
        if let Some(text) = self.change_text() {
            let color = if self.is_up() { t.success } else { t.error };
            lines.push(Line::from(Span::styled(text, Style::default().fg(color))));
        }
        frame.render_widget(Paragraph::new(lines), inner);
    }
}

/// Lay `cards` out in rows of `per_row`, each card `card_height` tall.
pub fn render_card_grid(
    frame: &mut Frame,
    area: Rect,
    cards: &[StatCard],
    per_row: usize,
    card_height: u16,
) {
    let per_row = per_row.max(1);
    let row_count = cards.len().div_ceil(per_row);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints((0..row_count).map(|_| Constraint::Length(card_height)))
        .split(area);

    for (row_area, chunk) in rows.iter().zip(cards.chunks(per_row)) {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints((0..per_row).map(|_| Constraint::Ratio(1, per_row as u32)))
            .split(*row_area);
        for (card, col) in chunk.iter().zip(cols.iter()) {
            card.render(frame, *col);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_change_text_up() {
        let card = StatCard::new("Total Revenue", "$1864.18", "$").with_change(1.3);
        assert!(card.is_up());
        assert_eq!(card.change_text().as_deref(), Some("↑ 1.3% Up from past week"));
    }

    #[test]
    fn test_change_text_down() {
        let card = StatCard::new("Player", "10293", "♟").with_change(-4.3);
        assert!(!card.is_up());
        assert_eq!(card.change_text().as_deref(), Some("↓ 4.3% Down from past week"));
    }

    #[test]
    fn test_zero_change_is_up() {
        let card = StatCard::new("Player", "0", "♟").with_change(0.0);
        assert!(card.is_up());
    }

    #[test]
    fn test_no_change() {
        let card = StatCard::new("AI Use", "125", "✦");
        assert_eq!(card.change_text(), None);
    }
}
