//! Dashboard overview: headline cards and the revenue chart.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    symbols,
    text::{Line, Span},
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType},
    Frame,
};
use tracing::debug;

use crate::data::{mock, Period, RevenuePoint};
use crate::ui::components::{render_card_grid, StatCard};
use crate::ui::theme::theme;

pub struct OverviewView {
    cards: Vec<StatCard>,
    period: Period,
    revenue: Vec<RevenuePoint>,
}

impl Default for OverviewView {
    fn default() -> Self {
        Self::new()
    }
}

impl OverviewView {
    pub fn new() -> Self {
        let period = Period::default();
        Self {
            cards: mock::overview_cards(),
            period,
            revenue: mock::revenue(period),
        }
    }

    pub fn set_period(&mut self, period: Period) {
        if self.period != period {
            debug!(period = period.label(), "Revenue period changed");
            self.period = period;
            self.revenue = mock::revenue(period);
        }
    }

    pub fn handle_input(&mut self, key: KeyEvent) {
        if let (KeyCode::Char('p'), KeyModifiers::NONE) = (key.code, key.modifiers) {
            self.set_period(self.period.toggle());
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(5), Constraint::Min(10)])
            .split(area);
        render_card_grid(frame, chunks[0], &self.cards, 4, 5);
        self.render_chart(frame, chunks[1]);
    }

    fn render_chart(&self, frame: &mut Frame, area: Rect) {
        let t = theme();
        let current: Vec<(f64, f64)> = self
            .revenue
            .iter()
            .enumerate()
            .map(|(i, p)| (i as f64, p.current))
            .collect();
        let previous: Vec<(f64, f64)> = self
            .revenue
            .iter()
            .enumerate()
            .map(|(i, p)| (i as f64, p.previous))
            .collect();
        let y_max = y_bound(&self.revenue);

        let datasets = vec![
            Dataset::default()
                .name(self.period.label())
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(t.accent))
                .data(&current),
            Dataset::default()
                .name(self.period.previous_label())
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(t.warning))
                .data(&previous),
        ];

        let x_labels: Vec<Span> = self
            .revenue
            .iter()
            .map(|p| Span::styled(p.label, Style::default().fg(t.muted)))
            .collect();
        let y_labels: Vec<Span> = [0.0, y_max / 2.0, y_max]
            .iter()
            .map(|v| Span::styled(format!("{:.0}", v), Style::default().fg(t.muted)))
            .collect();

        let title = Line::from(vec![
            Span::styled(" Revenue ", t.title_style()),
            Span::styled(
                format!("[{}] ", self.period.label()),
                Style::default().fg(t.highlight),
            ),
        ]);
        let chart = Chart::new(datasets)
            .block(
                Block::default()
                    .title(title)
                    .borders(Borders::ALL)
                    .border_style(t.border_style(false)),
            )
            .x_axis(
                Axis::default()
                    .style(Style::default().fg(t.border))
                    .bounds([0.0, self.revenue.len().saturating_sub(1) as f64])
                    .labels(x_labels),
            )
            .y_axis(
                Axis::default()
                    .style(Style::default().fg(t.border))
                    .bounds([0.0, y_max])
                    .labels(y_labels),
            );
        frame.render_widget(chart, area);
    }
}

/// Upper y bound: the largest value rounded up to the next thousand.
fn y_bound(points: &[RevenuePoint]) -> f64 {
    let max = points
        .iter()
        .flat_map(|p| [p.current, p.previous])
        .fold(0.0_f64, f64::max);
    ((max / 1000.0).ceil() * 1000.0).max(1000.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn test_period_toggle_swaps_data() {
        let mut view = OverviewView::new();
        assert_eq!(view.period, Period::ThisWeek);
        assert_eq!(view.revenue.len(), 7);

        view.handle_input(KeyEvent::new(KeyCode::Char('p'), KeyModifiers::NONE));
        assert_eq!(view.period, Period::ThisMonth);
        assert_eq!(view.revenue.len(), 4);
    }

    #[test]
    fn test_y_bound() {
        assert_eq!(y_bound(&mock::revenue(Period::ThisWeek)), 4000.0);
        assert_eq!(y_bound(&[]), 1000.0);
    }

    #[test]
    fn test_render_cards() {
        let view = OverviewView::new();
        let mut terminal = Terminal::new(TestBackend::new(120, 30)).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                view.render(f, area);
            })
            .unwrap();
        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("Total Revenue"));
        assert!(text.contains("Revenue"));
    }
}
