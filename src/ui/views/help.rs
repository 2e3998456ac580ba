//! Help overlay listing every key binding, grouped by screen.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

use crate::events::get_keybindings_grouped;
use crate::ui::theme::theme;

/// Width of the key column.
const KEY_COLUMN: usize = 16;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HelpAction {
    Close,
}

/// Scrollable help overlay. Content is built once; only the offset moves.
pub struct HelpView {
    lines: Vec<Line<'static>>,
    scroll: usize,
    /// Inner height from the last render.
    viewport: usize,
}

impl Default for HelpView {
    fn default() -> Self {
        Self::new()
    }
}

impl HelpView {
    pub fn new() -> Self {
        Self {
            lines: build_lines(),
            scroll: 0,
            viewport: 0,
        }
    }

    pub fn reset_scroll(&mut self) {
        self.scroll = 0;
    }

    fn max_scroll(&self) -> usize {
        self.lines.len().saturating_sub(self.viewport)
    }

    fn scroll_by(&mut self, delta: isize) {
        self.scroll = self
            .scroll
            .saturating_add_signed(delta)
            .min(self.max_scroll());
    }

    pub fn handle_input(&mut self, key: KeyEvent) -> Option<HelpAction> {
        let page = self.viewport.saturating_sub(1).max(1) as isize;
        match (key.code, key.modifiers) {
            (KeyCode::Char('?') | KeyCode::Char('q'), KeyModifiers::NONE) | (KeyCode::Esc, _) => {
                return Some(HelpAction::Close)
            }
            (KeyCode::Char('j'), KeyModifiers::NONE) | (KeyCode::Down, _) => self.scroll_by(1),
            (KeyCode::Char('k'), KeyModifiers::NONE) | (KeyCode::Up, _) => self.scroll_by(-1),
            (KeyCode::PageDown, _) | (KeyCode::Char('d'), KeyModifiers::CONTROL) => {
                self.scroll_by(page)
            }
            (KeyCode::PageUp, _) | (KeyCode::Char('u'), KeyModifiers::CONTROL) => {
                self.scroll_by(-page)
            }
            (KeyCode::Char('g'), KeyModifiers::NONE) | (KeyCode::Home, _) => self.scroll = 0,
            (KeyCode::Char('G'), _) | (KeyCode::End, _) => self.scroll = self.max_scroll(),
            _ => {}
        }
        None
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        let t = theme();
        let block = Block::default()
            .title(" Keyboard Shortcuts ")
            .title_alignment(Alignment::Center)
            .title_style(t.title_style())
            .borders(Borders::ALL)
            .border_style(t.border_style(true))
            .style(Style::default().bg(t.bg));
        let inner = block.inner(area);
        frame.render_widget(Clear, area);
        frame.render_widget(block, area);

        self.viewport = inner.height as usize;
        self.scroll = self.scroll.min(self.max_scroll());
        frame.render_widget(
            Paragraph::new(self.lines.clone()).scroll((self.scroll as u16, 0)),
            inner,
        );

        if self.lines.len() > self.viewport {
            let mut state = ScrollbarState::new(self.max_scroll()).position(self.scroll);
            frame.render_stateful_widget(
                Scrollbar::new(ScrollbarOrientation::VerticalRight),
                area,
                &mut state,
            );
        }
    }
}

fn build_lines() -> Vec<Line<'static>> {
    let t = theme();
    let mut lines = Vec::new();
    for (context, bindings) in get_keybindings_grouped() {
        lines.push(Line::from(Span::styled(
            context.display(),
            Style::default().fg(t.warning).add_modifier(Modifier::BOLD),
        )));
        for binding in bindings {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("  {:<width$}", binding.key, width = KEY_COLUMN),
                    Style::default().fg(t.accent),
                ),
                Span::styled(binding.description, Style::default().fg(t.fg)),
            ]));
        }
        lines.push(Line::default());
    }
    lines.push(Line::from(Span::styled(
        "? / q / Esc to close",
        Style::default().fg(t.dim),
    )));
    lines
}
