//! Contextual help bar.
//!
//! One line at the bottom of the screen with the key hints for whatever has
//! focus, plus an optional status note (such as the selection count) on the
//! right.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::events::{get_context_hints, KeyContext};
use crate::ui::theme::theme;

/// Render the hints for `context`, with `note` right-aligned.
pub fn render_context_help(frame: &mut Frame, area: Rect, context: KeyContext, note: Option<&str>) {
    let t = theme();
    let note_width = note.map_or(0, |n| n.chars().count() as u16 + 1);
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(note_width)])
        .split(area);

    frame.render_widget(
        Paragraph::new(Line::from(hint_spans(get_context_hints(context)))),
        chunks[0],
    );
    if let Some(note) = note {
        frame.render_widget(
            Paragraph::new(Span::styled(note.to_string(), Style::default().fg(t.highlight)))
                .alignment(Alignment::Right),
            chunks[1],
        );
    }
}

/// Split a hint string into spans, styling bracketed keys apart from their
/// descriptions.
fn hint_spans(hints: &str) -> Vec<Span<'static>> {
    let t = theme();
    let key_style = Style::default().fg(t.accent);
    let text_style = Style::default().fg(t.muted);

    let mut spans = Vec::new();
    let mut rest = hints;
    while let Some(open) = rest.find('[') {
        if open > 0 {
            spans.push(Span::styled(rest[..open].to_string(), text_style));
        }
        match rest[open..].find(']') {
            Some(close) => {
                let end = open + close + 1;
                spans.push(Span::styled(rest[open..end].to_string(), key_style));
                rest = &rest[end..];
            }
            None => {
                spans.push(Span::styled(rest[open..].to_string(), text_style));
                rest = "";
            }
        }
    }
    if !rest.is_empty() {
        spans.push(Span::styled(rest.to_string(), text_style));
    }
    spans
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hint_spans_alternate() {
        let spans = hint_spans("[j/k] row  [Enter] view");
        let texts: Vec<&str> = spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(texts, vec!["[j/k]", " row  ", "[Enter]", " view"]);
    }

    #[test]
    fn test_hint_spans_empty() {
        assert!(hint_spans("").is_empty());
    }

    #[test]
    fn test_hint_spans_no_brackets() {
        assert_eq!(hint_spans("just text").len(), 1);
    }

    #[test]
    fn test_hint_spans_unclosed_bracket() {
        let spans = hint_spans("a [b");
        let texts: Vec<&str> = spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(texts, vec!["a ", "[b"]);
    }
}
