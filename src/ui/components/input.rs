//! Single-line text input.
//!
//! Used by the search bars and the settings dialogs. The cursor is tracked
//! in characters, not bytes, so names with accents edit correctly.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Position, Rect},
    style::Style,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::ui::theme::theme;

/// Restricts which characters an input accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputFilter {
    #[default]
    Any,
    Digits,
}

/// A text input widget.
#[derive(Debug, Clone, Default)]
pub struct TextInput {
    /// The current value.
    value: String,
    /// Cursor position in characters.
    cursor: usize,
    /// Mask the value (passwords).
    masked: bool,
    /// Shown while empty.
    placeholder: String,
    /// Maximum length in characters, if any.
    max_len: Option<usize>,
    filter: InputFilter,
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// A masked input for passwords.
    pub fn masked() -> Self {
        Self {
            masked: true,
            ..Self::default()
        }
    }

    /// An input pre-filled with `value`, cursor at the end.
    pub fn with_value(value: impl Into<String>) -> Self {
        let mut input = Self::default();
        input.set_value(value);
        input
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn with_max_len(mut self, max_len: usize) -> Self {
        self.max_len = Some(max_len);
        self
    }

    pub fn with_filter(mut self, filter: InputFilter) -> Self {
        self.filter = filter;
        self
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.cursor = self.value.chars().count();
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// The value as displayed, with masking applied.
    pub fn display_value(&self) -> String {
        if self.masked {
            "•".repeat(self.value.chars().count())
        } else {
            self.value.clone()
        }
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.value.len())
    }

    fn accepts(&self, c: char) -> bool {
        let fits = self
            .max_len
            .map_or(true, |max| self.value.chars().count() < max);
        let allowed = match self.filter {
            InputFilter::Any => !c.is_control(),
            InputFilter::Digits => c.is_ascii_digit(),
        };
        fits && allowed
    }

    /// Handle a key press. Returns `true` if the value changed.
    pub fn handle_input(&mut self, key: KeyEvent) -> bool {
        let len = self.value.chars().count();
        match (key.code, key.modifiers) {
            (KeyCode::Char('u'), KeyModifiers::CONTROL) => {
                let changed = !self.value.is_empty();
                self.clear();
                changed
            }
            (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => {
                if !self.accepts(c) {
                    return false;
                }
                let at = self.byte_index(self.cursor);
                self.value.insert(at, c);
                self.cursor += 1;
                true
            }
            (KeyCode::Backspace, _) if self.cursor > 0 => {
                self.cursor -= 1;
                let at = self.byte_index(self.cursor);
                self.value.remove(at);
                true
            }
            (KeyCode::Delete, _) if self.cursor < len => {
                let at = self.byte_index(self.cursor);
                self.value.remove(at);
                true
            }
            (KeyCode::Left, _) => {
                self.cursor = self.cursor.saturating_sub(1);
                false
            }
            (KeyCode::Right, _) => {
                self.cursor = (self.cursor + 1).min(len);
                false
            }
            (KeyCode::Home, _) => {
                self.cursor = 0;
                false
            }
            (KeyCode::End, _) => {
                self.cursor = len;
                false
            }
            _ => false,
        }
    }

    /// Render as a bordered field titled `label`.
    pub fn render(&self, frame: &mut Frame, area: Rect, label: &str, focused: bool) {
        let t = theme();
        let (text, style) = if self.value.is_empty() {
            (self.placeholder.clone(), Style::default().fg(t.input_placeholder))
        } else {
            (self.display_value(), Style::default().fg(t.input_fg))
        };

        let block = Block::default()
            .title(format!(" {} ", label))
            .borders(Borders::ALL)
            .border_style(t.border_style(focused));
        frame.render_widget(Paragraph::new(text).style(style).block(block), area);

        if focused && area.width > 2 && area.height > 2 {
            let x = area.x + 1 + (self.cursor as u16).min(area.width - 3);
            frame.set_cursor_position(Position::new(x, area.y + 1));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_str(input: &mut TextInput, s: &str) {
        for c in s.chars() {
            input.handle_input(key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn test_typing_and_backspace() {
        let mut input = TextInput::new();
        type_str(&mut input, "Sidney");
        assert_eq!(input.value(), "Sidney");
        assert!(input.handle_input(key(KeyCode::Backspace)));
        assert_eq!(input.value(), "Sidne");
    }

    #[test]
    fn test_insert_in_middle_with_multibyte() {
        let mut input = TextInput::with_value("Zoe");
        input.handle_input(key(KeyCode::Left));
        input.handle_input(key(KeyCode::Backspace));
        type_str(&mut input, "ö");
        assert_eq!(input.value(), "Zöe");
        assert_eq!(input.cursor, 2);
    }

    #[test]
    fn test_masked_display() {
        let mut input = TextInput::masked();
        type_str(&mut input, "secret");
        assert_eq!(input.display_value(), "••••••");
        assert_eq!(input.value(), "secret");
    }

    #[test]
    fn test_digit_filter_and_max_len() {
        let mut input = TextInput::new()
            .with_filter(InputFilter::Digits)
            .with_max_len(4);
        type_str(&mut input, "4a7-09 12");
        assert_eq!(input.value(), "4709");
    }

    #[test]
    fn test_ctrl_u_clears() {
        let mut input = TextInput::with_value("abc");
        assert!(input.handle_input(KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL)));
        assert!(input.is_empty());
        assert!(!input.handle_input(KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL)));
    }

    #[test]
    fn test_backspace_at_start_is_noop() {
        let mut input = TextInput::new();
        assert!(!input.handle_input(key(KeyCode::Backspace)));
    }
}
