//! Checkbox selection for list rows.

use std::collections::BTreeSet;

use ratatui::{
    style::Style,
    text::{Line, Span},
};

use crate::ui::theme::theme;

/// The set of selected row ids for one screen.
#[derive(Debug, Clone, Default)]
pub struct Selection {
    ids: BTreeSet<String>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip the selection of `id`. Returns whether it is now selected.
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.ids.remove(id) {
            false
        } else {
            self.ids.insert(id.to_string());
            true
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// A checkbox followed by `label`, for an id column.
    pub fn checkbox_line(&self, id: &str) -> Line<'static> {
        let t = theme();
        let (mark, style) = if self.contains(id) {
            ("[x] ", Style::default().fg(t.accent))
        } else {
            ("[ ] ", Style::default().fg(t.dim))
        };
        Line::from(vec![
            Span::styled(mark, style),
            Span::styled(id.to_string(), Style::default().fg(t.fg)),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle() {
        let mut selection = Selection::new();
        assert!(selection.toggle("#CH 565"));
        assert!(selection.contains("#CH 565"));
        assert!(!selection.toggle("#CH 565"));
        assert!(selection.is_empty());
    }

    #[test]
    fn test_checkbox_line() {
        let mut selection = Selection::new();
        selection.toggle("#CH 566");
        let checked: String = selection
            .checkbox_line("#CH 566")
            .spans
            .iter()
            .map(|s| s.content.as_ref())
            .collect();
        let unchecked: String = selection
            .checkbox_line("#CH 567")
            .spans
            .iter()
            .map(|s| s.content.as_ref())
            .collect();
        assert_eq!(checked, "[x] #CH 566");
        assert_eq!(unchecked, "[ ] #CH 567");
    }
}
