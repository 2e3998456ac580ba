//! Modal overlays and side sheets.

use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    widgets::{Block, Borders, Clear},
    Frame,
};

use crate::ui::theme::theme;

/// Where an overlay is anchored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Centered dialog.
    Center,
    /// Full-height sheet on the right edge.
    Right,
}

/// An overlay frame of a fixed size.
#[derive(Debug, Clone)]
pub struct Modal {
    pub title: String,
    pub width: u16,
    pub height: u16,
    pub placement: Placement,
}

impl Modal {
    /// A centered dialog of `width` x `height` cells.
    pub fn new(title: impl Into<String>, width: u16, height: u16) -> Self {
        Self {
            title: title.into(),
            width,
            height,
            placement: Placement::Center,
        }
    }

    /// A right-hand sheet `width` cells wide.
    pub fn sheet(title: impl Into<String>, width: u16) -> Self {
        Self {
            title: title.into(),
            width,
            height: u16::MAX,
            placement: Placement::Right,
        }
    }

    /// The outer area inside `area`, shrunk to fit.
    pub fn area(&self, area: Rect) -> Rect {
        let width = self.width.min(area.width);
        let height = self.height.min(area.height);
        match self.placement {
            Placement::Center => Rect::new(
                area.x + (area.width - width) / 2,
                area.y + (area.height - height) / 2,
                width,
                height,
            ),
            Placement::Right => Rect::new(area.x + area.width - width, area.y, width, height),
        }
    }

    /// Clear and frame the overlay. Returns the inner area for content.
    pub fn render(&self, frame: &mut Frame, area: Rect) -> Rect {
        let t = theme();
        let outer = self.area(area);
        let block = Block::default()
            .title(format!(" {} ", self.title))
            .title_alignment(Alignment::Center)
            .title_style(t.title_style())
            .borders(Borders::ALL)
            .border_style(t.border_style(true))
            .style(Style::default().bg(t.bg));
        let inner = block.inner(outer);
        frame.render_widget(Clear, outer);
        frame.render_widget(block, outer);
        inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_area() {
        let modal = Modal::new("Edit Account Info", 40, 10);
        let area = modal.area(Rect::new(0, 0, 100, 30));
        assert_eq!(area, Rect::new(30, 10, 40, 10));
    }

    #[test]
    fn test_area_shrinks_to_fit() {
        let modal = Modal::new("Too big", 200, 50);
        let area = modal.area(Rect::new(5, 5, 80, 20));
        assert_eq!(area, Rect::new(5, 5, 80, 20));
    }

    #[test]
    fn test_sheet_hugs_right_edge() {
        let sheet = Modal::sheet("Session Info", 40);
        let area = sheet.area(Rect::new(0, 0, 100, 30));
        assert_eq!(area, Rect::new(60, 0, 40, 30));
    }
}
