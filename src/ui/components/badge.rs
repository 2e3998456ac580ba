//! Status badges.
//!
//! Session, booking and payment states are shown as a short colored label.
//! Matching is case-insensitive; anything unrecognised gets the neutral badge.

use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
};

/// The badge variant chosen for a status string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusBadge {
    Open,
    Paid,
    Ongoing,
    Complete,
    Cancelled,
    Pending,
    Neutral,
}

impl StatusBadge {
    /// Map a status value to its badge.
    pub fn from_status(status: &str) -> Self {
        match status.trim().to_lowercase().as_str() {
            "open" => StatusBadge::Open,
            "paid" => StatusBadge::Paid,
            "ongoing" => StatusBadge::Ongoing,
            "complete" | "completed" => StatusBadge::Complete,
            "cancelled" => StatusBadge::Cancelled,
            "pending" => StatusBadge::Pending,
            _ => StatusBadge::Neutral,
        }
    }

    /// Foreground color of the badge.
    pub fn color(&self) -> Color {
        match self {
            StatusBadge::Open => Color::Rgb(52, 211, 153),
            StatusBadge::Paid => Color::Rgb(96, 165, 250),
            StatusBadge::Ongoing => Color::Rgb(34, 211, 238),
            StatusBadge::Complete => Color::Rgb(74, 222, 128),
            StatusBadge::Cancelled => Color::Rgb(248, 113, 113),
            StatusBadge::Pending => Color::Rgb(250, 204, 21),
            StatusBadge::Neutral => Color::Rgb(130, 130, 160),
        }
    }

    /// Full badge style.
    pub fn style(&self) -> Style {
        Style::default()
            .fg(self.color())
            .add_modifier(Modifier::BOLD)
    }

    /// Render `label` as a badge span, padded to a fixed width so a column of
    /// badges lines up.
    pub fn span(&self, label: &str) -> Span<'static> {
        Span::styled(format!(" {:^9} ", label), self.style())
    }
}

/// Convenience for rendering a status string directly.
pub fn status_span(status: &str) -> Span<'static> {
    StatusBadge::from_status(status).span(status)
}
