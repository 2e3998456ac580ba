//! Theme and styling configuration.
//!
//! The active theme is process-global and set once at startup with
//! [`init_theme`]. Views fetch it with [`theme`]; if nothing was
//! initialised the dark theme is used.

use std::sync::OnceLock;

use ratatui::style::{Color, Modifier, Style};

static THEME: OnceLock<Theme> = OnceLock::new();

/// Color theme for the application.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Primary foreground color.
    pub fg: Color,
    /// Primary background color.
    pub bg: Color,
    /// Accent color for titles and the active page.
    pub accent: Color,
    /// Secondary accent (the yellow used for action affordances).
    pub highlight: Color,
    /// Muted foreground for descriptions and disabled controls.
    pub muted: Color,
    /// Dimmer than muted, for separators.
    pub dim: Color,
    /// Unfocused border color.
    pub border: Color,
    /// Focused border color.
    pub border_focused: Color,
    /// Background of the selected row.
    pub selection_bg: Color,
    /// Foreground of the selected row.
    pub selection_fg: Color,
    /// Positive values.
    pub success: Color,
    /// Warnings.
    pub warning: Color,
    /// Errors and negative values.
    pub error: Color,
    /// Informational text.
    pub info: Color,
    /// Placeholder text in inputs.
    pub input_placeholder: Color,
    /// Typed text in inputs.
    pub input_fg: Color,
}

impl Theme {
    /// The default dark theme.
    pub fn dark() -> Self {
        Self {
            fg: Color::White,
            bg: Color::Black,
            accent: Color::Rgb(192, 0, 105),
            highlight: Color::Rgb(180, 151, 30),
            muted: Color::Gray,
            dim: Color::DarkGray,
            border: Color::DarkGray,
            border_focused: Color::Rgb(192, 0, 105),
            selection_bg: Color::Rgb(40, 40, 56),
            selection_fg: Color::White,
            success: Color::Green,
            warning: Color::Yellow,
            error: Color::Red,
            info: Color::Cyan,
            input_placeholder: Color::DarkGray,
            input_fg: Color::White,
        }
    }

    /// A light theme for bright terminals.
    pub fn light() -> Self {
        Self {
            fg: Color::Black,
            bg: Color::White,
            accent: Color::Magenta,
            highlight: Color::Rgb(150, 120, 0),
            muted: Color::DarkGray,
            dim: Color::Gray,
            border: Color::Gray,
            border_focused: Color::Magenta,
            selection_bg: Color::Rgb(225, 225, 235),
            selection_fg: Color::Black,
            success: Color::Green,
            warning: Color::Rgb(180, 120, 0),
            error: Color::Red,
            info: Color::Blue,
            input_placeholder: Color::Gray,
            input_fg: Color::Black,
        }
    }

    /// Style for titles.
    pub fn title_style(&self) -> Style {
        Style::default().fg(self.fg).add_modifier(Modifier::BOLD)
    }

    /// Style for a border, depending on focus.
    pub fn border_style(&self, focused: bool) -> Style {
        if focused {
            Style::default().fg(self.border_focused)
        } else {
            Style::default().fg(self.border)
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

/// Resolve a theme by its configured name. Unknown names fall back to dark.
pub fn load_theme(name: &str) -> Theme {
    match name.to_lowercase().as_str() {
        "light" => Theme::light(),
        "dark" => Theme::dark(),
        other => {
            tracing::warn!(theme = other, "Unknown theme, falling back to dark");
            Theme::dark()
        }
    }
}

/// Install the global theme. Later calls are ignored.
pub fn init_theme(theme: Theme) {
    if THEME.set(theme).is_err() {
        tracing::debug!("Theme already initialised");
    }
}

/// The active theme.
pub fn theme() -> &'static Theme {
    THEME.get_or_init(Theme::dark)
}
