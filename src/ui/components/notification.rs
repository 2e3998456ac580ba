//! Toast notifications.
//!
//! Short-lived messages stacked in the bottom-right corner, used to confirm
//! settings changes and row actions that have no screen of their own.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::ui::theme::theme;

/// How long a toast stays on screen unless overridden.
const DEFAULT_TTL: Duration = Duration::from_secs(3);

/// Maximum toasts kept at once; older ones are dropped first.
const MAX_VISIBLE: usize = 3;

/// The kind of toast, which selects its icon and color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Info,
    Success,
    Error,
}

impl NotificationKind {
    /// Icon shown before the message.
    pub fn icon(&self) -> &'static str {
        match self {
            NotificationKind::Info => "ℹ",
            NotificationKind::Success => "✓",
            NotificationKind::Error => "✕",
        }
    }

    /// Color of the icon, message and border.
    pub fn color(&self) -> Color {
        let t = theme();
        match self {
            NotificationKind::Info => t.info,
            NotificationKind::Success => t.success,
            NotificationKind::Error => t.error,
        }
    }
}

/// A single toast.
#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
    created_at: Instant,
    ttl: Duration,
}

impl Notification {
    /// Create a toast with the default lifetime.
    pub fn new(message: impl Into<String>, kind: NotificationKind) -> Self {
        Self {
            message: message.into(),
            kind,
            created_at: Instant::now(),
            ttl: DEFAULT_TTL,
        }
    }

    /// Override the lifetime.
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    /// Whether the toast outlived its lifetime.
    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() > self.ttl
    }
}

/// The toast stack.
#[derive(Debug, Default)]
pub struct NotificationManager {
    notifications: VecDeque<Notification>,
}

impl NotificationManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a toast, dropping the oldest beyond the visible limit.
    pub fn push(&mut self, notification: Notification) {
        tracing::debug!(kind = ?notification.kind, message = %notification.message, "Notification");
        self.notifications.push_back(notification);
        while self.notifications.len() > MAX_VISIBLE {
            self.notifications.pop_front();
        }
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.push(Notification::new(message, NotificationKind::Info));
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.push(Notification::new(message, NotificationKind::Success));
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.push(Notification::new(message, NotificationKind::Error));
    }

    /// Drop expired toasts. Called on every tick.
    pub fn tick(&mut self) {
        self.notifications.retain(|n| !n.is_expired());
    }

    /// Render the stack in the bottom-right corner of `area`.
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        if self.notifications.is_empty() {
            return;
        }

        let width = 44.min(area.width.saturating_sub(4));
        let inner_width = width.saturating_sub(4).max(1) as usize;
        let heights: Vec<u16> = self
            .notifications
            .iter()
            .map(|n| (n.message.chars().count() + 2).div_ceil(inner_width) as u16 + 2)
            .collect();
        let total_height = heights.iter().sum::<u16>().min(area.height.saturating_sub(2));

        let stack = Rect::new(
            area.x + area.width.saturating_sub(width + 2),
            area.y + area.height.saturating_sub(total_height + 1),
            width,
            total_height,
        );
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints(heights.iter().map(|&h| Constraint::Length(h)))
            .split(stack);

        for (notification, chunk) in self.notifications.iter().zip(chunks.iter()) {
            let style = Style::default().fg(notification.kind.color());
            let text = Line::from(vec![
                Span::styled(
                    format!("{} ", notification.kind.icon()),
                    style.add_modifier(Modifier::BOLD),
                ),
                Span::styled(notification.message.clone(), style),
            ]);
            frame.render_widget(Clear, *chunk);
            frame.render_widget(
                Paragraph::new(text)
                    .wrap(Wrap { trim: true })
                    .block(Block::default().borders(Borders::ALL).border_style(style)),
                *chunk,
            );
        }
    }
}
