//! User interface components and views.
//!
//! This module contains all TUI rendering logic, including views for the
//! dashboard screens and reusable UI components.

pub mod components;
pub mod theme;
pub mod views;

pub use components::{render_context_help, Notification, NotificationKind, NotificationManager};
pub use theme::{init_theme, load_theme};
pub use views::{
    earnings_view, field_owners_view, players_view, sessions_view, DetailAction,
    FieldOwnerDetailView, HelpAction, HelpView, ListAction, ListView, OverviewView,
    PlayerDetailView, SessionDetailView, SettingsAction, SettingsView,
};
