//! Application views (screens).

mod earnings;
mod field_owner_detail;
mod field_owners;
mod help;
mod list;
mod overview;
mod player_detail;
pub mod players;
mod session_detail;
mod sessions;
mod settings;

pub use earnings::earnings_view;
pub use field_owner_detail::FieldOwnerDetailView;
pub use field_owners::field_owners_view;
pub use help::{HelpAction, HelpView};
pub use list::{ListAction, ListView};
pub use overview::OverviewView;
pub use player_detail::PlayerDetailView;
pub use players::players_view;
pub use session_detail::SessionDetailView;
pub use sessions::sessions_view;
pub use settings::{SettingsAction, SettingsView};

/// Actions returned from detail screens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailAction {
    /// Return to the list the detail was opened from.
    Back,
    /// Show a toast.
    Notify(String),
}
