//! Demo data for the dashboard screens.
//!
//! Record types live in [`types`]; the fixed datasets in [`mock`].

pub mod mock;
mod types;

pub use types::{
    AdminProfile, BookingRecord, Earning, FieldOwner, MatchResult, Period, Player, RevenuePoint,
    Session, SessionInfo, SessionPlayer, Team,
};
