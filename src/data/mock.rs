//! Fixed demo datasets.
//!
//! The dashboard has no backend; every screen reads from these builders.
//! They are deterministic so screens and tests see the same rows each run.

use super::types::{
    AdminProfile, BookingRecord, Earning, FieldOwner, MatchResult, Period, Player, RevenuePoint,
    Session, SessionInfo, SessionPlayer, Team,
};
use crate::ui::components::StatCard;

/// Rows in each of the top-level lists.
pub const LIST_LEN: usize = 50;

/// Rows in each booking history.
pub const HISTORY_LEN: usize = 20;

/// Display id for the `i`-th record, "#CH 565" onwards.
fn record_id(i: usize) -> String {
    format!("#CH {}", 565 + i)
}

pub fn players() -> Vec<Player> {
    const STATUSES: [&str; 4] = ["Pending", "Active", "Suspended", "Approved"];
    (0..LIST_LEN)
        .map(|i| Player {
            id: record_id(i),
            user_name: "Red Seafood Resort".to_string(),
            email: "name@gmail.com".to_string(),
            country: "United Kingdom".to_string(),
            session_point: "$256.26".to_string(),
            matches_played: 25,
            status: STATUSES[i % STATUSES.len()].to_string(),
        })
        .collect()
}

pub fn field_owners() -> Vec<FieldOwner> {
    const FIELDS: [&str; 4] = [
        "Toggie Fun Club",
        "Arena North",
        "Greenline Pitch",
        "Harbour Courts",
    ];
    const STATUSES: [&str; 3] = ["Active", "Pending", "Suspended"];
    (0..LIST_LEN)
        .map(|i| FieldOwner {
            id: record_id(i),
            owner_name: "Malik Ahmed".to_string(),
            field_name: FIELDS[i % FIELDS.len()].to_string(),
            email: "name0202@gmail.com".to_string(),
            contact_number: "+44 7700 900123".to_string(),
            country: "United Kingdom".to_string(),
            plan: if i % 3 == 0 { "Premium" } else { "Basic" }.to_string(),
            total_sessions: 12 + (i as u32 % 7) * 3,
            status: STATUSES[i % STATUSES.len()].to_string(),
        })
        .collect()
}

pub fn sessions() -> Vec<Session> {
    const STATUSES: [&str; 6] = ["Open", "Full", "Ongoing", "Complete", "Cancelled", "Open"];
    (0..LIST_LEN)
        .map(|i| Session {
            id: record_id(i),
            session_name: "Red Seafood Resort".to_string(),
            field_id: "#CH 565".to_string(),
            player: "8 / 8".to_string(),
            amount: "€69".to_string(),
            status: STATUSES[i % STATUSES.len()].to_string(),
        })
        .collect()
}

pub fn earnings() -> Vec<Earning> {
    (0..LIST_LEN)
        .map(|i| Earning {
            id: record_id(i),
            user_name: "Rahim Hossain".to_string(),
            user_id: "#CH 565".to_string(),
            plan: "Premium".to_string(),
            amount: "€69".to_string(),
            date: "25 February, 2025".to_string(),
        })
        .collect()
}

/// Booking history of a player.
pub fn player_bookings() -> Vec<BookingRecord> {
    (0..HISTORY_LEN)
        .map(|i| BookingRecord {
            id: format!("#PCH {}", 565 + i),
            venue_name: "Red Seafood Resort".to_string(),
            venue_id: "#CH 565".to_string(),
            date: "26 Jan 2026".to_string(),
            items: 25,
            amount: "$253.25".to_string(),
        })
        .collect()
}

/// Sessions hosted at a field owner's venue.
pub fn owner_sessions() -> Vec<BookingRecord> {
    (0..HISTORY_LEN)
        .map(|i| BookingRecord {
            id: record_id(i),
            venue_name: "Red Seafood Resort".to_string(),
            venue_id: "#CH 565".to_string(),
            date: "26 Jan 2026".to_string(),
            items: 25,
            amount: "$255.25".to_string(),
        })
        .collect()
}

pub fn session_players() -> Vec<SessionPlayer> {
    let scores = [None, Some(20), None, None, Some(20), Some(-20), Some(20), None];
    scores
        .iter()
        .enumerate()
        .map(|(i, &score)| SessionPlayer {
            id: i as u32 + 1,
            name: "Elon Rektler".to_string(),
            win: 95,
            loses: 25,
            played: 195,
            rank: if score.is_some() { 195 } else { 254 },
            score,
            team: if i < 4 { Team::A } else { Team::B },
        })
        .collect()
}

pub fn session_info() -> SessionInfo {
    SessionInfo {
        title: "Cracknel Supreme Match".to_string(),
        field_name: "Toggle Fun Club".to_string(),
        date: "25 Nov. 2022".to_string(),
        time: "12:00 pm - 01:00 pm".to_string(),
        entry_fee: "€69".to_string(),
        format: "4 vs 4".to_string(),
        host: "Malik Ahmed".to_string(),
        team_a: "Snake Green Squad".to_string(),
        team_b: "Red Bull Squad".to_string(),
        team_a_score: Some(52),
        team_b_score: Some(-12),
        champion: Some(Team::A),
    }
}

pub fn match_result() -> MatchResult {
    MatchResult {
        title: "Cracknel Supreme Match".to_string(),
        winner: "Snake Green Squad".to_string(),
        winner_points: 52,
        loser: "Red Bull Squad".to_string(),
        loser_points: -12,
        date: "25 Nov. 2022".to_string(),
        time: "12:00 pm - 01:00 pm".to_string(),
        venue: "Toggle Fun Club".to_string(),
    }
}

pub fn revenue(period: Period) -> Vec<RevenuePoint> {
    let raw: &[(&'static str, f64, f64)] = match period {
        Period::ThisWeek => &[
            ("Mon", 1100.0, 1200.0),
            ("Tue", 900.0, 1500.0),
            ("Wed", 800.0, 2200.0),
            ("Thu", 950.0, 3400.0),
            ("Fri", 1050.0, 2800.0),
            ("Sat", 1200.0, 3200.0),
            ("Sun", 1400.0, 2600.0),
        ],
        Period::ThisMonth => &[
            ("Week 1", 4200.0, 3800.0),
            ("Week 2", 5600.0, 4200.0),
            ("Week 3", 4800.0, 5100.0),
            ("Week 4", 6200.0, 4700.0),
        ],
    };
    raw.iter()
        .map(|&(label, current, previous)| RevenuePoint {
            label,
            current,
            previous,
        })
        .collect()
}

pub fn overview_cards() -> Vec<StatCard> {
    vec![
        StatCard::new("Total Revenue", "$1864.18", "$").with_change(1.3),
        StatCard::new("Field Owner", "293", "⌂").with_change(-4.3),
        StatCard::new("Player", "10293", "♟").with_change(-4.3),
        StatCard::new("Premium User", "10293", "♛").with_change(1.3),
    ]
}

pub fn player_cards() -> Vec<StatCard> {
    [
        ("Total Revenue", "$"),
        ("Total Bookings", "▣"),
        ("Matches Won", "✓"),
        ("Matches Lost", "✕"),
        ("Sessions Hosted", "⌂"),
        ("Session Points", "◆"),
        ("Rank", "♛"),
        ("Referrals", "☺"),
    ]
    .into_iter()
    .map(|(title, icon)| StatCard::new(title, "125", icon))
    .collect()
}

pub fn owner_cards(owner: &FieldOwner) -> Vec<StatCard> {
    vec![
        StatCard::new("Field Name", owner.field_name.clone(), "⌂"),
        StatCard::new("Email", owner.email.clone(), "✉"),
        StatCard::new("Contact Number", owner.contact_number.clone(), "☎"),
        StatCard::new("Country", owner.country.clone(), "◍"),
        StatCard::new("Subscription Plan", owner.plan.clone(), "▤"),
        StatCard::new("Total Session", owner.total_sessions.to_string(), "▣"),
    ]
}

pub fn admin_profile() -> AdminProfile {
    AdminProfile {
        name: "Sidney Paul".to_string(),
        email: "comet@gmail.com".to_string(),
    }
}
