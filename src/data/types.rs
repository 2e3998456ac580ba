//! Record types shown by the dashboard screens.

use crate::ui::components::{CellValue, TableRow};

/// A registered player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub id: String,
    pub user_name: String,
    pub email: String,
    pub country: String,
    pub session_point: String,
    pub matches_played: u32,
    pub status: String,
}

impl TableRow for Player {
    fn field(&self, key: &str) -> Option<CellValue> {
        match key {
            "id" => Some((&self.id).into()),
            "user_name" => Some((&self.user_name).into()),
            "email" => Some((&self.email).into()),
            "country" => Some((&self.country).into()),
            "session_point" => Some((&self.session_point).into()),
            "matches_played" => Some(self.matches_played.into()),
            "status" => Some((&self.status).into()),
            _ => None,
        }
    }
}

/// A venue operator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldOwner {
    pub id: String,
    pub owner_name: String,
    pub field_name: String,
    pub email: String,
    pub contact_number: String,
    pub country: String,
    pub plan: String,
    pub total_sessions: u32,
    pub status: String,
}

impl TableRow for FieldOwner {
    fn field(&self, key: &str) -> Option<CellValue> {
        match key {
            "id" => Some((&self.id).into()),
            "owner_name" => Some((&self.owner_name).into()),
            "field_name" => Some((&self.field_name).into()),
            "email" => Some((&self.email).into()),
            "contact_number" => Some((&self.contact_number).into()),
            "country" => Some((&self.country).into()),
            "plan" => Some((&self.plan).into()),
            "total_sessions" => Some(self.total_sessions.into()),
            "status" => Some((&self.status).into()),
            _ => None,
        }
    }
}

/// A bookable match session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub id: String,
    pub session_name: String,
    pub field_id: String,
    /// Filled slots, e.g. "8 / 8".
    pub player: String,
    pub amount: String,
    pub status: String,
}

impl TableRow for Session {
    fn field(&self, key: &str) -> Option<CellValue> {
        match key {
            "id" => Some((&self.id).into()),
            "session_name" => Some((&self.session_name).into()),
            "field_id" => Some((&self.field_id).into()),
            "player" => Some((&self.player).into()),
            "amount" => Some((&self.amount).into()),
            "status" => Some((&self.status).into()),
            _ => None,
        }
    }
}

/// A subscription payment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Earning {
    pub id: String,
    pub user_name: String,
    pub user_id: String,
    pub plan: String,
    pub amount: String,
    pub date: String,
}

impl TableRow for Earning {
    fn field(&self, key: &str) -> Option<CellValue> {
        match key {
            "id" => Some((&self.id).into()),
            "user_name" => Some((&self.user_name).into()),
            "user_id" => Some((&self.user_id).into()),
            "plan" => Some((&self.plan).into()),
            "amount" => Some((&self.amount).into()),
            "date" => Some((&self.date).into()),
            _ => None,
        }
    }
}

/// One line of a player's or owner's booking history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingRecord {
    pub id: String,
    pub venue_name: String,
    pub venue_id: String,
    pub date: String,
    pub items: u32,
    pub amount: String,
}

impl TableRow for BookingRecord {
    fn field(&self, key: &str) -> Option<CellValue> {
        match key {
            "id" => Some((&self.id).into()),
            "venue_name" => Some((&self.venue_name).into()),
            "venue_id" => Some((&self.venue_id).into()),
            "date" => Some((&self.date).into()),
            "items" => Some(self.items.into()),
            "amount" => Some((&self.amount).into()),
            _ => None,
        }
    }
}

/// Side of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Team {
    A,
    B,
}

impl Team {
    pub fn label(&self) -> &'static str {
        match self {
            Team::A => "Team A",
            Team::B => "Team B",
        }
    }
}

/// A participant in a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionPlayer {
    pub id: u32,
    pub name: String,
    pub win: u32,
    pub loses: u32,
    pub played: u32,
    pub rank: u32,
    /// Rating change from this match, once scored.
    pub score: Option<i32>,
    pub team: Team,
}

impl SessionPlayer {
    /// Initials for the avatar, e.g. "ER" for "Elon Rektler".
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .collect()
    }

    /// Win rate as a whole percentage of matches played.
    pub fn win_rate(&self) -> u32 {
        if self.played == 0 {
            0
        } else {
            self.win * 100 / self.played
        }
    }
}

/// Details of one session shown on its detail screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionInfo {
    pub title: String,
    pub field_name: String,
    pub date: String,
    pub time: String,
    pub entry_fee: String,
    pub format: String,
    pub host: String,
    pub team_a: String,
    pub team_b: String,
    /// Team scores, unset until the result is in.
    pub team_a_score: Option<i32>,
    pub team_b_score: Option<i32>,
    pub champion: Option<Team>,
}

impl SessionInfo {
    pub fn team_name(&self, team: Team) -> &str {
        match team {
            Team::A => &self.team_a,
            Team::B => &self.team_b,
        }
    }
}

/// The final result of a played session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult {
    pub title: String,
    pub winner: String,
    pub winner_points: i32,
    pub loser: String,
    pub loser_points: i32,
    pub date: String,
    pub time: String,
    pub venue: String,
}

/// Time span of the revenue chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Period {
    #[default]
    ThisWeek,
    ThisMonth,
}

impl Period {
    pub fn label(&self) -> &'static str {
        match self {
            Period::ThisWeek => "This Week",
            Period::ThisMonth => "This Month",
        }
    }

    /// Label of the comparison series.
    pub fn previous_label(&self) -> &'static str {
        match self {
            Period::ThisWeek => "Last Week",
            Period::ThisMonth => "Last Month",
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            Period::ThisWeek => Period::ThisMonth,
            Period::ThisMonth => Period::ThisWeek,
        }
    }
}

/// One x-axis point of the revenue chart.
#[derive(Debug, Clone, PartialEq)]
pub struct RevenuePoint {
    pub label: &'static str,
    pub current: f64,
    pub previous: f64,
}

/// The signed-in administrator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminProfile {
    pub name: String,
    pub email: String,
}

impl AdminProfile {
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .flat_map(char::to_uppercase)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_fields() {
        let player = Player {
            id: "#CH 565".to_string(),
            user_name: "Red Seafood Resort".to_string(),
            email: "name@gmail.com".to_string(),
            country: "United Kingdom".to_string(),
            session_point: "$256.26".to_string(),
            matches_played: 25,
            status: "Pending".to_string(),
        };
        assert_eq!(player.field("matches_played"), Some(CellValue::Number(25)));
        assert_eq!(
            player.field("status"),
            Some(CellValue::Text("Pending".to_string()))
        );
        assert_eq!(player.field("missing"), None);
    }

    #[test]
    fn test_initials() {
        let profile = AdminProfile {
            name: "sidney paul".to_string(),
            email: "comet@gmail.com".to_string(),
        };
        assert_eq!(profile.initials(), "SP");
    }

    #[test]
    fn test_win_rate() {
        let player = SessionPlayer {
            id: 1,
            name: "Elon Rektler".to_string(),
            win: 95,
            loses: 25,
            played: 195,
            rank: 254,
            score: None,
            team: Team::A,
        };
        assert_eq!(player.win_rate(), 48);
        assert_eq!(player.initials(), "ER");
    }

    #[test]
    fn test_period_toggle() {
        assert_eq!(Period::ThisWeek.toggle(), Period::ThisMonth);
        assert_eq!(Period::ThisMonth.toggle().label(), "This Week");
    }
}
