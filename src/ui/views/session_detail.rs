//! Session detail screen.
//!
//! Shows both teams as player cards. The session info sheet, the match
//! result dialog and a per-player score sheet open on top of the cards and
//! take all keys while open.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use tracing::{debug, info};

use super::player_detail::render_back_title;
use super::DetailAction;
use crate::data::{mock, MatchResult, Session, SessionInfo, SessionPlayer, Team};
use crate::ui::components::{status_span, InputFilter, Modal, TextInput};
use crate::ui::theme::theme;

/// Prefilled in the score field when a player sheet opens.
const DEFAULT_SCORE: &str = "50";
const SCORE_MAX_LEN: usize = 3;

/// What is drawn over the team cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    None,
    Info,
    Result,
    /// Details and score entry for the player at this index.
    Player(usize),
}

pub struct SessionDetailView {
    session: Session,
    info: SessionInfo,
    result: MatchResult,
    players: Vec<SessionPlayer>,
    focused: usize,
    overlay: Overlay,
    score: TextInput,
    disabled: bool,
}

impl SessionDetailView {
    pub fn new(session: Session) -> Self {
        Self {
            session,
            info: mock::session_info(),
            result: mock::match_result(),
            players: mock::session_players(),
            focused: 0,
            overlay: Overlay::None,
            score: score_input(),
            disabled: false,
        }
    }

    /// The score field of an open player sheet has focus.
    pub fn is_editing(&self) -> bool {
        matches!(self.overlay, Overlay::Player(_))
    }

    pub fn handle_input(&mut self, key: KeyEvent) -> Option<DetailAction> {
        match self.overlay {
            Overlay::None => self.handle_cards_input(key),
            Overlay::Info => self.handle_info_input(key),
            Overlay::Result => {
                if matches!(
                    key.code,
                    KeyCode::Esc | KeyCode::Enter | KeyCode::Char('m')
                ) {
                    self.overlay = Overlay::None;
                }
                None
            }
            Overlay::Player(index) => match key.code {
                KeyCode::Esc => {
                    self.overlay = Overlay::None;
                    None
                }
                KeyCode::Enter => self.submit_score(index),
                _ => {
                    self.score.handle_input(key);
                    None
                }
            },
        }
    }

    fn handle_cards_input(&mut self, key: KeyEvent) -> Option<DetailAction> {
        match (key.code, key.modifiers) {
            (KeyCode::Esc, _) => return Some(DetailAction::Back),
            (KeyCode::Char('i'), KeyModifiers::NONE) => self.overlay = Overlay::Info,
            (KeyCode::Char('m'), KeyModifiers::NONE) => self.overlay = Overlay::Result,
            (KeyCode::Enter, _) => {
                if let Some(player) = self.players.get(self.focused) {
                    debug!(player = player.id, "Opening player sheet");
                    self.score = score_input();
                    self.overlay = Overlay::Player(self.focused);
                }
            }
            (KeyCode::Char('j'), KeyModifiers::NONE) | (KeyCode::Down, _) => {
                if self.focused + 1 < self.players.len() {
                    self.focused += 1;
                }
            }
            (KeyCode::Char('k'), KeyModifiers::NONE) | (KeyCode::Up, _) => {
                self.focused = self.focused.saturating_sub(1);
            }
            _ => {}
        }
        None
    }

    fn handle_info_input(&mut self, key: KeyEvent) -> Option<DetailAction> {
        match (key.code, key.modifiers) {
            (KeyCode::Esc, _) | (KeyCode::Char('i'), KeyModifiers::NONE) => {
                self.overlay = Overlay::None;
            }
            (KeyCode::Enter, _) => {
                debug!(session = %self.session.id, "Submitting final result");
                self.overlay = Overlay::Result;
            }
            (KeyCode::Char('d'), KeyModifiers::NONE) => {
                self.overlay = Overlay::None;
                if !self.disabled {
                    self.disabled = true;
                    info!(session = %self.session.id, "Match disabled");
                    return Some(DetailAction::Notify(format!(
                        "Match {} disabled",
                        self.session.id
                    )));
                }
            }
            _ => {}
        }
        None
    }

    /// Store the entered score on the player and close the sheet.
    /// An empty field keeps the sheet open.
    fn submit_score(&mut self, index: usize) -> Option<DetailAction> {
        let score: i32 = self.score.value().parse().ok()?;
        let player = self.players.get_mut(index)?;
        player.score = Some(score);
        self.overlay = Overlay::None;
        debug!(player = player.id, score, "Score submitted");
        Some(DetailAction::Notify(format!(
            "Score {} submitted for {}",
            score, player.name
        )))
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let t = theme();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(2),
                Constraint::Min(10),
            ])
            .split(area);

        render_back_title(frame, chunks[0], "Session Details");
        let mut header = vec![
            Span::styled(
                format!("{}  {}", self.session.id, self.session.session_name),
                Style::default().fg(t.fg),
            ),
            Span::raw("  "),
            status_span(&self.session.status),
            Span::styled(
                format!("  Players {}", self.session.player),
                Style::default().fg(t.muted),
            ),
        ];
        if self.disabled {
            header.push(Span::styled(
                "  Disabled",
                Style::default().fg(t.error).add_modifier(Modifier::BOLD),
            ));
        }
        frame.render_widget(Paragraph::new(Line::from(header)), chunks[1]);

        let teams = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(chunks[2]);
        self.render_team(frame, teams[0], Team::A);
        self.render_team(frame, teams[1], Team::B);

        match self.overlay {
            Overlay::None => {}
            Overlay::Info => self.render_info(frame, area),
            Overlay::Result => self.render_result(frame, area),
            Overlay::Player(index) => {
                if let Some(player) = self.players.get(index) {
                    self.render_player_sheet(frame, area, player);
                }
            }
        }
    }

    fn render_team(&self, frame: &mut Frame, area: Rect, team: Team) {
        let t = theme();
        let block = Block::default()
            .title(format!(" {} ", team.label()))
            .title_style(t.title_style())
            .borders(Borders::ALL)
            .border_style(t.border_style(false));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let members: Vec<(usize, &SessionPlayer)> = self
            .players
            .iter()
            .enumerate()
            .filter(|(_, p)| p.team == team)
            .collect();
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints(members.iter().map(|_| Constraint::Length(4)))
            .split(inner);
        for ((index, player), row) in members.into_iter().zip(rows.iter()) {
            render_player_card(frame, *row, player, index == self.focused);
        }
    }

    fn render_info(&self, frame: &mut Frame, area: Rect) {
        let t = theme();
        let inner = Modal::sheet("Session Info", 44).render(frame, area);
        let info = &self.info;
        let champion = info.champion.map_or_else(
            || "-".to_string(),
            |team| format!("{} - {}", team.label(), info.team_name(team)),
        );

        let mut lines = vec![
            Line::from(Span::styled(info.title.clone(), t.title_style())),
            Line::default(),
        ];
        lines.extend(
            [
                ("Field", info.field_name.as_str()),
                ("Date", info.date.as_str()),
                ("Time", info.time.as_str()),
                ("Entry Fee", info.entry_fee.as_str()),
                ("Format", info.format.as_str()),
                ("Host", info.host.as_str()),
            ]
            .iter()
            .map(|(label, value)| label_line(label, value)),
        );
        lines.push(Line::default());
        lines.push(Line::from(Span::styled("Team Info", t.title_style())));
        lines.push(label_line("Team A", &info.team_a));
        lines.push(label_line("Score", &score_text(info.team_a_score)));
        lines.push(label_line("Team B", &info.team_b));
        lines.push(label_line("Score", &score_text(info.team_b_score)));
        lines.push(label_line("Champion", &champion));
        lines.push(Line::default());
        lines.push(Line::from(vec![
            Span::styled("[Enter] ", Style::default().fg(t.accent)),
            Span::styled("Submit Final Result  ", Style::default().fg(t.fg)),
            Span::styled("[d] ", Style::default().fg(t.accent)),
            Span::styled("Disable Match", Style::default().fg(t.error)),
        ]));
        frame.render_widget(Paragraph::new(lines), inner);
    }

    fn render_result(&self, frame: &mut Frame, area: Rect) {
        let t = theme();
        let inner = Modal::new("Match Result", 50, 13).render(frame, area);
        let r = &self.result;
        let lines = vec![
            Line::from(Span::styled(r.title.clone(), t.title_style())),
            Line::default(),
            Line::from(vec![
                Span::styled("Winner  ", Style::default().fg(t.muted)),
                Span::styled(r.winner.clone(), Style::default().fg(t.fg)),
                Span::styled(
                    format!("  {:+}", r.winner_points),
                    Style::default().fg(t.success),
                ),
            ]),
            Line::from(vec![
                Span::styled("Loser   ", Style::default().fg(t.muted)),
                Span::styled(r.loser.clone(), Style::default().fg(t.fg)),
                Span::styled(format!("  {:+}", r.loser_points), Style::default().fg(t.error)),
            ]),
            Line::default(),
            label_line("Date", &r.date),
            label_line("Time", &r.time),
            label_line("Venue", &r.venue),
        ];
        frame.render_widget(Paragraph::new(lines), inner);
    }

    fn render_player_sheet(&self, frame: &mut Frame, area: Rect, player: &SessionPlayer) {
        let t = theme();
        let inner = Modal::sheet("Player Details", 40).render(frame, area);
        let lines = vec![
            Line::from(Span::styled(player.name.clone(), t.title_style())),
            Line::from(Span::styled(
                format!("{} - {}", player.team.label(), self.info.team_name(player.team)),
                Style::default().fg(t.muted),
            )),
            Line::default(),
            label_line("Win", &player.win.to_string()),
            label_line("Loses", &player.loses.to_string()),
            label_line("Played", &player.played.to_string()),
            label_line("Win rate", &format!("{}%", player.win_rate())),
            label_line("Rank", &player.rank.to_string()),
            label_line("Score", &score_text(player.score)),
            Line::default(),
            Line::from(Span::styled("Score Management", t.title_style())),
        ];
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(lines.len() as u16),
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Min(0),
            ])
            .split(inner);
        frame.render_widget(Paragraph::new(lines), rows[0]);
        self.score.render(frame, rows[1], "Match Score", true);
        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled("[Enter] ", Style::default().fg(t.accent)),
                Span::styled("Score Submit", Style::default().fg(t.fg)),
            ])),
            rows[2],
        );
    }
}

fn score_input() -> TextInput {
    TextInput::with_value(DEFAULT_SCORE)
        .with_filter(InputFilter::Digits)
        .with_max_len(SCORE_MAX_LEN)
        .with_placeholder("Enter score")
}

fn label_line(label: &str, value: &str) -> Line<'static> {
    let t = theme();
    Line::from(vec![
        Span::styled(format!("{:<10}", label), Style::default().fg(t.muted)),
        Span::styled(value.to_string(), Style::default().fg(t.fg)),
    ])
}

/// Rating change as "+20", "-20" or "-" before scoring.
fn score_text(score: Option<i32>) -> String {
    score.map_or_else(|| "-".to_string(), |s| format!("{:+}", s))
}

fn render_player_card(frame: &mut Frame, area: Rect, player: &SessionPlayer, focused: bool) {
    let t = theme();
    let score_color = match player.score {
        Some(s) if s < 0 => t.error,
        Some(_) => t.success,
        None => t.dim,
    };
    let lines = vec![
        Line::from(vec![
            Span::styled(
                format!(" {} ", player.initials()),
                Style::default()
                    .fg(t.selection_fg)
                    .bg(t.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
            Span::styled(player.name.clone(), Style::default().fg(t.fg)),
            Span::styled(
                format!("  {}", score_text(player.score)),
                Style::default().fg(score_color),
            ),
        ]),
        Line::from(Span::styled(
            format!(
                "W {}  L {}  Played {}  Rank {}",
                player.win, player.loses, player.played, player.rank
            ),
            Style::default().fg(t.muted),
        )),
    ];
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(t.border_style(focused));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}
