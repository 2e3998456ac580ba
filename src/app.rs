//! Main application state and event loop.
//!
//! This module implements The Elm Architecture (TEA) pattern for predictable
//! state management in the TUI application.

use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace, warn};

use crate::config::Config;
use crate::data::{Earning, FieldOwner, Player, Session};
use crate::error::AppError;
use crate::events::{Event, KeyContext};
use crate::ui::{
    earnings_view, field_owners_view, players_view, render_context_help, sessions_view,
    theme::theme, DetailAction, FieldOwnerDetailView, HelpAction, HelpView, ListAction, ListView,
    Notification, NotificationKind, NotificationManager, OverviewView, PlayerDetailView,
    SessionDetailView, SettingsAction, SettingsView,
};
use crate::ui::components::Modal;

/// Critical errors stay on screen longer than ordinary toasts.
const CRITICAL_TOAST_TTL: Duration = Duration::from_secs(10);

/// Width of the navigation sidebar.
const SIDEBAR_WIDTH: u16 = 24;

/// Top-level screens listed in the sidebar.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum Screen {
    #[default]
    Overview,
    Players,
    FieldOwners,
    Sessions,
    Earnings,
    Settings,
}

impl Screen {
    /// Sidebar order.
    pub const ALL: [Screen; 6] = [
        Screen::Overview,
        Screen::Players,
        Screen::FieldOwners,
        Screen::Sessions,
        Screen::Earnings,
        Screen::Settings,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Screen::Overview => "Overview",
            Screen::Players => "Players",
            Screen::FieldOwners => "Field Owners",
            Screen::Sessions => "Sessions",
            Screen::Earnings => "Earnings",
            Screen::Settings => "Settings",
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            Screen::Overview => "▦",
            Screen::Players => "♟",
            Screen::FieldOwners => "⌂",
            Screen::Sessions => "▣",
            Screen::Earnings => "$",
            Screen::Settings => "⚙",
        }
    }

    fn index(&self) -> usize {
        Self::ALL.iter().position(|s| s == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// The screen bound to digit key `c` ('1' for the first).
    pub fn from_digit(c: char) -> Option<Self> {
        let n = c.to_digit(10)? as usize;
        n.checked_sub(1).and_then(|i| Self::ALL.get(i).copied())
    }
}

/// A detail screen opened from a list.
enum Detail {
    Player(PlayerDetailView),
    FieldOwner(FieldOwnerDetailView),
    Session(SessionDetailView),
}

impl Detail {
    fn is_editing(&self) -> bool {
        match self {
            Detail::Player(view) => view.is_editing(),
            Detail::FieldOwner(view) => view.is_editing(),
            Detail::Session(view) => view.is_editing(),
        }
    }

    fn handle_input(&mut self, key: KeyEvent) -> Option<DetailAction> {
        match self {
            Detail::Player(view) => view.handle_input(key),
            Detail::FieldOwner(view) => view.handle_input(key),
            Detail::Session(view) => view.handle_input(key),
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect) {
        match self {
            Detail::Player(view) => view.render(frame, area),
            Detail::FieldOwner(view) => view.render(frame, area),
            Detail::Session(view) => view.render(frame, area),
        }
    }
}

/// The main application struct that holds all state.
///
/// This implements the Model part of The Elm Architecture (TEA).
pub struct App {
    screen: Screen,
    /// Open detail screen, if any. Esc returns to `screen`.
    detail: Option<Detail>,
    overview: OverviewView,
    players: ListView<Player>,
    field_owners: ListView<FieldOwner>,
    sessions: ListView<Session>,
    earnings: ListView<Earning>,
    settings: SettingsView,
    help: HelpView,
    show_help: bool,
    notifications: NotificationManager,
    /// The log out dialog is open.
    confirm_quit: bool,
    should_quit: bool,
}

impl App {
    /// Create an application from loaded configuration.
    pub fn with_config(config: Config) -> Self {
        let page_size = config.settings.items_per_page;
        debug!(page_size, screen = ?config.settings.start_screen, "Creating application");
        Self {
            screen: config.settings.start_screen,
            detail: None,
            overview: OverviewView::new(),
            players: players_view(page_size),
            field_owners: field_owners_view(page_size),
            sessions: sessions_view(page_size),
            earnings: earnings_view(page_size),
            settings: SettingsView::new(),
            help: HelpView::new(),
            show_help: false,
            notifications: NotificationManager::new(),
            confirm_quit: false,
            should_quit: false,
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Returns whether the application should quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }


    /// Report an error to the user as a toast.
    pub fn handle_error(&mut self, error: &AppError) {
        let mut message = error.user_message();
        if let Some(action) = error.suggested_action() {
            message = format!("{} {}", message, action);
        }
        if error.is_critical() {
            warn!(error = %error, "Critical error occurred");
            self.notifications.push(
                Notification::new(message, NotificationKind::Error).with_ttl(CRITICAL_TOAST_TTL),
            );
        } else {
            debug!(error = %error, "Recoverable error occurred");
            self.notifications.error(message);
        }
    }

    /// Switch to a top-level screen, closing any open detail.
    pub fn switch_screen(&mut self, screen: Screen) {
        if self.screen != screen || self.detail.is_some() {
            debug!(from = ?self.screen, to = ?screen, "Switching screen");
        }
        self.screen = screen;
        self.detail = None;
    }

    /// Whether a text field or dialog on the active screen has focus.
    fn is_editing(&self) -> bool {
        if let Some(detail) = &self.detail {
            return detail.is_editing();
        }
        match self.screen {
            Screen::Overview => false,
            Screen::Players => self.players.is_editing(),
            Screen::FieldOwners => self.field_owners.is_editing(),
            Screen::Sessions => self.sessions.is_editing(),
            Screen::Earnings => self.earnings.is_editing(),
            Screen::Settings => self.settings.is_editing(),
        }
    }

    /// Update the application state based on an event.
    ///
    /// This implements the Update part of The Elm Architecture (TEA).
    pub fn update(&mut self, event: Event) {
        match event {
            Event::Key(key_event) => {
                trace!(key = ?key_event.code, modifiers = ?key_event.modifiers, "Key event");
                self.handle_key_event(key_event);
            }
            Event::Resize(width, height) => {
                trace!(width, height, "Terminal resize event");
            }
            Event::Tick => self.notifications.tick(),
        }
    }

    fn handle_key_event(&mut self, key_event: KeyEvent) {
        if let (KeyCode::Char('c'), KeyModifiers::CONTROL) = (key_event.code, key_event.modifiers) {
            info!("Quit requested");
            self.should_quit = true;
            return;
        }

        if self.confirm_quit {
            match key_event.code {
                KeyCode::Char('y') | KeyCode::Enter => {
                    info!("Quit confirmed");
                    self.should_quit = true;
                }
                KeyCode::Char('n') | KeyCode::Esc => {
                    debug!("Quit cancelled");
                    self.confirm_quit = false;
                }
                _ => {}
            }
            return;
        }

        if self.show_help {
            if let Some(HelpAction::Close) = self.help.handle_input(key_event) {
                self.show_help = false;
            }
            return;
        }

        if !self.is_editing() {
            match (key_event.code, key_event.modifiers) {
                (KeyCode::Char('?'), KeyModifiers::NONE) => {
                    self.help.reset_scroll();
                    self.show_help = true;
                    return;
                }
                (KeyCode::Char('q'), KeyModifiers::NONE) => {
                    if self.detail.take().is_some() {
                        debug!("Closing detail");
                    } else {
                        debug!("Asking to confirm quit");
                        self.confirm_quit = true;
                    }
                    return;
                }
                (KeyCode::Tab, _) => {
                    self.switch_screen(self.screen.next());
                    return;
                }
                (KeyCode::BackTab, _) => {
                    self.switch_screen(self.screen.prev());
                    return;
                }
                (KeyCode::Char(c), KeyModifiers::NONE) => {
                    if let Some(screen) = Screen::from_digit(c) {
                        self.switch_screen(screen);
                        return;
                    }
                }
                _ => {}
            }
        }

        if let Some(detail) = &mut self.detail {
            match detail.handle_input(key_event) {
                Some(DetailAction::Back) => {
                    debug!("Closing detail");
                    self.detail = None;
                }
                Some(DetailAction::Notify(message)) => self.notifications.info(message),
                None => {}
            }
            return;
        }

        match self.screen {
            Screen::Overview => self.overview.handle_input(key_event),
            Screen::Players => {
                if let Some(ListAction::Open(id)) = self.players.handle_input(key_event) {
                    if let Some(player) = self.players.find(&id).cloned() {
                        self.detail = Some(Detail::Player(PlayerDetailView::new(player)));
                    }
                }
            }
            Screen::FieldOwners => {
                if let Some(ListAction::Open(id)) = self.field_owners.handle_input(key_event) {
                    if let Some(owner) = self.field_owners.find(&id).cloned() {
                        self.detail = Some(Detail::FieldOwner(FieldOwnerDetailView::new(owner)));
                    }
                }
            }
            Screen::Sessions => {
                if let Some(ListAction::Open(id)) = self.sessions.handle_input(key_event) {
                    if let Some(session) = self.sessions.find(&id).cloned() {
                        self.detail = Some(Detail::Session(SessionDetailView::new(session)));
                    }
                }
            }
            Screen::Earnings => {
                self.earnings.handle_input(key_event);
            }
            Screen::Settings => {
                if let Some(SettingsAction::PasswordChanged) = self.settings.handle_input(key_event)
                {
                    self.notifications.success("Password updated successfully");
                }
            }
        }
    }

    /// Key hints for whatever currently has focus.
    fn key_context(&self) -> KeyContext {
        if self.confirm_quit {
            return KeyContext::Confirm;
        }
        if self.show_help {
            return KeyContext::Help;
        }
        if self.is_editing() {
            return KeyContext::Editing;
        }
        match (&self.detail, self.screen) {
            (Some(Detail::Session(_)), _) => KeyContext::SessionDetail,
            (Some(_), _) => KeyContext::DetailTable,
            (None, Screen::Overview) => KeyContext::Overview,
            (None, Screen::Earnings) => KeyContext::PlainList,
            (None, Screen::Settings) => KeyContext::Settings,
            (None, _) => KeyContext::ActionList,
        }
    }

    /// Render the application UI.
    ///
    /// This implements the View part of The Elm Architecture (TEA).
    pub fn view(&mut self, frame: &mut Frame) {
        let area = frame.area();
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(40)])
            .split(area);
        let main = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(1),    // Content
                Constraint::Length(1), // Help bar
            ])
            .split(columns[1]);

        self.render_sidebar(frame, columns[0]);
        self.render_header(frame, main[0]);
        self.render_content(frame, main[1]);
        render_context_help(frame, main[2], self.key_context(), None);

        self.notifications.render(frame, area);

        if self.show_help {
            let help_area = centered(area, 70, 30);
            self.help.render(frame, help_area);
        }
        if self.confirm_quit {
            render_quit_dialog(frame, area);
        }
    }

    fn render_sidebar(&self, frame: &mut Frame, area: Rect) {
        let t = theme();
        let mut lines = vec![
            Line::from(Span::styled(
                "  TacPlay",
                Style::default().fg(t.accent).add_modifier(Modifier::BOLD),
            )),
            Line::default(),
        ];
        for (i, screen) in Screen::ALL.iter().enumerate() {
            let text = format!(" {} {} {}", i + 1, screen.icon(), screen.label());
            let style = if *screen == self.screen {
                Style::default()
                    .fg(t.selection_fg)
                    .bg(t.selection_bg)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(t.muted)
            };
            lines.push(Line::from(Span::styled(
                format!("{:<width$}", text, width = SIDEBAR_WIDTH as usize - 2),
                style,
            )));
        }
        frame.render_widget(
            Paragraph::new(lines).block(
                Block::default()
                    .borders(Borders::RIGHT)
                    .border_style(Style::default().fg(t.border)),
            ),
            area,
        );
    }

    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let t = theme();
        let profile = self.settings.profile();
        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(t.border));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let halves = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(10), Constraint::Length(40)])
            .split(inner);
        frame.render_widget(
            Paragraph::new(Span::styled(format!(" {}", self.screen.label()), t.title_style())),
            halves[0],
        );
        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled(
                    format!(" {} ", profile.initials()),
                    Style::default().fg(t.selection_fg).bg(t.accent),
                ),
                Span::styled(format!(" {}", profile.name), Style::default().fg(t.fg)),
                Span::styled(format!("  {}", profile.email), Style::default().fg(t.muted)),
            ]))
            .alignment(Alignment::Right),
            halves[1],
        );
    }

    fn render_content(&mut self, frame: &mut Frame, area: Rect) {
        if let Some(detail) = &mut self.detail {
            detail.render(frame, area);
            return;
        }
        match self.screen {
            Screen::Overview => self.overview.render(frame, area),
            Screen::Players => self.players.render(frame, area, true),
            Screen::FieldOwners => self.field_owners.render(frame, area, true),
            Screen::Sessions => self.sessions.render(frame, area, true),
            Screen::Earnings => self.earnings.render(frame, area, true),
            Screen::Settings => self.settings.render(frame, area),
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::with_config(Config::default())
    }
}

fn render_quit_dialog(frame: &mut Frame, area: Rect) {
    let t = theme();
    let inner = Modal::new("Log Out", 44, 7).render(frame, area);
    let lines = vec![
        Line::from(Span::styled(
            "Are you sure you want to log out?",
            Style::default().fg(t.fg),
        )),
        Line::default(),
        Line::from(vec![
            Span::styled("[y/Enter] ", Style::default().fg(t.accent)),
            Span::styled("Log Out  ", Style::default().fg(t.error)),
            Span::styled("[n/Esc] ", Style::default().fg(t.accent)),
            Span::styled("Cancel", Style::default().fg(t.muted)),
        ]),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
}

/// A `width` x `height` rect centered in `area`, shrunk to fit.
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ConfigError, Settings};
    use crate::data::mock;
    use ratatui::{backend::TestBackend, Terminal};

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn press(app: &mut App, keys: &str) {
        for c in keys.chars() {
            app.update(key(KeyCode::Char(c)));
        }
    }

    fn app_on(screen: Screen) -> App {
        App::with_config(Config {
            settings: Settings {
                start_screen: screen,
                ..Settings::default()
            },
        })
    }

    fn render_text(app: &mut App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(140, 40)).unwrap();
        terminal.draw(|f| app.view(f)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_app_default() {
        let app = App::default();
        assert_eq!(app.screen(), Screen::Overview);
        assert!(!app.should_quit());
        assert!(!app.detail.is_some());
    }

    #[test]
    fn test_start_screen_from_config() {
        let app = app_on(Screen::Earnings);
        assert_eq!(app.screen(), Screen::Earnings);
    }

    #[test]
    fn test_q_asks_before_quitting() {
        let mut app = App::default();
        press(&mut app, "q");
        assert!(app.confirm_quit);
        assert!(!app.should_quit());
        assert!(render_text(&mut app).contains("Are you sure you want to log out?"));

        press(&mut app, "y");
        assert!(app.should_quit());
    }

    #[test]
    fn test_enter_confirms_quit() {
        let mut app = app_on(Screen::Players);
        press(&mut app, "q");
        app.update(key(KeyCode::Enter));
        assert!(app.should_quit());
        assert!(!app.detail.is_some());
    }

    #[test]
    fn test_quit_can_be_cancelled() {
        let mut app = App::default();
        press(&mut app, "qn");
        assert!(!app.confirm_quit);
        assert!(!app.should_quit());

        press(&mut app, "q4");
        assert!(app.confirm_quit);
        assert_eq!(app.screen(), Screen::Overview);
        app.update(key(KeyCode::Esc));
        assert!(!app.confirm_quit);
        assert!(!app.should_quit());
    }

    #[test]
    fn test_session_score_entry_does_not_switch_screens() {
        let mut app = app_on(Screen::Sessions);
        app.update(key(KeyCode::Enter));
        app.update(key(KeyCode::Enter));
        press(&mut app, "2q");
        assert_eq!(app.screen(), Screen::Sessions);
        assert!(app.detail.is_some());
        assert!(!app.confirm_quit);

        app.update(key(KeyCode::Enter));
        assert!(render_text(&mut app).contains("Score 502 submitted"));
        assert!(app.detail.is_some());
    }

    #[test]
    fn test_quit_on_ctrl_c() {
        let mut app = App::default();
        app.update(Event::Key(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL,
        )));
        assert!(app.should_quit());
    }

    #[test]
    fn test_digits_switch_screens() {
        let mut app = App::default();
        press(&mut app, "4");
        assert_eq!(app.screen(), Screen::Sessions);
        press(&mut app, "9");
        assert_eq!(app.screen(), Screen::Sessions);
        press(&mut app, "0");
        assert_eq!(app.screen(), Screen::Sessions);
    }

    #[test]
    fn test_tab_cycles_screens() {
        let mut app = App::default();
        app.update(key(KeyCode::BackTab));
        assert_eq!(app.screen(), Screen::Settings);
        app.update(key(KeyCode::Tab));
        assert_eq!(app.screen(), Screen::Overview);
    }

    #[test]
    fn test_typing_in_search_does_not_quit_or_switch() {
        let mut app = app_on(Screen::Players);
        press(&mut app, "/q2");
        assert!(!app.should_quit());
        assert_eq!(app.screen(), Screen::Players);
        assert!(app.players.is_editing());
    }

    #[test]
    fn test_open_player_detail_and_back() {
        let mut app = app_on(Screen::Players);
        app.update(key(KeyCode::Enter));
        assert!(app.detail.is_some());
        app.update(key(KeyCode::Esc));
        assert!(!app.detail.is_some());
        assert_eq!(app.screen(), Screen::Players);
    }

    #[test]
    fn test_q_from_detail_goes_back() {
        let mut app = app_on(Screen::Sessions);
        app.update(key(KeyCode::Enter));
        assert!(app.detail.is_some());
        press(&mut app, "q");
        assert!(!app.detail.is_some());
        assert!(!app.should_quit());
    }

    #[test]
    fn test_earnings_have_no_detail() {
        let mut app = app_on(Screen::Earnings);
        app.update(key(KeyCode::Enter));
        assert!(!app.detail.is_some());
    }

    #[test]
    fn test_switching_screen_closes_detail() {
        let mut app = app_on(Screen::FieldOwners);
        app.update(key(KeyCode::Enter));
        assert!(app.detail.is_some());
        press(&mut app, "1");
        assert!(!app.detail.is_some());
        assert_eq!(app.screen(), Screen::Overview);
    }

    #[test]
    fn test_help_toggle() {
        let mut app = App::default();
        press(&mut app, "?");
        assert!(app.show_help);
        press(&mut app, "4");
        assert_eq!(app.screen(), Screen::Overview);
        app.update(key(KeyCode::Esc));
        assert!(!app.show_help);
    }

    #[test]
    fn test_password_change_shows_toast() {
        let mut app = app_on(Screen::Settings);
        press(&mut app, "c");
        app.update(key(KeyCode::Enter));
        press(&mut app, "pw");
        app.update(key(KeyCode::Tab));
        press(&mut app, "pw");
        app.update(key(KeyCode::Enter));
        assert!(!app.settings.is_editing());
        assert!(render_text(&mut app).contains("Password updated successfully"));
    }

    #[test]
    fn test_handle_error_pushes_toast() {
        let mut app = App::default();
        app.handle_error(&AppError::Config(ConfigError::ValidationError(
            "tick_rate_ms must be between 10 and 1000, got 5".to_string(),
        )));
        assert!(render_text(&mut app).contains("Configuration error"));
    }

    #[test]
    fn test_render_sidebar_and_header() {
        let mut app = App::default();
        let text = render_text(&mut app);
        for screen in Screen::ALL {
            assert!(text.contains(screen.label()), "{}", screen.label());
        }
        assert!(text.contains(&mock::admin_profile().email));
    }

    #[test]
    fn test_render_is_deterministic() {
        let mut app = app_on(Screen::Players);
        assert_eq!(render_text(&mut app), render_text(&mut app));
    }

    #[test]
    fn test_screen_from_digit() {
        assert_eq!(Screen::from_digit('1'), Some(Screen::Overview));
        assert_eq!(Screen::from_digit('6'), Some(Screen::Settings));
        assert_eq!(Screen::from_digit('7'), None);
        assert_eq!(Screen::from_digit('x'), None);
    }
}
