//! Settings screen and the account edit / password change flow.
//!
//! The flow runs Edit → Verify → Password. Each step is a centered dialog
//! over the read-only profile; Esc closes whichever step is open.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use tracing::{debug, info};

use crate::data::{mock, AdminProfile};
use crate::ui::components::{InputFilter, Modal, TextInput};
use crate::ui::theme::theme;

/// Digits in a verification code.
pub const CODE_LEN: usize = 4;

/// Code pre-filled in the Verify step.
const DEFAULT_CODE: &str = "4709";

pub const MISMATCH_ERROR: &str = "Confirm Password does not match the same as New Password";
pub const EMPTY_PASSWORD_ERROR: &str = "Password cannot be empty";
pub const INCOMPLETE_CODE_ERROR: &str = "Enter the 4-digit code";

/// Step of the account flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsStep {
    Edit,
    Verify,
    Password,
}

/// Which password field has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PasswordField {
    New,
    Confirm,
}

/// Actions returned from the settings view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingsAction {
    PasswordChanged,
}

pub struct SettingsView {
    profile: AdminProfile,
    step: Option<SettingsStep>,
    name: TextInput,
    code: TextInput,
    password: TextInput,
    confirm: TextInput,
    password_field: PasswordField,
    error: Option<&'static str>,
}

impl Default for SettingsView {
    fn default() -> Self {
        Self::new()
    }
}

impl SettingsView {
    pub fn new() -> Self {
        let profile = mock::admin_profile();
        Self {
            name: TextInput::with_value(profile.name.clone()).with_placeholder("Full name"),
            profile,
            step: None,
            code: Self::code_input(),
            password: TextInput::masked().with_placeholder("Password"),
            confirm: TextInput::masked().with_placeholder("Confirm Password"),
            password_field: PasswordField::New,
            error: None,
        }
    }

    fn code_input() -> TextInput {
        TextInput::with_value(DEFAULT_CODE)
            .with_max_len(CODE_LEN)
            .with_filter(InputFilter::Digits)
    }

    pub fn profile(&self) -> &AdminProfile {
        &self.profile
    }

    /// Whether a dialog has focus.
    pub fn is_editing(&self) -> bool {
        self.step.is_some()
    }

    /// Open `step`, resetting its inputs.
    pub fn open(&mut self, step: SettingsStep) {
        debug!(?step, "Opening settings step");
        self.error = None;
        match step {
            SettingsStep::Edit => self.name.set_value(self.profile.name.clone()),
            SettingsStep::Verify => self.code = Self::code_input(),
            SettingsStep::Password => {
                self.password.clear();
                self.confirm.clear();
                self.password_field = PasswordField::New;
            }
        }
        self.step = Some(step);
    }

    pub fn close(&mut self) {
        self.step = None;
        self.error = None;
    }

    pub fn handle_input(&mut self, key: KeyEvent) -> Option<SettingsAction> {
        let Some(step) = self.step else {
            match (key.code, key.modifiers) {
                (KeyCode::Char('e'), KeyModifiers::NONE) => self.open(SettingsStep::Edit),
                (KeyCode::Char('c'), KeyModifiers::NONE) => self.open(SettingsStep::Verify),
                _ => {}
            }
            return None;
        };

        if key.code == KeyCode::Esc {
            self.close();
            return None;
        }

        match step {
            SettingsStep::Edit => {
                if key.code == KeyCode::Enter {
                    self.save_name();
                } else {
                    self.name.handle_input(key);
                }
                None
            }
            SettingsStep::Verify => {
                if key.code == KeyCode::Enter {
                    self.submit_code();
                } else if self.code.handle_input(key) {
                    self.error = None;
                }
                None
            }
            SettingsStep::Password => self.handle_password_input(key),
        }
    }

    fn save_name(&mut self) {
        let name = self.name.value().trim();
        if !name.is_empty() {
            self.profile.name = name.to_string();
        }
        info!(name = %self.profile.name, "Account info saved");
        self.open(SettingsStep::Verify);
    }

    fn submit_code(&mut self) {
        if self.code.value().chars().count() == CODE_LEN {
            self.open(SettingsStep::Password);
        } else {
            self.error = Some(INCOMPLETE_CODE_ERROR);
        }
    }

    fn handle_password_input(&mut self, key: KeyEvent) -> Option<SettingsAction> {
        match key.code {
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
                self.password_field = match self.password_field {
                    PasswordField::New => PasswordField::Confirm,
                    PasswordField::Confirm => PasswordField::New,
                };
                None
            }
            KeyCode::Enter => self.submit_password(),
            _ => {
                let input = match self.password_field {
                    PasswordField::New => &mut self.password,
                    PasswordField::Confirm => &mut self.confirm,
                };
                if input.handle_input(key) {
                    self.error = None;
                }
                None
            }
        }
    }

    fn submit_password(&mut self) -> Option<SettingsAction> {
        if self.password.is_empty() {
            self.error = Some(EMPTY_PASSWORD_ERROR);
            return None;
        }
        if self.password.value() != self.confirm.value() {
            debug!("Password confirmation mismatch");
            self.error = Some(MISMATCH_ERROR);
            return None;
        }
        info!("Password changed");
        self.close();
        Some(SettingsAction::PasswordChanged)
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let t = theme();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(7), Constraint::Min(0)])
            .split(area);

        let lines = vec![
            Line::from(vec![
                Span::styled(
                    format!(" {} ", self.profile.initials()),
                    Style::default()
                        .fg(t.selection_fg)
                        .bg(t.accent)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw("  "),
                Span::styled(self.profile.name.clone(), t.title_style()),
            ]),
            Line::default(),
            Line::from(vec![
                Span::styled("Full name  ", Style::default().fg(t.muted)),
                Span::styled(self.profile.name.clone(), Style::default().fg(t.fg)),
            ]),
            Line::from(vec![
                Span::styled("Email      ", Style::default().fg(t.muted)),
                Span::styled(self.profile.email.clone(), Style::default().fg(t.fg)),
            ]),
        ];
        frame.render_widget(
            Paragraph::new(lines).block(
                Block::default()
                    .title(" Personal Information ")
                    .title_style(t.title_style())
                    .borders(Borders::ALL)
                    .border_style(t.border_style(self.step.is_none())),
            ),
            chunks[0],
        );

        match self.step {
            None => {}
            Some(SettingsStep::Edit) => {
                let inner = Modal::new("Edit Account Info", 50, 8).render(frame, area);
                let rows = dialog_rows(inner, 1);
                self.name.render(frame, rows[0], "Full name", true);
                self.render_footer(frame, rows[1], "[Enter] save  [Esc] cancel");
            }
            Some(SettingsStep::Verify) => {
                let inner = Modal::new("Verify Code", 50, 9).render(frame, area);
                let rows = dialog_rows(inner, 1);
                self.code.render(frame, rows[0], "Code", true);
                self.render_footer(frame, rows[1], "Enter the 4-digit code.  [Enter] submit");
            }
            Some(SettingsStep::Password) => {
                let inner = Modal::new("Set New Password", 56, 12).render(frame, area);
                let rows = dialog_rows(inner, 2);
                self.password.render(
                    frame,
                    rows[0],
                    "New Password",
                    self.password_field == PasswordField::New,
                );
                self.confirm.render(
                    frame,
                    rows[1],
                    "Confirm Password",
                    self.password_field == PasswordField::Confirm,
                );
                self.render_footer(frame, rows[2], "[Tab] next field  [Enter] submit");
            }
        }
    }

    /// Inline error if any, otherwise a hint.
    fn render_footer(&self, frame: &mut Frame, area: Rect, hint: &str) {
        let t = theme();
        let line = match self.error {
            Some(error) => Line::from(Span::styled(error, Style::default().fg(t.error))),
            None => Line::from(Span::styled(hint.to_string(), Style::default().fg(t.muted))),
        };
        frame.render_widget(Paragraph::new(line), area);
    }
}

/// `inputs` three-row input areas followed by a footer row.
fn dialog_rows(area: Rect, inputs: usize) -> std::rc::Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            (0..inputs)
                .map(|_| Constraint::Length(3))
                .chain([Constraint::Min(1)]),
        )
        .split(area)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_str(view: &mut SettingsView, s: &str) {
        for c in s.chars() {
            view.handle_input(key(KeyCode::Char(c)));
        }
    }

    fn at_password_step() -> SettingsView {
        let mut view = SettingsView::new();
        view.handle_input(key(KeyCode::Char('c')));
        view.handle_input(key(KeyCode::Enter));
        assert_eq!(view.step, Some(SettingsStep::Password));
        view
    }

    #[test]
    fn test_edit_saves_name_and_moves_to_verify() {
        let mut view = SettingsView::new();
        view.handle_input(key(KeyCode::Char('e')));
        assert_eq!(view.step, Some(SettingsStep::Edit));
        view.handle_input(KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL));
        type_str(&mut view, "Ada Lovelace");
        view.handle_input(key(KeyCode::Enter));
        assert_eq!(view.step, Some(SettingsStep::Verify));
        assert_eq!(view.profile().name, "Ada Lovelace");
    }

    #[test]
    fn test_verify_accepts_only_digits() {
        let mut view = SettingsView::new();
        view.handle_input(key(KeyCode::Char('c')));
        view.handle_input(KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL));
        type_str(&mut view, "1a2b");
        view.handle_input(key(KeyCode::Enter));
        assert_eq!(view.step, Some(SettingsStep::Verify));
        assert_eq!(view.error, Some(INCOMPLETE_CODE_ERROR));

        type_str(&mut view, "3456");
        assert_eq!(view.error, None);
        view.handle_input(key(KeyCode::Enter));
        assert_eq!(view.step, Some(SettingsStep::Password));
    }

    #[test]
    fn test_password_mismatch_shows_error() {
        let mut view = at_password_step();
        type_str(&mut view, "secret");
        view.handle_input(key(KeyCode::Tab));
        type_str(&mut view, "secreT");
        assert_eq!(view.handle_input(key(KeyCode::Enter)), None);
        assert_eq!(view.step, Some(SettingsStep::Password));
        assert_eq!(view.error, Some(MISMATCH_ERROR));

        view.handle_input(key(KeyCode::Backspace));
        assert_eq!(view.error, None);
    }

    #[test]
    fn test_password_match_closes_flow() {
        let mut view = at_password_step();
        type_str(&mut view, "secret");
        view.handle_input(key(KeyCode::Tab));
        type_str(&mut view, "secret");
        assert_eq!(
            view.handle_input(key(KeyCode::Enter)),
            Some(SettingsAction::PasswordChanged)
        );
        assert_eq!(view.step, None);
    }

    #[test]
    fn test_empty_password_rejected() {
        let mut view = at_password_step();
        assert_eq!(view.handle_input(key(KeyCode::Enter)), None);
        assert_eq!(view.error, Some(EMPTY_PASSWORD_ERROR));
    }

    #[test]
    fn test_esc_closes_any_step() {
        let mut view = at_password_step();
        view.handle_input(key(KeyCode::Esc));
        assert_eq!(view.step, None);
        assert!(!view.is_editing());
    }

    #[test]
    fn test_render_mismatch_error() {
        let mut view = at_password_step();
        type_str(&mut view, "a");
        view.handle_input(key(KeyCode::Enter));
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                view.render(f, area);
            })
            .unwrap();
        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("Confirm Password does not match"));
        assert!(text.contains("•"));
    }
}
