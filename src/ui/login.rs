//! Login screen module

use crate::ui::form::{Form, Submit, TextField};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::prelude::{Color, Style};
use ratatui::widgets::Paragraph;

const USERNAME: usize = 0;
const PASSWORD: usize = 1;
const SIGN_IN: usize = 0;
const CREATE_ACCOUNT: usize = 1;

#[derive(Debug, Clone)]
pub struct LoginState {
    pub form: Form,
}

/// What the app should do after a key press on the login screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginAction {
    None,
    SignIn { username: String, password: String },
    OpenRegister,
    Quit,
}

impl LoginState {
    /// A fresh login form, optionally prefilled with a username.
    pub fn new(username: Option<&str>) -> Self {
        let mut form = Form::new(
            vec![TextField::new("Username"), TextField::masked("Password")],
            vec!["Sign In", "Create Account"],
        );
        if let Some(username) = username {
            form.fields[USERNAME].value = username.to_string();
            form.set_focus(PASSWORD);
        }
        Self { form }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> LoginAction {
        match key.code {
            KeyCode::Esc => LoginAction::Quit,
            KeyCode::Tab | KeyCode::Down => {
                self.form.focus_next();
                LoginAction::None
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.form.focus_prev();
                LoginAction::None
            }
            KeyCode::Backspace => {
                self.form.backspace();
                LoginAction::None
            }
            KeyCode::Char(c) => {
                self.form.insert_char(c);
                LoginAction::None
            }
            KeyCode::Enter => match self.form.enter() {
                Submit::Button(SIGN_IN) => LoginAction::SignIn {
                    username: self.form.value(USERNAME),
                    password: self.form.value(PASSWORD),
                },
                Submit::Button(CREATE_ACCOUNT) => LoginAction::OpenRegister,
                _ => LoginAction::None,
            },
            _ => LoginAction::None,
        }
    }

    /// Clears the password after a failed attempt.
    pub fn reset_password(&mut self) {
        self.form.fields[PASSWORD].value.clear();
        self.form.set_focus(PASSWORD);
    }
}

/// Renders the login card and key hints.
pub fn render_login(f: &mut Frame, state: &LoginState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Fill(1), Constraint::Length(1)])
        .split(f.area());

    state
        .form
        .render(f, chunks[0], "EcoStar Pro", "Sustainability Starts With You.");

    let hints = Paragraph::new("[Tab] Next field | [Enter] Select | [Esc] Exit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(hints, chunks[1]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn press(state: &mut LoginState, code: KeyCode) -> LoginAction {
        state.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn type_text(state: &mut LoginState, text: &str) {
        for c in text.chars() {
            press(state, KeyCode::Char(c));
        }
    }

    #[test]
    fn enter_through_fields_signs_in() {
        let mut state = LoginState::new(None);
        type_text(&mut state, " alice ");
        assert_eq!(press(&mut state, KeyCode::Enter), LoginAction::None);
        type_text(&mut state, "pw1");
        assert_eq!(
            press(&mut state, KeyCode::Enter),
            LoginAction::SignIn {
                username: "alice".to_string(),
                password: "pw1".to_string()
            }
        );
    }

    #[test]
    fn create_account_button_opens_register() {
        let mut state = LoginState::new(None);
        press(&mut state, KeyCode::BackTab);
        assert_eq!(press(&mut state, KeyCode::Enter), LoginAction::OpenRegister);
    }

    #[test]
    fn prefilled_username_focuses_password() {
        let mut state = LoginState::new(Some("alice"));
        type_text(&mut state, "pw1");
        assert_eq!(state.form.value(USERNAME), "alice");
        assert_eq!(state.form.value(PASSWORD), "pw1");

        state.reset_password();
        assert_eq!(state.form.value(PASSWORD), "");
    }

    #[test]
    fn escape_quits() {
        let mut state = LoginState::new(None);
        assert_eq!(press(&mut state, KeyCode::Esc), LoginAction::Quit);
    }
}
