//! Register screen module

use crate::auth::Registration;
use crate::ui::form::{Form, Submit, TextField};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::prelude::{Color, Style};
use ratatui::widgets::Paragraph;

const USERNAME: usize = 0;
const PASSWORD: usize = 1;
const FULL_NAME: usize = 2;
const EMAIL: usize = 3;
const REGISTER: usize = 0;
const BACK_TO_LOGIN: usize = 1;

#[derive(Debug, Clone)]
pub struct RegisterState {
    pub form: Form,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegisterAction {
    None,
    Submit(Registration),
    BackToLogin,
    Quit,
}

impl Default for RegisterState {
    fn default() -> Self {
        Self::new()
    }
}

impl RegisterState {
    pub fn new() -> Self {
        Self {
            form: Form::new(
                vec![
                    TextField::new("Username"),
                    TextField::masked("Password"),
                    TextField::new("Full Name"),
                    TextField::new("Email"),
                ],
                vec!["Register", "Go to Login"],
            ),
        }
    }

    /// The form contents, trimmed, with blank optional fields as `None`.
    pub fn registration(&self) -> Registration {
        let optional = |idx| Some(self.form.value(idx)).filter(|v: &String| !v.is_empty());
        Registration {
            username: self.form.value(USERNAME),
            password: self.form.value(PASSWORD),
            name: optional(FULL_NAME),
            email: optional(EMAIL),
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> RegisterAction {
        match key.code {
            KeyCode::Esc => RegisterAction::Quit,
            KeyCode::Tab | KeyCode::Down => {
                self.form.focus_next();
                RegisterAction::None
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.form.focus_prev();
                RegisterAction::None
            }
            KeyCode::Backspace => {
                self.form.backspace();
                RegisterAction::None
            }
            KeyCode::Char(c) => {
                self.form.insert_char(c);
                RegisterAction::None
            }
            KeyCode::Enter => match self.form.enter() {
                Submit::Button(REGISTER) => RegisterAction::Submit(self.registration()),
                Submit::Button(BACK_TO_LOGIN) => RegisterAction::BackToLogin,
                _ => RegisterAction::None,
            },
            _ => RegisterAction::None,
        }
    }
}

pub fn render_register(f: &mut Frame, state: &RegisterState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Fill(1), Constraint::Length(1)])
        .split(f.area());

    state.form.render(
        f,
        chunks[0],
        "Create New Account",
        "Join EcoStar Pro and start your sustainable journey",
    );

    let hints = Paragraph::new("[Tab] Next field | [Enter] Select | [Esc] Exit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(hints, chunks[1]);
}
