//! Modal dialogs.
//!
//! Dialogs stack on top of the current screen and take all key input until
//! dismissed.

use crate::ui::form::centered;
use crate::utility::Utility;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dialog {
    /// Informational message, dismissed with Enter or Esc.
    Message { title: String, text: String },
    /// Numeric entry for one utility.
    NumericEntry { utility: Utility, input: String },
    /// "Do you want to logout?"
    ConfirmLogout { yes_selected: bool },
}

/// Result of feeding a key to the top dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogOutcome {
    /// Keep the dialog open.
    Keep,
    /// Remove the dialog.
    Close,
    /// Save the typed text for the utility. The dialog stays open until the
    /// save succeeds.
    Submit { utility: Utility, input: String },
    /// Logout confirmed.
    Logout,
}

impl Dialog {
    pub fn message(title: impl Into<String>, text: impl Into<String>) -> Self {
        Dialog::Message {
            title: title.into(),
            text: text.into(),
        }
    }

    pub fn entry(utility: Utility) -> Self {
        Dialog::NumericEntry {
            utility,
            input: String::new(),
        }
    }

    pub fn confirm_logout() -> Self {
        Dialog::ConfirmLogout {
            yes_selected: false,
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> DialogOutcome {
        match self {
            Dialog::Message { .. } => match key.code {
                KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') => DialogOutcome::Close,
                _ => DialogOutcome::Keep,
            },
            Dialog::NumericEntry { utility, input } => match key.code {
                KeyCode::Esc => DialogOutcome::Close,
                KeyCode::Enter => DialogOutcome::Submit {
                    utility: *utility,
                    input: input.clone(),
                },
                KeyCode::Backspace => {
                    input.pop();
                    DialogOutcome::Keep
                }
                KeyCode::Char(c) => {
                    input.push(c);
                    DialogOutcome::Keep
                }
                _ => DialogOutcome::Keep,
            },
            Dialog::ConfirmLogout { yes_selected } => match key.code {
                KeyCode::Char('y') | KeyCode::Char('Y') => DialogOutcome::Logout,
                KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => DialogOutcome::Close,
                KeyCode::Left | KeyCode::Right | KeyCode::Tab => {
                    *yes_selected = !*yes_selected;
                    DialogOutcome::Keep
                }
                KeyCode::Enter if *yes_selected => DialogOutcome::Logout,
                KeyCode::Enter => DialogOutcome::Close,
                _ => DialogOutcome::Keep,
            },
        }
    }

    pub fn render(&self, f: &mut Frame, area: Rect) {
        match self {
            Dialog::Message { title, text } => {
                let body = vec![
                    Line::from(text.as_str()),
                    Line::from(""),
                    Line::from(Span::styled(
                        "[Enter] OK",
                        Style::default().fg(Color::DarkGray),
                    )),
                ];
                render_box(f, area, title, body, 44, 7);
            }
            Dialog::NumericEntry { utility, input } => {
                let body = vec![
                    Line::from(format!("Enter {} usage ({}):", utility, utility.unit())),
                    Line::from(""),
                    Line::from(Span::styled(
                        format!("> {}▏", input),
                        Style::default()
                            .fg(Color::White)
                            .add_modifier(Modifier::BOLD),
                    )),
                    Line::from(""),
                    Line::from(Span::styled(
                        "[Enter] Save   [Esc] Cancel",
                        Style::default().fg(Color::DarkGray),
                    )),
                ];
                render_box(f, area, &format!("Add {}", utility), body, 44, 9);
            }
            Dialog::ConfirmLogout { yes_selected } => {
                let selected = Style::default()
                    .fg(Color::Black)
                    .bg(Color::LightGreen)
                    .add_modifier(Modifier::BOLD);
                let plain = Style::default().fg(Color::Gray);
                let (yes_style, no_style) = if *yes_selected {
                    (selected.bg(Color::LightRed), plain)
                } else {
                    (plain, selected)
                };
                let body = vec![
                    Line::from("Do you want to logout?"),
                    Line::from(""),
                    Line::from(vec![
                        Span::styled(" Yes ", yes_style),
                        Span::raw("   "),
                        Span::styled(" No ", no_style),
                    ]),
                ];
                render_box(f, area, "Logout", body, 36, 7);
            }
        }
    }
}

fn render_box(f: &mut Frame, area: Rect, title: &str, body: Vec<Line>, width: u16, height: u16) {
    let rect = centered(area, width, height);
    let block = Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(Style::default().fg(Color::LightGreen))
        .style(Style::default().bg(Color::Rgb(24, 32, 28)));
    let paragraph = Paragraph::new(body)
        .alignment(Alignment::Center)
        .block(block)
        .wrap(Wrap { trim: true });
    f.render_widget(Clear, rect);
    f.render_widget(paragraph, rect);
}
