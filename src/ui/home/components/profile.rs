//! User profile component

use super::super::state::HomeState;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph};

fn row(label: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:<14}", label), Style::default().fg(Color::Gray)),
        Span::styled(
            value,
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
    ])
}

pub fn render_profile(f: &mut Frame, area: Rect, state: &HomeState) {
    let missing = || "-".to_string();
    let user = state.user.as_ref();
    let tracked = state
        .tracked_utilities()
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    let tracked = if tracked.is_empty() { missing() } else { tracked };
    let lines = vec![
        row("Username", state.session.username.clone()),
        row(
            "Full Name",
            user.and_then(|u| u.name.clone()).unwrap_or_else(missing),
        ),
        row(
            "Email",
            user.and_then(|u| u.email.clone()).unwrap_or_else(missing),
        ),
        row("User ID", state.session.user_id.to_string()),
        Line::from(""),
        row("Entries", state.history.len().to_string()),
        row(
            "Last entry",
            state
                .history
                .last()
                .map(|r| r.entry_date.to_string())
                .unwrap_or_else(missing),
        ),
        row("Tracking", tracked),
        row(
            "Signed in at",
            state.session.logged_in_at.format("%Y-%m-%d %H:%M").to_string(),
        ),
    ];

    let block = Block::default()
        .title("USER PROFILE")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Green))
        .padding(Padding::uniform(1));
    f.render_widget(Paragraph::new(lines).block(block), area);
}
