//! Home header component
//!
//! Renders the title bar with the logged-in user and the analysis period

use super::super::state::HomeState;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

pub fn render_header(f: &mut Frame, area: ratatui::layout::Rect, state: &HomeState) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    let version = env!("CARGO_PKG_VERSION");
    let title = Paragraph::new(format!("ECOSTAR PRO v{}", version))
        .alignment(Alignment::Left)
        .style(
            Style::default()
                .fg(Color::LightGreen)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_type(BorderType::Thick),
        );
    f.render_widget(title, chunks[0]);

    let who = Paragraph::new(format!(
        "{}  |  Period: {}",
        state.session.username, state.period
    ))
    .alignment(Alignment::Right)
    .style(Style::default().fg(Color::Gray))
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_type(BorderType::Thick),
    );
    f.render_widget(who, chunks[1]);
}
