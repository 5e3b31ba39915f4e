//! Home footer component
//!
//! Renders the key hints for the focused pane

use super::super::state::{HomeFocus, HomeState};
use ratatui::Frame;
use ratatui::layout::Alignment;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

pub fn render_footer(f: &mut Frame, area: ratatui::layout::Rect, state: &HomeState) {
    let footer_text = match state.focus {
        HomeFocus::Grid => "[Arrows] Move | [Enter] Add | [1-6] Quick add | [P] Period | [Tab] Menu | [Q] Logout",
        HomeFocus::Sidebar => "[Up/Down] Move | [Enter] Open | [P] Period | [Tab] Grid | [Q] Logout",
    };

    let footer = Paragraph::new(footer_text)
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::LightGreen)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_type(BorderType::Thick),
        );
    f.render_widget(footer, area);
}
