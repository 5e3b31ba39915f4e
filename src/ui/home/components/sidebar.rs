//! Home sidebar component

use super::super::state::{HomeFocus, HomeState, SidebarItem};
use ratatui::Frame;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph};
use strum::IntoEnumIterator;

/// Render the navigation drawer. The selected entry is highlighted while the
/// sidebar has focus.
pub fn render_sidebar(f: &mut Frame, area: ratatui::layout::Rect, state: &HomeState) {
    let focused = state.focus == HomeFocus::Sidebar;
    let mut lines = Vec::new();

    for (i, item) in SidebarItem::iter().enumerate() {
        let selected = focused && i == state.sidebar_index;
        let base = match item {
            SidebarItem::Logout => Style::default().fg(Color::LightRed),
            _ => Style::default().fg(Color::White),
        };
        let style = if selected {
            base.bg(Color::Green).add_modifier(Modifier::BOLD)
        } else {
            base
        };

        if item == SidebarItem::AnalysisTime {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(format!(" {}:", item.label()), style)));
            lines.push(Line::from(Span::styled(
                format!("   < {} >", state.period),
                Style::default().fg(Color::LightGreen),
            )));
            lines.push(Line::from(""));
        } else {
            lines.push(Line::from(Span::styled(format!(" {}", item.label()), style)));
        }
    }

    let border_color = if focused { Color::LightGreen } else { Color::Green };
    let sidebar = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border_color))
            .padding(Padding::vertical(1)),
    );
    f.render_widget(sidebar, area);
}
