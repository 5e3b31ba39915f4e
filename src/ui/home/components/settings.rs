//! Settings component
//!
//! Read-only view of the active configuration

use super::super::state::HomeState;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::prelude::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};

pub fn render_settings(f: &mut Frame, area: Rect, state: &HomeState) {
    let config = &state.ui_config;
    let config_path = config
        .config_path
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "(not available)".to_string());
    let entry = |label: &str, value: String| {
        Line::from(vec![
            Span::styled(format!("{:<18}", label), Style::default().fg(Color::Gray)),
            Span::styled(value, Style::default().fg(Color::White)),
        ])
    };

    let lines = vec![
        entry("Database", config.database_path.display().to_string()),
        entry("Config file", config_path),
        entry(
            "Splash duration",
            format!("{}s", config.splash_duration.as_secs()),
        ),
        entry(
            "Background color",
            if config.with_background_color { "on" } else { "off" }.to_string(),
        ),
        entry("Analysis period", state.period.to_string()),
        Line::from(""),
        Line::from(Span::styled(
            "Edit the config file to change these values.",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let block = Block::default()
        .title("SETTINGS")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Green))
        .padding(Padding::uniform(1));
    f.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: false }),
        area,
    );
}
