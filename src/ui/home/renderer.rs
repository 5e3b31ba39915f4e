//! Home screen main renderer

use super::components::{footer, header, overview, profile, settings, sidebar};
use super::state::{HomeState, HomeView};
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::{Color, Style};
use ratatui::widgets::Block;

pub fn render_home(f: &mut Frame, state: &HomeState) {
    if state.ui_config.with_background_color {
        f.render_widget(
            Block::default().style(Style::default().bg(Color::Rgb(14, 24, 18))),
            f.area(),
        );
    }

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Fill(1),
            Constraint::Length(2),
        ])
        .margin(1)
        .split(f.area());

    header::render_header(f, main_chunks[0], state);

    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(24), Constraint::Fill(1)])
        .split(main_chunks[1]);

    sidebar::render_sidebar(f, content_chunks[0], state);
    match state.view {
        HomeView::Overview => overview::render_overview(f, content_chunks[1], state),
        HomeView::Profile => profile::render_profile(f, content_chunks[1], state),
        HomeView::Settings => settings::render_settings(f, content_chunks[1], state),
    }
    footer::render_footer(f, main_chunks[2], state);
}
