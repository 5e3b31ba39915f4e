//! Home overview component
//!
//! Renders the welcome line, the headline summary, the per-utility breakdown
//! and the grid of utility buttons

use super::super::state::{HomeFocus, HomeState};
use crate::consts::app_consts::UTILITY_GRID_COLUMNS;
use crate::utility::Utility;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};

pub fn render_overview(f: &mut Frame, area: Rect, state: &HomeState) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(5),
            Constraint::Fill(1),
        ])
        .split(area);

    let welcome = Paragraph::new(Line::from(vec![
        Span::raw("Welcome back, "),
        Span::styled(
            state.display_name().to_string(),
            Style::default()
                .fg(Color::LightGreen)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("!"),
    ]));
    f.render_widget(welcome, rows[0]);

    render_summary(f, rows[1], state);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(rows[2]);
    render_breakdown(f, columns[0], state);
    render_utility_grid(f, columns[1], state);
}

fn render_summary(f: &mut Frame, area: Rect, state: &HomeState) {
    let summary = &state.summary;
    let text = format!(
        "Electricity: {} kWh, Water: {} L, Gas: {} m3",
        format_amount(summary.electricity),
        format_amount(summary.water),
        format_amount(summary.gas)
    );
    let block = Block::default()
        .title(format!("CONSUMPTION SUMMARY ({})", state.period))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Green))
        .padding(Padding::uniform(1));
    let paragraph = Paragraph::new(text)
        .style(Style::default().fg(Color::White))
        .block(block)
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}

fn render_breakdown(f: &mut Frame, area: Rect, state: &HomeState) {
    let lines: Vec<Line> = Utility::all()
        .into_iter()
        .map(|utility| {
            Line::from(vec![
                Span::styled(
                    format!("{:<12}", utility.to_string()),
                    Style::default().fg(Color::Gray),
                ),
                Span::styled(
                    format!("{} {}", format_amount(state.totals.get(utility)), utility.unit()),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
            ])
        })
        .collect();

    let block = Block::default()
        .title("BREAKDOWN")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Green))
        .padding(Padding::horizontal(1));
    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_utility_grid(f: &mut Frame, area: Rect, state: &HomeState) {
    let focused = state.focus == HomeFocus::Grid;
    let block = Block::default()
        .title("ADD CONSUMPTION")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(if focused { Color::LightGreen } else { Color::Green }));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let utilities = Utility::all();
    let n_rows = utilities.len().div_ceil(UTILITY_GRID_COLUMNS);
    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(3); n_rows])
        .split(inner);

    for (row, row_area) in row_areas.iter().enumerate() {
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![
                Constraint::Ratio(1, UTILITY_GRID_COLUMNS as u32);
                UTILITY_GRID_COLUMNS
            ])
            .split(*row_area);
        for (col, cell) in cells.iter().enumerate() {
            let idx = row * UTILITY_GRID_COLUMNS + col;
            let Some(utility) = utilities.get(idx) else {
                continue;
            };
            let selected = focused && idx == state.grid_index;
            let style = if selected {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::LightGreen)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White).bg(Color::Rgb(30, 80, 40))
            };
            let button = Paragraph::new(format!("{} {}", idx + 1, utility))
                .alignment(Alignment::Center)
                .style(style)
                .block(Block::default().borders(Borders::NONE).padding(Padding::top(1)));
            f.render_widget(button, cell.inner(ratatui::layout::Margin::new(1, 0)));
        }
    }
}

/// Formats an amount without trailing zeros, e.g. `123.5` or `7`.
pub fn format_amount(value: f64) -> String {
    let text = format!("{:.2}", value);
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}
