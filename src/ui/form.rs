//! Text-entry form shared by the login and register screens.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextField {
    pub label: &'static str,
    pub value: String,
    /// Render the value as bullets.
    pub masked: bool,
}

impl TextField {
    pub fn new(label: &'static str) -> Self {
        Self {
            label,
            value: String::new(),
            masked: false,
        }
    }

    pub fn masked(label: &'static str) -> Self {
        Self {
            masked: true,
            ..Self::new(label)
        }
    }

    /// Value with surrounding whitespace removed.
    pub fn trimmed(&self) -> String {
        self.value.trim().to_string()
    }

    fn shown(&self) -> String {
        if self.masked {
            "•".repeat(self.value.chars().count())
        } else {
            self.value.clone()
        }
    }
}

/// Focusable fields followed by buttons. Focus cycles through both.
#[derive(Debug, Clone)]
pub struct Form {
    pub fields: Vec<TextField>,
    pub buttons: Vec<&'static str>,
    focus: usize,
}

/// What pressing Enter in a form asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submit {
    /// Focus moved on, nothing to do.
    None,
    /// The button at this index was activated.
    Button(usize),
}

impl Form {
    pub fn new(fields: Vec<TextField>, buttons: Vec<&'static str>) -> Self {
        Self {
            fields,
            buttons,
            focus: 0,
        }
    }

    fn len(&self) -> usize {
        self.fields.len() + self.buttons.len()
    }

    #[cfg(test)]
    pub fn focus(&self) -> usize {
        self.focus
    }

    pub fn set_focus(&mut self, focus: usize) {
        self.focus = focus.min(self.len().saturating_sub(1));
    }

    pub fn focus_next(&mut self) {
        self.focus = (self.focus + 1) % self.len();
    }

    pub fn focus_prev(&mut self) {
        self.focus = (self.focus + self.len() - 1) % self.len();
    }

    pub fn focused_field_mut(&mut self) -> Option<&mut TextField> {
        self.fields.get_mut(self.focus)
    }

    pub fn value(&self, idx: usize) -> String {
        self.fields.get(idx).map(TextField::trimmed).unwrap_or_default()
    }

    pub fn insert_char(&mut self, c: char) {
        if let Some(field) = self.focused_field_mut() {
            field.value.push(c);
        }
    }

    pub fn backspace(&mut self) {
        if let Some(field) = self.focused_field_mut() {
            field.value.pop();
        }
    }

    /// Enter on a field moves to the next one; on the last field it presses
    /// the first button. Enter on a button presses it.
    pub fn enter(&mut self) -> Submit {
        let n_fields = self.fields.len();
        if self.focus + 1 < n_fields {
            self.focus += 1;
            Submit::None
        } else if self.focus + 1 == n_fields {
            Submit::Button(0)
        } else {
            Submit::Button(self.focus - n_fields)
        }
    }

    /// Renders the form inside a bordered card centred in `area`.
    pub fn render(&self, f: &mut Frame, area: Rect, title: &str, subtitle: &str) {
        let height = (self.fields.len() * 3 + self.buttons.len() + 6) as u16;
        let card = centered(area, 52, height);

        let block = Block::default()
            .title(Line::from(format!(" {} ", title)).alignment(Alignment::Center))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Green));
        let inner = block.inner(card);
        f.render_widget(block, card);

        let mut constraints = vec![Constraint::Length(2)];
        constraints.extend(self.fields.iter().map(|_| Constraint::Length(3)));
        constraints.push(Constraint::Length(1));
        constraints.extend(self.buttons.iter().map(|_| Constraint::Length(1)));
        constraints.push(Constraint::Min(0));
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(inner);

        let subtitle = Paragraph::new(subtitle.to_string())
            .alignment(Alignment::Center)
            .style(
                Style::default()
                    .fg(Color::Gray)
                    .add_modifier(Modifier::ITALIC),
            );
        f.render_widget(subtitle, rows[0]);

        for (i, field) in self.fields.iter().enumerate() {
            let focused = self.focus == i;
            let border_color = if focused { Color::LightGreen } else { Color::DarkGray };
            let mut text = field.shown();
            if focused {
                text.push('▏');
            }
            let input = Paragraph::new(text).block(
                Block::default()
                    .title(field.label)
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(border_color)),
            );
            f.render_widget(input, rows[1 + i]);
        }

        let first_button_row = 2 + self.fields.len();
        for (i, label) in self.buttons.iter().enumerate() {
            let focused = self.focus == self.fields.len() + i;
            let style = if focused {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::LightGreen)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Green)
            };
            let button = Paragraph::new(Line::from(Span::styled(format!("[ {} ]", label), style)))
                .alignment(Alignment::Center);
            f.render_widget(button, rows[first_button_row + i]);
        }
    }
}

/// A `width` x `height` rectangle centred in `area`, clipped to it.
pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
