// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Render the calculator display.
//!
//! The display has two right-aligned lines: the pending operand with its
//! operator, and the operand being typed. A notice, when present, takes the
//! place of the second line.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::App;

pub(crate) fn draw_display(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border_colour))
        .padding(Padding::horizontal(1));

    let inner_area = block.inner(area);
    f.render_widget(block, area);

    let lines = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(inner_area);

    let display = app.calculator.display();

    let previous = Line::styled(display.previous, Style::default().fg(theme.previous_fg));
    f.render_widget(Paragraph::new(previous).alignment(Alignment::Right), lines[0]);

    let current = match &app.notice {
        Some(notice) => Line::styled(
            notice.message().to_string(),
            Style::default()
                .fg(theme.error_colour)
                .add_modifier(Modifier::BOLD),
        ),
        None => Line::styled(
            display.current,
            Style::default()
                .fg(theme.display_fg)
                .add_modifier(Modifier::BOLD),
        ),
    };
    f.render_widget(Paragraph::new(current).alignment(Alignment::Right), lines[1]);
}
