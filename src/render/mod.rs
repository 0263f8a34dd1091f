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

//! User interface rendering logic.
//!
//! This module handles the translation of the [`App`] state into visual
//! widgets using the `ratatui` framework. It is responsible for layout
//! management, widget styling, and terminal frame composition.
//!
//! # Rendering Pipeline
//!
//! The primary entry point is the [`draw`] function, which is called after
//! every processed event. Rendering only reads the calculator state; the
//! keypad additionally records where its keys were drawn.

mod commander;
mod display;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Flex, Layout, Rect},
    style::Style,
    widgets::Block,
};

use crate::{
    App,
    render::{commander::draw_commander, display::draw_display},
    theme::Theme,
};

const CALCULATOR_WIDTH: u16 = 39;

// Border plus the previous and current lines
const DISPLAY_HEIGHT: u16 = 4;

pub(crate) trait Render {
    fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme);
}

/// Renders the user interface to the terminal frame.
///
/// The calculator is centred horizontally: the display sits on top of the
/// keypad, and the command line occupies the bottom row of the terminal.
pub(crate) fn draw(f: &mut Frame, app: &mut App) {
    let area = f.area();

    f.render_widget(
        Block::default().style(Style::default().bg(app.theme.background_colour)),
        area,
    );

    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);

    let column = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(CALCULATOR_WIDTH)])
        .flex(Flex::Center)
        .split(outer[0]);

    let body = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(DISPLAY_HEIGHT), Constraint::Min(0)])
        .vertical_margin(1)
        .split(column[0]);

    draw_display(f, body[0], app);

    app.keypad.draw(f, body[1], &app.theme);

    draw_commander(f, outer[1], app);
}

#[cfg(test)]
mod tests {
    use ratatui::{Terminal, backend::TestBackend};

    use super::*;
    use crate::{
        calculator::{Action, Operation},
        config::AppConfig,
        notice::Notice,
    };

    fn render(app: &mut App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(60, 24)).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();

        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn shows_both_display_lines() {
        let mut app = App::new(AppConfig::default());
        for action in [
            Action::Digit('1'),
            Action::Digit('2'),
            Action::Digit('3'),
            Action::Digit('4'),
            Action::Operator(Operation::Add),
            Action::Digit('9'),
        ] {
            app.calculator.apply(action).unwrap();
        }

        let screen = render(&mut app);

        assert!(screen.contains("1,234 +"));
        assert!(screen.contains('9'));
    }

    #[test]
    fn notice_replaces_current_line() {
        let mut app = App::new(AppConfig::default());
        app.notice = Some(Notice::new(
            "Cannot divide by zero",
            std::time::Duration::from_secs(2),
            std::time::Instant::now(),
        ));

        let screen = render(&mut app);

        assert!(screen.contains("Cannot divide by zero"));
    }

    #[test]
    fn keypad_is_clickable_after_draw() {
        let mut app = App::new(AppConfig::default());
        render(&mut app);

        let found = (0..60u16)
            .flat_map(|x| (0..24u16).map(move |y| (x, y)))
            .filter_map(|(x, y)| app.keypad.action_at(x, y))
            .any(|action| action == Action::Equals);

        assert!(found);
    }
}
