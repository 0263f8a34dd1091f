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

//! UI rendering logic for the keypad.
//!
//! Keys are laid out row by row, each row split by the relative width of
//! its keys. The area of every key is recorded for mouse hit testing.

use std::time::Instant;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Padding, Paragraph},
};

use crate::{
    calculator::Action,
    components::keypad::{KEY_ROWS, KeyCap, KeyKind, Keypad},
    render::Render,
    theme::Theme,
};

impl Render for Keypad {
    fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let now = Instant::now();
        self.key_areas.clear();

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints(KEY_ROWS.iter().map(|_| Constraint::Fill(1)))
            .spacing(1)
            .split(area);

        for (keys, row_area) in KEY_ROWS.iter().zip(rows.iter()) {
            let columns = Layout::default()
                .direction(Direction::Horizontal)
                .constraints(keys.iter().map(|key| Constraint::Fill(key.width)))
                .spacing(1)
                .split(*row_area);

            for (key, key_area) in keys.iter().zip(columns.iter()) {
                let style = self.key_style(key, theme, now);
                draw_key(f, *key_area, key.label, style);
                self.key_areas.push((*key_area, key.action));
            }
        }
    }
}

impl Keypad {
    fn key_style(&self, key: &KeyCap, theme: &Theme, now: Instant) -> Style {
        let is_active = matches!(
            (key.action, self.active_operation()),
            (Action::Operator(op), Some(active)) if op == active
        );

        let bg = if self.is_flashing_at(key.action, now) {
            theme.pressed_key_bg
        } else if is_active {
            theme.accent_colour
        } else {
            match key.kind() {
                KeyKind::Digit => theme.digit_key_bg,
                KeyKind::Function => theme.function_key_bg,
                KeyKind::Operator => theme.operator_key_bg,
            }
        };

        Style::default()
            .fg(theme.key_fg)
            .bg(bg)
            .add_modifier(Modifier::BOLD)
    }
}

fn draw_key(f: &mut Frame, area: Rect, label: &str, style: Style) {
    // Vertically centre the label
    let block = Block::default().padding(Padding::top(area.height.saturating_sub(1) / 2));

    let key = Paragraph::new(label)
        .alignment(Alignment::Center)
        .style(style)
        .block(block);

    f.render_widget(key, area);
}

#[cfg(test)]
mod tests {
    use ratatui::{Terminal, backend::TestBackend};

    use super::*;
    use crate::calculator::Operation;

    #[test]
    fn draw_records_key_areas() {
        let mut terminal = Terminal::new(TestBackend::new(39, 14)).unwrap();
        let mut keypad = Keypad::new();
        let theme = Theme::default();

        terminal
            .draw(|f| {
                let area = f.area();
                keypad.draw(f, area, &theme);
            })
            .unwrap();

        assert_eq!(keypad.key_areas.len(), 18);
        // Top left is the clear key, bottom right is equals
        assert_eq!(keypad.action_at(0, 0), Some(Action::Clear));
        assert_eq!(keypad.action_at(38, 13), Some(Action::Equals));
    }

    #[test]
    fn active_operator_uses_accent() {
        let mut keypad = Keypad::new();
        let theme = Theme::default();
        keypad.set_active_operation(Some(Operation::Add));

        let plus = KEY_ROWS[3][3];
        let minus = KEY_ROWS[2][3];
        let now = Instant::now();

        assert_eq!(keypad.key_style(&plus, &theme, now).bg, Some(theme.accent_colour));
        assert_eq!(keypad.key_style(&minus, &theme, now).bg, Some(theme.operator_key_bg));
    }

    #[test]
    fn flashing_key_uses_pressed_colour() {
        let mut keypad = Keypad::new();
        let theme = Theme::default();
        let now = Instant::now();
        keypad.flash(Action::Digit('5'), now);

        let five = KEY_ROWS[2][1];
        assert_eq!(keypad.key_style(&five, &theme, now).bg, Some(theme.pressed_key_bg));
    }
}
