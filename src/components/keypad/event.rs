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

//! Mouse handling for the keypad.
//!
//! A left click on a key flashes it and yields the key's action, clicks
//! anywhere else are ignored.

use std::time::Instant;

use crossterm::event::{Event, MouseButton, MouseEvent, MouseEventKind};

use crate::{calculator::Action, components::Keypad};

impl Keypad {
    pub(crate) fn process_event(&mut self, event: &Event, now: Instant) -> Option<Action> {
        match event {
            Event::Mouse(MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column,
                row,
                ..
            }) => {
                let action = self.action_at(*column, *row)?;
                self.flash(action, now);
                Some(action)
            }

            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyModifiers;
    use ratatui::layout::Rect;

    use super::*;

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    fn keypad() -> Keypad {
        let mut keypad = Keypad::new();
        keypad.key_areas = vec![
            (Rect::new(0, 0, 5, 3), Action::Digit('7')),
            (Rect::new(6, 0, 5, 3), Action::Equals),
        ];
        keypad
    }

    #[test]
    fn left_click_presses_key() {
        let now = Instant::now();
        let mut keypad = keypad();

        let action = keypad.process_event(&mouse(MouseEventKind::Down(MouseButton::Left), 7, 1), now);

        assert_eq!(action, Some(Action::Equals));
        assert!(keypad.is_flashing_at(Action::Equals, now));
    }

    #[test]
    fn other_mouse_events_are_ignored() {
        let now = Instant::now();
        let mut keypad = keypad();

        assert_eq!(keypad.process_event(&mouse(MouseEventKind::Down(MouseButton::Right), 1, 1), now), None);
        assert_eq!(keypad.process_event(&mouse(MouseEventKind::Up(MouseButton::Left), 1, 1), now), None);
        assert_eq!(keypad.process_event(&mouse(MouseEventKind::Down(MouseButton::Left), 5, 1), now), None);
        assert!(!keypad.is_flashing_at(Action::Digit('7'), now));
    }
}
