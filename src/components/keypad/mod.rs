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

//! The on-screen keypad.
//!
//! The keypad mirrors the keyboard: every key issues one calculator
//! [`Action`]. It remembers where each key was last drawn so that mouse
//! clicks can be mapped back to keys, briefly flashes a key after it has been
//! pressed and highlights the operator that is currently pending.

mod event;
mod render;

use std::time::{Duration, Instant};

use ratatui::layout::{Position, Rect};

use crate::calculator::{Action, Operation};

/// How long a key stays highlighted after being pressed.
pub(crate) const FLASH_DURATION: Duration = Duration::from_millis(100);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum KeyKind {
    Digit,
    Function,
    Operator,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct KeyCap {
    pub(crate) label: &'static str,
    pub(crate) action: Action,
    /// Relative width within the row.
    pub(crate) width: u16,
}

impl KeyCap {
    const fn new(label: &'static str, action: Action) -> Self {
        Self { label, action, width: 1 }
    }

    const fn wide(label: &'static str, action: Action) -> Self {
        Self { label, action, width: 2 }
    }

    pub(crate) fn kind(&self) -> KeyKind {
        match self.action {
            Action::Digit(_) | Action::DecimalPoint => KeyKind::Digit,
            Action::Clear | Action::Delete => KeyKind::Function,
            Action::Operator(_) | Action::Equals => KeyKind::Operator,
        }
    }
}

pub(crate) const KEY_ROWS: [&[KeyCap]; 5] = [
    &[
        KeyCap::wide("AC", Action::Clear),
        KeyCap::new("DEL", Action::Delete),
        KeyCap::new("÷", Action::Operator(Operation::Divide)),
    ],
    &[
        KeyCap::new("7", Action::Digit('7')),
        KeyCap::new("8", Action::Digit('8')),
        KeyCap::new("9", Action::Digit('9')),
        KeyCap::new("×", Action::Operator(Operation::Multiply)),
    ],
    &[
        KeyCap::new("4", Action::Digit('4')),
        KeyCap::new("5", Action::Digit('5')),
        KeyCap::new("6", Action::Digit('6')),
        KeyCap::new("-", Action::Operator(Operation::Subtract)),
    ],
    &[
        KeyCap::new("1", Action::Digit('1')),
        KeyCap::new("2", Action::Digit('2')),
        KeyCap::new("3", Action::Digit('3')),
        KeyCap::new("+", Action::Operator(Operation::Add)),
    ],
    &[
        KeyCap::wide("0", Action::Digit('0')),
        KeyCap::new(".", Action::DecimalPoint),
        KeyCap::new("=", Action::Equals),
    ],
];

#[derive(Debug, Default)]
pub(crate) struct Keypad {
    // Screen area of every key as of the last draw
    key_areas: Vec<(Rect, Action)>,
    flash: Option<(Action, Instant)>,
    active_operation: Option<Operation>,
}

impl Keypad {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// The operator to highlight, normally the pending operation.
    pub(crate) fn set_active_operation(&mut self, operation: Option<Operation>) {
        self.active_operation = operation;
    }

    pub(crate) fn active_operation(&self) -> Option<Operation> {
        self.active_operation
    }

    pub(crate) fn flash(&mut self, action: Action, now: Instant) {
        self.flash = Some((action, now));
    }

    pub(crate) fn is_flashing_at(&self, action: Action, now: Instant) -> bool {
        match self.flash {
            Some((flashed, at)) => {
                flashed == action && now.saturating_duration_since(at) < FLASH_DURATION
            }
            None => false,
        }
    }

    /// Drops the flash once it has been shown for [`FLASH_DURATION`].
    pub(crate) fn expire_flash(&mut self, now: Instant) {
        if let Some((_, at)) = self.flash {
            if now.saturating_duration_since(at) >= FLASH_DURATION {
                self.flash = None;
            }
        }
    }

    /// The action of the key drawn at the given terminal cell, if any.
    pub(crate) fn action_at(&self, column: u16, row: u16) -> Option<Action> {
        let position = Position::new(column, row);
        self.key_areas
            .iter()
            .find(|(area, _)| area.contains(position))
            .map(|(_, action)| *action)
    }
}
