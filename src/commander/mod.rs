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

//! Command-line input logic and state management.
//!
//! Typing `:` opens a small command line at the bottom of the screen. The
//! typed text is handled by a text input component, and on `Enter` the
//! command is parsed and dispatched as an application event.
//!
//! Supported commands:
//!
//! * `q`, `quit` - exit the application.
//! * `c`, `clear` - clear the calculator.
//! * `theme` - toggle between the light and dark theme.
//! * `theme dark`, `theme light` - select a theme.

use std::sync::mpsc::Sender;

use anyhow::Result;
use crossterm::event::{Event, KeyCode};
use tracing::debug;
use tui_input::{Input, backend::crossterm::EventHandler};

use crate::{calculator::Action, events::AppEvent};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Command {
    Quit,
    Clear,
    ToggleTheme,
    SetDarkMode(bool),
}

impl Command {
    /// Parses a command line.
    ///
    /// Returns a message suitable for display if the command is not
    /// recognised.
    pub(crate) fn parse(buffer: &str) -> Result<Self, String> {
        let parts: Vec<&str> = buffer.split_whitespace().collect();

        match parts.as_slice() {
            ["q"] | ["quit"] => Ok(Command::Quit),
            ["c"] | ["clear"] => Ok(Command::Clear),
            ["theme"] => Ok(Command::ToggleTheme),
            ["theme", "dark"] => Ok(Command::SetDarkMode(true)),
            ["theme", "light"] => Ok(Command::SetDarkMode(false)),
            ["theme", other, ..] => Err(format!("Unknown theme: {other}")),
            [cmd, ..] => Err(format!("Unknown command: {cmd}")),
            [] => Err("Empty command".to_string()),
        }
    }

    fn into_event(self) -> AppEvent {
        match self {
            Command::Quit => AppEvent::ExitApplication,
            Command::Clear => AppEvent::Action(Action::Clear),
            Command::ToggleTheme => AppEvent::ToggleTheme,
            Command::SetDarkMode(dark) => AppEvent::SetDarkMode(dark),
        }
    }
}

pub(crate) struct Commander {
    active: bool,
    pub(crate) input: Input,
}

impl Commander {
    pub(crate) fn new() -> Self {
        Self {
            active: false,
            input: Input::default(),
        }
    }

    pub(crate) fn active(&self) -> bool {
        self.active
    }

    /// Handles a terminal event, returning `true` if it was consumed.
    ///
    /// While the command line is open it consumes every key event.
    pub(crate) fn handle_event(&mut self, event: &Event, event_tx: &Sender<AppEvent>) -> bool {
        let Event::Key(key_event) = event else {
            return false;
        };

        if !self.active {
            if key_event.code == KeyCode::Char(':') {
                self.active = true;
                return true;
            }
            return false;
        }

        match key_event.code {
            KeyCode::Esc => {
                self.close();
            }

            KeyCode::Enter => {
                let buffer = self.input.value().trim().to_string();
                self.close();
                if !buffer.is_empty() {
                    if let Err(e) = self.run_command(&buffer, event_tx) {
                        debug!(error = %e, "command was not delivered");
                    }
                }
            }

            _ => {
                // Delegate all other key events to the managed input component.
                self.input.handle_event(event);
            }
        }

        true
    }

    fn close(&mut self) {
        self.active = false;
        self.input.reset();
    }

    fn run_command(&self, buffer: &str, event_tx: &Sender<AppEvent>) -> Result<()> {
        debug!(command = buffer, "running command");

        match Command::parse(buffer) {
            Ok(command) => event_tx.send(command.into_event())?,
            Err(message) => event_tx.send(AppEvent::Notice(message))?,
        }

        Ok(())
    }
}
