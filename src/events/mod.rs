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

//! Application event distribution and orchestration.
//!
//! This module defines the central event-handling logic for the application,
//! bridging user input (keyboard, mouse, command line) and the periodic tick
//! with the calculator and the UI rendering pipeline.
//!
//! # Architecture
//!
//! 1. **Capture**: Events are received via the [`AppEvent`] enum through an
//!    `mpsc` channel.
//! 2. **Process**: The [`process_events`] function maps each event to at most
//!    one calculator transition, or to a presentation change such as the
//!    theme or a notice expiring.
//! 3. **Render**: After each event is processed, the UI is re-drawn using the
//!    `ratatui` terminal.

mod handlers;
mod key_handlers;

use handlers::*;
use key_handlers::process_key_event;

use std::{io::Stdout, time::Instant};

use anyhow::Result;
use crossterm::event::{Event, KeyEvent, MouseEvent};
use ratatui::{Terminal, prelude::CrosstermBackend};

use crate::{App, calculator::Action, render::draw};

#[derive(Debug)]
pub(crate) enum AppEvent {
    Key(KeyEvent),
    Mouse(MouseEvent),

    Action(Action),

    ToggleTheme,
    SetDarkMode(bool),

    Notice(String),

    Tick,

    ExitApplication,
}

/// Runs the main application loop, handling events and rendering the UI in the
/// terminal.
///
/// This function loops until a 'quit' event is received or the event channel
/// is closed.
pub(crate) fn process_events(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
) -> Result<()> {
    terminal.draw(|f| draw(f, app))?;

    while let Ok(event) = app.event_rx.recv() {
        if matches!(event, AppEvent::ExitApplication) {
            break;
        }

        process_event(app, event)?;

        terminal.draw(|f| draw(f, app))?;
    }

    Ok(())
}

fn process_event(app: &mut App, event: AppEvent) -> Result<()> {
    match event {
        AppEvent::Key(key) => process_key_event(app, key)?,
        AppEvent::Mouse(mouse) => process_mouse_event(app, mouse),
        AppEvent::Action(action) => handle_action(app, action),
        AppEvent::ToggleTheme => handle_toggle_theme(app),
        AppEvent::SetDarkMode(dark) => handle_set_dark_mode(app, dark),
        AppEvent::Notice(message) => handle_notice(app, message),
        AppEvent::Tick => handle_tick(app, Instant::now()),
        AppEvent::ExitApplication => {}
    }

    Ok(())
}

fn process_mouse_event(app: &mut App, mouse: MouseEvent) {
    let event = Event::Mouse(mouse);
    if let Some(action) = app.keypad.process_event(&event, Instant::now()) {
        handle_action(app, action);
    }
}
