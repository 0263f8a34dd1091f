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

//! # Calculator TUI.
//!
//! A terminal calculator with an on-screen keypad, keyboard and mouse input,
//! and a light and a dark theme.
//!
//! It uses an event-driven architecture where:
//!
//! * The **Main Thread** owns the calculator, manages the terminal lifecycle
//!   and renders the UI after every event.
//! * An **Input Thread** forwards raw keyboard and mouse events.
//! * A **Tick Thread** drives time-limited effects such as notices and key
//!   flashes.
//!
//! ## Architecture
//!
//! The application follows a strict setup-run-teardown pattern to ensure the
//! terminal state is preserved even when the event loop fails. Communication
//! between the input threads and the main thread is handled via
//! `std::sync::mpsc` channels. The calculator itself is only ever touched by
//! the main thread, one event at a time.

mod calculator;
mod commander;
mod components;
mod config;
mod events;
mod logging;
mod notice;
mod render;
mod theme;
mod util;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{
    io::{self},
    sync::mpsc::{self, Receiver, Sender},
    thread,
    time::Duration,
};
use tracing::{error, info};

use crate::{
    calculator::Calculator,
    commander::Commander,
    components::Keypad,
    config::AppConfig,
    events::{AppEvent, process_events},
    notice::Notice,
    theme::Theme,
};

const TICK_RATE: Duration = Duration::from_millis(100);

/// Application state.
struct App {
    pub config: AppConfig,

    pub theme: Theme,

    pub event_tx: Sender<AppEvent>,
    pub event_rx: Receiver<AppEvent>,

    pub calculator: Calculator,
    pub notice: Option<Notice>,

    pub keypad: Keypad,
    pub commander: Commander,
}

impl App {
    /// Create a new instance of application state.
    pub fn new(config: AppConfig) -> Self {
        let (event_tx, event_rx) = mpsc::channel();

        Self {
            theme: Theme::for_mode(config.dark_mode),
            config,
            event_tx,
            event_rx,
            calculator: Calculator::new(),
            notice: None,
            keypad: Keypad::new(),
            commander: Commander::new(),
        }
    }
}

/// The entry point of the application.
///
/// Initialises logging, loads the configuration, manages the terminal
/// lifecycle, and returns an error if any part of the execution fails.
fn main() -> Result<()> {
    let _log_guard = logging::init();

    let config = config::load_config();
    let mut app = App::new(config);

    let mut terminal = setup_terminal(&app)?;
    let res = run(&mut terminal, &mut app);
    restore_terminal(&mut terminal);

    if let Err(e) = &res {
        error!("application error: {e:#}");
    }
    info!("exiting");

    res.context("Application error occurred")
}

/// Prepares the terminal for the TUI application.
///
/// This function performs the following side effects:
/// * Sets the terminal background color based on the provided theme.
/// * Enables raw mode to capture all keyboard input.
/// * Switches the terminal to the alternate screen buffer and enables mouse
///   capture.
///
/// # Errors
///
/// Returns an error if raw mode cannot be enabled or if the alternate screen
/// cannot be entered.
fn setup_terminal(app: &App) -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    // Set the background of the entire terminal window, without this we'd get
    // a thin outline in the terminal's own colour
    if let Some(hex) = Theme::to_hex(app.theme.background_colour) {
        util::term::set_terminal_bg(&hex).ok();
    }

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;

    Ok(terminal)
}

/// Restores the terminal to its original state.
///
/// This reverses the changes made by [`setup_terminal`], including disabling
/// raw mode, leaving the alternate screen, and resetting the background color.
/// It also ensures the cursor is made visible again.
///
/// This function is "best-effort" and does not return a result, as it is
/// called during cleanup.
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) {
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), DisableMouseCapture, LeaveAlternateScreen).ok();
    util::term::reset_terminal_bg().ok();
    terminal.show_cursor().ok();
}

/// Starts the input and tick threads and enters the main event loop.
///
/// After spawning the threads, it hands control to [`process_events`] to
/// manage the UI and state updates.
///
/// # Errors
///
/// Returns an error if the event processing loop encounters an unrecoverable
/// application error.
fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    // Spawn a thread to translate raw terminal events to application events.
    let tx_input = app.event_tx.clone();
    thread::spawn(move || {
        loop {
            let sent = match event::read() {
                Ok(event::Event::Key(key)) => tx_input.send(AppEvent::Key(key)),
                Ok(event::Event::Mouse(mouse)) => tx_input.send(AppEvent::Mouse(mouse)),
                // Redraw on resize
                Ok(event::Event::Resize(_, _)) => tx_input.send(AppEvent::Tick),
                Ok(_) => Ok(()),
                Err(e) => {
                    error!(error = %e, "failed to read terminal event");
                    break;
                }
            };
            if sent.is_err() {
                break;
            }
        }
    });

    // Spawn a thread to send a periodic tick application event, this expires
    // notices and key flashes.
    let tx_tick = app.event_tx.clone();
    thread::spawn(move || {
        while tx_tick.send(AppEvent::Tick).is_ok() {
            thread::sleep(TICK_RATE);
        }
    });

    info!(dark_mode = app.config.dark_mode, "calculator started");

    // Application event loop, process events until the user quits
    process_events(terminal, app)
}
