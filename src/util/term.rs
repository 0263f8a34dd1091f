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

//! Terminal environment and styling utilities.
//!
//! This module changes the terminal emulator's background color using OSC
//! (Operating System Command) escape sequences, so that the whole window
//! follows the light or dark theme.
//!
//! # Compatibility
//!
//! Most modern terminals (XTerm, iTerm2, Alacritty, Kitty) support these
//! sequences, others silently ignore them.

use std::io::{self, Write};

fn osc_set_background(hex_color: &str) -> String {
    format!("\x1b]11;{}\x07", hex_color)
}

const OSC_RESET_BACKGROUND: &str = "\x1b]111\x07";

/// Sets the terminal background color using an OSC 11 escape sequence.
///
/// # Arguments
///
/// * `hex_color` - A string slice representing the color (e.g., `"#1e1e1e"`).
pub(crate) fn set_terminal_bg(hex_color: &str) -> io::Result<()> {
    let mut stdout = io::stdout();
    stdout.write_all(osc_set_background(hex_color).as_bytes())?;
    stdout.flush()
}

/// Resets the terminal background to the user's original color.
pub(crate) fn reset_terminal_bg() -> io::Result<()> {
    let mut stdout = io::stdout();
    stdout.write_all(OSC_RESET_BACKGROUND.as_bytes())?;
    stdout.flush()
}
