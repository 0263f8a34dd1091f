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

//! Visual styling and color configuration for the TUI.
//!
//! This module defines the light and dark color palettes and provides
//! utilities for converting colors between Ratatui's internal representation
//! and external formats (such as hexadecimal strings) used for terminal
//! emulator styling.

use ratatui::style::Color;

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Theme {
    pub(crate) dark: bool,

    pub(crate) background_colour: Color,
    pub(crate) accent_colour: Color,
    pub(crate) border_colour: Color,
    pub(crate) error_colour: Color,

    pub(crate) display_fg: Color,
    pub(crate) previous_fg: Color,

    pub(crate) digit_key_bg: Color,
    pub(crate) function_key_bg: Color,
    pub(crate) operator_key_bg: Color,
    pub(crate) key_fg: Color,
    pub(crate) pressed_key_bg: Color,

    pub(crate) commander_colour: Color,
    pub(crate) commander_bg: Color,
}

impl Default for Theme {
    // Returns the standard application theme.
    fn default() -> Self {
        Self::light()
    }
}

impl Theme {
    pub(crate) fn for_mode(dark: bool) -> Self {
        if dark { Self::dark() } else { Self::light() }
    }

    pub(crate) const fn light() -> Self {
        Self {
            dark: false,

            background_colour: Color::Rgb(240, 240, 245),
            accent_colour: Color::Rgb(255, 149, 0),
            border_colour: Color::Rgb(180, 180, 190),
            error_colour: Color::Rgb(214, 48, 49),

            display_fg: Color::Rgb(30, 30, 35),
            previous_fg: Color::Rgb(110, 110, 120),

            digit_key_bg: Color::Rgb(255, 255, 255),
            function_key_bg: Color::Rgb(210, 210, 218),
            operator_key_bg: Color::Rgb(255, 190, 100),
            key_fg: Color::Rgb(30, 30, 35),
            pressed_key_bg: Color::Rgb(160, 160, 170),

            commander_colour: Color::Rgb(30, 30, 35),
            commander_bg: Color::Rgb(225, 225, 232),
        }
    }

    pub(crate) const fn dark() -> Self {
        Self {
            dark: true,

            background_colour: Color::Rgb(40, 20, 50),
            accent_colour: Color::Rgb(250, 189, 47),
            border_colour: Color::Rgb(102, 102, 102),
            error_colour: Color::Rgb(255, 99, 99),

            display_fg: Color::Rgb(255, 255, 255),
            previous_fg: Color::Rgb(162, 161, 166),

            digit_key_bg: Color::Rgb(60, 40, 72),
            function_key_bg: Color::Rgb(80, 60, 95),
            operator_key_bg: Color::Rgb(120, 90, 30),
            key_fg: Color::Rgb(255, 255, 255),
            pressed_key_bg: Color::Rgb(179, 157, 219),

            commander_colour: Color::Rgb(255, 215, 0),
            commander_bg: Color::Rgb(50, 30, 60),
        }
    }

    /// Converts a [`ratatui::style::Color`] into a CSS-style hexadecimal
    /// string.
    ///
    /// This is primarily used to set the terminal emulator's background color
    /// via escape sequences. Returns `None` for anything but an `Rgb` color.
    pub(crate) fn to_hex(colour: Color) -> Option<String> {
        match colour {
            Color::Rgb(r, g, b) => Some(format!("#{:02x}{:02x}{:02x}", r, g, b)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_conversion() {
        assert_eq!(Theme::to_hex(Color::Rgb(40, 20, 50)).as_deref(), Some("#281432"));
        assert_eq!(Theme::to_hex(Color::Red), None);
    }

    #[test]
    fn mode_selects_palette() {
        assert!(Theme::for_mode(true).dark);
        assert!(!Theme::for_mode(false).dark);
        assert_eq!(Theme::default(), Theme::light());
    }
}
