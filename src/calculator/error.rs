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

//! Calculator error kinds.
//!
//! None of these are fatal. Each one is recovered inside the calculator and
//! handed back to the presentation layer as a short message to display for a
//! while.

use std::time::Duration;

use thiserror::Error;

/// How long a calculator error stays on screen before the display reverts.
pub(crate) const ERROR_DISPLAY_DURATION: Duration = Duration::from_millis(2000);

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CalcError {
    #[error("Cannot divide by zero")]
    DivisionByZero,

    #[error("Number too large")]
    Overflow,

    #[error("Input too long")]
    InputTooLong,
}

impl CalcError {
    /// Whether the error discarded the calculator state.
    ///
    /// Failed calculations reset the calculator, rejected input leaves the
    /// current operand as it was.
    pub(crate) fn resets_state(&self) -> bool {
        matches!(self, CalcError::DivisionByZero | CalcError::Overflow)
    }

    /// The time the message for this error should remain visible.
    pub(crate) fn display_duration(&self) -> Duration {
        ERROR_DISPLAY_DURATION
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_are_user_facing() {
        assert_eq!(CalcError::DivisionByZero.to_string(), "Cannot divide by zero");
        assert_eq!(CalcError::Overflow.to_string(), "Number too large");
        assert_eq!(CalcError::InputTooLong.to_string(), "Input too long");
    }

    #[test]
    fn only_calculation_errors_reset_state() {
        assert!(CalcError::DivisionByZero.resets_state());
        assert!(CalcError::Overflow.resets_state());
        assert!(!CalcError::InputTooLong.resets_state());
    }

    #[test]
    fn calculation_errors_are_shown_for_two_seconds() {
        assert_eq!(CalcError::Overflow.display_duration(), Duration::from_secs(2));
    }
}
