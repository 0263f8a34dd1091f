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

//! Input actions understood by the calculator.
//!
//! The presentation layer turns every key press or keypad click into exactly
//! one [`Action`] and hands it to [`Calculator::apply`].

use tracing::{debug, warn};

use crate::calculator::{CalcError, Calculator, Operation};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Action {
    Digit(char),
    DecimalPoint,
    Operator(Operation),
    Equals,
    Clear,
    Delete,
}

impl Action {
    /// Maps a typed character to an action.
    ///
    /// Returns `None` for characters the calculator does not understand so
    /// that the caller can pass them on.
    pub(crate) fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '0'..='9' => Some(Action::Digit(symbol)),
            '.' | ',' => Some(Action::DecimalPoint),
            '=' => Some(Action::Equals),
            _ => Operation::from_symbol(symbol).map(Action::Operator),
        }
    }
}

impl Calculator {
    /// Applies a single action as one atomic transition.
    ///
    /// # Errors
    ///
    /// Returns the [`CalcError`] raised by the transition. By the time the
    /// error is returned the calculator has already recovered from it.
    pub(crate) fn apply(&mut self, action: Action) -> Result<(), CalcError> {
        let result = match action {
            Action::Digit(digit) => self.append_digit(digit),
            Action::DecimalPoint => {
                self.append_decimal_point();
                Ok(())
            }
            Action::Operator(operation) => self.choose_operation(operation),
            Action::Equals => self.calculate(),
            Action::Clear => {
                self.clear();
                Ok(())
            }
            Action::Delete => {
                self.delete_last_character();
                Ok(())
            }
        };

        match &result {
            Ok(()) => debug!(?action, operand = self.current_operand(), "applied action"),
            Err(e) if e.resets_state() => warn!(?action, error = %e, "calculation failed, state reset"),
            Err(e) => debug!(?action, error = %e, "input rejected"),
        }

        result
    }
}
