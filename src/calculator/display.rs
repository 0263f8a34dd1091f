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

//! Display formatting for the calculator state.
//!
//! Operands are stored exactly as typed. This module renders them for the
//! screen, grouping the integer part with thousand separators and switching
//! to scientific notation once the integer part grows too long to show.

use crate::calculator::Calculator;

// Integer parts longer than this are shown in scientific notation
const MAX_GROUPED_DIGITS: usize = 12;

const SCIENTIFIC_PRECISION: usize = 6;

const GROUP_SEPARATOR: char = ',';

/// The two display lines for a calculator state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Display {
    /// The operand being typed, or the last result.
    pub(crate) current: String,
    /// The pending left operand and its operator, empty if none.
    pub(crate) previous: String,
}

impl Display {
    pub(crate) fn of(calculator: &Calculator) -> Self {
        let previous = format_operand(calculator.previous_operand());
        let previous = match calculator.pending_operation() {
            Some(operation) => format!("{} {}", previous, operation.symbol()),
            None => previous,
        };

        Self {
            current: format_operand(calculator.current_operand()),
            previous,
        }
    }
}

/// Formats an operand for display.
///
/// # Examples
///
/// ```
/// assert_eq!(format_operand("1234567"), "1,234,567");
/// assert_eq!(format_operand("1234.50"), "1,234.50");
/// assert_eq!(format_operand("1234567890123"), "1.234568e+12");
/// ```
pub(crate) fn format_operand(operand: &str) -> String {
    if operand.is_empty() {
        return String::new();
    }

    let (integer, fraction) = match operand.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (operand, None),
    };
    let (sign, digits) = match integer.strip_prefix('-') {
        Some(digits) => ("-", digits),
        None => ("", integer),
    };

    if digits.len() > MAX_GROUPED_DIGITS {
        if let Ok(value) = operand.parse::<f64>() {
            return format_scientific(value);
        }
    }

    let grouped = group_thousands(digits);
    match fraction {
        Some(fraction) => format!("{sign}{grouped}.{fraction}"),
        None => format!("{sign}{grouped}"),
    }
}

fn group_thousands(digits: &str) -> String {
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            result.push(GROUP_SEPARATOR);
        }
        result.push(c);
    }
    result
}

// Always signs the exponent, e.g. "1.234568e+12"
fn format_scientific(value: f64) -> String {
    let formatted = format!("{:.*e}", SCIENTIFIC_PRECISION, value);
    match formatted.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => formatted,
    }
}
