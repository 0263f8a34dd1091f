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

//! The calculator core.
//!
//! [`Calculator`] accumulates digits into operands and evaluates a single
//! pending binary operation at a time. Every public operation is a complete,
//! synchronous state transition; the presentation layer reads the result back
//! through [`Calculator::display`].
//!
//! # Sub-modules
//!
//! * [`action`]: The input actions and their dispatch.
//! * [`display`]: Formatting of the calculator state for the screen.
//! * [`error`]: The recoverable error kinds.

mod action;
mod display;
mod error;

pub(crate) use action::Action;
pub(crate) use display::Display;
pub(crate) use error::CalcError;

use tracing::warn;

/// Maximum number of characters accepted into the operand being typed.
pub(crate) const MAX_INPUT_LENGTH: usize = 15;

// Results are rounded to this many decimal places to hide binary floating
// point noise such as 0.1 + 0.2 = 0.30000000000000004.
const RESULT_DECIMAL_PLACES: i32 = 8;

const INITIAL_OPERAND: &str = "0";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    pub(crate) fn symbol(&self) -> &'static str {
        match self {
            Operation::Add => "+",
            Operation::Subtract => "-",
            Operation::Multiply => "×",
            Operation::Divide => "÷",
        }
    }

    /// Accepts both the display symbols and their ASCII keyboard equivalents.
    pub(crate) fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Operation::Add),
            '-' | '−' => Some(Operation::Subtract),
            '*' | 'x' | '×' => Some(Operation::Multiply),
            '/' | '÷' => Some(Operation::Divide),
            _ => None,
        }
    }

    /// Applies the operation and rounds the result.
    ///
    /// # Errors
    ///
    /// * [`CalcError::DivisionByZero`] if dividing by exactly zero.
    /// * [`CalcError::Overflow`] if the result is not finite.
    fn apply(self, lhs: f64, rhs: f64) -> Result<f64, CalcError> {
        let value = match self {
            Operation::Add => lhs + rhs,
            Operation::Subtract => lhs - rhs,
            Operation::Multiply => lhs * rhs,
            Operation::Divide => {
                if rhs == 0.0 {
                    return Err(CalcError::DivisionByZero);
                }
                lhs / rhs
            }
        };

        if !value.is_finite() {
            return Err(CalcError::Overflow);
        }

        Ok(round_result(value))
    }
}

/// The left-hand side of a binary operation waiting for its right operand.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct PendingOperation {
    pub(crate) operand: String,
    pub(crate) operation: Operation,
}

/// Calculator state for one session.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Calculator {
    current_operand: String,
    pending: Option<PendingOperation>,
    // Set once an operator or result is committed, the next digit then
    // starts a new operand.
    reset_screen: bool,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    pub(crate) fn new() -> Self {
        Self {
            current_operand: INITIAL_OPERAND.to_string(),
            pending: None,
            reset_screen: false,
        }
    }

    pub(crate) fn current_operand(&self) -> &str {
        &self.current_operand
    }

    /// The left operand of the pending operation, empty if there is none.
    pub(crate) fn previous_operand(&self) -> &str {
        self.pending.as_ref().map_or("", |p| p.operand.as_str())
    }

    pub(crate) fn pending_operation(&self) -> Option<Operation> {
        self.pending.as_ref().map(|p| p.operation)
    }

    /// Appends a digit to the operand being typed.
    ///
    /// # Errors
    ///
    /// Returns [`CalcError::InputTooLong`] if the operand is already at
    /// [`MAX_INPUT_LENGTH`]. The operand is left untouched.
    pub(crate) fn append_digit(&mut self, digit: char) -> Result<(), CalcError> {
        debug_assert!(digit.is_ascii_digit(), "not a digit: {digit:?}");

        if self.reset_screen {
            self.current_operand.clear();
            self.reset_screen = false;
        }

        if self.current_operand == INITIAL_OPERAND {
            // A lone zero is a placeholder, never a prefix
            if digit != '0' {
                self.current_operand = digit.to_string();
            }
            return Ok(());
        }

        if self.current_operand.len() >= MAX_INPUT_LENGTH {
            return Err(CalcError::InputTooLong);
        }

        self.current_operand.push(digit);
        Ok(())
    }

    pub(crate) fn append_decimal_point(&mut self) {
        if self.reset_screen {
            self.current_operand = INITIAL_OPERAND.to_string();
            self.reset_screen = false;
        }

        if !self.current_operand.contains('.') {
            self.current_operand.push('.');
        }
    }

    /// Installs `operation` as the pending operation.
    ///
    /// If an operation is already pending and a right operand has been typed
    /// since, that operation is evaluated first and its result becomes the
    /// new left operand. Choosing an operator straight after another one just
    /// replaces it.
    ///
    /// # Errors
    ///
    /// Returns the error of the forced evaluation, in which case the
    /// calculator has been reset and `operation` is not installed.
    pub(crate) fn choose_operation(&mut self, operation: Operation) -> Result<(), CalcError> {
        if self.current_operand.is_empty() && self.pending.is_none() {
            return Ok(());
        }

        if self.pending.is_some() && !self.reset_screen {
            self.calculate()?;
        }

        self.pending = Some(PendingOperation {
            operand: self.current_operand.clone(),
            operation,
        });
        self.reset_screen = true;

        Ok(())
    }

    /// Evaluates the pending operation.
    ///
    /// Does nothing if no operation is pending or no right operand has been
    /// typed yet.
    ///
    /// # Errors
    ///
    /// Returns [`CalcError::DivisionByZero`] or [`CalcError::Overflow`]. The
    /// calculator is cleared before either is returned.
    pub(crate) fn calculate(&mut self) -> Result<(), CalcError> {
        if self.reset_screen {
            return Ok(());
        }
        let Some(pending) = self.pending.as_ref() else {
            return Ok(());
        };

        let lhs = pending.operand.parse::<f64>();
        let rhs = self.current_operand.parse::<f64>();
        debug_assert!(
            lhs.is_ok() && rhs.is_ok(),
            "operands must always parse: {:?} {:?}",
            pending.operand,
            self.current_operand
        );
        let (Ok(lhs), Ok(rhs)) = (lhs, rhs) else {
            warn!(
                lhs = pending.operand.as_str(),
                rhs = self.current_operand.as_str(),
                "ignoring calculation with malformed operands"
            );
            return Ok(());
        };

        match pending.operation.apply(lhs, rhs) {
            Ok(value) => {
                self.current_operand = format_result(value);
                self.pending = None;
                self.reset_screen = true;
                Ok(())
            }
            Err(e) => {
                self.clear();
                Err(e)
            }
        }
    }

    pub(crate) fn clear(&mut self) {
        *self = Self::new();
    }

    /// Removes the last typed character, a lone character becomes `"0"`.
    ///
    /// A freshly committed operand or result is never edited.
    pub(crate) fn delete_last_character(&mut self) {
        if self.reset_screen {
            return;
        }

        if self.current_operand.chars().count() <= 1 {
            self.current_operand = INITIAL_OPERAND.to_string();
        } else {
            self.current_operand.pop();
        }
    }

    pub(crate) fn display(&self) -> Display {
        Display::of(self)
    }
}

fn round_result(value: f64) -> f64 {
    let scale = 10f64.powi(RESULT_DECIMAL_PLACES);
    let scaled = value * scale;
    if scaled.is_finite() {
        // Halves round towards positive infinity, so -2.5 becomes -2
        (scaled + 0.5).floor() / scale
    } else {
        // Too large to carry a fractional part anyway
        value
    }
}

fn format_result(value: f64) -> String {
    // Normalise negative zero
    let value = if value == 0.0 { 0.0 } else { value };
    value.to_string()
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use rstest::rstest;

    use super::*;

    /// Feeds a sequence of keypad symbols to a fresh calculator, stopping at
    /// the first error.
    fn press(keys: &str) -> (Calculator, Result<(), CalcError>) {
        let mut calc = Calculator::new();
        for key in keys.chars() {
            let action = match key {
                'C' => Action::Clear,
                'D' => Action::Delete,
                _ => Action::from_symbol(key).unwrap(),
            };
            if let Err(e) = calc.apply(action) {
                return (calc, Err(e));
            }
        }
        (calc, Ok(()))
    }

    fn entered(keys: &str) -> Calculator {
        let (calc, result) = press(keys);
        result.unwrap();
        calc
    }

    #[test]
    fn starts_with_zero_and_nothing_pending() {
        let calc = Calculator::new();

        assert_eq!(calc.current_operand(), "0");
        assert_eq!(calc.previous_operand(), "");
        assert_eq!(calc.pending_operation(), None);
        assert!(!calc.reset_screen);
    }

    #[rstest]
    #[case("0", "0")]
    #[case("000", "0")]
    #[case("07", "7")]
    #[case("100", "100")]
    #[case("0.05", "0.05")]
    #[case(".5", "0.5")]
    #[case("1.2.3", "1.23")]
    #[case("5..", "5.")]
    fn digits_accumulate(#[case] keys: &str, #[case] expected: &str) {
        assert_eq!(entered(keys).current_operand(), expected);
    }

    #[test]
    fn sixteenth_digit_is_rejected() {
        let (calc, result) = press("1234567890123456");

        assert_eq!(result, Err(CalcError::InputTooLong));
        assert_eq!(calc.current_operand(), "123456789012345");
    }

    #[test]
    fn decimal_point_is_not_capped() {
        let calc = entered("123456789012345.");
        assert_eq!(calc.current_operand(), "123456789012345.");
    }

    #[rstest]
    #[case("5+3=", "8")]
    #[case("9-12=", "-3")]
    #[case("2.5*4=", "10")]
    #[case("1/4=", "0.25")]
    #[case("1/3=", "0.33333333")]
    #[case("2/3=", "0.66666667")]
    #[case("0.1+0.2=", "0.3")]
    #[case("3-3=", "0")]
    #[case("0-0.000000001=", "0")]
    #[case("0-0.000000025=", "-0.00000002")]
    #[case("0-0.000000005=", "0")]
    fn evaluates_pending_operation(#[case] keys: &str, #[case] expected: &str) {
        let calc = entered(keys);

        assert_eq!(calc.current_operand(), expected);
        assert_eq!(calc.pending_operation(), None);
        assert_eq!(calc.previous_operand(), "");
        assert!(calc.reset_screen);
    }

    #[test]
    fn five_plus_three_displays_eight() {
        let display = entered("5+3=").display();

        assert_eq!(display.current, "8");
        assert_eq!(display.previous, "");
    }

    #[test]
    fn second_operator_evaluates_first_operation() {
        let calc = entered("5+3+");
        assert_eq!(calc.previous_operand(), "8");
        assert_eq!(calc.pending_operation(), Some(Operation::Add));

        let calc = entered("5+3+2=");
        assert_eq!(calc.current_operand(), "10");
    }

    #[test]
    fn changing_operator_does_not_evaluate() {
        let calc = entered("5+*");

        assert_eq!(calc.previous_operand(), "5");
        assert_eq!(calc.pending_operation(), Some(Operation::Multiply));

        assert_eq!(entered("5+*3=").current_operand(), "15");
    }

    #[test]
    fn equals_without_right_operand_is_a_no_op() {
        let calc = entered("5+=");

        assert_eq!(calc.previous_operand(), "5");
        assert_eq!(calc.pending_operation(), Some(Operation::Add));
    }

    #[test]
    fn equals_without_operation_is_a_no_op() {
        let calc = entered("42=");

        assert_eq!(calc.current_operand(), "42");
        assert!(!calc.reset_screen);
    }

    #[test]
    fn result_can_be_chained() {
        let calc = entered("2*3=*4=");
        assert_eq!(calc.current_operand(), "24");
    }

    #[test]
    fn digit_after_result_starts_new_operand() {
        assert_eq!(entered("2+2=7").current_operand(), "7");
        assert_eq!(entered("2+2=.").current_operand(), "0.");
        assert_eq!(entered("2+.5=").current_operand(), "2.5");
    }

    #[test]
    fn division_by_zero_resets() {
        let (calc, result) = press("1/0=");

        assert_eq!(result, Err(CalcError::DivisionByZero));
        assert_eq!(calc, Calculator::new());
    }

    #[test]
    fn division_by_zero_when_chaining_drops_new_operator() {
        let (calc, result) = press("8/0.0+");

        assert_eq!(result, Err(CalcError::DivisionByZero));
        assert_eq!(calc, Calculator::new());
    }

    #[test]
    fn overflow_resets() {
        let mut calc = Calculator::new();
        calc.current_operand = "1e308".to_string();
        calc.choose_operation(Operation::Multiply).unwrap();
        for digit in "10".chars() {
            calc.append_digit(digit).unwrap();
        }

        assert_eq!(calc.calculate(), Err(CalcError::Overflow));
        assert_eq!(calc, Calculator::new());
    }

    #[test]
    fn huge_results_are_not_rounded_to_infinity() {
        let mut calc = Calculator::new();
        calc.current_operand = "1e302".to_string();
        calc.choose_operation(Operation::Multiply).unwrap();
        calc.append_digit('9').unwrap();

        calc.calculate().unwrap();

        let value: f64 = calc.current_operand().parse().unwrap();
        assert!((value / 9e302 - 1.0).abs() < 1e-12);
    }

    #[rstest]
    #[case("123D", "12")]
    #[case("7D", "0")]
    #[case("1.D", "1")]
    #[case("DDD", "0")]
    fn delete_drops_last_character(#[case] keys: &str, #[case] expected: &str) {
        assert_eq!(entered(keys).current_operand(), expected);
    }

    #[test]
    fn delete_after_operator_is_a_no_op() {
        let calc = entered("12+D");

        assert_eq!(calc.current_operand(), "12");
        assert_eq!(calc.previous_operand(), "12");
    }

    #[test]
    fn delete_after_result_is_a_no_op() {
        assert_eq!(entered("12+30=D").current_operand(), "42");
    }

    #[test]
    fn delete_on_negative_result_does_not_apply() {
        // Results are committed, so the sign can never be orphaned
        assert_eq!(entered("1-9=DD").current_operand(), "-8");
    }

    proptest! {
        #[test]
        fn typed_digits_are_kept_up_to_the_cap(digits in "[1-9][0-9]{0,20}") {
            let (calc, result) = press(&digits);
            let expected = &digits[..digits.len().min(MAX_INPUT_LENGTH)];
            prop_assert_eq!(calc.current_operand(), expected);
            if digits.len() > MAX_INPUT_LENGTH {
                prop_assert_eq!(result, Err(CalcError::InputTooLong));
            } else {
                prop_assert_eq!(result, Ok(()));
            }
        }

        #[test]
        fn clear_always_restores_initial_state(keys in "[0-9.+*/=D-]{0,30}") {
            let (mut calc, _) = press(&keys);
            calc.clear();
            prop_assert_eq!(calc, Calculator::new());
        }

        #[test]
        fn integer_arithmetic_is_exact(
            lhs in 1u32..100_000,
            rhs in 1u32..100_000,
            op in prop::sample::select(vec!['+', '-', '*']),
        ) {
            let calc = entered(&format!("{lhs}{op}{rhs}="));
            let (lhs, rhs) = (i64::from(lhs), i64::from(rhs));
            let expected = match op {
                '+' => lhs + rhs,
                '-' => lhs - rhs,
                _ => lhs * rhs,
            };
            prop_assert_eq!(calc.current_operand(), expected.to_string());
        }

        #[test]
        fn division_is_rounded_to_eight_places(lhs in 0u32..100_000, rhs in 1u32..100_000) {
            let calc = entered(&format!("{lhs}/{rhs}="));
            let value: f64 = calc.current_operand().parse().unwrap();
            let exact = f64::from(lhs) / f64::from(rhs);
            prop_assert!((value - exact).abs() <= 1e-8);
            let decimals = calc.current_operand().split('.').nth(1).map_or(0, str::len);
            prop_assert!(decimals <= 8);
        }
    }
}
