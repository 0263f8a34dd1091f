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

//! Keyboard routing.
//!
//! Key presses are offered to the command line first, then mapped to a
//! calculator [`Action`], and finally checked against the few application
//! level shortcuts. Anything else is ignored.

use std::time::Instant;

use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::{App, calculator::Action, events::AppEvent};

use super::handlers::handle_action;

/// Maps keyboard input to calculator actions and application shortcuts.
///
/// # Errors
///
/// Returns an error if an application event cannot be queued.
pub(super) fn process_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    // Some terminals also report key releases
    if key.kind != KeyEventKind::Press {
        return Ok(());
    }

    let event = Event::Key(key);
    if app.commander.handle_event(&event, &app.event_tx) {
        return Ok(());
    }

    if let Some(action) = action_for_key(&key) {
        app.keypad.flash(action, Instant::now());
        handle_action(app, action);
        return Ok(());
    }

    process_global_key_event(app, &key)
}

/// The calculator action for a key, if it has one.
///
/// Digits, `.`/`,` and the operator characters map to themselves, `Enter`
/// evaluates, `Backspace` deletes and `Esc`/`Delete` clear.
pub(super) fn action_for_key(key: &KeyEvent) -> Option<Action> {
    if key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
    {
        return None;
    }

    match key.code {
        KeyCode::Char(c) => Action::from_symbol(c),
        KeyCode::Enter => Some(Action::Equals),
        KeyCode::Backspace => Some(Action::Delete),
        KeyCode::Esc | KeyCode::Delete => Some(Action::Clear),
        _ => None,
    }
}

fn process_global_key_event(app: &mut App, key: &KeyEvent) -> Result<()> {
    match (key.code, key.modifiers) {
        (KeyCode::Char('q'), _) | (KeyCode::Char('c'), KeyModifiers::CONTROL) => {
            app.event_tx.send(AppEvent::ExitApplication)?;
        }

        (KeyCode::Char('t'), _) => app.event_tx.send(AppEvent::ToggleTheme)?,

        _ => {}
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::{
        calculator::{Calculator, Operation},
        config::AppConfig,
    };

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_keys(app: &mut App, keys: &[KeyCode]) {
        for code in keys {
            process_key_event(app, key(*code)).unwrap();
        }
    }

    #[rstest]
    #[case(KeyCode::Char('4'), Some(Action::Digit('4')))]
    #[case(KeyCode::Char('.'), Some(Action::DecimalPoint))]
    #[case(KeyCode::Char('+'), Some(Action::Operator(Operation::Add)))]
    #[case(KeyCode::Char('-'), Some(Action::Operator(Operation::Subtract)))]
    #[case(KeyCode::Char('*'), Some(Action::Operator(Operation::Multiply)))]
    #[case(KeyCode::Char('/'), Some(Action::Operator(Operation::Divide)))]
    #[case(KeyCode::Char('='), Some(Action::Equals))]
    #[case(KeyCode::Enter, Some(Action::Equals))]
    #[case(KeyCode::Backspace, Some(Action::Delete))]
    #[case(KeyCode::Esc, Some(Action::Clear))]
    #[case(KeyCode::Delete, Some(Action::Clear))]
    #[case(KeyCode::Char('q'), None)]
    #[case(KeyCode::Tab, None)]
    #[case(KeyCode::F(1), None)]
    fn keys_map_to_actions(#[case] code: KeyCode, #[case] expected: Option<Action>) {
        assert_eq!(action_for_key(&key(code)), expected);
    }

    #[test]
    fn control_chords_are_not_actions() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('1'), KeyModifiers::CONTROL);
        assert_eq!(action_for_key(&ctrl_c), None);

        let shifted_plus = KeyEvent::new(KeyCode::Char('+'), KeyModifiers::SHIFT);
        assert_eq!(action_for_key(&shifted_plus), Some(Action::Operator(Operation::Add)));
    }

    #[test]
    fn typing_an_expression_evaluates_it() {
        let mut app = App::new(AppConfig::default());

        type_keys(
            &mut app,
            &[
                KeyCode::Char('5'),
                KeyCode::Char('+'),
                KeyCode::Char('3'),
                KeyCode::Enter,
            ],
        );

        let display = app.calculator.display();
        assert_eq!(display.current, "8");
        assert_eq!(display.previous, "");
    }

    #[test]
    fn key_releases_are_ignored() {
        let mut app = App::new(AppConfig::default());
        let mut release = key(KeyCode::Char('7'));
        release.kind = KeyEventKind::Release;

        process_key_event(&mut app, release).unwrap();

        assert_eq!(app.calculator, Calculator::new());
    }

    #[test]
    fn command_line_swallows_keys() {
        let mut app = App::new(AppConfig::default());

        type_keys(&mut app, &[KeyCode::Char(':'), KeyCode::Char('7')]);

        assert!(app.commander.active());
        assert_eq!(app.calculator, Calculator::new());
    }

    #[rstest]
    #[case(key(KeyCode::Char('q')))]
    #[case(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL))]
    fn quit_shortcuts(#[case] event: KeyEvent) {
        let mut app = App::new(AppConfig::default());

        process_key_event(&mut app, event).unwrap();

        assert!(matches!(app.event_rx.try_recv(), Ok(AppEvent::ExitApplication)));
    }

    #[test]
    fn unknown_keys_pass_through() {
        let mut app = App::new(AppConfig::default());

        type_keys(&mut app, &[KeyCode::Char('z'), KeyCode::Home]);

        assert_eq!(app.calculator, Calculator::new());
        assert!(app.event_rx.try_recv().is_err());
    }
}
