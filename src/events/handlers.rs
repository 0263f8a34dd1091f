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

//! Handlers for individual application events.

use std::time::{Duration, Instant};

use tracing::{debug, info, warn};

use crate::{App, calculator::Action, config, notice::Notice, theme::Theme, util};

/// Applies a calculator action and updates the presentation state from the
/// outcome.
///
/// A failed action replaces the current line with a notice; any successful
/// action dismisses a notice that is still showing.
pub(super) fn handle_action(app: &mut App, action: Action) {
    match app.calculator.apply(action) {
        Ok(()) => app.notice = None,
        Err(e) => app.notice = Some(Notice::from_error(&e, Instant::now())),
    }

    app.keypad
        .set_active_operation(app.calculator.pending_operation());
}

pub(super) fn handle_toggle_theme(app: &mut App) {
    handle_set_dark_mode(app, !app.theme.dark);
}

/// Switches the theme and persists the preference.
pub(super) fn handle_set_dark_mode(app: &mut App, dark: bool) {
    app.theme = Theme::for_mode(dark);

    if let Some(hex) = Theme::to_hex(app.theme.background_colour) {
        if let Err(e) = util::term::set_terminal_bg(&hex) {
            debug!(error = %e, "failed to set terminal background");
        }
    }

    if app.config.dark_mode != dark {
        app.config.dark_mode = dark;
        if let Err(e) = config::save_config(&app.config) {
            warn!(error = %e, "failed to save theme preference");
        }
    }

    info!(dark, "theme changed");
}

pub(super) fn handle_notice(app: &mut App, message: String) {
    let duration = Duration::from_millis(app.config.notice_ms);
    app.notice = Some(Notice::new(message, duration, Instant::now()));
}

/// Expires time-limited presentation effects.
///
/// Only the notice and the key flash are affected, the calculator state is
/// never touched here.
pub(super) fn handle_tick(app: &mut App, now: Instant) {
    if app.notice.as_ref().is_some_and(|n| n.is_expired_at(now)) {
        app.notice = None;
    }

    app.keypad.expire_flash(now);
}
