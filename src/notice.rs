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

//! Transient messages shown in place of the current display line.
//!
//! A notice never changes calculator state. It simply stays visible until
//! its display duration has passed, after which the regular display is
//! rendered again from whatever state the calculator is in by then.

use std::time::{Duration, Instant};

use crate::calculator::CalcError;

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Notice {
    message: String,
    shown_at: Instant,
    duration: Duration,
}

impl Notice {
    pub(crate) fn new(message: impl Into<String>, duration: Duration, now: Instant) -> Self {
        Self {
            message: message.into(),
            shown_at: now,
            duration,
        }
    }

    pub(crate) fn from_error(error: &CalcError, now: Instant) -> Self {
        Self::new(error.to_string(), error.display_duration(), now)
    }

    pub(crate) fn message(&self) -> &str {
        &self.message
    }

    pub(crate) fn is_expired_at(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.shown_at) >= self.duration
    }
}
