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

//! Search-as-you-type input for the gallery.
//!
//! This module wraps a single line text input. Every edit of the value is
//! reported so the gallery can be filtered while the user types.

mod event;
mod render;

use tui_input::Input;

pub(crate) enum SearchAction {
    Changed(String),
    Done,
}

pub(crate) struct SearchBar {
    pub(crate) input: Input,
}

impl SearchBar {
    pub(crate) fn new() -> Self {
        Self {
            input: Input::default(),
        }
    }

    pub(crate) fn value(&self) -> &str {
        self.input.value()
    }

    /// Replaces the term, leaving the cursor at the end.
    pub(crate) fn set_value(&mut self, value: &str) {
        self.input = Input::new(value.to_string());
    }

    pub(crate) fn reset(&mut self) {
        self.input.reset();
    }
}
