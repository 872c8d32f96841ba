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

//! Dismissal handling for the detail overlay.

use crossterm::event::{Event, KeyCode, MouseButton, MouseEventKind};
use ratatui::layout::Position;

use crate::components::{DetailAction, DetailOverlay};

impl DetailOverlay {
    /// Handles input while the overlay is open. All input is consumed.
    pub(crate) fn process_event(&mut self, event: &Event) -> Option<DetailAction> {
        match event {
            Event::Key(key_event) => match key_event.code {
                KeyCode::Esc | KeyCode::Char('x') | KeyCode::Char('q') => Some(DetailAction::Close),
                _ => None,
            },

            Event::Mouse(mouse_event) => {
                if mouse_event.kind != MouseEventKind::Down(MouseButton::Left) {
                    return None;
                }

                let position = Position::new(mouse_event.column, mouse_event.row);
                let on_close = self.close_area.is_some_and(|area| area.contains(position));
                let outside = self.content_area.is_some_and(|area| !area.contains(position));

                (on_close || outside).then_some(DetailAction::Close)
            }

            _ => None,
        }
    }
}
