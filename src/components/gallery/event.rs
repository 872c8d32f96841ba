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

//! Input handling for the gallery grid.
//!
//! Maps keyboard navigation and mouse clicks onto card selection, and reports
//! when a card's "view larger" button is activated.

use crossterm::event::{Event, KeyCode, MouseButton, MouseEventKind};

use crate::{
    components::{GalleryAction, GalleryView},
    model::Photo,
};

impl GalleryView {
    pub(crate) fn process_event(&mut self, event: &Event, photos: &[Photo]) -> Option<GalleryAction> {
        let len = photos.len();

        match event {
            Event::Key(key_event) => match key_event.code {
                KeyCode::Char('l') | KeyCode::Right => self.goto_next(len),
                KeyCode::Char('h') | KeyCode::Left => self.goto_previous(len),
                KeyCode::Char('j') | KeyCode::Down => self.goto_down(len),
                KeyCode::Char('k') | KeyCode::Up => self.goto_up(len),
                KeyCode::Char('g') | KeyCode::Home => self.goto_first(len),
                KeyCode::Char('G') | KeyCode::End => self.goto_last(len),

                KeyCode::Enter => {
                    return self
                        .selected
                        .and_then(|i| photos.get(i))
                        .map(|p| GalleryAction::Open(p.id));
                }

                _ => {}
            },

            Event::Mouse(mouse_event) => {
                if let MouseEventKind::Down(MouseButton::Left) = mouse_event.kind {
                    let id = self.card_at(mouse_event.column, mouse_event.row)?;
                    self.select_id(photos, id);
                    return Some(GalleryAction::Open(id));
                }
            }

            _ => {}
        }

        None
    }
}
