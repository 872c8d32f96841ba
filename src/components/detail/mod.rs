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

//! Full-screen detail overlay for a single photo.
//!
//! The overlay owns its own dismissal handling. It is dropped on every close
//! path, so there is nothing left listening for `Esc` once it is gone.

mod event;
mod render;

use ratatui::layout::Rect;

use crate::model::Photo;

pub(crate) const CLOSE_GLYPH: &str = "×";

pub(crate) enum DetailAction {
    Close,
}

pub(crate) struct DetailOverlay {
    pub(crate) photo: Photo,
    pub(crate) album_title: Option<String>,
    content_area: Option<Rect>,
    close_area: Option<Rect>,
}

impl DetailOverlay {
    pub(crate) fn new(photo: Photo, album_title: Option<String>) -> Self {
        Self {
            photo,
            album_title,
            content_area: None,
            close_area: None,
        }
    }

    pub(crate) fn album_line(&self) -> String {
        match &self.album_title {
            Some(title) => format!("Album: {} ({})", self.photo.album_id, title),
            None => format!("Album: {}", self.photo.album_id),
        }
    }
}
