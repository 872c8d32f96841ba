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

//! Photo card grid.
//!
//! This module holds the view state of the gallery grid: which card is
//! selected, how far the grid is scrolled and where each card was last drawn.
//! The photos themselves are owned by the gallery model and passed in on
//! every draw and event.

mod event;
mod render;

use ratatui::layout::{Position, Rect};

use crate::model::Photo;

pub(crate) const CARD_WIDTH: u16 = 30;
pub(crate) const CARD_HEIGHT: u16 = 6;

pub(crate) enum GalleryAction {
    Open(u32),
}

/// The content of one card, built from a photo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CardView {
    pub(crate) id: u32,
    pub(crate) title: String,
    pub(crate) image: String,
    pub(crate) caption: String,
}

impl CardView {
    pub(crate) fn from_photo(photo: &Photo) -> Self {
        Self {
            id: photo.id,
            title: photo.title.clone(),
            image: photo.thumbnail_url.clone(),
            caption: format!("ID: {} | Album: {}", photo.id, photo.album_id),
        }
    }
}

pub(crate) struct GalleryView {
    selected: Option<usize>,
    offset: usize,
    columns: usize,
    card_areas: Vec<(Rect, u32)>,
}

impl GalleryView {
    pub(crate) fn new() -> Self {
        Self {
            selected: None,
            offset: 0,
            columns: 1,
            card_areas: vec![],
        }
    }

    pub(crate) fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Starts over for a freshly replaced list of `len` photos.
    pub(crate) fn reset(&mut self, len: usize) {
        self.selected = if len > 0 { Some(0) } else { None };
        self.offset = 0;
        self.card_areas.clear();
    }

    fn goto_next(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        let i = match self.selected {
            Some(i) if i + 1 < len => i + 1,
            Some(i) => i,
            None => 0,
        };
        self.selected = Some(i);
    }

    fn goto_previous(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        self.selected = Some(self.selected.map_or(0, |i| i.saturating_sub(1)));
    }

    fn goto_down(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        let i = match self.selected {
            Some(i) if i + self.columns < len => i + self.columns,
            Some(i) => i,
            None => 0,
        };
        self.selected = Some(i);
    }

    fn goto_up(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        let i = match self.selected {
            Some(i) if i >= self.columns => i - self.columns,
            Some(i) => i,
            None => 0,
        };
        self.selected = Some(i);
    }

    fn goto_first(&mut self, len: usize) {
        if len > 0 {
            self.selected = Some(0);
        }
    }

    fn goto_last(&mut self, len: usize) {
        if len > 0 {
            self.selected = Some(len - 1);
        }
    }

    /// Returns the id of the card drawn at the given terminal cell.
    fn card_at(&self, column: u16, row: u16) -> Option<u32> {
        let position = Position::new(column, row);
        self.card_areas
            .iter()
            .find(|(area, _)| area.contains(position))
            .map(|(_, id)| *id)
    }

    fn select_id(&mut self, photos: &[Photo], id: u32) {
        if let Some(idx) = photos.iter().position(|p| p.id == id) {
            self.selected = Some(idx);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::photos::synthesize_photos;

    #[test]
    fn card_shows_raw_album_id() {
        let photos = synthesize_photos(4, "images");
        let card = CardView::from_photo(&photos[3]);

        assert_eq!(card.title, "Goku 4");
        assert_eq!(card.image, "images/4.jpeg");
        assert_eq!(card.caption, "ID: 4 | Album: 2");
    }

    #[test]
    fn reset_selects_first_card_or_nothing() {
        let mut view = GalleryView::new();
        view.reset(3);
        assert_eq!(view.selected(), Some(0));

        view.reset(0);
        assert_eq!(view.selected(), None);
    }

    #[test]
    fn navigation_stays_in_bounds() {
        let mut view = GalleryView::new();
        view.columns = 3;
        view.reset(5);

        view.goto_previous(5);
        assert_eq!(view.selected(), Some(0));

        view.goto_down(5);
        assert_eq!(view.selected(), Some(3));

        view.goto_down(5);
        assert_eq!(view.selected(), Some(3));

        view.goto_next(5);
        view.goto_next(5);
        assert_eq!(view.selected(), Some(4));

        view.goto_up(5);
        assert_eq!(view.selected(), Some(1));

        view.goto_last(5);
        assert_eq!(view.selected(), Some(4));

        view.goto_first(5);
        assert_eq!(view.selected(), Some(0));
    }

    #[test]
    fn navigation_on_empty_list_selects_nothing() {
        let mut view = GalleryView::new();
        view.reset(0);

        view.goto_next(0);
        view.goto_down(0);
        view.goto_last(0);

        assert_eq!(view.selected(), None);
    }
}
