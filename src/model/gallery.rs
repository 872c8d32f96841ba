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

//! Gallery session state.
//!
//! This module owns the loaded photos, the subset currently on screen and the
//! album lookup, and tracks the load status of the gallery.
//!
//! The visible list is always replaced wholesale, the view re-renders all of
//! it on every change.

use std::collections::HashSet;

use crate::model::{AlbumMap, Photo};

/// Search terms shorter than this show the unfiltered list.
pub(crate) const MIN_SEARCH_LEN: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum LoadStatus {
    Idle,
    Loading,
    Loaded,
    Failed(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct GalleryStats {
    pub(crate) total_photos: usize,
    pub(crate) total_albums: usize,
}

/// Returns the photos belonging to the given album, in their original order.
pub(crate) fn filter_by_album(photos: &[Photo], album_id: u32) -> Vec<Photo> {
    photos
        .iter()
        .filter(|p| p.album_id == album_id)
        .cloned()
        .collect()
}

/// Returns the photos whose title contains `term`, ignoring case.
///
/// A term shorter than [`MIN_SEARCH_LEN`] characters, including an empty
/// term, matches every photo.
pub(crate) fn search_by_title(photos: &[Photo], term: &str) -> Vec<Photo> {
    if term.chars().count() < MIN_SEARCH_LEN {
        return photos.to_vec();
    }

    let needle = term.to_lowercase();
    photos
        .iter()
        .filter(|p| p.title.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// Summarises a list of photos, or `None` if there is nothing to summarise.
pub(crate) fn stats(photos: &[Photo]) -> Option<GalleryStats> {
    if photos.is_empty() {
        return None;
    }

    let albums: HashSet<u32> = photos.iter().map(|p| p.album_id).collect();

    Some(GalleryStats {
        total_photos: photos.len(),
        total_albums: albums.len(),
    })
}

pub(crate) struct Gallery {
    status: LoadStatus,
    photos: Vec<Photo>,
    visible: Vec<Photo>,
    albums: AlbumMap,
}

impl Gallery {
    pub(crate) fn new() -> Self {
        Self {
            status: LoadStatus::Idle,
            photos: vec![],
            visible: vec![],
            albums: AlbumMap::new(),
        }
    }

    pub(crate) fn status(&self) -> &LoadStatus {
        &self.status
    }

    pub(crate) fn visible(&self) -> &[Photo] {
        &self.visible
    }

    pub(crate) fn stats(&self) -> Option<GalleryStats> {
        stats(&self.visible)
    }

    pub(crate) fn photo(&self, id: u32) -> Option<&Photo> {
        self.visible.iter().find(|p| p.id == id)
    }

    pub(crate) fn album_title(&self, album_id: u32) -> Option<&str> {
        self.albums.get(&album_id).map(String::as_str)
    }

    pub(crate) fn begin_load(&mut self) {
        self.status = LoadStatus::Loading;
    }

    pub(crate) fn finish_load(&mut self, photos: Vec<Photo>, albums: AlbumMap) {
        self.visible = photos.clone();
        self.photos = photos;
        self.albums = albums;
        self.status = LoadStatus::Loaded;
    }

    /// Marks the load as failed. Whatever was on screen before stays there.
    pub(crate) fn fail_load(&mut self, message: String) {
        self.status = LoadStatus::Failed(message);
    }

    pub(crate) fn filter_by_album(&mut self, album_id: u32) {
        self.visible = filter_by_album(&self.photos, album_id);
    }

    pub(crate) fn search(&mut self, term: &str) {
        self.visible = search_by_title(&self.photos, term);
    }

    pub(crate) fn show_all(&mut self) {
        self.visible = self.photos.clone();
    }

    /// Empties the gallery. The album lookup and load status are kept.
    pub(crate) fn clear(&mut self) {
        self.photos.clear();
        self.visible.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::photos::synthesize_photos;

    fn loaded(count: usize) -> Gallery {
        let mut gallery = Gallery::new();
        gallery.begin_load();
        gallery.finish_load(synthesize_photos(count, "images"), AlbumMap::new());
        gallery
    }

    fn ids(photos: &[Photo]) -> Vec<u32> {
        photos.iter().map(|p| p.id).collect()
    }

    #[test]
    fn filter_by_album_keeps_matching_photos_in_order() {
        let photos = synthesize_photos(10, "images");
        assert_eq!(ids(&filter_by_album(&photos, 2)), vec![3, 4]);
        assert_eq!(ids(&filter_by_album(&photos, 5)), vec![9, 10]);
        assert!(filter_by_album(&photos, 42).is_empty());
    }

    #[test]
    fn short_search_terms_return_everything() {
        let photos = synthesize_photos(10, "images");
        for term in ["", "g", "go"] {
            assert_eq!(search_by_title(&photos, term), photos);
        }
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let photos = synthesize_photos(10, "images");
        assert_eq!(ids(&search_by_title(&photos, "goku 3")), vec![3]);
        assert_eq!(ids(&search_by_title(&photos, "GOKU 1")), vec![1, 10]);
        assert_eq!(search_by_title(&photos, "Goku").len(), 10);
        assert!(search_by_title(&photos, "vegeta").is_empty());
    }

    #[test]
    fn stats_count_unique_albums() {
        let photos = synthesize_photos(5, "images");
        assert_eq!(
            stats(&photos),
            Some(GalleryStats { total_photos: 5, total_albums: 3 })
        );
    }

    #[test]
    fn stats_are_hidden_for_empty_list() {
        assert_eq!(stats(&[]), None);
    }

    #[test]
    fn load_moves_through_states() {
        let mut gallery = Gallery::new();
        assert_eq!(gallery.status(), &LoadStatus::Idle);

        gallery.begin_load();
        assert_eq!(gallery.status(), &LoadStatus::Loading);

        let mut albums = AlbumMap::new();
        albums.insert(1, "quidem molestiae enim".to_string());
        gallery.finish_load(synthesize_photos(4, "images"), albums);

        assert_eq!(gallery.status(), &LoadStatus::Loaded);
        assert_eq!(gallery.visible().len(), 4);
        assert_eq!(gallery.album_title(1), Some("quidem molestiae enim"));
        assert_eq!(gallery.album_title(2), None);
    }

    #[test]
    fn failed_reload_keeps_previous_photos() {
        let mut gallery = loaded(6);

        gallery.begin_load();
        gallery.fail_load("HTTP error: 500 - Internal Server Error".into());

        assert!(matches!(gallery.status(), LoadStatus::Failed(msg) if msg.contains("500")));
        assert_eq!(gallery.visible().len(), 6);
    }

    #[test]
    fn filter_then_short_search_restores_full_list() {
        let mut gallery = loaded(10);

        gallery.filter_by_album(3);
        assert_eq!(ids(gallery.visible()), vec![5, 6]);
        assert_eq!(gallery.status(), &LoadStatus::Loaded);

        gallery.search("go");
        assert_eq!(gallery.visible().len(), 10);

        gallery.search("goku 3");
        assert_eq!(ids(gallery.visible()), vec![3]);

        gallery.show_all();
        assert_eq!(gallery.visible().len(), 10);
    }

    #[test]
    fn clear_empties_full_and_visible_lists() {
        let mut gallery = loaded(10);
        gallery.filter_by_album(2);

        gallery.clear();

        assert!(gallery.visible().is_empty());
        assert_eq!(gallery.stats(), None);

        // Nothing left to bring back.
        gallery.show_all();
        assert!(gallery.visible().is_empty());
        gallery.search("goku 3");
        assert!(gallery.visible().is_empty());
        assert_eq!(gallery.status(), &LoadStatus::Loaded);
    }

    #[test]
    fn photo_lookup_only_sees_visible_photos() {
        let mut gallery = loaded(4);
        gallery.filter_by_album(1);

        assert!(gallery.photo(2).is_some());
        assert!(gallery.photo(3).is_none());
    }
}
