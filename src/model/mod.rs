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

//! Domain models and core data structures.
//!
//! This module defines the central entities of the application, photos and
//! albums, along with the session state that owns them while the gallery is
//! running.

pub(crate) mod gallery;
pub(crate) mod photos;

use std::collections::HashMap;

use serde::Deserialize;

/// A locally synthesized image descriptor shown in the gallery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Photo {
    pub(crate) id: u32,
    pub(crate) title: String,
    pub(crate) url: String,
    pub(crate) thumbnail_url: String,
    pub(crate) album_id: u32,
    pub(crate) description: String,
}

/// An album as returned by the album listing endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub(crate) struct Album {
    pub(crate) id: u32,
    pub(crate) title: String,
}

/// Album id to album title lookup.
pub(crate) type AlbumMap = HashMap<u32, String>;

/// Reduces a list of albums to an id to title lookup.
///
/// If the same id appears more than once the last title wins.
pub(crate) fn album_map(albums: Vec<Album>) -> AlbumMap {
    albums
        .into_iter()
        .map(|album| (album.id, album.title))
        .collect()
}
