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

//! Local photo set.
//!
//! The gallery images are not fetched, they are a fixed local set of files
//! named after their id. This module synthesizes the photo records for them.

use crate::model::Photo;

/// Number of images available in the local image directory.
pub(crate) const MAX_PHOTOS: usize = 10;

/// Returns the file extension used by the image with the given id.
///
/// Images 3 and 4 were saved as `.jpeg`, every other image is a `.jpg`.
pub(crate) fn image_extension(id: u32) -> &'static str {
    match id {
        3 | 4 => "jpeg",
        _ => "jpg",
    }
}

/// Synthesizes the photo records for the local image set.
///
/// Returns `min(limit, MAX_PHOTOS)` records with ids starting at 1. Photos are
/// grouped into albums of two, so photo `i` belongs to album `ceil(i / 2)`.
///
/// # Arguments
///
/// * `limit` - The requested number of photos.
/// * `image_dir` - Directory prefix for the image paths.
pub(crate) fn synthesize_photos(limit: usize, image_dir: &str) -> Vec<Photo> {
    let count = limit.min(MAX_PHOTOS) as u32;

    (1..=count)
        .map(|id| {
            let url = format!("{}/{}.{}", image_dir, id, image_extension(id));
            Photo {
                id,
                title: format!("Goku {}", id),
                thumbnail_url: url.clone(),
                url,
                album_id: id.div_ceil(2),
                description: format!(
                    "Lorem ipsum dolor sit amet, Goku transformation number {}. Edit this text where the photos are synthesized.",
                    id
                ),
            }
        })
        .collect()
}
