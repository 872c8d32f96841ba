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

use anyhow::Result;

use crate::{
    events::AppEvent,
    model::{album_map, photos::synthesize_photos},
    tasks::TaskContext,
};

/// Loads the gallery: the local photo set joined with the album lookup.
///
/// If the album request fails the whole load fails, even though the photos
/// themselves were available.
pub(super) fn load_gallery(ctx: &mut TaskContext, limit: usize) -> Result<()> {
    log::info!("Loading {} photos", limit);

    let photos = synthesize_photos(limit, &ctx.config.image_dir);

    match ctx.albums.fetch_albums() {
        Ok(albums) => {
            let albums = album_map(albums);
            log::info!("Loaded {} photos and {} albums", photos.len(), albums.len());
            ctx.event_tx.send(AppEvent::GalleryLoaded(photos, albums))?;
        }
        Err(e) => {
            log::error!("Failed to fetch albums: {:?}", e);
            ctx.event_tx
                .send(AppEvent::LoadFailed(format!("Failed to load photos: {}", e)))?;
        }
    }

    Ok(())
}
