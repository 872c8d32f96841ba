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
    App,
    components::DetailOverlay,
    model::{AlbumMap, Photo},
    tasks::AppTask,
};

pub(super) fn handle_request_load(app: &mut App, limit: usize) -> Result<()> {
    app.gallery.begin_load();
    app.error = None;
    app.task_tx.send(AppTask::LoadGallery(limit))?;

    Ok(())
}

pub(super) fn handle_gallery_loaded(app: &mut App, photos: Vec<Photo>, albums: AlbumMap) {
    app.gallery.finish_load(photos, albums);
    app.search_bar.reset();
    refresh_gallery(app);
}

pub(super) fn handle_load_failed(app: &mut App, message: String) {
    app.gallery.fail_load(message);
}

pub(super) fn handle_filter_by_album(app: &mut App, album_id: u32) {
    app.search_bar.reset();
    app.gallery.filter_by_album(album_id);
    log::info!(
        "Filtered by album {}, {} photos",
        album_id,
        app.gallery.visible().len()
    );
    refresh_gallery(app);
}

pub(super) fn handle_search_changed(app: &mut App, term: String) {
    // Commands search without going through the input.
    if app.search_bar.value() != term {
        app.search_bar.set_value(&term);
    }
    app.gallery.search(&term);
    log::debug!("Search {:?}, {} photos", term, app.gallery.visible().len());
    refresh_gallery(app);
}

pub(super) fn handle_show_all(app: &mut App) {
    app.search_bar.reset();
    app.gallery.show_all();
    refresh_gallery(app);
}

pub(super) fn handle_clear_gallery(app: &mut App) {
    app.search_bar.reset();
    app.gallery.clear();
    log::info!("Gallery cleared");
    refresh_gallery(app);
}

pub(super) fn handle_open_detail(app: &mut App, id: u32) {
    if let Some(photo) = app.gallery.photo(id) {
        let album_title = app.gallery.album_title(photo.album_id).map(str::to_string);
        app.detail = Some(DetailOverlay::new(photo.clone(), album_title));
    }
}

pub(super) fn handle_error(app: &mut App, message: String) {
    log::warn!("{}", message);
    app.error = Some(message);
}

pub(super) fn handle_tick(_app: &mut App) {}

// The visible list was replaced, so the grid starts over from the top.
fn refresh_gallery(app: &mut App) {
    app.gallery_view.reset(app.gallery.visible().len());
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc::{self, Receiver};

    use super::*;
    use crate::{
        config::AppConfig,
        events::{AppEvent, handle_event},
        model::{gallery::LoadStatus, photos::synthesize_photos},
    };

    fn app() -> (App, Receiver<AppTask>) {
        let (task_tx, task_rx) = mpsc::channel();
        (App::new(AppConfig::default(), task_tx).unwrap(), task_rx)
    }

    fn loaded_app(count: usize) -> (App, Receiver<AppTask>) {
        let (mut app, task_rx) = app();
        let mut albums = AlbumMap::new();
        albums.insert(1, "quidem molestiae enim".to_string());
        handle_event(&mut app, AppEvent::RequestLoad(count)).unwrap();
        handle_event(
            &mut app,
            AppEvent::GalleryLoaded(synthesize_photos(count, "images"), albums),
        )
        .unwrap();
        (app, task_rx)
    }

    #[test]
    fn request_load_enters_loading_and_queues_task() {
        let (mut app, task_rx) = app();
        app.error = Some("old".into());

        handle_event(&mut app, AppEvent::RequestLoad(5)).unwrap();

        assert_eq!(app.gallery.status(), &LoadStatus::Loading);
        assert!(app.error.is_none());
        assert!(matches!(task_rx.try_recv(), Ok(AppTask::LoadGallery(5))));
    }

    #[test]
    fn loaded_gallery_shows_stats() {
        let (app, _task_rx) = loaded_app(5);

        let stats = app.gallery.stats().unwrap();
        assert_eq!(app.gallery.status(), &LoadStatus::Loaded);
        assert_eq!(stats.total_photos, 5);
        assert_eq!(stats.total_albums, 3);
        assert_eq!(app.gallery_view.selected(), Some(0));
    }

    #[test]
    fn load_failure_is_reported() {
        let (mut app, _task_rx) = app();
        handle_event(&mut app, AppEvent::RequestLoad(10)).unwrap();

        handle_event(
            &mut app,
            AppEvent::LoadFailed("Failed to load photos: HTTP error: 404 - Not Found".into()),
        )
        .unwrap();

        assert!(matches!(app.gallery.status(), LoadStatus::Failed(msg) if msg.contains("404")));
        assert!(app.gallery.visible().is_empty());
        assert!(app.gallery.stats().is_none());
    }

    #[test]
    fn filter_and_search_stay_loaded() {
        let (mut app, task_rx) = loaded_app(10);
        while task_rx.try_recv().is_ok() {}

        handle_event(&mut app, AppEvent::FilterByAlbum(2)).unwrap();
        assert_eq!(app.gallery.visible().len(), 2);

        handle_event(&mut app, AppEvent::SearchChanged("goku 3".into())).unwrap();
        assert_eq!(app.gallery.visible().len(), 1);
        assert_eq!(app.gallery.visible()[0].id, 3);

        handle_event(&mut app, AppEvent::SearchChanged("".into())).unwrap();
        assert_eq!(app.gallery.visible().len(), 10);

        assert_eq!(app.gallery.status(), &LoadStatus::Loaded);
        assert!(task_rx.try_recv().is_err());
    }

    #[test]
    fn search_input_follows_list_on_screen() {
        let (mut app, _task_rx) = loaded_app(10);

        handle_event(&mut app, AppEvent::SearchChanged("goku 3".into())).unwrap();
        assert_eq!(app.search_bar.value(), "goku 3");
        assert_eq!(app.gallery.visible().len(), 1);

        handle_event(&mut app, AppEvent::FilterByAlbum(4)).unwrap();
        assert_eq!(app.search_bar.value(), "");
        assert_eq!(app.gallery.visible().len(), 2);
    }

    #[test]
    fn clear_gallery_hides_everything_until_next_load() {
        let (mut app, task_rx) = loaded_app(6);
        handle_event(&mut app, AppEvent::SearchChanged("goku".into())).unwrap();

        handle_event(&mut app, AppEvent::ClearGallery).unwrap();

        assert!(app.gallery.visible().is_empty());
        assert!(app.gallery.stats().is_none());
        assert_eq!(app.search_bar.value(), "");
        assert_eq!(app.gallery_view.selected(), None);

        handle_event(&mut app, AppEvent::RequestLoad(6)).unwrap();
        assert!(matches!(task_rx.try_recv(), Ok(AppTask::LoadGallery(6))));
        handle_event(
            &mut app,
            AppEvent::GalleryLoaded(synthesize_photos(6, "images"), AlbumMap::new()),
        )
        .unwrap();
        assert_eq!(app.gallery.visible().len(), 6);
    }

    #[test]
    fn filter_to_nothing_clears_selection() {
        let (mut app, _task_rx) = loaded_app(4);

        handle_event(&mut app, AppEvent::FilterByAlbum(9)).unwrap();

        assert!(app.gallery.visible().is_empty());
        assert_eq!(app.gallery_view.selected(), None);
        assert!(app.gallery.stats().is_none());
    }

    #[test]
    fn open_detail_uses_album_title() {
        let (mut app, _task_rx) = loaded_app(4);

        handle_event(&mut app, AppEvent::OpenDetail(2)).unwrap();

        let detail = app.detail.as_ref().unwrap();
        assert_eq!(detail.photo.id, 2);
        assert_eq!(detail.album_line(), "Album: 1 (quidem molestiae enim)");
    }

    #[test]
    fn open_detail_for_hidden_photo_is_ignored() {
        let (mut app, _task_rx) = loaded_app(4);
        handle_event(&mut app, AppEvent::FilterByAlbum(1)).unwrap();

        handle_event(&mut app, AppEvent::OpenDetail(4)).unwrap();

        assert!(app.detail.is_none());
    }

    #[test]
    fn errors_show_in_banner() {
        let (mut app, _task_rx) = app();

        handle_event(&mut app, AppEvent::Error("An unexpected error occurred".into())).unwrap();

        assert_eq!(app.error.as_deref(), Some("An unexpected error occurred"));
    }
}
