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

//! Application event distribution and orchestration.
//!
//! This module defines the central event-handling logic for the application,
//! bridging the gap between user input (keyboard and mouse), task worker
//! results and the UI rendering pipeline.
//!
//! # Architecture
//!
//! The system follows a reactive event-loop pattern:
//!
//! 1. **Capture**: Events are received via the [`AppEvent`] enum through an
//!    asynchronous channel.
//! 2. **Process**: The [`process_events`] function updates the [`App`] state
//!    and triggers tasks on the background worker.
//! 3. **Render**: After each event is processed, the UI is re-drawn using the
//!    `ratatui` terminal.

mod handlers;
mod key_handlers;

use handlers::*;

use anyhow::Result;
use crossterm::event::{KeyEvent, MouseEvent};

use crate::{
    App,
    model::{AlbumMap, Photo},
    render::draw,
    util::term::Tui,
};

#[derive(Debug)]
pub(crate) enum AppEvent {
    Key(KeyEvent),
    Mouse(MouseEvent),

    RequestLoad(usize),
    GalleryLoaded(Vec<Photo>, AlbumMap),
    LoadFailed(String),

    FilterByAlbum(u32),
    SearchChanged(String),
    ShowAll,
    ClearGallery,

    OpenDetail(u32),

    Tick,

    ExitApplication,

    Error(String),
}

/// Runs the main application loop, handling events and rendering the UI in the
/// terminal.
///
/// This function loops until a 'quit' event is received or the event channel
/// is closed.
pub(crate) fn process_events(terminal: &mut Tui, app: &mut App) -> Result<()> {
    while let Ok(event) = app.event_rx.recv() {
        if matches!(event, AppEvent::ExitApplication) {
            break;
        }

        handle_event(app, event)?;

        terminal.draw(|f| draw(f, app))?;
    }

    Ok(())
}

pub(crate) fn handle_event(app: &mut App, event: AppEvent) -> Result<()> {
    match event {
        AppEvent::Key(key) => key_handlers::process_key_event(app, key)?,
        AppEvent::Mouse(mouse) => key_handlers::process_mouse_event(app, mouse),
        AppEvent::RequestLoad(limit) => handle_request_load(app, limit)?,
        AppEvent::GalleryLoaded(photos, albums) => handle_gallery_loaded(app, photos, albums),
        AppEvent::LoadFailed(message) => handle_load_failed(app, message),
        AppEvent::FilterByAlbum(id) => handle_filter_by_album(app, id),
        AppEvent::SearchChanged(term) => handle_search_changed(app, term),
        AppEvent::ShowAll => handle_show_all(app),
        AppEvent::ClearGallery => handle_clear_gallery(app),
        AppEvent::OpenDetail(id) => handle_open_detail(app, id),
        AppEvent::Error(message) => handle_error(app, message),
        AppEvent::Tick | AppEvent::ExitApplication => handle_tick(app),
    }

    Ok(())
}
