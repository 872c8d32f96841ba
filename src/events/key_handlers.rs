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

//! Keyboard and mouse routing.

use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent, MouseEvent};

use crate::{
    App, Focus,
    components::{DetailAction, GalleryAction, SearchAction},
    events::AppEvent,
};

/// Routes a key press to whichever part of the UI currently owns input.
///
/// The detail overlay, while open, takes every key. After that the command
/// line, the search input and the gallery grid get a chance in turn, and
/// anything left over is treated as a global shortcut.
///
/// # Errors
///
/// Returns an error if an event or task cannot be sent.
pub(super) fn process_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    let event = Event::Key(key);

    if let Some(detail) = app.detail.as_mut() {
        if let Some(DetailAction::Close) = detail.process_event(&event) {
            app.detail = None;
        }
        return Ok(());
    }

    if app.focus == Focus::Search {
        match app.search_bar.process_event(&event) {
            Some(SearchAction::Changed(term)) => app.event_tx.send(AppEvent::SearchChanged(term))?,
            Some(SearchAction::Done) => app.focus = Focus::Gallery,
            None => {}
        }
        return Ok(());
    }

    let handled = app
        .commander
        .handle_event(&event, &app.event_tx, app.config.photo_count)?;
    if handled {
        return Ok(());
    }

    if let Some(GalleryAction::Open(id)) = app.gallery_view.process_event(&event, app.gallery.visible()) {
        app.event_tx.send(AppEvent::OpenDetail(id))?;
        return Ok(());
    }

    process_global_key_event(app, key)
}

fn process_global_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Char('q') => app.event_tx.send(AppEvent::ExitApplication)?,
        KeyCode::Char('/') => app.focus = Focus::Search,
        KeyCode::Char('r') => app
            .event_tx
            .send(AppEvent::RequestLoad(app.config.photo_count))?,
        KeyCode::Char('a') => app.event_tx.send(AppEvent::ShowAll)?,
        KeyCode::Char('c') => app.event_tx.send(AppEvent::ClearGallery)?,
        KeyCode::Esc => app.error = None,
        _ => {}
    }

    Ok(())
}

/// Routes a mouse event to the overlay if it is open, otherwise to the grid.
pub(super) fn process_mouse_event(app: &mut App, mouse: MouseEvent) {
    let event = Event::Mouse(mouse);

    if let Some(detail) = app.detail.as_mut() {
        if let Some(DetailAction::Close) = detail.process_event(&event) {
            app.detail = None;
        }
        return;
    }

    if let Some(GalleryAction::Open(id)) = app.gallery_view.process_event(&event, app.gallery.visible()) {
        super::handlers::handle_open_detail(app, id);
    }
}
