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

//! # Photo Gallery TUI.
//!
//! A terminal photo gallery. It shows a local set of photos as a grid of
//! cards, joined with album metadata fetched from a web API, with search as
//! you type, album filtering and a detail overlay per photo.
//!
//! It uses an event-driven architecture where:
//!
//! * The **Main Thread** manages the terminal lifecycle, owns the session
//!   state and renders the UI.
//! * A **Background Worker** handles the network request that a gallery load
//!   needs, via asynchronous task processing.
//! * **Event Loops** capture user input and system ticks to drive the UI
//!   state.
//!
//! ## Architecture
//!
//! The application follows a strict setup-run-teardown pattern to ensure the
//! terminal state is preserved even in the event of a crash. Communication
//! between the UI and the background worker is handled via `std::sync::mpsc`
//! channels.

mod api;
mod commander;
mod components;
mod config;
mod events;
mod model;
mod render;
mod tasks;
mod theme;
mod util;

use anyhow::{Context, Result};
use crossterm::event::{self, Event};
use std::{
    panic,
    sync::mpsc::{self, Receiver, Sender},
    thread,
    time::Duration,
};

use crate::{
    commander::Commander,
    components::{DetailOverlay, GalleryView, SearchBar},
    config::AppConfig,
    events::{AppEvent, process_events},
    model::gallery::Gallery,
    tasks::AppTask,
    theme::Theme,
    util::term::{self, Tui},
};

/// Which part of the screen receives typed text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Focus {
    Gallery,
    Search,
}

/// Application state.
struct App {
    pub config: AppConfig,

    pub theme: Theme,
    pub focus: Focus,

    pub event_tx: Sender<AppEvent>,
    pub event_rx: Receiver<AppEvent>,

    pub task_tx: Sender<AppTask>,

    pub gallery: Gallery,

    pub gallery_view: GalleryView,
    pub search_bar: SearchBar,
    pub detail: Option<DetailOverlay>,

    pub commander: Commander,

    pub error: Option<String>,
}

impl App {
    /// Create a new instance of application state.
    pub fn new(config: AppConfig, task_tx: Sender<AppTask>) -> Result<Self> {
        let (event_tx, event_rx) = mpsc::channel();

        Ok(Self {
            config,
            theme: Theme::default(),
            focus: Focus::Gallery,
            event_tx,
            event_rx,
            task_tx,
            gallery: Gallery::new(),
            gallery_view: GalleryView::new(),
            search_bar: SearchBar::new(),
            detail: None,
            commander: Commander::new(),
            error: None,
        })
    }
}

/// The entry point of the application.
///
/// Sets up the communication channels, initializes the application state,
/// manages the terminal lifecycle, and returns an error if any part of the
/// execution fails.
fn main() -> Result<()> {
    let config = config::load_config();

    util::logging::init_logging(&config.log_file)?;
    log::info!("Starting gallui {}", env!("CARGO_PKG_VERSION"));

    install_panic_hook();

    let (task_tx, task_rx) = mpsc::channel();

    let mut app = App::new(config, task_tx).context("Failed to initialise application")?;

    let mut terminal = term::setup_terminal(&app.theme)?;
    let res = run(&mut terminal, &mut app, task_rx);
    term::restore_terminal();

    if let Err(e) = &res {
        log::error!("Application error: {:#}", e);
    }

    res.context("Application error occurred")
}

/// Records every panic in the log.
///
/// A panic on the main thread ends the application, so the terminal is
/// restored before the default hook prints the message. Worker panics are
/// caught and reported in the UI, and must not write to the screen.
fn install_panic_hook() {
    let default_hook = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        log::error!("Panic: {}", info);
        if panic_ends_application(thread::current().name()) {
            term::restore_terminal();
            default_hook(info);
        }
    }));
}

fn panic_ends_application(thread_name: Option<&str>) -> bool {
    thread_name == Some("main")
}

/// Starts the application's background workers and enters the main event loop.
///
/// This function spawns several long-running background threads:
/// * A task worker to process asynchronous [`AppTask`]s.
/// * An input thread to poll for keyboard and mouse events.
/// * A tick thread to trigger periodic UI refreshes.
///
/// After spawning the workers, it requests the initial gallery load and hands
/// control to [`process_events`] to manage the UI and state updates.
///
/// # Errors
///
/// Returns an error if the event processing loop encounters an unrecoverable
/// application error.
fn run(terminal: &mut Tui, app: &mut App, task_rx: Receiver<AppTask>) -> Result<()> {
    // Spawn a background worker to process application tasks asynchronously.
    let task_event_tx = app.event_tx.clone();
    tasks::spawn_task_worker(&app.config, task_rx, task_event_tx);

    // Spawn a thread to translate raw terminal events to application events.
    let tx_input = app.event_tx.clone();
    thread::spawn(move || {
        loop {
            let sent = match event::read() {
                Ok(Event::Key(key)) => tx_input.send(AppEvent::Key(key)),
                Ok(Event::Mouse(mouse)) => tx_input.send(AppEvent::Mouse(mouse)),
                Ok(_) => Ok(()),
                Err(e) => {
                    log::warn!("Failed to read terminal event: {}", e);
                    Ok(())
                }
            };
            if sent.is_err() {
                break;
            }
        }
    });

    // Spawn a thread to send a periodic tick application event, this is
    // effectively the minimum "frame rate" for rendering the TUI application.
    let tx_tick = app.event_tx.clone();
    thread::spawn(move || {
        while tx_tick.send(AppEvent::Tick).is_ok() {
            thread::sleep(Duration::from_millis(250));
        }
    });

    // Initial trigger to populate the gallery
    app.event_tx
        .send(AppEvent::RequestLoad(app.config.photo_count))?;

    // Application event loop, process events until the user quits
    process_events(terminal, app)
}
