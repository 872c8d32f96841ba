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

//! Asynchronous application task processing.
//!
//! This module implements the command pattern used to offload tasks such as
//! potentially blocking network requests from the main UI thread. It provides
//! a dedicated worker loop that translates [`AppTask`] requests into work and
//! broadcasts the results back to the application via [`AppEvent`]s.
//!
//! Tasks are processed one at a time in submission order. A load requested
//! while another is still running is not suppressed, it simply completes
//! later and its result replaces the earlier one.

mod handlers;

use std::{
    panic::{self, AssertUnwindSafe},
    sync::mpsc::{Receiver, Sender},
    thread,
};

use anyhow::Result;

use crate::{
    api::{AlbumSource, WebApi},
    config::AppConfig,
    events::AppEvent,
};

pub(crate) const UNEXPECTED_ERROR: &str = "An unexpected error occurred";

#[derive(Debug)]
pub(crate) enum AppTask {
    LoadGallery(usize),
}

/// Spawns a background thread to process application tasks.
///
/// # Arguments
///
/// * `config` - The application configuration.
/// * `task_rx` - The receiving end of the task channel.
/// * `event_tx` - The sending end of the channel for broadcasting results.
pub(crate) fn spawn_task_worker(
    config: &AppConfig,
    task_rx: Receiver<AppTask>,
    event_tx: Sender<AppEvent>,
) {
    let config = config.clone();

    thread::spawn(move || {
        let api = WebApi::new(&config.albums_url);

        while let Ok(task) = task_rx.recv() {
            let mut ctx = TaskContext {
                config: &config,
                event_tx: &event_tx,
                albums: &api,
            };

            run_task(task, &mut ctx);
        }

        log::debug!("Task channel closed, worker exiting");
    });
}

/// Bundles shared resources required by task handlers to simplify resource
/// passing when invoking those handler functions.
pub(crate) struct TaskContext<'a> {
    pub(crate) config: &'a AppConfig,
    pub(crate) event_tx: &'a Sender<AppEvent>,
    pub(crate) albums: &'a dyn AlbumSource,
}

/// Runs a task, reporting any failure back to the UI instead of taking the
/// worker down.
pub(crate) fn run_task(task: AppTask, ctx: &mut TaskContext) {
    match panic::catch_unwind(AssertUnwindSafe(|| handle_task(task, ctx))) {
        Ok(Ok(())) => {}
        Ok(Err(e)) => {
            log::error!("Task failed: {:#}", e);
            let _ = ctx.event_tx.send(AppEvent::Error(e.to_string()));
        }
        Err(_) => {
            log::error!("Task panicked");
            let _ = ctx.event_tx.send(AppEvent::Error(UNEXPECTED_ERROR.to_string()));
        }
    }
}

fn handle_task(task: AppTask, ctx: &mut TaskContext) -> Result<()> {
    match task {
        AppTask::LoadGallery(limit) => handlers::load_gallery(ctx, limit),
    }
}
