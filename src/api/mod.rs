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

//! Web API access.
//!
//! This module fetches the album listing used to build the album lookup. The
//! request is blocking and is only ever issued from the task worker thread.
//! There is no retry and no timeout beyond what the transport does by
//! default.

mod error;

pub(crate) use error::ApiError;

use ureq::{Agent, http::StatusCode};

use crate::model::Album;

/// A source of album metadata.
#[cfg_attr(test, mockall::automock)]
pub(crate) trait AlbumSource: Send {
    fn fetch_albums(&self) -> Result<Vec<Album>, ApiError>;
}

pub(crate) struct WebApi {
    agent: Agent,
    albums_url: String,
}

impl WebApi {
    pub(crate) fn new(albums_url: &str) -> Self {
        // Statuses are inspected by hand so the error can carry the reason.
        let agent = Agent::config_builder().http_status_as_error(false);

        Self {
            agent: agent.build().into(),
            albums_url: albums_url.to_string(),
        }
    }
}

impl AlbumSource for WebApi {
    fn fetch_albums(&self) -> Result<Vec<Album>, ApiError> {
        log::debug!("GET {}", self.albums_url);

        let mut response = self
            .agent
            .get(self.albums_url.as_str())
            .call()
            .map_err(|err| ApiError::Transport(err.to_string()))?;

        check_status(response.status())?;

        response
            .body_mut()
            .read_json::<Vec<Album>>()
            .map_err(|err| ApiError::Decode(err.to_string()))
    }
}

/// Maps a non-success HTTP status to an [`ApiError::Status`].
pub(crate) fn check_status(status: StatusCode) -> Result<(), ApiError> {
    if status.is_success() {
        return Ok(());
    }

    Err(ApiError::Status {
        status: status.as_u16(),
        status_text: status.canonical_reason().unwrap_or("Unknown").to_string(),
    })
}
