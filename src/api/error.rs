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

use thiserror::Error;

/// Failures while fetching data from the web API.
#[derive(Debug, Error)]
pub(crate) enum ApiError {
    /// The server answered with a non-success status.
    #[error("HTTP error: {status} - {status_text}")]
    Status { status: u16, status_text: String },

    #[error("network error: {0}")]
    Transport(String),

    #[error("invalid response body: {0}")]
    Decode(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_carries_code_and_text() {
        let err = ApiError::Status {
            status: 404,
            status_text: "Not Found".to_string(),
        };

        assert_eq!(err.to_string(), "HTTP error: 404 - Not Found");
    }
}
