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

//! Reusable UI components.
//!
//! Each component keeps its own view state and is split into the state
//! itself, an `event` module translating terminal input into component
//! actions, and a `render` module drawing it with `ratatui`.

mod detail;
mod gallery;
mod search;

pub(crate) use detail::{CLOSE_GLYPH, DetailAction, DetailOverlay};
pub(crate) use gallery::{CARD_HEIGHT, CARD_WIDTH, CardView, GalleryAction, GalleryView};
pub(crate) use search::{SearchAction, SearchBar};
