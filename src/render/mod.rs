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

//! User interface rendering logic.
//!
//! This module handles the translation of the [`App`] state into visual
//! widgets using the `ratatui` framework. It is responsible for layout
//! management, widget styling, and terminal frame composition.
//!
//! # Rendering Pipeline
//!
//! The primary entry point is the [`draw`] function, which is called on every
//! terminal tick or state change. The whole screen is drawn from state each
//! time, nothing is patched incrementally.

mod commander;
mod status;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::{Modifier, Style},
    widgets::{Block, Padding, Paragraph},
};

use crate::{
    App, Focus,
    render::{
        commander::draw_commander,
        status::{draw_banner, draw_stats},
    },
};

/// Renders the user interface to the terminal frame.
///
/// The screen is split top to bottom into the header with the search input,
/// the loading/error banner, the gallery grid, the stats bar and the command
/// line. The detail overlay, if open, is drawn last over everything else.
pub(crate) fn draw(f: &mut Frame, app: &mut App) {
    let area = f.area();

    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);

    let header = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(20), Constraint::Min(10)])
        .split(outer[0]);

    let title = Paragraph::new("Photo Gallery")
        .style(
            Style::default()
                .fg(app.theme.accent_colour)
                .add_modifier(Modifier::BOLD),
        )
        .block(Block::default().padding(Padding::new(1, 1, 1, 0)));
    f.render_widget(title, header[0]);

    app.search_bar
        .draw(f, header[1], app.focus == Focus::Search, &app.theme);

    draw_banner(f, outer[1], app);

    app.gallery_view
        .draw(f, outer[2], app.gallery.visible(), &app.theme);

    draw_stats(f, outer[3], app);

    draw_commander(f, outer[4], app);

    if let Some(detail) = app.detail.as_mut() {
        detail.draw(f, area, &app.theme);
    }
}
