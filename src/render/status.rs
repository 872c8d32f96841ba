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

//! Render the loading and error banner and the gallery stats bar.

use ratatui::{
    Frame,
    layout::{Margin, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::{App, model::gallery::LoadStatus};

pub(crate) fn draw_banner(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;

    let line = match (&app.error, app.gallery.status()) {
        (Some(message), _) | (None, LoadStatus::Failed(message)) => Line::from(Span::styled(
            message.as_str(),
            Style::default()
                .fg(theme.error_fg)
                .add_modifier(Modifier::BOLD),
        )),
        (None, LoadStatus::Loading) => Line::from(Span::styled(
            "Loading photos...",
            Style::default().fg(theme.loading_fg),
        )),
        (None, LoadStatus::Idle | LoadStatus::Loaded) => return,
    };

    f.render_widget(Paragraph::new(line), area.inner(Margin::new(1, 0)));
}

/// Draws the photo and album totals, or nothing when the gallery is empty.
pub(crate) fn draw_stats(f: &mut Frame, area: Rect, app: &App) {
    let Some(stats) = app.gallery.stats() else {
        return;
    };

    let text = format!(
        "Photos: {}   Albums: {}",
        stats.total_photos, stats.total_albums
    );

    f.render_widget(
        Paragraph::new(text).style(Style::default().fg(app.theme.stats_fg)),
        area.inner(Margin::new(1, 0)),
    );
}
