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

//! UI rendering logic for the detail overlay.

use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph, Wrap},
};

use crate::{
    components::{CLOSE_GLYPH, DetailOverlay},
    theme::Theme,
};

impl DetailOverlay {
    pub(crate) fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let content = centered_rect(area, 70, 80);

        f.render_widget(Clear, content);

        let close = Line::from(Span::styled(
            format!(" {} ", CLOSE_GLYPH),
            Style::default().fg(theme.accent_colour).add_modifier(Modifier::BOLD),
        ))
        .right_aligned();

        let block = Block::bordered()
            .border_style(Style::default().fg(theme.accent_colour))
            .style(Style::default().bg(theme.overlay_bg))
            .title(Line::from(format!(" {} ", self.photo.title)))
            .title(close);

        let lines = vec![
            Line::from(Span::styled(
                self.photo.url.as_str(),
                Style::default().fg(theme.card_image_fg),
            )),
            Line::from(""),
            Line::from(Span::styled(
                self.photo.title.as_str(),
                Style::default()
                    .fg(theme.card_title_fg)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                format!("ID: {}", self.photo.id),
                Style::default().fg(theme.card_caption_fg),
            )),
            Line::from(Span::styled(
                self.album_line(),
                Style::default().fg(theme.card_caption_fg),
            )),
            Line::from(""),
            Line::from(self.photo.description.as_str()),
            Line::from(""),
            Line::from(Span::styled(
                "Esc to close",
                Style::default().fg(theme.border_colour),
            )),
        ];

        f.render_widget(
            Paragraph::new(lines)
                .block(block)
                .wrap(Wrap { trim: true }),
            content,
        );

        // The close glyph sits on the top border, just inside the corner.
        let glyph_width = 3.min(content.width.saturating_sub(2));
        self.close_area = Some(Rect {
            x: content.right().saturating_sub(1 + glyph_width),
            y: content.y,
            width: glyph_width,
            height: 1,
        });
        self.content_area = Some(content);
    }
}

fn centered_rect(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Percentage(percent_y)])
        .flex(Flex::Center)
        .areas(area);
    let [centered] = Layout::horizontal([Constraint::Percentage(percent_x)])
        .flex(Flex::Center)
        .areas(row);

    centered
}

#[cfg(test)]
mod tests {
    use ratatui::{Terminal, backend::TestBackend};

    use super::*;
    use crate::model::photos::synthesize_photos;

    #[test]
    fn renders_the_same_fields_as_the_card() {
        let photo = synthesize_photos(4, "images").remove(3);
        let mut overlay = DetailOverlay::new(photo, Some("quidem".into()));

        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal
            .draw(|f| overlay.draw(f, f.area(), &Theme::default()))
            .unwrap();

        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect();

        assert!(text.contains("images/4.jpeg"));
        assert!(text.contains("ID: 4"));
        assert!(text.contains("Album: 2 (quidem)"));
        assert!(text.contains(CLOSE_GLYPH));

        let content = overlay.content_area.unwrap();
        let close = overlay.close_area.unwrap();
        assert_eq!(content, Rect::new(15, 3, 70, 24));
        assert!(content.contains(close.as_position()));
    }
}
