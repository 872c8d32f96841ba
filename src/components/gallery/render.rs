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

//! UI rendering logic for the gallery grid.
//!
//! Cards are laid out left to right in as many columns as fit, scrolling a
//! row at a time to keep the selected card on screen.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
};

use crate::{
    components::{CARD_HEIGHT, CARD_WIDTH, CardView, GalleryView},
    model::Photo,
    theme::Theme,
};

impl GalleryView {
    pub(crate) fn draw(&mut self, f: &mut Frame, area: Rect, photos: &[Photo], theme: &Theme) {
        self.card_areas.clear();

        if photos.is_empty() || area.width == 0 || area.height == 0 {
            return;
        }

        self.columns = usize::from((area.width / CARD_WIDTH).max(1));
        let visible_rows = usize::from((area.height / CARD_HEIGHT).max(1));
        self.scroll_to_selection(visible_rows);

        let first = self.offset * self.columns;
        let last = (first + visible_rows * self.columns).min(photos.len());

        for (i, photo) in photos[first..last].iter().enumerate() {
            let row = (i / self.columns) as u16;
            let column = (i % self.columns) as u16;

            let card_area = Rect {
                x: area.x + column * CARD_WIDTH,
                y: area.y + row * CARD_HEIGHT,
                width: CARD_WIDTH.min(area.width),
                height: CARD_HEIGHT.min(area.height),
            }
            .intersection(area);

            let card = CardView::from_photo(photo);
            let is_selected = self.selected == Some(first + i);
            draw_card(f, card_area, &card, is_selected, theme);

            self.card_areas.push((card_area, card.id));
        }
    }

    fn scroll_to_selection(&mut self, visible_rows: usize) {
        let Some(selected) = self.selected else {
            self.offset = 0;
            return;
        };

        let row = selected / self.columns;
        if row < self.offset {
            self.offset = row;
        } else if row >= self.offset + visible_rows {
            self.offset = row + 1 - visible_rows;
        }
    }
}

fn draw_card(f: &mut Frame, area: Rect, card: &CardView, is_selected: bool, theme: &Theme) {
    let border_colour = if is_selected {
        theme.accent_colour
    } else {
        theme.border_colour
    };

    let block = Block::bordered()
        .border_style(Style::default().fg(border_colour))
        .title(Span::styled(
            format!(" {} ", card.title),
            Style::default()
                .fg(theme.card_title_fg)
                .add_modifier(Modifier::BOLD),
        ));

    let button_style = if is_selected {
        Style::default().fg(theme.background_colour).bg(theme.accent_colour)
    } else {
        Style::default().fg(theme.accent_colour)
    };

    let lines = vec![
        Line::from(Span::styled(
            card.image.as_str(),
            Style::default().fg(theme.card_image_fg),
        )),
        Line::from(Span::styled(
            card.caption.as_str(),
            Style::default().fg(theme.card_caption_fg),
        )),
        Line::from(""),
        Line::from(Span::styled("[ View larger ]", button_style)),
    ];

    f.render_widget(Paragraph::new(lines).block(block), area);
}

#[cfg(test)]
mod tests {
    use ratatui::{Terminal, backend::TestBackend};

    use super::*;
    use crate::model::photos::synthesize_photos;

    fn screen(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn renders_one_card_per_photo() {
        let photos = synthesize_photos(3, "images");
        let mut view = GalleryView::new();
        view.reset(photos.len());

        let mut terminal = Terminal::new(TestBackend::new(90, 12)).unwrap();
        terminal
            .draw(|f| view.draw(f, f.area(), &photos, &Theme::default()))
            .unwrap();

        let text = screen(&terminal);
        assert!(text.contains("Goku 1"));
        assert!(text.contains("Goku 3"));
        assert!(text.contains("ID: 3 | Album: 2"));
        assert!(text.contains("images/3.jpeg"));
        assert_eq!(view.card_areas.len(), 3);
        assert_eq!(view.columns, 3);
    }

    #[test]
    fn empty_gallery_renders_nothing() {
        let mut view = GalleryView::new();
        view.reset(0);

        let mut terminal = Terminal::new(TestBackend::new(60, 12)).unwrap();
        terminal
            .draw(|f| view.draw(f, f.area(), &[], &Theme::default()))
            .unwrap();

        assert!(screen(&terminal).trim().is_empty());
        assert!(view.card_areas.is_empty());
    }

    #[test]
    fn scrolls_to_keep_selection_visible() {
        let photos = synthesize_photos(10, "images");
        let mut view = GalleryView::new();
        view.reset(photos.len());
        view.selected = Some(9);

        // Two columns, one row of cards.
        let mut terminal = Terminal::new(TestBackend::new(60, 6)).unwrap();
        terminal
            .draw(|f| view.draw(f, f.area(), &photos, &Theme::default()))
            .unwrap();

        assert_eq!(view.offset, 4);
        let text = screen(&terminal);
        assert!(text.contains("Goku 10"));
        assert!(!text.contains("Goku 2 "));
    }
}
