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

//! Event routing for the search input.

use crossterm::event::{Event, KeyCode};
use tui_input::backend::crossterm::EventHandler;

use crate::components::{SearchAction, SearchBar};

impl SearchBar {
    /// Handles input while the search bar has focus.
    ///
    /// `Esc` and `Enter` hand focus back, anything else edits the term.
    pub(crate) fn process_event(&mut self, event: &Event) -> Option<SearchAction> {
        let Event::Key(key_event) = event else {
            return None;
        };

        match key_event.code {
            KeyCode::Esc | KeyCode::Enter => Some(SearchAction::Done),
            _ => self
                .input
                .handle_event(event)
                .filter(|changed| changed.value)
                .map(|_| SearchAction::Changed(self.input.value().to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyEvent, KeyModifiers};

    use super::*;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn typing_reports_every_change() {
        let mut search = SearchBar::new();

        let mut last = None;
        for c in "Goku".chars() {
            if let Some(SearchAction::Changed(term)) = search.process_event(&key(KeyCode::Char(c))) {
                last = Some(term);
            }
        }

        assert_eq!(last.as_deref(), Some("Goku"));
        assert_eq!(search.value(), "Goku");
    }

    #[test]
    fn backspace_to_empty_reports_empty_term() {
        let mut search = SearchBar::new();
        search.process_event(&key(KeyCode::Char('g')));

        let action = search.process_event(&key(KeyCode::Backspace));

        assert!(matches!(action, Some(SearchAction::Changed(term)) if term.is_empty()));
    }

    #[test]
    fn cursor_movement_is_not_a_change() {
        let mut search = SearchBar::new();
        search.process_event(&key(KeyCode::Char('g')));

        assert!(search.process_event(&key(KeyCode::Left)).is_none());
    }

    #[test]
    fn escape_finishes_without_clearing() {
        let mut search = SearchBar::new();
        search.process_event(&key(KeyCode::Char('x')));

        assert!(matches!(search.process_event(&key(KeyCode::Esc)), Some(SearchAction::Done)));
        assert_eq!(search.value(), "x");
    }
}
