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

//! Command-line input logic and state management.
//!
//! This module implements a vi-style command line, opened with `:`. When a
//! command is submitted it is parsed and the corresponding application event
//! is dispatched.

use std::sync::mpsc::Sender;

use anyhow::Result;
use crossterm::event::{Event, KeyCode};
use tui_input::{Input, backend::crossterm::EventHandler};

use crate::events::AppEvent;

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Command {
    Quit,
    Load(Option<usize>),
    Album(u32),
    All,
    Find(String),
    Clear,
}

/// Parses a submitted command line.
///
/// # Errors
///
/// Returns a message suitable for the error banner if the command is unknown
/// or its arguments are invalid.
pub(crate) fn parse_command(buffer: &str) -> Result<Command, String> {
    let parts: Vec<&str> = buffer.split_whitespace().collect();

    match parts.as_slice() {
        ["q"] | ["quit"] => Ok(Command::Quit),

        ["load"] => Ok(Command::Load(None)),
        ["load", count] => count
            .parse()
            .map(|n| Command::Load(Some(n)))
            .map_err(|_| format!("Invalid photo count: {}", count)),

        ["album", id] => id
            .parse()
            .map(Command::Album)
            .map_err(|_| format!("Invalid album id: {}", id)),
        ["album"] => Err("Usage: album <id>".to_string()),

        ["all"] => Ok(Command::All),
        ["clear"] => Ok(Command::Clear),

        ["find", term_parts @ ..] if !term_parts.is_empty() => {
            Ok(Command::Find(term_parts.join(" ")))
        }
        ["find"] => Err("Usage: find <term>".to_string()),

        [] => Err("No command given".to_string()),

        [cmd, ..] => Err(format!("Unknown command: {}", cmd)),
    }
}

pub(crate) struct Commander {
    active: bool,
    pub(crate) input: Input,
}

impl Commander {
    pub(crate) fn new() -> Self {
        Self {
            active: false,
            input: Input::default(),
        }
    }

    pub(crate) fn active(&self) -> bool {
        self.active
    }

    /// Handles a terminal event, returning `true` if the command line
    /// consumed it.
    pub(crate) fn handle_event(
        &mut self,
        event: &Event,
        event_tx: &Sender<AppEvent>,
        photo_count: usize,
    ) -> Result<bool> {
        let Event::Key(key_event) = event else {
            return Ok(false);
        };

        if !self.active {
            if key_event.code == KeyCode::Char(':') {
                self.active = true;
                return Ok(true);
            }
            return Ok(false);
        }

        match key_event.code {
            KeyCode::Esc => {
                self.active = false;
                self.input.reset();
            }

            KeyCode::Enter => {
                let buffer = self.input.value().trim().to_string();
                self.input.reset();
                self.active = false;

                if !buffer.is_empty() {
                    let event = match parse_command(&buffer) {
                        Ok(command) => command_event(command, photo_count),
                        Err(message) => AppEvent::Error(message),
                    };
                    event_tx.send(event)?;
                }
            }

            _ => {
                // Delegate all other key events to the managed input component.
                self.input.handle_event(event);
            }
        }

        Ok(true)
    }
}

fn command_event(command: Command, photo_count: usize) -> AppEvent {
    match command {
        Command::Quit => AppEvent::ExitApplication,
        Command::Load(count) => AppEvent::RequestLoad(count.unwrap_or(photo_count)),
        Command::Album(id) => AppEvent::FilterByAlbum(id),
        Command::All => AppEvent::ShowAll,
        Command::Find(term) => AppEvent::SearchChanged(term),
        Command::Clear => AppEvent::ClearGallery,
    }
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc;

    use crossterm::event::{KeyEvent, KeyModifiers};

    use super::*;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn parses_known_commands() {
        assert_eq!(parse_command("q"), Ok(Command::Quit));
        assert_eq!(parse_command("load"), Ok(Command::Load(None)));
        assert_eq!(parse_command("load 5"), Ok(Command::Load(Some(5))));
        assert_eq!(parse_command("album 2"), Ok(Command::Album(2)));
        assert_eq!(parse_command("  all "), Ok(Command::All));
        assert_eq!(parse_command("find goku 3"), Ok(Command::Find("goku 3".into())));
        assert_eq!(parse_command("clear"), Ok(Command::Clear));
    }

    #[test]
    fn rejects_bad_arguments() {
        assert!(parse_command("album two").unwrap_err().contains("two"));
        assert!(parse_command("load -1").is_err());
        assert!(parse_command("find").is_err());
        assert_eq!(parse_command("zap"), Err("Unknown command: zap".to_string()));
    }

    #[test]
    fn typed_command_is_dispatched_on_enter() {
        let (event_tx, event_rx) = mpsc::channel();
        let mut commander = Commander::new();

        assert!(commander.handle_event(&key(KeyCode::Char(':')), &event_tx, 10).unwrap());
        assert!(commander.active());

        for c in "album 3".chars() {
            commander.handle_event(&key(KeyCode::Char(c)), &event_tx, 10).unwrap();
        }
        commander.handle_event(&key(KeyCode::Enter), &event_tx, 10).unwrap();

        assert!(!commander.active());
        assert!(matches!(event_rx.try_recv(), Ok(AppEvent::FilterByAlbum(3))));
    }

    #[test]
    fn clear_command_empties_gallery() {
        let (event_tx, event_rx) = mpsc::channel();
        let mut commander = Commander::new();

        commander.handle_event(&key(KeyCode::Char(':')), &event_tx, 10).unwrap();
        for c in "clear".chars() {
            commander.handle_event(&key(KeyCode::Char(c)), &event_tx, 10).unwrap();
        }
        commander.handle_event(&key(KeyCode::Enter), &event_tx, 10).unwrap();

        assert!(matches!(event_rx.try_recv(), Ok(AppEvent::ClearGallery)));
        assert!(parse_command("clear all").is_err());
    }

    #[test]
    fn load_without_count_uses_configured_count() {
        assert!(matches!(
            command_event(Command::Load(None), 7),
            AppEvent::RequestLoad(7)
        ));
    }

    #[test]
    fn inactive_commander_ignores_keys() {
        let (event_tx, _event_rx) = mpsc::channel();
        let mut commander = Commander::new();

        assert!(!commander.handle_event(&key(KeyCode::Char('q')), &event_tx, 10).unwrap());
    }
}
