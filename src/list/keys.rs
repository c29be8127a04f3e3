//! Key bindings for list navigation and search.
//!
//! The defaults follow vim conventions:
//!
//! - **Cursor Movement**: `↓/j` (down), `↑/k` (up)
//! - **Page Navigation**: `ctrl+d/pgdn` (page down), `ctrl+u/pgup` (page up)
//! - **Jump Navigation**: `g g/home` (first row), `G/end` (last row)
//! - **Search**: `n` (next match), `N` (previous match)
//!
//! `go_to_start_sequence` is the key that has to be pressed twice in a row;
//! `go_to_start` jumps immediately.

use crate::key::{Binding, KeyPress};
use crossterm::event::{KeyCode, KeyModifiers};

/// Key bindings for list navigation and search.
#[derive(Debug, Clone)]
pub struct ListKeyMap {
    /// Move focus up one row.
    pub cursor_up: Binding,
    /// Move focus down one row.
    pub cursor_down: Binding,
    /// Move focus down one page.
    pub page_down: Binding,
    /// Move focus up one page.
    pub page_up: Binding,
    /// Jump to the first row immediately.
    pub go_to_start: Binding,
    /// Jump to the first row when pressed twice in a row.
    pub go_to_start_sequence: Binding,
    /// Jump to the last row.
    pub go_to_end: Binding,
    /// Repeat the last search forward.
    pub search_next: Binding,
    /// Repeat the last search backward.
    pub search_prev: Binding,
}

impl Default for ListKeyMap {
    fn default() -> Self {
        let ctrl = |c: char| KeyPress::from((KeyCode::Char(c), KeyModifiers::CONTROL));
        Self {
            cursor_up: Binding::new(vec![KeyCode::Up.into(), KeyCode::Char('k').into()])
                .with_help("↑/k", "up"),
            cursor_down: Binding::new(vec![KeyCode::Down.into(), KeyCode::Char('j').into()])
                .with_help("↓/j", "down"),
            page_down: Binding::new(vec![ctrl('d'), KeyCode::PageDown.into()])
                .with_help("ctrl+d", "page down"),
            page_up: Binding::new(vec![ctrl('u'), KeyCode::PageUp.into()])
                .with_help("ctrl+u", "page up"),
            go_to_start: Binding::new(vec![KeyCode::Home.into()]).with_help("home", "go to start"),
            go_to_start_sequence: Binding::new(vec![KeyCode::Char('g').into()])
                .with_help("gg", "go to start"),
            go_to_end: Binding::new(vec![KeyCode::End.into(), KeyCode::Char('G').into()])
                .with_help("G/end", "go to end"),
            search_next: Binding::new(vec![KeyCode::Char('n').into()])
                .with_help("n", "next match"),
            search_prev: Binding::new(vec![KeyCode::Char('N').into()])
                .with_help("N", "previous match"),
        }
    }
}

impl ListKeyMap {
    /// Bindings in the order they are usually listed in a help line.
    pub fn bindings(&self) -> Vec<&Binding> {
        vec![
            &self.cursor_down,
            &self.cursor_up,
            &self.page_down,
            &self.page_up,
            &self.go_to_start_sequence,
            &self.go_to_end,
            &self.search_next,
            &self.search_prev,
        ]
    }
}
