//! Focus movement and vim-style key dispatch.

use super::types::{PendingKey, Row};
use super::Model;
use bubbletea_rs::KeyMsg;
use log::debug;

impl<R: Row> Model<R> {
    /// Moves focus down one row.
    ///
    /// Returns false when focus is already on the last row (or the list is
    /// empty), leaving the key to the caller's default handling.
    pub fn move_down(&mut self) -> bool {
        if self.focus + 1 >= self.rows.len() {
            return false;
        }
        self.set_focus(self.focus + 1);
        true
    }

    /// Moves focus up one row. Returns false when already on the first row.
    pub fn move_up(&mut self) -> bool {
        if self.focus == 0 || self.rows.is_empty() {
            return false;
        }
        self.set_focus(self.focus - 1);
        true
    }

    /// Moves focus down one page, stopping at the last row.
    pub fn move_page_down(&mut self) {
        self.set_focus(self.focus.saturating_add(self.page_size));
    }

    /// Moves focus up one page, stopping at the first row.
    pub fn move_page_up(&mut self) {
        self.set_focus(self.focus.saturating_sub(self.page_size));
    }

    /// Moves focus to the first row.
    pub fn jump_to_first(&mut self) {
        self.set_focus(0);
    }

    /// Moves focus to the last row.
    pub fn jump_to_last(&mut self) {
        self.set_focus(self.rows.len().saturating_sub(1));
    }

    /// Returns true while the first key of `g g` is waiting for the second.
    pub fn is_sequence_pending(&self) -> bool {
        self.pending == PendingKey::PendingG
    }

    /// Dispatches a key press to navigation and search.
    ///
    /// Returns whether the key was handled. Search failures do not escape:
    /// they are stored as the transient [`notice`](Model::notice).
    pub fn handle_key(&mut self, key: &KeyMsg) -> bool {
        debug!("list keypress {:?} {:?}", key.key, key.modifiers);
        self.notice = None;

        let sequence_key = self.keymap.go_to_start_sequence.matches(key);
        if self.pending == PendingKey::PendingG {
            self.pending = PendingKey::Idle;
            if sequence_key {
                self.jump_to_first();
                return true;
            }
        } else if sequence_key {
            self.pending = PendingKey::PendingG;
            return true;
        }

        if self.keymap.cursor_down.matches(key) {
            self.move_down()
        } else if self.keymap.cursor_up.matches(key) {
            self.move_up()
        } else if self.keymap.page_down.matches(key) {
            self.move_page_down();
            true
        } else if self.keymap.page_up.matches(key) {
            self.move_page_up();
            true
        } else if self.keymap.go_to_start.matches(key) {
            self.jump_to_first();
            true
        } else if self.keymap.go_to_end.matches(key) {
            self.jump_to_last();
            true
        } else if self.keymap.search_next.matches(key) {
            let result = self.find_next(None);
            self.record_search_result(result)
        } else if self.keymap.search_prev.matches(key) {
            let result = self.find_previous(None);
            self.record_search_result(result)
        } else {
            false
        }
    }

    fn record_search_result(&mut self, result: crate::error::Result<Option<usize>>) -> bool {
        if let Err(err) = result {
            self.notice = Some(err.to_string());
        }
        true
    }
}
