//! Navigable, searchable, filterable row list.
//!
//! This module exposes a generic `Model<R: Row>` plus supporting types:
//! - `Row`: implement for your row type; `TextRow` covers plain text lines
//! - `ListKeyMap`: vim-style key bindings
//! - `ListStyles`: lipgloss styles for rows and the status bar
//!
//! ## Row container
//!
//! The model owns one row container. `rows` is what the user sees; the
//! snapshot taken at construction is the unfiltered backup. Filtering scans
//! the backup and replaces `rows` with the matches; clearing the filter
//! restores the backup exactly. Live feeds append to `rows` only.
//!
//! ## Key handling
//!
//! `handle_key` returns whether a key was handled so an embedding model can
//! fall back to its own bindings. The `g g` jump is a two-state machine
//! (`Idle`, `PendingG`); any other key after the first `g` resets it and is
//! then handled normally.
//!
//! ## Errors
//!
//! `find_next` / `find_previous` return [`ListError`](crate::error::ListError).
//! When triggered from a key press the error becomes a transient notice
//! shown in place of the status bar until the next key.

mod filtering;
mod keys;
mod model;
mod navigation;
mod rendering;
mod search;
mod style;
mod types;


pub use keys::ListKeyMap;
pub use model::{Model, DEFAULT_PAGE_SIZE};
pub use style::{ListStyles, ELLIPSIS};
pub use types::{FilterState, PendingKey, Row, SearchDirection, SearchState, TextRow};

use bubbletea_rs::{Cmd, KeyMsg, Model as BubbleTeaModel, Msg};

impl<R: Row + Send + 'static> BubbleTeaModel for Model<R> {
    /// Starts with an empty list.
    fn init() -> (Self, Option<Cmd>) {
        (Self::new(vec![]), None)
    }

    /// Handles key messages; every other message is ignored.
    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if let Some(key_msg) = msg.downcast_ref::<KeyMsg>() {
            self.handle_key(key_msg);
        }
        None
    }

    fn view(&self) -> String {
        Model::view(self)
    }
}
