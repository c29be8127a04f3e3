#![warn(missing_docs)]

//! # bubbletea-listbox
//!
//! List-display engine for terminal dashboards built on [bubbletea-rs](https://github.com/joshka/bubbletea-rs):
//! a navigable, searchable, filterable row list, and a live-tailing variant that
//! streams lines from a background source into that list while keeping key
//! handling on the main loop.
//!
//! ## Components
//!
//! | Component | Description | Use Case |
//! |-----------|-------------|----------|
//! | `List` | Row list with vim movement, wraparound search and filtering | Container and image lists, text panes |
//! | `LiveFeed` | `List` fed by a worker thread reading a line source | Log tailing, event streams |
//! | `status` | Search / filter state projected into status bar segments | Status line |
//! | `key` | Key bindings matched against `KeyMsg` | Custom key maps |
//!
//! ## Quick Start
//!
//! ```rust
//! use bubbletea_listbox::prelude::*;
//!
//! let mut list = List::from_text("web\ndb\ncache");
//! list.find_next(Some("db")).unwrap();
//! assert_eq!(list.focus(), 1);
//!
//! list.filter("c");
//! assert_eq!(list.len(), 1);
//! list.filter("");
//! assert_eq!(list.len(), 3);
//! ```
//!
//! ## Live feeds inside a bubbletea program
//!
//! The feed's worker never mutates the list. Schedule [`LiveFeed::tick`] from
//! your model's `init` and forward messages to [`LiveFeed::update`]; each tick
//! drains the queued rows on the main loop.
//!
//! ```rust
//! use bubbletea_listbox::prelude::*;
//! use bubbletea_rs::{Cmd, Msg};
//! use std::sync::Arc;
//!
//! struct Logs {
//!     feed: LiveFeed,
//! }
//!
//! impl Logs {
//!     fn start(lines: Vec<String>) -> (Self, Cmd) {
//!         let feed = LiveFeed::from_lines(lines, Arc::new(|| {}), None).unwrap();
//!         let tick = feed.tick();
//!         (Self { feed }, tick)
//!     }
//!
//!     fn update(&mut self, msg: Msg) -> Option<Cmd> {
//!         self.feed.update(&msg)
//!     }
//! }
//! ```

pub mod error;
pub mod feed;
pub mod key;
pub mod list;
pub mod status;

pub use error::{ListError, Result};
pub use feed::{FeedTickMsg, ListMut, LiveFeed, RefreshSink};
pub use key::{Binding, KeyPress};
pub use list::Model as List;
pub use list::{
    FilterState, ListKeyMap, ListStyles, PendingKey, Row, SearchDirection, SearchState, TextRow,
};
pub use status::{status_segments, Segment, SegmentKind};

/// Prelude module for convenient imports.
///
/// ```rust
/// use bubbletea_listbox::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{ListError, Result};
    pub use crate::feed::{FeedTickMsg, ListMut, LiveFeed, RefreshSink};
    pub use crate::key::{Binding, KeyPress};
    pub use crate::list::Model as List;
    pub use crate::list::{
        FilterState, ListKeyMap, ListStyles, Row, SearchDirection, SearchState, TextRow,
    };
    pub use crate::status::{status_segments, Segment, SegmentKind};
}
