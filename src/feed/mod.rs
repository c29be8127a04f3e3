//! Live-tailing list fed by a background line source.
//!
//! A [`LiveFeed`] owns a [`list::Model`](crate::list::Model) of text rows and
//! one worker thread reading an external line source (container logs, event
//! streams). The worker never touches the list: it normalizes each line,
//! drops it if the active filter rejects it, pushes it onto a channel and
//! calls the refresh sink. The main loop calls [`LiveFeed::drain`] once per
//! tick to append queued rows, which keeps all list mutation on one thread.
//!
//! ```text
//! source ──> worker ──(mpsc)──> drain() on main loop ──> list.append()
//!              │
//!              └──> refresh()  (wakes the main loop)
//! ```
//!
//! ## Cancellation
//!
//! [`LiveFeed::cancel`] sets a flag the worker checks after each line it
//! reads, so cancellation is observed within one line. A source that blocks
//! without producing lines delays the worker's exit until it yields or ends;
//! reads are never interrupted. Rows still queued at cancellation are
//! discarded. Dropping the feed cancels it without waiting.
//!
//! ## Errors
//!
//! A failing source ends the worker quietly (the error is logged). The list
//! just stops growing; [`LiveFeed::is_running`] reports the ended feed.
//!
//! ## Example
//!
//! ```rust
//! use bubbletea_listbox::feed::LiveFeed;
//! use std::sync::Arc;
//!
//! let mut feed = LiveFeed::from_lines(vec!["a", "b"], Arc::new(|| {}), Some("seed")).unwrap();
//! feed.join();
//! feed.drain();
//! assert_eq!(feed.list().len(), 3);
//! ```

mod worker;


pub use worker::{normalize_line, RefreshSink};

use crate::error::Result;
use crate::list::{Model, Row, TextRow};
use bubbletea_rs::{tick, Cmd, KeyMsg, Msg};
use log::debug;
use std::convert::Infallible;
use std::fmt::Display;
use std::ops::{Deref, DerefMut};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::mpsc::{self, Receiver};
use std::sync::{Arc, RwLock};
use std::thread::{self, JoinHandle};
use std::time::Duration;
use worker::{read_query, write_query, SharedQuery, Worker};

// Used to route tick messages to the feed that scheduled them.
static LAST_ID: AtomicUsize = AtomicUsize::new(0);

fn next_id() -> usize {
    LAST_ID.fetch_add(1, Ordering::Relaxed)
}

const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(50);

/// Periodic message asking a feed to drain its queue.
#[derive(Debug, Clone)]
pub struct FeedTickMsg {
    /// Id of the feed that scheduled the tick.
    pub id: usize,
}

/// Turns seed text into rows: each line trimmed, blank lines dropped.
fn seed_rows(seed: &str) -> Vec<TextRow> {
    seed.split('\n')
        .map(|line| normalize_line(line.as_bytes()))
        .filter(|line| !line.is_empty())
        .map(TextRow::new)
        .collect()
}

/// A list that tails an external line source.
pub struct LiveFeed {
    id: usize,
    list: Model<TextRow>,
    rows: Receiver<TextRow>,
    cancelled: Arc<AtomicBool>,
    filter_query: SharedQuery,
    worker: Option<JoinHandle<()>>,
    tick_interval: Duration,
}

impl LiveFeed {
    /// Starts tailing `source`.
    ///
    /// `seed` text is loaded synchronously before streaming begins, one row
    /// per non-blank line. `refresh` is called from the worker thread after
    /// every accepted line; it must be safe to call off the main loop.
    ///
    /// # Errors
    ///
    /// Returns [`ListError::Spawn`](crate::error::ListError::Spawn) if the
    /// worker thread cannot be started.
    pub fn spawn<S, L, E>(source: S, refresh: RefreshSink, seed: Option<&str>) -> Result<Self>
    where
        S: IntoIterator<Item = std::result::Result<L, E>>,
        S::IntoIter: Send + 'static,
        L: AsRef<[u8]> + 'static,
        E: Display + 'static,
    {
        let id = next_id();
        let list = Model::new(seed.map(seed_rows).unwrap_or_default());
        let (tx, rx) = mpsc::channel();
        let cancelled = Arc::new(AtomicBool::new(false));
        let filter_query: SharedQuery = Arc::new(RwLock::new(None));

        let worker = Worker {
            id,
            rows: tx,
            cancelled: Arc::clone(&cancelled),
            filter_query: Arc::clone(&filter_query),
            refresh,
        };
        let lines = source.into_iter();
        let handle = thread::Builder::new()
            .name(format!("live-feed-{id}"))
            .spawn(move || worker.run(lines))?;

        Ok(Self {
            id,
            list,
            rows: rx,
            cancelled,
            filter_query,
            worker: Some(handle),
            tick_interval: DEFAULT_TICK_INTERVAL,
        })
    }

    /// Like [`spawn`](LiveFeed::spawn) for sources that cannot fail.
    pub fn from_lines<S, L>(lines: S, refresh: RefreshSink, seed: Option<&str>) -> Result<Self>
    where
        S: IntoIterator<Item = L>,
        S::IntoIter: Send + 'static,
        L: AsRef<[u8]> + 'static,
    {
        Self::spawn(lines.into_iter().map(Ok::<L, Infallible>), refresh, seed)
    }

    /// Sets how often [`tick`](LiveFeed::tick) fires.
    pub fn with_tick_interval(mut self, interval: Duration) -> Self {
        self.tick_interval = interval;
        self
    }

    /// Unique id of this feed, carried by its [`FeedTickMsg`]s.
    pub fn id(&self) -> usize {
        self.id
    }

    /// The list rows are appended to.
    pub fn list(&self) -> &Model<TextRow> {
        &self.list
    }

    /// Mutable access to the list.
    ///
    /// The returned guard publishes the list's filter query to the worker
    /// when it is dropped, so filtering through it is seen by the worker
    /// from the next line on.
    pub fn list_mut(&mut self) -> ListMut<'_> {
        ListMut { feed: self }
    }

    /// Filters the list and publishes the query to the worker.
    ///
    /// Returns the number of rows shown.
    pub fn filter(&mut self, query: &str) -> usize {
        let shown = self.list.filter(query);
        self.publish_filter();
        shown
    }

    /// Copies the list's filter query to the worker. The list's
    /// [`FilterState`](crate::list::FilterState) is the source of truth, so a
    /// filter set through [`list_mut`](LiveFeed::list_mut) is picked up here.
    fn publish_filter(&self) {
        let current = self.list.filter_query();
        if read_query(&self.filter_query).as_deref() != current {
            write_query(&self.filter_query, current.map(str::to_string));
        }
    }

    /// Appends rows queued by the worker, moving focus to the last one.
    ///
    /// Rows are checked again against the current filter, since it may have
    /// changed after the worker queued them. After cancellation queued rows
    /// are discarded. Returns the number of rows appended.
    pub fn drain(&mut self) -> usize {
        self.publish_filter();
        if self.is_cancelled() {
            while self.rows.try_recv().is_ok() {}
            return 0;
        }

        let mut appended = 0;
        while let Ok(row) = self.rows.try_recv() {
            let accepted = self.list.filter_query().map_or(true, |q| row.matches(q));
            if accepted {
                self.list.append(row);
                appended += 1;
            }
        }
        appended
    }

    /// Requests the worker to stop. Returns false if it was already cancelled.
    pub fn cancel(&self) -> bool {
        let first = !self.cancelled.swap(true, Ordering::AcqRel);
        if first {
            debug!("live feed {} cancelled", self.id);
        }
        first
    }

    /// Returns true once [`cancel`](LiveFeed::cancel) was called.
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }

    /// Returns true while the worker thread is alive.
    pub fn is_running(&self) -> bool {
        self.worker.as_ref().is_some_and(|h| !h.is_finished())
    }

    /// Blocks until the worker exits.
    ///
    /// Returns false if the worker panicked (for example inside the refresh
    /// sink). Blocks for as long as the source does; cancel first to stop a
    /// live source.
    pub fn join(&mut self) -> bool {
        match self.worker.take() {
            Some(handle) => handle.join().is_ok(),
            None => true,
        }
    }

    /// Command that emits this feed's [`FeedTickMsg`] after the tick interval.
    pub fn tick(&self) -> Cmd {
        let id = self.id;
        tick(self.tick_interval, move |_| Box::new(FeedTickMsg { id }) as Msg)
    }

    /// Handles this feed's ticks and forwards key presses to the list.
    ///
    /// A tick drains the queue and schedules the next tick while the worker
    /// is alive. Ticks from other feeds are ignored.
    pub fn update(&mut self, msg: &Msg) -> Option<Cmd> {
        if let Some(tick_msg) = msg.downcast_ref::<FeedTickMsg>() {
            if tick_msg.id != self.id || self.is_cancelled() {
                return None;
            }
            // Checked before draining so rows sent just before exit are not missed.
            let running = self.is_running();
            self.drain();
            if running {
                return Some(self.tick());
            }
            debug!("live feed {} ended", self.id);
            return None;
        }

        if let Some(key_msg) = msg.downcast_ref::<KeyMsg>() {
            self.list.handle_key(key_msg);
        }
        None
    }

    /// Renders the list.
    pub fn view(&self) -> String {
        self.list.view()
    }
}

/// Mutable borrow of a feed's list, returned by [`LiveFeed::list_mut`].
pub struct ListMut<'a> {
    feed: &'a mut LiveFeed,
}

impl Deref for ListMut<'_> {
    type Target = Model<TextRow>;

    fn deref(&self) -> &Self::Target {
        &self.feed.list
    }
}

impl DerefMut for ListMut<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.feed.list
    }
}

impl Drop for ListMut<'_> {
    fn drop(&mut self) {
        self.feed.publish_filter();
    }
}

impl Drop for LiveFeed {
    fn drop(&mut self) {
        self.cancel();
    }
}
