//! Background worker that reads the line source.

use crate::list::TextRow;
use log::{debug, warn};
use std::fmt::Display;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::Sender;
use std::sync::{Arc, RwLock};

/// Filter query shared between the main loop and the worker.
pub(super) type SharedQuery = Arc<RwLock<Option<String>>>;

/// Zero-argument callback asking the UI to re-render. Called from the worker thread.
pub type RefreshSink = Arc<dyn Fn() + Send + Sync>;

/// Decodes a raw line lossily, drops ANSI escape sequences and trims whitespace.
pub fn normalize_line(raw: &[u8]) -> String {
    let decoded = String::from_utf8_lossy(raw);
    strip_ansi_escapes::strip_str(decoded).trim().to_string()
}

pub(super) fn read_query(query: &SharedQuery) -> Option<String> {
    match query.read() {
        Ok(guard) => guard.clone(),
        Err(poisoned) => poisoned.into_inner().clone(),
    }
}

pub(super) fn write_query(query: &SharedQuery, value: Option<String>) {
    match query.write() {
        Ok(mut guard) => *guard = value,
        Err(poisoned) => *poisoned.into_inner() = value,
    }
}

pub(super) struct Worker {
    pub(super) id: usize,
    pub(super) rows: Sender<TextRow>,
    pub(super) cancelled: Arc<AtomicBool>,
    pub(super) filter_query: SharedQuery,
    pub(super) refresh: RefreshSink,
}

impl Worker {
    /// Streams `lines` into the row queue until the source ends, fails, or
    /// the feed is cancelled.
    pub(super) fn run<I, L, E>(self, lines: I)
    where
        I: Iterator<Item = Result<L, E>>,
        L: AsRef<[u8]>,
        E: Display,
    {
        debug!("live feed {} worker started", self.id);
        for item in lines {
            let raw = match item {
                Ok(raw) => raw,
                Err(err) => {
                    warn!("live feed {} source failed: {err}", self.id);
                    break;
                }
            };
            let line = normalize_line(raw.as_ref());

            if self.cancelled.load(Ordering::Acquire) {
                break;
            }
            if let Some(query) = read_query(&self.filter_query) {
                if !line.contains(&query) {
                    continue;
                }
            }
            if self.rows.send(TextRow::new(line)).is_err() {
                // Receiver dropped with the owning feed.
                break;
            }
            (self.refresh)();
        }
        debug!("live feed {} worker stopped", self.id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_ansi_and_whitespace() {
        assert_eq!(normalize_line(b"\x1b[31mred\x1b[0m  \r\n"), "red");
        assert_eq!(normalize_line(b"  plain "), "plain");
    }

    #[test]
    fn test_normalize_invalid_utf8() {
        let line = normalize_line(b"ok \xff");
        assert!(line.starts_with("ok"));
    }

    #[test]
    fn test_shared_query_round_trip() {
        let query: SharedQuery = Arc::new(RwLock::new(None));
        write_query(&query, Some("err".into()));
        assert_eq!(read_query(&query).as_deref(), Some("err"));
        write_query(&query, None);
        assert_eq!(read_query(&query), None);
    }
}
