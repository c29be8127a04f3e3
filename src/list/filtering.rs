//! Filtering the list down to rows matching a query.
//!
//! Filtering always scans the unfiltered backup taken at construction, so
//! successive filters never compound and clearing the query restores the
//! original rows in their original order. The same matching rule as search
//! is used: [`Row::matches`].

use super::types::Row;
use super::Model;
use log::debug;

impl<R: Row> Model<R> {
    /// Filters the list to rows matching `query` and commits the query.
    ///
    /// The query is trimmed first. An empty query clears the filter and
    /// restores the unfiltered rows. Returns the number of rows shown.
    ///
    /// # Examples
    ///
    /// ```
    /// use bubbletea_listbox::list::Model;
    ///
    /// let mut list = Model::from_text("info: ok\nerr: bad\ninfo: done");
    /// assert_eq!(list.filter("  err "), 1);
    /// assert_eq!(list.filter_query(), Some("err"));
    ///
    /// assert_eq!(list.filter(""), 3);
    /// assert_eq!(list.filter_query(), None);
    /// ```
    pub fn filter(&mut self, query: &str) -> usize {
        let query = query.trim();
        if query.is_empty() {
            debug!("filter cleared");
            self.filter.query = None;
            self.replace_rows(self.unfiltered.clone());
            return self.rows.len();
        }

        let matched = self.filter_rows(query, &self.unfiltered);
        debug!("filter {query:?} matched {} rows", matched.len());
        self.filter.query = Some(query.to_string());
        self.replace_rows(matched);
        self.rows.len()
    }

    /// Returns the rows of `candidates` matching `query`, without touching
    /// the list's rows or committed filter.
    ///
    /// Used to check incoming rows against a filter independently of the
    /// filter applied to the list. An empty (after trimming) query matches
    /// every candidate.
    pub fn filter_rows(&self, query: &str, candidates: &[R]) -> Vec<R> {
        let query = query.trim();
        candidates
            .iter()
            .filter(|row| query.is_empty() || row.matches(query))
            .cloned()
            .collect()
    }
}
