//! Incremental search with a single wraparound.
//!
//! A search walks the rows starting one past the focused row in the chosen
//! direction. On reaching either end it continues from the opposite end, and
//! gives up once it is back at the row it started from. The starting row is
//! the last one checked, so a pattern that only matches the focused row still
//! counts as found.

use super::types::{Row, SearchDirection};
use super::Model;
use crate::error::{ListError, Result};
use log::debug;

impl<R: Row> Model<R> {
    /// Searches forward, optionally replacing the stored pattern first.
    ///
    /// Returns the index of the matching row, or `None` when the resulting
    /// pattern is empty (which clears the search instead of moving).
    ///
    /// # Errors
    ///
    /// - [`ListError::NoPattern`] if no pattern was ever set
    /// - [`ListError::PatternNotFound`] if no row matches; the pattern is cleared
    ///
    /// # Examples
    ///
    /// ```
    /// use bubbletea_listbox::list::{Model, TextRow};
    ///
    /// let mut list = Model::from_text("web\ndb\ncache\nweb-2");
    /// assert_eq!(list.find_next(Some("web")).unwrap(), Some(3));
    /// assert_eq!(list.find_next(None).unwrap(), Some(0)); // wrapped around
    /// ```
    pub fn find_next(&mut self, pattern: Option<&str>) -> Result<Option<usize>> {
        self.search_with(pattern, SearchDirection::Forward)
    }

    /// Searches backward, optionally replacing the stored pattern first.
    ///
    /// Same contract as [`find_next`](Model::find_next).
    pub fn find_previous(&mut self, pattern: Option<&str>) -> Result<Option<usize>> {
        self.search_with(pattern, SearchDirection::Backward)
    }

    fn search_with(
        &mut self,
        pattern: Option<&str>,
        direction: SearchDirection,
    ) -> Result<Option<usize>> {
        if let Some(pattern) = pattern {
            self.search.pattern = Some(pattern.to_string());
        }
        self.search.direction = direction;

        let pattern = match self.search.pattern.as_deref() {
            None => return Err(ListError::NoPattern),
            Some("") => {
                self.search.pattern = None;
                return Ok(None);
            }
            Some(p) => p.to_string(),
        };

        match self.walk(&pattern, direction) {
            Some(index) => {
                self.set_focus(index);
                Ok(Some(index))
            }
            None => {
                debug!("search pattern {pattern:?} not found");
                self.search.pattern = None;
                Err(ListError::PatternNotFound(pattern))
            }
        }
    }

    /// Walks every row once, starting after focus and ending on it.
    fn walk(&self, pattern: &str, direction: SearchDirection) -> Option<usize> {
        let len = self.rows.len();
        (1..=len)
            .map(|step| match direction {
                SearchDirection::Forward => (self.focus + step) % len,
                SearchDirection::Backward => (self.focus + len - step % len) % len,
            })
            .find(|&index| self.rows[index].matches(pattern))
    }
}
