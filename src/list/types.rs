//! Core types and traits for list components.
//!
//! This module contains:
//! - the [`Row`] trait every list row implements
//! - [`TextRow`], the plain text row used by text panes and live feeds
//! - the search, filter and key-sequence state carried by the list model

use std::fmt::Display;

/// Trait for rows that can be displayed, searched and filtered in a list.
///
/// Rows expose their display text through [`Row::text`]. Searching and
/// filtering go through [`Row::matches`], which defaults to a case-sensitive
/// substring test on that text. Override it when a row carries more
/// searchable data than it displays.
///
/// # Examples
///
/// ```
/// use bubbletea_listbox::list::Row;
/// use std::fmt;
///
/// #[derive(Clone)]
/// struct Container {
///     name: String,
///     image: String,
/// }
///
/// impl fmt::Display for Container {
///     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
///         write!(f, "{}", self.name)
///     }
/// }
///
/// impl Row for Container {
///     fn text(&self) -> &str {
///         &self.name
///     }
///
///     // Search the image name too, although only the name is shown.
///     fn matches(&self, pattern: &str) -> bool {
///         self.name.contains(pattern) || self.image.contains(pattern)
///     }
/// }
///
/// let c = Container { name: "web".into(), image: "nginx:1.25".into() };
/// assert!(c.matches("nginx"));
/// ```
pub trait Row: Display + Clone {
    /// Returns the stripped display text of the row.
    fn text(&self) -> &str;

    /// Returns true if the row matches `pattern`.
    fn matches(&self, pattern: &str) -> bool {
        self.text().contains(pattern)
    }
}

/// A row holding one line of plain text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextRow {
    text: String,
}

impl TextRow {
    /// Creates a row from `text` as-is.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Splits `text` on newlines into rows, keeping blank lines.
    pub fn lines(text: &str) -> Vec<Self> {
        text.split('\n').map(Self::new).collect()
    }

    /// Like [`TextRow::lines`], decoding `bytes` as lossy UTF-8 first.
    pub fn lines_from_bytes(bytes: &[u8]) -> Vec<Self> {
        Self::lines(&String::from_utf8_lossy(bytes))
    }
}

impl Display for TextRow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

impl Row for TextRow {
    fn text(&self) -> &str {
        &self.text
    }
}

/// Direction of a search walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchDirection {
    /// Towards the end of the list.
    #[default]
    Forward,
    /// Towards the start of the list.
    Backward,
}

/// Stored search pattern and the direction of the last search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchState {
    /// The active pattern; `None` when no search is active.
    pub pattern: Option<String>,
    /// Direction of the most recent search.
    pub direction: SearchDirection,
}

impl SearchState {
    /// Returns the pattern if a non-empty one is set.
    pub fn active_pattern(&self) -> Option<&str> {
        self.pattern.as_deref().filter(|p| !p.is_empty())
    }
}

/// Committed filter query; `None` means no filter is active.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    /// The trimmed, non-empty query currently applied to the rows.
    pub query: Option<String>,
}

impl FilterState {
    /// Returns the query if a filter is active.
    pub fn active_query(&self) -> Option<&str> {
        self.query.as_deref()
    }
}

/// State of the two-key `g g` jump sequence.
///
/// ```text
/// Idle --g--> PendingG --g--> Idle (jump to first row)
/// PendingG --any other key--> Idle (key handled normally)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PendingKey {
    /// No sequence in progress.
    #[default]
    Idle,
    /// The first `g` was pressed.
    PendingG,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lines_keep_blanks() {
        let rows = TextRow::lines("a\n\nb");
        let texts: Vec<&str> = rows.iter().map(|r| r.text()).collect();
        assert_eq!(texts, vec!["a", "", "b"]);
    }

    #[test]
    fn test_lines_from_invalid_utf8() {
        let rows = TextRow::lines_from_bytes(b"ok\n\xffbad");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].text(), "ok");
        assert!(rows[1].text().ends_with("bad"));
    }

    #[test]
    fn test_default_match_is_case_sensitive_substring() {
        let row = TextRow::new("Error: disk full");
        assert!(row.matches("disk"));
        assert!(!row.matches("error"));
    }

    #[test]
    fn test_empty_search_pattern_is_inactive() {
        let state = SearchState {
            pattern: Some(String::new()),
            direction: SearchDirection::Forward,
        };
        assert_eq!(state.active_pattern(), None);
    }
}
