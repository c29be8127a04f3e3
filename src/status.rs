//! Status bar segments for search and filter state.
//!
//! [`status_segments`] is a pure projection of the list's [`SearchState`] and
//! [`FilterState`] into an ordered list of [`Segment`]s. The rendering layer
//! decides how to lay them out; [`render_segments`] is the default styling
//! used by the list view.
//!
//! ```rust
//! use bubbletea_listbox::list::{FilterState, SearchState};
//! use bubbletea_listbox::status::status_segments;
//!
//! let search = SearchState { pattern: Some("web".into()), ..Default::default() };
//! let filter = FilterState { query: Some("err".into()) };
//!
//! let texts: Vec<String> = status_segments(&search, &filter)
//!     .iter()
//!     .map(|s| s.text())
//!     .collect();
//! assert_eq!(texts, vec!["Search: web", ", ", "Filter: err"]);
//! ```

use crate::list::{FilterState, ListStyles, SearchState};
use unicode_width::UnicodeWidthStr;

/// Separator placed between the search and filter segments.
pub const SEPARATOR: &str = ", ";

/// What a status segment describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentKind {
    /// The active search pattern.
    Search,
    /// Separator between segments.
    Separator,
    /// The active filter query.
    Filter,
}

/// One piece of the status bar: a fixed label followed by a value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    /// What the segment shows.
    pub kind: SegmentKind,
    /// Fixed label, e.g. `"Search: "`.
    pub label: String,
    /// The pattern or query; empty for separators.
    pub value: String,
}

impl Segment {
    fn search(pattern: &str) -> Self {
        Self {
            kind: SegmentKind::Search,
            label: "Search: ".to_string(),
            value: pattern.to_string(),
        }
    }

    fn filter(query: &str) -> Self {
        Self {
            kind: SegmentKind::Filter,
            label: "Filter: ".to_string(),
            value: query.to_string(),
        }
    }

    fn separator() -> Self {
        Self {
            kind: SegmentKind::Separator,
            label: SEPARATOR.to_string(),
            value: String::new(),
        }
    }

    /// Unstyled text of the segment.
    pub fn text(&self) -> String {
        format!("{}{}", self.label, self.value)
    }

    /// Display width of the segment in terminal columns.
    pub fn width(&self) -> usize {
        self.label.width() + self.value.width()
    }
}

/// Projects search and filter state into status bar segments.
///
/// An active search yields a `Search` segment, an active filter a `Filter`
/// segment, with a separator between them when both are active. Inactive
/// state yields no segments.
pub fn status_segments(search: &SearchState, filter: &FilterState) -> Vec<Segment> {
    let mut segments = Vec::new();
    let pattern = search.active_pattern();
    let query = filter.active_query();

    if let Some(pattern) = pattern {
        segments.push(Segment::search(pattern));
    }
    if pattern.is_some() && query.is_some() {
        segments.push(Segment::separator());
    }
    if let Some(query) = query {
        segments.push(Segment::filter(query));
    }
    segments
}

/// Renders segments on one line with the status styles of `styles`.
pub fn render_segments(segments: &[Segment], styles: &ListStyles) -> String {
    segments
        .iter()
        .map(|s| {
            let mut out = styles.status_text.render(&s.label);
            if !s.value.is_empty() {
                out.push_str(&styles.status_value.render(&s.value));
            }
            out
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn search(p: &str) -> SearchState {
        SearchState {
            pattern: Some(p.to_string()),
            ..Default::default()
        }
    }

    fn filter(q: &str) -> FilterState {
        FilterState {
            query: Some(q.to_string()),
        }
    }

    #[test]
    fn test_inactive_state_is_empty() {
        assert!(status_segments(&SearchState::default(), &FilterState::default()).is_empty());
        assert!(status_segments(&search(""), &FilterState::default()).is_empty());
    }

    #[test]
    fn test_search_only() {
        let segments = status_segments(&search("nginx"), &FilterState::default());
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].kind, SegmentKind::Search);
        assert_eq!(segments[0].text(), "Search: nginx");
    }

    #[test]
    fn test_filter_only() {
        let segments = status_segments(&SearchState::default(), &filter("err"));
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].text(), "Filter: err");
    }

    #[test]
    fn test_both_have_separator() {
        let segments = status_segments(&search("a"), &filter("b"));
        let kinds: Vec<SegmentKind> = segments.iter().map(|s| s.kind).collect();
        assert_eq!(
            kinds,
            vec![SegmentKind::Search, SegmentKind::Separator, SegmentKind::Filter]
        );
    }

    #[test]
    fn test_inputs_not_mutated() {
        let s = search("a");
        let f = filter("b");
        let _ = status_segments(&s, &f);
        assert_eq!(s, search("a"));
        assert_eq!(f, filter("b"));
    }

    #[test]
    fn test_width_counts_columns() {
        let segments = status_segments(&search("日本"), &FilterState::default());
        assert_eq!(segments[0].width(), "Search: ".len() + 4);
    }

    #[test]
    fn test_render_contains_text() {
        let segments = status_segments(&search("web"), &filter("err"));
        let out = render_segments(&segments, &ListStyles::default());
        let plain = strip_ansi_escapes::strip_str(&out);
        let search_at = plain.find("Search:").unwrap();
        let filter_at = plain.find("Filter:").unwrap();
        assert!(search_at < filter_at);
        assert!(plain.contains("web"));
        assert!(plain.contains("err"));
    }
}
