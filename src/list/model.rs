//! Main Model struct and core functionality for list components.
//!
//! This module contains the list model, its construction and configuration,
//! the row container operations and the reload signal.

use super::keys::ListKeyMap;
use super::style::ListStyles;
use super::types::{FilterState, PendingKey, Row, SearchState, TextRow};

/// Number of rows moved by page up / page down.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// A navigable, searchable, filterable list of rows.
///
/// The model owns a single row container. Rows visible to the user live in
/// `rows`; the snapshot taken at construction is kept as the unfiltered
/// backup that clearing a filter restores. `focus` is always a valid index
/// while the list is non-empty.
///
/// # Navigation
///
/// - **j / Down**, **k / Up**: move one row, stopping at the ends
/// - **ctrl+d / ctrl+u**: move one page
/// - **g g / Home**, **G / End**: jump to the first / last row
/// - **n / N**: repeat the last search forward / backward
///
/// # Examples
///
/// ```
/// use bubbletea_listbox::list::{Model, TextRow};
///
/// let mut list = Model::new(vec![TextRow::new("alpha"), TextRow::new("beta")]);
/// assert!(list.move_down());
/// assert_eq!(list.focus(), 1);
/// assert!(!list.move_down()); // already at the last row
/// ```
#[derive(Debug, Clone)]
pub struct Model<R: Row> {
    pub(super) title: String,
    pub(super) rows: Vec<R>,
    pub(super) unfiltered: Vec<R>,
    pub(super) focus: usize,

    // Key handling
    pub(super) keymap: ListKeyMap,
    pub(super) pending: PendingKey,
    pub(super) page_size: usize,

    // Search and filter
    pub(super) search: SearchState,
    pub(super) filter: FilterState,
    pub(super) notice: Option<String>,

    // View geometry
    pub(super) width: usize,
    pub(super) height: usize,
    pub(super) viewport_start: usize,
    pub(super) reload_generation: u64,
    pub(super) show_help: bool,
    pub(super) styles: ListStyles,
}

impl<R: Row> Model<R> {
    /// Creates a list over `rows`, focused on the first row.
    ///
    /// The rows are also snapshotted as the unfiltered backup.
    pub fn new(rows: Vec<R>) -> Self {
        Self {
            title: String::new(),
            unfiltered: rows.clone(),
            rows,
            focus: 0,
            keymap: ListKeyMap::default(),
            pending: PendingKey::Idle,
            page_size: DEFAULT_PAGE_SIZE,
            search: SearchState::default(),
            filter: FilterState::default(),
            notice: None,
            width: 80,
            height: 24,
            viewport_start: 0,
            reload_generation: 0,
            show_help: false,
            styles: ListStyles::default(),
        }
    }

    /// Sets the title shown above the rows; empty hides it.
    pub fn with_title(mut self, title: &str) -> Self {
        self.title = title.to_string();
        self
    }

    /// Sets how many rows page up / page down move. Zero is treated as one.
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    /// Sets the view size in terminal cells.
    pub fn with_size(mut self, width: usize, height: usize) -> Self {
        self.set_size(width, height);
        self
    }

    /// Replaces the key bindings.
    pub fn with_keymap(mut self, keymap: ListKeyMap) -> Self {
        self.keymap = keymap;
        self
    }

    /// Replaces the styles.
    pub fn with_styles(mut self, styles: ListStyles) -> Self {
        self.styles = styles;
        self
    }

    /// Shows or hides the key help line under the status line.
    pub fn with_show_help(mut self, show: bool) -> Self {
        self.set_show_help(show);
        self
    }

    /// Shows or hides the key help line and recomputes the visible window.
    pub fn set_show_help(&mut self, show: bool) {
        self.show_help = show;
        self.reload();
    }

    /// Returns true if the key help line is shown.
    pub fn show_help(&self) -> bool {
        self.show_help
    }

    /// Key bindings in use.
    pub fn keymap(&self) -> &ListKeyMap {
        &self.keymap
    }

    /// Mutable key bindings, e.g. to disable one.
    pub fn keymap_mut(&mut self) -> &mut ListKeyMap {
        &mut self.keymap
    }

    /// Updates the view size and recomputes the visible window.
    pub fn set_size(&mut self, width: usize, height: usize) {
        self.width = width;
        self.height = height;
        self.reload();
    }

    /// Rows currently shown (the filtered view while a filter is active).
    pub fn rows(&self) -> &[R] {
        &self.rows
    }

    /// The snapshot taken at construction, untouched by filtering.
    pub fn unfiltered_rows(&self) -> &[R] {
        &self.unfiltered
    }

    /// Index of the focused row.
    pub fn focus(&self) -> usize {
        self.focus
    }

    /// The focused row, if any.
    pub fn focused_row(&self) -> Option<&R> {
        self.rows.get(self.focus)
    }

    /// Number of rows currently shown.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if no rows are shown.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Rows moved by one page.
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Current search state.
    pub fn search_state(&self) -> &SearchState {
        &self.search
    }

    /// Current filter state.
    pub fn filter_state(&self) -> &FilterState {
        &self.filter
    }

    /// The committed filter query, if a filter is active.
    pub fn filter_query(&self) -> Option<&str> {
        self.filter.active_query()
    }

    /// Transient message left by the last key press, e.g. a search miss.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Clears the transient notice.
    pub fn clear_notice(&mut self) {
        self.notice = None;
    }

    /// First row index of the visible window.
    pub fn viewport_start(&self) -> usize {
        self.viewport_start
    }

    /// Counter bumped by every reload; renderers compare it to skip redundant work.
    pub fn reload_generation(&self) -> u64 {
        self.reload_generation
    }

    /// Moves focus to `index`, clamped to the last row, and reloads.
    pub fn set_focus(&mut self, index: usize) {
        self.focus = index.min(self.rows.len().saturating_sub(1));
        self.reload();
    }

    /// Replaces the shown rows, keeping the unfiltered backup as-is.
    ///
    /// Focus is clamped so it stays valid for the new rows.
    pub fn replace_rows(&mut self, rows: Vec<R>) {
        self.rows = rows;
        self.set_focus(self.focus);
    }

    /// Appends `row` and moves focus to it.
    pub fn append(&mut self, row: R) {
        self.rows.push(row);
        self.set_focus(self.rows.len() - 1);
    }

    /// Recomputes the visible window around the focused row.
    pub fn reload(&mut self) {
        self.sync_viewport_with_focus();
        self.reload_generation = self.reload_generation.wrapping_add(1);
    }

    /// Number of rows that fit in the view below the title and status lines.
    pub(super) fn rows_per_view(&self) -> usize {
        let header = usize::from(!self.title.is_empty());
        let footer = 1 + usize::from(self.show_help);
        self.height.saturating_sub(header + footer).max(1)
    }

    fn sync_viewport_with_focus(&mut self) {
        if self.rows.is_empty() {
            self.viewport_start = 0;
            return;
        }

        let per_view = self.rows_per_view();
        if self.focus >= self.viewport_start + per_view {
            self.viewport_start = self.focus + 1 - per_view;
        }
        if self.focus < self.viewport_start {
            self.viewport_start = self.focus;
        }

        let max_start = self.rows.len().saturating_sub(per_view);
        self.viewport_start = self.viewport_start.min(max_start);
    }
}

impl Model<TextRow> {
    /// Builds a read-only text pane: one row per line of `text`, blank lines kept.
    pub fn from_text(text: &str) -> Self {
        Self::new(TextRow::lines(text))
    }
}
