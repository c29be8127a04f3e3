//! View rendering for list components.
//!
//! - Header: optional title
//! - Rows: the visible window starting at `viewport_start`, focused row highlighted
//! - Footer: transient notice, or search/filter status segments
//! - Help: enabled key bindings, when `show_help` is on

use super::style::ELLIPSIS;
use super::types::Row;
use super::Model;
use crate::status::{render_segments, status_segments};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const HELP_SEPARATOR: &str = " • ";

/// Cuts `text` to at most `width` columns, marking the cut with an ellipsis.
pub(super) fn truncate(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    let budget = width.saturating_sub(ELLIPSIS.width());
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(ch);
    }
    if width > 0 {
        out.push_str(ELLIPSIS);
    }
    out
}

impl<R: Row> Model<R> {
    pub(super) fn view_header(&self) -> Option<String> {
        if self.title.is_empty() {
            return None;
        }
        Some(self.styles.title.render(&self.title))
    }

    pub(super) fn view_rows(&self) -> String {
        if self.rows.is_empty() {
            return self.styles.no_rows.render("No rows.");
        }

        self.rows
            .iter()
            .enumerate()
            .skip(self.viewport_start)
            .take(self.rows_per_view())
            .map(|(index, row)| {
                let text = truncate(&row.to_string(), self.width);
                if index == self.focus {
                    self.styles.focused_row.render(&text)
                } else {
                    self.styles.row.render(&text)
                }
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub(super) fn view_footer(&self) -> String {
        if let Some(notice) = &self.notice {
            return self.styles.notice.render(&truncate(notice, self.width));
        }
        render_segments(&status_segments(&self.search, &self.filter), &self.styles)
    }

    /// Short help line listing the enabled bindings, e.g. `↓/j down • ↑/k up`.
    pub(super) fn view_help(&self) -> String {
        let separator = self.styles.help_desc.render(HELP_SEPARATOR);
        let mut out = String::new();
        let mut used = 0;
        for binding in self.keymap.bindings() {
            if !binding.enabled() {
                continue;
            }
            let help = binding.help();
            if help.key.is_empty() {
                continue;
            }
            let entry_width = help.key.width() + 1 + help.desc.width();
            let sep_width = if used == 0 { 0 } else { HELP_SEPARATOR.width() };
            if used + sep_width + entry_width > self.width {
                break;
            }
            if used > 0 {
                out.push_str(&separator);
            }
            out.push_str(&self.styles.help_key.render(&help.key));
            out.push(' ');
            out.push_str(&self.styles.help_desc.render(&help.desc));
            used += sep_width + entry_width;
        }
        out
    }

    /// Renders header, visible rows, status footer and the optional help line.
    pub fn view(&self) -> String {
        let mut sections = Vec::new();
        if let Some(header) = self.view_header() {
            sections.push(header);
        }
        sections.push(self.view_rows());
        sections.push(self.view_footer());
        if self.show_help {
            sections.push(self.view_help());
        }
        sections.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_fits() {
        assert_eq!(truncate("short", 10), "short");
    }

    #[test]
    fn test_truncate_marks_cut() {
        assert_eq!(truncate("abcdefgh", 5), "abcd…");
        assert_eq!(truncate("日本語", 4), "日…");
    }
}
