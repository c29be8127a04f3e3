//! Styling for list rows and the status bar.
//!
//! Defaults mirror a dark dashboard theme: unfocused rows in dark gray,
//! the focused row in white, status segments in a subdued foreground.
//!
//! ```rust
//! use bubbletea_listbox::list::ListStyles;
//! use lipgloss_extras::prelude::*;
//!
//! let mut styles = ListStyles::default();
//! styles.focused_row = Style::new().foreground(Color::from("#ffffff")).bold(true);
//! ```

use lipgloss_extras::prelude::*;

/// Marker appended to rows cut at the widget width.
pub const ELLIPSIS: &str = "…";

/// Styles used by the list view.
#[derive(Debug, Clone)]
pub struct ListStyles {
    /// Optional title line above the rows.
    pub title: Style,
    /// Rows without focus.
    pub row: Style,
    /// The focused row.
    pub focused_row: Style,
    /// Text shown when the list has no rows.
    pub no_rows: Style,
    /// Plain status text (`Search: `, `Filter: `, separators).
    pub status_text: Style,
    /// Search pattern and filter query values in the status bar.
    pub status_value: Style,
    /// Transient notice such as "Pattern not found".
    pub notice: Style,
    /// Key labels in the help line.
    pub help_key: Style,
    /// Descriptions and separators in the help line.
    pub help_desc: Style,
}

impl Default for ListStyles {
    fn default() -> Self {
        Self {
            title: Style::new()
                .background(Color::from("62"))
                .foreground(Color::from("230"))
                .padding(0, 1, 0, 1),
            row: Style::new().foreground(AdaptiveColor {
                Light: "#4D4D4D",
                Dark: "#9B9B9B",
            }),
            focused_row: Style::new()
                .foreground(AdaptiveColor {
                    Light: "#1a1a1a",
                    Dark: "#ffffff",
                })
                .bold(true),
            no_rows: Style::new().foreground(AdaptiveColor {
                Light: "#909090",
                Dark: "#626262",
            }),
            status_text: Style::new().foreground(AdaptiveColor {
                Light: "#A49FA5",
                Dark: "#777777",
            }),
            status_value: Style::new().foreground(AdaptiveColor {
                Light: "#04B575",
                Dark: "#ECFD65",
            }),
            notice: Style::new().foreground(AdaptiveColor {
                Light: "#FF4672",
                Dark: "#ED567A",
            }),
            help_key: Style::new().foreground(AdaptiveColor {
                Light: "#909090",
                Dark: "#626262",
            }),
            help_desc: Style::new().foreground(AdaptiveColor {
                Light: "#B2B2B2",
                Dark: "#4A4A4A",
            }),
        }
    }
}
