//! Screen layout definitions for the TUI
//!
//! Header on top, the todo list filling the middle, then the "Add New"
//! form, a status line and an optional key-hint footer.

use ratatui::layout::{Constraint, Layout, Rect};

/// Header: top border + title row + bottom border
const HEADER_HEIGHT: u16 = 3;
/// Form: top border + input row + bottom border
const FORM_HEIGHT: u16 = 3;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Title and counts
    pub header: Rect,
    /// Pending and done sections
    pub list: Rect,
    /// "Add New" form
    pub form: Rect,
    /// Last controller outcome
    pub status: Rect,
    /// Key hints; zero height when hidden
    pub hints: Rect,
}

/// Create the main screen layout
pub fn create(area: Rect, show_hints: bool) -> ScreenAreas {
    let hints_height = if show_hints { 1 } else { 0 };

    let chunks = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Min(3),
        Constraint::Length(FORM_HEIGHT),
        Constraint::Length(1),
        Constraint::Length(hints_height),
    ])
    .split(area);

    ScreenAreas {
        header: chunks[0],
        list: chunks[1],
        form: chunks[2],
        status: chunks[3],
        hints: chunks[4],
    }
}
