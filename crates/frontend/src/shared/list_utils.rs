use contracts::shared::ranking::{SortDirection, SortState};

/// Sort indicator shown after a column header
pub fn sort_indicator(state: &SortState, column: &str) -> &'static str {
    match state.direction_for(column) {
        Some(SortDirection::Ascending) => " ▲",
        Some(SortDirection::Descending) => " ▼",
        None => " ⇅",
    }
}

/// Inline style of a sortable header cell.
pub fn sort_header_style(state: &SortState, column: &str) -> &'static str {
    if state.is_active(column) {
        "cursor: pointer; user-select: none; font-weight: 600; color: #1a237e; padding: 6px 4px; text-align: left;"
    } else {
        "cursor: pointer; user-select: none; font-weight: 500; padding: 6px 4px; text-align: left;"
    }
}
