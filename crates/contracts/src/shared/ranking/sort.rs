use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use super::field::MetricRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    /// Applies the direction to a natural comparator result.
    pub fn apply(self, natural: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => natural,
            SortDirection::Descending => natural.reverse(),
        }
    }

    pub fn is_ascending(self) -> bool {
        self == SortDirection::Ascending
    }
}

/// Current sort request of one table.
///
/// `active_column == None` only before the first header click; from then on
/// a column is always active.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SortState {
    pub active_column: Option<String>,
    pub direction: SortDirection,
}

impl SortState {
    pub fn by(column: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            active_column: Some(column.into()),
            direction,
        }
    }

    pub fn is_active(&self, column: &str) -> bool {
        self.active_column.as_deref() == Some(column)
    }

    /// Direction shown on the header of `column`, `None` when inactive.
    pub fn direction_for(&self, column: &str) -> Option<SortDirection> {
        self.is_active(column).then_some(self.direction)
    }

    /// Comparator for a stable sort. Equal keys compare `Equal` in both
    /// directions, so a stable sort keeps their input order.
    pub fn compare<R: MetricRecord>(&self, a: &R, b: &R) -> Ordering {
        match self.active_column.as_deref() {
            Some(column) => self
                .direction
                .apply(a.field(column).natural_cmp(&b.field(column))),
            None => Ordering::Equal,
        }
    }

    pub fn toggled(&self, requested_column: &str) -> Self {
        toggle_sort(self, requested_column)
    }
}

/// Header-click transition.
///
/// A new column starts ascending; clicking the active column flips the
/// direction.
pub fn toggle_sort(current: &SortState, requested_column: &str) -> SortState {
    if current.is_active(requested_column) {
        SortState::by(requested_column, current.direction.flipped())
    } else {
        SortState::by(requested_column, SortDirection::Ascending)
    }
}
