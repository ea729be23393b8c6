//! Ranking & normalization engine shared by every dashboard panel.
//!
//! Turns "raw rows + metric axis + sort request" into ordered, scaled rows.
//! Every function takes the record set and the sort state explicitly and
//! recomputes its maximum from scratch, so results never depend on a
//! previous month or a previous axis.

pub mod aggregate;
pub mod axis;
pub mod field;
pub mod presentation;
pub mod rank;
pub mod scale;
pub mod sort;

pub use aggregate::{aggregate, share_of_total, Aggregate};
pub use axis::MetricAxis;
pub use field::{FieldValue, MetricRecord};
pub use rank::{rank, ScaledRow};
pub use scale::{scale, scale_values, ScaleResult};
pub use sort::{toggle_sort, SortDirection, SortState};
