use std::cmp::Ordering;

use super::axis::MetricAxis;

/// Value of an orderable column as seen by the sort comparator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    Missing,
    Number(f64),
    Text(&'a str),
}

impl<'a> FieldValue<'a> {
    /// `None` and NaN both count as missing.
    pub fn number(value: Option<f64>) -> Self {
        match value {
            Some(v) if !v.is_nan() => FieldValue::Number(v),
            _ => FieldValue::Missing,
        }
    }

    pub fn text(value: Option<&'a str>) -> Self {
        value.map_or(FieldValue::Missing, FieldValue::Text)
    }

    /// Ascending order: missing < numbers < text.
    ///
    /// Strings compare by bytes, which for UTF-8 is code-point order; no
    /// case folding and no locale rules.
    pub fn natural_cmp(&self, other: &FieldValue<'_>) -> Ordering {
        use FieldValue::*;

        match (self, other) {
            (Missing, Missing) => Ordering::Equal,
            (Missing, _) => Ordering::Less,
            (_, Missing) => Ordering::Greater,
            (Number(a), Number(b)) => a.partial_cmp(b).unwrap_or(Ordering::Equal),
            (Text(a), Text(b)) => a.cmp(b),
            (Number(_), Text(_)) => Ordering::Less,
            (Text(_), Number(_)) => Ordering::Greater,
        }
    }
}

/// Capability set the engine needs from a record shape.
///
/// Implementors expose their orderable columns by name and one numeric
/// metric per [`MetricAxis`]. Unknown column names yield
/// [`FieldValue::Missing`], which leaves the input order untouched.
pub trait MetricRecord {
    /// Column names a table header may offer for sorting.
    const SORTABLE_COLUMNS: &'static [&'static str];

    fn field(&self, column: &str) -> FieldValue<'_>;

    /// Raw metric for the axis; `None` when absent or malformed.
    fn metric(&self, axis: MetricAxis) -> Option<f64>;

    /// Metric as used for scaling and totals: missing or non-finite is 0.
    fn metric_value(&self, axis: MetricAxis) -> f64 {
        finite_or_zero(self.metric(axis))
    }
}

pub(crate) fn finite_or_zero(value: Option<f64>) -> f64 {
    match value {
        Some(v) if v.is_finite() => v,
        _ => 0.0,
    }
}
