use super::axis::MetricAxis;
use super::field::MetricRecord;
use super::scale::scale;
use super::sort::SortState;

/// One render-ready row.
#[derive(Debug)]
pub struct ScaledRow<'a, R> {
    pub record: &'a R,
    /// 1-based position after sorting.
    pub rank: usize,
    pub metric_value: f64,
    /// `metric_value` relative to the set maximum, in `[0, 1]`.
    pub scale_ratio: f64,
}

impl<R> Clone for ScaledRow<'_, R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R> Copy for ScaledRow<'_, R> {}

impl<R> ScaledRow<'_, R> {
    pub fn is_top(&self) -> bool {
        self.rank == 1
    }

    /// Bar width as a CSS percentage.
    pub fn bar_percent(&self) -> f64 {
        self.scale_ratio * 100.0
    }
}

/// Orders the records per `sort_state` and attaches rank and scale.
///
/// The sort is stable; without an active column the input order is kept.
/// Ratios are always computed against the maximum of `records` itself.
pub fn rank<'a, R: MetricRecord>(
    records: &'a [R],
    axis: MetricAxis,
    sort_state: &SortState,
) -> Vec<ScaledRow<'a, R>> {
    let scaled = scale(records, axis);

    let mut order: Vec<usize> = (0..records.len()).collect();
    if sort_state.active_column.is_some() {
        order.sort_by(|&a, &b| sort_state.compare(&records[a], &records[b]));
    }

    order
        .into_iter()
        .enumerate()
        .map(|(position, index)| {
            let record = &records[index];
            ScaledRow {
                record,
                rank: position + 1,
                metric_value: record.metric_value(axis),
                scale_ratio: scaled.ratios[index],
            }
        })
        .collect()
}
