use serde::Serialize;

use super::axis::MetricAxis;
use super::field::MetricRecord;

/// Panel-level header stats. Values are exact; round only for display.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Aggregate {
    pub total: f64,
    /// `None` for an empty set.
    pub average: Option<f64>,
    pub count: usize,
}

pub fn aggregate<R: MetricRecord>(records: &[R], axis: MetricAxis) -> Aggregate {
    let count = records.len();
    let total: f64 = records.iter().map(|r| r.metric_value(axis)).sum();
    let average = (count > 0).then(|| total / count as f64);

    Aggregate {
        total,
        average,
        count,
    }
}

/// Percentage of `total` held by `value`; `None` when `total <= 0`.
pub fn share_of_total(value: f64, total: f64) -> Option<f64> {
    (total > 0.0 && value.is_finite()).then(|| value / total * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::ranking::presentation::{format_stat, round_to};
    use crate::shared::ranking::test_rows::Row;

    #[test]
    fn test_empty_set() {
        let records: Vec<Row> = Vec::new();
        let agg = aggregate(&records, MetricAxis::Sales);
        assert_eq!(
            agg,
            Aggregate {
                total: 0.0,
                average: None,
                count: 0
            }
        );
        assert_eq!(format_stat(agg.average), None);
    }

    #[test]
    fn test_totals_per_axis() {
        let records = vec![Row::both("A", 10.0, 1.0), Row::both("B", 30.0, 9.0)];

        let sales = aggregate(&records, MetricAxis::Sales);
        assert_eq!(sales.total, 40.0);
        assert_eq!(sales.average, Some(20.0));
        assert_eq!(sales.count, 2);

        let quantity = aggregate(&records, MetricAxis::Quantity);
        assert_eq!(quantity.total, 10.0);
        assert_eq!(quantity.average, Some(5.0));
    }

    #[test]
    fn test_missing_metric_counts_as_zero() {
        let records = vec![
            Row::sales("A", 6.0),
            Row { name: "B".into(), sales: None, quantity: None, v: None },
        ];
        let agg = aggregate(&records, MetricAxis::Sales);
        assert_eq!(agg.total, 6.0);
        assert_eq!(agg.average, Some(3.0));
    }

    #[test]
    fn test_rounding_is_not_cumulative() {
        let records: Vec<Row> = (0..3).map(|i| Row::sales(&i.to_string(), 0.04)).collect();

        // Rounding every row first would lose everything.
        let pre_rounded: f64 = records
            .iter()
            .map(|r| round_to(r.metric_value(MetricAxis::Sales), 1))
            .sum();
        assert_eq!(pre_rounded, 0.0);

        let agg = aggregate(&records, MetricAxis::Sales);
        assert!((agg.total - 0.12).abs() < 1e-12);
        assert_eq!(round_to(agg.total, 1), 0.1);
    }

    #[test]
    fn test_share_of_total() {
        assert_eq!(share_of_total(25.0, 100.0), Some(25.0));
        assert_eq!(share_of_total(25.0, 0.0), None);
        assert_eq!(share_of_total(f64::NAN, 10.0), None);
    }
}
