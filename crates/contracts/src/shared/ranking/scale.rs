use serde::Serialize;

use super::axis::MetricAxis;
use super::field::{finite_or_zero, MetricRecord};

/// Per-record proportions of the current maximum.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScaleResult {
    /// Same order as the input records, each in `[0, 1]`.
    pub ratios: Vec<f64>,
    /// Largest metric, never below 0.
    pub max: f64,
}

impl ScaleResult {
    pub fn is_degenerate(&self) -> bool {
        self.max <= 0.0
    }
}

/// Scales the axis metric of every record against the set's own maximum.
pub fn scale<R: MetricRecord>(records: &[R], axis: MetricAxis) -> ScaleResult {
    scale_values(records.iter().map(|r| r.metric_value(axis)))
}

/// Same policy as [`scale`] for a bare series (e.g. purchase counts).
pub fn scale_values<I>(values: I) -> ScaleResult
where
    I: IntoIterator<Item = f64>,
{
    let values: Vec<f64> = values.into_iter().map(|v| finite_or_zero(Some(v))).collect();
    let max = values.iter().copied().fold(0.0_f64, f64::max);
    let ratios = values.iter().map(|v| ratio(*v, max)).collect();

    ScaleResult { ratios, max }
}

/// `value / max` clamped to `[0, 1]`; 0 when `max <= 0`.
pub fn ratio(value: f64, max: f64) -> f64 {
    if max > 0.0 && value.is_finite() {
        (value / max).clamp(0.0, 1.0)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_series() {
        let result = scale_values(Vec::new());
        assert_eq!(result, ScaleResult { ratios: vec![], max: 0.0 });
        assert!(result.is_degenerate());
    }

    #[test]
    fn test_all_zero_has_no_nan() {
        let result = scale_values([0.0, 0.0]);
        assert_eq!(result.max, 0.0);
        assert_eq!(result.ratios, vec![0.0, 0.0]);
    }

    #[test]
    fn test_max_holder_is_one() {
        let result = scale_values([10.0, 40.0, 20.0]);
        assert_eq!(result.max, 40.0);
        assert_eq!(result.ratios, vec![0.25, 1.0, 0.5]);
    }

    #[test]
    fn test_negative_values_clamp_to_zero() {
        let result = scale_values([-5.0, 10.0]);
        assert_eq!(result.max, 10.0);
        assert_eq!(result.ratios, vec![0.0, 1.0]);

        let all_negative = scale_values([-5.0, -1.0]);
        assert_eq!(all_negative.max, 0.0);
        assert_eq!(all_negative.ratios, vec![0.0, 0.0]);
    }

    #[test]
    fn test_scale_records_uses_axis_max() {
        use crate::shared::ranking::test_rows::Row;

        let records = vec![
            Row::both("A", 10.0, 1.0),
            Row::both("B", 30.0, 9.0),
            Row::both("C", 20.0, 3.0),
        ];
        assert_eq!(scale(&records, MetricAxis::Sales).max, 30.0);

        let quantity = scale(&records, MetricAxis::Quantity);
        assert_eq!(quantity.max, 9.0);
        assert_eq!(quantity.ratios[1], 1.0);

        let zeros = vec![Row::both("A", 0.0, 0.0), Row::both("B", 0.0, 0.0)];
        let zero_scale = scale(&zeros, MetricAxis::Sales);
        assert_eq!(zero_scale.max, 0.0);
        assert_eq!(zero_scale.ratios, vec![0.0, 0.0]);
    }

    #[test]
    fn test_non_finite_values_scale_as_zero() {
        let result = scale_values([f64::INFINITY, 4.0, f64::NAN]);
        assert_eq!(result.max, 4.0);
        assert_eq!(result.ratios, vec![0.0, 1.0, 0.0]);
    }
}
