use serde::Serialize;

use crate::shared::ranking::{scale, scale_values, MetricAxis, MetricRecord};

use super::dto::DailyPoint;

/// Chart-ready series for the daily trend panel, in input order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendSeries {
    pub categories: Vec<String>,
    pub purchases: Vec<f64>,
    pub purchase_ratios: Vec<f64>,
    pub max_purchases: f64,
    pub values: Vec<f64>,
    pub value_ratios: Vec<f64>,
    pub max_value: f64,
}

impl TrendSeries {
    /// Purchases scale against their own maximum, the columns against the
    /// axis maximum.
    pub fn build(points: &[DailyPoint], axis: MetricAxis) -> Self {
        let purchases: Vec<f64> = points
            .iter()
            .map(|p| p.purchases.map_or(0.0, |n| n as f64))
            .collect();
        let purchase_scale = scale_values(purchases.iter().copied());
        let value_scale = scale(points, axis);

        Self {
            categories: points
                .iter()
                .map(|p| p.date.clone().unwrap_or_default())
                .collect(),
            purchases,
            purchase_ratios: purchase_scale.ratios,
            max_purchases: purchase_scale.max,
            values: points.iter().map(|p| p.metric_value(axis)).collect(),
            value_ratios: value_scale.ratios,
            max_value: value_scale.max,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

/// Percent change of the last point against the one before it.
///
/// `None` with fewer than two points or a non-positive previous value.
pub fn day_over_day_change(points: &[DailyPoint], axis: MetricAxis) -> Option<f64> {
    let [.., previous, last] = points else {
        return None;
    };
    let previous = previous.metric_value(axis);
    let last = last.metric_value(axis);

    (previous > 0.0).then(|| (last - previous) / previous * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(date: &str, purchases: u64, sales: f64, quantity: f64) -> DailyPoint {
        DailyPoint {
            date: Some(date.to_string()),
            purchases: Some(purchases),
            sales: Some(sales),
            quantity: Some(quantity),
        }
    }

    #[test]
    fn test_empty_series() {
        let series = TrendSeries::build(&[], MetricAxis::Sales);
        assert!(series.is_empty());
        assert_eq!(series.max_value, 0.0);
        assert_eq!(series.max_purchases, 0.0);
    }

    #[test]
    fn test_series_scales_each_axis_independently() {
        let points = vec![
            point("2024-03-01", 2, 10.0, 3.0),
            point("2024-03-02", 8, 40.0, 6.0),
        ];

        let sales = TrendSeries::build(&points, MetricAxis::Sales);
        assert_eq!(sales.categories, ["2024-03-01", "2024-03-02"]);
        assert_eq!(sales.values, [10.0, 40.0]);
        assert_eq!(sales.value_ratios, [0.25, 1.0]);
        assert_eq!(sales.purchase_ratios, [0.25, 1.0]);

        let quantity = TrendSeries::build(&points, MetricAxis::Quantity);
        assert_eq!(quantity.max_value, 6.0);
        assert_eq!(quantity.value_ratios, [0.5, 1.0]);
    }

    #[test]
    fn test_day_over_day_change() {
        let points = vec![
            point("2024-03-01", 1, 50.0, 4.0),
            point("2024-03-02", 1, 40.0, 5.0),
        ];
        assert_eq!(day_over_day_change(&points, MetricAxis::Sales), Some(-20.0));
        assert_eq!(day_over_day_change(&points, MetricAxis::Quantity), Some(25.0));
        assert_eq!(day_over_day_change(&points[..1], MetricAxis::Sales), None);
    }

    #[test]
    fn test_day_over_day_change_from_zero() {
        let points = vec![point("a", 0, 0.0, 0.0), point("b", 1, 10.0, 1.0)];
        assert_eq!(day_over_day_change(&points, MetricAxis::Sales), None);
    }
}
