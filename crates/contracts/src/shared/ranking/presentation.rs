//! Display-time formatting. The engine itself never rounds.

use super::axis::MetricAxis;

pub fn round_to(value: f64, precision: u32) -> f64 {
    let factor = 10_f64.powi(precision as i32);
    (value * factor).round() / factor
}

/// `30` -> `"30.0K"`. Source figures are already in thousands.
pub fn format_compact(value: f64) -> String {
    format!("{:.1}K", value)
}

/// Sales carry a currency prefix, quantities only the unit suffix.
pub fn format_metric(value: f64, axis: MetricAxis) -> String {
    match axis {
        MetricAxis::Sales => format!("${}", format_compact(value)),
        MetricAxis::Quantity => format_compact(value),
    }
}

/// Header stat with one decimal; `None` means "omit", never `"NaN"`.
pub fn format_stat(value: Option<f64>) -> Option<String> {
    value
        .filter(|v| v.is_finite())
        .map(|v| format!("{:.1}", round_to(v, 1)))
}

pub fn format_share(value: Option<f64>) -> String {
    match value.filter(|v| v.is_finite()) {
        Some(v) => format!("{:.1}%", v),
        None => "—".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(12.345, 1), 12.3);
        assert_eq!(round_to(12.36, 1), 12.4);
        assert_eq!(round_to(7.0, 0), 7.0);
    }

    #[test]
    fn test_format_metric_per_axis() {
        assert_eq!(format_metric(30.0, MetricAxis::Sales), "$30.0K");
        assert_eq!(format_metric(9.0, MetricAxis::Quantity), "9.0K");
        assert_eq!(format_compact(0.0), "0.0K");
    }

    #[test]
    fn test_format_stat() {
        assert_eq!(format_stat(Some(12.34)), Some("12.3".to_string()));
        assert_eq!(format_stat(None), None);
        assert_eq!(format_stat(Some(f64::NAN)), None);
    }

    #[test]
    fn test_format_share() {
        assert_eq!(format_share(Some(12.5)), "12.5%");
        assert_eq!(format_share(None), "—");
    }
}
