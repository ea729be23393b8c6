use serde::{Deserialize, Serialize};
use std::fmt;

/// Which numeric field of a record is "the metric" for the whole dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetricAxis {
    #[default]
    Sales,
    Quantity,
}

impl MetricAxis {
    pub const ALL: [MetricAxis; 2] = [MetricAxis::Sales, MetricAxis::Quantity];

    /// Column name of the metric in every record shape.
    pub fn field(self) -> &'static str {
        match self {
            MetricAxis::Sales => "sales",
            MetricAxis::Quantity => "quantity",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MetricAxis::Sales => "Sales",
            MetricAxis::Quantity => "Quantity",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            MetricAxis::Sales => MetricAxis::Quantity,
            MetricAxis::Quantity => MetricAxis::Sales,
        }
    }

    /// Bars, markers and the purchases line.
    pub fn bar_color(self) -> &'static str {
        match self {
            MetricAxis::Sales => "blue",
            MetricAxis::Quantity => "#640D6B",
        }
    }

    /// Trend columns.
    pub fn soft_color(self) -> &'static str {
        match self {
            MetricAxis::Sales => "lightblue",
            MetricAxis::Quantity => "#AF7AB3",
        }
    }

    /// Background of the top-ranked location.
    pub fn accent_color(self) -> &'static str {
        match self {
            MetricAxis::Sales => "#D2E0FB",
            MetricAxis::Quantity => "#AF7AB3",
        }
    }

    pub fn location_title(self) -> &'static str {
        match self {
            MetricAxis::Sales => "Sales by Location",
            MetricAxis::Quantity => "Quantity by Location",
        }
    }

    pub fn trend_title(self) -> &'static str {
        match self {
            MetricAxis::Sales => "Daily Sales Trend",
            MetricAxis::Quantity => "Daily Quantities Sold Trend",
        }
    }
}

impl fmt::Display for MetricAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggled_round_trips() {
        for axis in MetricAxis::ALL {
            assert_eq!(axis.toggled().toggled(), axis);
            assert_ne!(axis.toggled(), axis);
        }
    }

    #[test]
    fn test_serde_names_match_record_fields() {
        assert_eq!(serde_json::to_string(&MetricAxis::Sales).unwrap(), "\"sales\"");
        let axis: MetricAxis = serde_json::from_str("\"quantity\"").unwrap();
        assert_eq!(axis, MetricAxis::Quantity);
        assert_eq!(axis.field(), "quantity");
    }
}
