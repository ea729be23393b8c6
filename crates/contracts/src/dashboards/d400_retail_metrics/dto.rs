use anyhow::anyhow;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

use crate::shared::lenient;

/// Reporting months offered by the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ReportMonth {
    #[serde(rename = "January 2024")]
    January2024,
    #[serde(rename = "February 2024")]
    February2024,
    #[default]
    #[serde(rename = "March 2024")]
    March2024,
}

impl ReportMonth {
    pub const ALL: [ReportMonth; 3] = [
        ReportMonth::January2024,
        ReportMonth::February2024,
        ReportMonth::March2024,
    ];

    /// Key used in query strings and in the month-keyed data files.
    pub fn as_str(self) -> &'static str {
        match self {
            ReportMonth::January2024 => "January 2024",
            ReportMonth::February2024 => "February 2024",
            ReportMonth::March2024 => "March 2024",
        }
    }
}

impl fmt::Display for ReportMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReportMonth {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|m| m.as_str() == s.trim())
            .ok_or_else(|| anyhow!("Unknown report month: {s}"))
    }
}

/// Query string of every data endpoint: `?month=March%202024`
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MonthQuery {
    pub month: ReportMonth,
}

/// Customer ids arrive either as numbers or as strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Int(i64),
    Text(String),
}

impl RecordId {
    /// Whole-number floats become `Int`; strings are kept as `Text`.
    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Number(n) => n.as_i64().map(RecordId::Int).or_else(|| {
                n.as_f64().filter(|f| f.is_finite()).map(|f| {
                    if f.fract() == 0.0 && f.abs() < i64::MAX as f64 {
                        RecordId::Int(f as i64)
                    } else {
                        RecordId::Text(f.to_string())
                    }
                })
            }),
            Value::String(s) => Some(RecordId::Text(s.clone())),
            _ => None,
        }
    }

    /// Tolerant `deserialize_with` for id fields; unusable ids become `None`.
    pub fn lenient<'de, D>(deserializer: D) -> Result<Option<RecordId>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<Value>::deserialize(deserializer)?;
        Ok(value.as_ref().and_then(RecordId::from_value))
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Int(id) => write!(f, "{id}"),
            RecordId::Text(id) => f.write_str(id),
        }
    }
}

/// Row of `/api/customers`. Also the source of daily trend points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerRecord {
    #[serde(default, deserialize_with = "RecordId::lenient")]
    pub id: Option<RecordId>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub country: Option<String>,
    /// Day label as delivered, e.g. "2024-03-01".
    #[serde(default, deserialize_with = "lenient::text")]
    pub date: Option<String>,
    #[serde(default, deserialize_with = "lenient::count")]
    pub purchases: Option<u64>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub sales: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub quantity: Option<f64>,
}

/// Share of the month total, in percent, as supplied by the data source.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ProductShare {
    #[serde(default, deserialize_with = "lenient::number")]
    pub sales: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub quantity: Option<f64>,
}

/// Row of `/api/product-data`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    #[serde(default, deserialize_with = "lenient::text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub sales: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub quantity: Option<f64>,
    #[serde(default)]
    pub percentage: ProductShare,
}

/// Row of `/api/city-data`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CityRecord {
    #[serde(default, deserialize_with = "lenient::text")]
    pub city: Option<String>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub lat: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub lng: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub sales: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub quantity: Option<f64>,
}

/// One column of the daily trend chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyPoint {
    #[serde(default, deserialize_with = "lenient::text")]
    pub date: Option<String>,
    #[serde(default, deserialize_with = "lenient::count")]
    pub purchases: Option<u64>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub sales: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub quantity: Option<f64>,
}

impl From<&CustomerRecord> for DailyPoint {
    fn from(record: &CustomerRecord) -> Self {
        Self {
            date: record.date.clone(),
            purchases: record.purchases,
            sales: record.sales,
            quantity: record.quantity,
        }
    }
}

/// Response of `/api/dashboard_data`.
///
/// Averages are `None` for a month without products, so the header can omit
/// them instead of showing a non-number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub total_customer: usize,
    pub total_products: usize,
    pub total_quantity: f64,
    pub total_sales: f64,
    pub average_quantity: Option<f64>,
    pub average_sales: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_names() {
        assert_eq!(ReportMonth::default(), ReportMonth::March2024);
        assert_eq!("February 2024".parse::<ReportMonth>().unwrap(), ReportMonth::February2024);
        assert!("April 2024".parse::<ReportMonth>().is_err());

        let json = serde_json::to_string(&ReportMonth::January2024).unwrap();
        assert_eq!(json, "\"January 2024\"");
    }

    #[test]
    fn test_customer_with_malformed_numbers() {
        let json = r#"{"id": 17, "country": "Germany", "date": "2024-03-02",
                       "purchases": 3, "sales": "n/a", "quantity": null}"#;
        let record: CustomerRecord = serde_json::from_str(json).unwrap();

        assert_eq!(record.id, Some(RecordId::Int(17)));
        assert_eq!(record.purchases, Some(3));
        assert_eq!(record.sales, None);
        assert_eq!(record.quantity, None);
    }

    #[test]
    fn test_string_ids() {
        let record: CustomerRecord = serde_json::from_str(r#"{"id": "C-01"}"#).unwrap();
        assert_eq!(record.id, Some(RecordId::Text("C-01".into())));
        assert_eq!(record.country, None);
    }

    #[test]
    fn test_bad_identity_fields_degrade() {
        let json = r#"[
            {"id": 1, "country": "France", "sales": 2},
            {"id": null, "country": 49, "date": ["2024-03-01"], "sales": 3},
            {"id": 7.0, "sales": 4},
            {"id": {"nested": true}, "sales": 5}
        ]"#;
        let records: Vec<CustomerRecord> = serde_json::from_str(json).unwrap();

        assert_eq!(records.len(), 4);
        assert_eq!(records[1].id, None);
        assert_eq!(records[1].country.as_deref(), Some("49"));
        assert_eq!(records[1].date, None);
        assert_eq!(records[1].sales, Some(3.0));
        assert_eq!(records[2].id, Some(RecordId::Int(7)));
        assert_eq!(records[3].id, None);
    }

    #[test]
    fn test_fractional_id_is_kept_as_text() {
        let record: CustomerRecord = serde_json::from_str(r#"{"id": 2.5}"#).unwrap();
        assert_eq!(record.id, Some(RecordId::Text("2.5".into())));
    }

    #[test]
    fn test_unnamed_product_and_city() {
        let product: ProductRecord = serde_json::from_str(r#"{"name": null, "sales": 1}"#).unwrap();
        assert_eq!(product.name, None);
        let city: CityRecord = serde_json::from_str(r#"{"city": 12, "lat": 1, "lng": 2}"#).unwrap();
        assert_eq!(city.city.as_deref(), Some("12"));
    }

    #[test]
    fn test_product_percentage_strings() {
        let json = r#"{"name": "Shoes", "sales": 12.5, "quantity": 3,
                       "percentage": {"sales": "25%", "quantity": 10}}"#;
        let product: ProductRecord = serde_json::from_str(json).unwrap();
        assert_eq!(product.percentage.sales, Some(25.0));
        assert_eq!(product.percentage.quantity, Some(10.0));

        let bare: ProductRecord = serde_json::from_str(r#"{"name": "Hats"}"#).unwrap();
        assert_eq!(bare.percentage, ProductShare::default());
    }

    #[test]
    fn test_daily_point_from_customer() {
        let record: CustomerRecord = serde_json::from_str(
            r#"{"id": 1, "date": "2024-01-05", "purchases": 2, "sales": 4.5, "quantity": 1.5}"#,
        )
        .unwrap();
        let point = DailyPoint::from(&record);
        assert_eq!(point.date.as_deref(), Some("2024-01-05"));
        assert_eq!(point.purchases, Some(2));
        assert_eq!(point.sales, Some(4.5));
    }

    #[test]
    fn test_summary_serializes_missing_average_as_null() {
        let summary = DashboardSummary {
            total_customer: 0,
            total_products: 0,
            total_quantity: 0.0,
            total_sales: 0.0,
            average_quantity: None,
            average_sales: None,
        };
        let value = serde_json::to_value(&summary).unwrap();
        assert!(value["average_sales"].is_null());
    }
}
