use contracts::dashboards::d400_retail_metrics::ReportMonth;
use once_cell::sync::OnceCell;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use super::error::DataError;
use crate::shared::config::DataConfig;

static DATA_SOURCE: OnceCell<DataSource> = OnceCell::new();

/// Month-keyed JSON files: `{"March 2024": [ ...records ]}`.
///
/// Files are read on every call, so edits show up on the next request.
#[derive(Debug, Clone)]
pub struct DataSource {
    pub customers_path: PathBuf,
    pub cities_path: PathBuf,
    pub products_path: PathBuf,
}

impl DataSource {
    pub fn new(dir: &Path, config: &DataConfig) -> Self {
        Self {
            customers_path: dir.join(&config.customers_file),
            cities_path: dir.join(&config.cities_file),
            products_path: dir.join(&config.products_file),
        }
    }

    /// Records of one month. A month missing from the file yields an empty list.
    pub async fn read_month<T: DeserializeOwned>(
        &self,
        path: &Path,
        month: ReportMonth,
    ) -> Result<Vec<T>, DataError> {
        let display = path.display().to_string();
        let contents = match tokio::fs::read_to_string(path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(DataError::FileNotFound(display));
            }
            Err(source) => return Err(DataError::Io { path: display, source }),
        };

        parse_month(&contents, month).map_err(|source| DataError::Decode { path: display, source })
    }
}

/// Extracts and decodes one month from a month-keyed document.
pub fn parse_month<T: DeserializeOwned>(
    contents: &str,
    month: ReportMonth,
) -> Result<Vec<T>, serde_json::Error> {
    let mut months: HashMap<String, Value> = serde_json::from_str(contents)?;
    match months.remove(month.as_str()) {
        Some(Value::Null) | None => Ok(Vec::new()),
        Some(records) => serde_json::from_value(records),
    }
}

pub fn initialize_data_source(source: DataSource) -> anyhow::Result<()> {
    for path in [&source.customers_path, &source.cities_path, &source.products_path] {
        if path.exists() {
            tracing::info!("Data file: {}", path.display());
        } else {
            tracing::warn!("Data file is missing: {}", path.display());
        }
    }

    DATA_SOURCE
        .set(source)
        .map_err(|_| anyhow::anyhow!("Data source is already initialized"))
}

pub fn get_data_source() -> &'static DataSource {
    DATA_SOURCE
        .get()
        .expect("Data source has not been initialized")
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::dashboards::d400_retail_metrics::CityRecord;

    #[test]
    fn test_parse_month_picks_requested_month() {
        let json = r#"{
            "January 2024": [{"city": "Lyon", "lat": 45.7, "lng": 4.8, "sales": 3, "quantity": 1}],
            "March 2024": [{"city": "Paris", "lat": 48.8, "lng": 2.3, "sales": 9, "quantity": 4}]
        }"#;
        let cities: Vec<CityRecord> = parse_month(json, ReportMonth::March2024).unwrap();
        assert_eq!(cities.len(), 1);
        assert_eq!(cities[0].city.as_deref(), Some("Paris"));
    }

    #[test]
    fn test_parse_month_absent_month_is_empty() {
        let cities: Vec<CityRecord> = parse_month("{}", ReportMonth::February2024).unwrap();
        assert!(cities.is_empty());
    }

    #[test]
    fn test_parse_month_rejects_invalid_json() {
        assert!(parse_month::<CityRecord>("[not json", ReportMonth::March2024).is_err());
    }

    #[tokio::test]
    async fn test_read_month_missing_file() {
        let source = DataSource::new(
            &std::env::temp_dir().join("d400-no-such-dir"),
            &DataConfig::default(),
        );
        let result = source
            .read_month::<CityRecord>(&source.cities_path, ReportMonth::March2024)
            .await;
        assert!(matches!(result, Err(DataError::FileNotFound(_))));
    }
}
