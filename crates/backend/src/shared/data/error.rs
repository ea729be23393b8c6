use axum::http::StatusCode;
use contracts::dashboards::d400_retail_metrics::ReportMonth;
use thiserror::Error;

/// Failures of the file-backed data source
#[derive(Debug, Error)]
pub enum DataError {
    #[error("Data file not found: {0}")]
    FileNotFound(String),

    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Error decoding JSON data in {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("No data found for {0}")]
    NoData(ReportMonth),
}

impl DataError {
    /// Status returned to the dashboard for this failure.
    pub fn status_code(&self) -> StatusCode {
        match self {
            DataError::NoData(_) => StatusCode::NOT_FOUND,
            DataError::FileNotFound(_) | DataError::Io { .. } | DataError::Decode { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            DataError::NoData(ReportMonth::March2024).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            DataError::FileNotFound("x.json".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            DataError::NoData(ReportMonth::January2024).to_string(),
            "No data found for January 2024"
        );
    }
}
