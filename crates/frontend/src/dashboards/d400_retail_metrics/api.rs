use contracts::dashboards::d400_retail_metrics::{
    CityRecord, CustomerRecord, DashboardSummary, ProductRecord, ReportMonth,
};
use gloo_net::http::Request;
use serde::de::DeserializeOwned;

use crate::shared::api_utils::month_url;

/// Message shown for a failed request with the given HTTP status.
pub fn describe_status(status: u16) -> String {
    match status {
        404 => "No data found for the selected month.".to_string(),
        _ => "Failed to fetch data. Kindly try again later.".to_string(),
    }
}

async fn get_json<T: DeserializeOwned>(path: &str, month: ReportMonth) -> Result<T, String> {
    let url = month_url(path, month);

    let response = Request::get(&url).send().await.map_err(|e| {
        log::error!("Request to {} failed: {}", url, e);
        describe_status(0)
    })?;

    if !response.ok() {
        log::warn!("{} answered HTTP {}", url, response.status());
        return Err(describe_status(response.status()));
    }

    response.json().await.map_err(|e| {
        log::error!("Failed to parse response of {}: {}", url, e);
        describe_status(0)
    })
}

/// Customer rows of the month (also feeds the daily trend)
pub async fn fetch_customers(month: ReportMonth) -> Result<Vec<CustomerRecord>, String> {
    get_json("/api/customers", month).await
}

pub async fn fetch_cities(month: ReportMonth) -> Result<Vec<CityRecord>, String> {
    get_json("/api/city-data", month).await
}

pub async fn fetch_products(month: ReportMonth) -> Result<Vec<ProductRecord>, String> {
    get_json("/api/product-data", month).await
}

pub async fn fetch_summary(month: ReportMonth) -> Result<DashboardSummary, String> {
    get_json("/api/dashboard_data", month).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_status() {
        assert_eq!(describe_status(404), "No data found for the selected month.");
        assert_eq!(
            describe_status(500),
            "Failed to fetch data. Kindly try again later."
        );
        assert_eq!(describe_status(0), describe_status(503));
    }
}
