use axum::{extract::Query, http::StatusCode, Json};
use contracts::dashboards::d400_retail_metrics::{
    CityRecord, CustomerRecord, DashboardSummary, MonthQuery, ProductRecord,
};

use crate::dashboards::d400_retail_metrics::service;
use crate::shared::data::{get_data_source, DataError};

fn reject(what: &str, e: DataError) -> StatusCode {
    let status = e.status_code();
    if status == StatusCode::NOT_FOUND {
        tracing::warn!("D400 Dashboard: {}: {}", what, e);
    } else {
        tracing::error!("D400 Dashboard: Failed to get {}: {}", what, e);
    }
    status
}

/// GET /api/customers?month=March%202024
pub async fn get_customers(
    Query(query): Query<MonthQuery>,
) -> Result<Json<Vec<CustomerRecord>>, StatusCode> {
    match service::get_customers(get_data_source(), query.month).await {
        Ok(customers) => {
            tracing::info!(
                "D400 Dashboard: Returning {} customers for {}",
                customers.len(),
                query.month
            );
            Ok(Json(customers))
        }
        Err(e) => Err(reject("customers", e)),
    }
}

/// GET /api/city-data?month=March%202024
pub async fn get_city_data(
    Query(query): Query<MonthQuery>,
) -> Result<Json<Vec<CityRecord>>, StatusCode> {
    match service::get_cities(get_data_source(), query.month).await {
        Ok(cities) => {
            tracing::info!(
                "D400 Dashboard: Returning {} cities for {}",
                cities.len(),
                query.month
            );
            Ok(Json(cities))
        }
        Err(e) => Err(reject("city data", e)),
    }
}

/// GET /api/product-data?month=March%202024
pub async fn get_product_data(
    Query(query): Query<MonthQuery>,
) -> Result<Json<Vec<ProductRecord>>, StatusCode> {
    match service::get_products(get_data_source(), query.month).await {
        Ok(products) => {
            tracing::info!(
                "D400 Dashboard: Returning {} products for {}",
                products.len(),
                query.month
            );
            Ok(Json(products))
        }
        Err(e) => Err(reject("product data", e)),
    }
}

/// GET /api/dashboard_data?month=March%202024
pub async fn get_dashboard_data(
    Query(query): Query<MonthQuery>,
) -> Result<Json<DashboardSummary>, StatusCode> {
    match service::get_summary(get_data_source(), query.month).await {
        Ok(summary) => {
            tracing::info!(
                "D400 Dashboard: Summary for {}: {} customers, {} products",
                query.month,
                summary.total_customer,
                summary.total_products
            );
            Ok(Json(summary))
        }
        Err(e) => Err(reject("dashboard summary", e)),
    }
}
