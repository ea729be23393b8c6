use axum::http::{header, Method};
use axum::{middleware, routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

use crate::api::handlers;
use crate::system::middleware::request_logger::request_logger;

/// Builds the application router
pub fn configure_routes() -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    Router::new()
        .route("/health", get(|| async { "ok" }))
        // D400 Retail Metrics Dashboard
        .route(
            "/api/customers",
            get(handlers::d400_retail_metrics::get_customers),
        )
        .route(
            "/api/city-data",
            get(handlers::d400_retail_metrics::get_city_data),
        )
        .route(
            "/api/product-data",
            get(handlers::d400_retail_metrics::get_product_data),
        )
        .route(
            "/api/dashboard_data",
            get(handlers::d400_retail_metrics::get_dashboard_data),
        )
        .fallback_service(ServeDir::new("dist"))
        .layer(middleware::from_fn(request_logger))
        .layer(cors)
}
