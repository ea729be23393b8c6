//! API utilities for frontend-backend communication

use contracts::dashboards::d400_retail_metrics::ReportMonth;

const BACKEND_PORT: &str = "3000";

/// Base URL of the backend.
///
/// Empty (same origin) when the page is served by the backend itself,
/// otherwise the current host on the backend port.
pub fn api_base() -> String {
    let Some(window) = web_sys::window() else {
        return String::new();
    };
    let location = window.location();
    let port = location.port().unwrap_or_default();
    if port == BACKEND_PORT {
        return String::new();
    }

    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}", protocol, hostname, BACKEND_PORT)
}

/// `{base}{path}?month=March%202024`
pub fn build_month_url(base: &str, path: &str, month: ReportMonth) -> String {
    format!(
        "{}{}?month={}",
        base,
        path,
        urlencoding::encode(month.as_str())
    )
}

pub fn month_url(path: &str, month: ReportMonth) -> String {
    build_month_url(&api_base(), path, month)
}
