mod customer_details;
mod daily_sales_trend;
mod dashboard;
mod panel;
mod sales_by_location;
mod top_sold_products;

pub use customer_details::CustomerDetails;
pub use daily_sales_trend::DailySalesTrend;
pub use dashboard::RetailDashboard;
pub use sales_by_location::SalesByLocation;
pub use top_sold_products::TopSoldProducts;
