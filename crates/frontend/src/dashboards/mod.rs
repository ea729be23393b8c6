pub mod d400_retail_metrics;

pub use d400_retail_metrics::ui::RetailDashboard;
