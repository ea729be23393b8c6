pub mod d400_retail_metrics;
