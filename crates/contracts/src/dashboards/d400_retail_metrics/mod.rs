pub mod dto;
pub mod location;
pub mod records;
pub mod trend;

pub use dto::*;
pub use location::{map_center, marker_radius, GeoBounds, GeoPoint};
pub use trend::{day_over_day_change, TrendSeries};
