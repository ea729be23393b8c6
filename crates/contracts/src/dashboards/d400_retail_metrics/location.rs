use serde::{Deserialize, Serialize};

use crate::shared::ranking::presentation::format_metric;
use crate::shared::ranking::MetricAxis;

use super::dto::CityRecord;

pub const MIN_MARKER_RADIUS: f64 = 4.0;
pub const MAX_MARKER_RADIUS: f64 = 22.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl CityRecord {
    /// Position of the city when both coordinates are usable.
    pub fn position(&self) -> Option<GeoPoint> {
        match (self.lat, self.lng) {
            (Some(lat), Some(lng)) if lat.is_finite() && lng.is_finite() => Some(GeoPoint { lat, lng }),
            _ => None,
        }
    }

    /// Hover label of the city marker, e.g. `"Lyon: $30.0K"`.
    pub fn marker_label(&self, metric_value: f64, axis: MetricAxis) -> String {
        format!(
            "{}: {}",
            self.city.as_deref().unwrap_or("Unknown city"),
            format_metric(metric_value, axis)
        )
    }
}

/// Mean position of all located cities; `None` when none has coordinates.
pub fn map_center(cities: &[CityRecord]) -> Option<GeoPoint> {
    let (count, lat_sum, lng_sum) = cities
        .iter()
        .filter_map(CityRecord::position)
        .fold((0usize, 0.0, 0.0), |(n, lat, lng), p| (n + 1, lat + p.lat, lng + p.lng));

    (count > 0).then(|| GeoPoint {
        lat: lat_sum / count as f64,
        lng: lng_sum / count as f64,
    })
}

/// Marker radius in pixels for a scale ratio.
pub fn marker_radius(scale_ratio: f64) -> f64 {
    let ratio = if scale_ratio.is_finite() {
        scale_ratio.clamp(0.0, 1.0)
    } else {
        0.0
    };
    MIN_MARKER_RADIUS + ratio * (MAX_MARKER_RADIUS - MIN_MARKER_RADIUS)
}

/// Bounding box of the located cities, used to project them onto the map panel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoBounds {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lng: f64,
    pub max_lng: f64,
}

impl GeoBounds {
    pub fn from_cities(cities: &[CityRecord]) -> Option<Self> {
        let mut points = cities.iter().filter_map(CityRecord::position);
        let first = points.next()?;
        let start = GeoBounds {
            min_lat: first.lat,
            max_lat: first.lat,
            min_lng: first.lng,
            max_lng: first.lng,
        };

        Some(points.fold(start, |b, p| GeoBounds {
            min_lat: b.min_lat.min(p.lat),
            max_lat: b.max_lat.max(p.lat),
            min_lng: b.min_lng.min(p.lng),
            max_lng: b.max_lng.max(p.lng),
        }))
    }

    /// Projects a point into a `width` x `height` box inset by `padding`.
    ///
    /// North is up. A zero span on either axis puts the point on that axis'
    /// centre line.
    pub fn project(&self, point: GeoPoint, width: f64, height: f64, padding: f64) -> (f64, f64) {
        let inner_w = (width - 2.0 * padding).max(0.0);
        let inner_h = (height - 2.0 * padding).max(0.0);

        let lng_span = self.max_lng - self.min_lng;
        let lat_span = self.max_lat - self.min_lat;

        let x = if lng_span > 0.0 {
            padding + (point.lng - self.min_lng) / lng_span * inner_w
        } else {
            width / 2.0
        };
        let y = if lat_span > 0.0 {
            padding + (self.max_lat - point.lat) / lat_span * inner_h
        } else {
            height / 2.0
        };

        (x, y)
    }
}
