use serde::{Deserialize, Serialize};

/// A decimal-degree position, serialized as `[longitude, latitude]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Point {
    pub longitude: f64,
    pub latitude: f64,
}

/// Ordered perimeter vertices; closed rings repeat the first point at the end
pub type PolygonRing = Vec<Point>;

impl Point {
    pub fn new(longitude: f64, latitude: f64) -> Self {
        Self {
            longitude,
            latitude,
        }
    }

    /// `[longitude, latitude]`, the order expected by map renderers and GeoJSON
    pub fn to_lng_lat(self) -> [f64; 2] {
        [self.longitude, self.latitude]
    }

    /// `"lat, lng"` with a fixed number of decimals, as shown to users
    pub fn format_lat_lng(&self, decimals: usize) -> String {
        format!("{:.*}, {:.*}", decimals, self.latitude, decimals, self.longitude)
    }
}

impl From<[f64; 2]> for Point {
    fn from([longitude, latitude]: [f64; 2]) -> Self {
        Self::new(longitude, latitude)
    }
}

impl From<Point> for [f64; 2] {
    fn from(point: Point) -> Self {
        point.to_lng_lat()
    }
}
