use serde::Serialize;
use serde_json::Value;

use crate::models::{Point, PolygonRing, RawVertex};
use crate::utils::coordinates::parse_dms;

/// Convert perimeter vertices from DMS text to decimal points
///
/// Vertices where either axis fails to parse are dropped. The ring is not
/// closed here; see [`close_ring`].
pub fn vertices_to_ring(vertices: Option<&[Value]>) -> PolygonRing {
    let Some(vertices) = vertices else {
        return PolygonRing::new();
    };

    vertices
        .iter()
        .map(RawVertex::from)
        .filter_map(|vertex| {
            let latitude = parse_dms(vertex.latitude())?;
            let longitude = parse_dms(vertex.longitude())?;
            Some(Point::new(longitude, latitude))
        })
        .collect()
}

/// Append a copy of the first point when the ring is open
///
/// Points are compared with exact equality. Empty rings are left untouched.
pub fn close_ring(ring: &mut PolygonRing) {
    if let (Some(&first), Some(&last)) = (ring.first(), ring.last()) {
        if first != last {
            ring.push(first);
        }
    }
}

/// Vertices of a closed ring without the repeated closing point
pub fn ring_vertices(ring: &[Point]) -> &[Point] {
    match ring {
        [rest @ .., last] if !rest.is_empty() && rest[0] == *last => rest,
        _ => ring,
    }
}

/// Unweighted mean of the points' longitudes and latitudes
///
/// This is not an area-weighted polygon centroid. Pass the distinct vertices
/// of a closed ring (see [`ring_vertices`]) so the closing point is not
/// counted twice.
pub fn centroid(points: &[Point]) -> Option<Point> {
    if points.is_empty() {
        return None;
    }

    let count = points.len() as f64;
    let (sum_lng, sum_lat) = points.iter().fold((0.0, 0.0), |(lng, lat), point| {
        (lng + point.longitude, lat + point.latitude)
    });

    Some(Point::new(sum_lng / count, sum_lat / count))
}

/// Axis-aligned extent of a set of points, used to fit the map view
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bounds {
    pub south_west: Point,
    pub north_east: Point,
}

impl Bounds {
    pub fn from_point(point: Point) -> Self {
        Self {
            south_west: point,
            north_east: point,
        }
    }

    /// Bounds of all points, `None` when there are none
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Point>,
    {
        let mut points = points.into_iter();
        let first = points.next()?;
        Some(points.fold(Self::from_point(first), |mut bounds, point| {
            bounds.extend(point);
            bounds
        }))
    }

    pub fn extend(&mut self, point: Point) {
        self.south_west.longitude = self.south_west.longitude.min(point.longitude);
        self.south_west.latitude = self.south_west.latitude.min(point.latitude);
        self.north_east.longitude = self.north_east.longitude.max(point.longitude);
        self.north_east.latitude = self.north_east.latitude.max(point.latitude);
    }

    pub fn contains(&self, point: Point) -> bool {
        (self.south_west.longitude..=self.north_east.longitude).contains(&point.longitude)
            && (self.south_west.latitude..=self.north_east.latitude).contains(&point.latitude)
    }

    pub fn center(&self) -> Point {
        Point::new(
            (self.south_west.longitude + self.north_east.longitude) / 2.0,
            (self.south_west.latitude + self.north_east.latitude) / 2.0,
        )
    }
}
