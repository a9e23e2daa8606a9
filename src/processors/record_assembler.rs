use std::fmt;

use tracing::{debug, trace};

use crate::models::{
    Concession, ExplorationOrder, LocatedRecord, Point, RawConcession, RawExplorationOrder,
};
use crate::processors::geometry::{centroid, close_ring, ring_vertices, vertices_to_ring};
use crate::utils::coordinates::try_dms_to_decimal;

/// Why a raw record was left out of the located output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExclusionReason {
    MissingLatitude,
    MissingLongitude,
    InvalidLatitude,
    InvalidLongitude,
    /// A central axis parsed to exactly zero
    ZeroCoordinate,
    /// No central point and no usable perimeter vertex
    NoGeometry,
}

impl fmt::Display for ExclusionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            ExclusionReason::MissingLatitude => "missing latitude",
            ExclusionReason::MissingLongitude => "missing longitude",
            ExclusionReason::InvalidLatitude => "invalid latitude",
            ExclusionReason::InvalidLongitude => "invalid longitude",
            ExclusionReason::ZeroCoordinate => "zero coordinate",
            ExclusionReason::NoGeometry => "no usable geometry",
        };
        f.write_str(text)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exclusion {
    /// Position of the record in the raw input
    pub index: usize,
    pub reason: ExclusionReason,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssemblyReport {
    pub total_records: usize,
    pub located_records: usize,
    pub exclusions: Vec<Exclusion>,
}

impl AssemblyReport {
    pub fn excluded_records(&self) -> usize {
        self.exclusions.len()
    }

    pub fn count(&self, reason: ExclusionReason) -> usize {
        self.exclusions.iter().filter(|e| e.reason == reason).count()
    }

    pub fn generate_summary(&self) -> String {
        let mut summary = format!(
            "Located {} of {} records ({} excluded)",
            self.located_records,
            self.total_records,
            self.excluded_records()
        );
        for reason in [
            ExclusionReason::MissingLatitude,
            ExclusionReason::MissingLongitude,
            ExclusionReason::InvalidLatitude,
            ExclusionReason::InvalidLongitude,
            ExclusionReason::ZeroCoordinate,
            ExclusionReason::NoGeometry,
        ] {
            let count = self.count(reason);
            if count > 0 {
                summary.push_str(&format!("\n  {}: {}", reason, count));
            }
        }
        summary
    }

    fn exclude(&mut self, index: usize, reason: ExclusionReason) {
        trace!(index, %reason, "record excluded");
        self.exclusions.push(Exclusion { index, reason });
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Axis {
    Latitude,
    Longitude,
}

/// Parse one central axis, classifying the failure
fn parse_axis(text: Option<&str>, axis: Axis) -> Result<f64, ExclusionReason> {
    let (missing, invalid) = match axis {
        Axis::Latitude => (
            ExclusionReason::MissingLatitude,
            ExclusionReason::InvalidLatitude,
        ),
        Axis::Longitude => (
            ExclusionReason::MissingLongitude,
            ExclusionReason::InvalidLongitude,
        ),
    };

    match text {
        None | Some("") => Err(missing),
        Some(text) => try_dms_to_decimal(text).map_err(|_| invalid),
    }
}

/// Central point of a record; both axes must parse to non-zero values
fn central_point(
    latitude: Option<&str>,
    longitude: Option<&str>,
) -> Result<Point, ExclusionReason> {
    let latitude = parse_axis(latitude, Axis::Latitude)?;
    let longitude = parse_axis(longitude, Axis::Longitude)?;

    if latitude == 0.0 || longitude == 0.0 {
        return Err(ExclusionReason::ZeroCoordinate);
    }

    Ok(Point::new(longitude, latitude))
}

/// Turns raw dataset records into located records.
///
/// Records that cannot be given a position are dropped without error; the
/// `*_with_report` variants say which ones and why.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecordAssembler;

impl RecordAssembler {
    pub fn new() -> Self {
        Self
    }

    pub fn assemble_concessions(&self, raw: &[RawConcession]) -> Vec<LocatedRecord> {
        self.assemble_concessions_with_report(raw).0
    }

    pub fn assemble_concessions_with_report(
        &self,
        raw: &[RawConcession],
    ) -> (Vec<LocatedRecord>, AssemblyReport) {
        let mut report = AssemblyReport {
            total_records: raw.len(),
            ..AssemblyReport::default()
        };

        let located: Vec<LocatedRecord> = raw
            .iter()
            .enumerate()
            .filter_map(|(index, concession)| {
                match central_point(concession.latitude(), concession.longitude()) {
                    Ok(coords) => Some(Concession::new(concession.fields.clone(), coords).into()),
                    Err(reason) => {
                        report.exclude(index, reason);
                        None
                    }
                }
            })
            .collect();

        report.located_records = located.len();
        debug!(
            total = report.total_records,
            located = report.located_records,
            excluded = report.excluded_records(),
            "assembled concessions"
        );

        (located, report)
    }

    pub fn assemble_exploration_orders(&self, raw: &[RawExplorationOrder]) -> Vec<LocatedRecord> {
        self.assemble_exploration_orders_with_report(raw).0
    }

    pub fn assemble_exploration_orders_with_report(
        &self,
        raw: &[RawExplorationOrder],
    ) -> (Vec<LocatedRecord>, AssemblyReport) {
        let mut report = AssemblyReport {
            total_records: raw.len(),
            ..AssemblyReport::default()
        };

        let located: Vec<LocatedRecord> = raw
            .iter()
            .enumerate()
            .filter_map(|(index, order)| match self.locate_order(order) {
                Ok(record) => Some(record.into()),
                Err(reason) => {
                    report.exclude(index, reason);
                    None
                }
            })
            .collect();

        report.located_records = located.len();
        debug!(
            total = report.total_records,
            located = report.located_records,
            excluded = report.excluded_records(),
            "assembled exploration orders"
        );

        (located, report)
    }

    fn locate_order(
        &self,
        order: &RawExplorationOrder,
    ) -> Result<ExplorationOrder, ExclusionReason> {
        let central = central_point(order.latitude(), order.longitude());

        let mut ring = vertices_to_ring(order.vertices());
        let polygon = if ring.is_empty() {
            None
        } else {
            close_ring(&mut ring);
            Some(ring)
        };

        let coords = match (central, &polygon) {
            (Ok(point), _) => point,
            (Err(_), Some(ring)) => {
                centroid(ring_vertices(ring)).ok_or(ExclusionReason::NoGeometry)?
            }
            // No perimeter listed at all: report the central point failure
            (Err(reason), None) if order.vertices().is_none() => return Err(reason),
            (Err(_), None) => return Err(ExclusionReason::NoGeometry),
        };

        Ok(ExplorationOrder::new(order.fields.clone(), coords, polygon))
    }
}

/// Assemble concessions with the default [`RecordAssembler`]
pub fn assemble_concessions(raw: &[RawConcession]) -> Vec<LocatedRecord> {
    RecordAssembler::new().assemble_concessions(raw)
}

/// Assemble exploration orders with the default [`RecordAssembler`]
pub fn assemble_exploration_orders(raw: &[RawExplorationOrder]) -> Vec<LocatedRecord> {
    RecordAssembler::new().assemble_exploration_orders(raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Located;
    use pretty_assertions::assert_eq;
    use serde_json::{json, Value};

    fn concession(value: Value) -> RawConcession {
        serde_json::from_value(value).unwrap()
    }

    fn order(value: Value) -> RawExplorationOrder {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_concession_with_valid_coordinates() {
        let raw = vec![concession(json!({
            "titulo": "245871",
            "latitud": "17°3′53.19″N",
            "longitud": "99°44′29.44″W"
        }))];

        let located = assemble_concessions(&raw);
        assert_eq!(located.len(), 1);

        let coords = located[0].coords();
        assert!((coords.longitude - -99.741511).abs() < 0.00001);
        assert!((coords.latitude - 17.064775).abs() < 0.00001);
        assert_eq!(located[0].text_field("titulo").as_deref(), Some("245871"));
    }

    #[test]
    fn test_concession_missing_coordinate_is_excluded() {
        let raw = vec![concession(json!({ "latitud": null, "longitud": "99°0′0″W" }))];
        assert_eq!(assemble_concessions(&raw).len(), 0);
    }

    #[test]
    fn test_zero_central_coordinate_is_excluded() {
        let raw = vec![concession(json!({ "latitud": "0°0′0″N", "longitud": "99°0′0″W" }))];
        let (located, report) = RecordAssembler::new().assemble_concessions_with_report(&raw);
        assert!(located.is_empty());
        assert_eq!(report.count(ExclusionReason::ZeroCoordinate), 1);
    }

    #[test]
    fn test_order_is_stable() {
        let raw = vec![
            concession(json!({ "id": "A", "latitud": "17°0′0″N", "longitud": "99°0′0″W" })),
            concession(json!({ "id": "B", "latitud": "malo", "longitud": "99°0′0″W" })),
            concession(json!({ "id": "C", "latitud": "18°0′0″N", "longitud": "100°0′0″W" })),
        ];

        let ids: Vec<String> = assemble_concessions(&raw)
            .iter()
            .filter_map(|r| r.text_field("id").map(|id| id.into_owned()))
            .collect();
        assert_eq!(ids, vec!["A".to_string(), "C".to_string()]);
    }

    #[test]
    fn test_report_records_reasons() {
        let raw = vec![
            concession(json!({ "longitud": "99°0′0″W" })),
            concession(json!({ "latitud": "17°0′0″N", "longitud": "" })),
            concession(json!({ "latitud": "17 grados", "longitud": "99°0′0″W" })),
            concession(json!({ "latitud": "17°0′0″N", "longitud": "99°0′0″Q" })),
            concession(json!({ "latitud": "17°0′0″N", "longitud": "99°0′0″W" })),
        ];

        let (located, report) = RecordAssembler::new().assemble_concessions_with_report(&raw);
        assert_eq!(located.len(), 1);
        assert_eq!(report.total_records, 5);
        assert_eq!(report.located_records, 1);
        assert_eq!(
            report.exclusions,
            vec![
                Exclusion {
                    index: 0,
                    reason: ExclusionReason::MissingLatitude,
                },
                Exclusion {
                    index: 1,
                    reason: ExclusionReason::MissingLongitude,
                },
                Exclusion {
                    index: 2,
                    reason: ExclusionReason::InvalidLatitude,
                },
                Exclusion {
                    index: 3,
                    reason: ExclusionReason::InvalidLongitude,
                },
            ]
        );
        assert!(report.generate_summary().starts_with("Located 1 of 5 records (4 excluded)"));
    }

    #[test]
    fn test_order_with_central_point_and_polygon() {
        let raw = vec![order(json!({
            "nombre": "Orden 12",
            "latitud": "17°30′0″N",
            "longitud": "99°30′0″W",
            "vertices": [
                { "latitud": "17°0′0″N", "longitud": "99°0′0″W" },
                { "latitud": "18°0′0″N", "longitud": "99°0′0″W" },
                { "latitud": "18°0′0″N", "longitud": "100°0′0″W" }
            ]
        }))];

        let located = assemble_exploration_orders(&raw);
        assert_eq!(located.len(), 1);
        assert_eq!(located[0].coords(), Point::new(-99.5, 17.5));

        let polygon = located[0].polygon().unwrap();
        assert_eq!(polygon.len(), 4);
        assert_eq!(polygon[0], polygon[3]);
    }

    #[test]
    fn test_order_centroid_from_triangle() {
        let raw = vec![order(json!({
            "vertices": [
                { "latitud": "17°0′0″N", "longitud": "99°0′0″W" },
                { "latitud": "18°0′0″N", "longitud": "99°0′0″W" },
                { "latitud": "18°0′0″N", "longitud": "100°0′0″W" }
            ]
        }))];

        let located = assemble_exploration_orders(&raw);
        assert_eq!(located.len(), 1);

        let coords = located[0].coords();
        assert!((coords.longitude - (-99.0 - 99.0 - 100.0) / 3.0).abs() < 1e-12);
        assert!((coords.latitude - (17.0 + 18.0 + 18.0) / 3.0).abs() < 1e-12);
        assert_eq!(located[0].polygon().map(Vec::len), Some(4));
    }

    #[test]
    fn test_order_already_closed_ring_not_duplicated() {
        let raw = vec![order(json!({
            "vertices": [
                { "latitud": "17°0′0″N", "longitud": "99°0′0″W" },
                { "latitud": "18°0′0″N", "longitud": "99°0′0″W" },
                { "latitud": "18°0′0″N", "longitud": "100°0′0″W" },
                { "latitud": "17°0′0″N", "longitud": "99°0′0″W" }
            ]
        }))];

        let located = assemble_exploration_orders(&raw);
        assert_eq!(located[0].polygon().map(Vec::len), Some(4));
        assert!((located[0].coords().latitude - 53.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_order_without_usable_geometry_is_excluded() {
        let raw = vec![
            order(json!({
                "vertices": [
                    { "latitud": "malo", "longitud": "99°0′0″W" },
                    { "latitud": "18°0′0″N" }
                ]
            })),
            order(json!({ "nombre": "sin datos" })),
        ];

        let (located, report) =
            RecordAssembler::new().assemble_exploration_orders_with_report(&raw);
        assert!(located.is_empty());
        assert_eq!(
            report.exclusions,
            vec![
                Exclusion {
                    index: 0,
                    reason: ExclusionReason::NoGeometry,
                },
                Exclusion {
                    index: 1,
                    reason: ExclusionReason::MissingLatitude,
                },
            ]
        );
    }

    #[test]
    fn test_order_is_tagged() {
        let raw = vec![order(json!({ "latitud": "17°0′0″N", "longitud": "99°0′0″W" }))];
        let located = assemble_exploration_orders(&raw);

        assert_eq!(located[0].kind(), crate::models::RecordKind::ExplorationOrder);
        assert!(located[0].polygon().is_none());

        let value = serde_json::to_value(&located[0]).unwrap();
        assert_eq!(value["tipo"], json!("orden_exploracion"));
        assert_eq!(value["coordenadasPoligono"], Value::Null);
    }

    #[test]
    fn test_assembly_is_deterministic() {
        let raw = vec![order(json!({
            "vertices": [
                { "latitud": "17°1′2.5″N", "longitud": "99°3′4.5″W" },
                { "latitud": "17°5′6.5″N", "longitud": "99°7′8.5″W" }
            ]
        }))];

        let first = serde_json::to_string(&assemble_exploration_orders(&raw)).unwrap();
        let second = serde_json::to_string(&assemble_exploration_orders(&raw)).unwrap();
        assert_eq!(first, second);
    }
}
