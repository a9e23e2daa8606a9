use serde_json::{json, Map, Value};

use crate::models::{Located, LocatedRecord, PolygonRing};
use crate::utils::constants::{
    FIELD_AREA, FIELD_BENEFICIARY, FIELD_MUNICIPALITY, FIELD_ORDER_NAME, FIELD_ORDER_NUMBER,
    FIELD_PUBLICATION, FIELD_STATUS,
};

/// Properties copied onto each polygon feature
const POLYGON_PROPERTIES: &[&str] = &[
    FIELD_ORDER_NAME,
    FIELD_ORDER_NUMBER,
    FIELD_AREA,
    FIELD_MUNICIPALITY,
    FIELD_BENEFICIARY,
    FIELD_PUBLICATION,
    FIELD_STATUS,
];

fn polygon_feature(record: &LocatedRecord, ring: &PolygonRing) -> Value {
    let properties: Map<String, Value> = POLYGON_PROPERTIES
        .iter()
        .filter_map(|key| {
            record
                .fields()
                .get(*key)
                .map(|value| (key.to_string(), value.clone()))
        })
        .collect();

    json!({
        "type": "Feature",
        "properties": properties,
        "geometry": {
            "type": "Polygon",
            "coordinates": [ring],
        }
    })
}

/// GeoJSON `FeatureCollection` with one polygon per exploration-order perimeter
///
/// Concessions and orders without a ring are skipped. Coordinates are
/// `[longitude, latitude]`.
pub fn polygon_feature_collection(records: &[LocatedRecord]) -> Value {
    let features: Vec<Value> = records
        .iter()
        .filter_map(|record| {
            record
                .polygon()
                .filter(|ring| !ring.is_empty())
                .map(|ring| polygon_feature(record, ring))
        })
        .collect();

    json!({
        "type": "FeatureCollection",
        "features": features,
    })
}
