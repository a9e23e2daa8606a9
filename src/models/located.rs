use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;
use std::borrow::Cow;

use crate::models::point::{Point, PolygonRing};
use crate::models::raw::{field_number, field_text, Fields};
use crate::utils::constants::{
    FIELD_AREA, FIELD_BENEFICIARY, FIELD_COORDS, FIELD_HOLDER, FIELD_KIND, FIELD_LOT_NAME,
    FIELD_MUNICIPALITY, FIELD_ORDER_NAME, FIELD_POLYGON, FIELD_REGION, FIELD_STATUS,
    KIND_EXPLORATION_ORDER, STATUS_ACTIVE,
};

/// Behaviour shared by every record that has been given a position.
pub trait Located {
    /// Representative point, `[longitude, latitude]`
    fn coords(&self) -> Point;

    /// Descriptive fields exactly as they appeared in the raw record
    fn fields(&self) -> &Fields;

    fn text_field(&self, key: &str) -> Option<Cow<'_, str>> {
        field_text(self.fields(), key)
    }

    fn municipality(&self) -> Option<Cow<'_, str>> {
        self.text_field(FIELD_MUNICIPALITY)
    }

    fn status(&self) -> Option<Cow<'_, str>> {
        self.text_field(FIELD_STATUS)
    }

    fn is_active(&self) -> bool {
        self.status().as_deref() == Some(STATUS_ACTIVE)
    }

    /// Surface in hectares; missing or non-numeric values count as zero
    fn area(&self) -> f64 {
        field_number(self.fields(), FIELD_AREA).unwrap_or(0.0)
    }
}

/// Drop the keys an exploration order derives so they cannot shadow the new values
fn without_order_keys(mut fields: Fields) -> Fields {
    fields.remove(FIELD_COORDS);
    fields.remove(FIELD_POLYGON);
    fields.remove(FIELD_KIND);
    fields
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Concession {
    #[serde(flatten)]
    pub fields: Fields,
    pub coords: Point,
}

impl Concession {
    /// Every raw field is kept except `coords`, which is replaced
    pub fn new(mut fields: Fields, coords: Point) -> Self {
        fields.remove(FIELD_COORDS);
        Self { fields, coords }
    }
}

impl Located for Concession {
    fn coords(&self) -> Point {
        self.coords
    }

    fn fields(&self) -> &Fields {
        &self.fields
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExplorationOrder {
    pub fields: Fields,
    pub coords: Point,
    /// Closed perimeter, when the raw record listed usable vertices
    pub polygon: Option<PolygonRing>,
}

impl ExplorationOrder {
    pub fn new(fields: Fields, coords: Point, polygon: Option<PolygonRing>) -> Self {
        Self {
            fields: without_order_keys(fields),
            coords,
            polygon,
        }
    }
}

impl Located for ExplorationOrder {
    fn coords(&self) -> Point {
        self.coords
    }

    fn fields(&self) -> &Fields {
        &self.fields
    }
}

// Hand-written so the `tipo` tag sits next to the flattened raw fields.
impl Serialize for ExplorationOrder {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len() + 3))?;
        for (key, value) in &self.fields {
            map.serialize_entry(key, value)?;
        }
        map.serialize_entry(FIELD_COORDS, &self.coords)?;
        map.serialize_entry(FIELD_POLYGON, &self.polygon)?;
        map.serialize_entry(FIELD_KIND, KIND_EXPLORATION_ORDER)?;
        map.end()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    Concession,
    ExplorationOrder,
}

impl RecordKind {
    /// Human-readable label used in exports
    pub fn label(&self) -> &'static str {
        match self {
            RecordKind::Concession => "Concesión",
            RecordKind::ExplorationOrder => "Orden de Exploración",
        }
    }
}

/// A concession or an exploration order with resolved geometry
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum LocatedRecord {
    Concession(Concession),
    ExplorationOrder(ExplorationOrder),
}

impl LocatedRecord {
    pub fn kind(&self) -> RecordKind {
        match self {
            LocatedRecord::Concession(_) => RecordKind::Concession,
            LocatedRecord::ExplorationOrder(_) => RecordKind::ExplorationOrder,
        }
    }

    pub fn polygon(&self) -> Option<&PolygonRing> {
        match self {
            LocatedRecord::Concession(_) => None,
            LocatedRecord::ExplorationOrder(order) => order.polygon.as_ref(),
        }
    }

    /// Lot name for concessions, order name for exploration orders
    pub fn display_name(&self) -> Option<Cow<'_, str>> {
        match self {
            LocatedRecord::Concession(c) => c.text_field(FIELD_LOT_NAME),
            LocatedRecord::ExplorationOrder(o) => o.text_field(FIELD_ORDER_NAME),
        }
    }

    /// Title holder for concessions, beneficiary for exploration orders
    pub fn holder(&self) -> Option<Cow<'_, str>> {
        match self {
            LocatedRecord::Concession(c) => c.text_field(FIELD_HOLDER),
            LocatedRecord::ExplorationOrder(o) => o.text_field(FIELD_BENEFICIARY),
        }
    }

    /// Region declared on the record itself, ignoring empty values
    pub fn declared_region(&self) -> Option<Cow<'_, str>> {
        self.text_field(FIELD_REGION).filter(|region| !region.is_empty())
    }
}

impl Located for LocatedRecord {
    fn coords(&self) -> Point {
        match self {
            LocatedRecord::Concession(c) => c.coords,
            LocatedRecord::ExplorationOrder(o) => o.coords,
        }
    }

    fn fields(&self) -> &Fields {
        match self {
            LocatedRecord::Concession(c) => &c.fields,
            LocatedRecord::ExplorationOrder(o) => &o.fields,
        }
    }
}

impl From<Concession> for LocatedRecord {
    fn from(concession: Concession) -> Self {
        LocatedRecord::Concession(concession)
    }
}

impl From<ExplorationOrder> for LocatedRecord {
    fn from(order: ExplorationOrder) -> Self {
        LocatedRecord::ExplorationOrder(order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn fields(value: serde_json::Value) -> Fields {
        value.as_object().cloned().unwrap_or_default()
    }

    #[test]
    fn test_concession_serialization() {
        let record = LocatedRecord::from(Concession::new(
            fields(json!({ "titulo": "T-1", "coords": "viejo" })),
            Point::new(-99.0, 17.0),
        ));

        assert_eq!(
            serde_json::to_value(&record).unwrap(),
            json!({ "titulo": "T-1", "coords": [-99.0, 17.0] })
        );
    }

    #[test]
    fn test_concession_keeps_order_named_fields() {
        let record = LocatedRecord::from(Concession::new(
            fields(json!({
                "titulo": "T-2",
                "tipo": "concesion",
                "coordenadasPoligono": "sin poligono"
            })),
            Point::new(-99.0, 17.0),
        ));

        assert_eq!(
            serde_json::to_value(&record).unwrap(),
            json!({
                "titulo": "T-2",
                "tipo": "concesion",
                "coordenadasPoligono": "sin poligono",
                "coords": [-99.0, 17.0]
            })
        );
    }

    #[test]
    fn test_exploration_order_serialization() {
        let ring = vec![
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(0.0, 1.0),
            Point::new(0.0, 0.0),
        ];
        let record = LocatedRecord::from(ExplorationOrder::new(
            fields(json!({ "nombre": "Orden 7", "tipo": "otro" })),
            Point::new(0.25, 0.25),
            Some(ring),
        ));

        assert_eq!(
            serde_json::to_value(&record).unwrap(),
            json!({
                "nombre": "Orden 7",
                "coords": [0.25, 0.25],
                "coordenadasPoligono": [[0.0, 0.0], [1.0, 0.0], [0.0, 1.0], [0.0, 0.0]],
                "tipo": "orden_exploracion"
            })
        );
    }

    #[test]
    fn test_order_without_polygon_serializes_null() {
        let order = ExplorationOrder::new(Fields::new(), Point::new(1.0, 2.0), None);
        let value = serde_json::to_value(&order).unwrap();
        assert_eq!(value["coordenadasPoligono"], serde_json::Value::Null);
    }

    #[test]
    fn test_shared_accessors() {
        let concession = LocatedRecord::from(Concession::new(
            fields(json!({
                "nombre_lote": "La Esperanza",
                "titular": "Minera Sur",
                "estado": "Vigente",
                "superficie": "12.5 ha",
                "region": ""
            })),
            Point::new(-99.0, 17.0),
        ));
        assert_eq!(concession.kind(), RecordKind::Concession);
        assert_eq!(concession.display_name().as_deref(), Some("La Esperanza"));
        assert_eq!(concession.holder().as_deref(), Some("Minera Sur"));
        assert!(concession.is_active());
        assert_eq!(concession.area(), 12.5);
        assert_eq!(concession.declared_region(), None);
        assert!(concession.polygon().is_none());

        let order = LocatedRecord::from(ExplorationOrder::new(
            fields(json!({ "nombre": "Orden 3", "a_favor": "Servicio Geológico" })),
            Point::new(-99.0, 17.0),
            None,
        ));
        assert_eq!(order.kind(), RecordKind::ExplorationOrder);
        assert_eq!(order.display_name().as_deref(), Some("Orden 3"));
        assert_eq!(order.holder().as_deref(), Some("Servicio Geológico"));
        assert!(!order.is_active());
        assert_eq!(order.area(), 0.0);
    }
}
