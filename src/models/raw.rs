use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::borrow::Cow;

use crate::utils::constants::{FIELD_LATITUDE, FIELD_LONGITUDE, FIELD_VERTICES};
use crate::utils::numbers::leading_number;

/// Record fields keyed by their source column names
pub type Fields = Map<String, Value>;

/// Read a field as text; numbers and booleans are rendered, `null` and
/// nested values are treated as absent.
pub fn field_text<'a>(fields: &'a Fields, key: &str) -> Option<Cow<'a, str>> {
    match fields.get(key)? {
        Value::String(s) => Some(Cow::Borrowed(s.as_str())),
        Value::Number(n) => Some(Cow::Owned(n.to_string())),
        Value::Bool(b) => Some(Cow::Owned(b.to_string())),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Read a numeric field stored as a number or as text starting with a number
pub fn field_number(fields: &Fields, key: &str) -> Option<f64> {
    match fields.get(key)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => leading_number(s),
        _ => None,
    }
}

/// Coordinate fields only count when they hold text
fn coordinate_text<'a>(fields: &'a Fields, key: &str) -> Option<&'a str> {
    fields.get(key).and_then(Value::as_str)
}

/// A mining concession as loaded from the dataset
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawConcession {
    pub fields: Fields,
}

impl RawConcession {
    pub fn new(fields: Fields) -> Self {
        Self { fields }
    }

    pub fn latitude(&self) -> Option<&str> {
        coordinate_text(&self.fields, FIELD_LATITUDE)
    }

    pub fn longitude(&self) -> Option<&str> {
        coordinate_text(&self.fields, FIELD_LONGITUDE)
    }
}

/// An exploration order as loaded from the dataset; the central point and
/// the perimeter are both optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawExplorationOrder {
    pub fields: Fields,
}

impl RawExplorationOrder {
    pub fn new(fields: Fields) -> Self {
        Self { fields }
    }

    pub fn latitude(&self) -> Option<&str> {
        coordinate_text(&self.fields, FIELD_LATITUDE)
    }

    pub fn longitude(&self) -> Option<&str> {
        coordinate_text(&self.fields, FIELD_LONGITUDE)
    }

    /// Perimeter vertices, or `None` when the field is missing or not an array
    pub fn vertices(&self) -> Option<&[Value]> {
        self.fields
            .get(FIELD_VERTICES)
            .and_then(Value::as_array)
            .map(Vec::as_slice)
    }
}

/// Borrowed view over one perimeter vertex
#[derive(Debug, Clone, Copy)]
pub struct RawVertex<'a> {
    value: &'a Value,
}

impl<'a> RawVertex<'a> {
    pub fn new(value: &'a Value) -> Self {
        Self { value }
    }

    pub fn latitude(&self) -> Option<&'a str> {
        self.value.get(FIELD_LATITUDE).and_then(Value::as_str)
    }

    pub fn longitude(&self) -> Option<&'a str> {
        self.value.get(FIELD_LONGITUDE).and_then(Value::as_str)
    }
}

impl<'a> From<&'a Value> for RawVertex<'a> {
    fn from(value: &'a Value) -> Self {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_concession_keeps_unknown_fields() {
        let raw: RawConcession = serde_json::from_value(json!({
            "latitud": "17°3′53.19″N",
            "longitud": "99°44′29.44″W",
            "titular": "Minera del Sur",
            "campo_nuevo": [1, 2, 3]
        }))
        .unwrap();

        assert_eq!(raw.latitude(), Some("17°3′53.19″N"));
        assert_eq!(raw.longitude(), Some("99°44′29.44″W"));
        assert_eq!(raw.fields["campo_nuevo"], json!([1, 2, 3]));
    }

    #[test]
    fn test_non_text_coordinates_are_absent() {
        let raw: RawConcession =
            serde_json::from_value(json!({ "latitud": null, "longitud": 17.5 })).unwrap();
        assert_eq!(raw.latitude(), None);
        assert_eq!(raw.longitude(), None);
    }

    #[test]
    fn test_order_vertices() {
        let with_vertices: RawExplorationOrder = serde_json::from_value(json!({
            "vertices": [{ "latitud": "1°0′0″N", "longitud": "2°0′0″W" }]
        }))
        .unwrap();
        let vertices = with_vertices.vertices().unwrap();
        let vertex = RawVertex::from(&vertices[0]);
        assert_eq!(vertex.latitude(), Some("1°0′0″N"));
        assert_eq!(vertex.longitude(), Some("2°0′0″W"));

        let not_a_list: RawExplorationOrder =
            serde_json::from_value(json!({ "vertices": "ninguno" })).unwrap();
        assert!(not_a_list.vertices().is_none());
        assert!(RawExplorationOrder::default().vertices().is_none());
    }

    #[test]
    fn test_field_text_and_number() {
        let fields = json!({
            "titulo": 245871,
            "superficie": "120.5",
            "area": 30,
            "con_unidad": "12.5 ha",
            "estado": "Vigente",
            "vacio": null
        });
        let fields = fields.as_object().unwrap();

        assert_eq!(field_text(fields, "titulo").as_deref(), Some("245871"));
        assert_eq!(field_text(fields, "estado").as_deref(), Some("Vigente"));
        assert_eq!(field_text(fields, "vacio"), None);
        assert_eq!(field_text(fields, "falta"), None);

        assert_eq!(field_number(fields, "superficie"), Some(120.5));
        assert_eq!(field_number(fields, "area"), Some(30.0));
        assert_eq!(field_number(fields, "con_unidad"), Some(12.5));
        assert_eq!(field_number(fields, "estado"), None);
    }
}
