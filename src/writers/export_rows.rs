use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

use crate::models::{Located, LocatedRecord, RecordKind};
use crate::utils::constants::{
    COORDINATE_DECIMALS, EXPORT_FILE_EXTENSION, EXPORT_FILE_PREFIX, FIELD_AREA,
    FIELD_BENEFICIARY, FIELD_END_DATE, FIELD_HOLDER, FIELD_ISSUE_DATE, FIELD_LATITUDE,
    FIELD_LONGITUDE, FIELD_LOT_NAME, FIELD_MUNICIPALITY, FIELD_ORDER_NAME, FIELD_ORDER_NUMBER,
    FIELD_PUBLICATION, FIELD_REGION, FIELD_ROW_NUMBER, FIELD_START_DATE, FIELD_STATUS,
    FIELD_TITLE,
};

/// Where an export column takes its value from
#[derive(Debug, Clone, Copy)]
enum Column {
    Kind,
    Field(&'static str),
    Coordinates,
}

const ORDER_COLUMNS: &[(&str, Column)] = &[
    ("Tipo", Column::Kind),
    ("Nombre", Column::Field(FIELD_ORDER_NAME)),
    ("Número de Orden", Column::Field(FIELD_ORDER_NUMBER)),
    ("Municipio", Column::Field(FIELD_MUNICIPALITY)),
    ("Estado", Column::Field(FIELD_STATUS)),
    ("Superficie (ha)", Column::Field(FIELD_AREA)),
    ("A Favor", Column::Field(FIELD_BENEFICIARY)),
    ("Publicación DOF", Column::Field(FIELD_PUBLICATION)),
    ("Coordenadas", Column::Coordinates),
];

const CONCESSION_COLUMNS: &[(&str, Column)] = &[
    ("Tipo", Column::Kind),
    ("No.", Column::Field(FIELD_ROW_NUMBER)),
    ("Nombre del Lote", Column::Field(FIELD_LOT_NAME)),
    ("Titulo", Column::Field(FIELD_TITLE)),
    ("Fecha de Expedicion", Column::Field(FIELD_ISSUE_DATE)),
    ("Fecha de Inicio", Column::Field(FIELD_START_DATE)),
    ("Fecha de Fin", Column::Field(FIELD_END_DATE)),
    ("Superficie (ha)", Column::Field(FIELD_AREA)),
    ("Titular", Column::Field(FIELD_HOLDER)),
    ("Municipio", Column::Field(FIELD_MUNICIPALITY)),
    ("Region", Column::Field(FIELD_REGION)),
    ("Latitud", Column::Field(FIELD_LATITUDE)),
    ("Longitud", Column::Field(FIELD_LONGITUDE)),
    ("Coordenadas Decimales", Column::Coordinates),
    ("Estado", Column::Field(FIELD_STATUS)),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportOptions {
    pub coordinate_decimals: usize,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl ExportOptions {
    pub fn new() -> Self {
        Self {
            coordinate_decimals: COORDINATE_DECIMALS,
        }
    }

    pub fn with_coordinate_decimals(mut self, decimals: usize) -> Self {
        self.coordinate_decimals = decimals;
        self
    }
}

/// One spreadsheet row: column headers with their text values, in order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportRow {
    pub cells: Vec<(&'static str, String)>,
}

impl ExportRow {
    pub fn get(&self, column: &str) -> Option<&str> {
        self.cells
            .iter()
            .find(|(header, _)| *header == column)
            .map(|(_, value)| value.as_str())
    }

    pub fn headers(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.cells.iter().map(|(header, _)| *header)
    }
}

// Serialized as an object so column order survives
impl Serialize for ExportRow {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.cells.len()))?;
        for (header, value) in &self.cells {
            map.serialize_entry(header, value)?;
        }
        map.end()
    }
}

/// Builds the rows handed to the spreadsheet export.
#[derive(Debug, Clone, Default)]
pub struct RowExporter {
    options: ExportOptions,
}

impl RowExporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ExportOptions) -> Self {
        Self { options }
    }

    pub fn to_rows<'a, I>(&self, records: I) -> Vec<ExportRow>
    where
        I: IntoIterator<Item = &'a LocatedRecord>,
    {
        records.into_iter().map(|r| self.to_row(r)).collect()
    }

    pub fn to_row(&self, record: &LocatedRecord) -> ExportRow {
        let kind = record.kind();
        let columns = match kind {
            RecordKind::Concession => CONCESSION_COLUMNS,
            RecordKind::ExplorationOrder => ORDER_COLUMNS,
        };

        let cells = columns
            .iter()
            .map(|(header, column)| {
                let value = match column {
                    Column::Kind => kind.label().to_string(),
                    Column::Field(field) => record
                        .text_field(field)
                        .map(|v| v.into_owned())
                        .unwrap_or_default(),
                    Column::Coordinates => record
                        .coords()
                        .format_lat_lng(self.options.coordinate_decimals),
                };
                (*header, value)
            })
            .collect();

        ExportRow { cells }
    }
}

/// `Concesiones_y_Ordenes_Mineras[_region][_municipio][_anio].xlsx`
pub fn export_file_name(
    region: Option<&str>,
    municipality: Option<&str>,
    year: Option<i32>,
) -> String {
    let mut name = EXPORT_FILE_PREFIX.to_string();

    for part in [region, municipality].into_iter().flatten() {
        if !part.is_empty() {
            name.push('_');
            name.push_str(part);
        }
    }
    if let Some(year) = year {
        name.push_str(&format!("_{}", year));
    }

    format!("{}.{}", name, EXPORT_FILE_EXTENSION)
}
