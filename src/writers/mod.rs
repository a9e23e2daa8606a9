pub mod export_rows;
pub mod geojson;

pub use export_rows::{export_file_name, ExportOptions, ExportRow, RowExporter};
pub use geojson::polygon_feature_collection;
