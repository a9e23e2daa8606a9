pub mod analyzers;
pub mod error;
pub mod models;
pub mod processors;
pub mod readers;
pub mod utils;
pub mod writers;

pub use error::{ProcessingError, Result};
pub use models::{Located, LocatedRecord, Point, PolygonRing};
pub use processors::{assemble_concessions, assemble_exploration_orders};
pub use readers::Dataset;
