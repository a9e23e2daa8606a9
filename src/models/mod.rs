pub mod located;
pub mod point;
pub mod raw;

pub use located::{Concession, ExplorationOrder, Located, LocatedRecord, RecordKind};
pub use point::{Point, PolygonRing};
pub use raw::{Fields, RawConcession, RawExplorationOrder, RawVertex};
