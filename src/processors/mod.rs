pub mod geometry;
pub mod record_assembler;
pub mod record_filter;

pub use geometry::{centroid, close_ring, ring_vertices, vertices_to_ring, Bounds};
pub use record_assembler::{
    assemble_concessions, assemble_exploration_orders, AssemblyReport, Exclusion,
    ExclusionReason, RecordAssembler,
};
pub use record_filter::{
    record_year, unique_municipalities, unique_years, FilterCriteria, RecordFilter,
};
