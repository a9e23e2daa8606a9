pub mod dataset_reader;

pub use dataset_reader::{read_records, Dataset};
