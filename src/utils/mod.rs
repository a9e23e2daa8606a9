pub mod constants;
pub mod coordinates;
pub mod dates;
pub mod numbers;
pub mod regions;

pub use constants::*;
pub use coordinates::{dms_to_decimal, parse_dms, try_dms_to_decimal};
pub use dates::extract_year;
pub use numbers::leading_number;
pub use regions::{municipalities_in_region, region_for_municipality, region_names, region_view};
