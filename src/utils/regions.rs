use crate::utils::constants::{RegionView, REGION_MUNICIPALITIES, REGION_VIEWS};

/// Look up the region a municipality belongs to
pub fn region_for_municipality(municipality: &str) -> Option<&'static str> {
    REGION_MUNICIPALITIES
        .iter()
        .find(|(_, municipalities)| municipalities.iter().any(|name| *name == municipality))
        .map(|(region, _)| *region)
}

/// Municipalities of a region; empty for an unknown region
pub fn municipalities_in_region(region: &str) -> &'static [&'static str] {
    REGION_MUNICIPALITIES
        .iter()
        .find(|(name, _)| *name == region)
        .map(|(_, municipalities)| *municipalities)
        .unwrap_or(&[])
}

/// Map view (centre and zoom) of a region
pub fn region_view(region: &str) -> Option<&'static RegionView> {
    REGION_VIEWS.iter().find(|view| view.name == region)
}

/// Names of all known regions, in display order
pub fn region_names() -> impl Iterator<Item = &'static str> {
    REGION_VIEWS.iter().map(|view| view.name)
}
