use std::collections::BTreeSet;

use crate::models::{Located, LocatedRecord, RecordKind};
use crate::utils::constants::{
    FIELD_BENEFICIARY, FIELD_HOLDER, FIELD_LOT_NAME, FIELD_MUNICIPALITY, FIELD_ORDER_NAME,
    FIELD_ORDER_NUMBER, FIELD_PUBLICATION, FIELD_START_DATE, FIELD_TITLE, MIN_SEARCH_TERM_CHARS,
};
use crate::utils::dates::extract_year;
use crate::utils::regions::municipalities_in_region;

/// Fields searched by the free-text filter, per record kind
const CONCESSION_SEARCH_FIELDS: &[&str] =
    &[FIELD_LOT_NAME, FIELD_HOLDER, FIELD_MUNICIPALITY, FIELD_TITLE];
const ORDER_SEARCH_FIELDS: &[&str] = &[
    FIELD_ORDER_NAME,
    FIELD_BENEFICIARY,
    FIELD_MUNICIPALITY,
    FIELD_ORDER_NUMBER,
];

/// Year a record is filed under: start date for concessions, publication
/// date for exploration orders
pub fn record_year(record: &LocatedRecord) -> Option<i32> {
    let field = match record.kind() {
        RecordKind::Concession => FIELD_START_DATE,
        RecordKind::ExplorationOrder => FIELD_PUBLICATION,
    };
    extract_year(record.text_field(field).as_deref())
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub region: Option<String>,
    pub municipality: Option<String>,
    pub year: Option<i32>,
    pub search: Option<String>,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into()).filter(|r: &String| !r.is_empty());
        self
    }

    pub fn with_municipality(mut self, municipality: impl Into<String>) -> Self {
        self.municipality = Some(municipality.into()).filter(|m: &String| !m.is_empty());
        self
    }

    pub fn with_year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into()).filter(|t: &String| !t.is_empty());
        self
    }

    /// Search term in lower case, if it is long enough to apply
    fn effective_search(&self) -> Option<String> {
        self.search
            .as_deref()
            .filter(|term| term.chars().count() >= MIN_SEARCH_TERM_CHARS)
            .map(str::to_lowercase)
    }

    pub fn is_empty(&self) -> bool {
        self.region.is_none()
            && self.municipality.is_none()
            && self.year.is_none()
            && self.effective_search().is_none()
    }
}

/// Applies [`FilterCriteria`] to located records, keeping their order.
#[derive(Debug, Clone)]
pub struct RecordFilter {
    criteria: FilterCriteria,
    search: Option<String>,
}

impl RecordFilter {
    pub fn new(criteria: FilterCriteria) -> Self {
        let search = criteria.effective_search();
        Self { criteria, search }
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn apply<'a>(&self, records: &'a [LocatedRecord]) -> Vec<&'a LocatedRecord> {
        records.iter().filter(|record| self.matches(record)).collect()
    }

    pub fn matches(&self, record: &LocatedRecord) -> bool {
        self.matches_region(record)
            && self.matches_municipality(record)
            && self.matches_year(record)
            && self.matches_search(record)
    }

    /// The record's own `region` wins; otherwise its municipality decides
    fn matches_region(&self, record: &LocatedRecord) -> bool {
        let Some(region) = self.criteria.region.as_deref() else {
            return true;
        };

        match record.declared_region() {
            Some(declared) => declared == region,
            None => record
                .municipality()
                .map(|m| municipalities_in_region(region).iter().any(|name| *name == m))
                .unwrap_or(false),
        }
    }

    fn matches_municipality(&self, record: &LocatedRecord) -> bool {
        match self.criteria.municipality.as_deref() {
            Some(municipality) => record.municipality().as_deref() == Some(municipality),
            None => true,
        }
    }

    fn matches_year(&self, record: &LocatedRecord) -> bool {
        match self.criteria.year {
            Some(year) => record_year(record) == Some(year),
            None => true,
        }
    }

    fn matches_search(&self, record: &LocatedRecord) -> bool {
        let Some(term) = self.search.as_deref() else {
            return true;
        };

        let fields = match record.kind() {
            RecordKind::Concession => CONCESSION_SEARCH_FIELDS,
            RecordKind::ExplorationOrder => ORDER_SEARCH_FIELDS,
        };

        fields.iter().any(|field| {
            record
                .text_field(field)
                .map(|value| value.to_lowercase().contains(term))
                .unwrap_or(false)
        })
    }
}

/// Distinct municipality names, sorted alphabetically
pub fn unique_municipalities(records: &[LocatedRecord]) -> Vec<String> {
    records
        .iter()
        .filter_map(|record| record.municipality())
        .filter(|m| !m.is_empty())
        .map(|m| m.into_owned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Distinct record years, newest first
pub fn unique_years(records: &[LocatedRecord]) -> Vec<i32> {
    records
        .iter()
        .filter_map(record_year)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .rev()
        .collect()
}
