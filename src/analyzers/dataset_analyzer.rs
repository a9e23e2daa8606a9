use std::collections::{BTreeMap, BTreeSet};

use crate::models::{Located, LocatedRecord, RecordKind};
use crate::processors::record_filter::record_year;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MunicipalityStats {
    pub total: usize,
    pub active: usize,
    pub area: f64,
    pub holders: BTreeSet<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct HolderStats {
    pub total: usize,
    pub active: usize,
    pub area: f64,
    pub municipalities: BTreeSet<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct YearStats {
    pub total: usize,
    pub active: usize,
    pub area: f64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DatasetStatistics {
    pub total_records: usize,
    pub by_municipality: BTreeMap<String, MunicipalityStats>,
    pub by_holder: BTreeMap<String, HolderStats>,
    pub by_year: BTreeMap<i32, YearStats>,
}

impl DatasetStatistics {
    pub fn active_records(&self) -> usize {
        self.by_municipality.values().map(|s| s.active).sum()
    }

    pub fn total_area(&self) -> f64 {
        self.by_municipality.values().map(|s| s.area).sum()
    }

    /// Holders ordered by number of concessions, largest first
    pub fn top_holders(&self, limit: usize) -> Vec<(&str, &HolderStats)> {
        let mut holders: Vec<(&str, &HolderStats)> = self
            .by_holder
            .iter()
            .map(|(name, stats)| (name.as_str(), stats))
            .collect();
        holders.sort_by(|a, b| b.1.total.cmp(&a.1.total).then_with(|| a.0.cmp(b.0)));
        holders.truncate(limit);
        holders
    }

    pub fn generate_summary(&self) -> String {
        format!(
            "{} concessions ({} active) across {} municipalities and {} holders, {:.2} ha",
            self.total_records,
            self.active_records(),
            self.by_municipality.len(),
            self.by_holder.len(),
            self.total_area()
        )
    }
}

/// Aggregates concession counts, active status and surface area.
///
/// Exploration orders are not counted.
#[derive(Debug, Clone, Default)]
pub struct DatasetAnalyzer {
    year: Option<i32>,
}

impl DatasetAnalyzer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Only count concessions that started in the given year
    pub fn with_year(year: Option<i32>) -> Self {
        Self { year }
    }

    pub fn analyze(&self, records: &[LocatedRecord]) -> DatasetStatistics {
        let mut stats = DatasetStatistics::default();

        let concessions = records
            .iter()
            .filter(|r| r.kind() == RecordKind::Concession)
            .filter(|r| self.year.map_or(true, |year| record_year(r) == Some(year)));

        for record in concessions {
            stats.total_records += 1;

            let active = usize::from(record.is_active());
            let area = record.area();
            let municipality = record.municipality().unwrap_or_default().into_owned();
            let holder = record.holder().unwrap_or_default().into_owned();

            let by_municipality = stats.by_municipality.entry(municipality.clone()).or_default();
            by_municipality.total += 1;
            by_municipality.active += active;
            by_municipality.area += area;
            by_municipality.holders.insert(holder.clone());

            let by_holder = stats.by_holder.entry(holder).or_default();
            by_holder.total += 1;
            by_holder.active += active;
            by_holder.area += area;
            by_holder.municipalities.insert(municipality);

            if let Some(year) = record_year(record) {
                let by_year = stats.by_year.entry(year).or_default();
                by_year.total += 1;
                by_year.active += active;
                by_year.area += area;
            }
        }

        stats
    }
}
