use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::info;

use crate::error::{ProcessingError, Result};
use crate::models::{LocatedRecord, RawConcession, RawExplorationOrder};
use crate::processors::record_assembler::{AssemblyReport, RecordAssembler};

/// Located concessions and exploration orders derived from one dataset load
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub concessions: Vec<LocatedRecord>,
    pub exploration_orders: Vec<LocatedRecord>,
    pub concession_report: AssemblyReport,
    pub exploration_order_report: AssemblyReport,
}

impl Dataset {
    /// Assemble already-deserialized raw records
    pub fn from_raw(concessions: &[RawConcession], orders: &[RawExplorationOrder]) -> Self {
        let assembler = RecordAssembler::new();
        let (concessions, concession_report) =
            assembler.assemble_concessions_with_report(concessions);
        let (exploration_orders, exploration_order_report) =
            assembler.assemble_exploration_orders_with_report(orders);

        info!(
            concessions = concessions.len(),
            exploration_orders = exploration_orders.len(),
            "dataset assembled"
        );

        Self {
            concessions,
            exploration_orders,
            concession_report,
            exploration_order_report,
        }
    }

    /// Parse both JSON arrays and assemble them
    pub fn from_json_strs(concessions_json: &str, orders_json: &str) -> Result<Self> {
        let concessions: Vec<RawConcession> = read_records(concessions_json, "concessions")?;
        let orders: Vec<RawExplorationOrder> = read_records(orders_json, "exploration orders")?;
        Ok(Self::from_raw(&concessions, &orders))
    }

    /// Concessions followed by exploration orders
    pub fn records(&self) -> impl Iterator<Item = &LocatedRecord> {
        self.concessions.iter().chain(self.exploration_orders.iter())
    }

    /// All records in one owned list, concessions first
    pub fn all_records(&self) -> Vec<LocatedRecord> {
        self.records().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.concessions.len() + self.exploration_orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Read a JSON array of record objects
pub fn read_records<T: DeserializeOwned>(json: &str, label: &str) -> Result<Vec<T>> {
    let value: Value = serde_json::from_str(json)?;

    let Value::Array(items) = value else {
        return Err(ProcessingError::InvalidFormat(format!(
            "Expected a JSON array of {}",
            label
        )));
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            if !item.is_object() {
                return Err(ProcessingError::InvalidFormat(format!(
                    "Entry {} of {} is not an object",
                    index, label
                )));
            }
            Ok(serde_json::from_value(item)?)
        })
        .collect()
}
