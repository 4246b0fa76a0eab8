//! Benchmark measurements: the record model, CSV loading and category handling.

mod category;
mod loader;

use serde::{Deserialize, Serialize};

pub use category::{CANONICAL_CATEGORIES, order_categories, slug};
pub use loader::{REQUIRED_COLUMNS, load, read_from, validate_columns};

/// One measured benchmark instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Node count
    #[serde(rename = "V")]
    pub nodes: u32,
    /// Edge count
    #[serde(rename = "E")]
    pub edges: u64,
    /// Graph type label
    #[serde(rename = "Typ")]
    pub category: String,
    /// Instance identifier, unique per (category, nodes)
    #[serde(rename = "Instance")]
    pub instance: String,
    /// Edmonds-Karp runtime in milliseconds
    #[serde(rename = "EK_ms")]
    pub edmonds_karp_ms: f64,
    /// Dinic runtime in milliseconds
    #[serde(rename = "Dinic_ms")]
    pub dinic_ms: f64,
}

/// Validated contents of a results file.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    columns: Vec<String>,
    records: Vec<Record>,
}

impl Dataset {
    #[must_use]
    pub const fn new(columns: Vec<String>, records: Vec<Record>) -> Self {
        Self { columns, records }
    }

    /// Header names as found in the file.
    #[must_use]
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct category labels in processing order.
    #[must_use]
    pub fn categories(&self) -> Vec<String> {
        order_categories(self.records.iter().map(|r| r.category.as_str()))
    }

    /// All records whose label equals `category` exactly.
    #[must_use]
    pub fn category(&self, category: &str) -> Vec<&Record> {
        self.records
            .iter()
            .filter(|r| r.category == category)
            .collect()
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
