use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Paginated envelope returned by `GET /datasets/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetPage {
    pub count: u64,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    pub results: Vec<DatasetEntry>,
}

/// One dated dataset available for a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetEntry {
    pub product_id: String,
    /// Acquisition date, `YYYY-MM-DD`.
    pub date: String,
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl DatasetPage {
    /// Available dates in catalog order.
    pub fn dates(&self) -> Vec<&str> {
        self.results.iter().map(|e| e.date.as_str()).collect()
    }

    /// Lexicographically greatest date, which for `YYYY-MM-DD` strings is
    /// also the most recent one.
    pub fn latest_date(&self) -> Option<&str> {
        self.results.iter().map(|e| e.date.as_str()).max()
    }
}
