use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Paginated envelope returned by `GET /products`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductPage {
    pub count: u64,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    pub results: Vec<ProductDescriptor>,
}

/// One data product as described by the catalog endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDescriptor {
    pub product_id: String,
    pub display_name: String,
    #[serde(default)]
    pub desc: String,
    /// Whether the product is a temporal composite.
    #[serde(default)]
    pub composite: bool,
    /// Composite window length in days; 0 for non-composite products.
    #[serde(default)]
    pub composite_period: i64,
    #[serde(default)]
    pub date_added: Option<String>,
    #[serde(default)]
    pub date_started: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub variable: Option<String>,
    #[serde(default)]
    pub meta: ProductMeta,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Loosely-typed product metadata.
///
/// The backend attaches arbitrary keys here; the ones the viewer cares
/// about are named, everything else is preserved in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductMeta {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crop_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field_size: Option<FieldSize>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

/// `field_size` arrives as either a label or a number depending on source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldSize {
    Text(String),
    Number(f64),
}
