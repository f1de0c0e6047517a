use serde::{Deserialize, Serialize};

/// A catalog item as returned by the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: u64,
    pub name: Option<String>,
    pub unit_price: Option<f64>,
    pub color: Option<String>,
    pub image_ref: Option<String>,
}

/// Body for create and update requests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemInput {
    pub name: String,
    pub unit_price: f64,
    pub color: String,
    pub image_ref: String,
}
