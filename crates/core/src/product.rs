use serde::{Deserialize, Serialize};

/// Catalog product as the backend returns it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: f64,
    #[serde(default)]
    pub category_id: Option<i64>,
    #[serde(default)]
    pub category_name: Option<String>,
    pub stock_quantity: i32,
    /// Image URL; the backend's wire name for this field is `lienImage`.
    #[serde(rename = "lienImage", default)]
    pub image_url: Option<String>,
}

/// Payload for creating or replacing a product (back-office only).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRequest {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub price: f64,
    pub category_id: i64,
    pub stock_quantity: i32,
    #[serde(rename = "lienImage", default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// Query for the public product search endpoint. All filters optional.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductSearch {
    pub name: Option<String>,
    pub category_id: Option<i64>,
    pub page: u32,
    pub size: u32,
}
