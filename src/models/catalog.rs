use serde::{Deserialize, Serialize};

/// Catalog listing entry; `quantity` is the units left in stock.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: i64,
    pub title: String,
    pub price: f64,
    pub average_rating: f64,
    pub image_url: String,
    pub brand_name: String,
    pub category_name: String,
    pub quantity: u32,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ProductAttribute {
    pub name: String,
    pub value: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ProductDetails {
    pub id: i64,
    pub title: String,
    pub price: f64,
    pub average_rating: f64,
    pub image_url: String,
    pub brand_name: String,
    pub category_name: String,
    pub quantity: u32,
    pub description: String,
    pub images: Vec<String>,
    pub attributes: Vec<ProductAttribute>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: i64,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<i64>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Brand {
    pub id: i64,
    pub name: String,
}
