use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub product_id: i64,
    pub product_title: String,
    pub quantity: u32,
    pub price_per_unit: f64,
    pub image_url: String,
}

/// Server-side cart; totals are computed by the server, never locally.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    pub items: Vec<CartItem>,
    pub total_price: f64,
    pub total_quantity: u32,
}
