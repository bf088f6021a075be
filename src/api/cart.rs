use super::client::ApiClient;
use crate::error::Result;
use crate::models::Cart;
use reqwest::Method;

/// Every mutation returns the server's cart, which replaces whatever the
/// caller was holding; nothing is merged locally.
impl ApiClient {
    pub async fn cart(&self) -> Result<Cart> {
        self.request(Method::GET, "/cart", &[], None).await
    }

    pub async fn add_to_cart(&self, product_id: i64, quantity: u32) -> Result<Cart> {
        let query = [
            ("productId", product_id.to_string()),
            ("quantity", quantity.to_string()),
        ];
        self.request(Method::POST, "/cart/add", &query, None).await
    }

    pub async fn update_cart_quantity(&self, product_id: i64, quantity: u32) -> Result<Cart> {
        let query = [
            ("productId", product_id.to_string()),
            ("quantity", quantity.to_string()),
        ];
        self.request(Method::PATCH, "/cart/update", &query, None)
            .await
    }

    pub async fn remove_from_cart(&self, product_id: i64) -> Result<Cart> {
        self.request(
            Method::DELETE,
            &format!("/cart/remove/{}", product_id),
            &[],
            None,
        )
        .await
    }

    pub async fn clear_cart(&self) -> Result<()> {
        self.request(Method::DELETE, "/cart/clear", &[], None).await
    }
}
