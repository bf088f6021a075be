use super::client::ApiClient;
use crate::error::Result;
use crate::models::ProductDetails;
use reqwest::Method;

impl ApiClient {
    pub async fn comparison(&self) -> Result<Vec<ProductDetails>> {
        self.request(Method::GET, "/comparison", &[], None).await
    }

    /// Adds the product to the comparison list, or removes it if already
    /// present; returns the updated list.
    pub async fn toggle_comparison(&self, product_id: i64) -> Result<Vec<ProductDetails>> {
        self.request(
            Method::POST,
            &format!("/comparison/{}", product_id),
            &[],
            None,
        )
        .await
    }

    pub async fn clear_comparison(&self) -> Result<()> {
        self.request(Method::DELETE, "/comparison/clear", &[], None)
            .await
    }
}
