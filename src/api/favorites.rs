use super::client::ApiClient;
use super::query::Pageable;
use crate::error::Result;
use crate::models::{Page, Product};
use reqwest::Method;

impl ApiClient {
    pub async fn favorites(&self, pageable: &Pageable) -> Result<Page<Product>> {
        let mut query = Vec::new();
        pageable.push_query(&mut query);
        self.request(Method::GET, "/favorites", &query, None).await
    }

    /// Adds the product to favorites, or removes it if already present.
    pub async fn toggle_favorite(&self, product_id: i64) -> Result<()> {
        self.request(
            Method::POST,
            &format!("/favorites/{}", product_id),
            &[],
            None,
        )
        .await
    }
}
