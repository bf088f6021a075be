use super::client::ApiClient;
use super::query::{Pageable, ProductFilters};
use crate::error::Result;
use crate::models::{Brand, Category, Page, Product, ProductDetails};
use reqwest::Method;

impl ApiClient {
    pub async fn products(
        &self,
        filters: &ProductFilters,
        pageable: &Pageable,
    ) -> Result<Page<Product>> {
        let mut query = Vec::new();
        filters.push_query(&mut query);
        pageable.push_query(&mut query);
        self.request(Method::GET, "/products", &query, None).await
    }

    pub async fn product(&self, id: i64) -> Result<ProductDetails> {
        self.request(Method::GET, &format!("/products/{}", id), &[], None)
            .await
    }

    pub async fn categories(&self) -> Result<Vec<Category>> {
        self.request(Method::GET, "/categories", &[], None).await
    }

    pub async fn brands(&self) -> Result<Vec<Brand>> {
        self.request(Method::GET, "/brands", &[], None).await
    }
}
