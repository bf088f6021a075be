use super::client::ApiClient;
use super::query::Pageable;
use crate::error::Result;
use crate::models::{NewReview, Page, Review};
use reqwest::Method;

impl ApiClient {
    pub async fn add_review(&self, review: &NewReview) -> Result<Review> {
        self.request(
            Method::POST,
            "/reviews",
            &[],
            Some(serde_json::to_value(review)?),
        )
        .await
    }

    pub async fn product_reviews(
        &self,
        product_id: i64,
        pageable: &Pageable,
    ) -> Result<Page<Review>> {
        let mut query = Vec::new();
        pageable.push_query(&mut query);
        self.request(
            Method::GET,
            &format!("/reviews/product/{}", product_id),
            &query,
            None,
        )
        .await
    }

    pub async fn delete_review(&self, id: i64) -> Result<()> {
        self.request(Method::DELETE, &format!("/reviews/{}", id), &[], None)
            .await
    }
}
