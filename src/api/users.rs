use super::client::ApiClient;
use super::query::Pageable;
use crate::error::Result;
use crate::models::{Page, SaveUser, User};
use reqwest::Method;

impl ApiClient {
    /// Profile of the signed-in user.
    pub async fn profile(&self) -> Result<User> {
        self.request(Method::GET, "/users/profile", &[], None).await
    }

    pub async fn user(&self, id: i64) -> Result<User> {
        self.request(Method::GET, &format!("/users/{}", id), &[], None)
            .await
    }

    pub async fn update_user(&self, id: i64, user: &SaveUser) -> Result<User> {
        self.request(
            Method::PATCH,
            &format!("/users/{}", id),
            &[],
            Some(serde_json::to_value(user)?),
        )
        .await
    }

    pub async fn delete_user(&self, id: i64) -> Result<()> {
        self.request(Method::DELETE, &format!("/users/{}", id), &[], None)
            .await
    }

    /// Paginated account listing; the server restricts this to admin roles.
    pub async fn users(&self, pageable: &Pageable) -> Result<Page<User>> {
        let mut query = Vec::new();
        pageable.push_query(&mut query);
        self.request(Method::GET, "/users", &query, None).await
    }
}
