use super::client::ApiClient;
use crate::error::Result;
use crate::models::{SaveUser, SignInRequest, SignInResponse, User};
use reqwest::Method;

impl ApiClient {
    /// Exchange credentials for a bearer token.
    ///
    /// Does not adopt the token; callers decide when to hand it to the
    /// session manager.
    pub async fn sign_in(&self, credentials: &SignInRequest) -> Result<SignInResponse> {
        self.request(
            Method::POST,
            "/auth/sign-in",
            &[],
            Some(serde_json::to_value(credentials)?),
        )
        .await
    }

    pub async fn sign_up(&self, user: &SaveUser) -> Result<User> {
        self.request(
            Method::POST,
            "/auth/sign-up",
            &[],
            Some(serde_json::to_value(user)?),
        )
        .await
    }
}
