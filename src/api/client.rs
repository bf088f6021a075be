use crate::error::{Result, ShopError};
use crate::models::ApiErrorBody;
use crate::session::SessionManager;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Method, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Fallback shown when an error response carries no usable message.
const GENERIC_ERROR_MESSAGE: &str = "An unexpected error occurred";

/// HTTP entry point shared by every resource call.
///
/// Holds the base endpoint, the HTTP handle, and the session manager; the
/// resource methods in the sibling modules are thin path/method/query
/// builders on top of [`ApiClient::request`]. Failed calls fail exactly
/// once; retrying is the caller's decision.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    session: SessionManager,
}

impl ApiClient {
    pub fn new(base_url: &str, session: SessionManager) -> Result<Self> {
        let http = reqwest::Client::builder().build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            session,
        })
    }

    pub fn session(&self) -> &SessionManager {
        &self.session
    }

    /// Issue a request and decode the JSON response into `T`.
    ///
    /// A success response without a JSON content type decodes as if the body
    /// were `null`, so callers declaring `()` never fail on empty bodies.
    pub(crate) async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<Value>,
    ) -> Result<T> {
        let response = self.execute(method, path, query, body).await?;
        if !is_json_response(&response) {
            return Ok(serde_json::from_value(Value::Null)?);
        }
        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    async fn execute(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<Value>,
    ) -> Result<Response> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        if let Some(token) = self.session.token() {
            // Sign-in and sign-up must never carry a stale token
            if !is_auth_endpoint(path) {
                headers.insert(
                    AUTHORIZATION,
                    HeaderValue::from_str(&format!("Bearer {}", token)).map_err(|e| {
                        ShopError::Other(format!("Invalid authorization header: {}", e))
                    })?,
                );
            }
        }

        let url = format!("{}{}", self.base_url, path);
        let mut request = self.http.request(method, &url).headers(headers);
        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(body) = body {
            request = request.json(&body);
        }

        let response = request.send().await?;
        self.classify(path, response).await
    }

    /// Map non-success statuses onto the error taxonomy, dropping the stored
    /// token when the server no longer accepts it.
    async fn classify(&self, path: &str, response: Response) -> Result<Response> {
        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            // A 401 from sign-in is a rejected login attempt, not an expired
            // session; no token was active, so none is cleared.
            if is_auth_endpoint(path) {
                return Err(ShopError::InvalidCredentials);
            }
            let _ = self.session.set_token(None);
            return Err(ShopError::SessionExpired);
        }
        if !status.is_success() {
            let message = response
                .json::<ApiErrorBody>()
                .await
                .map(|body| body.message)
                .unwrap_or_else(|_| GENERIC_ERROR_MESSAGE.to_string());
            return Err(ShopError::ApiError {
                status: status.as_u16(),
                message,
            });
        }
        Ok(response)
    }
}

/// Paths with an `/auth/` segment are exempt from bearer attachment.
fn is_auth_endpoint(path: &str) -> bool {
    path.contains("/auth/")
}

fn is_json_response(response: &Response) -> bool {
    response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.contains("application/json"))
        .unwrap_or(false)
}
