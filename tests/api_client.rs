use std::sync::{Arc, Mutex};

use serde_json::json;
use shopfront::api::{ApiClient, Pageable, ProductFilters};
use shopfront::error::ShopError;
use shopfront::models::{NewReview, OrderStatus, SignInRequest};
use shopfront::session::{SessionManager, TokenStore};
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[derive(Clone, Default)]
struct MemoryTokenStore {
    token: Arc<Mutex<Option<String>>>,
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<String> {
        self.token.lock().unwrap().clone()
    }

    fn save(&self, token: &str) -> shopfront::Result<()> {
        *self.token.lock().unwrap() = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> shopfront::Result<()> {
        *self.token.lock().unwrap() = None;
        Ok(())
    }
}

fn client_for(server: &MockServer) -> ApiClient {
    let session = SessionManager::new(MemoryTokenStore::default());
    ApiClient::new(&server.uri(), session).expect("api client")
}

fn credentials() -> SignInRequest {
    SignInRequest {
        username: "alice".to_string(),
        password: "secret".to_string(),
    }
}

fn empty_page() -> serde_json::Value {
    json!({
        "content": [],
        "totalPages": 0,
        "totalElements": 0,
        "numberOfElements": 0,
        "number": 0,
        "size": 20,
        "first": true,
        "last": true,
        "empty": true
    })
}

fn profile_body() -> serde_json::Value {
    json!({
        "id": 1,
        "username": "alice",
        "email": "alice@example.com",
        "roles": ["USER"]
    })
}

#[tokio::test]
async fn sign_in_omits_authorization_header() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/sign-in"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"token": "fresh"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    client.session().set_token(Some("stale".to_string())).unwrap();

    let response = client.sign_in(&credentials()).await.unwrap();
    assert_eq!(response.token, "fresh");

    let requests = server.received_requests().await.unwrap();
    assert!(requests[0].headers.get("authorization").is_none());
}

#[tokio::test]
async fn protected_call_carries_current_bearer_token() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/cart"))
        .and(header("authorization", "Bearer abc123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [],
            "totalPrice": 0.0,
            "totalQuantity": 0
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    client.session().set_token(Some("abc123".to_string())).unwrap();

    let cart = client.cart().await.unwrap();
    assert!(cart.items.is_empty());
}

#[tokio::test]
async fn expiry_401_clears_token_and_next_call_is_anonymous() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/orders"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "status": 401,
            "message": "expired",
            "timestamp": "2024-05-01T12:00:00Z"
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/categories"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let client = client_for(&server);
    client.session().set_token(Some("abc123".to_string())).unwrap();

    let err = client.orders().await.unwrap_err();
    assert!(matches!(err, ShopError::SessionExpired));
    assert!(client.session().token().is_none());

    client.categories().await.unwrap();
    let requests = server.received_requests().await.unwrap();
    let follow_up = requests
        .iter()
        .find(|r| r.url.path() == "/categories")
        .unwrap();
    assert!(follow_up.headers.get("authorization").is_none());
}

#[tokio::test]
async fn login_401_is_invalid_credentials_and_keeps_token() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/sign-in"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "status": 401,
            "message": "Bad credentials",
            "timestamp": "2024-05-01T12:00:00Z"
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    client.session().set_token(Some("keep".to_string())).unwrap();

    let err = client.sign_in(&credentials()).await.unwrap_err();
    assert!(matches!(err, ShopError::InvalidCredentials));
    assert_eq!(client.session().token().as_deref(), Some("keep"));
}

#[tokio::test]
async fn login_401_without_token_stays_anonymous() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/sign-in"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.sign_in(&credentials()).await.unwrap_err();
    assert!(matches!(err, ShopError::InvalidCredentials));
    assert!(client.session().token().is_none());
}

#[tokio::test]
async fn success_with_empty_body_resolves() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/cart/clear"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    client.clear_cart().await.unwrap();
}

#[tokio::test]
async fn error_body_message_is_surfaced() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/products/7"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "status": 404,
            "message": "Product not found",
            "timestamp": "2024-05-01T12:00:00Z"
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    match client.product(7).await.unwrap_err() {
        ShopError::ApiError { status, message } => {
            assert_eq!(status, 404);
            assert_eq!(message, "Product not found");
        }
        other => panic!("expected ApiError, got {:?}", other),
    }
}

#[tokio::test]
async fn error_body_with_only_message_is_surfaced() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/products/8"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "message": "Product not found"
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    match client.product(8).await.unwrap_err() {
        ShopError::ApiError { status, message } => {
            assert_eq!(status, 404);
            assert_eq!(message, "Product not found");
        }
        other => panic!("expected ApiError, got {:?}", other),
    }
}

#[tokio::test]
async fn unparseable_error_body_falls_back_to_generic_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/brands"))
        .respond_with(ResponseTemplate::new(500).set_body_string("<html>boom</html>"))
        .mount(&server)
        .await;

    let client = client_for(&server);
    match client.brands().await.unwrap_err() {
        ShopError::ApiError { status, message } => {
            assert_eq!(status, 500);
            assert_eq!(message, "An unexpected error occurred");
        }
        other => panic!("expected ApiError, got {:?}", other),
    }
}

#[tokio::test]
async fn sign_in_then_requests_carry_new_token() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/sign-in"))
        .and(body_json(json!({"username": "alice", "password": "secret"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"token": "abc123"})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/users/profile"))
        .and(header("authorization", "Bearer abc123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(profile_body()))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let response = client.sign_in(&credentials()).await.unwrap();
    client.session().set_token(Some(response.token)).unwrap();

    let user = client.profile().await.unwrap();
    assert_eq!(user.username, "alice");
}

#[tokio::test]
async fn product_filters_and_pagination_build_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/products"))
        .and(query_param("query", "usb"))
        .and(query_param("minPrice", "10"))
        .and(query_param("maxPrice", "99.5"))
        .and(query_param("categoryId", "3"))
        .and(query_param("inStock", "true"))
        .and(query_param("minRating", "4"))
        .and(query_param("page", "2"))
        .and(query_param("size", "20"))
        .respond_with(ResponseTemplate::new(200).set_body_json(empty_page()))
        .expect(1)
        .mount(&server)
        .await;

    let filters = ProductFilters {
        query: Some("usb".to_string()),
        min_price: Some(10.0),
        max_price: Some(99.5),
        brand_ids: vec![1, 2],
        category_id: Some(3),
        in_stock: Some(true),
        min_rating: Some(4.0),
    };
    let pageable = Pageable {
        page: Some(2),
        size: Some(20),
        sort: vec!["price,desc".to_string(), "title,asc".to_string()],
    };

    let client = client_for(&server);
    let page = client.products(&filters, &pageable).await.unwrap();
    assert!(page.empty);

    // Repeated parameters keep every occurrence
    let requests = server.received_requests().await.unwrap();
    let query = requests[0].url.query().unwrap().to_string();
    assert!(query.contains("brandId=1"));
    assert!(query.contains("brandId=2"));
    assert!(query.contains("sort=price%2Cdesc"));
    assert!(query.contains("sort=title%2Casc"));
}

#[tokio::test]
async fn users_listing_sends_pagination() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users"))
        .and(query_param("page", "0"))
        .and(query_param("size", "50"))
        .and(query_param("sort", "username,asc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "content": [profile_body()],
            "totalPages": 1,
            "totalElements": 1,
            "numberOfElements": 1,
            "number": 0,
            "size": 50,
            "first": true,
            "last": true,
            "empty": false
        })))
        .expect(1)
        .mount(&server)
        .await;

    let pageable = Pageable {
        page: Some(0),
        size: Some(50),
        sort: vec!["username,asc".to_string()],
    };
    let client = client_for(&server);
    let page = client.users(&pageable).await.unwrap();
    assert_eq!(page.content.len(), 1);
    assert_eq!(page.content[0].username, "alice");
}

#[tokio::test]
async fn delete_user_accepts_no_content_response() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/users/9"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    client.delete_user(9).await.unwrap();
}

#[tokio::test]
async fn create_order_sends_address_and_phone_as_query() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/orders"))
        .and(query_param("deliveryAddress", "Baker St 221b"))
        .and(query_param("contactPhone", "+100200300"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 12,
            "userId": 1,
            "status": "CREATED",
            "totalPrice": 59.98,
            "deliveryAddress": "Baker St 221b",
            "contactPhone": "+100200300",
            "createdAt": "2024-05-01T12:00:00Z",
            "items": [{
                "productId": 5,
                "productTitle": "USB cable",
                "quantity": 2,
                "priceAtPurchase": 29.99
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let order = client
        .create_order("Baker St 221b", Some("+100200300"))
        .await
        .unwrap();
    assert_eq!(order.id, 12);
    assert_eq!(order.status, OrderStatus::Created);
    assert_eq!(order.items.len(), 1);
}

#[tokio::test]
async fn pay_order_hits_pay_path() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/orders/12/pay"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 12,
            "userId": 1,
            "status": "PAID",
            "totalPrice": 59.98,
            "deliveryAddress": "Baker St 221b",
            "contactPhone": "",
            "createdAt": "2024-05-01T12:00:00Z",
            "items": []
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let order = client.pay_order(12).await.unwrap();
    assert_eq!(order.status, OrderStatus::Paid);
}

#[tokio::test]
async fn add_review_posts_json_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/reviews"))
        .and(body_json(json!({"productId": 5, "rating": 4, "comment": "nice"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 3,
            "userId": 1,
            "username": "alice",
            "productId": 5,
            "rating": 4,
            "comment": "nice",
            "createdAt": "2024-05-01T12:00:00Z"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let review = NewReview {
        product_id: 5,
        rating: 4,
        comment: Some("nice".to_string()),
    };
    let client = client_for(&server);
    let posted = client.add_review(&review).await.unwrap();
    assert_eq!(posted.id, 3);
    assert_eq!(posted.username, "alice");
}

#[tokio::test]
async fn toggle_favorite_posts_to_product_path() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/favorites/5"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    client.toggle_favorite(5).await.unwrap();
}
