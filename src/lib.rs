//! Client library for a remote e-commerce REST API: catalog, cart,
//! favorites, comparison, orders, reviews and accounts.
//!
//! [`ApiClient`] is the single HTTP entry point; every resource call is a
//! thin path/method/query builder on top of it. [`SessionManager`] owns the
//! bearer token: it persists it through a [`TokenStore`], attaches it to
//! protected calls, and clears it on sign-out, on a server-side rejection,
//! or automatically once the token outlives its TTL.
//!
//! ```no_run
//! use shopfront::{ApiClient, FilesystemTokenStore, SessionManager};
//!
//! #[tokio::main]
//! async fn main() -> shopfront::Result<()> {
//!     let session = SessionManager::new(FilesystemTokenStore::new());
//!     let client = ApiClient::new("http://localhost:8080/api/v1", session)?;
//!
//!     let page = client
//!         .products(&Default::default(), &Default::default())
//!         .await?;
//!     for product in &page.content {
//!         println!("{}: {}", product.id, product.title);
//!     }
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod session;
pub mod ui;

pub use api::{ApiClient, Pageable, ProductFilters};
pub use error::{Result, ShopError};
pub use session::{FilesystemTokenStore, SessionManager, TokenStore};
