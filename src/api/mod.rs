mod auth;
mod cart;
mod catalog;
pub mod client;
mod comparison;
mod favorites;
mod orders;
pub mod query;
mod reviews;
mod users;

pub use client::ApiClient;
pub use query::{Pageable, ProductFilters};
