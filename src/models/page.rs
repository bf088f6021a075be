use serde::{Deserialize, Serialize};

/// Pagination envelope returned by every list endpoint.
///
/// `number` is the zero-based index of the current page.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    pub total_pages: u32,
    pub total_elements: u64,
    pub number_of_elements: u32,
    pub number: u32,
    pub size: u32,
    pub first: bool,
    pub last: bool,
    pub empty: bool,
}

/// Standard error body the API attaches to non-2xx responses.
///
/// Only `message` is consumed; the other fields are not always present.
#[derive(Deserialize, Debug, Clone)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub status: u16,
    pub message: String,
    #[serde(default)]
    pub timestamp: String,
}
