use crate::error::Result;

/// Trait for durable token storage backends
pub trait TokenStore: Send + Sync {
    /// Load the persisted token if one exists and is still within its TTL
    fn load(&self) -> Option<String>;

    /// Persist a token together with the time it was stored
    fn save(&self, token: &str) -> Result<()>;

    /// Remove any persisted token
    fn clear(&self) -> Result<()>;
}
