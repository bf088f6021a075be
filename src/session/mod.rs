mod filesystem;
mod storage;

pub use filesystem::{FilesystemTokenStore, TOKEN_TTL_MINUTES};
pub use storage::TokenStore;

use crate::error::Result;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::task::JoinHandle;

type ExpiryCallback = Arc<dyn Fn() + Send + Sync>;

/// Sole owner of the bearer token and its pending auto-clear timer.
///
/// Cloning is cheap and every clone shares the same token state, so a single
/// manager can be handed to the API client and kept by the caller at the same
/// time. A token set here is persisted through the [`TokenStore`] and cleared
/// again after [`TOKEN_TTL_MINUTES`], on explicit sign-out, or when the
/// server rejects it.
#[derive(Clone)]
pub struct SessionManager {
    inner: Arc<Mutex<Inner>>,
    store: Arc<dyn TokenStore>,
}

struct Inner {
    token: Option<String>,
    expiry_task: Option<JoinHandle<()>>,
    on_expire: Option<ExpiryCallback>,
    /// Bumped on every token change so a timer that fires late cannot clear
    /// a token it was not scheduled for.
    epoch: u64,
}

impl SessionManager {
    /// Restore any persisted token; the store discards stale records.
    pub fn new(store: impl TokenStore + 'static) -> Self {
        let token = store.load();
        Self {
            inner: Arc::new(Mutex::new(Inner {
                token,
                expiry_task: None,
                on_expire: None,
                epoch: 0,
            })),
            store: Arc::new(store),
        }
    }

    /// Register the observer invoked after the auto-clear timer has dropped
    /// the token. Navigation or prompting is the caller's business.
    pub fn on_expire(&self, callback: impl Fn() + Send + Sync + 'static) {
        self.inner.lock().unwrap().on_expire = Some(Arc::new(callback));
    }

    pub fn token(&self) -> Option<String> {
        self.inner.lock().unwrap().token.clone()
    }

    /// Store or clear the session token.
    ///
    /// Storing persists the token and (re)schedules the auto-clear timer;
    /// clearing removes the persisted record. Either way the previous timer
    /// is cancelled first, so at most one is ever pending.
    pub fn set_token(&self, token: Option<String>) -> Result<()> {
        let mut inner = self.inner.lock().unwrap();
        inner.epoch += 1;
        if let Some(task) = inner.expiry_task.take() {
            task.abort();
        }
        match token {
            Some(token) => {
                // In-memory state changes even when persistence fails
                inner.token = Some(token.clone());
                self.store.save(&token)?;
                inner.expiry_task = self.schedule_expiry(inner.epoch);
            }
            None => {
                inner.token = None;
                self.store.clear()?;
            }
        }
        Ok(())
    }

    /// Outside an async runtime no timer is scheduled; the store's saved-at
    /// check still bounds the token's lifetime across restarts.
    fn schedule_expiry(&self, epoch: u64) -> Option<JoinHandle<()>> {
        let runtime = tokio::runtime::Handle::try_current().ok()?;
        let manager = self.clone();
        Some(runtime.spawn(async move {
            tokio::time::sleep(Duration::from_secs(TOKEN_TTL_MINUTES as u64 * 60)).await;
            manager.expire(epoch);
        }))
    }

    fn expire(&self, epoch: u64) {
        let callback = {
            let mut inner = self.inner.lock().unwrap();
            if inner.epoch != epoch {
                return;
            }
            inner.expiry_task = None;
            inner.token = None;
            inner.on_expire.clone()
        };
        let _ = self.store.clear();
        if let Some(callback) = callback {
            callback();
        }
    }
}
