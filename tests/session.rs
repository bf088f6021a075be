use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use shopfront::session::{SessionManager, TokenStore, TOKEN_TTL_MINUTES};

#[derive(Clone, Default)]
struct MemoryTokenStore {
    token: Arc<Mutex<Option<String>>>,
}

impl MemoryTokenStore {
    fn persisted(&self) -> Option<String> {
        self.token.lock().unwrap().clone()
    }
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

struct FailingTokenStore;

impl TokenStore for FailingTokenStore {
    fn load(&self) -> Option<String> {
        None
    }

    fn save(&self, _token: &str) -> shopfront::Result<()> {
        Err("disk full".into())
    }

    fn clear(&self) -> shopfront::Result<()> {
        Ok(())
    }
}

fn past_ttl() -> Duration {
    Duration::from_secs(TOKEN_TTL_MINUTES as u64 * 60 + 1)
}

#[test]
fn token_round_trip() {
    let session = SessionManager::new(MemoryTokenStore::default());
    assert!(session.token().is_none());

    session.set_token(Some("abc123".to_string())).unwrap();
    assert_eq!(session.token().as_deref(), Some("abc123"));

    session.set_token(None).unwrap();
    assert!(session.token().is_none());
}

#[test]
fn set_token_persists_through_store() {
    let store = MemoryTokenStore::default();
    let session = SessionManager::new(store.clone());

    session.set_token(Some("abc123".to_string())).unwrap();
    assert_eq!(store.persisted().as_deref(), Some("abc123"));

    session.set_token(None).unwrap();
    assert!(store.persisted().is_none());
}

#[test]
fn store_failure_still_updates_in_memory_token() {
    let session = SessionManager::new(FailingTokenStore);

    let err = session.set_token(Some("abc123".to_string())).unwrap_err();
    assert_eq!(err.to_string(), "disk full");
    // The caller's token is adopted even though persistence failed
    assert_eq!(session.token().as_deref(), Some("abc123"));
}

#[test]
fn restores_token_from_store() {
    let store = MemoryTokenStore::default();
    store.save("persisted").unwrap();

    let session = SessionManager::new(store);
    assert_eq!(session.token().as_deref(), Some("persisted"));
}

#[tokio::test(start_paused = true)]
async fn timer_expiry_clears_token_and_notifies_once() {
    let store = MemoryTokenStore::default();
    let session = SessionManager::new(store.clone());
    let fired = Arc::new(AtomicUsize::new(0));
    let counter = fired.clone();
    session.on_expire(move || {
        counter.fetch_add(1, Ordering::SeqCst);
    });

    session.set_token(Some("abc123".to_string())).unwrap();
    tokio::time::sleep(past_ttl()).await;

    assert_eq!(fired.load(Ordering::SeqCst), 1);
    assert!(session.token().is_none());
    assert!(store.persisted().is_none());
}

#[tokio::test(start_paused = true)]
async fn replacing_token_leaves_single_pending_timer() {
    let session = SessionManager::new(MemoryTokenStore::default());
    let fired = Arc::new(AtomicUsize::new(0));
    let counter = fired.clone();
    session.on_expire(move || {
        counter.fetch_add(1, Ordering::SeqCst);
    });

    session.set_token(Some("first".to_string())).unwrap();
    session.set_token(Some("second".to_string())).unwrap();
    assert_eq!(session.token().as_deref(), Some("second"));

    tokio::time::sleep(past_ttl()).await;

    // Only the timer for the second token may fire
    assert_eq!(fired.load(Ordering::SeqCst), 1);
    assert!(session.token().is_none());
}

#[tokio::test(start_paused = true)]
async fn clearing_token_cancels_pending_timer() {
    let session = SessionManager::new(MemoryTokenStore::default());
    let fired = Arc::new(AtomicUsize::new(0));
    let counter = fired.clone();
    session.on_expire(move || {
        counter.fetch_add(1, Ordering::SeqCst);
    });

    session.set_token(Some("abc123".to_string())).unwrap();
    session.set_token(None).unwrap();

    tokio::time::sleep(past_ttl()).await;

    assert_eq!(fired.load(Ordering::SeqCst), 0);
    assert!(session.token().is_none());
}
