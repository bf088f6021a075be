use super::storage::TokenStore;
use crate::error::Result;
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Tokens older than this are treated as expired and never loaded.
pub const TOKEN_TTL_MINUTES: i64 = 25;

const TOKEN_FILE: &str = "token.json";

#[derive(Serialize, Deserialize)]
struct StoredToken {
    token: String,
    saved_at: DateTime<Local>,
}

/// Persists the session token as a JSON record in the user cache directory,
/// so a signed-in session survives process restarts.
pub struct FilesystemTokenStore {
    dir: Option<PathBuf>,
}

impl FilesystemTokenStore {
    pub fn new() -> Self {
        Self { dir: None }
    }

    /// Store the token under an explicit directory instead of the user cache.
    pub fn at(dir: impl Into<PathBuf>) -> Self {
        Self { dir: Some(dir.into()) }
    }

    fn cache_dir(&self) -> PathBuf {
        let dir = match &self.dir {
            Some(dir) => dir.clone(),
            None => {
                let home = env::var("HOME").expect("HOME environment variable not set");
                Path::new(&home).join(".cache").join("shopfront")
            }
        };
        if !dir.exists() {
            fs::create_dir_all(&dir).expect("Failed to create cache directory");
        }
        dir
    }

    fn token_file(&self) -> PathBuf {
        self.cache_dir().join(TOKEN_FILE)
    }
}

impl TokenStore for FilesystemTokenStore {
    fn load(&self) -> Option<String> {
        let path = self.token_file();
        let content = fs::read_to_string(&path).ok()?;
        let stored: StoredToken = serde_json::from_str(&content).ok()?;

        let age_minutes = Local::now().signed_duration_since(stored.saved_at).num_minutes();
        if age_minutes.abs() < TOKEN_TTL_MINUTES {
            Some(stored.token)
        } else {
            // Clean up the stale record
            let _ = fs::remove_file(&path);
            None
        }
    }

    fn save(&self, token: &str) -> Result<()> {
        let record = StoredToken {
            token: token.to_string(),
            saved_at: Local::now(),
        };
        let content = serde_json::to_string_pretty(&record)?;
        fs::write(self.token_file(), content)?;
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        let path = self.token_file();
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }
}

impl Default for FilesystemTokenStore {
    fn default() -> Self {
        Self::new()
    }
}
