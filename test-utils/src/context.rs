use serde_json::Value;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::TempDir;
use time::Duration;
use tower_sessions::{Expiry, MemoryStore, Session};

use crate::error::TestError;

/// File name of the account table inside `data/`.
pub const ACCOUNTS_FILE: &str = "webaccounts.json";
/// File name of the configuration document inside `data/`.
pub const CONFIG_FILE: &str = "ticket_config.json";

/// Test environment rooted in a temporary directory.
///
/// The directory and everything in it is deleted when the context is dropped,
/// so keep the context alive for as long as the test touches the files.
pub struct TestContext {
    /// Temporary root directory.
    dir: TempDir,

    /// Optional session instance for session handling.
    ///
    /// Initialized lazily when `session()` is first called, backed by its own
    /// in-memory session store.
    pub session: Option<Session>,
}

impl TestContext {
    /// Creates a context around an already prepared temporary directory.
    pub fn new(dir: TempDir) -> Self {
        Self { dir, session: None }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn data_dir(&self) -> PathBuf {
        self.root().join("data")
    }

    /// Path of the account table, whether or not it was seeded.
    pub fn accounts_path(&self) -> PathBuf {
        self.data_dir().join(ACCOUNTS_FILE)
    }

    /// Path of the configuration document, whether or not it was seeded.
    pub fn config_path(&self) -> PathBuf {
        self.data_dir().join(CONFIG_FILE)
    }

    pub fn views_dir(&self) -> PathBuf {
        self.root().join("views")
    }

    pub fn public_dir(&self) -> PathBuf {
        self.root().join("public")
    }

    /// Reads the configuration document back as raw text.
    ///
    /// # Returns
    /// - `Ok(String)` - File contents
    /// - `Err(TestError::Io)` - File does not exist or cannot be read
    pub async fn read_config_raw(&self) -> Result<String, TestError> {
        Ok(tokio::fs::read_to_string(self.config_path()).await?)
    }

    /// Reads the configuration document back as JSON.
    pub async fn read_config_document(&self) -> Result<Value, TestError> {
        let raw = self.read_config_raw().await?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Whether the configuration document exists on disk.
    pub fn config_exists(&self) -> bool {
        self.config_path().exists()
    }

    /// Gets or creates the test session instance.
    ///
    /// The session is backed by an in-memory store and persists for the lifetime
    /// of this test context; subsequent calls return the same session.
    pub fn session(&mut self) -> &Session {
        self.session.get_or_insert_with(|| {
            Session::new(
                None,
                Arc::new(MemoryStore::default()),
                Some(Expiry::OnInactivity(Duration::days(7))),
            )
        })
    }
}
