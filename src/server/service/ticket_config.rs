//! Guild configuration store.
//!
//! Every operation loads the whole document from disk, ensures the acting
//! guild's entry exists, and for mutations writes the whole document back.
//! Nothing is cached between calls.
//!
//! All load-mutate-save cycles of one process go through a single mutex, so two
//! admins saving at the same time (even for different guilds) cannot overwrite
//! each other's change with a stale snapshot. Writers in other processes are not
//! coordinated; the last completed write wins.

use serde_json::Value;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::{
    model::ticket_config::{Button, GuildConfig},
    server::{
        data::config_document::ConfigDocumentRepository,
        error::store::StoreError,
        model::ticket_config::{ButtonUpsert, Surface},
    },
};

#[derive(Clone)]
pub struct GuildConfigStore {
    path: Arc<PathBuf>,
    /// Serializes document access within the process.
    lock: Arc<Mutex<()>>,
}

impl GuildConfigStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Arc::new(path.into()),
            lock: Arc::new(Mutex::new(())),
        }
    }

    /// Gets the guild's configuration.
    ///
    /// A guild without an entry gets an empty configuration. Reading does not
    /// write that entry to disk.
    ///
    /// # Arguments
    /// - `guild_id` - Guild bound to the caller's session
    ///
    /// # Returns
    /// - `Ok(GuildConfig)` - Current configuration for the guild
    /// - `Err(StoreError)` - Document could not be read or parsed
    pub async fn get_config(&self, guild_id: &str) -> Result<GuildConfig, StoreError> {
        let _guard = self.lock.lock().await;

        let mut document = ConfigDocumentRepository::new(&self.path).load().await?;

        Ok(document.ensure_guild(guild_id).clone())
    }

    /// Inserts a button, or replaces the existing button with the same id while
    /// keeping its position.
    ///
    /// # Returns
    /// - `Ok(GuildConfig)` - Full configuration after the write
    /// - `Err(StoreError)` - Document could not be loaded or persisted
    pub async fn upsert_button(
        &self,
        guild_id: &str,
        button: Button,
    ) -> Result<GuildConfig, StoreError> {
        let button_id = button.id.clone();

        self.update(guild_id, |config| match config.upsert_button(button) {
            ButtonUpsert::Replaced(position) => {
                tracing::info!(guild_id, button_id = %button_id, position, "Replaced ticket button")
            }
            ButtonUpsert::Appended => {
                tracing::info!(guild_id, button_id = %button_id, "Added ticket button")
            }
        })
        .await
    }

    /// Removes every button with the given id. Removing an absent id is not an error.
    pub async fn delete_button(
        &self,
        guild_id: &str,
        button_id: &str,
    ) -> Result<GuildConfig, StoreError> {
        self.update(guild_id, |config| {
            let removed = config.remove_button(button_id);
            tracing::info!(guild_id, button_id, removed, "Deleted ticket button");
        })
        .await
    }

    /// Replaces one surface (`embed`, `notice`, `title` or `gif`) wholesale.
    pub async fn set_surface(
        &self,
        guild_id: &str,
        surface: Surface,
        value: Value,
    ) -> Result<GuildConfig, StoreError> {
        self.update(guild_id, |config| {
            config.set_surface(surface, value);
            tracing::info!(guild_id, surface = %surface, "Replaced ticket surface");
        })
        .await
    }

    /// Runs one load-mutate-save cycle for a guild under the store lock.
    async fn update<F>(&self, guild_id: &str, mutate: F) -> Result<GuildConfig, StoreError>
    where
        F: FnOnce(&mut GuildConfig),
    {
        let _guard = self.lock.lock().await;
        let repo = ConfigDocumentRepository::new(&self.path);

        let mut document = repo.load().await?;
        let config = document.ensure_guild(guild_id);
        mutate(config);
        let updated = config.clone();

        repo.save(&document).await?;

        Ok(updated)
    }
}
