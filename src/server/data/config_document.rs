use std::io::ErrorKind;
use std::path::Path;
use tokio::io::AsyncWriteExt;

use crate::server::{error::store::StoreError, model::ticket_config::ConfigDocument};

pub struct ConfigDocumentRepository<'a> {
    path: &'a Path,
}

impl<'a> ConfigDocumentRepository<'a> {
    pub fn new(path: &'a Path) -> Self {
        Self { path }
    }

    /// Loads the whole configuration document from disk.
    ///
    /// # Returns
    /// - `Ok(ConfigDocument)` - Parsed document, or an empty one if the file does not exist
    /// - `Err(StoreError::Read)` - The file exists but could not be read
    /// - `Err(StoreError::Parse)` - The file is not a valid configuration document
    pub async fn load(&self) -> Result<ConfigDocument, StoreError> {
        let bytes = match tokio::fs::read(self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(
                    "Configuration document {} not found, starting empty",
                    self.path.display()
                );
                return Ok(ConfigDocument::default());
            }
            Err(source) => {
                return Err(StoreError::Read {
                    path: self.path.to_path_buf(),
                    source,
                })
            }
        };

        serde_json::from_slice(&bytes).map_err(|source| StoreError::Parse {
            path: self.path.to_path_buf(),
            source,
        })
    }

    /// Writes the whole document back to disk.
    ///
    /// The document is written to a sibling `.tmp` file, synced, and renamed over
    /// the target so readers only ever see the previous or the new document.
    ///
    /// # Arguments
    /// - `document` - The complete document to persist
    ///
    /// # Returns
    /// - `Ok(())` - Document replaced on disk
    /// - `Err(StoreError::Serialize)` - Document could not be serialized
    /// - `Err(StoreError::Write)` - Creating, writing, syncing or renaming the file failed
    pub async fn save(&self, document: &ConfigDocument) -> Result<(), StoreError> {
        let mut content = serde_json::to_vec_pretty(document).map_err(StoreError::Serialize)?;
        content.push(b'\n');

        let write_err = |source| StoreError::Write {
            path: self.path.to_path_buf(),
            source,
        };

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await.map_err(write_err)?;
        }

        let tmp_path = self.path.with_extension("json.tmp");
        {
            let mut file = tokio::fs::File::create(&tmp_path)
                .await
                .map_err(write_err)?;
            file.write_all(&content).await.map_err(write_err)?;
            file.sync_all().await.map_err(write_err)?;
        }
        tokio::fs::rename(&tmp_path, self.path)
            .await
            .map_err(write_err)?;

        Ok(())
    }
}
