use serde_json::{Map, Value};
use std::io::ErrorKind;
use std::path::Path;
use std::time::Duration;

use crate::server::{error::account::AccountSourceError, model::account::AccountTable};

/// Account table stored as a JSON file on local disk.
pub struct AccountFileRepository<'a> {
    path: &'a Path,
}

impl<'a> AccountFileRepository<'a> {
    pub fn new(path: &'a Path) -> Self {
        Self { path }
    }

    /// Reads the full account table.
    ///
    /// # Returns
    /// - `Ok(AccountTable)` - Parsed table, or an empty table if the file does not exist
    /// - `Err(AccountSourceError::Read)` - The file exists but could not be read
    /// - `Err(AccountSourceError::Parse)` - The file is not a JSON object
    pub async fn load_table(&self) -> Result<AccountTable, AccountSourceError> {
        let bytes = match tokio::fs::read(self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(AccountTable::default()),
            Err(source) => {
                return Err(AccountSourceError::Read {
                    path: self.path.to_path_buf(),
                    source,
                })
            }
        };

        AccountTable::from_slice(&bytes).map_err(|source| AccountSourceError::Parse {
            path: self.path.to_path_buf(),
            source,
        })
    }
}

/// Account table served by a remote account service.
pub struct AccountServiceRepository<'a> {
    http_client: &'a reqwest::Client,
    url: &'a str,
    timeout: Duration,
}

impl<'a> AccountServiceRepository<'a> {
    pub fn new(http_client: &'a reqwest::Client, url: &'a str, timeout: Duration) -> Self {
        Self {
            http_client,
            url,
            timeout,
        }
    }

    /// Fetches the full account table with a single bounded GET request.
    ///
    /// # Returns
    /// - `Ok(AccountTable)` - Parsed table from a 2xx response
    /// - `Err(AccountSourceError::Request)` - Connection failed, timed out, or body was not a JSON object
    /// - `Err(AccountSourceError::Status)` - Service answered with a non-success status
    pub async fn load_table(&self) -> Result<AccountTable, AccountSourceError> {
        let request_err = |source| AccountSourceError::Request {
            url: self.url.to_string(),
            source,
        };

        let response = self
            .http_client
            .get(self.url)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(request_err)?;

        let status = response.status();
        if !status.is_success() {
            return Err(AccountSourceError::Status {
                url: self.url.to_string(),
                status,
            });
        }

        let raw: Map<String, Value> = response.json().await.map_err(request_err)?;

        Ok(AccountTable::from_map(raw))
    }
}
