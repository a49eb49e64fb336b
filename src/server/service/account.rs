//! Account resolution for the login endpoint.
//!
//! The backend is picked once at startup from configuration. Whatever the
//! backend, a lookup never fails towards the caller: an unreadable file, an
//! unreachable service, a timeout or a malformed table are logged and treated
//! as "no matching account".

use std::path::PathBuf;
use std::time::Duration;

use crate::server::{
    config::AccountSource,
    data::account::{AccountFileRepository, AccountServiceRepository},
    model::account::{Account, AccountTable},
};

#[derive(Clone)]
pub enum AccountResolver {
    /// Account table in a local JSON file.
    File { path: PathBuf },
    /// Account table fetched from a remote account service.
    Remote {
        http_client: reqwest::Client,
        url: String,
        timeout: Duration,
    },
}

impl AccountResolver {
    /// Builds the resolver selected by configuration.
    ///
    /// # Arguments
    /// - `source` - Configured account backend
    /// - `http_client` - Shared HTTP client, only used by the remote backend
    pub fn from_source(source: &AccountSource, http_client: reqwest::Client) -> Self {
        match source {
            AccountSource::File(path) => Self::File { path: path.clone() },
            AccountSource::Remote { url, timeout } => Self::Remote {
                http_client,
                url: url.clone(),
                timeout: *timeout,
            },
        }
    }

    /// Finds the account matching the given credentials.
    ///
    /// Credentials are compared as exact plaintext strings.
    ///
    /// # Arguments
    /// - `username` - Submitted username
    /// - `password` - Submitted password
    ///
    /// # Returns
    /// - `Some(Account)` - First account whose username and password both match
    /// - `None` - No match, or the backend was unavailable
    pub async fn resolve(&self, username: &str, password: &str) -> Option<Account> {
        self.load_accounts().await.find(username, password).cloned()
    }

    /// Loads the full account table, degrading to an empty table on any failure.
    pub async fn load_accounts(&self) -> AccountTable {
        let result = match self {
            Self::File { path } => AccountFileRepository::new(path).load_table().await,
            Self::Remote {
                http_client,
                url,
                timeout,
            } => {
                AccountServiceRepository::new(http_client, url, *timeout)
                    .load_table()
                    .await
            }
        };

        match result {
            Ok(table) if table.is_empty() => {
                tracing::warn!("No panel accounts configured");
                table
            }
            Ok(table) => {
                tracing::debug!("Loaded {} panel accounts", table.len());
                table
            }
            Err(e) => {
                tracing::error!("Account lookup unavailable, treating as empty table: {}", e);
                AccountTable::default()
            }
        }
    }
}
