//! Web panel accounts and the identity they grant to a session.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{model::auth::SessionInfoDto, server::util::parse::deserialize_string_or_number};

/// A panel login bound to exactly one guild.
///
/// Accounts are provisioned by an external process and only ever read here.
/// Passwords are compared as plaintext.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    #[serde(deserialize_with = "deserialize_string_or_number")]
    pub guild_id: String,
    pub username: String,
    pub password: String,
    #[serde(default)]
    pub server_name: Option<String>,
}

/// Account table keyed by an opaque account id.
///
/// Built from the raw JSON object so that one malformed entry only removes that
/// entry instead of the whole table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AccountTable {
    accounts: Vec<(String, Account)>,
}

impl AccountTable {
    /// Parses an account table from raw JSON bytes.
    ///
    /// # Arguments
    /// - `bytes` - JSON object mapping account ids to account records
    ///
    /// # Returns
    /// - `Ok(AccountTable)` - Table containing every well-formed entry
    /// - `Err(serde_json::Error)` - Input is not a JSON object
    pub fn from_slice(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        let raw: Map<String, Value> = serde_json::from_slice(bytes)?;
        Ok(Self::from_map(raw))
    }

    /// Builds the table from an already parsed JSON object, skipping entries that
    /// do not deserialize into an [`Account`] or are not bound to a guild.
    pub fn from_map(raw: Map<String, Value>) -> Self {
        let accounts = raw
            .into_iter()
            .filter_map(|(id, value)| match serde_json::from_value::<Account>(value) {
                Ok(account) if account.guild_id.is_empty() => {
                    tracing::warn!(account_id = %id, "Skipping account without a guild id");
                    None
                }
                Ok(account) => Some((id, account)),
                Err(e) => {
                    tracing::warn!(account_id = %id, "Skipping malformed account entry: {}", e);
                    None
                }
            })
            .collect();

        Self { accounts }
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// Finds the first account whose username and password both match exactly.
    ///
    /// No hashing or normalization is applied to either value.
    pub fn find(&self, username: &str, password: &str) -> Option<&Account> {
        self.accounts
            .iter()
            .map(|(_, account)| account)
            .find(|account| account.username == username && account.password == password)
    }
}

/// Identity stored in the session after a successful login.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionIdentity {
    pub guild_id: String,
    pub username: String,
    pub server_name: Option<String>,
}

impl SessionIdentity {
    pub fn into_dto(self) -> SessionInfoDto {
        SessionInfoDto {
            guild_id: self.guild_id,
            username: self.username,
            server_name: self.server_name,
        }
    }
}

impl From<&Account> for SessionIdentity {
    fn from(account: &Account) -> Self {
        Self {
            guild_id: account.guild_id.clone(),
            username: account.username.clone(),
            server_name: account.server_name.clone(),
        }
    }
}
