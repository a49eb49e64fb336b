use serde_json::{Map, Value};

use crate::{context::TestContext, error::TestError};

const LOGIN_PAGE_HTML: &str = "<!doctype html><title>Login</title><h1>Ticket panel login</h1>";
const PANEL_PAGE_HTML: &str = "<!doctype html><title>Panel</title><h1>Ticket panel</h1>";
const PUBLIC_STYLESHEET: &str = "body { font-family: sans-serif; }\n";

/// Builder for creating test contexts with seeded files.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::{builder::TestBuilder, fixture};
///
/// let test = TestBuilder::new()
///     .with_account("a1", fixture::account::entry("bob", "x", "G1"))
///     .with_config_document(fixture::ticket_config::document("G1", fixture::ticket_config::empty_guild()))
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// Account table written to `data/webaccounts.json`; not written when `None`.
    accounts: Option<Map<String, Value>>,

    /// Raw configuration document written to `data/ticket_config.json`; not
    /// written when `None`. Kept raw so malformed documents can be seeded.
    config_document: Option<String>,
}

impl TestBuilder {
    /// Creates a new test builder with no seeded files.
    pub fn new() -> Self {
        Self {
            accounts: None,
            config_document: None,
        }
    }

    /// Seeds the account table with the entries of a JSON object, replacing any
    /// previously added accounts. Non-object values seed an empty table.
    pub fn with_accounts(mut self, accounts: Value) -> Self {
        self.accounts = Some(match accounts {
            Value::Object(map) => map,
            _ => Map::new(),
        });
        self
    }

    /// Adds a single account entry under the given account id.
    ///
    /// # Arguments
    /// - `account_id` - Opaque key of the entry in the table
    /// - `account` - Account record, usually from `fixture::account::entry`
    pub fn with_account(mut self, account_id: &str, account: Value) -> Self {
        self.accounts
            .get_or_insert_with(Map::new)
            .insert(account_id.to_string(), account);
        self
    }

    /// Seeds the configuration document with a JSON value.
    pub fn with_config_document(mut self, document: Value) -> Self {
        self.config_document = Some(document.to_string());
        self
    }

    /// Seeds the configuration document with raw text, e.g. malformed JSON.
    pub fn with_raw_config_document(mut self, raw: impl Into<String>) -> Self {
        self.config_document = Some(raw.into());
        self
    }

    /// Creates the temporary directory layout and writes the seeded files.
    ///
    /// `views/` always receives a login and a panel page, and `public/` a
    /// stylesheet, so page routes can be exercised.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Environment ready for use
    /// - `Err(TestError)` - Failed to create directories or write files
    pub async fn build(self) -> Result<TestContext, TestError> {
        let context = TestContext::new(tempfile::tempdir()?);

        tokio::fs::create_dir_all(context.data_dir()).await?;
        tokio::fs::create_dir_all(context.views_dir()).await?;
        tokio::fs::create_dir_all(context.public_dir()).await?;

        tokio::fs::write(context.views_dir().join("index.html"), LOGIN_PAGE_HTML).await?;
        tokio::fs::write(context.views_dir().join("success.html"), PANEL_PAGE_HTML).await?;
        tokio::fs::write(context.public_dir().join("app.css"), PUBLIC_STYLESHEET).await?;

        if let Some(accounts) = self.accounts {
            let raw = serde_json::to_string_pretty(&Value::Object(accounts))?;
            tokio::fs::write(context.accounts_path(), raw).await?;
        }

        if let Some(raw) = self.config_document {
            tokio::fs::write(context.config_path(), raw).await?;
        }

        Ok(context)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
