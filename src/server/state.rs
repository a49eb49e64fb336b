//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each request
//! handler through Axum's state extraction. It holds:
//! - The guild configuration store mediating all access to the document file
//! - The account resolver selected by configuration
//! - The directory holding the login and panel pages

use std::path::PathBuf;

use crate::server::service::{account::AccountResolver, ticket_config::GuildConfigStore};

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone:
/// - `GuildConfigStore` shares its path and lock through `Arc`
/// - `AccountResolver` holds a path, or a `reqwest::Client` which uses an `Arc` internally
#[derive(Clone)]
pub struct AppState {
    /// Store for the per-guild ticket configuration document.
    pub config_store: GuildConfigStore,

    /// Account lookup used by the login endpoint only.
    pub account_resolver: AccountResolver,

    /// Directory containing `index.html` and `success.html`.
    pub views_dir: PathBuf,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `config_store` - Store for the configuration document
    /// - `account_resolver` - Configured account backend
    /// - `views_dir` - Directory of the HTML pages
    pub fn new(
        config_store: GuildConfigStore,
        account_resolver: AccountResolver,
        views_dir: PathBuf,
    ) -> Self {
        Self {
            config_store,
            account_resolver,
            views_dir,
        }
    }
}
