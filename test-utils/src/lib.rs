//! Ticket Panel Test Utils
//!
//! Provides shared testing utilities for the ticket panel. Every test gets its
//! own temporary directory laid out like a deployment (`data/`, `views/`,
//! `public/`), optionally seeded with an account table and a configuration
//! document, plus an in-memory session.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for seeding the test environment
//! - **TestContext**: The built environment; paths, file helpers and session
//! - **TestError**: Error types that can occur during test setup
//! - **fixture**: Ready-made JSON accounts, buttons and documents
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, fixture};
//!
//! #[tokio::test]
//! async fn test_login() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_accounts(fixture::account::table())
//!         .build()
//!         .await?;
//!
//!     let accounts_path = test.accounts_path();
//!     // Point the code under test at the seeded files...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod fixture;
