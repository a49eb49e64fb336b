//! Server-side API backend and business logic.
//!
//! This module contains the complete backend of the ticket panel: the HTTP
//! endpoints, the session gate, the account resolver and the guild
//! configuration store.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers, session gate, and DTO conversion
//! - **Service Layer** (`service/`) - Account resolution and the guild configuration store
//! - **Data Layer** (`data/`) - Reading and writing the JSON files and the account service
//! - **Model Layer** (`model/`) - Configuration document, accounts and session identity
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Typed session access and the authentication guard
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (store, account resolver, views)
//! - **Startup** (`startup`) - Logging, HTTP client, sessions and state initialization
//! - **Router** (`router`) - Axum route configuration and API documentation
//!
//! # Request Flow
//!
//! 1. **Router** receives HTTP request and routes to the appropriate controller
//! 2. **Session layer** loads the session record referenced by the cookie
//! 3. **Controller** requires a guild identity, validates the body, calls the service
//! 4. **Service** loads the document, mutates the guild entry, writes the document back
//! 5. **Controller** returns the guild's full configuration

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
