//! File-backed persistence.
//!
//! Repositories here own nothing but a path: every call goes to disk, so the
//! file stays the single source of truth between requests and the external bot
//! can read it at any time.

pub mod account;
pub mod config_document;
