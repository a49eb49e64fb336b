//! Wire models shared by the HTTP API and the on-disk configuration document.
//!
//! Request and response DTOs live here together with the guild configuration
//! shape itself, since the external bot reads the exact same JSON that the API
//! returns.

pub mod api;
pub mod auth;
pub mod ticket_config;
