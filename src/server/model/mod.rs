//! Server-side domain models and parameter types.
//!
//! This module contains the domain models used by the service layer: the
//! account table consulted at login, the identity bound to a session, and the
//! whole configuration document together with the per-guild mutations applied
//! to it. Domain models are converted to DTOs at the controller boundary.

pub mod account;
pub mod ticket_config;
