//! Test fixtures providing reusable JSON test data.
//!
//! Fixtures only build values; seeding them to disk is done through
//! `TestBuilder`.

pub mod account;
pub mod ticket_config;
