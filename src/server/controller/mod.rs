//! HTTP request handlers.
//!
//! Controllers check the session gate, convert request DTOs into domain values,
//! call the service layer and convert the result back into response DTOs.

pub mod auth;
pub mod page;
pub mod ticket_config;

#[cfg(test)]
mod test;
