//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Applying per-guild mutations to the configuration document
//! - **Orchestration**: Sequencing load, mutate and save under the store lock
//! - **Backend selection**: Dispatching account lookups to the configured backend

pub mod account;
pub mod ticket_config;

#[cfg(test)]
mod test;
