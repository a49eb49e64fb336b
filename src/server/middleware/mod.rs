//! Session access and the guild identity gate.

pub mod auth;
pub mod session;

#[cfg(test)]
mod test;
