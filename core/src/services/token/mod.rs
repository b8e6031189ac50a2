//! Token service module for the credential lifecycle
//!
//! This module handles:
//! - RS256 key loading at process start
//! - Access and refresh token issuance
//! - Access token verification
//! - Refresh token verification against the session store

mod config;
mod key_manager;
mod service;

#[cfg(test)]
mod tests;

pub use config::TokenConfig;
pub use key_manager::SigningKeys;
pub use service::TokenService;
