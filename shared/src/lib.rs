//! # GoodEats Shared
//!
//! Configuration types shared across the GoodEats auth service crates.
//! Everything here is loaded once at startup from environment variables
//! and passed down into the other layers.

pub mod config;

pub use config::{CacheConfig, JwtConfig, ServerConfig};
