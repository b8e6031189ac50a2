//! # GoodEats Infrastructure
//!
//! Concrete implementations of the core repository interfaces: the
//! Redis-backed session revocation store and an in-process user record
//! store for development and testing.

pub mod cache;
pub mod users;

pub use cache::RedisSessionStore;
pub use users::InMemoryUserRepository;
