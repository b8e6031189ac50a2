//! User record store implementations.

mod memory;

pub use memory::InMemoryUserRepository;
