//! Session revocation store interface.

pub mod mock;
mod r#trait;

pub use mock::MockSessionStore;
pub use r#trait::SessionStore;
