//! Error translation between the domain layer and HTTP.

pub mod error;

pub use error::{handle_domain_error, validation_message};
