//! # GoodEats Core
//!
//! Domain layer of the GoodEats auth service: entities, the error
//! taxonomy, repository interfaces, and the token/auth services that
//! implement the credential lifecycle (issuance, verification, refresh
//! rotation and session revocation).

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;
