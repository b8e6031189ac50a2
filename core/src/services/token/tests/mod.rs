//! Token service test suites
