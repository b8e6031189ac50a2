//! Auth service test suites

mod service_tests;
