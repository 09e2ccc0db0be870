//! Environment-driven tuning shared by test suites running locally and in CI.

pub mod property_test_profile;
