//! Test Utilities Crate
//!
//! Provides shared test fixtures and builders for the Open Billing Core
//! test suite.
//!
//! # Modules
//!
//! - `fixtures`: Pre-built test data for common entities
//! - `builders`: Builder patterns for test data construction

pub mod builders;
pub mod fixtures;

pub use builders::*;
pub use fixtures::*;
