//! Utility modules for common functionality.
//!
//! This module provides utility functions and types that are used across the crate:
//!
//! - logging: Error context, trace IDs and subscriber setup
//! - tests: Test utilities

pub mod logging;
pub mod tests;
