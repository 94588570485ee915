//! Test helper utilities
//!
//! This module contains test helper utilities for the crate.
//!
//! - `builders`: Test helper utilities for creating argument resolvers

pub mod builders {
	pub mod arguments;
}

pub use builders::*;
