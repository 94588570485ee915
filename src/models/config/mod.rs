//! Configuration loading and validation.
//!
//! This module provides the [`ConfigLoader`] trait and the evaluator settings that
//! implement it.

#![allow(clippy::result_large_err)]

use std::path::Path;

mod error;
mod evaluator_config;

pub use error::ConfigError;
pub use evaluator_config::{EvaluatorConfig, EPSILON_ENV_VAR};

/// Common interface for loading configuration files
pub trait ConfigLoader: Sized {
	/// Load configuration from a specific file path
	fn load_from_path(path: &Path) -> Result<Self, ConfigError>;

	/// Load configuration from environment variables
	///
	/// A `.env` file in the working directory is honored when present.
	fn load_from_env() -> Result<Self, ConfigError>;

	/// Validate the configuration
	///
	/// Returns Ok(()) if valid, or an error describing the offending setting.
	fn validate(&self) -> Result<(), ConfigError>;

	/// Check if a file is a JSON file based on extension
	fn is_json_file(path: &Path) -> bool {
		path.extension()
			.map(|ext| ext.to_string_lossy().to_lowercase() == "json")
			.unwrap_or(false)
	}
}
