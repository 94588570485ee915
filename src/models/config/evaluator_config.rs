//! Evaluator settings loading and validation.
//!
//! The only setting is the numeric tolerance (epsilon) used by equality and ordering
//! operators. It can come from a JSON file (`{"epsilon": 1e-9}`) or from the
//! `CONDITION_EPSILON` environment variable, and is either applied process-wide or handed to
//! a single [`ConditionEvaluator`](crate::services::condition::ConditionEvaluator).

use serde::{Deserialize, Serialize};
use std::{collections::HashMap, env, path::Path};

use crate::{
	models::{config::error::ConfigError, ConfigLoader},
	services::condition::{set_default_epsilon, DEFAULT_EPSILON},
};

/// Environment variable holding the process-wide epsilon
pub const EPSILON_ENV_VAR: &str = "CONDITION_EPSILON";

fn default_epsilon_setting() -> f64 {
	DEFAULT_EPSILON
}

/// Settings consumed by the condition evaluator
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EvaluatorConfig {
	/// Tolerance used by `==`, `!=`, `>=`, `<=` and numeric `IN`
	#[serde(default = "default_epsilon_setting")]
	pub epsilon: f64,
}

impl Default for EvaluatorConfig {
	fn default() -> Self {
		Self {
			epsilon: DEFAULT_EPSILON,
		}
	}
}

impl EvaluatorConfig {
	pub fn new(epsilon: f64) -> Self {
		Self { epsilon }
	}

	/// Builds the settings from the raw value of [`EPSILON_ENV_VAR`], if one was set.
	fn from_raw_epsilon(raw: Option<&str>) -> Result<Self, ConfigError> {
		let config = match raw {
			None => Self::default(),
			Some(raw) => {
				let epsilon = raw.trim().parse::<f64>().map_err(|e| {
					ConfigError::parse_error(
						format!("{} is not a number: {}", EPSILON_ENV_VAR, e),
						Some(Box::new(e)),
						Some(HashMap::from([("value".to_string(), raw.to_string())])),
					)
				})?;
				Self { epsilon }
			}
		};

		config.validate()?;
		Ok(config)
	}

	/// Makes these settings the process-wide default for every evaluator that does not
	/// carry its own epsilon. Invalid settings leave the current default in place.
	pub fn apply(&self) -> Result<(), ConfigError> {
		tracing::info!(epsilon = self.epsilon, "Applying process-wide condition epsilon");
		set_default_epsilon(self.epsilon)
	}
}

impl ConfigLoader for EvaluatorConfig {
	fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
		if !Self::is_json_file(path) {
			return Err(ConfigError::file_error(
				"evaluator config must be a JSON file",
				None,
				Some(HashMap::from([(
					"path".to_string(),
					path.display().to_string(),
				)])),
			));
		}

		let file = std::fs::File::open(path).map_err(|e| {
			ConfigError::file_error(
				format!("failed to open evaluator config file: {}", e),
				Some(Box::new(e)),
				Some(HashMap::from([(
					"path".to_string(),
					path.display().to_string(),
				)])),
			)
		})?;

		let config: EvaluatorConfig = serde_json::from_reader(file).map_err(|e| {
			ConfigError::parse_error(
				format!("failed to parse evaluator config: {}", e),
				Some(Box::new(e)),
				Some(HashMap::from([(
					"path".to_string(),
					path.display().to_string(),
				)])),
			)
		})?;

		config.validate()?;
		Ok(config)
	}

	fn load_from_env() -> Result<Self, ConfigError> {
		dotenvy::dotenv().ok();

		match env::var(EPSILON_ENV_VAR) {
			Ok(raw) => Self::from_raw_epsilon(Some(&raw)),
			Err(env::VarError::NotPresent) => Self::from_raw_epsilon(None),
			Err(e) => Err(anyhow::Error::new(e)
				.context(format!("failed to read {}", EPSILON_ENV_VAR))
				.into()),
		}
	}

	fn validate(&self) -> Result<(), ConfigError> {
		if !self.epsilon.is_finite() || self.epsilon <= 0.0 {
			return Err(ConfigError::validation_error(
				"epsilon must be a finite number greater than zero",
				None,
				Some(HashMap::from([(
					"epsilon".to_string(),
					self.epsilon.to_string(),
				)])),
			));
		}
		Ok(())
	}
}
