//! Numeric tolerance.
//!
//! Equality and ordering operators compare floats through [`float64_equal`], a hybrid of an
//! absolute and a relative epsilon check. The process-wide default epsilon lives in an
//! atomic so that it can be changed while other threads evaluate; every evaluation reads it
//! at call time.

use crate::models::{ConfigError, ConfigLoader, EvaluatorConfig};
use std::sync::atomic::{AtomicU64, Ordering};

/// Default tolerance used when nothing else is configured
pub const DEFAULT_EPSILON: f64 = 1e-6;

static DEFAULT_EPSILON_BITS: AtomicU64 = AtomicU64::new(DEFAULT_EPSILON.to_bits());

/// Returns the current process-wide epsilon.
pub fn default_epsilon() -> f64 {
	f64::from_bits(DEFAULT_EPSILON_BITS.load(Ordering::Acquire))
}

fn store_default_epsilon(epsilon: f64) {
	tracing::debug!(epsilon, "Setting default epsilon");
	DEFAULT_EPSILON_BITS.store(epsilon.to_bits(), Ordering::Release);
}

/// Replaces the process-wide epsilon. Takes effect for every evaluation that starts
/// afterwards and does not carry its own epsilon.
///
/// The epsilon must be finite and greater than zero; otherwise the current default is kept
/// and a [`ConfigError::ValidationError`] is returned.
pub fn set_default_epsilon(epsilon: f64) -> Result<(), ConfigError> {
	EvaluatorConfig::new(epsilon).validate()?;
	store_default_epsilon(epsilon);
	Ok(())
}

/// Restores the process-wide epsilon to [`DEFAULT_EPSILON`].
pub fn reset_default_epsilon() {
	store_default_epsilon(DEFAULT_EPSILON);
}

/// Compares two floats within `epsilon`.
///
/// - Identical values are equal.
/// - Values further apart than `epsilon` are not.
/// - Against an exact zero the difference must stay below `epsilon` scaled by the smallest
///   positive normal `f32`, i.e. practically exact.
/// - Otherwise the difference relative to the summed magnitudes must stay below `epsilon`.
pub fn float64_equal(a: f64, b: f64, epsilon: f64) -> bool {
	if a == b {
		return true;
	}

	let diff = (a - b).abs();
	if diff > epsilon {
		return false;
	}

	if a == 0.0 || b == 0.0 {
		return diff < epsilon * f64::from(f32::MIN_POSITIVE);
	}

	diff / (a.abs() + b.abs()).min(f64::MAX) < epsilon
}
