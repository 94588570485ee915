//! Argument resolution.
//!
//! An [`ArgResolver`] maps a key referenced by the expression to the raw host argument. The
//! evaluator only borrows a resolver for the duration of one call and never mutates it.

use super::error::EvaluationError;
use crate::models::Argument;
use std::collections::HashMap;

/// Maps argument keys to host-supplied values.
pub trait ArgResolver {
	/// Returns the argument stored under `key`, or [`EvaluationError::KeyNotResolved`].
	fn resolve(&self, key: &str) -> Result<Argument, EvaluationError>;
}

pub(crate) fn key_not_found(key: &str) -> EvaluationError {
	EvaluationError::key_not_resolved(
		format!("argument by key {} not found", key),
		None,
		Some(HashMap::from([("key".to_string(), key.to_string())])),
	)
}

/// Resolver backed by an owned key-value map.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MapArgResolver {
	args: HashMap<String, Argument>,
}

impl MapArgResolver {
	pub fn new(args: HashMap<String, Argument>) -> Self {
		Self { args }
	}

	/// Builds a resolver from a decoded JSON object; numbers keep their textual form.
	pub fn from_json(object: serde_json::Map<String, serde_json::Value>) -> Self {
		Self {
			args: object
				.into_iter()
				.map(|(key, value)| (key, Argument::from(value)))
				.collect(),
		}
	}

	pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Argument>) -> Option<Argument> {
		self.args.insert(key.into(), value.into())
	}

	pub fn len(&self) -> usize {
		self.args.len()
	}

	pub fn is_empty(&self) -> bool {
		self.args.is_empty()
	}
}

impl<K: Into<String>, V: Into<Argument>> FromIterator<(K, V)> for MapArgResolver {
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		Self {
			args: iter
				.into_iter()
				.map(|(key, value)| (key.into(), value.into()))
				.collect(),
		}
	}
}

impl ArgResolver for MapArgResolver {
	fn resolve(&self, key: &str) -> Result<Argument, EvaluationError> {
		self.args.resolve(key)
	}
}

impl ArgResolver for HashMap<String, Argument> {
	fn resolve(&self, key: &str) -> Result<Argument, EvaluationError> {
		self.get(key).cloned().ok_or_else(|| key_not_found(key))
	}
}

impl ArgResolver for serde_json::Map<String, serde_json::Value> {
	fn resolve(&self, key: &str) -> Result<Argument, EvaluationError> {
		self.get(key)
			.map(Argument::from)
			.ok_or_else(|| key_not_found(key))
	}
}

/// Resolver backed by a lookup closure; `None` means the key is unknown.
pub struct FnArgResolver<F>(F);

impl<F> FnArgResolver<F>
where
	F: Fn(&str) -> Option<Argument>,
{
	pub fn new(lookup: F) -> Self {
		Self(lookup)
	}
}

impl<F> ArgResolver for FnArgResolver<F>
where
	F: Fn(&str) -> Option<Argument>,
{
	fn resolve(&self, key: &str) -> Result<Argument, EvaluationError> {
		(self.0)(key).ok_or_else(|| key_not_found(key))
	}
}

impl<R: ArgResolver + ?Sized> ArgResolver for &R {
	fn resolve(&self, key: &str) -> Result<Argument, EvaluationError> {
		(**self).resolve(key)
	}
}
