//! Coercion of host arguments into evaluation values.
//!
//! Rules are applied in a fixed order. Every native number width becomes a
//! [`Value::Number`], textual JSON numbers are parsed, homogeneous vectors become
//! sequences, and sets pass through untouched. A loosely-typed vector is read according to
//! its first element. Anything else is rejected with [`EvaluationError::UnsupportedType`].

use super::error::EvaluationError;
use crate::models::{parse_json_number, Argument, StringSlice, Value};
use std::{borrow::Cow, collections::HashMap};

fn unsupported(key: &str, kind: &str, message: String) -> EvaluationError {
	EvaluationError::unsupported_type(
		message,
		None,
		Some(HashMap::from([
			("key".to_string(), key.to_string()),
			("kind".to_string(), kind.to_string()),
		])),
	)
}

fn json_number(key: &str, text: &str) -> Result<f64, EvaluationError> {
	parse_json_number(text).ok_or_else(|| {
		unsupported(
			key,
			"json number",
			format!("argument {} holds '{}', which is not a number", key, text),
		)
	})
}

/// Converts the argument resolved for `key` into a value.
pub fn coerce(key: &str, argument: Argument) -> Result<Value<'static>, EvaluationError> {
	let kind = argument.kind();
	tracing::debug!(key, kind, "Coercing argument");

	let value = match argument {
		Argument::Numeric(n) => Value::Number(n.to_f64()),
		Argument::JsonNumber(text) => Value::Number(json_number(key, &text)?),
		Argument::Str(s) => Value::String(Cow::Owned(s)),
		Argument::Bool(b) => Value::Boolean(b),
		Argument::NumericVec(items) => Value::NumberSequence(Cow::Owned(items.to_f64_vec())),
		Argument::JsonNumbers(items) => Value::NumberSequence(Cow::Owned(
			items
				.iter()
				.map(|text| json_number(key, text))
				.collect::<Result<Vec<_>, _>>()?,
		)),
		Argument::Strs(items) => Value::StringSequence(Cow::Owned(StringSlice::new(items))),
		Argument::Dynamic(items) => coerce_dynamic(key, items)?,
		Argument::NumberSet(set) => Value::NumberSet(set),
		Argument::StringSet(set) => Value::StringSet(set),
		Argument::Null | Argument::Object(_) => {
			return Err(unsupported(
				key,
				kind,
				format!("argument {} has unsupported type {}", key, kind),
			));
		}
	};

	Ok(value)
}

/// Reads a loosely-typed vector. The first element decides whether the whole vector is a
/// string or a number sequence; every later element must agree.
fn coerce_dynamic(key: &str, items: Vec<Argument>) -> Result<Value<'static>, EvaluationError> {
	let Some(first) = items.first() else {
		return Err(unsupported(
			key,
			"dynamic sequence",
			format!("argument {} is an empty sequence with no element type", key),
		));
	};

	match first {
		Argument::Str(_) => {
			let strings = items
				.into_iter()
				.enumerate()
				.map(|(index, item)| match item {
					Argument::Str(s) => Ok(s),
					other => Err(unsupported(
						key,
						other.kind(),
						format!(
							"argument {} mixes strings with {} at index {}",
							key,
							other.kind(),
							index
						),
					)),
				})
				.collect::<Result<Vec<_>, _>>()?;
			Ok(Value::StringSequence(Cow::Owned(StringSlice::new(strings))))
		}
		Argument::Numeric(_) | Argument::JsonNumber(_) => {
			let numbers = items
				.iter()
				.enumerate()
				.map(|(index, item)| match item {
					Argument::Numeric(n) => Ok(n.to_f64()),
					Argument::JsonNumber(text) => json_number(key, text),
					other => Err(unsupported(
						key,
						other.kind(),
						format!(
							"argument {} mixes numbers with {} at index {}",
							key,
							other.kind(),
							index
						),
					)),
				})
				.collect::<Result<Vec<_>, _>>()?;
			Ok(Value::NumberSequence(Cow::Owned(numbers)))
		}
		other => Err(unsupported(
			key,
			other.kind(),
			format!("argument {} is a sequence of unsupported type {}", key, other.kind()),
		)),
	}
}
