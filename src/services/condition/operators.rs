//! Operator semantics.
//!
//! Every operator is a pure function of two reduced values and the epsilon in effect for the
//! evaluation. A wrong operand kind is a [`EvaluationError::TypeMismatch`], with one legacy
//! exception in `==`/`!=` documented on [`equal`].

use super::{error::EvaluationError, tolerance::float64_equal};
use crate::models::{Operator, Value};
use regex::Regex;
use std::collections::HashMap;

fn mismatch(op: Operator, expected: &str, found: &Value<'_>) -> EvaluationError {
	EvaluationError::type_mismatch(
		format!("{} expects {}, found {}", op, expected, found.kind()),
		None,
		Some(HashMap::from([
			("operator".to_string(), op.to_string()),
			("kind".to_string(), found.kind().to_string()),
		])),
	)
}

/// Applies `op` to two reduced operands.
pub fn apply_operator(
	op: Operator,
	lhs: &Value<'_>,
	rhs: &Value<'_>,
	epsilon: f64,
) -> Result<bool, EvaluationError> {
	tracing::debug!(operator = %op, lhs = lhs.kind(), rhs = rhs.kind(), "Applying operator");

	match op {
		Operator::And | Operator::Or | Operator::Xor | Operator::Nand => logical(op, lhs, rhs),
		Operator::Eq => equal(lhs, rhs, epsilon),
		Operator::Neq => equal(lhs, rhs, epsilon).map(|eq| !eq),
		Operator::Gt | Operator::Gte | Operator::Lt | Operator::Lte => {
			compare(op, lhs, rhs, epsilon)
		}
		Operator::In => contained_in(op, lhs, rhs, epsilon),
		Operator::NotIn => contained_in(op, lhs, rhs, epsilon).map(|found| !found),
		Operator::Contains => contained_in(op, rhs, lhs, epsilon),
		Operator::NotContains => contained_in(op, rhs, lhs, epsilon).map(|found| !found),
		Operator::Ereg => matches_pattern(op, lhs, rhs),
		Operator::Nereg => matches_pattern(op, lhs, rhs).map(|matched| !matched),
	}
}

fn logical(op: Operator, lhs: &Value<'_>, rhs: &Value<'_>) -> Result<bool, EvaluationError> {
	let a = lhs.as_bool().ok_or_else(|| mismatch(op, "boolean operands", lhs))?;
	let b = rhs.as_bool().ok_or_else(|| mismatch(op, "boolean operands", rhs))?;

	Ok(match op {
		Operator::And => a && b,
		Operator::Or => a || b,
		Operator::Xor => a != b,
		_ => !(a && b),
	})
}

/// Equality driven by the left operand.
///
/// A string, number or boolean on the left requires the same kind on the right, otherwise
/// the comparison is a type mismatch. Numbers compare within `epsilon`. Any other left kind
/// (sets and sequences) is never equal to anything and yields `false` instead of an error.
pub fn equal(lhs: &Value<'_>, rhs: &Value<'_>, epsilon: f64) -> Result<bool, EvaluationError> {
	match lhs {
		Value::String(a) => match rhs {
			Value::String(b) => Ok(a == b),
			_ => Err(mismatch(Operator::Eq, "a string on the right", rhs)),
		},
		Value::Number(a) => match rhs {
			Value::Number(b) => Ok(float64_equal(*a, *b, epsilon)),
			_ => Err(mismatch(Operator::Eq, "a number on the right", rhs)),
		},
		Value::Boolean(a) => match rhs {
			Value::Boolean(b) => Ok(a == b),
			_ => Err(mismatch(Operator::Eq, "a boolean on the right", rhs)),
		},
		_ => {
			tracing::debug!(lhs = lhs.kind(), rhs = rhs.kind(), "Incomparable operands");
			Ok(false)
		}
	}
}

fn compare(
	op: Operator,
	lhs: &Value<'_>,
	rhs: &Value<'_>,
	epsilon: f64,
) -> Result<bool, EvaluationError> {
	let a = lhs.as_number().ok_or_else(|| mismatch(op, "numeric operands", lhs))?;
	let b = rhs.as_number().ok_or_else(|| mismatch(op, "numeric operands", rhs))?;

	Ok(match op {
		Operator::Gt => a > b,
		Operator::Gte => a > b || float64_equal(a, b, epsilon),
		Operator::Lt => a < b,
		_ => a < b || float64_equal(a, b, epsilon),
	})
}

/// Membership of `item` in `container`.
///
/// Sets answer with a direct lookup and sequences with a scan; numeric scans compare within
/// `epsilon`. An empty container holds nothing, so the result is `false`.
fn contained_in(
	op: Operator,
	item: &Value<'_>,
	container: &Value<'_>,
	epsilon: f64,
) -> Result<bool, EvaluationError> {
	match item {
		Value::String(s) => match container {
			Value::StringSet(set) => Ok(set.contains(s)),
			Value::StringSequence(items) => Ok(items.contains(s)),
			_ => Err(mismatch(op, "a string set or sequence", container)),
		},
		Value::Number(n) => match container {
			Value::NumberSet(set) => Ok(set.contains(*n)),
			Value::NumberSequence(items) => {
				Ok(items.iter().any(|candidate| float64_equal(*n, *candidate, epsilon)))
			}
			_ => Err(mismatch(op, "a number set or sequence", container)),
		},
		_ => Err(mismatch(op, "a string or number member", item)),
	}
}

fn matches_pattern(
	op: Operator,
	subject: &Value<'_>,
	pattern: &Value<'_>,
) -> Result<bool, EvaluationError> {
	let subject = subject.as_str().ok_or_else(|| mismatch(op, "a string subject", subject))?;
	let pattern = pattern.as_str().ok_or_else(|| mismatch(op, "a string pattern", pattern))?;

	let regex = Regex::new(pattern).map_err(|e| {
		EvaluationError::invalid_pattern(
			format!("cannot compile pattern '{}'", pattern),
			Some(Box::new(e)),
			Some(HashMap::from([
				("operator".to_string(), op.to_string()),
				("pattern".to_string(), pattern.to_string()),
			])),
		)
	})?;

	Ok(regex.is_match(subject))
}
