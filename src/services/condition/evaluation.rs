//! Expression tree evaluation.
//!
//! The evaluator reduces a tree bottom-up: literals stand for themselves, argument references
//! are resolved and coerced, parentheses pass their inner value through, and binary nodes
//! reduce both children before applying their operator. Logical operators do not
//! short-circuit, so every argument referenced by the tree is resolved on every call.

use super::{
	coercion::coerce,
	error::EvaluationError,
	operators::apply_operator,
	resolver::ArgResolver,
	tolerance::default_epsilon,
};
use crate::models::{Argument, EvaluatorConfig, Expr, Value};
use std::{borrow::Cow, collections::HashMap};

/// Evaluates condition expressions against host arguments.
///
/// An evaluator built with [`ConditionEvaluator::new`] reads the process-wide epsilon at the
/// start of every call; one built with [`ConditionEvaluator::with_epsilon`] always uses its
/// own.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ConditionEvaluator {
	epsilon: Option<f64>,
}

impl ConditionEvaluator {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_epsilon(epsilon: f64) -> Self {
		Self {
			epsilon: Some(epsilon),
		}
	}

	pub fn from_config(config: &EvaluatorConfig) -> Self {
		Self::with_epsilon(config.epsilon)
	}

	/// Returns the epsilon the next evaluation would use.
	pub fn epsilon(&self) -> f64 {
		self.epsilon.unwrap_or_else(default_epsilon)
	}

	/// Evaluates `expr` to a boolean.
	///
	/// Passing `None` yields [`EvaluationError::NilExpression`] without consulting the
	/// resolver. Any error raised while reducing the tree aborts the evaluation and is
	/// returned unchanged.
	pub fn evaluate<'e, R>(
		&self,
		expr: impl Into<Option<&'e Expr>>,
		resolver: &R,
	) -> Result<bool, EvaluationError>
	where
		R: ArgResolver + ?Sized,
	{
		let Some(expr) = expr.into() else {
			return Err(EvaluationError::nil_expression("provided expression is nil", None, None));
		};

		let epsilon = self.epsilon();
		match reduce(expr, resolver, epsilon)? {
			Value::Boolean(result) => {
				tracing::trace!(%expr, result, "Evaluated condition");
				Ok(result)
			}
			other => Err(EvaluationError::invalid_root_result(
				format!("expression reduced to {} instead of a boolean", other.kind()),
				None,
				Some(HashMap::from([(
					"kind".to_string(),
					other.kind().to_string(),
				)])),
			)),
		}
	}
}

fn reduce<'e, R>(expr: &'e Expr, resolver: &R, epsilon: f64) -> Result<Value<'e>, EvaluationError>
where
	R: ArgResolver + ?Sized,
{
	let value = match expr {
		Expr::BooleanLiteral(b) => Value::Boolean(*b),
		Expr::NumberLiteral(n) => Value::Number(*n),
		Expr::StringLiteral(s) => Value::String(Cow::Borrowed(s.as_str())),
		Expr::SliceNumberLiteral(items) => Value::NumberSequence(Cow::Borrowed(items.as_slice())),
		Expr::SliceStringLiteral(items) => Value::StringSequence(Cow::Borrowed(items)),
		Expr::NumberCollectionLiteral(set) => Value::NumberSet(set.clone()),
		Expr::StringCollectionLiteral(set) => Value::StringSet(set.clone()),
		Expr::VarRef(key) => {
			let argument = resolver.resolve(key)?;
			coerce(key, argument)?
		}
		Expr::ParenExpr(inner) => reduce(inner, resolver, epsilon)?,
		Expr::BinaryExpr { op, lhs, rhs } => {
			let left = reduce(lhs, resolver, epsilon)?;
			let right = reduce(rhs, resolver, epsilon)?;
			Value::Boolean(apply_operator(*op, &left, &right, epsilon)?)
		}
	};

	tracing::trace!(kind = value.kind(), "Reduced node");
	Ok(value)
}

/// Evaluates `expr` against a plain argument map using the process-wide epsilon.
pub fn evaluate<'e>(
	expr: impl Into<Option<&'e Expr>>,
	args: &HashMap<String, Argument>,
) -> Result<bool, EvaluationError> {
	ConditionEvaluator::new().evaluate(expr, args)
}

/// Evaluates `expr` against any resolver using the process-wide epsilon.
pub fn evaluate_with_resolver<'e, R>(
	expr: impl Into<Option<&'e Expr>>,
	resolver: &R,
) -> Result<bool, EvaluationError>
where
	R: ArgResolver + ?Sized,
{
	ConditionEvaluator::new().evaluate(expr, resolver)
}
