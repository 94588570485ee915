//! Error types for the evaluation of condition expressions.
//!
//! Every failure aborts the whole evaluation and reaches the caller unchanged. Errors that
//! concern a specific argument carry its `key` and observed `kind` as metadata; operator
//! errors carry the `operator`.

use crate::utils::logging::error::{ErrorContext, TraceableError};
use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EvaluationError {
	/// No expression was supplied.
	#[error("Nil expression: {0}")]
	NilExpression(Box<ErrorContext>),

	/// The argument resolver has no value for a referenced key.
	#[error("Key not resolved: {0}")]
	KeyNotResolved(Box<ErrorContext>),

	/// A host argument has a kind the evaluator cannot represent.
	#[error("Unsupported type: {0}")]
	UnsupportedType(Box<ErrorContext>),

	/// An operator received an operand of the wrong kind.
	#[error("Type mismatch: {0}")]
	TypeMismatch(Box<ErrorContext>),

	/// An operator token is not part of the language.
	#[error("Invalid operator: {0}")]
	InvalidOperator(Box<ErrorContext>),

	/// A regular expression failed to compile.
	#[error("Invalid pattern: {0}")]
	InvalidPattern(Box<ErrorContext>),

	/// The expression did not reduce to a boolean.
	#[error("Invalid root result: {0}")]
	InvalidRootResult(Box<ErrorContext>),
}

impl EvaluationError {
	pub fn nil_expression(
		message: impl Into<String>,
		source: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
		metadata: Option<HashMap<String, String>>,
	) -> Self {
		Self::NilExpression(Box::new(ErrorContext::new_with_log(
			message, source, metadata,
		)))
	}

	/// The `message` should name the missing key.
	pub fn key_not_resolved(
		message: impl Into<String>,
		source: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
		metadata: Option<HashMap<String, String>>,
	) -> Self {
		Self::KeyNotResolved(Box::new(ErrorContext::new_with_log(
			message, source, metadata,
		)))
	}

	pub fn unsupported_type(
		message: impl Into<String>,
		source: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
		metadata: Option<HashMap<String, String>>,
	) -> Self {
		Self::UnsupportedType(Box::new(ErrorContext::new_with_log(
			message, source, metadata,
		)))
	}

	/// The `message` should describe the expected and the observed kind.
	pub fn type_mismatch(
		message: impl Into<String>,
		source: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
		metadata: Option<HashMap<String, String>>,
	) -> Self {
		Self::TypeMismatch(Box::new(ErrorContext::new_with_log(
			message, source, metadata,
		)))
	}

	pub fn invalid_operator(
		message: impl Into<String>,
		source: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
		metadata: Option<HashMap<String, String>>,
	) -> Self {
		Self::InvalidOperator(Box::new(ErrorContext::new_with_log(
			message, source, metadata,
		)))
	}

	/// The `source` should be the regex compilation error.
	pub fn invalid_pattern(
		message: impl Into<String>,
		source: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
		metadata: Option<HashMap<String, String>>,
	) -> Self {
		Self::InvalidPattern(Box::new(ErrorContext::new_with_log(
			message, source, metadata,
		)))
	}

	pub fn invalid_root_result(
		message: impl Into<String>,
		source: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
		metadata: Option<HashMap<String, String>>,
	) -> Self {
		Self::InvalidRootResult(Box::new(ErrorContext::new_with_log(
			message, source, metadata,
		)))
	}

	/// Returns the context shared by every variant.
	pub fn context(&self) -> &ErrorContext {
		match self {
			Self::NilExpression(ctx)
			| Self::KeyNotResolved(ctx)
			| Self::UnsupportedType(ctx)
			| Self::TypeMismatch(ctx)
			| Self::InvalidOperator(ctx)
			| Self::InvalidPattern(ctx)
			| Self::InvalidRootResult(ctx) => ctx,
		}
	}
}

impl TraceableError for EvaluationError {
	fn trace_id(&self) -> String {
		self.context().trace_id.clone()
	}
}
