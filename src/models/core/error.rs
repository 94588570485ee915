//! Collection construction error types.
//!
//! Malformed collection input is rejected when the host builds the collection, never
//! deferred to evaluation time.

use crate::utils::logging::error::{ErrorContext, TraceableError};
use std::collections::HashMap;
use thiserror::Error as ThisError;

/// Represents errors that can occur while building a [`NumberSet`](super::NumberSet) or
/// [`StringSet`](super::StringSet)
#[derive(ThisError, Debug)]
pub enum CollectionError {
	/// No items were supplied
	#[error("Empty collection: {0}")]
	Empty(Box<ErrorContext>),

	/// Items of more than one kind were supplied
	#[error("Mixed collection kinds: {0}")]
	MixedKinds(Box<ErrorContext>),

	/// Items of a kind that cannot be collected were supplied
	#[error("Unsupported collection kind: {0}")]
	UnsupportedKind(Box<ErrorContext>),
}

impl CollectionError {
	pub fn empty(
		msg: impl Into<String>,
		source: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
		metadata: Option<HashMap<String, String>>,
	) -> Self {
		// Not logged: the host decides whether a rejected collection is worth reporting
		Self::Empty(Box::new(ErrorContext::new(msg, source, metadata)))
	}

	pub fn mixed_kinds(
		msg: impl Into<String>,
		source: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
		metadata: Option<HashMap<String, String>>,
	) -> Self {
		Self::MixedKinds(Box::new(ErrorContext::new(msg, source, metadata)))
	}

	pub fn unsupported_kind(
		msg: impl Into<String>,
		source: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
		metadata: Option<HashMap<String, String>>,
	) -> Self {
		Self::UnsupportedKind(Box::new(ErrorContext::new(msg, source, metadata)))
	}
}

impl TraceableError for CollectionError {
	fn trace_id(&self) -> String {
		match self {
			Self::Empty(ctx) | Self::MixedKinds(ctx) | Self::UnsupportedKind(ctx) => {
				ctx.trace_id.clone()
			}
		}
	}
}
