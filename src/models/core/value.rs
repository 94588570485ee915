//! Evaluation-time values.
//!
//! Every expression node reduces to a [`Value`]. Literal nodes borrow from the expression
//! tree; values produced by coercing host arguments are owned. Only [`Value::Boolean`] is a
//! valid result for a whole expression.

use super::collection::{NumberSet, StringSet, StringSlice};
use std::{borrow::Cow, fmt, sync::Arc};

#[derive(Debug, Clone, PartialEq)]
pub enum Value<'a> {
	Boolean(bool),
	Number(f64),
	String(Cow<'a, str>),
	NumberSet(Arc<NumberSet>),
	StringSet(Arc<StringSet>),
	NumberSequence(Cow<'a, [f64]>),
	StringSequence(Cow<'a, StringSlice>),
}

impl Value<'_> {
	/// Names the value kind, for diagnostics.
	pub fn kind(&self) -> &'static str {
		match self {
			Value::Boolean(_) => "boolean",
			Value::Number(_) => "number",
			Value::String(_) => "string",
			Value::NumberSet(_) => "number set",
			Value::StringSet(_) => "string set",
			Value::NumberSequence(_) => "number sequence",
			Value::StringSequence(_) => "string sequence",
		}
	}

	pub fn as_bool(&self) -> Option<bool> {
		match self {
			Value::Boolean(b) => Some(*b),
			_ => None,
		}
	}

	pub fn as_number(&self) -> Option<f64> {
		match self {
			Value::Number(n) => Some(*n),
			_ => None,
		}
	}

	pub fn as_str(&self) -> Option<&str> {
		match self {
			Value::String(s) => Some(&**s),
			_ => None,
		}
	}

	/// Detaches the value from the expression tree it borrows from.
	pub fn into_owned(self) -> Value<'static> {
		match self {
			Value::Boolean(b) => Value::Boolean(b),
			Value::Number(n) => Value::Number(n),
			Value::String(s) => Value::String(Cow::Owned(s.into_owned())),
			Value::NumberSet(set) => Value::NumberSet(set),
			Value::StringSet(set) => Value::StringSet(set),
			Value::NumberSequence(items) => Value::NumberSequence(Cow::Owned(items.into_owned())),
			Value::StringSequence(items) => Value::StringSequence(Cow::Owned(items.into_owned())),
		}
	}
}

impl fmt::Display for Value<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Value::Boolean(b) => write!(f, "{}", b),
			Value::Number(n) => write!(f, "{}", n),
			Value::String(s) => write!(f, "{:?}", s),
			Value::NumberSet(set) => write!(f, "{}", set),
			Value::StringSet(set) => write!(f, "{}", set),
			Value::NumberSequence(items) => {
				let parts: Vec<String> = items.iter().map(|n| n.to_string()).collect();
				write!(f, "({})", parts.join(", "))
			}
			Value::StringSequence(items) => {
				let parts: Vec<String> =
					items.as_slice().iter().map(|s| format!("{:?}", s)).collect();
				write!(f, "({})", parts.join(", "))
			}
		}
	}
}
