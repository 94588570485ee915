//! Host-typed argument values.
//!
//! Hosts hand arguments to the evaluator in whatever shape their source produced: native
//! integers and floats of any width, decoded JSON numbers kept as text, plain strings,
//! booleans, homogeneous vectors, loosely-typed vectors, or pre-built sets. [`Argument`]
//! is the closed list of those shapes; the coercion layer maps each of them onto the
//! evaluator's value model or rejects it.

use super::collection::{NumberSet, StringSet};
use std::{collections::BTreeMap, sync::Arc};

/// Parses the text of a JSON number. Surrounding whitespace is rejected.
pub fn parse_json_number(text: &str) -> Option<f64> {
	text.parse::<f64>().ok()
}

macro_rules! numeric_kinds {
	($($variant:ident => $ty:ty, $vec_variant:ident, $name:literal;)*) => {
		/// A native number of any integer or floating width.
		#[derive(Debug, Clone, Copy, PartialEq)]
		pub enum Numeric {
			$($variant($ty),)*
		}

		impl Numeric {
			/// Widens the number to the evaluator's single numeric representation.
			pub fn to_f64(self) -> f64 {
				match self {
					$(Numeric::$variant(n) => n as f64,)*
				}
			}

			pub fn kind(&self) -> &'static str {
				match self {
					$(Numeric::$variant(_) => $name,)*
				}
			}
		}

		/// A homogeneous vector of native numbers of one width.
		#[derive(Debug, Clone, PartialEq)]
		pub enum NumericVec {
			$($variant(Vec<$ty>),)*
		}

		impl NumericVec {
			pub fn to_f64_vec(&self) -> Vec<f64> {
				match self {
					$(NumericVec::$variant(items) => items.iter().map(|n| *n as f64).collect(),)*
				}
			}

			pub fn len(&self) -> usize {
				match self {
					$(NumericVec::$variant(items) => items.len(),)*
				}
			}

			pub fn is_empty(&self) -> bool {
				self.len() == 0
			}

			pub fn kind(&self) -> &'static str {
				match self {
					$(NumericVec::$variant(_) => concat!("[]", $name),)*
				}
			}
		}

		$(
			impl From<$ty> for Argument {
				fn from(value: $ty) -> Self {
					Argument::Numeric(Numeric::$variant(value))
				}
			}

			impl From<Vec<$ty>> for Argument {
				fn from(values: Vec<$ty>) -> Self {
					Argument::NumericVec(NumericVec::$vec_variant(values))
				}
			}
		)*
	};
}

numeric_kinds! {
	I8 => i8, I8, "i8";
	I16 => i16, I16, "i16";
	I32 => i32, I32, "i32";
	I64 => i64, I64, "i64";
	I128 => i128, I128, "i128";
	Isize => isize, Isize, "isize";
	U8 => u8, U8, "u8";
	U16 => u16, U16, "u16";
	U32 => u32, U32, "u32";
	U64 => u64, U64, "u64";
	U128 => u128, U128, "u128";
	Usize => usize, Usize, "usize";
	F32 => f32, F32, "f32";
	F64 => f64, F64, "f64";
}

/// A raw argument as supplied by the host.
#[derive(Debug, Clone, PartialEq)]
pub enum Argument {
	/// A native number of any width
	Numeric(Numeric),
	/// A number kept in its textual form, e.g. a decoded JSON number
	JsonNumber(String),
	/// A plain string; never parsed as a number
	Str(String),
	Bool(bool),
	/// A homogeneous vector of native numbers
	NumericVec(NumericVec),
	/// A homogeneous vector of textual numbers
	JsonNumbers(Vec<String>),
	/// A homogeneous vector of strings
	Strs(Vec<String>),
	/// A loosely-typed vector; its first element decides how it is read
	Dynamic(Vec<Argument>),
	NumberSet(Arc<NumberSet>),
	StringSet(Arc<StringSet>),
	/// An absent value
	Null,
	/// A keyed map, e.g. a decoded JSON object
	Object(BTreeMap<String, Argument>),
}

impl Argument {
	/// Names the observed kind, for diagnostics.
	pub fn kind(&self) -> &'static str {
		match self {
			Argument::Numeric(n) => n.kind(),
			Argument::JsonNumber(_) => "json number",
			Argument::Str(_) => "string",
			Argument::Bool(_) => "bool",
			Argument::NumericVec(v) => v.kind(),
			Argument::JsonNumbers(_) => "[]json number",
			Argument::Strs(_) => "[]string",
			Argument::Dynamic(_) => "dynamic sequence",
			Argument::NumberSet(_) => "number set",
			Argument::StringSet(_) => "string set",
			Argument::Null => "null",
			Argument::Object(_) => "object",
		}
	}

	/// Reads a scalar number: a native number of any width, or a JSON number whose text
	/// parses as a float.
	pub fn as_number(&self) -> Option<f64> {
		match self {
			Argument::Numeric(n) => Some(n.to_f64()),
			Argument::JsonNumber(text) => parse_json_number(text),
			_ => None,
		}
	}

	/// Whether the argument is a scalar number, parseable or not.
	pub fn is_numeric(&self) -> bool {
		matches!(self, Argument::Numeric(_) | Argument::JsonNumber(_))
	}

	pub fn is_null(&self) -> bool {
		matches!(self, Argument::Null)
	}
}

impl From<bool> for Argument {
	fn from(value: bool) -> Self {
		Argument::Bool(value)
	}
}

impl From<String> for Argument {
	fn from(value: String) -> Self {
		Argument::Str(value)
	}
}

impl From<&str> for Argument {
	fn from(value: &str) -> Self {
		Argument::Str(value.to_string())
	}
}

impl From<Vec<String>> for Argument {
	fn from(values: Vec<String>) -> Self {
		Argument::Strs(values)
	}
}

impl From<Vec<&str>> for Argument {
	fn from(values: Vec<&str>) -> Self {
		Argument::Strs(values.into_iter().map(str::to_string).collect())
	}
}

impl From<Vec<Argument>> for Argument {
	fn from(values: Vec<Argument>) -> Self {
		Argument::Dynamic(values)
	}
}

impl From<NumberSet> for Argument {
	fn from(set: NumberSet) -> Self {
		Argument::NumberSet(Arc::new(set))
	}
}

impl From<Arc<NumberSet>> for Argument {
	fn from(set: Arc<NumberSet>) -> Self {
		Argument::NumberSet(set)
	}
}

impl From<StringSet> for Argument {
	fn from(set: StringSet) -> Self {
		Argument::StringSet(Arc::new(set))
	}
}

impl From<Arc<StringSet>> for Argument {
	fn from(set: Arc<StringSet>) -> Self {
		Argument::StringSet(set)
	}
}

impl<T: Into<Argument>> From<Option<T>> for Argument {
	fn from(value: Option<T>) -> Self {
		value.map(Into::into).unwrap_or(Argument::Null)
	}
}

/// Decoded JSON keeps numbers in their textual form, so that the coercion layer decides how
/// to read them.
impl From<serde_json::Value> for Argument {
	fn from(value: serde_json::Value) -> Self {
		match value {
			serde_json::Value::Null => Argument::Null,
			serde_json::Value::Bool(b) => Argument::Bool(b),
			serde_json::Value::Number(n) => Argument::JsonNumber(n.to_string()),
			serde_json::Value::String(s) => Argument::Str(s),
			serde_json::Value::Array(items) => {
				Argument::Dynamic(items.into_iter().map(Argument::from).collect())
			}
			serde_json::Value::Object(map) => Argument::Object(
				map.into_iter()
					.map(|(key, value)| (key, Argument::from(value)))
					.collect(),
			),
		}
	}
}

impl From<&serde_json::Value> for Argument {
	fn from(value: &serde_json::Value) -> Self {
		Argument::from(value.clone())
	}
}
