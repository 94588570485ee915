//! Abstract syntax tree for condition expressions.
//!
//! Trees are built once (usually by a parser living outside this crate) and may be
//! evaluated any number of times against different argument resolvers. Evaluation never
//! mutates a tree.

use super::collection::{NumberSet, StringSet, StringSlice};
use crate::services::condition::EvaluationError;
use std::{collections::HashMap, fmt, str::FromStr, sync::Arc};

/// Binary operators of the condition language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
	And,
	Or,
	Xor,
	Nand,
	Eq,
	Neq,
	Gt,
	Gte,
	Lt,
	Lte,
	In,
	NotIn,
	Contains,
	NotContains,
	/// Matches a regular expression
	Ereg,
	/// Does not match a regular expression
	Nereg,
}

impl Operator {
	pub const ALL: [Operator; 16] = [
		Operator::And,
		Operator::Or,
		Operator::Xor,
		Operator::Nand,
		Operator::Eq,
		Operator::Neq,
		Operator::Gt,
		Operator::Gte,
		Operator::Lt,
		Operator::Lte,
		Operator::In,
		Operator::NotIn,
		Operator::Contains,
		Operator::NotContains,
		Operator::Ereg,
		Operator::Nereg,
	];

	/// Returns the operator whose result is always the negation of this one, if any.
	pub fn negated(self) -> Option<Operator> {
		match self {
			Operator::Eq => Some(Operator::Neq),
			Operator::Neq => Some(Operator::Eq),
			Operator::In => Some(Operator::NotIn),
			Operator::NotIn => Some(Operator::In),
			Operator::Contains => Some(Operator::NotContains),
			Operator::NotContains => Some(Operator::Contains),
			Operator::Ereg => Some(Operator::Nereg),
			Operator::Nereg => Some(Operator::Ereg),
			_ => None,
		}
	}
}

impl fmt::Display for Operator {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let token = match self {
			Operator::And => "AND",
			Operator::Or => "OR",
			Operator::Xor => "XOR",
			Operator::Nand => "NAND",
			Operator::Eq => "==",
			Operator::Neq => "!=",
			Operator::Gt => ">",
			Operator::Gte => ">=",
			Operator::Lt => "<",
			Operator::Lte => "<=",
			Operator::In => "IN",
			Operator::NotIn => "NOT IN",
			Operator::Contains => "CONTAINS",
			Operator::NotContains => "NOT CONTAINS",
			Operator::Ereg => "=~",
			Operator::Nereg => "!~",
		};
		write!(f, "{}", token)
	}
}

impl FromStr for Operator {
	type Err = EvaluationError;

	/// Parses an operator token. Keywords are case-insensitive and may be separated by any
	/// amount of whitespace (`not   in`).
	fn from_str(token: &str) -> Result<Self, Self::Err> {
		let normalized = token
			.split_whitespace()
			.collect::<Vec<_>>()
			.join(" ")
			.to_uppercase();

		match normalized.as_str() {
			"AND" => Ok(Operator::And),
			"OR" => Ok(Operator::Or),
			"XOR" => Ok(Operator::Xor),
			"NAND" => Ok(Operator::Nand),
			"==" => Ok(Operator::Eq),
			"!=" => Ok(Operator::Neq),
			">" => Ok(Operator::Gt),
			">=" => Ok(Operator::Gte),
			"<" => Ok(Operator::Lt),
			"<=" => Ok(Operator::Lte),
			"IN" => Ok(Operator::In),
			"NOT IN" => Ok(Operator::NotIn),
			"CONTAINS" => Ok(Operator::Contains),
			"NOT CONTAINS" => Ok(Operator::NotContains),
			"=~" => Ok(Operator::Ereg),
			"!~" => Ok(Operator::Nereg),
			_ => Err(EvaluationError::invalid_operator(
				format!("unknown operator token '{}'", token),
				None,
				Some(HashMap::from([("operator".to_string(), token.to_string())])),
			)),
		}
	}
}

/// An expression node.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
	BooleanLiteral(bool),
	NumberLiteral(f64),
	StringLiteral(String),
	SliceNumberLiteral(Vec<f64>),
	SliceStringLiteral(StringSlice),
	/// Only produced from host arguments; parsers never author it
	NumberCollectionLiteral(Arc<NumberSet>),
	/// Only produced from host arguments; parsers never author it
	StringCollectionLiteral(Arc<StringSet>),
	/// Reference to a named argument
	VarRef(String),
	ParenExpr(Box<Expr>),
	BinaryExpr {
		op: Operator,
		lhs: Box<Expr>,
		rhs: Box<Expr>,
	},
}

impl Expr {
	pub fn var(key: impl Into<String>) -> Self {
		Expr::VarRef(key.into())
	}

	pub fn boolean(value: bool) -> Self {
		Expr::BooleanLiteral(value)
	}

	pub fn number(value: f64) -> Self {
		Expr::NumberLiteral(value)
	}

	pub fn string(value: impl Into<String>) -> Self {
		Expr::StringLiteral(value.into())
	}

	pub fn numbers(values: impl IntoIterator<Item = f64>) -> Self {
		Expr::SliceNumberLiteral(values.into_iter().collect())
	}

	pub fn strings<S: Into<String>>(values: impl IntoIterator<Item = S>) -> Self {
		Expr::SliceStringLiteral(StringSlice::new(
			values.into_iter().map(Into::into).collect(),
		))
	}

	pub fn paren(inner: Expr) -> Self {
		Expr::ParenExpr(Box::new(inner))
	}

	pub fn binary(op: Operator, lhs: Expr, rhs: Expr) -> Self {
		Expr::BinaryExpr {
			op,
			lhs: Box::new(lhs),
			rhs: Box::new(rhs),
		}
	}

	/// Returns the argument keys referenced by the expression, left to right.
	pub fn args(&self) -> Vec<&str> {
		let mut keys = Vec::new();
		self.collect_args(&mut keys);
		keys
	}

	fn collect_args<'a>(&'a self, keys: &mut Vec<&'a str>) {
		match self {
			Expr::VarRef(key) => keys.push(key),
			Expr::ParenExpr(inner) => inner.collect_args(keys),
			Expr::BinaryExpr { lhs, rhs, .. } => {
				lhs.collect_args(keys);
				rhs.collect_args(keys);
			}
			_ => {}
		}
	}
}

impl fmt::Display for Expr {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Expr::BooleanLiteral(b) => write!(f, "{}", b),
			Expr::NumberLiteral(n) => write!(f, "{}", n),
			Expr::StringLiteral(s) => write!(f, "{:?}", s),
			Expr::SliceNumberLiteral(items) => {
				let parts: Vec<String> = items.iter().map(|n| n.to_string()).collect();
				write!(f, "({})", parts.join(", "))
			}
			Expr::SliceStringLiteral(items) => {
				let parts: Vec<String> =
					items.as_slice().iter().map(|s| format!("{:?}", s)).collect();
				write!(f, "({})", parts.join(", "))
			}
			Expr::NumberCollectionLiteral(set) => write!(f, "{}", set),
			Expr::StringCollectionLiteral(set) => write!(f, "{}", set),
			Expr::VarRef(key) => write!(f, "{{{}}}", key),
			Expr::ParenExpr(inner) => write!(f, "({})", inner),
			Expr::BinaryExpr { op, lhs, rhs } => write!(f, "{} {} {}", lhs, op, rhs),
		}
	}
}
