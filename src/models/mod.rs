//! Domain models and data structures for condition evaluation.
//!
//! This module contains the data types shared by the evaluator and its hosts:
//!
//! - Core: expression trees, operators, host arguments, values and collections
//! - Configuration: evaluator settings and their loading/validation

mod config;
mod core;

pub use config::{ConfigError, ConfigLoader, EvaluatorConfig, EPSILON_ENV_VAR};

pub use core::{
	parse_json_number, Argument, Collection, CollectionError, Expr, NumberSet, Numeric,
	NumericVec, Operator, StringSet, StringSlice, Value,
};
