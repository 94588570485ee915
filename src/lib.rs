//! Boolean condition expression evaluator.
//!
//! This library evaluates a small condition language (`{age} > 18 AND {country} IN ("US",
//! "CA")`) against a runtime set of named arguments and returns a single verdict. It
//! includes:
//!
//! - An expression tree produced by an external parser
//! - Coercion of host-typed arguments (any numeric width, textual JSON numbers, strings,
//!   booleans, vectors and pre-built sets) into one value model
//! - Operator semantics with tolerant float comparison
//! - Evaluator settings loaded from JSON files or the environment
//!
//! # Module Structure
//!
//! - `models`: Expression trees, host arguments, values, collections and settings
//! - `services`: Argument resolution and expression evaluation
//! - `utils`: Logging, error context and test helpers
//!
//! # Example
//!
//! ```
//! use conditions::{
//! 	models::{Expr, Operator},
//! 	services::condition::{ConditionEvaluator, MapArgResolver},
//! };
//!
//! let expr = Expr::binary(
//! 	Operator::And,
//! 	Expr::binary(Operator::Gt, Expr::var("age"), Expr::number(18.0)),
//! 	Expr::binary(Operator::In, Expr::var("country"), Expr::strings(["US", "CA"])),
//! );
//! let mut args = MapArgResolver::default();
//! args.insert("age", 25);
//! args.insert("country", "CA");
//!
//! assert!(ConditionEvaluator::new().evaluate(&expr, &args).unwrap());
//! ```

pub mod models;
pub mod services;
pub mod utils;
