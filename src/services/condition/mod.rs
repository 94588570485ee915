//! Condition expression evaluation.
//!
//! A host supplies an [`Expr`](crate::models::Expr) tree together with an [`ArgResolver`];
//! the evaluator resolves every referenced argument, coerces it into the value model and
//! reduces the tree to a single boolean.
//!
//! - `coercion`: host argument to value conversion
//! - `error`: evaluation error types
//! - `evaluation`: tree walker and the [`ConditionEvaluator`] front door
//! - `operators`: semantics of each binary operator
//! - `resolver`: the resolver trait and its map, JSON and closure implementations
//! - `tolerance`: epsilon state and tolerant float comparison

mod coercion;
mod error;
mod evaluation;
mod operators;
mod resolver;
mod tolerance;

pub use coercion::coerce;
pub use error::EvaluationError;
pub use evaluation::{evaluate, evaluate_with_resolver, ConditionEvaluator};
pub use operators::{apply_operator, equal};
pub use resolver::{ArgResolver, FnArgResolver, MapArgResolver};
pub use tolerance::{
	default_epsilon, float64_equal, reset_default_epsilon, set_default_epsilon, DEFAULT_EPSILON,
};
