//! Mock implementations for testing purposes.
//!
//! The evaluator only talks to the outside world through [`ArgResolver`], so that is the one
//! trait mocked here. The mocks are implemented using the `mockall` crate.

use conditions::{
	models::Argument,
	services::condition::{ArgResolver, EvaluationError},
};
use mockall::mock;

mock! {
	pub ArgResolver {}

	impl ArgResolver for ArgResolver {
		fn resolve(&self, key: &str) -> Result<Argument, EvaluationError>;
	}
}
