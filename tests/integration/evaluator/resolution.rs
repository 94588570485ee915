//! Tests of how the evaluator consults its argument resolver.

use crate::integration::mocks::MockArgResolver;
use conditions::{
	models::{Argument, Expr, Operator},
	services::condition::{ConditionEvaluator, EvaluationError, FnArgResolver},
};
use mockall::Sequence;
use std::cell::RefCell;

fn evaluator() -> ConditionEvaluator {
	ConditionEvaluator::with_epsilon(1e-6)
}

#[test]
fn test_both_operands_are_resolved_left_to_right() {
	let mut resolver = MockArgResolver::new();
	let mut seq = Sequence::new();

	resolver
		.expect_resolve()
		.withf(|key: &str| key == "enabled")
		.times(1)
		.in_sequence(&mut seq)
		.returning(|_| Ok(Argument::from(false)));
	resolver
		.expect_resolve()
		.withf(|key: &str| key == "beta")
		.times(1)
		.in_sequence(&mut seq)
		.returning(|_| Ok(Argument::from(true)));

	let expr = Expr::binary(Operator::And, Expr::var("enabled"), Expr::var("beta"));
	assert!(!evaluator().evaluate(&expr, &resolver).unwrap());
}

#[test]
fn test_or_does_not_short_circuit() {
	let mut resolver = MockArgResolver::new();
	resolver
		.expect_resolve()
		.withf(|key: &str| key == "fallback")
		.times(1)
		.returning(|_| Ok(Argument::from(false)));

	let expr = Expr::binary(Operator::Or, Expr::boolean(true), Expr::var("fallback"));
	assert!(evaluator().evaluate(&expr, &resolver).unwrap());
}

#[test]
fn test_resolver_error_is_returned_unchanged() {
	let mut resolver = MockArgResolver::new();
	resolver.expect_resolve().times(1).returning(|key| {
		Err(EvaluationError::key_not_resolved(
			format!("argument by key {} not found", key),
			None,
			None,
		))
	});

	let expr = Expr::binary(Operator::Gt, Expr::var("age"), Expr::number(18.0));
	let error = evaluator().evaluate(&expr, &resolver).unwrap_err();

	assert!(matches!(error, EvaluationError::KeyNotResolved(_)));
	assert_eq!(
		error.to_string(),
		"Key not resolved: argument by key age not found"
	);
}

#[test]
fn test_nil_expression_never_consults_resolver() {
	let mut resolver = MockArgResolver::new();
	resolver.expect_resolve().never();

	let result = evaluator().evaluate(None::<&Expr>, &resolver);
	assert!(matches!(result, Err(EvaluationError::NilExpression(_))));
}

#[test]
fn test_repeated_keys_are_resolved_each_time() {
	let calls = RefCell::new(Vec::new());
	let resolver = FnArgResolver::new(|key| {
		calls.borrow_mut().push(key.to_string());
		Some(Argument::from(10u8))
	});

	let expr = Expr::binary(
		Operator::And,
		Expr::binary(Operator::Gte, Expr::var("n"), Expr::number(10.0)),
		Expr::binary(Operator::Lte, Expr::var("n"), Expr::number(10.0)),
	);

	assert!(evaluator().evaluate(&expr, &resolver).unwrap());
	assert_eq!(*calls.borrow(), vec!["n".to_string(), "n".to_string()]);
	assert_eq!(expr.args(), vec!["n", "n"]);
}

#[test]
fn test_same_tree_against_different_resolvers() {
	let expr = Expr::binary(Operator::Eq, Expr::var("plan"), Expr::string("pro"));

	let pro = FnArgResolver::new(|_| Some(Argument::from("pro")));
	let free = FnArgResolver::new(|_| Some(Argument::from("free")));

	assert!(evaluator().evaluate(&expr, &pro).unwrap());
	assert!(!evaluator().evaluate(&expr, &free).unwrap());
}
