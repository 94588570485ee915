//! Property-based tests for tree evaluation.

use crate::properties::strategies::{expression, fixed_arguments, ARGUMENT_KEYS};
use conditions::{
	models::{Argument, Expr, Operator},
	services::condition::{ConditionEvaluator, EvaluationError, MapArgResolver},
};
use proptest::{prelude::*, test_runner::Config};
use std::mem::discriminant;

fn evaluator() -> ConditionEvaluator {
	ConditionEvaluator::with_epsilon(1e-6)
}

fn resolver() -> MapArgResolver {
	fixed_arguments().into_iter().collect()
}

fn same_outcome(a: &Result<bool, EvaluationError>, b: &Result<bool, EvaluationError>) -> bool {
	match (a, b) {
		(Ok(a), Ok(b)) => a == b,
		(Err(a), Err(b)) => discriminant(a) == discriminant(b),
		_ => false,
	}
}

proptest! {
	#![proptest_config(Config {
		failure_persistence: None,
		..Config::default()
	})]

	/// Property: wrapping an expression in parentheses never changes its outcome
	#[test]
	fn prop_parentheses_are_transparent(expr in expression()) {
		let args = resolver();
		let bare = evaluator().evaluate(&expr, &args);
		let wrapped = evaluator().evaluate(&Expr::paren(expr.clone()), &args);

		prop_assert!(same_outcome(&bare, &wrapped), "{}: {:?} vs {:?}", expr, bare, wrapped);
	}

	/// Property: evaluation is repeatable and leaves the tree untouched
	#[test]
	fn prop_evaluation_is_repeatable(expr in expression()) {
		let args = resolver();
		let before = expr.clone();

		let first = evaluator().evaluate(&expr, &args);
		let second = evaluator().evaluate(&expr, &args);

		prop_assert!(same_outcome(&first, &second));
		prop_assert_eq!(expr, before);
	}

	/// Property: a successful evaluation never references an unknown key
	#[test]
	fn prop_success_implies_all_keys_resolved(expr in expression()) {
		if evaluator().evaluate(&expr, &resolver()).is_ok() {
			prop_assert!(expr.args().iter().all(|key| ARGUMENT_KEYS.contains(key)));
		}
	}

	/// Property: double negation through NOT-style operators is the identity
	#[test]
	fn prop_double_negation(expr in expression(), flag in any::<bool>()) {
		let args = resolver();
		// x XOR true negates a boolean x
		let not = |inner: Expr| Expr::binary(Operator::Xor, Expr::paren(inner), Expr::boolean(true));

		let direct = evaluator().evaluate(&expr, &args);
		let twice = evaluator().evaluate(&not(not(expr.clone())), &args);

		match direct {
			Ok(verdict) => prop_assert_eq!(twice.unwrap(), verdict),
			Err(EvaluationError::InvalidRootResult(_)) => {
				prop_assert!(matches!(twice, Err(EvaluationError::TypeMismatch(_))));
			}
			Err(ref error) => prop_assert!(
				matches!(&twice, Err(e) if discriminant(e) == discriminant(error)),
				"{} changed error kind under negation", expr
			),
		}

		let literal = evaluator().evaluate(&not(not(Expr::boolean(flag))), &args).unwrap();
		prop_assert_eq!(literal, flag);
	}

	/// Property: a missing expression is reported regardless of the arguments
	#[test]
	fn prop_nil_expression_ignores_arguments(value in any::<i64>(), key in "[a-z]{1,8}") {
		let args: MapArgResolver = [(key, Argument::from(value))].into_iter().collect();
		prop_assert!(matches!(
			evaluator().evaluate(None::<&Expr>, &args),
			Err(EvaluationError::NilExpression(_))
		));
	}
}

