//! End-to-end evaluation scenarios over realistic argument sets.

use conditions::{
	models::{Argument, Collection, Expr, NumberSet, Operator, StringSet},
	services::condition::{evaluate, ConditionEvaluator, EvaluationError, MapArgResolver},
	utils::tests::builders::arguments::ArgumentsBuilder,
};
use serde_json::json;
use std::{collections::HashMap, sync::Arc};

fn evaluator() -> ConditionEvaluator {
	ConditionEvaluator::with_epsilon(1e-6)
}

/// `({age} >= 18 AND {country} IN ("US", "CA")) OR {role} == "admin"`
fn access_rule() -> Expr {
	Expr::binary(
		Operator::Or,
		Expr::paren(Expr::binary(
			Operator::And,
			Expr::binary(Operator::Gte, Expr::var("age"), Expr::number(18.0)),
			Expr::binary(Operator::In, Expr::var("country"), Expr::strings(["US", "CA"])),
		)),
		Expr::binary(Operator::Eq, Expr::var("role"), Expr::string("admin")),
	)
}

#[test]
fn test_access_rule_over_native_arguments() {
	let cases = [
		(25u32, "US", "user", true),
		(17, "US", "user", false),
		(17, "US", "admin", true),
		(40, "MX", "user", false),
		(18, "CA", "user", true),
	];

	for (age, country, role, expected) in cases {
		let args = ArgumentsBuilder::new()
			.with("age", age)
			.with("country", country)
			.with("role", role)
			.build();

		assert_eq!(
			evaluator().evaluate(&access_rule(), &args).unwrap(),
			expected,
			"age={} country={} role={}",
			age,
			country,
			role
		);
	}
}

#[test]
fn test_access_rule_over_decoded_json() {
	let args = ArgumentsBuilder::new()
		.with_json(json!({"age": 30, "country": "CA", "role": "user"}))
		.build();
	assert!(evaluator().evaluate(&access_rule(), &args).unwrap());

	let serde_json::Value::Object(document) = json!({"age": 12.5, "country": "US", "role": "user"})
	else {
		panic!("expected an object");
	};
	assert!(!evaluator().evaluate(&access_rule(), &document).unwrap());
}

#[test]
fn test_rendered_rule() {
	assert_eq!(
		access_rule().to_string(),
		r#"({age} >= 18 AND {country} IN ("US", "CA")) OR {role} == "admin""#
	);
}

#[test]
fn test_host_built_sets() {
	let blocked = Collection::from_items(vec![
		Argument::from(13u16),
		Argument::JsonNumber("42".to_string()),
	])
	.unwrap();
	let Collection::Numbers(blocked) = blocked else {
		panic!("expected a number collection");
	};

	let expr = Expr::binary(Operator::NotIn, Expr::var("id"), Expr::var("blocked"));

	let args = ArgumentsBuilder::new()
		.with("id", 7i64)
		.with("blocked", blocked.clone())
		.build();
	assert!(evaluator().evaluate(&expr, &args).unwrap());

	let args = ArgumentsBuilder::new()
		.with("id", 42i64)
		.with("blocked", blocked)
		.build();
	assert!(!evaluator().evaluate(&expr, &args).unwrap());
}

#[test]
fn test_shared_set_across_threads() {
	let regions = Arc::new(StringSet::from_iter(["eu-west", "us-east"]));
	let expr = Arc::new(Expr::binary(
		Operator::In,
		Expr::var("region"),
		Expr::StringCollectionLiteral(regions),
	));

	let handles: Vec<_> = ["eu-west", "ap-south", "us-east", "sa-east"]
		.into_iter()
		.map(|region| {
			let expr = Arc::clone(&expr);
			std::thread::spawn(move || {
				let args = ArgumentsBuilder::new().with("region", region).build();
				evaluator().evaluate(expr.as_ref(), &args).unwrap()
			})
		})
		.collect();

	let results: Vec<bool> = handles
		.into_iter()
		.map(|handle| handle.join().unwrap())
		.collect();
	assert_eq!(results, vec![true, false, true, false]);
}

#[test]
fn test_contains_over_argument_sequences() {
	let expr = Expr::binary(
		Operator::And,
		Expr::binary(Operator::Contains, Expr::var("tags"), Expr::string("beta")),
		Expr::binary(Operator::NotContains, Expr::var("scores"), Expr::number(0.0)),
	);

	let args = ArgumentsBuilder::new()
		.with("tags", vec!["alpha", "beta"])
		.with("scores", vec![1.5f32, 2.5, 3.5])
		.build();
	assert!(evaluator().evaluate(&expr, &args).unwrap());

	let args = ArgumentsBuilder::new()
		.with_json(json!({"tags": ["beta"], "scores": [0, 1]}))
		.build();
	assert!(!evaluator().evaluate(&expr, &args).unwrap());
}

#[test]
fn test_pattern_rules() {
	let expr = Expr::binary(
		Operator::And,
		Expr::binary(Operator::Ereg, Expr::var("email"), Expr::string(r"^[^@]+@corp\.io$")),
		Expr::binary(Operator::Nereg, Expr::var("email"), Expr::string("^test")),
	);

	let args = ArgumentsBuilder::new().with("email", "dana@corp.io").build();
	assert!(evaluator().evaluate(&expr, &args).unwrap());

	let args = ArgumentsBuilder::new().with("email", "test@corp.io").build();
	assert!(!evaluator().evaluate(&expr, &args).unwrap());
}

#[test]
fn test_error_kinds_surface_unchanged() {
	let args = ArgumentsBuilder::new()
		.with("age", "25")
		.with("profile", Argument::Object(Default::default()))
		.with("flag", true)
		.build();

	let cases: Vec<(Expr, fn(&EvaluationError) -> bool)> = vec![
		(
			Expr::binary(Operator::Gt, Expr::var("age"), Expr::number(18.0)),
			|e| matches!(e, EvaluationError::TypeMismatch(_)),
		),
		(
			Expr::binary(Operator::Eq, Expr::var("profile"), Expr::string("x")),
			|e| matches!(e, EvaluationError::UnsupportedType(_)),
		),
		(
			Expr::binary(Operator::Eq, Expr::var("nobody"), Expr::string("x")),
			|e| matches!(e, EvaluationError::KeyNotResolved(_)),
		),
		(
			Expr::binary(Operator::Ereg, Expr::string("x"), Expr::string("(")),
			|e| matches!(e, EvaluationError::InvalidPattern(_)),
		),
		(
			Expr::var("age"),
			|e| matches!(e, EvaluationError::InvalidRootResult(_)),
		),
		(
			Expr::binary(Operator::And, Expr::var("flag"), Expr::number(1.0)),
			|e| matches!(e, EvaluationError::TypeMismatch(_)),
		),
	];

	for (expr, is_expected) in cases {
		let error = evaluator().evaluate(&expr, &args).unwrap_err();
		assert!(is_expected(&error), "{} produced {}", expr, error);
	}
}

#[test]
fn test_operator_tokens_from_parser() {
	let op: Operator = "not in".parse().unwrap();
	let expr = Expr::binary(op, Expr::var("n"), Expr::numbers([1.0, 2.0]));
	let args = HashMap::from([("n".to_string(), Argument::from(3u64))]);
	assert!(evaluate(&expr, &args).unwrap());

	let error = "BETWEEN".parse::<Operator>().unwrap_err();
	assert!(matches!(error, EvaluationError::InvalidOperator(_)));
	assert_eq!(error.context().metadata_value("operator"), Some("BETWEEN"));
}

#[test]
fn test_number_set_from_iterator_and_empty_sequence() {
	let expr = Expr::binary(Operator::In, Expr::var("code"), Expr::var("codes"));

	let args = ArgumentsBuilder::new()
		.with("code", 404)
		.with("codes", NumberSet::from_iter([400.0, 404.0]))
		.build();
	assert!(evaluator().evaluate(&expr, &args).unwrap());

	let args = MapArgResolver::from_iter([
		("code", Argument::from(404)),
		("codes", Argument::from(Vec::<i32>::new())),
	]);
	assert!(!evaluator().evaluate(&expr, &args).unwrap());
}
