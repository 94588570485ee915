//! Tests for loading evaluator settings from files.

use conditions::{
	models::{ConfigError, ConfigLoader, EvaluatorConfig, Expr, Operator},
	services::condition::{ConditionEvaluator, MapArgResolver},
	utils::logging::error::TraceableError,
};
use std::io::Write;
use tempfile::{Builder, TempDir};

fn write_file(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
	let path = dir.path().join(name);
	let mut file = std::fs::File::create(&path).unwrap();
	file.write_all(content.as_bytes()).unwrap();
	path
}

#[test]
fn test_loaded_epsilon_drives_evaluation() {
	let dir = TempDir::new().unwrap();
	let loose = write_file(&dir, "loose.json", r#"{"epsilon": 0.01}"#);
	let strict = write_file(&dir, "strict.json", r#"{"epsilon": 1e-12}"#);

	let expr = Expr::binary(Operator::Eq, Expr::number(10.0), Expr::number(10.001));
	let args = MapArgResolver::default();

	let loose = ConditionEvaluator::from_config(&EvaluatorConfig::load_from_path(&loose).unwrap());
	let strict =
		ConditionEvaluator::from_config(&EvaluatorConfig::load_from_path(&strict).unwrap());

	assert!(loose.evaluate(&expr, &args).unwrap());
	assert!(!strict.evaluate(&expr, &args).unwrap());
}

#[test]
fn test_invalid_files_are_rejected() {
	let dir = TempDir::new().unwrap();

	let zero = write_file(&dir, "zero.json", r#"{"epsilon": 0}"#);
	let error = EvaluatorConfig::load_from_path(&zero).unwrap_err();
	assert!(matches!(error, ConfigError::ValidationError(_)));
	assert!(!error.trace_id().is_empty());

	let broken = write_file(&dir, "broken.json", "{ epsilon: ");
	assert!(matches!(
		EvaluatorConfig::load_from_path(&broken),
		Err(ConfigError::ParseError(_))
	));

	let text = write_file(&dir, "settings.toml", "epsilon = 0.1");
	assert!(matches!(
		EvaluatorConfig::load_from_path(&text),
		Err(ConfigError::FileError(_))
	));
}

#[test]
fn test_parse_error_keeps_serde_source() {
	let mut file = Builder::new().suffix(".json").tempfile().unwrap();
	file.write_all(br#"{"epsilon": true}"#).unwrap();

	let Err(ConfigError::ParseError(ctx)) = EvaluatorConfig::load_from_path(file.path()) else {
		panic!("expected a parse error");
	};
	assert!(ctx.source.is_some());
	assert!(ctx.metadata_value("path").is_some());
}
