#![no_main]

use conditions::{
    models::{Expr, Operator},
    services::condition::{ConditionEvaluator, MapArgResolver},
};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let text = String::from_utf8_lossy(data);
    let (subject, pattern) = text.split_once('\u{0}').unwrap_or((&*text, ".*"));

    let expr = Expr::binary(
        Operator::Ereg,
        Expr::string(subject),
        Expr::string(pattern),
    );
    let _ = ConditionEvaluator::with_epsilon(1e-6).evaluate(&expr, &MapArgResolver::default());
});
