#![no_main]

use conditions::{
    models::{Expr, Operator},
    services::condition::{ConditionEvaluator, MapArgResolver},
};
use libfuzzer_sys::fuzz_target;

fn rules() -> Vec<Expr> {
    vec![
        Expr::binary(Operator::Gt, Expr::var("a"), Expr::number(18.0)),
        Expr::binary(Operator::Eq, Expr::var("a"), Expr::var("b")),
        Expr::binary(Operator::In, Expr::var("a"), Expr::var("b")),
        Expr::binary(Operator::Contains, Expr::var("a"), Expr::var("b")),
        Expr::binary(Operator::Ereg, Expr::var("a"), Expr::string("^[0-9]+$")),
        Expr::binary(
            Operator::Xor,
            Expr::paren(Expr::binary(Operator::Lte, Expr::var("a"), Expr::number(0.0))),
            Expr::binary(Operator::NotIn, Expr::var("b"), Expr::strings(["x", "y"])),
        ),
        Expr::var("a"),
    ]
}

fuzz_target!(|data: &[u8]| {
    let Ok(serde_json::Value::Object(document)) = serde_json::from_slice(data) else {
        return;
    };

    let resolver = MapArgResolver::from_json(document);
    let evaluator = ConditionEvaluator::with_epsilon(1e-6);
    for rule in rules() {
        let _ = evaluator.evaluate(&rule, &resolver);
    }
});
