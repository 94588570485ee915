#![no_main]

use conditions::models::Operator;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let token = String::from_utf8_lossy(data);
    if let Ok(op) = token.parse::<Operator>() {
        assert_eq!(op.to_string().parse::<Operator>().ok(), Some(op));
    }
});
