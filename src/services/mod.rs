//! Core services implementing the evaluation logic.
//!
//! - `condition`: Argument resolution, coercion, operator semantics and tree evaluation

pub mod condition;
