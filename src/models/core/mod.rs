//! Core data types of the condition language: expression trees, host arguments, evaluation
//! values and membership collections.

mod argument;
mod collection;
mod error;
mod expression;
mod value;

pub use argument::{parse_json_number, Argument, Numeric, NumericVec};
pub use collection::{Collection, NumberSet, StringSet, StringSlice};
pub use error::CollectionError;
pub use expression::{Expr, Operator};
pub use value::Value;
