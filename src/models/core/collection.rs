//! Membership collections used as the right-hand side of `IN` and the left-hand side of
//! `CONTAINS`.
//!
//! Two kinds exist:
//! - Sets ([`NumberSet`], [`StringSet`]): unordered, de-duplicated, O(1) membership. Hosts
//!   usually build them once and share them across evaluations.
//! - [`StringSlice`]: an ordered string sequence that also keeps a hash index so that
//!   membership stays O(1) for authored string lists.

use super::{
	argument::{parse_json_number, Argument},
	error::CollectionError,
};
use std::{
	collections::{HashMap, HashSet},
	fmt,
	hash::{Hash, Hasher},
};

/// Folds `-0.0` onto `0.0` so both zeros share one key.
fn number_key(number: f64) -> u64 {
	if number == 0.0 {
		0.0f64.to_bits()
	} else {
		number.to_bits()
	}
}

/// A set of numbers keyed by value.
///
/// `NaN` can be inserted but is never reported as a member, since it compares unequal to
/// everything including itself.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct NumberSet {
	items: HashSet<u64>,
}

impl NumberSet {
	pub fn new() -> Self {
		Self::default()
	}

	/// Builds a set from host arguments. Every element must be numeric (of any width, or a
	/// textual JSON number that parses).
	pub fn from_items(items: Vec<Argument>) -> Result<Self, CollectionError> {
		if items.is_empty() {
			return Err(CollectionError::empty("number set requires at least one item", None, None));
		}

		items
			.into_iter()
			.enumerate()
			.map(|(index, item)| match item {
				Argument::Numeric(n) => Ok(n.to_f64()),
				Argument::JsonNumber(text) => parse_json_number(&text).ok_or_else(|| {
					CollectionError::unsupported_kind(
						format!("json number '{}' at index {} is not a number", text, index),
						None,
						Some(HashMap::from([("index".to_string(), index.to_string())])),
					)
				}),
				other => Err(CollectionError::mixed_kinds(
					format!("expected a number at index {}, found {}", index, other.kind()),
					None,
					Some(HashMap::from([("index".to_string(), index.to_string())])),
				)),
			})
			.collect()
	}

	pub fn insert(&mut self, number: f64) -> bool {
		self.items.insert(number_key(number))
	}

	pub fn contains(&self, number: f64) -> bool {
		!number.is_nan() && self.items.contains(&number_key(number))
	}

	pub fn len(&self) -> usize {
		self.items.len()
	}

	pub fn is_empty(&self) -> bool {
		self.items.is_empty()
	}

	pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
		self.items.iter().map(|bits| f64::from_bits(*bits))
	}

	fn sorted(&self) -> Vec<f64> {
		let mut numbers: Vec<f64> = self.iter().collect();
		numbers.sort_by(f64::total_cmp);
		numbers
	}
}

impl FromIterator<f64> for NumberSet {
	fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
		let mut set = Self::new();
		for number in iter {
			set.insert(number);
		}
		set
	}
}

impl fmt::Display for NumberSet {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let parts: Vec<String> = self.sorted().iter().map(|n| n.to_string()).collect();
		write!(f, "[{}]", parts.join(", "))
	}
}

impl fmt::Debug for NumberSet {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_set().entries(self.sorted()).finish()
	}
}

/// A set of strings keyed by value.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct StringSet {
	items: HashSet<String>,
}

impl StringSet {
	pub fn new() -> Self {
		Self::default()
	}

	/// Builds a set from host arguments. Every element must be a plain string.
	pub fn from_items(items: Vec<Argument>) -> Result<Self, CollectionError> {
		if items.is_empty() {
			return Err(CollectionError::empty("string set requires at least one item", None, None));
		}

		items
			.into_iter()
			.enumerate()
			.map(|(index, item)| match item {
				Argument::Str(s) => Ok(s),
				other => Err(CollectionError::mixed_kinds(
					format!("expected a string at index {}, found {}", index, other.kind()),
					None,
					None,
				)),
			})
			.collect()
	}

	pub fn insert(&mut self, item: impl Into<String>) -> bool {
		self.items.insert(item.into())
	}

	pub fn contains(&self, item: &str) -> bool {
		self.items.contains(item)
	}

	pub fn len(&self) -> usize {
		self.items.len()
	}

	pub fn is_empty(&self) -> bool {
		self.items.is_empty()
	}

	pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
		self.items.iter().map(String::as_str)
	}

	fn sorted(&self) -> Vec<&str> {
		let mut items: Vec<&str> = self.iter().collect();
		items.sort_unstable();
		items
	}
}

impl FromIterator<String> for StringSet {
	fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
		Self {
			items: iter.into_iter().collect(),
		}
	}
}

impl<'a> FromIterator<&'a str> for StringSet {
	fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
		iter.into_iter().map(str::to_string).collect()
	}
}

impl fmt::Display for StringSet {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let parts: Vec<String> = self.sorted().iter().map(|s| format!("{:?}", s)).collect();
		write!(f, "[{}]", parts.join(", "))
	}
}

impl fmt::Debug for StringSet {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_set().entries(self.sorted()).finish()
	}
}

/// Either kind of set, as produced by [`Collection::from_items`].
#[derive(Debug, Clone, PartialEq)]
pub enum Collection {
	Numbers(NumberSet),
	Strings(StringSet),
}

impl Collection {
	/// Builds a set from a non-empty, homogeneous list of scalars.
	///
	/// The first element decides the kind: numbers (any width or a JSON number) produce a
	/// [`NumberSet`], strings a [`StringSet`]. Any other first element is rejected, as is a
	/// later element of a different kind.
	pub fn from_items(items: Vec<Argument>) -> Result<Self, CollectionError> {
		let first = items.first().ok_or_else(|| {
			CollectionError::empty("collection requires at least one item", None, None)
		})?;

		if first.is_numeric() {
			NumberSet::from_items(items).map(Collection::Numbers)
		} else if matches!(first, Argument::Str(_)) {
			StringSet::from_items(items).map(Collection::Strings)
		} else {
			Err(CollectionError::unsupported_kind(
				format!("cannot build a collection of {}", first.kind()),
				None,
				None,
			))
		}
	}

	pub fn len(&self) -> usize {
		match self {
			Collection::Numbers(set) => set.len(),
			Collection::Strings(set) => set.len(),
		}
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}
}

impl fmt::Display for Collection {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Collection::Numbers(set) => fmt::Display::fmt(set, f),
			Collection::Strings(set) => fmt::Display::fmt(set, f),
		}
	}
}

/// An ordered list of strings backed by a hash index for membership.
#[derive(Clone, Default)]
pub struct StringSlice {
	values: Vec<String>,
	index: HashSet<String>,
}

impl StringSlice {
	pub fn new(values: Vec<String>) -> Self {
		let index = values.iter().cloned().collect();
		Self { values, index }
	}

	pub fn contains(&self, item: &str) -> bool {
		self.index.contains(item)
	}

	pub fn as_slice(&self) -> &[String] {
		&self.values
	}

	pub fn len(&self) -> usize {
		self.values.len()
	}

	pub fn is_empty(&self) -> bool {
		self.values.is_empty()
	}
}

impl PartialEq for StringSlice {
	fn eq(&self, other: &Self) -> bool {
		self.values == other.values
	}
}

impl Eq for StringSlice {}

impl Hash for StringSlice {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.values.hash(state);
	}
}

impl From<Vec<String>> for StringSlice {
	fn from(values: Vec<String>) -> Self {
		Self::new(values)
	}
}

impl<'a> FromIterator<&'a str> for StringSlice {
	fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
		Self::new(iter.into_iter().map(str::to_string).collect())
	}
}

impl fmt::Debug for StringSlice {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_list().entries(&self.values).finish()
	}
}
