//! Allowable value descriptors and the ordered set the resolver returns.

use apidoc_introspect::ValueShape;
use serde::{Deserialize, Serialize};

/// One allowable value: a non-ignored field of a by-reflection type.
///
/// Serializes flat, with the shape's `type` keyword alongside the field name:
///
/// ```
/// use apidoc_allowable::AllowableValue;
/// use apidoc_introspect::ValueShape;
///
/// let value = AllowableValue::new("code", "u16", ValueShape::Integer);
/// assert_eq!(
///     serde_json::to_value(&value).unwrap(),
///     serde_json::json!({"name": "code", "valueType": "u16", "type": "integer"})
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllowableValue {
	/// Field name as documented.
	pub name: String,
	/// Declared Rust type spelling.
	pub value_type: String,
	/// Documentation shape of the declared type.
	#[serde(flatten)]
	pub shape: ValueShape,
	/// Declared as `Option<..>`.
	#[serde(default, skip_serializing_if = "std::ops::Not::not")]
	pub nullable: bool,
}

impl AllowableValue {
	/// A non-nullable value.
	pub fn new(name: impl Into<String>, value_type: impl Into<String>, shape: ValueShape) -> Self {
		Self {
			name: name.into(),
			value_type: value_type.into(),
			shape,
			nullable: false,
		}
	}

	/// Marks the value as nullable.
	pub fn nullable(mut self, nullable: bool) -> Self {
		self.nullable = nullable;
		self
	}
}

/// Ordered allowable values of one type, in field declaration order.
///
/// Names are unique; collecting from an iterator keeps the first value of
/// each name.
///
/// # Examples
///
/// ```
/// use apidoc_allowable::{AllowableValue, AllowableValueSet};
/// use apidoc_introspect::ValueShape;
///
/// let set: AllowableValueSet = vec![
///     AllowableValue::new("code", "u16", ValueShape::Integer),
///     AllowableValue::new("label", "String", ValueShape::String),
/// ]
/// .into_iter()
/// .collect();
///
/// assert_eq!(set.names(), vec!["code", "label"]);
/// assert!(set.contains("label"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<AllowableValue>", into = "Vec<AllowableValue>")]
pub struct AllowableValueSet {
	values: Vec<AllowableValue>,
}

impl AllowableValueSet {
	/// An empty set.
	pub fn new() -> Self {
		Self::default()
	}

	/// Number of allowable values.
	pub fn len(&self) -> usize {
		self.values.len()
	}

	/// True when no field survived resolution.
	pub fn is_empty(&self) -> bool {
		self.values.is_empty()
	}

	/// Iterates the values in declaration order.
	pub fn iter(&self) -> std::slice::Iter<'_, AllowableValue> {
		self.values.iter()
	}

	/// Allowable names in order; the enumeration documentation renders.
	pub fn names(&self) -> Vec<&str> {
		self.values.iter().map(|v| v.name.as_str()).collect()
	}

	/// Looks a value up by documented name.
	pub fn get(&self, name: &str) -> Option<&AllowableValue> {
		self.values.iter().find(|v| v.name == name)
	}

	/// True when `name` is an allowable value.
	pub fn contains(&self, name: &str) -> bool {
		self.get(name).is_some()
	}

	/// The values as a slice.
	pub fn as_slice(&self) -> &[AllowableValue] {
		&self.values
	}

	/// Consumes the set, returning the values.
	pub fn into_vec(self) -> Vec<AllowableValue> {
		self.values
	}

	pub(crate) fn push(&mut self, value: AllowableValue) {
		self.values.push(value);
	}
}

impl From<Vec<AllowableValue>> for AllowableValueSet {
	fn from(values: Vec<AllowableValue>) -> Self {
		values.into_iter().collect()
	}
}

impl From<AllowableValueSet> for Vec<AllowableValue> {
	fn from(set: AllowableValueSet) -> Self {
		set.values
	}
}

impl FromIterator<AllowableValue> for AllowableValueSet {
	fn from_iter<I: IntoIterator<Item = AllowableValue>>(iter: I) -> Self {
		let mut set = Self::new();
		for value in iter {
			if !set.contains(&value.name) {
				set.push(value);
			}
		}
		set
	}
}

impl IntoIterator for AllowableValueSet {
	type Item = AllowableValue;
	type IntoIter = std::vec::IntoIter<AllowableValue>;

	fn into_iter(self) -> Self::IntoIter {
		self.values.into_iter()
	}
}

impl<'a> IntoIterator for &'a AllowableValueSet {
	type Item = &'a AllowableValue;
	type IntoIter = std::slice::Iter<'a, AllowableValue>;

	fn into_iter(self) -> Self::IntoIter {
		self.values.iter()
	}
}
