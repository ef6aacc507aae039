//! Type and field descriptors.
//!
//! A [`TypeDescriptor`] is the registered schema of one type: its kind, the
//! markers attached to it, and its declared fields in declaration order.
//! Descriptors are plain values built once (by hand or by
//! `#[derive(Introspect)]`) and read by the resolver without mutation.

use crate::error::{IntrospectError, IntrospectResult};
use crate::marker::{Marker, MarkerSet, MarkerTarget};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Structural kind of a described type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeKind {
	/// Struct with named fields. The only field-bearing kind.
	Record,
	/// Tuple struct or newtype; fields have positions, not names.
	Tuple,
	/// Primitive or string-like value.
	Scalar,
	/// Sequence, slice, array or map.
	Collection,
	/// Enum.
	Enumeration,
}

impl TypeKind {
	/// Whether types of this kind expose named fields.
	pub const fn is_field_bearing(self) -> bool {
		matches!(self, TypeKind::Record)
	}
}

impl fmt::Display for TypeKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let name = match self {
			TypeKind::Record => "record",
			TypeKind::Tuple => "tuple",
			TypeKind::Scalar => "scalar",
			TypeKind::Collection => "collection",
			TypeKind::Enumeration => "enumeration",
		};
		f.write_str(name)
	}
}

/// One declared field of a type.
///
/// # Examples
///
/// ```
/// use apidoc_introspect::{FieldDescriptor, Marker};
///
/// let field = FieldDescriptor::new("internal_note", "String").ignored();
/// assert_eq!(field.name(), "internal_note");
/// assert!(field.has_marker(Marker::Ignored));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
	name: String,
	value_type: String,
	markers: MarkerSet,
}

impl FieldDescriptor {
	/// Creates an unmarked field with the declared value type spelled as in
	/// source, e.g. `"Option<String>"`.
	pub fn new(name: impl Into<String>, value_type: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			value_type: value_type.into(),
			markers: MarkerSet::empty(),
		}
	}

	pub fn marker(mut self, marker: Marker) -> Self {
		self.markers.insert(marker);
		self
	}

	/// Shorthand for `.marker(Marker::Ignored)`.
	pub fn ignored(self) -> Self {
		self.marker(Marker::Ignored)
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn value_type(&self) -> &str {
		&self.value_type
	}

	pub fn markers(&self) -> MarkerSet {
		self.markers
	}

	pub fn has_marker(&self, marker: Marker) -> bool {
		self.markers.contains(marker)
	}

	pub fn is_ignored(&self) -> bool {
		self.has_marker(Marker::Ignored)
	}
}

/// Registered schema of one type.
///
/// # Examples
///
/// ```
/// use apidoc_introspect::{FieldDescriptor, Marker, TypeDescriptor, TypeKind};
///
/// let status = TypeDescriptor::record("Status")
///     .by_reflection()
///     .field(FieldDescriptor::new("code", "u16"))
///     .field(FieldDescriptor::new("internal_note", "String").ignored())
///     .field(FieldDescriptor::new("label", "String"));
///
/// assert_eq!(status.kind(), TypeKind::Record);
/// assert!(status.has_marker(Marker::ByReflection));
/// assert_eq!(status.fields().len(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDescriptor {
	name: String,
	kind: TypeKind,
	markers: MarkerSet,
	fields: Vec<FieldDescriptor>,
}

impl TypeDescriptor {
	/// Creates a descriptor of the given kind with no markers and no fields.
	pub fn new(name: impl Into<String>, kind: TypeKind) -> Self {
		Self {
			name: name.into(),
			kind,
			markers: MarkerSet::empty(),
			fields: Vec::new(),
		}
	}

	pub fn record(name: impl Into<String>) -> Self {
		Self::new(name, TypeKind::Record)
	}

	pub fn tuple(name: impl Into<String>) -> Self {
		Self::new(name, TypeKind::Tuple)
	}

	pub fn scalar(name: impl Into<String>) -> Self {
		Self::new(name, TypeKind::Scalar)
	}

	pub fn collection(name: impl Into<String>) -> Self {
		Self::new(name, TypeKind::Collection)
	}

	pub fn enumeration(name: impl Into<String>) -> Self {
		Self::new(name, TypeKind::Enumeration)
	}

	pub fn marker(mut self, marker: Marker) -> Self {
		self.markers.insert(marker);
		self
	}

	/// Shorthand for `.marker(Marker::ByReflection)`.
	pub fn by_reflection(self) -> Self {
		self.marker(Marker::ByReflection)
	}

	/// Appends a field after the ones already declared.
	pub fn field(mut self, field: FieldDescriptor) -> Self {
		self.fields.push(field);
		self
	}

	pub fn with_fields(mut self, fields: impl IntoIterator<Item = FieldDescriptor>) -> Self {
		self.fields.extend(fields);
		self
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn kind(&self) -> TypeKind {
		self.kind
	}

	pub fn markers(&self) -> MarkerSet {
		self.markers
	}

	pub fn has_marker(&self, marker: Marker) -> bool {
		self.markers.contains(marker)
	}

	pub fn is_field_bearing(&self) -> bool {
		self.kind.is_field_bearing()
	}

	/// Declared fields in declaration order.
	pub fn fields(&self) -> &[FieldDescriptor] {
		&self.fields
	}

	/// Looks up a field by name.
	pub fn get_field(&self, name: &str) -> Option<&FieldDescriptor> {
		self.fields.iter().find(|f| f.name() == name)
	}

	/// Checks marker placement and field-name uniqueness.
	///
	/// The resolver assumes descriptors passed this check; registries run it on
	/// every registration.
	///
	/// # Examples
	///
	/// ```
	/// use apidoc_introspect::{FieldDescriptor, IntrospectError, Marker, TypeDescriptor};
	///
	/// let bad = TypeDescriptor::record("Status")
	///     .field(FieldDescriptor::new("code", "u16").marker(Marker::ByReflection));
	/// assert!(matches!(
	///     bad.validate(),
	///     Err(IntrospectError::MisplacedMarker { .. })
	/// ));
	/// ```
	pub fn validate(&self) -> IntrospectResult<()> {
		if let Some(marker) = self
			.markers
			.iter()
			.find(|m| m.target() != MarkerTarget::Type)
		{
			return Err(IntrospectError::MisplacedMarker {
				element: self.name.clone(),
				marker,
				target: MarkerTarget::Type,
			});
		}

		let mut seen = HashSet::with_capacity(self.fields.len());
		for field in &self.fields {
			if let Some(marker) = field
				.markers
				.iter()
				.find(|m| m.target() != MarkerTarget::Field)
			{
				return Err(IntrospectError::MisplacedMarker {
					element: format!("{}.{}", self.name, field.name),
					marker,
					target: MarkerTarget::Field,
				});
			}
			if !seen.insert(field.name.as_str()) {
				return Err(IntrospectError::DuplicateField {
					type_name: self.name.clone(),
					field: field.name.clone(),
				});
			}
		}

		Ok(())
	}
}
