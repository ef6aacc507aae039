//! Allowable-value markers and marker sets.
//!
//! Markers are inert tags attached to types and fields. They carry no logic of
//! their own; the resolver in `apidoc-allowable` reads them to decide which
//! fields become allowable values.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Program element a marker may be attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerTarget {
	/// A type (struct, enum, alias).
	Type,
	/// A declared field of a type.
	Field,
}

impl fmt::Display for MarkerTarget {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			MarkerTarget::Type => f.write_str("type"),
			MarkerTarget::Field => f.write_str("field"),
		}
	}
}

/// Allowable-value marker.
///
/// # Examples
///
/// ```
/// use apidoc_introspect::{Marker, MarkerTarget};
///
/// assert_eq!(Marker::Ignored.target(), MarkerTarget::Field);
/// assert_eq!(Marker::ByReflection.target(), MarkerTarget::Type);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Marker {
	/// Excludes a field from allowable-value computation.
	Ignored,
	/// Computes a type's allowable values from its declared fields.
	ByReflection,
}

impl Marker {
	/// All markers, in bit order.
	pub const ALL: [Marker; 2] = [Marker::Ignored, Marker::ByReflection];

	/// The only element kind this marker may be attached to.
	pub const fn target(self) -> MarkerTarget {
		match self {
			Marker::Ignored => MarkerTarget::Field,
			Marker::ByReflection => MarkerTarget::Type,
		}
	}

	const fn bit(self) -> u8 {
		match self {
			Marker::Ignored => 0b01,
			Marker::ByReflection => 0b10,
		}
	}
}

impl fmt::Display for Marker {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Marker::Ignored => f.write_str("AllowableValueIgnored"),
			Marker::ByReflection => f.write_str("AllowableValuesByReflection"),
		}
	}
}

/// Set of markers present on one type or field.
///
/// # Examples
///
/// ```
/// use apidoc_introspect::{Marker, MarkerSet};
///
/// let markers = MarkerSet::empty().with(Marker::Ignored);
/// assert!(markers.contains(Marker::Ignored));
/// assert!(!markers.contains(Marker::ByReflection));
/// ```
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct MarkerSet {
	bits: u8,
}

impl MarkerSet {
	/// A set with no markers.
	pub const fn empty() -> Self {
		Self { bits: 0 }
	}

	/// Returns a copy of this set with `marker` added.
	pub const fn with(self, marker: Marker) -> Self {
		Self {
			bits: self.bits | marker.bit(),
		}
	}

	/// Adds `marker` in place.
	pub fn insert(&mut self, marker: Marker) {
		self.bits |= marker.bit();
	}

	/// Removes `marker` in place.
	pub fn remove(&mut self, marker: Marker) {
		self.bits &= !marker.bit();
	}

	pub const fn contains(&self, marker: Marker) -> bool {
		self.bits & marker.bit() != 0
	}

	pub const fn is_empty(&self) -> bool {
		self.bits == 0
	}

	/// Iterates over the markers present, in bit order.
	pub fn iter(&self) -> impl Iterator<Item = Marker> + '_ {
		Marker::ALL.into_iter().filter(|m| self.contains(*m))
	}
}

impl fmt::Debug for MarkerSet {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_set().entries(self.iter()).finish()
	}
}

impl FromIterator<Marker> for MarkerSet {
	fn from_iter<I: IntoIterator<Item = Marker>>(iter: I) -> Self {
		iter.into_iter().fold(Self::empty(), MarkerSet::with)
	}
}

impl From<Marker> for MarkerSet {
	fn from(marker: Marker) -> Self {
		Self::empty().with(marker)
	}
}
