//! Type introspection for allowable-value documentation.
//!
//! This crate is the schema-registration layer that replaces runtime
//! reflection: every documented type describes itself once as a
//! [`TypeDescriptor`], carrying its [`TypeKind`], its [`Marker`]s and its
//! declared fields in declaration order.
//!
//! - [`Introspect`] - types that can produce their own descriptor
//!   (derive it with `#[derive(Introspect)]`, enabled by the `macros` feature)
//! - [`TypeRegistry`] - ordered, thread-safe side table of descriptors
//! - [`global_registry`] - registry of every derived type, collected via `inventory`
//! - [`ShapeInferencer`] - maps declared type spellings to documentation shapes
//!
//! # Features
//!
//! - `macros` - re-exports the `Introspect` derive (enabled by default)

pub mod descriptor;
pub mod error;
pub mod introspect;
pub mod marker;
pub mod registration;
pub mod registry;
pub mod shape;

pub use descriptor::{FieldDescriptor, TypeDescriptor, TypeKind};
pub use error::{IntrospectError, IntrospectResult};
pub use introspect::Introspect;
pub use marker::{Marker, MarkerSet, MarkerTarget};
pub use registration::TypeRegistration;
pub use registry::{TypeRegistry, global_registry};
pub use shape::{InferredShape, ShapeInferencer, ValueShape};

#[cfg(feature = "macros")]
pub use apidoc_macros::Introspect;

#[doc(hidden)]
pub mod __private {
	pub use inventory;
}
