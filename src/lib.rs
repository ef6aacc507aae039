//! # apidoc
//!
//! Allowable-value resolution for API documentation.
//!
//! Types opt in to documentation by reflection with
//! `#[allowable_values(by_reflection)]`; individual fields opt out with
//! `#[allowable_values(ignore)]`. The resolver then lists the remaining fields
//! in declaration order.
//!
//! ## Crates
//!
//! - [`introspect`] - Type descriptors, markers, the type registry and shape inference
//! - [`allowable`] - The allowable-value resolver and its settings
//!
//! ## Quick Example
//!
//! ```
//! use apidoc::prelude::*;
//!
//! #[derive(Introspect)]
//! #[allowable_values(by_reflection)]
//! struct Status {
//!     code: u16,
//!     #[allowable_values(ignore)]
//!     internal_note: String,
//!     label: Option<String>,
//! }
//!
//! let values = AllowableValueResolver::new()
//!     .resolve_type::<Status>()
//!     .unwrap();
//!
//! assert_eq!(values.names(), vec!["code", "label"]);
//! assert!(values.get("label").unwrap().nullable);
//! ```
//!
//! ## Feature Flags
//!
//! - `macros` (default) - Re-exports `#[derive(Introspect)]`

pub use apidoc_allowable as allowable;
pub use apidoc_introspect as introspect;

pub use apidoc_allowable::{
	AllowableError, AllowableResult, AllowableValue, AllowableValueResolver, AllowableValueSet,
	ResolverSettings,
};
pub use apidoc_introspect::{
	FieldDescriptor, Introspect, IntrospectError, IntrospectResult, Marker, MarkerSet,
	TypeDescriptor, TypeKind, TypeRegistry, ValueShape, global_registry,
};

/// Commonly used items for describing and resolving types.
pub mod prelude {
	pub use crate::{
		AllowableError, AllowableValue, AllowableValueResolver, AllowableValueSet,
		FieldDescriptor, Introspect, Marker, ResolverSettings, TypeDescriptor, TypeKind,
		TypeRegistry, global_registry,
	};
}
