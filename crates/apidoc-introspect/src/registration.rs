//! Compile-time type registration infrastructure
//!
//! `#[derive(Introspect)]` submits one [`TypeRegistration`] per non-generic
//! type through the `inventory` crate. The entries are collected into the
//! [`global_registry`](crate::global_registry) on first access, so
//! documentation tooling can find every described type without explicit
//! registration calls.
//!
//! Registrations are keyed by type name alone. When two modules submit the
//! same name, neither is registered; give one of them a distinct name with
//! `#[allowable_values(rename = "...")]`.
//!
//! # Example
//!
//! ```rust,ignore
//! use apidoc::prelude::*;
//!
//! #[derive(Introspect)]
//! #[allowable_values(by_reflection)]
//! pub struct Status {
//!     pub code: u16,
//!     #[allowable_values(ignore)]
//!     pub internal_note: String,
//! }
//!
//! // The derive also generates:
//! // inventory::submit! {
//! //     TypeRegistration::new(
//! //         "Status",
//! //         module_path!(),
//! //         <Status as Introspect>::type_descriptor,
//! //     )
//! // }
//! ```

use crate::descriptor::TypeDescriptor;

/// Compile-time registration entry for one described type.
pub struct TypeRegistration {
	/// Type name used as the registry key
	pub name: &'static str,
	/// Module that declared the type
	pub module_path: &'static str,
	/// Descriptor generator function
	pub describe: fn() -> TypeDescriptor,
}

impl TypeRegistration {
	/// Create a new registration entry
	///
	/// # Example
	///
	/// ```rust
	/// use apidoc_introspect::{Introspect, TypeDescriptor, TypeRegistration};
	///
	/// struct Empty;
	///
	/// impl Introspect for Empty {
	///     fn type_descriptor() -> TypeDescriptor {
	///         TypeDescriptor::record("Empty").by_reflection()
	///     }
	/// }
	///
	/// const REGISTRATION: TypeRegistration =
	///     TypeRegistration::new("Empty", module_path!(), <Empty as Introspect>::type_descriptor);
	/// assert_eq!((REGISTRATION.describe)().name(), "Empty");
	/// ```
	pub const fn new(
		name: &'static str,
		module_path: &'static str,
		describe: fn() -> TypeDescriptor,
	) -> Self {
		Self {
			name,
			module_path,
			describe,
		}
	}
}

inventory::collect!(TypeRegistration);
