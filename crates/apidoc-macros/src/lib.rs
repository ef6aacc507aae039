//! Procedural macros for apidoc.
//!
//! This crate provides the `#[derive(Introspect)]` macro that turns the
//! allowable-value markers written as attributes into a registered
//! `TypeDescriptor`.

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod attrs;
mod introspect_derive;

/// Derives an `Introspect` implementation and registers the type for discovery.
///
/// # Attributes
///
/// ## Type-level attributes
///
/// - `#[allowable_values(by_reflection)]` - compute this type's allowable values
///   from its declared fields
/// - `#[allowable_values(rename = "Name")]` - register under a different type name
/// - `#[allowable_values(crate = "path")]` - path to the introspection crate
///   (defaults to `::apidoc::introspect`)
///
/// ## Field-level attributes
///
/// - `#[allowable_values(ignore)]` - exclude the field from allowable values
/// - `#[allowable_values(rename = "name")]` - document the field under another name
///
/// Putting `ignore` on a type or `by_reflection` on a field is a compile error,
/// as is a `rename` that collides with another field's name.
///
/// # Example
///
/// ```ignore
/// use apidoc::prelude::*;
///
/// #[derive(Introspect)]
/// #[allowable_values(by_reflection)]
/// pub struct Status {
///     pub code: u16,
///     #[allowable_values(ignore)]
///     pub internal_note: String,
///     pub label: String,
/// }
/// ```
///
/// This generates:
///
/// ```ignore
/// impl ::apidoc::introspect::Introspect for Status {
///     fn type_descriptor() -> ::apidoc::introspect::TypeDescriptor {
///         ::apidoc::introspect::TypeDescriptor::new("Status", ::apidoc::introspect::TypeKind::Record)
///             .marker(::apidoc::introspect::Marker::ByReflection)
///             .field(::apidoc::introspect::FieldDescriptor::new("code", "u16"))
///             .field(
///                 ::apidoc::introspect::FieldDescriptor::new("internal_note", "String")
///                     .marker(::apidoc::introspect::Marker::Ignored),
///             )
///             .field(::apidoc::introspect::FieldDescriptor::new("label", "String"))
///     }
/// }
///
/// ::apidoc::introspect::__private::inventory::submit! {
///     ::apidoc::introspect::TypeRegistration::new(
///         "Status",
///         ::core::module_path!(),
///         <Status as ::apidoc::introspect::Introspect>::type_descriptor,
///     )
/// }
/// ```
#[proc_macro_derive(Introspect, attributes(allowable_values))]
pub fn derive_introspect(input: TokenStream) -> TokenStream {
	let input = parse_macro_input!(input as DeriveInput);
	introspect_derive::derive_introspect_impl(input)
		.unwrap_or_else(|err| err.to_compile_error())
		.into()
}
