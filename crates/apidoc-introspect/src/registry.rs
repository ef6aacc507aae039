//! Type registry: the side table that stands in for runtime reflection.
//!
//! Each documented type registers its descriptor once, either explicitly via
//! [`TypeRegistry::register`] or automatically through `#[derive(Introspect)]`
//! and the [`global_registry`]. Lookups clone descriptors out, so no lock is
//! held while a caller resolves allowable values.

use crate::descriptor::TypeDescriptor;
use crate::error::IntrospectResult;
use crate::introspect::Introspect;
use crate::registration::TypeRegistration;
use indexmap::IndexMap;
use parking_lot::RwLock;
use std::sync::{Arc, LazyLock};

/// Thread-safe, insertion-ordered registry of type descriptors keyed by name.
///
/// # Example
///
/// ```rust
/// use apidoc_introspect::{FieldDescriptor, TypeDescriptor, TypeRegistry};
///
/// let registry = TypeRegistry::new();
/// registry
///     .register(
///         TypeDescriptor::record("Status")
///             .by_reflection()
///             .field(FieldDescriptor::new("code", "u16")),
///     )
///     .unwrap();
///
/// assert!(registry.contains("Status"));
/// assert_eq!(registry.get("Status").unwrap().fields().len(), 1);
/// ```
#[derive(Clone, Default)]
pub struct TypeRegistry {
	types: Arc<RwLock<IndexMap<String, TypeDescriptor>>>,
}

impl TypeRegistry {
	/// Create a new empty registry
	pub fn new() -> Self {
		Self::default()
	}

	/// Validate and register a descriptor under its own name.
	///
	/// A descriptor with the same name replaces the previous one and keeps its
	/// original position in [`names`](Self::names).
	pub fn register(&self, descriptor: TypeDescriptor) -> IntrospectResult<()> {
		descriptor.validate()?;

		let name = descriptor.name().to_string();
		let replaced = self.types.write().insert(name.clone(), descriptor);
		if replaced.is_some() {
			tracing::warn!(
				type_name = %name,
				"replacing previously registered type descriptor"
			);
		}
		Ok(())
	}

	/// Register the descriptor produced by `T::type_descriptor()`.
	pub fn register_type<T: Introspect + ?Sized>(&self) -> IntrospectResult<()> {
		self.register(T::type_descriptor())
	}

	/// Get a descriptor by type name
	pub fn get(&self, name: &str) -> Option<TypeDescriptor> {
		self.types.read().get(name).cloned()
	}

	/// Get the registered descriptor for `T`, looked up by its name.
	pub fn get_type<T: Introspect + ?Sized>(&self) -> Option<TypeDescriptor> {
		self.get(T::type_descriptor().name())
	}

	pub fn contains(&self, name: &str) -> bool {
		self.types.read().contains_key(name)
	}

	pub fn len(&self) -> usize {
		self.types.read().len()
	}

	pub fn is_empty(&self) -> bool {
		self.types.read().is_empty()
	}

	/// Registered type names in registration order.
	pub fn names(&self) -> Vec<String> {
		self.types.read().keys().cloned().collect()
	}

	/// Remove every registered descriptor.
	pub fn clear(&self) {
		self.types.write().clear();
	}

	/// Copy every descriptor of `other` into this registry.
	///
	/// Descriptors already present under the same name are overwritten.
	pub fn merge(&self, other: &TypeRegistry) {
		if Arc::ptr_eq(&self.types, &other.types) {
			return;
		}
		let incoming: Vec<_> = other
			.types
			.read()
			.iter()
			.map(|(name, descriptor)| (name.clone(), descriptor.clone()))
			.collect();
		self.types.write().extend(incoming);
	}
}

impl std::fmt::Debug for TypeRegistry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("TypeRegistry")
			.field("types", &self.names())
			.finish()
	}
}

//================================================================================
// Global Type Registry (Inventory-based Auto-registration)
//================================================================================

/// Builds a registry from compile-time registrations.
///
/// A name submitted from more than one module is left out entirely so the
/// outcome never depends on link order.
fn collect_registrations<'a>(
	registrations: impl IntoIterator<Item = &'a TypeRegistration>,
) -> TypeRegistry {
	let mut by_name: IndexMap<&str, Vec<&TypeRegistration>> = IndexMap::new();
	for registration in registrations {
		by_name
			.entry(registration.name)
			.or_default()
			.push(registration);
	}

	let registry = TypeRegistry::new();
	for (name, entries) in by_name {
		let mut modules: Vec<&str> = entries.iter().map(|r| r.module_path).collect();
		modules.sort_unstable();
		modules.dedup();
		if modules.len() > 1 {
			tracing::warn!(
				type_name = name,
				modules = ?modules,
				"type name registered from several modules; use `rename` to disambiguate"
			);
			continue;
		}

		let Some(registration) = entries.first() else {
			continue;
		};
		if let Err(error) = registry.register((registration.describe)()) {
			tracing::warn!(
				type_name = registration.name,
				module = registration.module_path,
				%error,
				"skipping invalid type registration"
			);
		}
	}
	registry
}

static GLOBAL_TYPE_REGISTRY: LazyLock<TypeRegistry> = LazyLock::new(|| {
	let registry = collect_registrations(inventory::iter::<TypeRegistration>);
	tracing::debug!(
		types = registry.len(),
		"global type registry initialized"
	);
	registry
});

/// Registry of every type submitted through `#[derive(Introspect)]`.
///
/// Built on first access. The returned handle shares storage with the global
/// table, so explicit registrations through it are visible process-wide.
pub fn global_registry() -> &'static TypeRegistry {
	&GLOBAL_TYPE_REGISTRY
}
