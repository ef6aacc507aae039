//! Reflection-based allowable-value resolution.

use crate::error::{AllowableError, AllowableResult};
use crate::settings::ResolverSettings;
use crate::value::{AllowableValue, AllowableValueSet};
use apidoc_introspect::{Introspect, Marker, ShapeInferencer, TypeDescriptor, TypeRegistry};

/// Turns a by-reflection type into its ordered set of allowable values.
///
/// Resolution walks the declared fields in order, drops every field marked
/// [`Marker::Ignored`] and describes the rest. It never mutates the
/// descriptor and holds no state besides its settings, so one resolver can be
/// shared across threads.
///
/// # Examples
///
/// ```
/// use apidoc_allowable::AllowableValueResolver;
/// use apidoc_introspect::{FieldDescriptor, TypeDescriptor};
///
/// let status = TypeDescriptor::record("Status")
///     .by_reflection()
///     .field(FieldDescriptor::new("code", "u16"))
///     .field(FieldDescriptor::new("internal_note", "String").ignored())
///     .field(FieldDescriptor::new("label", "String"));
///
/// let values = AllowableValueResolver::new().resolve(&status).unwrap();
/// assert_eq!(values.names(), vec!["code", "label"]);
/// ```
#[derive(Debug, Clone)]
pub struct AllowableValueResolver {
	settings: ResolverSettings,
	inferencer: ShapeInferencer,
}

impl Default for AllowableValueResolver {
	fn default() -> Self {
		Self::new()
	}
}

impl AllowableValueResolver {
	/// Creates a resolver with default settings.
	pub fn new() -> Self {
		Self::build(ResolverSettings::default())
	}

	/// Creates a resolver from validated settings.
	///
	/// # Errors
	///
	/// [`AllowableError::Settings`] when [`ResolverSettings::validate`] fails,
	/// the same check applied to settings loaded from TOML.
	pub fn with_settings(settings: ResolverSettings) -> AllowableResult<Self> {
		settings.validate()?;
		Ok(Self::build(settings))
	}

	fn build(settings: ResolverSettings) -> Self {
		let inferencer = settings.shape_inferencer();
		Self {
			settings,
			inferencer,
		}
	}

	/// Settings this resolver was built with.
	pub fn settings(&self) -> &ResolverSettings {
		&self.settings
	}

	/// Resolves the allowable values of `ty`.
	///
	/// # Errors
	///
	/// - [`AllowableError::InvalidTypeKind`] when `ty` has no named fields.
	/// - [`AllowableError::MissingByReflection`] when `ty` lacks the
	///   by-reflection marker and the settings enforce it.
	///
	/// Nothing is returned on error; the result is all-or-nothing. A field name
	/// that repeats an earlier kept field is skipped, so every name appears
	/// once.
	pub fn resolve(&self, ty: &TypeDescriptor) -> AllowableResult<AllowableValueSet> {
		if !ty.is_field_bearing() {
			return Err(AllowableError::InvalidTypeKind {
				type_name: ty.name().to_string(),
				kind: ty.kind(),
			});
		}

		if self.settings.enforce_by_reflection && !ty.has_marker(Marker::ByReflection) {
			return Err(AllowableError::MissingByReflection(ty.name().to_string()));
		}

		let mut values = AllowableValueSet::new();
		for field in ty.fields() {
			if field.is_ignored() {
				tracing::trace!(
					type_name = ty.name(),
					field = field.name(),
					"skipping ignored field"
				);
				continue;
			}
			if values.contains(field.name()) {
				tracing::warn!(
					type_name = ty.name(),
					field = field.name(),
					"skipping repeated field name"
				);
				continue;
			}

			let inferred = self.inferencer.infer(field.value_type());
			values.push(
				AllowableValue::new(field.name(), field.value_type(), inferred.shape)
					.nullable(inferred.nullable),
			);
		}

		tracing::debug!(
			type_name = ty.name(),
			allowable = values.len(),
			skipped = ty.fields().len() - values.len(),
			"resolved allowable values"
		);

		Ok(values)
	}

	/// Resolves the allowable values of `T`.
	pub fn resolve_type<T: Introspect + ?Sized>(&self) -> AllowableResult<AllowableValueSet> {
		self.resolve(&T::type_descriptor())
	}

	/// Resolves a type registered under `name`.
	///
	/// # Errors
	///
	/// [`AllowableError::UnknownType`] when nothing is registered under `name`,
	/// plus every error of [`resolve`](Self::resolve).
	pub fn resolve_registered(
		&self,
		registry: &TypeRegistry,
		name: &str,
	) -> AllowableResult<AllowableValueSet> {
		let ty = registry
			.get(name)
			.ok_or_else(|| AllowableError::UnknownType(name.to_string()))?;
		self.resolve(&ty)
	}

	/// Resolves `ty` only if it carries the by-reflection marker.
	///
	/// Returns `Ok(None)` for unmarked types, whatever the enforcement setting,
	/// so a documentation pipeline can probe every parameter type.
	///
	/// ```
	/// use apidoc_allowable::AllowableValueResolver;
	/// use apidoc_introspect::TypeDescriptor;
	///
	/// let plain = TypeDescriptor::record("Plain");
	/// let resolver = AllowableValueResolver::new();
	/// assert!(resolver.resolve_if_reflective(&plain).unwrap().is_none());
	/// ```
	pub fn resolve_if_reflective(
		&self,
		ty: &TypeDescriptor,
	) -> AllowableResult<Option<AllowableValueSet>> {
		if !ty.has_marker(Marker::ByReflection) {
			return Ok(None);
		}
		self.resolve(ty).map(Some)
	}
}
