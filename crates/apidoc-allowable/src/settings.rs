//! Resolver configuration.
//!
//! Settings are plain serde data and can be built in code or loaded from a
//! TOML file:
//!
//! ```toml
//! enforce_by_reflection = true
//!
//! [shapes]
//! UserId = { type = "integer" }
//! TagList = { type = "array", items = { type = "string" } }
//! ```

use crate::error::{AllowableError, AllowableResult};
use apidoc_introspect::{ShapeInferencer, ValueShape};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Configuration for [`AllowableValueResolver`](crate::AllowableValueResolver).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ResolverSettings {
	/// Reject types that lack the by-reflection marker instead of resolving them.
	pub enforce_by_reflection: bool,
	/// Declared type name to documentation shape, overriding built-in inference.
	pub shapes: BTreeMap<String, ValueShape>,
}

impl Default for ResolverSettings {
	fn default() -> Self {
		Self {
			enforce_by_reflection: true,
			shapes: BTreeMap::new(),
		}
	}
}

impl ResolverSettings {
	/// Parses settings from a TOML document.
	///
	/// # Examples
	///
	/// ```
	/// use apidoc_allowable::ResolverSettings;
	/// use apidoc_introspect::ValueShape;
	///
	/// let settings = ResolverSettings::from_toml_str(
	///     r#"
	///     enforce_by_reflection = false
	///
	///     [shapes]
	///     UserId = { type = "integer" }
	///     "#,
	/// )
	/// .unwrap();
	///
	/// assert!(!settings.enforce_by_reflection);
	/// assert_eq!(settings.shapes["UserId"], ValueShape::Integer);
	/// ```
	pub fn from_toml_str(source: &str) -> AllowableResult<Self> {
		let settings: Self = toml::from_str(source)?;
		settings.validate()?;
		Ok(settings)
	}

	/// Reads and parses a TOML settings file.
	pub fn from_path(path: impl AsRef<Path>) -> AllowableResult<Self> {
		let path = path.as_ref();
		let source = std::fs::read_to_string(path)?;
		let settings = Self::from_toml_str(&source)?;
		tracing::debug!(
			path = %path.display(),
			custom_shapes = settings.shapes.len(),
			"loaded resolver settings"
		);
		Ok(settings)
	}

	/// Sets whether unmarked types are rejected.
	pub fn with_enforce_by_reflection(mut self, enforce: bool) -> Self {
		self.enforce_by_reflection = enforce;
		self
	}

	/// Adds a custom shape mapping.
	///
	/// Keys are checked by [`validate`](Self::validate) when the settings reach
	/// [`AllowableValueResolver::with_settings`](crate::AllowableValueResolver::with_settings).
	pub fn with_shape(mut self, type_name: impl Into<String>, shape: ValueShape) -> Self {
		self.shapes.insert(type_name.into(), shape);
		self
	}

	/// Checks that every custom shape key names a type.
	pub fn validate(&self) -> AllowableResult<()> {
		if let Some(key) = self.shapes.keys().find(|k| k.trim().is_empty()) {
			return Err(AllowableError::Settings(format!(
				"shape mapping key {key:?} does not name a type"
			)));
		}
		Ok(())
	}

	/// Built-in inference extended with the configured shapes.
	pub(crate) fn shape_inferencer(&self) -> ShapeInferencer {
		let mut inferencer = ShapeInferencer::new();
		inferencer.extend(
			self.shapes
				.iter()
				.map(|(name, shape)| (name.clone(), shape.clone())),
		);
		inferencer
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_defaults() {
		let settings = ResolverSettings::default();
		assert!(settings.enforce_by_reflection);
		assert!(settings.shapes.is_empty());
	}

	#[rstest]
	fn test_empty_document_uses_defaults() {
		assert_eq!(
			ResolverSettings::from_toml_str("").unwrap(),
			ResolverSettings::default()
		);
	}

	#[rstest]
	fn test_nested_array_shape() {
		let settings = ResolverSettings::from_toml_str(
			r#"
			[shapes]
			TagList = { type = "array", items = { type = "string" } }
			"#,
		)
		.unwrap();
		assert_eq!(
			settings.shapes["TagList"],
			ValueShape::array(ValueShape::String)
		);
		assert!(settings.enforce_by_reflection);
	}

	#[rstest]
	fn test_unknown_key_is_rejected() {
		let result = ResolverSettings::from_toml_str("strict = true");
		assert!(matches!(result, Err(AllowableError::Toml(_))));
	}

	#[rstest]
	fn test_unknown_shape_type_is_rejected() {
		let result = ResolverSettings::from_toml_str(
			r#"
			[shapes]
			UserId = { type = "uuid" }
			"#,
		);
		assert!(matches!(result, Err(AllowableError::Toml(_))));
	}

	#[rstest]
	fn test_blank_shape_key_is_rejected() {
		let result = ResolverSettings::from_toml_str(
			r#"
			[shapes]
			" " = { type = "string" }
			"#,
		);
		assert!(matches!(result, Err(AllowableError::Settings(_))));
	}

	#[rstest]
	fn test_builder() {
		let settings = ResolverSettings::default()
			.with_enforce_by_reflection(false)
			.with_shape("UserId", ValueShape::Integer);

		assert!(!settings.enforce_by_reflection);
		assert_eq!(
			settings.shape_inferencer().infer("Option<UserId>").shape,
			ValueShape::Integer
		);
	}
}
