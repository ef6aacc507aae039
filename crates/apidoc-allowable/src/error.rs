//! Error types for allowable-value resolution.

use apidoc_introspect::TypeKind;
use thiserror::Error;

/// Errors that can occur while resolving allowable values.
#[derive(Debug, Error)]
pub enum AllowableError {
	/// The type has no named fields to reflect over.
	#[error("cannot reflect allowable values over {kind} type `{type_name}`: not field-bearing")]
	InvalidTypeKind {
		/// Name of the rejected type.
		type_name: String,
		/// Its structural kind.
		kind: TypeKind,
	},

	/// The type does not carry the by-reflection marker.
	#[error("type `{0}` is not marked for allowable values by reflection")]
	MissingByReflection(String),

	/// No descriptor is registered under the requested name.
	#[error("type `{0}` is not registered")]
	UnknownType(String),

	/// Settings were loaded but are not usable.
	#[error("invalid resolver settings: {0}")]
	Settings(String),

	/// Settings file could not be read.
	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),

	/// Settings file is not valid TOML for [`ResolverSettings`](crate::ResolverSettings).
	#[error("TOML error: {0}")]
	Toml(#[from] toml::de::Error),
}

impl AllowableError {
	/// Whether the documentation pipeline should skip reflective allowable
	/// values for this parameter rather than abort.
	pub fn is_skippable(&self) -> bool {
		matches!(
			self,
			AllowableError::InvalidTypeKind { .. } | AllowableError::MissingByReflection(_)
		)
	}
}

/// Result type alias for resolution operations.
pub type AllowableResult<T> = Result<T, AllowableError>;

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_invalid_type_kind_message() {
		let error = AllowableError::InvalidTypeKind {
			type_name: "i64".to_string(),
			kind: TypeKind::Scalar,
		};
		assert_eq!(
			error.to_string(),
			"cannot reflect allowable values over scalar type `i64`: not field-bearing"
		);
		assert!(error.is_skippable());
	}

	#[rstest]
	fn test_unknown_type_is_not_skippable() {
		let error = AllowableError::UnknownType("Status".to_string());
		assert_eq!(error.to_string(), "type `Status` is not registered");
		assert!(!error.is_skippable());
	}

	#[rstest]
	fn test_io_error_from() {
		let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
		let error: AllowableError = io_error.into();
		assert!(matches!(error, AllowableError::Io(_)));
	}

	#[rstest]
	fn test_toml_error_from() {
		let toml_error = toml::from_str::<toml::Table>("enforce_by_reflection = ").unwrap_err();
		let error: AllowableError = toml_error.into();
		assert!(matches!(error, AllowableError::Toml(_)));
	}
}
