//! Error types for type introspection.

use crate::marker::{Marker, MarkerTarget};
use thiserror::Error;

/// Errors raised while validating registered type descriptors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntrospectError {
	/// A marker was attached to an element kind it does not apply to.
	#[error("marker {marker} cannot be attached to {target} `{element}`")]
	MisplacedMarker {
		/// Type name, or `Type.field` for fields.
		element: String,
		/// The offending marker.
		marker: Marker,
		/// Where it was found.
		target: MarkerTarget,
	},

	/// Two fields of one type share a name.
	#[error("type `{type_name}` declares field `{field}` more than once")]
	DuplicateField {
		/// Owning type.
		type_name: String,
		/// Repeated field name.
		field: String,
	},
}

/// Result type alias for introspection operations.
pub type IntrospectResult<T> = Result<T, IntrospectError>;

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_misplaced_marker_message() {
		let error = IntrospectError::MisplacedMarker {
			element: "Status.code".to_string(),
			marker: Marker::ByReflection,
			target: MarkerTarget::Field,
		};
		assert_eq!(
			error.to_string(),
			"marker AllowableValuesByReflection cannot be attached to field `Status.code`"
		);
	}

	#[rstest]
	fn test_duplicate_field_message() {
		let error = IntrospectError::DuplicateField {
			type_name: "Status".to_string(),
			field: "code".to_string(),
		};
		assert_eq!(
			error.to_string(),
			"type `Status` declares field `code` more than once"
		);
	}
}
