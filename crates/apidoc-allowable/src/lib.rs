//! Allowable-value resolution for API documentation.
//!
//! Given a type marked `AllowableValuesByReflection`, the
//! [`AllowableValueResolver`] walks its declared fields in order, drops every
//! field marked `AllowableValueIgnored`, and returns the rest as an
//! [`AllowableValueSet`] for documentation generators to render.
//!
//! # Quick Start
//!
//! ```
//! use apidoc_allowable::{AllowableError, AllowableValueResolver};
//! use apidoc_introspect::{FieldDescriptor, Introspect, TypeDescriptor};
//!
//! let status = TypeDescriptor::record("Status")
//!     .by_reflection()
//!     .field(FieldDescriptor::new("code", "u16"))
//!     .field(FieldDescriptor::new("internal_note", "String").ignored())
//!     .field(FieldDescriptor::new("label", "String"));
//!
//! let resolver = AllowableValueResolver::new();
//! assert_eq!(resolver.resolve(&status).unwrap().names(), vec!["code", "label"]);
//!
//! // Scalars have no fields to reflect over.
//! assert!(matches!(
//!     resolver.resolve(&i64::type_descriptor()),
//!     Err(AllowableError::InvalidTypeKind { .. })
//! ));
//! ```
//!
//! # Configuration
//!
//! [`ResolverSettings`] controls marker enforcement and custom type shapes and
//! can be loaded from TOML with [`ResolverSettings::from_path`].

pub mod error;
pub mod resolver;
pub mod settings;
pub mod value;

pub use error::{AllowableError, AllowableResult};
pub use resolver::AllowableValueResolver;
pub use settings::ResolverSettings;
pub use value::{AllowableValue, AllowableValueSet};
