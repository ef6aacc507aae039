//! End-to-end tests: derive descriptors through the facade and resolve them.

use apidoc::prelude::*;
use apidoc::{TypeKind, ValueShape};
use rstest::rstest;
use serial_test::serial;

#[allow(dead_code)]
#[derive(Introspect)]
#[allowable_values(by_reflection)]
struct Status {
	code: u16,
	#[allowable_values(ignore)]
	internal_note: String,
	label: Option<String>,
}

#[allow(dead_code)]
#[derive(Introspect)]
#[allowable_values(by_reflection)]
struct Empty;

#[allow(dead_code)]
#[derive(Introspect)]
#[allowable_values(by_reflection)]
struct UserId(i64);

#[allow(dead_code)]
#[derive(Introspect)]
#[allowable_values(by_reflection)]
struct Hidden {
	#[allowable_values(ignore)]
	secret: String,
	#[allowable_values(ignore)]
	token: String,
}

#[allow(dead_code)]
#[derive(Introspect)]
struct Unmarked {
	id: u64,
}

#[rstest]
fn test_status_drops_ignored_field() {
	let values = AllowableValueResolver::new()
		.resolve_type::<Status>()
		.unwrap();

	assert_eq!(values.names(), vec!["code", "label"]);
	assert!(!values.contains("internal_note"));

	let code = values.get("code").unwrap();
	assert_eq!(code.value_type, "u16");
	assert_eq!(code.shape, ValueShape::Integer);
	assert!(!code.nullable);

	let label = values.get("label").unwrap();
	assert_eq!(label.shape, ValueShape::String);
	assert!(label.nullable);
}

#[rstest]
fn test_status_serializes_for_documentation() {
	let values = AllowableValueResolver::new()
		.resolve_type::<Status>()
		.unwrap();

	let json = serde_json::to_value(&values).unwrap();
	assert_eq!(
		json,
		serde_json::json!([
			{ "name": "code", "valueType": "u16", "type": "integer" },
			{ "name": "label", "valueType": "Option<String>", "type": "string", "nullable": true },
		])
	);
}

#[rstest]
#[case::no_fields(AllowableValueResolver::new().resolve_type::<Empty>())]
#[case::all_ignored(AllowableValueResolver::new().resolve_type::<Hidden>())]
fn test_empty_results(#[case] result: Result<AllowableValueSet, AllowableError>) {
	assert!(result.unwrap().is_empty());
}

#[rstest]
fn test_newtype_is_invalid_kind() {
	let err = AllowableValueResolver::new()
		.resolve_type::<UserId>()
		.unwrap_err();

	assert!(matches!(
		err,
		AllowableError::InvalidTypeKind { ref type_name, kind: TypeKind::Tuple } if type_name == "UserId"
	));
}

#[rstest]
fn test_scalar_is_invalid_kind() {
	let err = AllowableValueResolver::new()
		.resolve_type::<i64>()
		.unwrap_err();

	assert!(matches!(
		err,
		AllowableError::InvalidTypeKind { kind: TypeKind::Scalar, .. }
	));
}

#[rstest]
fn test_unmarked_type_follows_enforcement_setting() {
	let strict = AllowableValueResolver::new();
	assert!(matches!(
		strict.resolve_type::<Unmarked>(),
		Err(AllowableError::MissingByReflection(ref name)) if name == "Unmarked"
	));
	assert!(strict
		.resolve_if_reflective(&Unmarked::type_descriptor())
		.unwrap()
		.is_none());

	let lenient = AllowableValueResolver::with_settings(
		ResolverSettings::default().with_enforce_by_reflection(false),
	)
	.unwrap();
	assert_eq!(lenient.resolve_type::<Unmarked>().unwrap().names(), vec!["id"]);
}

#[rstest]
#[serial(global_registry)]
fn test_resolve_from_global_registry() {
	let resolver = AllowableValueResolver::new();

	let values = resolver
		.resolve_registered(global_registry(), "Status")
		.unwrap();
	assert_eq!(values, resolver.resolve_type::<Status>().unwrap());

	assert!(matches!(
		resolver.resolve_registered(global_registry(), "Missing"),
		Err(AllowableError::UnknownType(ref name)) if name == "Missing"
	));
}

#[rstest]
fn test_local_registry_resolution() {
	let registry = TypeRegistry::new();
	registry.register_type::<Status>().unwrap();
	registry
		.register(
			TypeDescriptor::record("Manual")
				.by_reflection()
				.field(FieldDescriptor::new("a", "bool"))
				.field(FieldDescriptor::new("b", "bool").ignored()),
		)
		.unwrap();

	let resolver = AllowableValueResolver::new();
	assert_eq!(
		resolver.resolve_registered(&registry, "Manual").unwrap().names(),
		vec!["a"]
	);
	assert_eq!(
		resolver.resolve_registered(&registry, "Status").unwrap().names(),
		vec!["code", "label"]
	);
}

#[rstest]
fn test_resolution_is_idempotent() {
	let resolver = AllowableValueResolver::new();
	let first = resolver.resolve_type::<Status>().unwrap();
	let second = resolver.resolve_type::<Status>().unwrap();
	assert_eq!(first, second);
}
