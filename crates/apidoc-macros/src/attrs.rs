//! Parsing of `#[allowable_values(...)]` attributes.

use syn::{Attribute, LitStr, Path};

const ATTRIBUTE: &str = "allowable_values";

/// Options accepted on the deriving type.
#[derive(Default)]
pub(crate) struct ContainerAttrs {
	pub by_reflection: bool,
	pub rename: Option<String>,
	pub krate: Option<Path>,
}

/// Options accepted on a named field.
#[derive(Default)]
pub(crate) struct FieldAttrs {
	pub ignore: bool,
	pub rename: Option<String>,
}

pub(crate) fn parse_container_attrs(attrs: &[Attribute]) -> syn::Result<ContainerAttrs> {
	let mut parsed = ContainerAttrs::default();

	for attr in attrs.iter().filter(|a| a.path().is_ident(ATTRIBUTE)) {
		attr.parse_nested_meta(|meta| {
			if meta.path.is_ident("by_reflection") {
				parsed.by_reflection = true;
				Ok(())
			} else if meta.path.is_ident("rename") {
				let value: LitStr = meta.value()?.parse()?;
				parsed.rename = Some(value.value());
				Ok(())
			} else if meta.path.is_ident("crate") {
				let value: LitStr = meta.value()?.parse()?;
				parsed.krate = Some(value.parse()?);
				Ok(())
			} else if meta.path.is_ident("ignore") {
				Err(meta.error(
					"`ignore` marks fields only; put it on the field to exclude from allowable values",
				))
			} else {
				Err(meta.error(
					"unknown allowable_values attribute; expected `by_reflection`, `rename` or `crate`",
				))
			}
		})?;
	}

	Ok(parsed)
}

pub(crate) fn parse_field_attrs(attrs: &[Attribute]) -> syn::Result<FieldAttrs> {
	let mut parsed = FieldAttrs::default();

	for attr in attrs.iter().filter(|a| a.path().is_ident(ATTRIBUTE)) {
		attr.parse_nested_meta(|meta| {
			if meta.path.is_ident("ignore") {
				parsed.ignore = true;
				Ok(())
			} else if meta.path.is_ident("rename") {
				let value: LitStr = meta.value()?.parse()?;
				parsed.rename = Some(value.value());
				Ok(())
			} else if meta.path.is_ident("by_reflection") {
				Err(meta.error("`by_reflection` marks types only; put it on the struct"))
			} else {
				Err(meta.error(
					"unknown allowable_values field attribute; expected `ignore` or `rename`",
				))
			}
		})?;
	}

	Ok(parsed)
}

/// Rejects `#[allowable_values]` on elements that carry no markers, such as
/// tuple-struct fields and enum variants.
pub(crate) fn reject_attrs(attrs: &[Attribute], element: &str) -> syn::Result<()> {
	match attrs.iter().find(|a| a.path().is_ident(ATTRIBUTE)) {
		Some(attr) => Err(syn::Error::new_spanned(
			attr,
			format!("allowable_values attributes are not supported on {element}"),
		)),
		None => Ok(()),
	}
}
