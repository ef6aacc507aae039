//! Implementation of `#[derive(Introspect)]`.

use crate::attrs::{parse_container_attrs, parse_field_attrs, reject_attrs};
use proc_macro2::TokenStream;
use quote::{ToTokens, quote};
use std::collections::HashSet;
use syn::{Data, DeriveInput, Fields, Path, Type};

pub(crate) fn derive_introspect_impl(input: DeriveInput) -> syn::Result<TokenStream> {
	let container = parse_container_attrs(&input.attrs)?;
	let krate: Path = match container.krate {
		Some(path) => path,
		None => syn::parse_quote!(::apidoc::introspect),
	};

	let ident = &input.ident;
	let type_name = container.rename.unwrap_or_else(|| ident.to_string());

	let (kind, fields) = match &input.data {
		Data::Struct(data) => match &data.fields {
			Fields::Named(named) => {
				let mut fields = Vec::with_capacity(named.named.len());
				let mut seen = HashSet::with_capacity(named.named.len());
				for field in &named.named {
					let attrs = parse_field_attrs(&field.attrs)?;
					let name = match attrs.rename {
						Some(rename) => rename,
						None => field
							.ident
							.as_ref()
							.map(|i| unraw(&i.to_string()))
							.unwrap_or_default(),
					};
					if !seen.insert(name.clone()) {
						return Err(syn::Error::new_spanned(
							field,
							format!("duplicate allowable_values field name `{name}`"),
						));
					}
					let value_type = type_spelling(&field.ty);
					let marker = attrs
						.ignore
						.then(|| quote!(.marker(#krate::Marker::Ignored)));
					fields.push(quote! {
						.field(#krate::FieldDescriptor::new(#name, #value_type) #marker)
					});
				}
				(quote!(Record), fields)
			}
			Fields::Unnamed(unnamed) => {
				for field in &unnamed.unnamed {
					reject_attrs(&field.attrs, "tuple struct fields")?;
				}
				(quote!(Tuple), Vec::new())
			}
			Fields::Unit => (quote!(Record), Vec::new()),
		},
		Data::Enum(data) => {
			for variant in &data.variants {
				reject_attrs(&variant.attrs, "enum variants")?;
			}
			(quote!(Enumeration), Vec::new())
		}
		Data::Union(data) => {
			return Err(syn::Error::new_spanned(
				data.union_token,
				"Introspect cannot be derived for unions",
			));
		}
	};

	let by_reflection = container
		.by_reflection
		.then(|| quote!(.marker(#krate::Marker::ByReflection)));

	let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

	// Generic types have no single descriptor to submit.
	let registration = input.generics.params.is_empty().then(|| {
		quote! {
			#krate::__private::inventory::submit! {
				#krate::TypeRegistration::new(
					#type_name,
					::core::module_path!(),
					<#ident as #krate::Introspect>::type_descriptor,
				)
			}
		}
	});

	Ok(quote! {
		impl #impl_generics #krate::Introspect for #ident #ty_generics #where_clause {
			fn type_descriptor() -> #krate::TypeDescriptor {
				#krate::TypeDescriptor::new(#type_name, #krate::TypeKind::#kind)
					#by_reflection
					#(#fields)*
			}
		}

		#registration
	})
}

fn unraw(ident: &str) -> String {
	ident.strip_prefix("r#").unwrap_or(ident).to_string()
}

/// Source spelling of a type with token spacing collapsed, e.g.
/// `Option<Vec<String>>` or `&'a str`.
fn type_spelling(ty: &Type) -> String {
	let raw = ty.to_token_stream().to_string();
	let chars: Vec<char> = raw.chars().collect();
	let mut spelling = String::with_capacity(raw.len());

	for (index, &ch) in chars.iter().enumerate() {
		if ch != ' ' {
			spelling.push(ch);
			continue;
		}
		let prev = spelling.chars().last();
		let next = chars.get(index + 1).copied();
		if let (Some(prev), Some(next)) = (prev, next)
			&& is_word_char(prev)
			&& is_word_char(next)
		{
			spelling.push(' ');
		}
	}

	spelling
}

fn is_word_char(ch: char) -> bool {
	ch.is_alphanumeric() || ch == '_'
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(syn::parse_quote!(Option<Vec<String>>), "Option<Vec<String>>")]
	#[case(syn::parse_quote!(&'a str), "&'a str")]
	#[case(syn::parse_quote!(&mut String), "&mut String")]
	#[case(syn::parse_quote!(HashMap<String, i32>), "HashMap<String,i32>")]
	#[case(syn::parse_quote!([u8; 4]), "[u8;4]")]
	#[case(syn::parse_quote!(std::vec::Vec<u8>), "std::vec::Vec<u8>")]
	fn test_type_spelling(#[case] ty: Type, #[case] expected: &str) {
		assert_eq!(type_spelling(&ty), expected);
	}

	#[rstest]
	fn test_unraw() {
		assert_eq!(unraw("r#type"), "type");
		assert_eq!(unraw("label"), "label");
	}

	#[rstest]
	fn test_derive_record_output() {
		let input: DeriveInput = syn::parse_quote! {
			#[allowable_values(by_reflection)]
			struct Status {
				code: u16,
				#[allowable_values(ignore)]
				internal_note: String,
			}
		};
		let output = derive_introspect_impl(input).unwrap().to_string();

		assert!(output.contains("TypeKind :: Record"));
		assert!(output.contains("Marker :: ByReflection"));
		assert!(output.contains("\"internal_note\""));
		assert!(output.contains("Marker :: Ignored"));
		assert!(output.contains("inventory :: submit"));
	}

	#[rstest]
	fn test_derive_generic_skips_registration() {
		let input: DeriveInput = syn::parse_quote! {
			struct Page<T> {
				items: Vec<T>,
			}
		};
		let output = derive_introspect_impl(input).unwrap().to_string();
		assert!(!output.contains("inventory :: submit"));
	}

	#[rstest]
	fn test_derive_tuple_struct_is_tuple_kind() {
		let input: DeriveInput = syn::parse_quote! {
			struct UserId(i64);
		};
		let output = derive_introspect_impl(input).unwrap().to_string();
		assert!(output.contains("TypeKind :: Tuple"));
		assert!(!output.contains("FieldDescriptor"));
	}

	#[rstest]
	fn test_custom_crate_path() {
		let input: DeriveInput = syn::parse_quote! {
			#[allowable_values(crate = "crate")]
			struct Empty;
		};
		let output = derive_introspect_impl(input).unwrap().to_string();
		assert!(output.contains("crate :: TypeDescriptor"));
		assert!(!output.contains(":: apidoc"));
	}

	#[rstest]
	#[case(syn::parse_quote! {
		#[allowable_values(ignore)]
		struct Status { code: u16 }
	})]
	#[case(syn::parse_quote! {
		struct Status {
			#[allowable_values(by_reflection)]
			code: u16,
		}
	})]
	#[case(syn::parse_quote! {
		#[allowable_values(unknown)]
		struct Status { code: u16 }
	})]
	#[case(syn::parse_quote! {
		struct UserId(#[allowable_values(ignore)] i64);
	})]
	#[case(syn::parse_quote! {
		union Bits { a: u32, b: f32 }
	})]
	#[case(syn::parse_quote! {
		#[allowable_values(by_reflection)]
		struct Clash {
			code: u16,
			#[allowable_values(rename = "code")]
			other: String,
		}
	})]
	fn test_marker_misuse_is_rejected(#[case] input: DeriveInput) {
		assert!(derive_introspect_impl(input).is_err());
	}

	#[rstest]
	fn test_renamed_field_colliding_with_another_is_reported() {
		let input: DeriveInput = syn::parse_quote! {
			#[allowable_values(by_reflection)]
			struct Clash {
				code: u16,
				#[allowable_values(rename = "code")]
				other: String,
			}
		};
		let err = derive_introspect_impl(input).unwrap_err();
		assert_eq!(err.to_string(), "duplicate allowable_values field name `code`");
	}

	#[rstest]
	fn test_rename_to_free_name_is_accepted() {
		let input: DeriveInput = syn::parse_quote! {
			struct Swap {
				#[allowable_values(rename = "b")]
				a: u16,
				#[allowable_values(rename = "a")]
				b: u16,
			}
		};
		assert!(derive_introspect_impl(input).is_ok());
	}
}
