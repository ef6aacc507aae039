//! The `Introspect` trait and its implementations for standard types.

use crate::descriptor::TypeDescriptor;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

/// Types that can describe their own schema.
///
/// Implemented by `#[derive(Introspect)]` for user types. Standard scalars and
/// collections are implemented here so that documentation tooling can ask any
/// parameter type for its descriptor; only records are field-bearing.
///
/// # Examples
///
/// ```
/// use apidoc_introspect::{Introspect, TypeKind};
///
/// assert_eq!(i64::type_descriptor().kind(), TypeKind::Scalar);
/// assert_eq!(Vec::<String>::type_descriptor().name(), "Vec<String>");
/// assert_eq!(Option::<u8>::type_descriptor().name(), "u8");
/// ```
pub trait Introspect {
	/// Builds the descriptor for `Self`.
	fn type_descriptor() -> TypeDescriptor;
}

macro_rules! impl_scalar_introspect {
	($($ty:ty),* $(,)?) => {
		$(
			impl Introspect for $ty {
				fn type_descriptor() -> TypeDescriptor {
					TypeDescriptor::scalar(stringify!($ty))
				}
			}
		)*
	};
}

impl_scalar_introspect!(
	bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, String,
	str,
);

fn inner_name<T: Introspect + ?Sized>() -> String {
	T::type_descriptor().name().to_string()
}

impl<T: Introspect> Introspect for Vec<T> {
	fn type_descriptor() -> TypeDescriptor {
		TypeDescriptor::collection(format!("Vec<{}>", inner_name::<T>()))
	}
}

impl<T: Introspect> Introspect for [T] {
	fn type_descriptor() -> TypeDescriptor {
		TypeDescriptor::collection(format!("[{}]", inner_name::<T>()))
	}
}

impl<T: Introspect, const N: usize> Introspect for [T; N] {
	fn type_descriptor() -> TypeDescriptor {
		TypeDescriptor::collection(format!("[{}; {}]", inner_name::<T>(), N))
	}
}

impl<T: Introspect> Introspect for HashSet<T> {
	fn type_descriptor() -> TypeDescriptor {
		TypeDescriptor::collection(format!("HashSet<{}>", inner_name::<T>()))
	}
}

impl<T: Introspect> Introspect for BTreeSet<T> {
	fn type_descriptor() -> TypeDescriptor {
		TypeDescriptor::collection(format!("BTreeSet<{}>", inner_name::<T>()))
	}
}

impl<K: Introspect, V: Introspect> Introspect for HashMap<K, V> {
	fn type_descriptor() -> TypeDescriptor {
		TypeDescriptor::collection(format!(
			"HashMap<{}, {}>",
			inner_name::<K>(),
			inner_name::<V>()
		))
	}
}

impl<K: Introspect, V: Introspect> Introspect for BTreeMap<K, V> {
	fn type_descriptor() -> TypeDescriptor {
		TypeDescriptor::collection(format!(
			"BTreeMap<{}, {}>",
			inner_name::<K>(),
			inner_name::<V>()
		))
	}
}

// Wrappers are transparent: an optional or boxed parameter documents the same
// allowable values as its inner type.

impl<T: Introspect> Introspect for Option<T> {
	fn type_descriptor() -> TypeDescriptor {
		T::type_descriptor()
	}
}

impl<T: Introspect + ?Sized> Introspect for Box<T> {
	fn type_descriptor() -> TypeDescriptor {
		T::type_descriptor()
	}
}

impl<T: Introspect + ?Sized> Introspect for &T {
	fn type_descriptor() -> TypeDescriptor {
		T::type_descriptor()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::descriptor::TypeKind;
	use rstest::rstest;

	#[rstest]
	fn test_scalars_are_not_field_bearing() {
		for descriptor in [
			bool::type_descriptor(),
			i32::type_descriptor(),
			f64::type_descriptor(),
			String::type_descriptor(),
			str::type_descriptor(),
		] {
			assert_eq!(descriptor.kind(), TypeKind::Scalar);
			assert!(descriptor.fields().is_empty());
		}
	}

	#[rstest]
	fn test_collection_names() {
		assert_eq!(Vec::<i64>::type_descriptor().name(), "Vec<i64>");
		assert_eq!(<[u8]>::type_descriptor().name(), "[u8]");
		assert_eq!(<[u8; 4]>::type_descriptor().name(), "[u8; 4]");
		assert_eq!(
			HashMap::<String, i32>::type_descriptor().name(),
			"HashMap<String, i32>"
		);
		assert_eq!(
			Vec::<Vec<bool>>::type_descriptor().kind(),
			TypeKind::Collection
		);
	}

	#[rstest]
	fn test_wrappers_are_transparent() {
		assert_eq!(Option::<String>::type_descriptor(), String::type_descriptor());
		assert_eq!(Box::<u32>::type_descriptor(), u32::type_descriptor());
		assert_eq!(<&str>::type_descriptor(), str::type_descriptor());
	}
}
