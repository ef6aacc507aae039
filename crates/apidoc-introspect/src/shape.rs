//! Documentation shapes inferred from declared Rust type spellings.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Documentation-facing shape of a value, in OpenAPI terms.
///
/// Serializes with an internal `type` tag so that shapes embed directly into
/// schema documents:
///
/// ```
/// use apidoc_introspect::ValueShape;
///
/// let shape = ValueShape::array(ValueShape::String);
/// assert_eq!(
///     serde_json::to_value(&shape).unwrap(),
///     serde_json::json!({"type": "array", "items": {"type": "string"}})
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ValueShape {
	/// `bool`
	Boolean,
	/// Integer types
	Integer,
	/// Floating point and decimal types
	Number,
	/// Strings and string-encoded values
	String,
	/// Sequences and sets
	Array {
		/// Element shape
		items: Box<ValueShape>,
	},
	/// Maps, records and anything unrecognised
	Object,
}

impl ValueShape {
	/// An array of `items`.
	pub fn array(items: ValueShape) -> Self {
		ValueShape::Array {
			items: Box::new(items),
		}
	}

	/// OpenAPI `type` keyword for this shape.
	pub fn type_name(&self) -> &'static str {
		match self {
			ValueShape::Boolean => "boolean",
			ValueShape::Integer => "integer",
			ValueShape::Number => "number",
			ValueShape::String => "string",
			ValueShape::Array { .. } => "array",
			ValueShape::Object => "object",
		}
	}
}

/// Shape of a declared type plus whether it was wrapped in `Option`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InferredShape {
	/// Inferred shape.
	pub shape: ValueShape,
	/// Declared as `Option<..>`.
	pub nullable: bool,
}

/// Maps declared type spellings to [`ValueShape`]s.
///
/// Wrapper and container types are unwrapped structurally; leaf names are
/// looked up by their last path segment. Names with no mapping are treated as
/// nested objects.
///
/// # Examples
///
/// ```
/// use apidoc_introspect::{ShapeInferencer, ValueShape};
///
/// let inferencer = ShapeInferencer::new();
///
/// let inferred = inferencer.infer("Option<Vec<String>>");
/// assert!(inferred.nullable);
/// assert_eq!(inferred.shape, ValueShape::array(ValueShape::String));
///
/// assert_eq!(inferencer.infer("std::primitive::u16").shape, ValueShape::Integer);
/// assert_eq!(inferencer.infer("Address").shape, ValueShape::Object);
/// ```
#[derive(Debug, Clone)]
pub struct ShapeInferencer {
	mappings: HashMap<String, ValueShape>,
}

impl Default for ShapeInferencer {
	fn default() -> Self {
		Self::new()
	}
}

impl ShapeInferencer {
	/// Creates an inferencer with mappings for primitives and the common
	/// string-encoded types (dates, UUIDs, URLs, decimals).
	pub fn new() -> Self {
		let mut mappings = HashMap::new();

		mappings.insert("bool".to_string(), ValueShape::Boolean);

		for int_type in [
			"i8", "i16", "i32", "i64", "i128", "isize", "u8", "u16", "u32", "u64", "u128", "usize",
			"NonZeroU32", "NonZeroU64", "NonZeroI32", "NonZeroI64",
		] {
			mappings.insert(int_type.to_string(), ValueShape::Integer);
		}

		for number_type in ["f32", "f64", "Decimal"] {
			mappings.insert(number_type.to_string(), ValueShape::Number);
		}

		for string_type in [
			"String",
			"str",
			"char",
			"Uuid",
			"Url",
			"NaiveDate",
			"NaiveDateTime",
			"NaiveTime",
			"DateTime",
			"Duration",
			"PathBuf",
			"IpAddr",
		] {
			mappings.insert(string_type.to_string(), ValueShape::String);
		}

		Self { mappings }
	}

	/// Registers a custom mapping, overriding any built-in one.
	///
	/// The name is matched against the full spelling first and then against its
	/// last path segment.
	///
	/// ```
	/// use apidoc_introspect::{ShapeInferencer, ValueShape};
	///
	/// let mut inferencer = ShapeInferencer::new();
	/// inferencer.register("UserId", ValueShape::Integer);
	/// assert_eq!(inferencer.infer("crate::ids::UserId").shape, ValueShape::Integer);
	/// ```
	pub fn register(&mut self, type_name: impl Into<String>, shape: ValueShape) {
		self.mappings.insert(type_name.into(), shape);
	}

	/// Extends the mappings from an iterator of `(name, shape)` pairs.
	pub fn extend<I, S>(&mut self, mappings: I)
	where
		I: IntoIterator<Item = (S, ValueShape)>,
		S: Into<String>,
	{
		for (name, shape) in mappings {
			self.register(name, shape);
		}
	}

	/// Infers the shape of a declared type spelling.
	pub fn infer(&self, type_name: &str) -> InferredShape {
		let type_name = strip_reference(type_name.trim());

		if let Some(shape) = self.mappings.get(type_name) {
			return InferredShape {
				shape: shape.clone(),
				nullable: false,
			};
		}

		// [T], [T; N]
		if let Some(inner) = type_name
			.strip_prefix('[')
			.and_then(|rest| rest.strip_suffix(']'))
		{
			let element = match split_top_level(inner, ';').as_slice() {
				[element, _len] => *element,
				_ => inner,
			};
			return not_null(ValueShape::array(self.infer(element).shape));
		}

		if let Some((head, args)) = split_generic(type_name) {
			let args = split_top_level(args, ',');
			let type_args: Vec<&str> = args
				.into_iter()
				.map(str::trim)
				.filter(|arg| !arg.starts_with('\''))
				.collect();

			match last_segment(head) {
				"Option" => {
					if let Some(inner) = type_args.first() {
						return InferredShape {
							shape: self.infer(inner).shape,
							nullable: true,
						};
					}
				}
				"Box" | "Arc" | "Rc" | "Cow" => {
					if let Some(inner) = type_args.first() {
						return self.infer(inner);
					}
				}
				"Vec" | "VecDeque" | "LinkedList" | "HashSet" | "BTreeSet" | "IndexSet" => {
					if let Some(inner) = type_args.first() {
						return not_null(ValueShape::array(self.infer(inner).shape));
					}
				}
				"HashMap" | "BTreeMap" | "IndexMap" => return not_null(ValueShape::Object),
				_ => {}
			}

			return not_null(self.lookup(head));
		}

		not_null(self.lookup(type_name))
	}

	fn lookup(&self, type_name: &str) -> ValueShape {
		self.mappings
			.get(type_name)
			.or_else(|| self.mappings.get(last_segment(type_name)))
			.cloned()
			.unwrap_or(ValueShape::Object)
	}
}

fn not_null(shape: ValueShape) -> InferredShape {
	InferredShape {
		shape,
		nullable: false,
	}
}

/// Strips `&`, `&mut` and a leading lifetime from a reference spelling.
fn strip_reference(type_name: &str) -> &str {
	let Some(rest) = type_name.strip_prefix('&') else {
		return type_name;
	};
	let mut rest = rest.trim_start();
	if rest.starts_with('\'') {
		rest = rest
			.split_once(char::is_whitespace)
			.map_or(rest, |(_, tail)| tail.trim_start());
	}
	if let Some(tail) = rest.strip_prefix("mut ") {
		rest = tail.trim_start();
	}
	strip_reference(rest)
}

fn last_segment(path: &str) -> &str {
	path.rsplit("::").next().unwrap_or(path).trim()
}

/// Splits `Head<Args>` into `("Head", "Args")`.
fn split_generic(type_name: &str) -> Option<(&str, &str)> {
	let open = type_name.find('<')?;
	let args = type_name[open + 1..].strip_suffix('>')?;
	Some((type_name[..open].trim(), args))
}

/// Splits on `separator` occurrences outside of `<>`, `[]` and `()`.
fn split_top_level(input: &str, separator: char) -> Vec<&str> {
	let mut parts = Vec::new();
	let mut depth = 0usize;
	let mut start = 0;
	for (index, ch) in input.char_indices() {
		match ch {
			'<' | '[' | '(' => depth += 1,
			'>' | ']' | ')' => depth = depth.saturating_sub(1),
			c if c == separator && depth == 0 => {
				parts.push(input[start..index].trim());
				start = index + c.len_utf8();
			}
			_ => {}
		}
	}
	let tail = input[start..].trim();
	if !tail.is_empty() {
		parts.push(tail);
	}
	parts
}
