//! The parser capability consumed by the registry.

use crate::error::SyntaxError;
use serde_json::Value;

/// Turns decoded file content into a nested mapping
///
/// Implementations only deal with syntax; reading, decoding and caching are
/// handled by [`LoaderRegistry`](crate::LoaderRegistry).
///
/// # Examples
///
/// ```
/// use parlance_loaders::{ResourceParser, SyntaxError};
/// use serde_json::{Value, json};
///
/// struct KeyValueParser;
///
/// impl ResourceParser for KeyValueParser {
///     fn name(&self) -> &'static str {
///         "key=value"
///     }
///
///     fn parse(&self, content: &str) -> Result<Value, SyntaxError> {
///         let mut map = serde_json::Map::new();
///         for line in content.lines().filter(|l| !l.trim().is_empty()) {
///             let (key, value) = line
///                 .split_once('=')
///                 .ok_or_else(|| SyntaxError::invalid(self.name(), "missing '='"))?;
///             map.insert(key.trim().to_string(), Value::from(value.trim()));
///         }
///         Ok(Value::Object(map))
///     }
/// }
///
/// let data = KeyValueParser.parse("greeting = hi").unwrap();
/// assert_eq!(data, json!({ "greeting": "hi" }));
///
/// let err = KeyValueParser.parse("greeting").unwrap_err();
/// assert_eq!(err.to_string(), "invalid key=value: missing '='");
/// ```
pub trait ResourceParser: Send + Sync {
	/// Short format name used in diagnostics
	fn name(&self) -> &'static str;

	/// Parse content into a nested mapping
	///
	/// The error describes the syntax problem; the registry attaches the
	/// file path.
	fn parse(&self, content: &str) -> Result<Value, SyntaxError>;

	/// Extract the subtree stored under `root`
	fn select_root(&self, data: Value, root: &str) -> Option<Value> {
		select_root(data, root)
	}
}

/// Default root selection
///
/// Looks `root` up as a top-level key first and, failing that, walks it as
/// a `.`-separated path through nested mappings.
///
/// ```
/// use parlance_loaders::parser::select_root;
/// use serde_json::json;
///
/// let data = json!({ "en": { "hi": "Hello" }, "app": { "fr": { "hi": "Salut" } } });
///
/// assert_eq!(select_root(data.clone(), "en"), Some(json!({ "hi": "Hello" })));
/// assert_eq!(select_root(data.clone(), "app.fr"), Some(json!({ "hi": "Salut" })));
/// assert_eq!(select_root(data, "de"), None);
/// ```
pub fn select_root(data: Value, root: &str) -> Option<Value> {
	let Value::Object(mut map) = data else {
		return None;
	};
	if let Some(subtree) = map.remove(root) {
		return Some(subtree);
	}
	if !root.contains('.') {
		return None;
	}

	let mut current = Value::Object(map);
	for segment in root.split('.') {
		current = match current {
			Value::Object(mut inner) => inner.remove(segment)?,
			_ => return None,
		};
	}
	Some(current)
}
