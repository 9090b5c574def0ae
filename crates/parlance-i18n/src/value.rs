//! Translation values and the classification of parsed resource data.

use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fmt;

/// Plural categories recognised by the pluralizer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PluralCategory {
	Zero,
	One,
	Few,
	Many,
	/// Deprecated alias of [`PluralCategory::Many`]
	Other,
}

impl PluralCategory {
	/// Every category, in selection order
	pub const ALL: [PluralCategory; 5] = [
		PluralCategory::Zero,
		PluralCategory::One,
		PluralCategory::Few,
		PluralCategory::Many,
		PluralCategory::Other,
	];

	/// Category name as written in resource files
	pub fn as_str(self) -> &'static str {
		match self {
			PluralCategory::Zero => "zero",
			PluralCategory::One => "one",
			PluralCategory::Few => "few",
			PluralCategory::Many => "many",
			PluralCategory::Other => "other",
		}
	}

	/// Parse a category name
	pub fn from_name(name: &str) -> Option<Self> {
		Self::ALL.into_iter().find(|category| category.as_str() == name)
	}
}

impl fmt::Display for PluralCategory {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Templates keyed by plural category name
///
/// Names are kept as written, so a mapping registered with unknown category
/// names is stored as-is and only fails when it is pluralized.
///
/// # Example
///
/// ```
/// use parlance_i18n::{PluralCategory, PluralForms};
///
/// let forms = PluralForms::new()
///     .with("one", "1 mail")
///     .with("many", "%{count} mails");
///
/// assert_eq!(forms.get(PluralCategory::One), Some("1 mail"));
/// assert_eq!(forms.get(PluralCategory::Few), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PluralForms {
	forms: BTreeMap<String, String>,
}

impl PluralForms {
	/// Create an empty mapping
	pub fn new() -> Self {
		Self::default()
	}

	/// Add a form, builder style
	pub fn with(mut self, category: impl Into<String>, template: impl Into<String>) -> Self {
		self.insert(category, template);
		self
	}

	/// Add or replace a form
	pub fn insert(&mut self, category: impl Into<String>, template: impl Into<String>) {
		self.forms.insert(category.into(), template.into());
	}

	/// Template registered for a category
	pub fn get(&self, category: PluralCategory) -> Option<&str> {
		self.get_raw(category.as_str())
	}

	/// Template registered under a raw name
	pub fn get_raw(&self, name: &str) -> Option<&str> {
		self.forms.get(name).map(String::as_str)
	}

	/// Recognised categories present in the mapping
	pub fn categories(&self) -> impl Iterator<Item = PluralCategory> + '_ {
		self.forms
			.keys()
			.filter_map(|name| PluralCategory::from_name(name))
	}

	/// `(name, template)` pairs, ordered by name
	pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
		self.forms.iter().map(|(k, v)| (k.as_str(), v.as_str()))
	}

	pub fn len(&self) -> usize {
		self.forms.len()
	}

	pub fn is_empty(&self) -> bool {
		self.forms.is_empty()
	}
}

impl<K, V> FromIterator<(K, V)> for PluralForms
where
	K: Into<String>,
	V: Into<String>,
{
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		Self {
			forms: iter
				.into_iter()
				.map(|(k, v)| (k.into(), v.into()))
				.collect(),
		}
	}
}

/// A value held by the translation store
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranslationValue {
	/// A template with zero or more placeholders
	Text(String),
	/// A list of templates
	Sequence(Vec<String>),
	/// Templates selected by a count
	Plural(PluralForms),
}

impl TranslationValue {
	/// The template, for [`TranslationValue::Text`]
	pub fn as_text(&self) -> Option<&str> {
		match self {
			TranslationValue::Text(text) => Some(text),
			_ => None,
		}
	}

	/// The forms, for [`TranslationValue::Plural`]
	pub fn as_plural(&self) -> Option<&PluralForms> {
		match self {
			TranslationValue::Plural(forms) => Some(forms),
			_ => None,
		}
	}

	pub fn is_plural(&self) -> bool {
		matches!(self, TranslationValue::Plural(_))
	}
}

impl From<&str> for TranslationValue {
	fn from(text: &str) -> Self {
		TranslationValue::Text(text.to_string())
	}
}

impl From<String> for TranslationValue {
	fn from(text: String) -> Self {
		TranslationValue::Text(text)
	}
}

impl From<PluralForms> for TranslationValue {
	fn from(forms: PluralForms) -> Self {
		TranslationValue::Plural(forms)
	}
}

impl From<Vec<String>> for TranslationValue {
	fn from(items: Vec<String>) -> Self {
		TranslationValue::Sequence(items)
	}
}

impl From<Vec<&str>> for TranslationValue {
	fn from(items: Vec<&str>) -> Self {
		TranslationValue::Sequence(items.into_iter().map(str::to_string).collect())
	}
}

/// Shape of a parsed node, decided once before flattening
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
	/// String, number, boolean or null
	Scalar,
	/// A list
	Sequence,
	/// A mapping of plural category names to templates
	PluralVariant,
	/// Any other mapping; its keys extend the dotted namespace
	Namespace,
}

/// Classify a parsed node
///
/// A mapping is a [`ValueKind::PluralVariant`] when at least two of its keys
/// are plural category names and every value is a string.
///
/// ```
/// use parlance_i18n::value::{ValueKind, classify};
/// use serde_json::json;
///
/// assert_eq!(classify(&json!({ "one": "1 mail", "many": "%{count} mails" })), ValueKind::PluralVariant);
/// assert_eq!(classify(&json!({ "one": "1 mail", "title": "Mail" })), ValueKind::Namespace);
/// assert_eq!(classify(&json!(["a", "b"])), ValueKind::Sequence);
/// assert_eq!(classify(&json!(3)), ValueKind::Scalar);
/// ```
pub fn classify(value: &Value) -> ValueKind {
	match value {
		Value::Object(map) if is_plural_mapping(map) => ValueKind::PluralVariant,
		Value::Object(_) => ValueKind::Namespace,
		Value::Array(_) => ValueKind::Sequence,
		_ => ValueKind::Scalar,
	}
}

/// Whether a mapping reads as a set of plural forms
pub fn is_plural_mapping(map: &Map<String, Value>) -> bool {
	let categories = map
		.keys()
		.filter(|key| PluralCategory::from_name(key).is_some())
		.count();
	categories >= 2 && map.values().all(Value::is_string)
}

/// A classified node: either a value to store or a mapping to descend into
#[derive(Debug, Clone, PartialEq)]
pub enum Classified {
	Terminal(TranslationValue),
	Namespace(Map<String, Value>),
}

/// Classify a node and convert terminals into store values
pub fn classify_value(value: Value) -> Classified {
	match (classify(&value), value) {
		(ValueKind::Namespace, Value::Object(map)) => Classified::Namespace(map),
		(ValueKind::PluralVariant, Value::Object(map)) => Classified::Terminal(
			TranslationValue::Plural(map.into_iter().map(|(k, v)| (k, scalar_text(v))).collect()),
		),
		(_, Value::Array(items)) => {
			Classified::Terminal(TranslationValue::Sequence(items.into_iter().map(scalar_text).collect()))
		}
		(_, other) => Classified::Terminal(TranslationValue::Text(scalar_text(other))),
	}
}

fn scalar_text(value: Value) -> String {
	match value {
		Value::String(s) => s,
		Value::Null => String::new(),
		other => other.to_string(),
	}
}
