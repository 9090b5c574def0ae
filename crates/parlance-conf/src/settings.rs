//! Translation engine settings.
//!
//! [`Settings`] keeps one typed field per setting. The dynamic accessors
//! [`Settings::get`] and [`Settings::set`] address the same fields by name,
//! which is how settings files and embedding applications drive them.

use crate::error::{ConfigError, ConfigResult};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::path::PathBuf;

/// Placeholder for the namespace slot of a filename pattern.
pub const NAMESPACE_TOKEN: &str = "{namespace}";

/// Placeholder for the locale slot of a filename pattern.
pub const LOCALE_TOKEN: &str = "{locale}";

/// Placeholder for the format (extension) slot of a filename pattern.
pub const FORMAT_TOKEN: &str = "{format}";

/// Names accepted by [`Settings::get`] and [`Settings::set`].
pub const SETTING_NAMES: &[&str] = &[
	"locale",
	"fallback",
	"available_locales",
	"load_path",
	"filename_format",
	"file_format",
	"namespace_delimiter",
	"placeholder_delimiter",
	"plural_few_threshold",
	"skip_locale_root_data",
	"error_on_missing_translation",
	"error_on_missing_placeholder",
	"error_on_missing_plural",
	"enable_memoization",
	"encoding",
];

/// Settings consulted by the resolver and the translator
///
/// # Examples
///
/// ```
/// use parlance_conf::Settings;
///
/// let settings = Settings::default()
///     .with_locales(["fr", "de"])
///     .with_fallback("en")
///     .with_load_path(["/srv/app/locales"]);
///
/// assert_eq!(settings.locale(), "fr");
/// assert_eq!(settings.locales(), ["fr", "de"]);
/// assert_eq!(settings.get("locale"), Some(serde_json::json!(["fr", "de"])));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
	/// Ordered locale preference; the first entry is the current locale
	#[serde(deserialize_with = "deserialize_locales")]
	pub locale: Vec<String>,

	/// Locale tried once when every preferred locale misses
	pub fallback: String,

	/// Locales loaded by `load_everything` when no locale is given
	pub available_locales: Vec<String>,

	/// Directory roots searched for resource files, in priority order
	pub load_path: Vec<PathBuf>,

	/// Resource filename pattern over `{namespace}`, `{locale}` and `{format}`
	pub filename_format: String,

	/// Extension of resource files
	pub file_format: String,

	/// Separator between key segments
	pub namespace_delimiter: String,

	/// Marker introducing a `{name}` placeholder in templates
	pub placeholder_delimiter: String,

	/// Inclusive upper bound of the `few` plural category
	pub plural_few_threshold: i64,

	/// Resource files hold translations at their root instead of under a locale key
	pub skip_locale_root_data: bool,

	/// Fail instead of returning the key when a translation is missing
	pub error_on_missing_translation: bool,

	/// Fail instead of keeping the placeholder text when an argument is missing
	pub error_on_missing_placeholder: bool,

	/// Fail instead of degrading when a plural category is missing
	pub error_on_missing_plural: bool,

	/// Keep file contents in memory once read
	pub enable_memoization: bool,

	/// Encoding label used to decode resource files
	pub encoding: String,
}

impl Default for Settings {
	fn default() -> Self {
		Self {
			locale: vec!["en".to_string()],
			fallback: "en".to_string(),
			available_locales: vec!["en".to_string()],
			load_path: Vec::new(),
			filename_format: format!("{NAMESPACE_TOKEN}.{LOCALE_TOKEN}.{FORMAT_TOKEN}"),
			file_format: "yml".to_string(),
			namespace_delimiter: ".".to_string(),
			placeholder_delimiter: "%".to_string(),
			plural_few_threshold: 5,
			skip_locale_root_data: false,
			error_on_missing_translation: false,
			error_on_missing_placeholder: false,
			error_on_missing_plural: false,
			enable_memoization: false,
			encoding: "utf-8".to_string(),
		}
	}
}

impl Settings {
	/// Create settings with every default applied
	pub fn new() -> Self {
		Self::default()
	}

	/// Replace the locale preference with a single locale
	pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
		self.locale = vec![locale.into()];
		self
	}

	/// Replace the locale preference with an ordered list
	///
	/// An empty list leaves the current preference untouched.
	pub fn with_locales<I, S>(mut self, locales: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		let locales: Vec<String> = locales.into_iter().map(Into::into).collect();
		if !locales.is_empty() {
			self.locale = locales;
		}
		self
	}

	/// Set the fallback locale
	pub fn with_fallback(mut self, fallback: impl Into<String>) -> Self {
		self.fallback = fallback.into();
		self
	}

	/// Replace the load path
	pub fn with_load_path<I, P>(mut self, roots: I) -> Self
	where
		I: IntoIterator<Item = P>,
		P: Into<PathBuf>,
	{
		self.load_path = roots.into_iter().map(Into::into).collect();
		self
	}

	/// Set the resource filename pattern
	pub fn with_filename_format(mut self, pattern: impl Into<String>) -> Self {
		self.filename_format = pattern.into();
		self
	}

	/// Set the resource file extension
	pub fn with_file_format(mut self, format: impl Into<String>) -> Self {
		self.file_format = format.into();
		self
	}

	/// Current locale (the head of the preference list)
	pub fn locale(&self) -> &str {
		self.locale
			.first()
			.map(String::as_str)
			.unwrap_or(&self.fallback)
	}

	/// Full ordered locale preference
	pub fn locales(&self) -> &[String] {
		&self.locale
	}

	/// Whether the filename pattern carries a `{namespace}` slot
	pub fn has_namespace_token(&self) -> bool {
		self.filename_format.contains(NAMESPACE_TOKEN)
	}

	/// Whether the filename pattern carries a `{locale}` slot
	pub fn has_locale_token(&self) -> bool {
		self.filename_format.contains(LOCALE_TOKEN)
	}

	/// Read a setting by name
	///
	/// Returns `None` for names outside [`SETTING_NAMES`]. The `locale`
	/// setting reads back as a string when a single locale is configured.
	pub fn get(&self, name: &str) -> Option<Value> {
		let value = match name {
			"locale" => match self.locale.as_slice() {
				[single] => Value::String(single.clone()),
				many => Value::from(many.to_vec()),
			},
			"fallback" => Value::from(self.fallback.clone()),
			"available_locales" => Value::from(self.available_locales.clone()),
			"load_path" => Value::from(
				self.load_path
					.iter()
					.map(|root| root.display().to_string())
					.collect::<Vec<_>>(),
			),
			"filename_format" => Value::from(self.filename_format.clone()),
			"file_format" => Value::from(self.file_format.clone()),
			"namespace_delimiter" => Value::from(self.namespace_delimiter.clone()),
			"placeholder_delimiter" => Value::from(self.placeholder_delimiter.clone()),
			"plural_few_threshold" => Value::from(self.plural_few_threshold),
			"skip_locale_root_data" => Value::from(self.skip_locale_root_data),
			"error_on_missing_translation" => Value::from(self.error_on_missing_translation),
			"error_on_missing_placeholder" => Value::from(self.error_on_missing_placeholder),
			"error_on_missing_plural" => Value::from(self.error_on_missing_plural),
			"enable_memoization" => Value::from(self.enable_memoization),
			"encoding" => Value::from(self.encoding.clone()),
			_ => return None,
		};
		Some(value)
	}

	/// Update a setting by name
	///
	/// # Errors
	///
	/// [`ConfigError::UnknownSetting`] for names outside [`SETTING_NAMES`],
	/// [`ConfigError::InvalidValue`] when the value has the wrong shape. The
	/// setting is left unchanged on error.
	pub fn set(&mut self, name: &str, value: impl Into<Value>) -> ConfigResult<()> {
		let value = value.into();
		match name {
			"locale" => {
				let locales = string_list(name, value)?;
				if locales.is_empty() {
					return Err(ConfigError::invalid(
						name,
						"a locale or a non-empty list of locales",
						Value::Array(Vec::new()),
					));
				}
				self.locale = locales;
			}
			"fallback" => self.fallback = string(name, value)?,
			"available_locales" => self.available_locales = string_list(name, value)?,
			"load_path" => {
				self.load_path = string_list(name, value)?
					.into_iter()
					.map(PathBuf::from)
					.collect();
			}
			"filename_format" => self.filename_format = string(name, value)?,
			"file_format" => self.file_format = string(name, value)?,
			"namespace_delimiter" => self.namespace_delimiter = non_empty_string(name, value)?,
			"placeholder_delimiter" => self.placeholder_delimiter = non_empty_string(name, value)?,
			"plural_few_threshold" => self.plural_few_threshold = integer(name, value)?,
			"skip_locale_root_data" => self.skip_locale_root_data = boolean(name, value)?,
			"error_on_missing_translation" => {
				self.error_on_missing_translation = boolean(name, value)?
			}
			"error_on_missing_placeholder" => {
				self.error_on_missing_placeholder = boolean(name, value)?
			}
			"error_on_missing_plural" => self.error_on_missing_plural = boolean(name, value)?,
			"enable_memoization" => self.enable_memoization = boolean(name, value)?,
			"encoding" => self.encoding = non_empty_string(name, value)?,
			_ => return Err(ConfigError::UnknownSetting(name.to_string())),
		}
		tracing::trace!(setting = name, "setting updated");
		Ok(())
	}

	/// Apply every `(name, value)` pair through [`Settings::set`]
	///
	/// Stops at the first failing entry; entries applied before it stay applied.
	pub fn apply<I, K>(&mut self, values: I) -> ConfigResult<()>
	where
		I: IntoIterator<Item = (K, Value)>,
		K: AsRef<str>,
	{
		for (name, value) in values {
			self.set(name.as_ref(), value)?;
		}
		Ok(())
	}
}

fn string(name: &str, value: Value) -> ConfigResult<String> {
	match value {
		Value::String(s) => Ok(s),
		other => Err(ConfigError::invalid(name, "a string", other)),
	}
}

fn non_empty_string(name: &str, value: Value) -> ConfigResult<String> {
	match value {
		Value::String(s) if !s.is_empty() => Ok(s),
		other => Err(ConfigError::invalid(name, "a non-empty string", other)),
	}
}

fn string_list(name: &str, value: Value) -> ConfigResult<Vec<String>> {
	match value {
		Value::String(s) => Ok(vec![s]),
		Value::Array(items) => {
			if items.iter().all(Value::is_string) {
				Ok(items
					.into_iter()
					.filter_map(|item| match item {
						Value::String(s) => Some(s),
						_ => None,
					})
					.collect())
			} else {
				Err(ConfigError::invalid(
					name,
					"a string or a list of strings",
					Value::Array(items),
				))
			}
		}
		other => Err(ConfigError::invalid(
			name,
			"a string or a list of strings",
			other,
		)),
	}
}

fn integer(name: &str, value: Value) -> ConfigResult<i64> {
	match value.as_i64() {
		Some(n) => Ok(n),
		None => Err(ConfigError::invalid(name, "an integer", value)),
	}
}

fn boolean(name: &str, value: Value) -> ConfigResult<bool> {
	match value {
		Value::Bool(b) => Ok(b),
		other => Err(ConfigError::invalid(name, "a boolean", other)),
	}
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
	One(String),
	Many(Vec<String>),
}

fn deserialize_locales<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
	D: Deserializer<'de>,
{
	let locales = match OneOrMany::deserialize(deserializer)? {
		OneOrMany::One(locale) => vec![locale],
		OneOrMany::Many(locales) => locales,
	};
	if locales.is_empty() {
		return Err(serde::de::Error::custom("locale list must not be empty"));
	}
	Ok(locales)
}
