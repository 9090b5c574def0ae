//! In-memory translation store

use crate::error::{I18nError, I18nResult};
use crate::value::TranslationValue;
use std::collections::HashMap;

/// Translations keyed by locale, then by dotted key
///
/// Entries are only ever added or overwritten; [`TranslationStore::clear`]
/// is the sole way to drop them.
///
/// # Example
///
/// ```
/// use parlance_i18n::{TranslationStore, TranslationValue};
///
/// let mut store = TranslationStore::new();
/// store.add("foo.hi", "Hello %{name} !", "en");
///
/// assert!(store.has("foo.hi", "en"));
/// assert!(!store.has("foo.hi", "fr"));
/// assert_eq!(store.get("foo.hi", "en").unwrap(), &TranslationValue::from("Hello %{name} !"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct TranslationStore {
	container: HashMap<String, HashMap<String, TranslationValue>>,
}

impl TranslationStore {
	/// Create an empty store
	pub fn new() -> Self {
		Self::default()
	}

	/// Insert or overwrite the value at `(locale, key)`
	pub fn add(&mut self, key: impl Into<String>, value: impl Into<TranslationValue>, locale: &str) {
		self.container
			.entry(locale.to_string())
			.or_default()
			.insert(key.into(), value.into());
	}

	/// Whether `(locale, key)` holds a value
	pub fn has(&self, key: &str, locale: &str) -> bool {
		self.lookup(key, locale).is_some()
	}

	/// Value at `(locale, key)`, if any
	pub fn lookup(&self, key: &str, locale: &str) -> Option<&TranslationValue> {
		self.container.get(locale)?.get(key)
	}

	/// Value at `(locale, key)`
	///
	/// # Errors
	///
	/// [`I18nError::KeyNotFound`] when nothing is stored there.
	pub fn get(&self, key: &str, locale: &str) -> I18nResult<&TranslationValue> {
		self.lookup(key, locale).ok_or_else(|| I18nError::KeyNotFound {
			key: key.to_string(),
			locale: locale.to_string(),
		})
	}

	/// Drop every entry of every locale
	pub fn clear(&mut self) {
		self.container.clear();
	}

	/// Total number of entries across locales
	pub fn len(&self) -> usize {
		self.container.values().map(HashMap::len).sum()
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// Locales holding at least one entry, sorted
	pub fn locales(&self) -> Vec<&str> {
		let mut locales: Vec<&str> = self
			.container
			.iter()
			.filter(|(_, entries)| !entries.is_empty())
			.map(|(locale, _)| locale.as_str())
			.collect();
		locales.sort_unstable();
		locales
	}

	/// Keys stored for a locale, sorted
	pub fn keys(&self, locale: &str) -> Vec<&str> {
		let mut keys: Vec<&str> = self
			.container
			.get(locale)
			.map(|entries| entries.keys().map(String::as_str).collect())
			.unwrap_or_default();
		keys.sort_unstable();
		keys
	}
}
