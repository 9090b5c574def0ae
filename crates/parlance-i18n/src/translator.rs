//! The translation context and key resolution

use crate::error::{FormatError, I18nError, I18nResult};
use crate::format::{Args, Formatter};
use crate::plural::{self, PluralSelection};
use crate::resolver::{Resolver, loader_options};
use crate::store::TranslationStore;
use crate::value::TranslationValue;
use parlance_conf::Settings;
use parlance_loaders::{LoaderError, LoaderRegistry, ResourceParser, Value};
use std::path::Path;
use std::sync::Arc;

/// Root key of configuration files read by [`I18n::load_config`]
pub const CONFIG_ROOT: &str = "settings";

/// A translation context: settings, stored translations and resource parsers
///
/// Lookups go through [`I18n::t`] and [`I18n::t_with`]. A key missing from
/// the store triggers a search of the load path for the file that should
/// hold it, once per candidate locale. Candidates are the locale given in
/// the arguments, or every configured locale in order, followed by the
/// fallback locale.
///
/// # Example
///
/// ```
/// use parlance_i18n::{Args, I18n};
///
/// let mut i18n = I18n::default();
/// i18n.add("foo.hi", "Hello %{name} !");
///
/// assert_eq!(i18n.t_with("foo.hi", &Args::new().with("name", "Bob")).unwrap(), "Hello Bob !");
/// assert_eq!(i18n.t("foo.hi").unwrap(), "Hello %{name} !");
/// assert_eq!(i18n.t("foo.inexistent").unwrap(), "foo.inexistent");
/// ```
#[derive(Debug)]
pub struct I18n {
	settings: Settings,
	store: TranslationStore,
	loaders: LoaderRegistry,
}

impl Default for I18n {
	fn default() -> Self {
		Self::new(Settings::default())
	}
}

impl I18n {
	/// Context with the built-in YAML, JSON and TOML parsers
	pub fn new(settings: Settings) -> Self {
		Self::with_loaders(settings, LoaderRegistry::with_defaults())
	}

	/// Context with a caller-provided parser registry
	pub fn with_loaders(settings: Settings, loaders: LoaderRegistry) -> Self {
		Self {
			settings,
			store: TranslationStore::new(),
			loaders,
		}
	}

	pub fn settings(&self) -> &Settings {
		&self.settings
	}

	pub fn settings_mut(&mut self) -> &mut Settings {
		&mut self.settings
	}

	/// Update a setting by name
	pub fn set(&mut self, name: &str, value: impl Into<Value>) -> I18nResult<()> {
		Ok(self.settings.set(name, value)?)
	}

	/// Read a setting by name
	pub fn get(&self, name: &str) -> Option<Value> {
		self.settings.get(name)
	}

	pub fn store(&self) -> &TranslationStore {
		&self.store
	}

	pub fn store_mut(&mut self) -> &mut TranslationStore {
		&mut self.store
	}

	pub fn loaders(&self) -> &LoaderRegistry {
		&self.loaders
	}

	pub fn loaders_mut(&mut self) -> &mut LoaderRegistry {
		&mut self.loaders
	}

	/// Register a parser for a file extension
	pub fn register_loader(&mut self, extension: &str, parser: Arc<dyn ResourceParser>) -> I18nResult<()> {
		Ok(self.loaders.register(extension, parser)?)
	}

	/// Resolver over this context's settings, loaders and store
	pub fn resolver(&mut self) -> Resolver<'_> {
		Resolver::new(&self.settings, &mut self.loaders, &mut self.store)
	}

	/// Register a value for the current locale
	pub fn add(&mut self, key: impl Into<String>, value: impl Into<TranslationValue>) {
		let locale = self.settings.locale().to_string();
		self.store.add(key, value, &locale);
	}

	/// Register a value for a given locale
	pub fn add_for(&mut self, key: impl Into<String>, value: impl Into<TranslationValue>, locale: &str) {
		self.store.add(key, value, locale);
	}

	/// Register a value for a list of locales
	///
	/// Only the first locale of the list receives the value; an empty list
	/// means the current locale.
	pub fn add_for_locales(
		&mut self,
		key: impl Into<String>,
		value: impl Into<TranslationValue>,
		locales: &[&str],
	) {
		match locales.first() {
			Some(locale) => self.store.add(key, value, locale),
			None => self.add(key, value),
		}
	}

	/// Whether the store holds `key` for the current locale
	///
	/// Never searches the load path.
	pub fn has(&self, key: &str) -> bool {
		self.store.has(key, self.settings.locale())
	}

	/// Whether the store holds `key` for `locale`
	pub fn has_for(&self, key: &str, locale: &str) -> bool {
		self.store.has(key, locale)
	}

	/// Translate a key without arguments
	pub fn t(&mut self, key: &str) -> I18nResult<String> {
		self.t_with(key, &Args::new())
	}

	/// Translate a key
	///
	/// # Errors
	///
	/// - [`I18nError::TranslationNotFound`] when no candidate locale resolves
	///   the key, no default was given and `error_on_missing_translation` is set
	/// - [`I18nError::PluralCategoryMissing`] when no plural form fits and
	///   `error_on_missing_plural` is set
	/// - [`I18nError::PlaceholderMissing`] when a placeholder has no argument
	///   and `error_on_missing_placeholder` is set
	/// - any error raised while loading a located resource file
	pub fn t_with(&mut self, key: &str, args: &Args) -> I18nResult<String> {
		match self.locate(key, args)? {
			Some(locale) => match self.store.lookup(key, &locale) {
				Some(value) => self.render(key, value, args),
				None => self.missing(key, args),
			},
			None => self.missing(key, args),
		}
	}

	/// Translate a key holding a list, formatting each item
	///
	/// Other values yield a single-item list.
	pub fn t_list(&mut self, key: &str, args: &Args) -> I18nResult<Vec<String>> {
		let Some(locale) = self.locate(key, args)? else {
			return self.missing(key, args).map(|text| vec![text]);
		};
		match self.store.lookup(key, &locale) {
			Some(TranslationValue::Sequence(items)) if args.count_value().is_none() => items
				.iter()
				.map(|item| self.format(key, item, args))
				.collect(),
			Some(value) => self.render(key, value, args).map(|text| vec![text]),
			None => self.missing(key, args).map(|text| vec![text]),
		}
	}

	/// Candidate locales of a lookup, in order
	fn candidates(&self, args: &Args) -> Vec<String> {
		let mut candidates: Vec<String> = match args.locale_value() {
			Some(locale) => vec![locale.to_string()],
			None if self.settings.locales().is_empty() => vec![self.settings.locale().to_string()],
			None => self.settings.locales().to_vec(),
		};
		if !candidates.contains(&self.settings.fallback) {
			candidates.push(self.settings.fallback.clone());
		}
		candidates
	}

	/// First candidate locale holding `key`, searching the load path on a miss
	fn locate(&mut self, key: &str, args: &Args) -> I18nResult<Option<String>> {
		for locale in self.candidates(args) {
			if self.store.has(key, &locale) {
				return Ok(Some(locale));
			}
			self.resolver().search(key, &locale)?;
			if self.store.has(key, &locale) {
				return Ok(Some(locale));
			}
			tracing::trace!(key, locale = %locale, "key not resolved in locale");
		}
		Ok(None)
	}

	fn missing(&self, key: &str, args: &Args) -> I18nResult<String> {
		if let Some(default) = args.default_value() {
			return Ok(default.to_string());
		}
		let locale = args.locale_value().unwrap_or(self.settings.locale());
		if self.settings.error_on_missing_translation {
			return Err(I18nError::TranslationNotFound {
				key: key.to_string(),
				locale: locale.to_string(),
			});
		}
		tracing::debug!(key, locale, "missing translation, returning key");
		Ok(key.to_string())
	}

	fn render(&self, key: &str, value: &TranslationValue, args: &Args) -> I18nResult<String> {
		let template = match (value, args.count_value()) {
			(TranslationValue::Plural(_), count) => {
				let selection = match count {
					Some(count) => plural::select(count, value, self.settings.plural_few_threshold),
					None => PluralSelection::Missing,
				};
				match selection {
					PluralSelection::Selected(template) => template,
					PluralSelection::Missing => {
						self.plural_missing(key, count)?;
						return Ok(key.to_string());
					}
				}
			}
			(_, Some(count)) => {
				self.plural_missing(key, Some(count))?;
				return self.render_plain(key, value, args);
			}
			(_, None) => return self.render_plain(key, value, args),
		};
		self.format(key, template, args)
	}

	fn render_plain(&self, key: &str, value: &TranslationValue, args: &Args) -> I18nResult<String> {
		match value {
			TranslationValue::Text(text) => self.format(key, text, args),
			TranslationValue::Sequence(items) => Ok(items
				.iter()
				.map(|item| self.format(key, item, args))
				.collect::<I18nResult<Vec<_>>>()?
				.join("\n")),
			TranslationValue::Plural(_) => Ok(key.to_string()),
		}
	}

	/// Raise in strict plural mode, log otherwise
	fn plural_missing(&self, key: &str, count: Option<i64>) -> I18nResult<()> {
		if self.settings.error_on_missing_plural {
			return Err(I18nError::PluralCategoryMissing {
				key: key.to_string(),
				count,
			});
		}
		tracing::debug!(key, ?count, "no plural form, degrading");
		Ok(())
	}

	fn format(&self, key: &str, template: &str, args: &Args) -> I18nResult<String> {
		Formatter::new(self.settings.placeholder_delimiter.as_str())
			.strict(self.settings.error_on_missing_placeholder)
			.format(template, args)
			.map_err(|err| match err {
				FormatError::MissingPlaceholder(name) => I18nError::PlaceholderMissing {
					key: key.to_string(),
					name,
				},
			})
	}

	/// Apply the settings found under the `settings` root of a file
	///
	/// # Errors
	///
	/// Loader errors for the file, [`I18nError::Config`] for an unknown
	/// setting or a value of the wrong shape. Settings applied before a
	/// failing entry stay applied.
	pub fn load_config(&mut self, path: impl AsRef<Path>) -> I18nResult<()> {
		let path = path.as_ref();
		let options = loader_options(&self.settings);
		let data = self.loaders.load_resource(path, Some(CONFIG_ROOT), &options)?;
		match data {
			Value::Object(map) => {
				self.settings.apply(map)?;
				tracing::debug!(path = %path.display(), "configuration loaded");
				Ok(())
			}
			_ => Err(LoaderError::NotAMapping {
				path: path.to_path_buf(),
			}
			.into()),
		}
	}

	/// Load every resource file of the load path
	///
	/// With no locale, every entry of `available_locales` is loaded. Returns
	/// the number of files loaded.
	pub fn load_everything(&mut self, locale: Option<&str>) -> I18nResult<usize> {
		let locales = match locale {
			Some(locale) => vec![locale.to_string()],
			None => self.settings.available_locales.clone(),
		};
		let mut loaded = 0;
		for locale in &locales {
			loaded += self.resolver().load_everything(locale)?;
		}
		Ok(loaded)
	}

	/// Drop every stored translation and cached file
	pub fn unload_everything(&mut self) {
		self.store.clear();
		self.loaders.clear_cache();
		tracing::debug!("translations unloaded");
	}

	/// [`unload_everything`](Self::unload_everything), then
	/// [`load_everything`](Self::load_everything)
	pub fn reload_everything(&mut self, locale: Option<&str>) -> I18nResult<usize> {
		self.unload_everything();
		self.load_everything(locale)
	}
}
