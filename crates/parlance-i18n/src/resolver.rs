//! Locating resource files and flattening them into the store
//!
//! A resolver borrows the settings, the loader registry and the store of an
//! [`I18n`](crate::I18n) context for the duration of one operation. It maps
//! dotted keys to file locations on the load path, derives each file's
//! namespace from its relative path, and registers every value of a loaded
//! file under `namespace + delimiter + nested key`.
//!
//! Two directory layouts are supported, chosen by the filename pattern:
//!
//! - with a `{namespace}` slot (`{namespace}.{locale}.{format}`), every file
//!   holds one namespace and directories add leading segments:
//!   `foo/bar/baz.en.yml` provides keys under `foo.bar.baz`
//! - without it (`{locale}.{format}`), files hold a whole locale and only
//!   directories contribute namespace segments: `foo/en.yml` provides keys
//!   under `foo`

use crate::error::{I18nError, I18nResult};
use crate::store::TranslationStore;
use crate::value::{Classified, classify_value};
use parlance_conf::Settings;
use parlance_conf::settings::{FORMAT_TOKEN, LOCALE_TOKEN, NAMESPACE_TOKEN};
use parlance_loaders::{LoaderError, LoaderOptions, LoaderRegistry, Value};
use serde_json::Map;
use std::fs;
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};
use walkdir::WalkDir;

/// Loader options derived from the settings
pub(crate) fn loader_options(settings: &Settings) -> LoaderOptions {
	LoaderOptions {
		encoding: settings.encoding.clone(),
		memoize: settings.enable_memoization,
	}
}

/// Expand a filename pattern
///
/// ```
/// use parlance_i18n::resolver::format_filename;
///
/// assert_eq!(format_filename("{namespace}.{locale}.{format}", "foo", "en", "yml"), "foo.en.yml");
/// assert_eq!(format_filename("{locale}.{format}", "", "fr", "json"), "fr.json");
/// ```
pub fn format_filename(pattern: &str, namespace: &str, locale: &str, format: &str) -> String {
	pattern
		.replace(NAMESPACE_TOKEN, namespace)
		.replace(LOCALE_TOKEN, locale)
		.replace(FORMAT_TOKEN, format)
}

/// Position of a slot among the dot-separated parts of the pattern
fn token_index(pattern: &str, token: &str) -> Option<usize> {
	pattern.split('.').position(|part| part == token)
}

/// Kind of filesystem entry found at a path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Entry {
	File,
	Dir,
}

/// Inspect a path, treating a missing entry as a non-match
fn inspect(path: &Path) -> I18nResult<Option<Entry>> {
	match fs::metadata(path) {
		Ok(meta) if meta.is_dir() => Ok(Some(Entry::Dir)),
		Ok(_) => Ok(Some(Entry::File)),
		Err(err) if matches!(err.kind(), ErrorKind::NotFound | ErrorKind::NotADirectory) => Ok(None),
		Err(source) => Err(I18nError::Io {
			path: path.to_path_buf(),
			source,
		}),
	}
}

/// Whether a key segment names exactly one entry inside its directory
///
/// Empty, `.` and `..` segments, absolute paths and segments holding a path
/// separator never match a file or directory.
fn is_plain_segment(segment: &str) -> bool {
	let mut components = Path::new(segment).components();
	matches!(
		(components.next(), components.next()),
		(Some(Component::Normal(name)), None) if name == segment
	)
}

/// Operations over one context's settings, loaders and store
pub struct Resolver<'a> {
	settings: &'a Settings,
	loaders: &'a mut LoaderRegistry,
	store: &'a mut TranslationStore,
}

impl<'a> Resolver<'a> {
	pub fn new(
		settings: &'a Settings,
		loaders: &'a mut LoaderRegistry,
		store: &'a mut TranslationStore,
	) -> Self {
		Self {
			settings,
			loaders,
			store,
		}
	}

	/// Namespace of a file relative to its load-path root
	///
	/// Directory components become namespace segments. When the pattern has
	/// a `{namespace}` slot, the filename part at that slot's position is
	/// appended.
	///
	/// # Errors
	///
	/// [`I18nError::MalformedFilename`] when the filename has no part at the
	/// `{namespace}` position, or that part is empty.
	pub fn namespace_from_path(&self, relative: &Path) -> I18nResult<String> {
		let settings = self.settings;
		let mut segments: Vec<String> = relative
			.parent()
			.map(|dir| {
				dir.components()
					.filter_map(|component| match component {
						Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
						_ => None,
					})
					.collect()
			})
			.unwrap_or_default();

		if settings.has_namespace_token() {
			let file_name = relative
				.file_name()
				.map(|name| name.to_string_lossy().into_owned())
				.unwrap_or_default();
			let segment = token_index(&settings.filename_format, NAMESPACE_TOKEN)
				.and_then(|index| file_name.split('.').nth(index))
				.filter(|segment| !segment.is_empty())
				.ok_or_else(|| I18nError::MalformedFilename {
					path: relative.to_path_buf(),
					pattern: settings.filename_format.clone(),
				})?;
			segments.push(segment.to_string());
		}

		Ok(segments.join(&settings.namespace_delimiter))
	}

	/// Load `base/relative` and register its values for `locale`
	///
	/// Unless `skip_locale_root_data` is set, only the subtree under the
	/// locale root key is imported.
	///
	/// # Errors
	///
	/// [`I18nError::MalformedFilename`] for a path that does not fit the
	/// pattern, [`I18nError::Loader`] when the file cannot be read, parsed or
	/// lacks the locale root, or holds something other than a mapping there.
	pub fn load_translation_file(&mut self, relative: &Path, base: &Path, locale: &str) -> I18nResult<()> {
		let settings = self.settings;
		let namespace = self.namespace_from_path(relative)?;
		let path = base.join(relative);
		let root = (!settings.skip_locale_root_data).then_some(locale);

		tracing::debug!(
			path = %path.display(),
			locale,
			namespace = %namespace,
			"loading translation file"
		);
		let data = self
			.loaders
			.load_resource(&path, root, &loader_options(settings))?;

		match data {
			Value::Object(map) => {
				self.flatten(&namespace, map, locale);
				Ok(())
			}
			Value::Null => Ok(()),
			_ => Err(LoaderError::NotAMapping { path }.into()),
		}
	}

	fn flatten(&mut self, namespace: &str, map: Map<String, Value>, locale: &str) {
		let settings = self.settings;
		let delimiter = settings.namespace_delimiter.as_str();
		for (key, value) in map {
			let full_key = if namespace.is_empty() {
				key
			} else {
				format!("{namespace}{delimiter}{key}")
			};
			match classify_value(value) {
				Classified::Namespace(nested) => self.flatten(&full_key, nested, locale),
				Classified::Terminal(value) => self.store.add(full_key, value, locale),
			}
		}
	}

	/// Load every file of `dir` written for `locale`
	///
	/// Only direct children with the configured format's extension are
	/// considered. Returns the number of files loaded.
	pub fn load_directory(&mut self, dir: &Path, locale: &str) -> I18nResult<usize> {
		let entries = fs::read_dir(dir).map_err(|source| I18nError::Io {
			path: dir.to_path_buf(),
			source,
		})?;
		let mut names = Vec::new();
		for entry in entries {
			let entry = entry.map_err(|source| I18nError::Io {
				path: dir.to_path_buf(),
				source,
			})?;
			if entry.path().is_file() {
				names.push(entry.file_name().to_string_lossy().into_owned());
			}
		}
		names.retain(|name| self.accepts(name, locale));
		names.sort();

		for name in &names {
			self.load_translation_file(Path::new(name), dir, locale)?;
		}
		Ok(names.len())
	}

	/// Whether a file name has the configured format and belongs to `locale`
	fn accepts(&self, file_name: &str, locale: &str) -> bool {
		let settings = self.settings;
		let extension = Path::new(file_name)
			.extension()
			.and_then(|extension| extension.to_str());
		if extension != Some(settings.file_format.as_str()) {
			return false;
		}
		if !settings.has_locale_token() {
			return true;
		}
		match token_index(&settings.filename_format, LOCALE_TOKEN) {
			Some(index) => file_name.split('.').nth(index) == Some(locale),
			None => file_name.contains(locale),
		}
	}

	/// Look for the file providing `key` in `locale` and load it
	///
	/// Roots of the load path are tried in order and the search stops at the
	/// first root that yields a file. Finding nothing is not an error; the
	/// result tells whether anything was loaded.
	///
	/// # Errors
	///
	/// Loading a located file fails as in
	/// [`load_translation_file`](Self::load_translation_file); inspecting a
	/// path fails with [`I18nError::Io`] for anything but a missing entry.
	pub fn search(&mut self, key: &str, locale: &str) -> I18nResult<bool> {
		let settings = self.settings;
		let segments: Vec<&str> = key.split(settings.namespace_delimiter.as_str()).collect();
		let chain = &segments[..segments.len().saturating_sub(1)];
		let namespaced = settings.has_namespace_token();

		for root in &settings.load_path {
			if inspect(root)? != Some(Entry::Dir) {
				tracing::trace!(root = %root.display(), "skipping missing load path root");
				continue;
			}
			let found = if chain.is_empty() && !namespaced {
				self.load_directory(root, locale)? > 0
			} else {
				self.search_dir(chain, Path::new(""), root, locale)?
			};
			if found {
				return Ok(true);
			}
		}
		tracing::trace!(key, locale, "no resource file found");
		Ok(false)
	}

	fn search_dir(&mut self, chain: &[&str], relative: &Path, root: &Path, locale: &str) -> I18nResult<bool> {
		let settings = self.settings;
		let head = chain.first().copied().unwrap_or_default();
		if head.is_empty() && settings.has_namespace_token() {
			return Ok(false);
		}
		if !head.is_empty() && !is_plain_segment(head) {
			tracing::trace!(segment = head, "key segment does not name a directory entry");
			return Ok(false);
		}

		let dir = root.join(relative);
		let expected = format_filename(&settings.filename_format, head, locale, &settings.file_format);
		if !is_plain_segment(&expected) {
			return Ok(false);
		}
		tracing::trace!(dir = %dir.display(), file = %expected, "searching");

		if inspect(&dir.join(&expected))? == Some(Entry::File) {
			self.load_translation_file(&relative.join(&expected), root, locale)?;
			return Ok(true);
		}
		if !head.is_empty() && inspect(&dir.join(head))? == Some(Entry::Dir) {
			return self.search_dir(&chain[1..], &relative.join(head), root, locale);
		}
		Ok(false)
	}

	/// Load every file of every load-path root written for `locale`
	///
	/// Roots are walked recursively in file-name order; missing roots are
	/// skipped. Returns the number of files loaded.
	pub fn load_everything(&mut self, locale: &str) -> I18nResult<usize> {
		let settings = self.settings;
		let mut loaded = 0;
		for root in &settings.load_path {
			if inspect(root)? != Some(Entry::Dir) {
				continue;
			}
			for entry in WalkDir::new(root).sort_by_file_name() {
				let entry = entry?;
				if !entry.file_type().is_file() {
					continue;
				}
				let file_name = entry.file_name().to_string_lossy();
				if !self.accepts(&file_name, locale) {
					continue;
				}
				let relative: PathBuf = entry
					.path()
					.strip_prefix(root)
					.unwrap_or(entry.path())
					.to_path_buf();
				self.load_translation_file(&relative, root, locale)?;
				loaded += 1;
			}
		}
		tracing::debug!(locale, files = loaded, "loaded every resource file");
		Ok(loaded)
	}
}
