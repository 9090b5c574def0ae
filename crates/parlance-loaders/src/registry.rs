//! Extension-keyed parser registry and resource loading.

use crate::error::{LoaderError, LoaderResult};
use crate::formats::{JsonParser, TomlParser, YamlParser};
use crate::parser::ResourceParser;
use encoding_rs::Encoding;
use serde_json::Value;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// How resource files are read
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoaderOptions {
	/// Encoding label (WHATWG names such as `utf-8`, `euc-jp`, `shift_jis`)
	pub encoding: String,
	/// Serve repeated reads of the same file from memory
	pub memoize: bool,
}

impl Default for LoaderOptions {
	fn default() -> Self {
		Self {
			encoding: "utf-8".to_string(),
			memoize: false,
		}
	}
}

/// Parsers keyed by file extension, plus the file-content memo cache
///
/// # Examples
///
/// ```no_run
/// use parlance_loaders::{LoaderOptions, LoaderRegistry};
/// use std::path::Path;
///
/// let mut registry = LoaderRegistry::with_defaults();
/// let data = registry
///     .load_resource(Path::new("locales/foo.en.yml"), Some("en"), &LoaderOptions::default())
///     .unwrap();
/// assert!(data.is_object());
/// ```
#[derive(Default)]
pub struct LoaderRegistry {
	parsers: HashMap<String, Arc<dyn ResourceParser>>,
	cache: HashMap<PathBuf, Vec<u8>>,
}

impl LoaderRegistry {
	/// Create an empty registry
	pub fn new() -> Self {
		Self::default()
	}

	/// Create a registry with the YAML, JSON and TOML parsers registered
	pub fn with_defaults() -> Self {
		let mut registry = Self::new();
		registry.register_builtin("yml", Arc::new(YamlParser));
		registry.register_builtin("yaml", Arc::new(YamlParser));
		registry.register_builtin("json", Arc::new(JsonParser));
		registry.register_builtin("toml", Arc::new(TomlParser));
		registry
	}

	fn register_builtin(&mut self, extension: &str, parser: Arc<dyn ResourceParser>) {
		self.parsers.insert(extension.to_string(), parser);
	}

	/// Register `parser` for files ending in `.{extension}`
	///
	/// Replaces any parser previously registered for the extension.
	///
	/// # Errors
	///
	/// [`LoaderError::InvalidLoader`] when the extension is empty, carries a
	/// leading dot or contains a path separator.
	pub fn register(
		&mut self,
		extension: impl Into<String>,
		parser: Arc<dyn ResourceParser>,
	) -> LoaderResult<()> {
		let extension = extension.into();
		if extension.is_empty()
			|| extension.starts_with('.')
			|| extension.contains(['/', '\\'])
		{
			return Err(LoaderError::InvalidLoader(extension));
		}
		tracing::debug!(extension = %extension, format = parser.name(), "registered resource parser");
		self.parsers.insert(extension, parser);
		Ok(())
	}

	/// Register one parser under several extensions
	pub fn register_all<I, S>(&mut self, extensions: I, parser: Arc<dyn ResourceParser>) -> LoaderResult<()>
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		for extension in extensions {
			self.register(extension, Arc::clone(&parser))?;
		}
		Ok(())
	}

	/// Whether a parser is registered for `extension`
	pub fn is_registered(&self, extension: &str) -> bool {
		self.parsers.contains_key(extension)
	}

	/// Registered extensions, sorted
	pub fn extensions(&self) -> Vec<&str> {
		let mut extensions: Vec<&str> = self.parsers.keys().map(String::as_str).collect();
		extensions.sort_unstable();
		extensions
	}

	/// Parser registered for `extension`
	pub fn parser(&self, extension: &str) -> Option<&Arc<dyn ResourceParser>> {
		self.parsers.get(extension)
	}

	/// Drop every memoized file content
	pub fn clear_cache(&mut self) {
		self.cache.clear();
	}

	/// Number of memoized files
	pub fn cached_files(&self) -> usize {
		self.cache.len()
	}

	/// Load a resource file and optionally select a root subtree
	///
	/// With `root` set to `None` the whole parsed document is returned.
	///
	/// # Errors
	///
	/// - [`LoaderError::UnknownExtension`] when no parser handles the file
	/// - [`LoaderError::Io`] when the file cannot be read
	/// - [`LoaderError::UnknownEncoding`] for an unrecognised encoding label
	/// - [`LoaderError::ParseError`] for undecodable or malformed content
	/// - [`LoaderError::RootNotFound`] when `root` is absent
	pub fn load_resource(
		&mut self,
		path: &Path,
		root: Option<&str>,
		options: &LoaderOptions,
	) -> LoaderResult<Value> {
		let extension = path
			.extension()
			.and_then(|e| e.to_str())
			.unwrap_or_default();
		let parser = self
			.parsers
			.get(extension)
			.cloned()
			.ok_or_else(|| LoaderError::UnknownExtension {
				extension: extension.to_string(),
				path: path.to_path_buf(),
			})?;

		let bytes = self.read(path, options.memoize)?;
		let content = decode(path, &bytes, &options.encoding)?;
		let data = parser
			.parse(&content)
			.map_err(|err| LoaderError::ParseError {
				path: path.to_path_buf(),
				message: err.to_string(),
			})?;
		tracing::debug!(path = %path.display(), format = parser.name(), "parsed resource file");

		match root {
			None => Ok(data),
			Some(root) => parser
				.select_root(data, root)
				.ok_or_else(|| LoaderError::RootNotFound {
					path: path.to_path_buf(),
					root: root.to_string(),
				}),
		}
	}

	fn read(&mut self, path: &Path, memoize: bool) -> LoaderResult<Vec<u8>> {
		if !memoize {
			return read_file(path);
		}

		let key = std::path::absolute(path).map_err(|source| LoaderError::Io {
			path: path.to_path_buf(),
			source,
		})?;
		if let Some(bytes) = self.cache.get(&key) {
			tracing::trace!(path = %key.display(), "serving resource from memo cache");
			return Ok(bytes.clone());
		}
		let bytes = read_file(path)?;
		self.cache.insert(key, bytes.clone());
		Ok(bytes)
	}
}

impl std::fmt::Debug for LoaderRegistry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("LoaderRegistry")
			.field("extensions", &self.extensions())
			.field("cached_files", &self.cache.len())
			.finish()
	}
}

fn read_file(path: &Path) -> LoaderResult<Vec<u8>> {
	fs::read(path).map_err(|source| LoaderError::Io {
		path: path.to_path_buf(),
		source,
	})
}

fn decode(path: &Path, bytes: &[u8], label: &str) -> LoaderResult<String> {
	let encoding = Encoding::for_label(label.as_bytes())
		.ok_or_else(|| LoaderError::UnknownEncoding(label.to_string()))?;
	let (content, used, had_errors) = encoding.decode(bytes);
	if had_errors {
		return Err(LoaderError::ParseError {
			path: path.to_path_buf(),
			message: format!("content is not valid {}", used.name()),
		});
	}
	Ok(content.into_owned())
}
