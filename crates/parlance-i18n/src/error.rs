//! Translation engine error types.

use parlance_conf::ConfigError;
use parlance_loaders::LoaderError;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for translation operations.
pub type I18nResult<T> = Result<T, I18nError>;

/// Errors surfaced by the store, the resolver and the translator.
///
/// The three `error_on_missing_*` settings decide whether
/// [`TranslationNotFound`](I18nError::TranslationNotFound),
/// [`PlaceholderMissing`](I18nError::PlaceholderMissing) and
/// [`PluralCategoryMissing`](I18nError::PluralCategoryMissing) are raised at
/// all; every other variant is always fatal to the operation that hit it.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum I18nError {
	/// Reading, decoding or parsing a resource file failed.
	#[error(transparent)]
	Loader(#[from] LoaderError),

	/// A setting could not be applied.
	#[error(transparent)]
	Config(#[from] ConfigError),

	/// A resource filename does not fit the configured pattern.
	#[error("incorrect file format: '{}' does not match '{pattern}'", .path.display())]
	MalformedFilename {
		/// Offending relative path.
		path: PathBuf,
		/// Configured filename pattern.
		pattern: String,
	},

	/// The store holds no value for the key in that locale.
	#[error("key {key} not found for locale {locale}")]
	KeyNotFound {
		/// Requested key.
		key: String,
		/// Requested locale.
		locale: String,
	},

	/// No locale in the chain, nor the fallback, resolves the key.
	#[error("key {key} not found")]
	TranslationNotFound {
		/// Requested key.
		key: String,
		/// Locale the lookup started from.
		locale: String,
	},

	/// A template references an argument that was not supplied.
	#[error("placeholder '{name}' missing for key {key}")]
	PlaceholderMissing {
		/// Key whose template was formatted.
		key: String,
		/// Placeholder name.
		name: String,
	},

	/// No plural form matches the count.
	#[error("no plural form for key {key} (count: {count:?})")]
	PluralCategoryMissing {
		/// Key that was pluralized.
		key: String,
		/// Requested count, if any.
		count: Option<i64>,
	},

	/// A directory on the load path could not be inspected.
	#[error("error reading {}: {source}", .path.display())]
	Io {
		/// Path that was inspected.
		path: PathBuf,
		/// Underlying IO failure.
		#[source]
		source: std::io::Error,
	},

	/// Walking a load-path root failed.
	#[error(transparent)]
	Walk(#[from] walkdir::Error),
}

/// Failure to render a template in strict mode
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
	/// No argument fills the named placeholder.
	#[error("no value for placeholder '{0}'")]
	MissingPlaceholder(String),
}
