//! Resource loading error types.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for resource loading.
pub type LoaderResult<T> = Result<T, LoaderError>;

/// Errors raised while registering parsers or loading resource files.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum LoaderError {
	/// No parser is registered for the file's extension.
	#[error("no loader available for extension '{extension}' ({})", .path.display())]
	UnknownExtension {
		/// Extension that was looked up.
		extension: String,
		/// File that was being loaded.
		path: PathBuf,
	},

	/// The extension a parser was registered under cannot name a file type.
	#[error("invalid loader registration for extension '{0}'")]
	InvalidLoader(String),

	/// The file could not be read.
	#[error("error loading file {}: {source}", .path.display())]
	Io {
		/// File that was being read.
		path: PathBuf,
		/// Underlying IO failure.
		#[source]
		source: std::io::Error,
	},

	/// The configured encoding label is not recognised.
	#[error("unknown encoding: {0}")]
	UnknownEncoding(String),

	/// The file content is malformed.
	#[error("error parsing {}: {message}", .path.display())]
	ParseError {
		/// File that failed to parse.
		path: PathBuf,
		/// Parser message.
		message: String,
	},

	/// The requested root key is absent from the parsed structure.
	#[error("error getting data from {}: {root} not defined", .path.display())]
	RootNotFound {
		/// File that was parsed.
		path: PathBuf,
		/// Missing root key.
		root: String,
	},

	/// The selected data is not a nested mapping.
	#[error("data in {} is not a mapping", .path.display())]
	NotAMapping {
		/// File that was parsed.
		path: PathBuf,
	},
}

/// Syntax errors reported by a [`ResourceParser`](crate::ResourceParser).
///
/// The registry attaches the file path when it turns one into
/// [`LoaderError::ParseError`].
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum SyntaxError {
	#[error("invalid YAML: {0}")]
	Yaml(#[from] serde_yaml::Error),

	#[error("invalid JSON: {0}")]
	Json(#[from] serde_json::Error),

	#[error("invalid TOML: {0}")]
	Toml(#[from] toml::de::Error),

	/// Malformed content in any other format.
	#[error("invalid {format}: {message}")]
	Invalid {
		/// Format name, as returned by [`ResourceParser::name`](crate::ResourceParser::name).
		format: &'static str,
		/// What is wrong with the content.
		message: String,
	},
}

impl SyntaxError {
	/// Report malformed content in `format`
	pub fn invalid(format: &'static str, message: impl Into<String>) -> Self {
		Self::Invalid {
			format,
			message: message.into(),
		}
	}
}
