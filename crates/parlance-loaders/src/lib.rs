//! # Parlance Loaders
//!
//! Turns resource files into nested mappings for the translation engine.
//!
//! Parsers implement [`ResourceParser`] and are registered in a
//! [`LoaderRegistry`] under the file extensions they handle. The registry
//! reads the file (optionally from its memo cache), decodes it with the
//! configured encoding, parses it, and selects the requested root subtree.
//!
//! ## Built-in formats
//!
//! | Extension | Parser |
//! |---|---|
//! | `yml`, `yaml` | [`YamlParser`] |
//! | `json` | [`JsonParser`] |
//! | `toml` | [`TomlParser`] |

pub mod error;
pub mod formats;
pub mod parser;
pub mod registry;

pub use error::{LoaderError, LoaderResult, SyntaxError};
pub use formats::{JsonParser, TomlParser, YamlParser};
pub use parser::ResourceParser;
pub use registry::{LoaderOptions, LoaderRegistry};

/// Re-exported so callers can build and inspect parsed data
pub use serde_json::Value;
