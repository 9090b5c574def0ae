//! Resource loaders module.
//!
//! Parsers for YAML, JSON and TOML resource files and the registry that
//! dispatches files to them by extension.
//!
//! # Examples
//!
//! ```rust
//! use parlance::loaders::LoaderRegistry;
//!
//! let registry = LoaderRegistry::with_defaults();
//! assert_eq!(registry.extensions(), vec!["json", "toml", "yaml", "yml"]);
//! ```

#[cfg(feature = "loaders")]
pub use parlance_loaders::*;
