//! # Parlance
//!
//! Translation lookup by dotted key for Rust applications.
//!
//! Translations live in YAML, JSON or TOML files organised by namespace and
//! locale. They are loaded on first use, selected by count for plural forms,
//! and filled with named placeholders. Missing content degrades to the key
//! itself unless strict mode is switched on.
//!
//! ## Feature Flags
//!
//! - `full` (default) - Everything below
//! - `conf` - Settings ([`parlance-conf`](parlance_conf))
//! - `loaders` - Resource parsers ([`parlance-loaders`](parlance_loaders))
//! - `i18n` - Translation engine ([`parlance-i18n`](parlance_i18n)), implies `conf` and `loaders`
//!
//! ## Quick Example
//!
//! ```rust
//! use parlance::prelude::*;
//!
//! let mut i18n = I18n::new(Settings::new().with_locale("fr").with_fallback("en"));
//! i18n.add_for("greeting", "Hello %{name}", "en");
//!
//! let text = i18n.t_with("greeting", &Args::new().with("name", "Ada")).unwrap();
//! assert_eq!(text, "Hello Ada");
//! ```

#[cfg(feature = "conf")]
pub mod conf;
#[cfg(feature = "i18n")]
pub mod i18n;
#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "conf")]
pub use parlance_conf::{ConfigError, Settings};

#[cfg(feature = "loaders")]
pub use parlance_loaders::{LoaderError, LoaderRegistry, ResourceParser, SyntaxError};

#[cfg(feature = "i18n")]
pub use parlance_i18n::{
	Args, I18n, I18nError, I18nResult, PluralCategory, PluralForms, TranslationStore,
	TranslationValue, global,
};

/// Commonly used types
pub mod prelude {
	#[cfg(feature = "conf")]
	pub use crate::Settings;

	#[cfg(feature = "loaders")]
	pub use crate::{LoaderRegistry, ResourceParser};

	#[cfg(feature = "i18n")]
	pub use crate::{Args, I18n, I18nError, I18nResult, PluralForms, TranslationValue, global};
}
