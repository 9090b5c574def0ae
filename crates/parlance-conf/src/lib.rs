//! # Parlance Configuration
//!
//! Named settings consulted by the translation engine: the active locale
//! chain, the fallback locale, where resource files live and how they are
//! named, and the strict/lenient failure policies.
//!
//! Every setting has a default, can be read and written by name (so a
//! settings file or an embedding application can drive it dynamically), and
//! is also available as a typed field.
//!
//! ## Example
//!
//! ```
//! use parlance_conf::Settings;
//!
//! let mut settings = Settings::default();
//! settings.set("locale", "fr").unwrap();
//! settings.set("error_on_missing_translation", true).unwrap();
//!
//! assert_eq!(settings.locale(), "fr");
//! assert!(settings.error_on_missing_translation);
//! assert!(settings.set("no_such_setting", 1).is_err());
//! ```

pub mod error;
pub mod settings;

pub use error::{ConfigError, ConfigResult};
pub use settings::{SETTING_NAMES, Settings};
