//! # Parlance I18n
//!
//! Translation lookup by dotted key, with lazy loading of resource files,
//! plural selection by count and placeholder substitution.
//!
//! ## Overview
//!
//! An [`I18n`] context owns the [`Settings`](parlance_conf::Settings), a
//! [`TranslationStore`] and a [`LoaderRegistry`](parlance_loaders::LoaderRegistry).
//! Values are registered directly or loaded from files found on the load
//! path. A key that is not yet stored makes the context look for the file
//! that should hold it, load it whole, and retry. When no locale resolves
//! the key, the context returns the caller's default, the key itself, or an
//! error when `error_on_missing_translation` is set.
//!
//! ## Example
//!
//! ```
//! use parlance_i18n::{Args, I18n, PluralForms};
//!
//! let mut i18n = I18n::default();
//! i18n.add(
//!     "mail.count",
//!     PluralForms::new()
//!         .with("zero", "no mail")
//!         .with("one", "1 mail")
//!         .with("many", "%{count} mails"),
//! );
//!
//! assert_eq!(i18n.t_with("mail.count", &Args::new().count(0)).unwrap(), "no mail");
//! assert_eq!(i18n.t_with("mail.count", &Args::new().count(7)).unwrap(), "7 mails");
//! ```
//!
//! ## Resource files
//!
//! With the default pattern `{namespace}.{locale}.{format}`, the key
//! `foo.bar.hello` is looked up in `foo/bar.en.yml` under each load-path
//! root, and the file content is expected under an `en` root key unless
//! `skip_locale_root_data` is set.

pub mod error;
pub mod format;
pub mod global;
pub mod plural;
pub mod resolver;
pub mod store;
pub mod translator;
pub mod value;

pub use error::{FormatError, I18nError, I18nResult};
pub use format::{Args, Formatter};
pub use plural::PluralSelection;
pub use resolver::Resolver;
pub use store::TranslationStore;
pub use translator::I18n;
pub use value::{PluralCategory, PluralForms, TranslationValue, ValueKind, classify};
