//! Settings module.
//!
//! Named settings with defaults, readable and writable by name.
//!
//! # Examples
//!
//! ```rust
//! use parlance::conf::Settings;
//!
//! let settings = Settings::default();
//! assert_eq!(settings.filename_format, "{namespace}.{locale}.{format}");
//! ```

#[cfg(feature = "conf")]
pub use parlance_conf::*;
