//! Translation module.
//!
//! The translation context, its store, the resolver and the per-thread
//! default context.
//!
//! # Examples
//!
//! ```rust
//! use parlance::i18n::{Args, I18n};
//!
//! let mut i18n = I18n::default();
//! i18n.add("foo.hi", "Hello %{name} !");
//! assert_eq!(i18n.t_with("foo.hi", &Args::new().with("name", "Bob")).unwrap(), "Hello Bob !");
//! ```

#[cfg(feature = "i18n")]
pub use parlance_i18n::*;
