//! Per-thread default context
//!
//! Applications that do not want to carry an [`I18n`] around can use the
//! default context of the current thread through these functions. Each
//! thread starts with `I18n::default()`.
//!
//! The closures given to [`with_default`] and [`with_default_mut`] must not
//! call back into this module.

use crate::error::I18nResult;
use crate::format::Args;
use crate::translator::I18n;
use crate::value::TranslationValue;
use parlance_loaders::Value;
use std::cell::RefCell;

thread_local! {
	static DEFAULT: RefCell<I18n> = RefCell::new(I18n::default());
}

/// Run `f` with the default context
pub fn with_default<R>(f: impl FnOnce(&I18n) -> R) -> R {
	DEFAULT.with(|cell| f(&cell.borrow()))
}

/// Run `f` with the default context, mutably
pub fn with_default_mut<R>(f: impl FnOnce(&mut I18n) -> R) -> R {
	DEFAULT.with(|cell| f(&mut cell.borrow_mut()))
}

/// Translate a key with the default context
///
/// ```
/// use parlance_i18n::global;
///
/// global::add("foo.hi", "Hello");
/// assert_eq!(global::t("foo.hi").unwrap(), "Hello");
/// ```
pub fn t(key: &str) -> I18nResult<String> {
	with_default_mut(|i18n| i18n.t(key))
}

/// Translate a key with arguments with the default context
pub fn t_with(key: &str, args: &Args) -> I18nResult<String> {
	with_default_mut(|i18n| i18n.t_with(key, args))
}

/// Register a value in the default context for its current locale
pub fn add(key: impl Into<String>, value: impl Into<TranslationValue>) {
	with_default_mut(|i18n| i18n.add(key, value));
}

/// Update a setting of the default context
pub fn set(name: &str, value: impl Into<Value>) -> I18nResult<()> {
	with_default_mut(|i18n| i18n.set(name, value))
}

/// Read a setting of the default context
pub fn get(name: &str) -> Option<Value> {
	with_default(|i18n| i18n.get(name))
}

/// Swap in a new default context, returning the previous one
pub fn replace(i18n: I18n) -> I18n {
	DEFAULT.with(|cell| cell.replace(i18n))
}

/// Restore the default context to `I18n::default()`
pub fn reset() {
	replace(I18n::default());
}
