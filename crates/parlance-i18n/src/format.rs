//! Lookup arguments and placeholder substitution

use crate::error::FormatError;
use std::collections::HashMap;

/// Keyword arguments of a lookup
///
/// `count` drives plural selection and is also available to templates as
/// the `count` placeholder. `locale` overrides the configured locale for the
/// lookup, and `default` is returned when no locale resolves the key.
///
/// # Example
///
/// ```
/// use parlance_i18n::Args;
///
/// let args = Args::new().with("name", "Bob").count(3);
///
/// assert_eq!(args.get("name").as_deref(), Some("Bob"));
/// assert_eq!(args.get("count").as_deref(), Some("3"));
/// assert_eq!(args.get("missing"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Args {
	values: HashMap<String, String>,
	count: Option<i64>,
	locale: Option<String>,
	default: Option<String>,
}

impl Args {
	pub fn new() -> Self {
		<Self as Default>::default()
	}

	/// Bind a placeholder value
	pub fn with(mut self, name: impl Into<String>, value: impl ToString) -> Self {
		self.values.insert(name.into(), value.to_string());
		self
	}

	/// Set the plural count
	pub fn count(mut self, count: i64) -> Self {
		self.count = Some(count);
		self
	}

	/// Look the key up in this locale instead of the configured one
	pub fn locale(mut self, locale: impl Into<String>) -> Self {
		self.locale = Some(locale.into());
		self
	}

	/// Text returned when the key resolves nowhere
	pub fn default(mut self, text: impl Into<String>) -> Self {
		self.default = Some(text.into());
		self
	}

	/// Placeholder value, with `count` exposed under its own name
	///
	/// An explicit `count` binding made with [`Args::with`] wins over the
	/// plural count.
	pub fn get(&self, name: &str) -> Option<std::borrow::Cow<'_, str>> {
		if let Some(value) = self.values.get(name) {
			return Some(value.as_str().into());
		}
		match (name, self.count) {
			("count", Some(count)) => Some(count.to_string().into()),
			_ => None,
		}
	}

	pub fn count_value(&self) -> Option<i64> {
		self.count
	}

	pub fn locale_value(&self) -> Option<&str> {
		self.locale.as_deref()
	}

	pub fn default_value(&self) -> Option<&str> {
		self.default.as_deref()
	}
}

/// Substitutes `<delimiter>{name}` placeholders in templates
///
/// A doubled delimiter renders one literal delimiter. Names follow identifier
/// rules (`[A-Za-z_][A-Za-z0-9_]*`); any other text after a delimiter is
/// copied through untouched.
///
/// ```
/// use parlance_i18n::{Args, Formatter};
///
/// let formatter = Formatter::new("%");
/// let args = Args::new().with("name", "Bob");
///
/// assert_eq!(formatter.format("Hello %{name} !", &args).unwrap(), "Hello Bob !");
/// assert_eq!(formatter.format("100%% %{who}", &args).unwrap(), "100% %{who}");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Formatter {
	delimiter: String,
	strict: bool,
}

impl Formatter {
	/// Lenient formatter: unknown placeholders stay in the output
	pub fn new(delimiter: impl Into<String>) -> Self {
		Self {
			delimiter: delimiter.into(),
			strict: false,
		}
	}

	/// Report the first unknown placeholder instead of keeping it
	pub fn strict(mut self, strict: bool) -> Self {
		self.strict = strict;
		self
	}

	/// Render `template` against `args`
	///
	/// # Errors
	///
	/// In strict mode, [`FormatError::MissingPlaceholder`] for the first
	/// placeholder `args` cannot fill.
	pub fn format(&self, template: &str, args: &Args) -> Result<String, FormatError> {
		let delimiter = self.delimiter.as_str();
		if delimiter.is_empty() {
			return Ok(template.to_string());
		}

		let mut out = String::with_capacity(template.len());
		let mut rest = template;
		while let Some(pos) = rest.find(delimiter) {
			out.push_str(&rest[..pos]);
			let after = &rest[pos + delimiter.len()..];

			if let Some(tail) = after.strip_prefix(delimiter) {
				out.push_str(delimiter);
				rest = tail;
				continue;
			}

			match placeholder(after) {
				Some((name, tail)) => {
					match args.get(name) {
						Some(value) => out.push_str(&value),
						None if self.strict => return Err(FormatError::MissingPlaceholder(name.to_string())),
						None => {
							out.push_str(delimiter);
							out.push_str(&after[..after.len() - tail.len()]);
						}
					}
					rest = tail;
				}
				None => {
					out.push_str(delimiter);
					rest = after;
				}
			}
		}
		out.push_str(rest);
		Ok(out)
	}
}

/// Split `{name}rest` into `name` and `rest`
fn placeholder(text: &str) -> Option<(&str, &str)> {
	let inner = text.strip_prefix('{')?;
	let end = inner.find('}')?;
	let name = &inner[..end];
	let mut chars = name.chars();
	let head = chars.next()?;
	if !(head.is_ascii_alphabetic() || head == '_')
		|| !chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
	{
		return None;
	}
	Some((name, &inner[end + 1..]))
}
