//! Plural form selection

use crate::value::{PluralCategory, PluralForms, TranslationValue};

/// Outcome of [`select`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PluralSelection<'a> {
	/// Template chosen for the count
	Selected(&'a str),
	/// No form fits, or the value holds no plural forms
	Missing,
}

/// Pick the template for `count` out of a plural value
///
/// - `0` takes `zero`, then `many`, then `other`
/// - `1` takes `one` only
/// - `2..=few_threshold` takes `few`, then falls through
/// - anything else takes `many`, then `other`
///
/// Negative counts land in the last group.
///
/// ```
/// use parlance_i18n::plural::{PluralSelection, select};
/// use parlance_i18n::{PluralForms, TranslationValue};
///
/// let value = TranslationValue::from(
///     PluralForms::new()
///         .with("one", "1 mail")
///         .with("many", "%{count} mails"),
/// );
///
/// assert_eq!(select(1, &value, 5), PluralSelection::Selected("1 mail"));
/// assert_eq!(select(3, &value, 5), PluralSelection::Selected("%{count} mails"));
/// ```
pub fn select(count: i64, value: &TranslationValue, few_threshold: i64) -> PluralSelection<'_> {
	let Some(forms) = value.as_plural() else {
		return PluralSelection::Missing;
	};

	let candidates: &[PluralCategory] = match count {
		0 => &[PluralCategory::Zero, PluralCategory::Many, PluralCategory::Other],
		1 => &[PluralCategory::One],
		n if n > 1 && n <= few_threshold => {
			&[PluralCategory::Few, PluralCategory::Many, PluralCategory::Other]
		}
		_ => &[PluralCategory::Many, PluralCategory::Other],
	};
	first_present(forms, candidates)
}

fn first_present<'a>(forms: &'a PluralForms, candidates: &[PluralCategory]) -> PluralSelection<'a> {
	candidates
		.iter()
		.find_map(|category| forms.get(*category))
		.map_or(PluralSelection::Missing, PluralSelection::Selected)
}
