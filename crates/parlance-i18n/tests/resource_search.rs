//! Loading translations from resource trees on disk

use parlance_conf::Settings;
use parlance_i18n::{Args, I18n, I18nError, PluralForms, TranslationValue};
use parlance_loaders::LoaderError;
use rstest::{fixture, rstest};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write(root: &Path, relative: &str, content: &str) {
	let path = root.join(relative);
	if let Some(parent) = path.parent() {
		fs::create_dir_all(parent).unwrap();
	}
	fs::write(path, content).unwrap();
}

/// Namespaced tree: `foo.{locale}.yml`, `bar/baz.en.yml`
#[fixture]
fn translations() -> TempDir {
	let dir = TempDir::new().unwrap();
	write(
		dir.path(),
		"foo.en.yml",
		"en:
  normal_key: normal_value
  parent:
    nested_key: nested_value
  mail_number:
    zero: no mail
    one: 1 mail
    few: only %{count} mails
    many: '%{count} mails'
  greetings:
    - hello %{name}
    - bye
",
	);
	write(dir.path(), "foo.ja.yml", "ja:\n  fallback_key: フォールバック\n");
	write(dir.path(), "bar/baz.en.yml", "en:\n  qux: quux\n");
	dir
}

fn context(root: &Path) -> I18n {
	I18n::new(Settings::new().with_load_path([root]))
}

#[rstest]
fn test_load_translation_file_flattens_namespace(translations: TempDir) {
	// Arrange
	let mut i18n = context(translations.path());

	// Act
	i18n.resolver()
		.load_translation_file(Path::new("foo.en.yml"), translations.path(), "en")
		.unwrap();

	// Assert
	let store = i18n.store();
	assert_eq!(
		store.get("foo.normal_key", "en").unwrap(),
		&TranslationValue::from("normal_value")
	);
	assert!(store.has("foo.parent.nested_key", "en"));
	assert!(!store.has("foo.parent", "en"));
	assert_eq!(
		store.get("foo.mail_number", "en").unwrap().as_plural(),
		Some(
			&PluralForms::new()
				.with("zero", "no mail")
				.with("one", "1 mail")
				.with("few", "only %{count} mails")
				.with("many", "%{count} mails")
		)
	);
	assert_eq!(
		store.get("foo.greetings", "en").unwrap(),
		&TranslationValue::from(vec!["hello %{name}", "bye"])
	);
}

#[rstest]
fn test_lookup_loads_lazily(translations: TempDir) {
	// Arrange
	let mut i18n = context(translations.path());
	assert!(!i18n.has("foo.normal_key"));

	// Act
	let normal = i18n.t("foo.normal_key").unwrap();
	let nested_dir = i18n.t("bar.baz.qux").unwrap();
	let plural = i18n.t_with("foo.mail_number", &Args::new().count(4)).unwrap();

	// Assert
	assert_eq!(normal, "normal_value");
	assert_eq!(nested_dir, "quux");
	assert_eq!(plural, "only 4 mails");
	assert!(i18n.has("foo.parent.nested_key"));
}

#[rstest]
fn test_list_from_file(translations: TempDir) {
	// Arrange
	let mut i18n = context(translations.path());

	// Act
	let items = i18n
		.t_list("foo.greetings", &Args::new().with("name", "Bob"))
		.unwrap();

	// Assert
	assert_eq!(items, vec!["hello Bob", "bye"]);
}

#[rstest]
fn test_fallback_locale_from_file(translations: TempDir) {
	// Arrange
	let mut i18n = I18n::new(
		Settings::new()
			.with_locale("en")
			.with_fallback("ja")
			.with_load_path([translations.path()]),
	);

	// Act
	let text = i18n.t("foo.fallback_key").unwrap();

	// Assert
	assert_eq!(text, "フォールバック");
	assert!(i18n.store().has("foo.fallback_key", "ja"));
}

#[rstest]
fn test_search_exhaustion(translations: TempDir) {
	// Arrange
	let mut i18n = context(translations.path());

	// Act
	let found = i18n.resolver().search("nowhere.to.be.found", "en").unwrap();

	// Assert
	assert!(!found);
	assert!(!i18n.has("nowhere.to.be.found"));
	assert!(i18n.store().is_empty());
}

#[rstest]
#[case("../secret/x")]
#[case("./../secret/x")]
#[case("sub/../../secret/x")]
fn test_search_stays_inside_load_path(#[case] key: &str) {
	// Arrange
	let outer = TempDir::new().unwrap();
	let root = outer.path().join("root");
	write(&root, "sub/keep.en.yml", "en:\n  x: kept\n");
	write(outer.path(), "secret.en.yml", "en:\n  x: leaked\n");
	let mut i18n = context(&root);
	i18n.set("namespace_delimiter", "/").unwrap();

	// Act
	let found = i18n.resolver().search(key, "en").unwrap();
	let text = i18n.t(key).unwrap();

	// Assert
	assert!(!found);
	assert_eq!(text, key);
	assert!(i18n.store().is_empty());
}

#[rstest]
fn test_load_directory_on_missing_path_reports_io(translations: TempDir) {
	// Arrange
	let mut i18n = context(translations.path());
	let missing = translations.path().join("missing");

	// Act
	let result = i18n.resolver().load_directory(&missing, "en");

	// Assert
	assert!(matches!(result, Err(I18nError::Io { ref path, .. }) if *path == missing));
}

#[rstest]
fn test_load_directory_on_regular_file_reports_io(translations: TempDir) {
	// Arrange
	let mut i18n = context(translations.path());
	let file = translations.path().join("foo.en.yml");

	// Act
	let result = i18n.resolver().load_directory(&file, "en");

	// Assert
	assert!(matches!(result, Err(I18nError::Io { ref path, .. }) if *path == file));
	assert!(i18n.store().is_empty());
}

#[rstest]
fn test_uninspectable_root_fails_lookup(translations: TempDir) {
	// Arrange
	let unreadable = translations.path().join("bad\0root");
	let mut i18n = I18n::new(Settings::new().with_load_path([unreadable.as_path(), translations.path()]));

	// Act
	let result = i18n.t("foo.normal_key");

	// Assert
	assert!(matches!(result, Err(I18nError::Io { ref path, .. }) if *path == unreadable));
}

#[rstest]
fn test_missing_root_directory_is_skipped(translations: TempDir) {
	// Arrange
	let missing = translations.path().join("missing");
	let mut i18n = I18n::new(Settings::new().with_load_path([missing.as_path(), translations.path()]));

	// Act
	let text = i18n.t("foo.normal_key").unwrap();

	// Assert
	assert_eq!(text, "normal_value");
}

#[rstest]
fn test_idempotent_reload(translations: TempDir) {
	// Arrange
	let mut i18n = context(translations.path());
	let relative = Path::new("foo.en.yml");
	i18n.resolver()
		.load_translation_file(relative, translations.path(), "en")
		.unwrap();
	let first = i18n.store().clone();

	// Act
	i18n.resolver()
		.load_translation_file(relative, translations.path(), "en")
		.unwrap();

	// Assert
	assert_eq!(i18n.store().len(), first.len());
	for key in first.keys("en") {
		assert_eq!(i18n.store().get(key, "en").unwrap(), first.get(key, "en").unwrap());
	}
}

#[rstest]
fn test_first_root_wins() {
	// Arrange
	let first = TempDir::new().unwrap();
	let second = TempDir::new().unwrap();
	write(first.path(), "foo.en.yml", "en:\n  hi: from first\n");
	write(second.path(), "foo.en.yml", "en:\n  hi: from second\n  extra: only second\n");
	let mut i18n = I18n::new(Settings::new().with_load_path([first.path(), second.path()]));

	// Act
	let hi = i18n.t("foo.hi").unwrap();

	// Assert
	assert_eq!(hi, "from first");
	assert!(!i18n.has("foo.extra"));
}

#[rstest]
fn test_flat_layout_without_locale_root() {
	// Arrange
	let dir = TempDir::new().unwrap();
	write(dir.path(), "en.json", r#"{"hello": "Hello", "home": {"title": "Home"}}"#);
	write(dir.path(), "gb.json", r#"{"hello": "Cheerio"}"#);
	let mut i18n = I18n::new(
		Settings::new()
			.with_filename_format("{locale}.{format}")
			.with_file_format("json")
			.with_load_path([dir.path()]),
	);
	i18n.set("skip_locale_root_data", true).unwrap();

	// Act
	let hello = i18n.t("hello").unwrap();
	let cheerio = i18n.t_with("hello", &Args::new().locale("gb")).unwrap();
	let title = i18n.t("home.title").unwrap();

	// Assert
	assert_eq!(hello, "Hello");
	assert_eq!(cheerio, "Cheerio");
	assert_eq!(title, "Home");
}

#[rstest]
#[case("en", "Start", "Execute")]
#[case("pl", "Zaczynaj", "Wykonaj")]
fn test_flat_layout_in_subdirectory(#[case] locale: &str, #[case] start: &str, #[case] execute: &str) {
	// Arrange
	let dir = TempDir::new().unwrap();
	write(
		dir.path(),
		"nested_dict_json/en.json",
		r#"{"COMMON": {"START": "Start", "EXECUTE": "Execute"}}"#,
	);
	write(
		dir.path(),
		"nested_dict_json/pl.json",
		r#"{"COMMON": {"START": "Zaczynaj", "EXECUTE": "Wykonaj"}}"#,
	);
	let mut i18n = I18n::new(
		Settings::new()
			.with_locale(locale)
			.with_filename_format("{locale}.{format}")
			.with_file_format("json")
			.with_load_path([dir.path()]),
	);
	i18n.set("skip_locale_root_data", true).unwrap();

	// Act
	let started = i18n.t("nested_dict_json.COMMON.START").unwrap();
	let executed = i18n.t("nested_dict_json.COMMON.EXECUTE").unwrap();

	// Assert
	assert_eq!(started, start);
	assert_eq!(executed, execute);
}

#[rstest]
fn test_locale_before_namespace_pattern() {
	// Arrange
	let dir = TempDir::new().unwrap();
	write(dir.path(), "app/en.menu.toml", "[en]\nopen = \"Open\"\n");
	let mut i18n = I18n::new(
		Settings::new()
			.with_filename_format("{locale}.{namespace}.{format}")
			.with_file_format("toml")
			.with_load_path([dir.path()]),
	);

	// Act
	let text = i18n.t("app.menu.open").unwrap();

	// Assert
	assert_eq!(text, "Open");
}

#[rstest]
fn test_missing_locale_root_fails_loudly() {
	// Arrange
	let dir = TempDir::new().unwrap();
	write(dir.path(), "foo.fr.yml", "en:\n  hi: Hello\n");
	let mut i18n = I18n::new(Settings::new().with_locale("fr").with_load_path([dir.path()]));

	// Act
	let result = i18n.t("foo.hi");

	// Assert
	assert!(matches!(
		result,
		Err(I18nError::Loader(LoaderError::RootNotFound { ref root, .. })) if root == "fr"
	));
}

#[rstest]
fn test_malformed_located_file_fails_loudly() {
	// Arrange
	let dir = TempDir::new().unwrap();
	write(dir.path(), "broken.en.json", "{ \"en\": ");
	let mut i18n = I18n::new(
		Settings::new()
			.with_file_format("json")
			.with_load_path([dir.path()]),
	);

	// Act
	let result = i18n.t("broken.key");

	// Assert
	assert!(matches!(
		result,
		Err(I18nError::Loader(LoaderError::ParseError { .. }))
	));
}

#[rstest]
fn test_unknown_extension() {
	// Arrange
	let dir = TempDir::new().unwrap();
	write(dir.path(), "foo.en.ini", "hi = Hello\n");
	let mut i18n = context(dir.path());

	// Act
	let result = i18n
		.resolver()
		.load_translation_file(Path::new("foo.en.ini"), dir.path(), "en");

	// Assert
	assert!(matches!(
		result,
		Err(I18nError::Loader(LoaderError::UnknownExtension { ref extension, .. })) if extension == "ini"
	));
}

#[rstest]
fn test_load_directory_filters_format_and_locale(translations: TempDir) {
	// Arrange
	write(translations.path(), "notes.en.txt", "not a resource");
	let mut i18n = context(translations.path());

	// Act
	let loaded = i18n
		.resolver()
		.load_directory(translations.path(), "en")
		.unwrap();

	// Assert
	assert_eq!(loaded, 1);
	assert!(i18n.has("foo.normal_key"));
	assert!(!i18n.has_for("foo.fallback_key", "ja"));
	assert!(!i18n.has("bar.baz.qux"));
}

#[rstest]
fn test_load_everything(translations: TempDir) {
	// Arrange
	write(translations.path(), "bar/baz.en.json", r#"{"en": {"qux": "quux"}}"#);
	write(translations.path(), "bar/baz.ja.json", r#"{"ja": {"qux": "クックス"}}"#);
	let mut i18n = context(translations.path());
	i18n.set("file_format", "json").unwrap();
	i18n.set("available_locales", vec!["en", "ja"]).unwrap();

	// Act
	let loaded = i18n.load_everything(None).unwrap();

	// Assert
	assert_eq!(loaded, 2);
	assert!(i18n.has_for("bar.baz.qux", "en"));
	assert!(i18n.has_for("bar.baz.qux", "ja"));
	assert!(!i18n.has("foo.normal_key"));
}

#[rstest]
fn test_reload_everything_for_one_locale(translations: TempDir) {
	// Arrange
	let mut i18n = context(translations.path());
	i18n.add("manual.key", "manual");

	// Act
	let loaded = i18n.reload_everything(Some("ja")).unwrap();

	// Assert
	assert_eq!(loaded, 1);
	assert!(!i18n.has("manual.key"));
	assert!(i18n.has_for("foo.fallback_key", "ja"));
	assert_eq!(i18n.store().locales(), vec!["ja"]);
}

#[rstest]
fn test_memoized_files_survive_disk_changes(translations: TempDir) {
	// Arrange
	let mut i18n = context(translations.path());
	i18n.set("enable_memoization", true).unwrap();
	assert_eq!(i18n.t("foo.normal_key").unwrap(), "normal_value");
	write(translations.path(), "foo.en.yml", "en:\n  normal_key: changed\n");

	// Act
	i18n.store_mut().clear();
	let cached = i18n.t("foo.normal_key").unwrap();
	i18n.unload_everything();
	let fresh = i18n.t("foo.normal_key").unwrap();

	// Assert
	assert_eq!(cached, "normal_value");
	assert_eq!(fresh, "changed");
}

#[rstest]
fn test_custom_namespace_delimiter(translations: TempDir) {
	// Arrange
	let mut i18n = context(translations.path());
	i18n.set("namespace_delimiter", "/").unwrap();

	// Act
	let text = i18n.t("foo/parent/nested_key").unwrap();

	// Assert
	assert_eq!(text, "nested_value");
}
