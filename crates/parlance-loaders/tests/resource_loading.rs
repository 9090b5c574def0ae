//! Resource loading through the registry: formats, encodings and custom parsers

use parlance_loaders::{LoaderError, LoaderOptions, LoaderRegistry, ResourceParser, SyntaxError, Value};
use rstest::rstest;
use serde_json::json;
use std::fs;
use std::sync::Arc;
use tempfile::TempDir;

#[rstest]
#[case("dummy_config.yml", "settings:\n  foo: bar\n  nested:\n    key: value\n")]
#[case("dummy_config.json", r#"{"settings": {"foo": "bar", "nested": {"key": "value"}}}"#)]
#[case("dummy_config.toml", "[settings]\nfoo = \"bar\"\n\n[settings.nested]\nkey = \"value\"\n")]
fn test_every_builtin_format_yields_same_mapping(#[case] name: &str, #[case] content: &str) {
	// Arrange
	let dir = TempDir::new().unwrap();
	let path = dir.path().join(name);
	fs::write(&path, content).unwrap();
	let mut registry = LoaderRegistry::with_defaults();

	// Act
	let data = registry
		.load_resource(&path, Some("settings"), &LoaderOptions::default())
		.unwrap();

	// Assert
	assert_eq!(data, json!({ "foo": "bar", "nested": { "key": "value" } }));
}

#[rstest]
fn test_file_with_legacy_encoding() {
	// Arrange
	let dir = TempDir::new().unwrap();
	let path = dir.path().join("eucjp_config.json");
	let (bytes, _, _) = encoding_rs::EUC_JP.encode(r#"{"settings": {"ほげ": "ホゲ"}}"#);
	fs::write(&path, &bytes).unwrap();
	let mut registry = LoaderRegistry::with_defaults();
	let options = LoaderOptions {
		encoding: "euc-jp".to_string(),
		..LoaderOptions::default()
	};

	// Act
	let data = registry.load_resource(&path, Some("settings"), &options).unwrap();

	// Assert
	assert_eq!(data["ほげ"], "ホゲ");
}

#[rstest]
fn test_malformed_file_reports_path() {
	// Arrange
	let dir = TempDir::new().unwrap();
	let path = dir.path().join("foo.en.json");
	fs::write(&path, "{ not json").unwrap();
	let mut registry = LoaderRegistry::with_defaults();

	// Act
	let err = registry
		.load_resource(&path, Some("en"), &LoaderOptions::default())
		.unwrap_err();

	// Assert
	match err {
		LoaderError::ParseError { path: failed, message } => {
			assert_eq!(failed, path);
			assert!(message.starts_with("invalid JSON"));
		}
		other => panic!("unexpected error: {other}"),
	}
}

struct PropertiesParser;

impl ResourceParser for PropertiesParser {
	fn name(&self) -> &'static str {
		"properties"
	}

	fn parse(&self, content: &str) -> Result<Value, SyntaxError> {
		let mut root = serde_json::Map::new();
		for line in content.lines().map(str::trim).filter(|l| !l.is_empty()) {
			let (key, value) = line
				.split_once('=')
				.ok_or_else(|| SyntaxError::invalid(self.name(), format!("missing '=' in line {line:?}")))?;
			root.insert(key.trim().to_string(), Value::from(value.trim()));
		}
		Ok(Value::Object(root))
	}
}

#[rstest]
fn test_custom_parser_registration() {
	// Arrange
	let dir = TempDir::new().unwrap();
	let path = dir.path().join("messages.properties");
	fs::write(&path, "greeting = Hello\nfarewell = Bye\n").unwrap();
	let mut registry = LoaderRegistry::new();
	registry
		.register_all(["properties", "props"], Arc::new(PropertiesParser))
		.unwrap();

	// Act
	let data = registry
		.load_resource(&path, None, &LoaderOptions::default())
		.unwrap();

	// Assert
	assert!(registry.is_registered("props"));
	assert_eq!(data, json!({ "greeting": "Hello", "farewell": "Bye" }));
}

#[rstest]
fn test_custom_parser_error_names_file() {
	// Arrange
	let dir = TempDir::new().unwrap();
	let path = dir.path().join("broken.properties");
	fs::write(&path, "greeting\n").unwrap();
	let mut registry = LoaderRegistry::new();
	registry.register("properties", Arc::new(PropertiesParser)).unwrap();

	// Act
	let result = registry.load_resource(&path, None, &LoaderOptions::default());

	// Assert
	match result {
		Err(LoaderError::ParseError { path: failed, message }) => {
			assert_eq!(failed, path);
			assert_eq!(message, "invalid properties: missing '=' in line \"greeting\"");
		}
		other => panic!("expected a parse error, got {other:?}"),
	}
}
