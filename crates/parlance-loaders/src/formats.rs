//! Built-in parsers for the supported resource formats.
//!
//! Every format is normalised into [`serde_json::Value`] so the resolver only
//! ever walks one representation, whichever file it came from.

use crate::error::SyntaxError;
use crate::parser::ResourceParser;
use serde_json::{Map, Number, Value};

/// YAML resources (`.yml`, `.yaml`)
#[derive(Debug, Clone, Copy, Default)]
pub struct YamlParser;

impl ResourceParser for YamlParser {
	fn name(&self) -> &'static str {
		"YAML"
	}

	fn parse(&self, content: &str) -> Result<Value, SyntaxError> {
		let yaml: serde_yaml::Value = serde_yaml::from_str(content)?;
		yaml_to_json(yaml)
	}
}

fn yaml_to_json(value: serde_yaml::Value) -> Result<Value, SyntaxError> {
	use serde_yaml::Value as Yaml;

	Ok(match value {
		Yaml::Null => Value::Null,
		Yaml::Bool(b) => Value::Bool(b),
		Yaml::Number(n) => yaml_number(&n),
		Yaml::String(s) => Value::String(s),
		Yaml::Sequence(items) => Value::Array(
			items
				.into_iter()
				.map(yaml_to_json)
				.collect::<Result<Vec<_>, _>>()?,
		),
		Yaml::Mapping(mapping) => {
			let mut map = Map::with_capacity(mapping.len());
			for (key, value) in mapping {
				let key = match key {
					Yaml::String(s) => s,
					Yaml::Bool(b) => b.to_string(),
					Yaml::Number(n) => n.to_string(),
					other => {
						return Err(SyntaxError::invalid(
							"YAML",
							format!("unsupported mapping key {:?}", other),
						));
					}
				};
				map.insert(key, yaml_to_json(value)?);
			}
			Value::Object(map)
		}
		Yaml::Tagged(tagged) => yaml_to_json(tagged.value)?,
	})
}

fn yaml_number(n: &serde_yaml::Number) -> Value {
	if let Some(i) = n.as_i64() {
		Value::from(i)
	} else if let Some(u) = n.as_u64() {
		Value::from(u)
	} else {
		n.as_f64()
			.and_then(Number::from_f64)
			.map(Value::Number)
			.unwrap_or(Value::Null)
	}
}

/// JSON resources (`.json`)
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonParser;

impl ResourceParser for JsonParser {
	fn name(&self) -> &'static str {
		"JSON"
	}

	fn parse(&self, content: &str) -> Result<Value, SyntaxError> {
		Ok(serde_json::from_str(content)?)
	}
}

/// TOML resources (`.toml`)
#[derive(Debug, Clone, Copy, Default)]
pub struct TomlParser;

impl ResourceParser for TomlParser {
	fn name(&self) -> &'static str {
		"TOML"
	}

	fn parse(&self, content: &str) -> Result<Value, SyntaxError> {
		let table: toml::Table = toml::from_str(content)?;
		Ok(toml_to_json(toml::Value::Table(table)))
	}
}

fn toml_to_json(value: toml::Value) -> Value {
	match value {
		toml::Value::String(s) => Value::String(s),
		toml::Value::Integer(i) => Value::from(i),
		toml::Value::Float(f) => Number::from_f64(f)
			.map(Value::Number)
			.unwrap_or(Value::Null),
		toml::Value::Boolean(b) => Value::Bool(b),
		toml::Value::Datetime(dt) => Value::String(dt.to_string()),
		toml::Value::Array(items) => Value::Array(items.into_iter().map(toml_to_json).collect()),
		toml::Value::Table(table) => Value::Object(
			table
				.into_iter()
				.map(|(key, value)| (key, toml_to_json(value)))
				.collect(),
		),
	}
}
