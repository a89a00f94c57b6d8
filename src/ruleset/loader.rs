use std::fs;
use std::io::Read;
use std::path::Path;

use log::debug;
use serde_json::Value;
use thiserror::Error;

use crate::builder::{BuilderConfig, RuleBuilder};

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Expected a JSON object of field rules, found {0}")]
    NotAnObject(&'static str),
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

// Seed documents map field names to any rule spec shape: strings, numbers,
// nested arrays. Key order is preserved.
impl RuleBuilder {
    pub fn from_json_value(value: Value, config: BuilderConfig) -> Result<Self, LoadError> {
        let fields = match value {
            Value::Object(fields) => fields,
            other => return Err(LoadError::NotAnObject(json_kind(&other))),
        };

        let mut builder = RuleBuilder::with_config(config);
        builder.seed(fields);
        debug!("seeded {} fields from JSON", builder.len());
        Ok(builder)
    }

    pub fn from_json_str(json: &str) -> Result<Self, LoadError> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_json_value(value, BuilderConfig::v0())
    }

    pub fn from_json_reader<R: Read>(reader: R, config: BuilderConfig) -> Result<Self, LoadError> {
        let value: Value = serde_json::from_reader(reader)?;
        Self::from_json_value(value, config)
    }

    pub fn from_json_file(path: &Path, config: BuilderConfig) -> Result<Self, LoadError> {
        let f = fs::File::open(path)?;
        Self::from_json_reader(std::io::BufReader::new(f), config)
    }
}
