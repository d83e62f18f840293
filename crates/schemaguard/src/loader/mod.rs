//! Loading database schemas from YAML and JSON documents
//!
//! The loader is the only part of the crate that touches the filesystem. It
//! parses a document into an untyped value and hands it to
//! [`SchemaValidator`](crate::validation::SchemaValidator).
//!
//! # Example Usage
//!
//! ```rust,no_run
//! use schemaguard::loader::SchemaLoader;
//! use std::path::Path;
//!
//! let loader = SchemaLoader::new();
//! let schema = loader.load_file(Path::new("shop.yaml"))?;
//! println!("Loaded database '{}' with {} tables", schema.name, schema.tables.len());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! Copyright (c) 2025 Schemaguard Team
//! Licensed under the Apache-2.0 license

pub mod error;
pub mod parser;

pub use error::{LoaderError, LoaderResult};
pub use parser::{Format, SchemaParser};

use crate::model::DatabaseSchema;
use crate::validation::{SchemaValidator, ValidationConfig};
use serde_json::Value;
use std::path::Path;

/// Parses documents and validates them as database schemas
#[derive(Debug, Default)]
pub struct SchemaLoader {
    parser: SchemaParser,
    validator: SchemaValidator,
}

impl SchemaLoader {
    /// Create a loader with the default validation configuration
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ValidationConfig) -> Self {
        Self {
            parser: SchemaParser::new(),
            validator: SchemaValidator::with_config(config),
        }
    }

    /// Load, validate and type a schema file
    pub fn load_file(&self, path: &Path) -> LoaderResult<DatabaseSchema> {
        let value = self.parser.parse_file(path)?;
        log::debug!("Parsed schema document '{}'", path.display());
        self.finish(&value, path)
    }

    /// Load a schema file and return the validated, untouched document
    pub fn load_value(&self, path: &Path) -> LoaderResult<Value> {
        let value = self.parser.parse_file(path)?;
        self.validator.validate(&value).map_err(|e| {
            log::warn!("Schema document '{}' is invalid: {}", path.display(), e);
            LoaderError::validation(path.to_path_buf(), e)
        })?;
        Ok(value)
    }

    /// Validate and type in-memory document text
    pub fn load_str(&self, content: &str, format: Format) -> LoaderResult<DatabaseSchema> {
        let origin = Path::new("<memory>");
        let value = self.parser.parse_content(content, format, origin)?;
        self.finish(&value, origin)
    }

    fn finish(&self, value: &Value, path: &Path) -> LoaderResult<DatabaseSchema> {
        match self.validator.parse(value) {
            Ok(schema) => {
                log::debug!(
                    "Loaded database '{}' ({} tables) from '{}'",
                    schema.name,
                    schema.tables.len(),
                    path.display()
                );
                Ok(schema)
            }
            Err(e) => {
                log::warn!("Schema document '{}' is invalid: {}", path.display(), e);
                Err(LoaderError::validation(path.to_path_buf(), e))
            }
        }
    }
}

/// Load a schema file with the default validation configuration
pub fn load_database(path: &Path) -> LoaderResult<DatabaseSchema> {
    SchemaLoader::new().load_file(path)
}

/// Parse document text with the default validation configuration
pub fn parse_database_str(content: &str, format: Format) -> LoaderResult<DatabaseSchema> {
    SchemaLoader::new().load_str(content, format)
}
