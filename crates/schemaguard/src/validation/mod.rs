//! Validation of database / table / column schema descriptions
//!
//! Checks run depth first in a fixed order and stop at the first violated
//! rule. Two modes decide what counts as a "set" optional member:
//!
//! - **Strict**: any non-null value, which must then have the right shape
//! - **Lenient**: only truthy values, for producers that write `0` or `""`
//!   to mean "not set"
//!
//! Copyright (c) 2025 Schemaguard Team
//! Licensed under the Apache-2.0 license

pub mod base;
mod column;
pub mod database;
pub mod error;

// Re-export commonly used types
pub use base::{ValidationContext, ValidationHelpers, ValidationMode};
pub use database::SchemaValidator;
pub use error::{ErrorKind, SchemaValidationError, Scope, ValidationErrors, ValidationResult};

use crate::model::DatabaseSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Validate a candidate with the default configuration, returning it unchanged
///
/// # Examples
///
/// ```rust
/// use schemaguard::validation::{validate_database, ErrorKind};
/// use serde_json::json;
///
/// let schema = json!({
///     "name": "shop",
///     "tables": [{"name": "orders", "columns": [{"name": "id", "type": "number"}]}]
/// });
/// assert!(validate_database(&schema).is_ok());
///
/// let error = validate_database(&json!({"name": "shop", "tables": {}})).unwrap_err();
/// assert_eq!(error.kind(), ErrorKind::InvalidTablesContainer);
/// ```
pub fn validate_database(candidate: &Value) -> ValidationResult<&Value> {
    SchemaValidator::new().validate(candidate)
}

/// Validate a candidate with the default configuration and return its typed form
pub fn parse_database(candidate: &Value) -> ValidationResult<DatabaseSchema> {
    SchemaValidator::new().parse(candidate)
}

/// Validation configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// What counts as a set optional member
    pub mode: ValidationMode,
    /// Reject repeated table names in a database and column names in a table
    pub unique_names: bool,
    /// Batch only: stop after the first failing document
    pub fail_fast: bool,
    /// Batch only: maximum number of errors to collect (0 = unlimited)
    pub max_errors: usize,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            mode: ValidationMode::Strict,
            unique_names: false,
            fail_fast: false,
            max_errors: 0,
        }
    }
}

impl ValidationConfig {
    /// Create a configuration for strict validation
    pub fn strict() -> Self {
        Self::default()
    }

    /// Create a configuration using truthiness for optional members
    pub fn lenient() -> Self {
        Self {
            mode: ValidationMode::Lenient,
            ..Self::default()
        }
    }

    /// Enable sibling name uniqueness
    pub fn with_unique_names(mut self) -> Self {
        self.unique_names = true;
        self
    }

    /// Enable fail-fast mode
    pub fn with_fail_fast(mut self) -> Self {
        self.fail_fast = true;
        self
    }

    /// Set maximum number of errors to collect
    pub fn with_max_errors(mut self, max_errors: usize) -> Self {
        self.max_errors = max_errors;
        self
    }
}

/// Batch validation for multiple database descriptions
///
/// Each document is validated on its own and reports at most one error, with
/// its path rooted at the document's index (`$[1].tables[0].name`).
pub fn validate_databases_batch(
    documents: &[Value],
    config: &ValidationConfig,
) -> Result<(), ValidationErrors> {
    let validator = SchemaValidator::with_config(config.clone());
    let mut errors = ValidationErrors::new();

    for (i, document) in documents.iter().enumerate() {
        match validator.validate(document) {
            Ok(_) => continue,
            Err(error) => {
                errors.add(error.rebase(&format!("$[{}]", i)));

                if config.fail_fast {
                    break;
                }

                if config.max_errors > 0 && errors.len() >= config.max_errors {
                    break;
                }
            }
        }
    }

    errors.into_result()
}
