//! Schemaguard - structural validation for database schema descriptions
//!
//! A schema description is a tree: a **database** with an ordered list of
//! **tables**, each with an ordered list of **columns**. Before such a tree is
//! handed to a query builder or code generator, this crate checks it against
//! a fixed set of rules and either returns it untouched or reports the first
//! rule it breaks.
//!
//! ## Quick Start
//!
//! ```rust
//! use schemaguard::{ErrorKind, SchemaValidator};
//! use serde_json::json;
//!
//! let validator = SchemaValidator::new();
//!
//! let schema = json!({
//!     "name": "shop",
//!     "tables": [{
//!         "name": "orders",
//!         "columns": [
//!             {"name": "id", "type": "number", "primary_key": true, "auto_increment": true}
//!         ]
//!     }]
//! });
//! assert!(validator.validate(&schema).is_ok());
//!
//! let broken = json!({"name": "shop", "tables": [{"name": "orders", "columns": [{"name": "id", "type": "date"}]}]});
//! let error = validator.validate(&broken).unwrap_err();
//! assert_eq!(error.kind(), ErrorKind::UnsupportedColumnType);
//! ```
//!
//! ## Rules
//!
//! - database, table and column `name` must be non-empty strings
//! - `tables` and `columns`, when set, must be arrays (empty is fine)
//! - column `type` is one of `string`, `number`, `boolean`, `object`,
//!   `array`, `regexp`, matched case-insensitively
//! - `auto_increment`, `primary_key`, `foreign_key` and `required`, when set,
//!   must be booleans
//!
//! Copyright (c) 2025 Schemaguard Team
//! Licensed under the Apache-2.0 license

pub mod loader;
pub mod model;
pub mod validation;

// Re-export commonly used types for convenience
pub use loader::{load_database, parse_database_str, Format, LoaderError, LoaderResult, SchemaLoader};
pub use model::{ColumnFlag, ColumnSchema, ColumnType, DatabaseSchema, TableSchema};
pub use validation::{
    parse_database, validate_database, validate_databases_batch, ErrorKind, SchemaValidationError,
    SchemaValidator, Scope, ValidationConfig, ValidationErrors, ValidationMode, ValidationResult,
};
