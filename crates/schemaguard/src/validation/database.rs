//! Database and table traversal
//!
//! Copyright (c) 2025 Schemaguard Team
//! Licensed under the Apache-2.0 license

use crate::model::{DatabaseSchema, TableSchema};
use crate::validation::base::{ValidationContext, ValidationHelpers};
use crate::validation::column::validate_column;
use crate::validation::error::{SchemaValidationError, Scope, ValidationResult};
use crate::validation::ValidationConfig;
use serde_json::Value;

/// Validates untyped database descriptions, depth first, stopping at the
/// first violated rule
///
/// The validator holds only its configuration and never mutates its input,
/// so a single instance can be shared between threads.
#[derive(Debug, Clone, Default)]
pub struct SchemaValidator {
    config: ValidationConfig,
}

impl SchemaValidator {
    /// Create a validator with the default (strict) configuration
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ValidationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ValidationConfig {
        &self.config
    }

    /// Validate `candidate` and hand the very same value back
    ///
    /// # Examples
    ///
    /// ```rust
    /// use schemaguard::SchemaValidator;
    /// use serde_json::json;
    ///
    /// let schema = json!({"name": "shop"});
    /// let validated = SchemaValidator::new().validate(&schema).unwrap();
    /// assert!(std::ptr::eq(validated, &schema));
    /// ```
    pub fn validate<'a>(&self, candidate: &'a Value) -> ValidationResult<&'a Value> {
        self.parse(candidate)?;
        Ok(candidate)
    }

    /// Validate `candidate` and return its typed form
    pub fn parse(&self, candidate: &Value) -> ValidationResult<DatabaseSchema> {
        let context = ValidationContext::new(self.config.mode);
        self.parse_with_context(candidate, &context)
    }

    /// Validate a candidate located at `ctx.path`
    pub fn parse_with_context(
        &self,
        candidate: &Value,
        ctx: &ValidationContext,
    ) -> ValidationResult<DatabaseSchema> {
        let name = ValidationHelpers::non_empty_str(candidate, "name").ok_or_else(|| {
            SchemaValidationError::MissingOrInvalidName {
                scope: Scope::Database,
                parent: None,
                path: ctx.member_path("name"),
            }
        })?;

        let mut database = DatabaseSchema {
            name: name.to_string(),
            tables: Vec::new(),
        };

        if let Some(tables) = ctx.optional(candidate, "tables") {
            let tables_ctx = ctx.child("tables");
            let tables = tables.as_array().ok_or_else(|| {
                SchemaValidationError::InvalidTablesContainer {
                    database: name.to_string(),
                    path: tables_ctx.path.clone(),
                }
            })?;

            database.tables.reserve(tables.len());
            for (index, table) in tables.iter().enumerate() {
                let table = self.validate_table(
                    table,
                    name,
                    &database.tables,
                    &tables_ctx.child_index(index),
                )?;
                database.tables.push(table);
            }
        }

        Ok(database)
    }

    fn validate_table(
        &self,
        table: &Value,
        database: &str,
        earlier: &[TableSchema],
        ctx: &ValidationContext,
    ) -> ValidationResult<TableSchema> {
        let name = ValidationHelpers::non_empty_str(table, "name").ok_or_else(|| {
            SchemaValidationError::MissingOrInvalidName {
                scope: Scope::Table,
                parent: Some(database.to_string()),
                path: ctx.member_path("name"),
            }
        })?;

        if self.config.unique_names && earlier.iter().any(|other| other.name == name) {
            return Err(SchemaValidationError::DuplicateName {
                scope: Scope::Table,
                name: name.to_string(),
                parent: database.to_string(),
                path: ctx.member_path("name"),
            });
        }

        let mut schema = TableSchema {
            name: name.to_string(),
            columns: Vec::new(),
        };

        if let Some(columns) = ctx.optional(table, "columns") {
            let columns_ctx = ctx.child("columns");
            let columns = columns.as_array().ok_or_else(|| {
                SchemaValidationError::InvalidColumnsContainer {
                    table: name.to_string(),
                    path: columns_ctx.path.clone(),
                }
            })?;

            schema.columns.reserve(columns.len());
            for (index, column) in columns.iter().enumerate() {
                let siblings = self.config.unique_names.then_some(schema.columns.as_slice());
                let column =
                    validate_column(column, name, siblings, &columns_ctx.child_index(index))?;
                schema.columns.push(column);
            }
        }

        Ok(schema)
    }
}
