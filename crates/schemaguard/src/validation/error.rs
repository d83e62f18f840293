//! Validation error types for database schema descriptions
//!
//! Copyright (c) 2025 Schemaguard Team
//! Licensed under the Apache-2.0 license

use crate::model::{ColumnFlag, ColumnType};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Level of the schema tree an error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    Database,
    Table,
    Column,
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scope::Database => f.write_str("database"),
            Scope::Table => f.write_str("table"),
            Scope::Column => f.write_str("column"),
        }
    }
}

/// Machine-readable classification of a [`SchemaValidationError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    MissingOrInvalidName,
    InvalidTablesContainer,
    InvalidColumnsContainer,
    MissingOrInvalidType,
    UnsupportedColumnType,
    InvalidFlagType,
    DuplicateName,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::MissingOrInvalidName => "MissingOrInvalidName",
            ErrorKind::InvalidTablesContainer => "InvalidTablesContainer",
            ErrorKind::InvalidColumnsContainer => "InvalidColumnsContainer",
            ErrorKind::MissingOrInvalidType => "MissingOrInvalidType",
            ErrorKind::UnsupportedColumnType => "UnsupportedColumnType",
            ErrorKind::InvalidFlagType => "InvalidFlagType",
            ErrorKind::DuplicateName => "DuplicateName",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A violated schema rule, with the JSON path of the offending value
///
/// `path` uses the `$.tables[0].columns[1]` notation. `parent` / `database` /
/// `table` hold the name of the enclosing entity that owns the bad value.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum SchemaValidationError {
    #[error("{} (at '{path}')", name_message(.scope, .parent))]
    MissingOrInvalidName {
        scope: Scope,
        parent: Option<String>,
        path: String,
    },

    #[error("if set, the '{database}' database's 'tables' must be an array (at '{path}')")]
    InvalidTablesContainer { database: String, path: String },

    #[error("if set, the '{table}' table's 'columns' must be an array (at '{path}')")]
    InvalidColumnsContainer { table: String, path: String },

    #[error("all columns in '{table}' must have 1 'type' that is a non-empty string; column '{column}' does not (at '{path}')")]
    MissingOrInvalidType {
        table: String,
        column: String,
        path: String,
    },

    #[error("all columns in '{table}' must have 1 'type' naming a concrete value type ({}), excluding null and undefined; column '{column}' has '{found}' (at '{path}')", supported_types())]
    UnsupportedColumnType {
        table: String,
        column: String,
        found: String,
        path: String,
    },

    #[error("to mark column '{column}' in '{table}' as {}, it must contain a boolean named '{flag}' (at '{path}')", .flag.description())]
    InvalidFlagType {
        table: String,
        column: String,
        flag: ColumnFlag,
        path: String,
    },

    #[error("{scope} name '{name}' is declared more than once in '{parent}' (at '{path}')")]
    DuplicateName {
        scope: Scope,
        name: String,
        parent: String,
        path: String,
    },
}

fn name_message(scope: &Scope, parent: &Option<String>) -> String {
    match (scope, parent) {
        (Scope::Database, _) | (_, None) => {
            format!("{} 'name' must be set to a non-empty string", scope)
        }
        (Scope::Table, Some(parent)) => format!(
            "all tables in '{}' must have 1 'name' that is a non-empty string",
            parent
        ),
        (Scope::Column, Some(parent)) => format!(
            "all columns in '{}' must have 1 'name' that is a non-empty string",
            parent
        ),
    }
}

fn supported_types() -> String {
    ColumnType::ALL
        .iter()
        .map(ColumnType::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

impl SchemaValidationError {
    /// Classification of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingOrInvalidName { .. } => ErrorKind::MissingOrInvalidName,
            Self::InvalidTablesContainer { .. } => ErrorKind::InvalidTablesContainer,
            Self::InvalidColumnsContainer { .. } => ErrorKind::InvalidColumnsContainer,
            Self::MissingOrInvalidType { .. } => ErrorKind::MissingOrInvalidType,
            Self::UnsupportedColumnType { .. } => ErrorKind::UnsupportedColumnType,
            Self::InvalidFlagType { .. } => ErrorKind::InvalidFlagType,
            Self::DuplicateName { .. } => ErrorKind::DuplicateName,
        }
    }

    /// Level of the schema tree the offending value belongs to
    pub fn scope(&self) -> Scope {
        match self {
            Self::MissingOrInvalidName { scope, .. } | Self::DuplicateName { scope, .. } => *scope,
            Self::InvalidTablesContainer { .. } => Scope::Database,
            Self::InvalidColumnsContainer { .. } => Scope::Table,
            Self::MissingOrInvalidType { .. }
            | Self::UnsupportedColumnType { .. }
            | Self::InvalidFlagType { .. } => Scope::Column,
        }
    }

    /// JSON path of the offending value
    pub fn path(&self) -> &str {
        match self {
            Self::MissingOrInvalidName { path, .. }
            | Self::InvalidTablesContainer { path, .. }
            | Self::InvalidColumnsContainer { path, .. }
            | Self::MissingOrInvalidType { path, .. }
            | Self::UnsupportedColumnType { path, .. }
            | Self::InvalidFlagType { path, .. }
            | Self::DuplicateName { path, .. } => path,
        }
    }

    fn path_mut(&mut self) -> &mut String {
        match self {
            Self::MissingOrInvalidName { path, .. }
            | Self::InvalidTablesContainer { path, .. }
            | Self::InvalidColumnsContainer { path, .. }
            | Self::MissingOrInvalidType { path, .. }
            | Self::UnsupportedColumnType { path, .. }
            | Self::InvalidFlagType { path, .. }
            | Self::DuplicateName { path, .. } => path,
        }
    }

    /// Re-root the error path under `root`, e.g. `$` -> `$[3]` for batch input
    pub fn rebase(mut self, root: &str) -> Self {
        let path = self.path_mut();
        let suffix = path.strip_prefix('$').unwrap_or(path.as_str());
        let rebased = format!("{}{}", root, suffix);
        *path = rebased;
        self
    }
}

/// Result type for validation operations
pub type ValidationResult<T> = Result<T, SchemaValidationError>;

/// Validation errors collected across several documents
#[derive(Debug, Error, Serialize, Deserialize)]
pub struct ValidationErrors {
    /// List of validation errors
    pub errors: Vec<SchemaValidationError>,
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Multiple validation errors occurred:")?;
        for (i, error) in self.errors.iter().enumerate() {
            write!(f, "\n{}. {}", i + 1, error)?;
        }
        Ok(())
    }
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self { errors: Vec::new() }
    }

    pub fn add(&mut self, error: SchemaValidationError) {
        self.errors.push(error);
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Kinds of the collected errors, in collection order
    pub fn kinds(&self) -> Vec<ErrorKind> {
        self.errors.iter().map(SchemaValidationError::kind).collect()
    }

    /// Ok if no errors, Err if any errors exist
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl Default for ValidationErrors {
    fn default() -> Self {
        Self::new()
    }
}

impl From<SchemaValidationError> for ValidationErrors {
    fn from(error: SchemaValidationError) -> Self {
        let mut errors = Self::new();
        errors.add(error);
        errors
    }
}

impl From<Vec<SchemaValidationError>> for ValidationErrors {
    fn from(errors: Vec<SchemaValidationError>) -> Self {
        Self { errors }
    }
}
