//! Typed schema model produced by a successful validation
//!
//! Copyright (c) 2025 Schemaguard Team
//! Licensed under the Apache-2.0 license

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A validated database description
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseSchema {
    /// Database name, never empty
    pub name: String,
    /// Tables in declaration order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tables: Vec<TableSchema>,
}

impl DatabaseSchema {
    /// Look up a table by name
    pub fn table(&self, name: &str) -> Option<&TableSchema> {
        self.tables.iter().find(|table| table.name == name)
    }
}

/// A validated table description
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSchema {
    /// Table name, never empty
    pub name: String,
    /// Columns in declaration order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub columns: Vec<ColumnSchema>,
}

impl TableSchema {
    /// Look up a column by name
    pub fn column(&self, name: &str) -> Option<&ColumnSchema> {
        self.columns.iter().find(|column| column.name == name)
    }

    /// Columns marked as primary key, in declaration order
    pub fn primary_key(&self) -> impl Iterator<Item = &ColumnSchema> {
        self.columns.iter().filter(|column| column.is_set(ColumnFlag::PrimaryKey))
    }
}

/// A validated column description
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSchema {
    /// Column name, never empty
    pub name: String,
    /// Declared value type
    #[serde(rename = "type")]
    pub column_type: ColumnType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_increment: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_key: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub foreign_key: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
}

impl ColumnSchema {
    /// Create a column with no flags set
    pub fn new<N: Into<String>>(name: N, column_type: ColumnType) -> Self {
        Self {
            name: name.into(),
            column_type,
            auto_increment: None,
            primary_key: None,
            foreign_key: None,
            required: None,
        }
    }

    /// Declared value of a flag, `None` when absent
    pub fn flag(&self, flag: ColumnFlag) -> Option<bool> {
        match flag {
            ColumnFlag::AutoIncrement => self.auto_increment,
            ColumnFlag::PrimaryKey => self.primary_key,
            ColumnFlag::ForeignKey => self.foreign_key,
            ColumnFlag::Required => self.required,
        }
    }

    /// Whether a flag is declared and true. Absent and `false` are the same.
    pub fn is_set(&self, flag: ColumnFlag) -> bool {
        self.flag(flag).unwrap_or(false)
    }

    /// Set a flag, returning the updated column
    pub fn with_flag(mut self, flag: ColumnFlag, value: bool) -> Self {
        let slot = match flag {
            ColumnFlag::AutoIncrement => &mut self.auto_increment,
            ColumnFlag::PrimaryKey => &mut self.primary_key,
            ColumnFlag::ForeignKey => &mut self.foreign_key,
            ColumnFlag::Required => &mut self.required,
        };
        *slot = Some(value);
        self
    }
}

/// The closed set of column value types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum ColumnType {
    String,
    Number,
    Boolean,
    Object,
    Array,
    Regexp,
}

impl ColumnType {
    /// Every supported type, in canonical order
    pub const ALL: [ColumnType; 6] = [
        ColumnType::String,
        ColumnType::Number,
        ColumnType::Boolean,
        ColumnType::Object,
        ColumnType::Array,
        ColumnType::Regexp,
    ];

    /// Lower-case tag used on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            ColumnType::String => "string",
            ColumnType::Number => "number",
            ColumnType::Boolean => "boolean",
            ColumnType::Object => "object",
            ColumnType::Array => "array",
            ColumnType::Regexp => "regexp",
        }
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string is not a supported column type
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported column type '{0}'")]
pub struct UnknownColumnType(pub String);

impl FromStr for ColumnType {
    type Err = UnknownColumnType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.to_lowercase();
        ColumnType::ALL
            .into_iter()
            .find(|ty| ty.as_str() == normalized)
            .ok_or_else(|| UnknownColumnType(s.to_string()))
    }
}

impl TryFrom<String> for ColumnType {
    type Error = UnknownColumnType;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// The optional boolean flags of a column, in the order they are checked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnFlag {
    AutoIncrement,
    PrimaryKey,
    ForeignKey,
    Required,
}

impl ColumnFlag {
    /// Check order for column flags
    pub const ALL: [ColumnFlag; 4] = [
        ColumnFlag::AutoIncrement,
        ColumnFlag::PrimaryKey,
        ColumnFlag::ForeignKey,
        ColumnFlag::Required,
    ];

    /// JSON key of this flag
    pub fn key(&self) -> &'static str {
        match self {
            ColumnFlag::AutoIncrement => "auto_increment",
            ColumnFlag::PrimaryKey => "primary_key",
            ColumnFlag::ForeignKey => "foreign_key",
            ColumnFlag::Required => "required",
        }
    }

    /// Phrase used in error messages
    pub(crate) fn description(&self) -> &'static str {
        match self {
            ColumnFlag::AutoIncrement => "auto-incrementing",
            ColumnFlag::PrimaryKey => "the primary key",
            ColumnFlag::ForeignKey => "a foreign key",
            ColumnFlag::Required => "required",
        }
    }
}

impl fmt::Display for ColumnFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
