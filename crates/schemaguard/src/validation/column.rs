//! Column-level checks: name, type, type membership, then flags
//!
//! Copyright (c) 2025 Schemaguard Team
//! Licensed under the Apache-2.0 license

use crate::model::{ColumnFlag, ColumnSchema, ColumnType};
use crate::validation::base::{ValidationContext, ValidationHelpers};
use crate::validation::error::{SchemaValidationError, Scope, ValidationResult};
use serde_json::Value;

/// Validate one column of `table`, located at `ctx.path`
///
/// When `siblings` is given, the column name must not repeat any of them.
pub(crate) fn validate_column(
    column: &Value,
    table: &str,
    siblings: Option<&[ColumnSchema]>,
    ctx: &ValidationContext,
) -> ValidationResult<ColumnSchema> {
    let name = ValidationHelpers::non_empty_str(column, "name").ok_or_else(|| {
        SchemaValidationError::MissingOrInvalidName {
            scope: Scope::Column,
            parent: Some(table.to_string()),
            path: ctx.member_path("name"),
        }
    })?;

    if let Some(siblings) = siblings {
        if siblings.iter().any(|sibling| sibling.name == name) {
            return Err(SchemaValidationError::DuplicateName {
                scope: Scope::Column,
                name: name.to_string(),
                parent: table.to_string(),
                path: ctx.member_path("name"),
            });
        }
    }

    let column_type = validate_type(column, table, name, ctx)?;
    let mut schema = ColumnSchema::new(name, column_type);

    for flag in ColumnFlag::ALL {
        if let Some(value) = validate_flag(column, flag, table, name, ctx)? {
            schema = schema.with_flag(flag, value);
        }
    }

    Ok(schema)
}

fn validate_type(
    column: &Value,
    table: &str,
    name: &str,
    ctx: &ValidationContext,
) -> ValidationResult<ColumnType> {
    let raw = ValidationHelpers::non_empty_str(column, "type").ok_or_else(|| {
        SchemaValidationError::MissingOrInvalidType {
            table: table.to_string(),
            column: name.to_string(),
            path: ctx.member_path("type"),
        }
    })?;

    raw.parse::<ColumnType>()
        .map_err(|_| SchemaValidationError::UnsupportedColumnType {
            table: table.to_string(),
            column: name.to_string(),
            found: raw.to_string(),
            path: ctx.member_path("type"),
        })
}

/// A flag checks its own key only. `Ok(None)` means not declared.
fn validate_flag(
    column: &Value,
    flag: ColumnFlag,
    table: &str,
    name: &str,
    ctx: &ValidationContext,
) -> ValidationResult<Option<bool>> {
    match column.get(flag.key()) {
        Some(Value::Bool(value)) => Ok(Some(*value)),
        Some(value) if ValidationHelpers::is_set(value, ctx.mode) => {
            Err(SchemaValidationError::InvalidFlagType {
                table: table.to_string(),
                column: name.to_string(),
                flag,
                path: ctx.member_path(flag.key()),
            })
        }
        _ => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::base::ValidationMode;
    use crate::validation::error::ErrorKind;
    use serde_json::json;

    fn ctx() -> ValidationContext {
        ValidationContext::new(ValidationMode::Strict)
            .child("tables")
            .child_index(0)
            .child("columns")
            .child_index(0)
    }

    #[test]
    fn test_minimal_column() {
        let column = validate_column(&json!({"name": "id", "type": "number"}), "orders", None, &ctx()).unwrap();
        assert_eq!(column, ColumnSchema::new("id", ColumnType::Number));
    }

    #[test]
    fn test_flags_are_carried_into_schema() {
        let column = validate_column(
            &json!({"name": "id", "type": "NUMBER", "primary_key": true, "auto_increment": true, "required": false}),
            "orders",
            None,
            &ctx(),
        )
        .unwrap();
        assert_eq!(column.primary_key, Some(true));
        assert_eq!(column.auto_increment, Some(true));
        assert_eq!(column.required, Some(false));
        assert_eq!(column.foreign_key, None);
    }

    #[test]
    fn test_primary_key_checks_its_own_field() {
        // A well-typed auto_increment must not excuse a malformed primary_key
        let error = validate_column(
            &json!({"name": "id", "type": "number", "auto_increment": true, "primary_key": "yes"}),
            "orders",
            None,
            &ctx(),
        )
        .unwrap_err();
        match error {
            SchemaValidationError::InvalidFlagType { flag, ref path, .. } => {
                assert_eq!(flag, ColumnFlag::PrimaryKey);
                assert_eq!(path, "$.tables[0].columns[0].primary_key");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_flags_checked_in_order() {
        let error = validate_column(
            &json!({"name": "c", "type": "string", "required": 1, "foreign_key": "x"}),
            "t",
            None,
            &ctx(),
        )
        .unwrap_err();
        assert!(matches!(
            error,
            SchemaValidationError::InvalidFlagType { flag: ColumnFlag::ForeignKey, .. }
        ));
    }

    #[test]
    fn test_falsy_flag_in_lenient_mode() {
        let lenient = ValidationContext::new(ValidationMode::Lenient);
        let column = json!({"name": "c", "type": "string", "required": 0});

        let parsed = validate_column(&column, "t", None, &lenient).unwrap();
        assert_eq!(parsed.required, None);

        let error = validate_column(&column, "t", None, &ctx()).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::InvalidFlagType);
    }

    #[test]
    fn test_type_errors() {
        let missing = validate_column(&json!({"name": "c"}), "t", None, &ctx()).unwrap_err();
        assert_eq!(missing.kind(), ErrorKind::MissingOrInvalidType);

        let empty = validate_column(&json!({"name": "c", "type": ""}), "t", None, &ctx()).unwrap_err();
        assert_eq!(empty.kind(), ErrorKind::MissingOrInvalidType);

        let unsupported = validate_column(&json!({"name": "c", "type": "null"}), "t", None, &ctx()).unwrap_err();
        assert_eq!(unsupported.kind(), ErrorKind::UnsupportedColumnType);
        assert_eq!(unsupported.path(), "$.tables[0].columns[0].type");
    }

    #[test]
    fn test_duplicate_column_name() {
        let earlier = vec![ColumnSchema::new("id", ColumnType::Number)];
        let column = json!({"name": "id", "type": "string"});

        assert!(validate_column(&column, "t", None, &ctx()).is_ok());
        let error = validate_column(&column, "t", Some(earlier.as_slice()), &ctx()).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::DuplicateName);
        assert_eq!(error.scope(), Scope::Column);
    }

    #[test]
    fn test_name_checked_before_type() {
        let error = validate_column(&json!({"name": 7, "type": "date"}), "t", None, &ctx()).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::MissingOrInvalidName);
        assert_eq!(error.scope(), Scope::Column);
    }
}
