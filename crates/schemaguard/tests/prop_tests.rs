//! Property-based tests for schema validation
//!
//! These tests check that the validator behaves consistently across a wide
//! range of generated inputs.

use proptest::prelude::*;
use schemaguard::{ColumnSchema, ColumnType, DatabaseSchema, ErrorKind, SchemaValidator, TableSchema};
use serde_json::{json, Value};

/// Strategy for generating random JSON values with controlled complexity
fn json_value_strategy() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(|n| Value::Number(n.into())),
        "[a-zA-Z0-9 ]{0,20}".prop_map(Value::String),
    ];

    leaf.prop_recursive(3, 16, 4, |inner| {
        prop_oneof![
            proptest::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            proptest::collection::hash_map(
                prop_oneof![Just("name".to_string()), Just("tables".to_string()), Just("columns".to_string()), Just("type".to_string()), "[a-z_]{1,10}"],
                inner,
                0..4
            )
            .prop_map(|m| Value::Object(m.into_iter().collect())),
        ]
    })
}

fn column_type_strategy() -> impl Strategy<Value = ColumnType> {
    proptest::sample::select(ColumnType::ALL.to_vec())
}

/// Strategy for generating well-formed columns
fn column_strategy() -> impl Strategy<Value = ColumnSchema> {
    (
        "[a-z][a-z0-9_]{0,12}",
        column_type_strategy(),
        proptest::option::of(any::<bool>()),
        proptest::option::of(any::<bool>()),
        proptest::option::of(any::<bool>()),
        proptest::option::of(any::<bool>()),
    )
        .prop_map(|(name, column_type, auto_increment, primary_key, foreign_key, required)| ColumnSchema {
            name,
            column_type,
            auto_increment,
            primary_key,
            foreign_key,
            required,
        })
}

/// Strategy for generating well-formed databases
fn database_strategy() -> impl Strategy<Value = DatabaseSchema> {
    let table = ("[a-z][a-z0-9_]{0,12}", proptest::collection::vec(column_strategy(), 0..5))
        .prop_map(|(name, columns)| TableSchema { name, columns });
    ("[a-z][a-z0-9_]{0,12}", proptest::collection::vec(table, 0..4))
        .prop_map(|(name, tables)| DatabaseSchema { name, tables })
}

/// Upper-case a random subset of characters of a type tag
fn scramble_case(tag: &str, mask: u32) -> String {
    tag.chars()
        .enumerate()
        .map(|(i, c)| if mask & (1 << (i % 32)) != 0 { c.to_ascii_uppercase() } else { c })
        .collect()
}

proptest! {
    #[test]
    fn prop_validator_never_panics(value in json_value_strategy()) {
        let _ = SchemaValidator::new().validate(&value);
    }

    #[test]
    fn prop_well_formed_schema_is_accepted(schema in database_strategy()) {
        let value = serde_json::to_value(&schema).unwrap();
        let validator = SchemaValidator::new();

        let validated = validator.validate(&value);
        prop_assert!(validated.is_ok(), "rejected: {:?}", validated);
        prop_assert!(std::ptr::eq(validated.unwrap(), &value));
        prop_assert_eq!(validator.parse(&value).unwrap(), schema);
    }

    #[test]
    fn prop_type_case_does_not_matter(ty in column_type_strategy(), mask in any::<u32>()) {
        let value = json!({"name": "db", "tables": [{"name": "t", "columns": [{"name": "c", "type": scramble_case(ty.as_str(), mask)}]}]});
        let parsed = SchemaValidator::new().parse(&value).unwrap();
        prop_assert_eq!(parsed.tables[0].columns[0].column_type, ty);
    }

    #[test]
    fn prop_non_boolean_flag_is_rejected(
        flag in proptest::sample::select(vec!["auto_increment", "primary_key", "foreign_key", "required"]),
        bad in prop_oneof![
            any::<i64>().prop_map(|n| json!(n)),
            "[a-z]{0,5}".prop_map(|s| json!(s)),
            Just(json!([])),
            Just(json!({})),
        ],
    ) {
        let mut column = json!({"name": "c", "type": "string"});
        column[flag] = bad;
        let value = json!({"name": "db", "tables": [{"name": "t", "columns": [column]}]});

        let error = SchemaValidator::new().validate(&value).unwrap_err();
        prop_assert_eq!(error.kind(), ErrorKind::InvalidFlagType);
        prop_assert_eq!(error.path(), format!("$.tables[0].columns[0].{}", flag));
    }

    #[test]
    fn prop_missing_database_name_always_reported_first(schema in database_strategy()) {
        let mut value = serde_json::to_value(&schema).unwrap();
        value.as_object_mut().unwrap().remove("name");
        if let Some(tables) = value.get_mut("tables") {
            tables[0]["columns"] = json!({});
        }

        let error = SchemaValidator::new().validate(&value).unwrap_err();
        prop_assert_eq!(error.kind(), ErrorKind::MissingOrInvalidName);
        prop_assert_eq!(error.path(), "$.name");
    }
}
