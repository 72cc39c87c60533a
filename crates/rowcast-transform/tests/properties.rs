//! Property tests for the transformer stage.

use proptest::prelude::*;
use rowcast_model::{
    ColumnSpec, ColumnType, ConfigError, Field, RawRecord, Schema, TransformerConfig, Value,
};
use rowcast_transform::{CsvTransformer, TransformError};

fn text_input() -> Schema {
    Schema::new(vec![Field::new("raw", ColumnType::Text)])
}

fn string_columns(count: usize) -> Vec<ColumnSpec> {
    (0..count)
        .map(|index| ColumnSpec::new(format!("c{index}"), "string"))
        .collect()
}

fn plain_config(columns: Vec<ColumnSpec>) -> TransformerConfig {
    TransformerConfig {
        delimiter: ',',
        escape: None,
        quote: '"',
        null_string: None,
        columns,
    }
}

fn build(config: TransformerConfig) -> CsvTransformer {
    CsvTransformer::new(config, &text_input()).expect("build transformer")
}

const DECLARED_TYPES: &[&str] = &[
    "string",
    "text",
    "bool",
    "boolean",
    "byte",
    "short",
    "int",
    "integer",
    "bigint",
    "bigint unsigned",
    "float",
    "double",
    "decimal",
    "date",
    "timestamp",
    "datetime",
    "binary",
    "json",
    "geography",
    "geographypoint",
];

proptest! {
    #[test]
    fn count_and_order_are_preserved(
        rows in prop::collection::vec(prop::collection::vec("[a-z0-9]{0,8}", 3), 0..20),
    ) {
        let transformer = build(plain_config(string_columns(3)));
        let records: Vec<RawRecord> = rows
            .iter()
            .map(|fields| RawRecord::from(fields.join(",")))
            .collect();
        let output = transformer.transform_batch(&records).expect("well-formed rows");
        prop_assert_eq!(output.len(), records.len());
        for (fields, typed) in rows.iter().zip(&output) {
            let expected: Vec<Value> = fields
                .iter()
                .map(|field| Value::Text(field.clone()))
                .collect();
            prop_assert_eq!(typed, &expected);
        }
    }

    #[test]
    fn null_sentinel_coerces_to_null_under_any_declared_type(
        declared in prop::sample::select(DECLARED_TYPES),
        padding in 0usize..4,
    ) {
        let config = TransformerConfig {
            null_string: Some("NULL".to_string()),
            columns: vec![ColumnSpec::new("v", declared)],
            ..plain_config(Vec::new())
        };
        let transformer = build(config);
        let raw = format!("{}NULL{}", " ".repeat(padding), " ".repeat(padding));
        let record = transformer
            .transform(&RawRecord::from(raw))
            .expect("sentinel always coerces");
        prop_assert_eq!(record, vec![Value::Null]);
    }

    #[test]
    fn text_and_unknown_types_pass_through_unchanged(
        value in "[a-zA-Z0-9_.:;+*#@!?-]{0,16}",
        declared in prop::sample::select(vec![
            Some("string"),
            Some("text"),
            Some("varchar"),
            Some("SOMETHING ELSE"),
            None,
        ]),
    ) {
        let column = ColumnSpec {
            name: "v".to_string(),
            column_type: declared.map(String::from),
        };
        let transformer = build(plain_config(vec![column]));
        let record = transformer
            .transform(&RawRecord::from(value.as_str()))
            .expect("text passthrough");
        prop_assert_eq!(record, vec![Value::Text(value)]);
    }

    #[test]
    fn padding_never_changes_field_boundaries(
        left in "[a-z0-9]{1,8}",
        right in "[a-z0-9]{1,8}",
        pads in prop::collection::vec(0usize..4, 4),
    ) {
        let transformer = build(plain_config(string_columns(2)));
        let plain = transformer
            .transform(&RawRecord::from(format!("{left},{right}")))
            .expect("plain row");
        let padded_raw = format!(
            "{}{left}{},{}{right}{}",
            " ".repeat(pads[0]),
            " ".repeat(pads[1]),
            " ".repeat(pads[2]),
            " ".repeat(pads[3]),
        );
        let padded = transformer
            .transform(&RawRecord::from(padded_raw))
            .expect("padded row");
        prop_assert_eq!(padded, plain);
    }

    #[test]
    fn long_escape_strings_always_fail_validation(escape in "[!-~]{2,8}") {
        let config = TransformerConfig {
            escape: Some(escape),
            ..plain_config(vec![ColumnSpec::untyped("a")])
        };
        prop_assert!(
            matches!(config.validate(), Err(ConfigError::EscapeLength { .. })),
            "expected EscapeLength validation error"
        );
        let err = CsvTransformer::new(config, &text_input())
            .expect_err("construction must fail");
        prop_assert!(
            matches!(err, TransformError::Config(ConfigError::EscapeLength { .. })),
            "expected Config(EscapeLength) transform error"
        );
    }

    #[test]
    fn non_text_single_field_inputs_always_hit_the_precondition(
        column_type in prop::sample::select(vec![
            ColumnType::Boolean,
            ColumnType::Int32,
            ColumnType::Int64,
            ColumnType::UInt64,
            ColumnType::Float64,
            ColumnType::Decimal,
            ColumnType::Timestamp,
        ]),
    ) {
        let input = Schema::new(vec![Field::new("raw", column_type)]);
        let err = CsvTransformer::new(plain_config(string_columns(1)), &input)
            .expect_err("non-text input must fail");
        prop_assert!(matches!(err, TransformError::SchemaPrecondition));
    }
}
