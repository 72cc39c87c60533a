//! Transformer orchestrator.
//!
//! Builds the stage once from a validated config and the input stream's
//! declared schema, then applies tokenizer + coercion per record. The
//! constructed transformer is immutable and holds no per-record state, so
//! a hosting engine may shard records across threads or partitions and
//! share one instance read-only.

use rowcast_ingest::{TokenizerOptions, decode_record, tokenize};
use rowcast_model::{ColumnType, Field, RawRecord, Schema, TransformerConfig, TypedRecord};

use crate::coerce::coerce_field;
use crate::error::{Result, TransformError};

/// A configured CSV-to-typed-record transformer stage.
#[derive(Debug, Clone)]
pub struct CsvTransformer {
    tokenizer: TokenizerOptions,
    null_string: Option<String>,
    output: Schema,
}

impl CsvTransformer {
    /// Builds the stage: validates the config, checks the input stream's
    /// shape, and derives the output schema.
    ///
    /// The input schema must have exactly one field, of text or binary
    /// type; anything else is a stage-level contract violation and fails
    /// here, never per record. Declared type strings outside the known set
    /// resolve to text passthrough.
    pub fn new(config: TransformerConfig, input_schema: &Schema) -> Result<Self> {
        config.validate()?;

        let input_ok = input_schema
            .single_field()
            .is_some_and(|field| field.column_type.is_text_or_binary());
        if !input_ok {
            return Err(TransformError::SchemaPrecondition);
        }

        let tokenizer = TokenizerOptions {
            delimiter: config.delimiter,
            quote: config.quote,
            escape: config.escape_char(),
        };
        let TransformerConfig {
            null_string,
            columns,
            ..
        } = config;

        let fields = columns
            .into_iter()
            .map(|spec| {
                let column_type = match spec.column_type.as_deref() {
                    None => ColumnType::Text,
                    Some(declared) => ColumnType::parse(declared).unwrap_or_else(|| {
                        tracing::warn!(
                            column = %spec.name,
                            declared,
                            "unrecognized column type, treating as text"
                        );
                        ColumnType::Text
                    }),
                };
                // Always nullable: any value may be the null sentinel.
                Field::nullable(spec.name, column_type)
            })
            .collect();
        let output = Schema::new(fields);
        tracing::debug!(columns = output.len(), "derived transformer output schema");

        Ok(Self {
            tokenizer,
            null_string,
            output,
        })
    }

    /// The derived output schema: one nullable field per configured column.
    pub fn output_schema(&self) -> &Schema {
        &self.output
    }

    /// Transforms one raw record into a typed record.
    ///
    /// Decode to text if needed, tokenize, coerce each field against the
    /// output schema. Field-level coercion failures are aggregated into one
    /// per-record error; a record either coerces fully or fails.
    pub fn transform(&self, record: &RawRecord) -> Result<TypedRecord> {
        let raw = decode_record(record)?;
        let tokens = tokenize(raw, &self.tokenizer);
        if tokens.len() != self.output.len() {
            return Err(TransformError::RowParse {
                expected: self.output.len(),
                actual: tokens.len(),
            });
        }

        let mut values = Vec::with_capacity(tokens.len());
        let mut failures = Vec::new();
        for (field, token) in self.output.fields().iter().zip(&tokens) {
            match coerce_field(
                token,
                &field.name,
                field.column_type,
                self.null_string.as_deref(),
            ) {
                Ok(value) => values.push(value),
                Err(err) => failures.push(err),
            }
        }
        if !failures.is_empty() {
            return Err(TransformError::Coercion(failures));
        }
        Ok(values)
    }

    /// Transforms a batch of records, preserving input order.
    ///
    /// Stops at the first per-record error; skip/retry policy belongs to
    /// the caller.
    pub fn transform_batch<'a, I>(&self, records: I) -> Result<Vec<TypedRecord>>
    where
        I: IntoIterator<Item = &'a RawRecord>,
    {
        records
            .into_iter()
            .map(|record| self.transform(record))
            .collect()
    }
}
