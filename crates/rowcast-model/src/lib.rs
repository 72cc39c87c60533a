//! Data model for the rowcast transformer.
//!
//! This crate carries everything the transformer stage shares with its
//! collaborators: the declarative config, the semantic column types, the
//! tagged value holders, and the minimal stream schema/record types.
//! It does no parsing of record content itself.

pub mod config;
pub mod error;
pub mod schema;
pub mod types;
pub mod value;

pub use config::{ColumnSpec, TransformerConfig};
pub use error::ConfigError;
pub use schema::{Field, RawRecord, Schema, TypedRecord};
pub use types::ColumnType;
pub use value::Value;
