use crate::attributes::FieldKind;
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RosterError {
    #[error("No {domain} record with id {id}")]
    NotFound { domain: String, id: String },

    #[error("Unknown filter field '{field}' for {domain}")]
    UnknownField { domain: String, field: String },

    #[error("Invalid value '{value}' for field '{field}': expected {expected}")]
    InvalidValue {
        field: String,
        value: String,
        expected: FieldKind,
    },

    #[error("Unknown tab '{tab}' for {domain}")]
    UnknownTab { domain: String, tab: String },

    #[error("{0}")]
    Validation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Config error: {0}")]
    Config(#[from] confique::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, RosterError>;

/// Non-fatal problems found while filtering or partitioning.
///
/// These never abort a computation: the offending record simply does not
/// match (or lands in no bucket) and the warning is handed back to the caller
/// alongside the result.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FilterWarning {
    /// A selection or bucket key names a field the schema does not declare.
    #[error("field '{field}' is not declared for {domain}")]
    InvalidFieldReference { domain: String, field: String },

    /// A record holds a value of the wrong kind; it was read as empty.
    #[error("record {record_id}: field '{field}' is not a {expected} value")]
    MalformedValue {
        record_id: String,
        field: String,
        expected: FieldKind,
    },
}
