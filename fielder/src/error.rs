use thiserror::Error;

#[derive(Error, Debug)]
pub enum FieldError {
    #[error("no such field {field} on {record}")]
    UnknownField { record: &'static str, field: String },
    #[error("field {field}: value {value} ({actual}) couldn't be cast to type {expected}")]
    TypeMismatch {
        field: &'static str,
        value: String,
        actual: String,
        expected: String,
    },
    #[error("field {field} not set on {state}")]
    FieldNotSet { field: &'static str, state: String },
    #[error("a list of {expected} cannot hold a {found}")]
    SchemaMismatch {
        expected: &'static str,
        found: &'static str,
    },
    #[error(transparent)]
    Decode(#[from] serde_json::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T, E = FieldError> = std::result::Result<T, E>;
