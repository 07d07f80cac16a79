use thiserror::Error;

/// The payload's shape does not match what the pipeline requires.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SchemaError {
    #[error("expected a JSON object or an array, found {0}")]
    UnsupportedShape(&'static str),

    #[error("record set is missing required column {0:?}")]
    MissingColumn(String),

    #[error("record set has no rows to read column {0:?} from")]
    NoRows(String),

    #[error("column {column:?} value {value} does not fit {target}")]
    InvalidValue {
        column: String,
        value: String,
        target: &'static str,
    },
}

/// Valid data, but not the fixed NS/EW seating this pipeline supports.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("not a Mitchell movement: {column} contains {found} where {expected:?} is required")]
pub struct UnsupportedMovement {
    pub column: &'static str,
    pub found: String,
    pub expected: &'static str,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EnrichError {
    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error(transparent)]
    Movement(#[from] UnsupportedMovement),
}
