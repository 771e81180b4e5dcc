use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unknown specialty: {0:?}")]
    UnknownSpecialty(String),
    #[error("unknown status: {0:?}")]
    UnknownStatus(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("missing required field `{field}`")]
    Missing { field: &'static str },
    #[error("invalid value for `{field}`: {value:?}")]
    Invalid { field: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SlotError {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),
    #[error("no slot with id {id}")]
    NotFound { id: String },
}
