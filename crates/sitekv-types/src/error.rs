use thiserror::Error;

/// Errors produced by type operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("invalid site id: {0:?}")]
    InvalidSiteId(String),

    #[error("site record has no {0:?} field")]
    MissingField(&'static str),

    #[error("site record field {field:?} is not a numeric id")]
    NonNumericField { field: &'static str },
}
