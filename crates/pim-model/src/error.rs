use thiserror::Error;

/// Failures raised while validating an imported record.
///
/// These abort the record; validation violations are reported as data instead.
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("{kind} has no value for attribute {attribute} (locale: {locale:?}, scope: {scope:?})")]
    MissingValue {
        kind: String,
        attribute: String,
        locale: Option<String>,
        scope: Option<String>,
    },
    #[error("column {label} maps to neither an attribute nor a property")]
    MalformedColumn { label: String },
    #[error("{kind} has no property {path}")]
    UnknownProperty { kind: String, path: String },
    #[error("the unique code \"{identifier}\" was already read in this file for {kind}")]
    DuplicateIdentifier { kind: String, identifier: String },
    #[error("cannot guess constraints for attribute {attribute}: {message}")]
    Guess { attribute: String, message: String },
}

pub type Result<T> = std::result::Result<T, ImportError>;
