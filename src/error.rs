use serde_json::Value;
use thiserror::Error;

pub type OptionsResult<T> = Result<T, OptionsError>;

#[derive(Debug, Error)]
pub enum OptionsError {
    /// A raw value could not be coerced to an attribute's declared type.
    /// The prior attribute value is always left untouched.
    #[error("invalid value for `{attribute}`: {value}")]
    Validation { attribute: String, value: String },

    /// A color-like attribute received a value with no recognizable
    /// structural marker (not a string, gradient mapping, or pattern mapping).
    #[error("unable to resolve `{attribute}` to a color string, gradient, or pattern: {value}")]
    UnresolvableValue { attribute: String, value: String },

    /// Two schema levels declared the same wire key.
    /// This is an authoring bug caught by `schema::verify_wire_keys`, never a
    /// data problem.
    #[error("wire key `{wire_key}` is declared by more than one schema level")]
    KeyConflict { wire_key: String },

    /// Two schema levels declared the same internal attribute name.
    /// Like `KeyConflict`, an authoring bug caught by
    /// `schema::verify_wire_keys`.
    #[error("attribute `{attribute}` is declared by more than one schema level")]
    AttributeConflict { attribute: String },

    #[error("invalid json: {0}")]
    Json(String),
}

impl OptionsError {
    pub(crate) fn validation(attribute: &str, value: &Value) -> Self {
        Self::Validation {
            attribute: attribute.to_owned(),
            value: value.to_string(),
        }
    }

    pub(crate) fn unresolvable(attribute: &str, value: &Value) -> Self {
        Self::UnresolvableValue {
            attribute: attribute.to_owned(),
            value: value.to_string(),
        }
    }
}
