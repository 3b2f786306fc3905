//! Error types for form building operations.

use thiserror::Error;

use crate::field::{FieldId, FieldType};

/// Errors that can occur while editing, persisting or restoring a form.
///
/// Errors fall into these groups:
///
/// | Group | Variants | Handling |
/// |-------|----------|----------|
/// | Stored data | [`Deserialize`](FormError::Deserialize), [`DuplicateId`](FormError::DuplicateId), [`IdOutOfRange`](FormError::IdOutOfRange) | Keep the current fields, tell the user |
/// | Id space | [`IdsExhausted`](FormError::IdsExhausted) | No more fields can be added |
/// | Store I/O | [`Store`](FormError::Store), [`Serialize`](FormError::Serialize) | Report, nothing was changed |
/// | Caller defects | everything else | Fix the caller; the UI never produces these |
///
/// Per-field validation problems are not errors of this type; they live in
/// [`ValidationErrors`](crate::ValidationErrors).
///
/// # Note on Clone and PartialEq
///
/// This error type implements `Clone` and `PartialEq` to support
/// testing and comparison. As a result, wrapped serde and store errors are
/// kept as their `String` messages.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    /// No field with this id exists in the list.
    #[error("field not found: {0}")]
    FieldNotFound(FieldId),

    /// An option index past the end of the field's option list.
    #[error("option index {index} out of range for field {field} ({len} options)")]
    OptionOutOfRange {
        field: FieldId,
        index: usize,
        len: usize,
    },

    /// The operation is not available for this field type.
    #[error("{operation} is not supported by {field_type} fields")]
    UnsupportedOperation {
        operation: &'static str,
        field_type: FieldType,
    },

    /// The new input does not match the payload shape of the field type.
    #[error("input for field {field} does not match its type ({field_type})")]
    InputMismatch { field: FieldId, field_type: FieldType },

    /// A type tag outside the catalog.
    #[error("unknown field type: {0}")]
    UnknownFieldType(String),

    /// Stored configuration text could not be parsed.
    #[error("malformed configuration: {0}")]
    Deserialize(String),

    /// Stored configuration contains the same id twice.
    #[error("duplicate field id in configuration: {0}")]
    DuplicateId(FieldId),

    /// Stored configuration holds an id above [`FieldId::MAX`].
    #[error("field id {0} in configuration exceeds the largest supported id")]
    IdOutOfRange(u64),

    /// Every id up to [`FieldId::MAX`] has been handed out.
    #[error("no field ids left to allocate")]
    IdsExhausted,

    /// The field list could not be serialized.
    #[error("serialization error: {0}")]
    Serialize(String),

    /// The configuration store rejected a read or write.
    #[error("store error: {0}")]
    Store(String),
}

impl FormError {
    /// Creates a store error with the given message.
    pub fn store(message: impl Into<String>) -> Self {
        Self::Store(message.into())
    }

    /// Returns true if the error came from unreadable stored data.
    ///
    /// The current field list is untouched in that case, so callers can
    /// notify the user and carry on.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::Deserialize(_) | Self::DuplicateId(_) | Self::IdOutOfRange(_)
        )
    }

    /// Returns true if the error indicates a caller defect rather than bad
    /// user input or stored data.
    pub fn is_programming_error(&self) -> bool {
        matches!(
            self,
            Self::FieldNotFound(_)
                | Self::OptionOutOfRange { .. }
                | Self::UnsupportedOperation { .. }
                | Self::InputMismatch { .. }
                | Self::UnknownFieldType(_)
        )
    }
}

impl From<serde_json::Error> for FormError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_io() {
            Self::Serialize(err.to_string())
        } else {
            Self::Deserialize(err.to_string())
        }
    }
}

/// A specialized [`Result`] type for form operations.
pub type Result<T> = std::result::Result<T, FormError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_out_of_range_display() {
        let err = FormError::OptionOutOfRange {
            field: FieldId::new(7),
            index: 3,
            len: 2,
        };
        assert_eq!(
            err.to_string(),
            "option index 3 out of range for field 7 (2 options)"
        );
    }

    #[test]
    fn test_unsupported_display_uses_tag() {
        let err = FormError::UnsupportedOperation {
            operation: "add option",
            field_type: FieldType::Radio,
        };
        assert_eq!(err.to_string(), "add option is not supported by radio fields");
    }

    #[test]
    fn test_serde_syntax_error_maps_to_deserialize() {
        let err: FormError = serde_json::from_str::<Vec<u8>>("[1,")
            .unwrap_err()
            .into();
        assert!(matches!(err, FormError::Deserialize(_)));
        assert!(err.is_recoverable());
    }
}
