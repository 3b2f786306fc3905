//! Submit-time validation.
//!
//! Every field is required: checkbox fields need at least one ticked option,
//! all other fields need a non-empty value. [`validate`] never fails; it
//! returns the full error map for the current list.

use std::collections::BTreeMap;

use thiserror::Error;

use crate::field::{Field, FieldId, FieldKind};

/// Why a single field failed validation.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// A value-carrying field is empty.
    #[error("Field is required")]
    Required,
    /// A checkbox field has no ticked option.
    #[error("Atleast one option should be selected")]
    NoOptionSelected,
}

/// Validation errors keyed by field id.
///
/// Fields that passed are absent from the map.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: BTreeMap<FieldId, ValidationError>,
}

impl ValidationErrors {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true when no field has an error.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Number of fields with an error.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// True when no field has an error.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// The error recorded for `id`, if any.
    pub fn get(&self, id: FieldId) -> Option<ValidationError> {
        self.errors.get(&id).copied()
    }

    /// Drops the entry for `id`.
    pub fn remove(&mut self, id: FieldId) -> Option<ValidationError> {
        self.errors.remove(&id)
    }

    /// Errors in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = (FieldId, ValidationError)> + '_ {
        self.errors.iter().map(|(id, err)| (*id, *err))
    }

    /// Error messages keyed by id, as shown to the user.
    pub fn messages(&self) -> BTreeMap<FieldId, String> {
        self.iter().map(|(id, err)| (id, err.to_string())).collect()
    }
}

impl FromIterator<(FieldId, ValidationError)> for ValidationErrors {
    fn from_iter<I: IntoIterator<Item = (FieldId, ValidationError)>>(iter: I) -> Self {
        Self {
            errors: iter.into_iter().collect(),
        }
    }
}

/// Checks one field.
pub fn validate_field(field: &Field) -> Option<ValidationError> {
    match field.kind() {
        FieldKind::Checkbox { options } => {
            if options.iter().any(|option| option.checked) {
                None
            } else {
                Some(ValidationError::NoOptionSelected)
            }
        }
        FieldKind::Text { value }
        | FieldKind::Textarea { value }
        | FieldKind::Dropdown { value, .. }
        | FieldKind::Radio { value, .. } => {
            if value.is_empty() {
                Some(ValidationError::Required)
            } else {
                None
            }
        }
    }
}

/// Validates every field and returns the errors found.
pub fn validate(fields: &[Field]) -> ValidationErrors {
    fields
        .iter()
        .filter_map(|field| validate_field(field).map(|err| (field.id(), err)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::CheckboxOption;

    fn text(id: u64, value: &str) -> Field {
        Field::new(
            FieldId::new(id),
            FieldKind::Text {
                value: value.into(),
            },
        )
    }

    fn checkbox(id: u64, checked: &[bool]) -> Field {
        Field::new(
            FieldId::new(id),
            FieldKind::Checkbox {
                options: checked
                    .iter()
                    .enumerate()
                    .map(|(i, &c)| CheckboxOption::new(format!("Option {}", i + 1)).checked(c))
                    .collect(),
            },
        )
    }

    #[test]
    fn test_messages() {
        assert_eq!(ValidationError::Required.to_string(), "Field is required");
        assert_eq!(
            ValidationError::NoOptionSelected.to_string(),
            "Atleast one option should be selected"
        );
    }

    #[test]
    fn test_empty_list_is_valid() {
        assert!(validate(&[]).is_valid());
    }

    #[test]
    fn test_empty_text_is_required() {
        let errors = validate(&[text(1, "")]);
        assert_eq!(errors.get(FieldId::new(1)), Some(ValidationError::Required));

        let errors = validate(&[text(1, "anything")]);
        assert!(errors.is_valid());
    }

    #[test]
    fn test_whitespace_counts_as_filled() {
        assert!(validate(&[text(1, " ")]).is_valid());
    }

    #[test]
    fn test_checkbox_needs_one_checked() {
        let errors = validate(&[checkbox(5, &[false, false])]);
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors.get(FieldId::new(5)),
            Some(ValidationError::NoOptionSelected)
        );

        assert!(validate(&[checkbox(5, &[false, true])]).is_valid());
    }

    #[test]
    fn test_checkbox_without_options_fails() {
        assert!(!validate(&[checkbox(1, &[])]).is_valid());
    }

    #[test]
    fn test_dropdown_value_required() {
        let field = Field::new(
            FieldId::new(2),
            FieldKind::Dropdown {
                value: String::new(),
                options: vec!["Option 1".into()],
            },
        );
        assert_eq!(validate_field(&field), Some(ValidationError::Required));
    }

    #[test]
    fn test_only_failing_fields_present() {
        let errors = validate(&[text(1, "ok"), text(2, ""), checkbox(3, &[true])]);
        assert_eq!(errors.len(), 1);
        assert!(errors.get(FieldId::new(1)).is_none());
        assert_eq!(
            errors.messages().get(&FieldId::new(2)).map(String::as_str),
            Some("Field is required")
        );
    }
}
