//! Render descriptors handed to the display layer.
//!
//! The core does not draw anything. It describes each field, with its
//! current error, and leaves the mapping to widgets to the host.

use serde::Serialize;

use crate::catalog::{FieldTypeEntry, field_types};
use crate::field::{Field, FieldId, FieldKind, FieldType};
use crate::validate::ValidationErrors;

/// One option as the display layer sees it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum OptionDescriptor {
    /// A dropdown or radio choice.
    Choice(String),
    /// A checkbox option.
    Checkbox { label: String, checked: bool },
}

/// Everything needed to draw one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldDescriptor {
    /// Id passed back with every intent for this field.
    pub id: FieldId,
    /// Which input control to draw.
    #[serde(rename = "type")]
    pub field_type: FieldType,
    /// Label shown above the input.
    pub label: String,
    /// Current value. Absent for checkbox fields.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    /// Options to draw. Absent for text and textarea fields.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<OptionDescriptor>>,
    /// Validation message from the last submit, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl FieldDescriptor {
    /// Describes `field`, attaching its entry from `errors` if present.
    pub fn describe(field: &Field, errors: &ValidationErrors) -> Self {
        let options = match field.kind() {
            FieldKind::Text { .. } | FieldKind::Textarea { .. } => None,
            FieldKind::Checkbox { options } => Some(
                options
                    .iter()
                    .map(|o| OptionDescriptor::Checkbox {
                        label: o.label.clone(),
                        checked: o.checked,
                    })
                    .collect(),
            ),
            FieldKind::Dropdown { options, .. } | FieldKind::Radio { options, .. } => Some(
                options
                    .iter()
                    .cloned()
                    .map(OptionDescriptor::Choice)
                    .collect(),
            ),
        };

        Self {
            id: field.id(),
            field_type: field.field_type(),
            label: field.label().to_string(),
            value: field.value().map(str::to_string),
            options,
            error: errors.get(field.id()).map(|e| e.to_string()),
        }
    }
}

/// The whole form as the display layer sees it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormView {
    /// Fields in display order.
    pub fields: Vec<FieldDescriptor>,
    /// Entries for the "add field" selector.
    pub field_types: &'static [FieldTypeEntry],
    /// Submit is offered only once the form has a field.
    pub show_submit: bool,
}

impl FormView {
    /// Builds the view for `fields` with the last computed `errors`.
    pub fn build(fields: &[Field], errors: &ValidationErrors) -> Self {
        Self {
            fields: fields
                .iter()
                .map(|field| FieldDescriptor::describe(field, errors))
                .collect(),
            field_types: field_types(),
            show_submit: !fields.is_empty(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::CheckboxOption;
    use crate::validate::validate;

    #[test]
    fn test_empty_form_hides_submit() {
        let view = FormView::build(&[], &ValidationErrors::new());
        assert!(view.fields.is_empty());
        assert!(!view.show_submit);
        assert_eq!(view.field_types.len(), 5);
    }

    #[test]
    fn test_text_descriptor_json() {
        let field = Field::new(
            FieldId::new(1),
            FieldKind::Text {
                value: String::new(),
            },
        )
        .with_label("Name");
        let errors = validate(std::slice::from_ref(&field));
        let json = serde_json::to_string(&FieldDescriptor::describe(&field, &errors)).unwrap();
        assert_eq!(
            json,
            r#"{"id":1,"type":"text","label":"Name","value":"","error":"Field is required"}"#
        );
    }

    #[test]
    fn test_checkbox_descriptor_has_no_value() {
        let field = Field::new(
            FieldId::new(2),
            FieldKind::Checkbox {
                options: vec![CheckboxOption::new("A").checked(true)],
            },
        );
        let view = FormView::build(std::slice::from_ref(&field), &ValidationErrors::new());
        let descriptor = &view.fields[0];
        assert!(view.show_submit);
        assert_eq!(descriptor.value, None);
        assert_eq!(
            descriptor.options,
            Some(vec![OptionDescriptor::Checkbox {
                label: "A".into(),
                checked: true
            }])
        );
        assert_eq!(descriptor.error, None);
    }

    #[test]
    fn test_choice_options_serialize_as_strings() {
        let field = Field::new(
            FieldId::new(3),
            FieldKind::Radio {
                value: "Yes".into(),
                options: vec!["Yes".into(), "No".into()],
            },
        );
        let json =
            serde_json::to_string(&FieldDescriptor::describe(&field, &ValidationErrors::new()))
                .unwrap();
        assert_eq!(
            json,
            r#"{"id":3,"type":"radio","label":"","value":"Yes","options":["Yes","No"]}"#
        );
    }
}
