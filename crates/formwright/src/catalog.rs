//! The catalog of selectable field types.
//!
//! The catalog is static: the same five entries, in the same order, with the
//! same seeded options every time.

use serde::Serialize;

use crate::field::{CheckboxOption, FieldKind, FieldType};

/// One entry of the field type selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldTypeEntry {
    /// Human-readable name shown in the selector.
    pub label: &'static str,
    /// The type created when this entry is picked.
    #[serde(rename = "value")]
    pub field_type: FieldType,
}

static FIELD_TYPES: [FieldTypeEntry; 5] = [
    FieldTypeEntry {
        label: "Text Input",
        field_type: FieldType::Text,
    },
    FieldTypeEntry {
        label: "Textarea",
        field_type: FieldType::Textarea,
    },
    FieldTypeEntry {
        label: "Checkbox",
        field_type: FieldType::Checkbox,
    },
    FieldTypeEntry {
        label: "Dropdown",
        field_type: FieldType::Dropdown,
    },
    FieldTypeEntry {
        label: "Radio Button",
        field_type: FieldType::Radio,
    },
];

/// Returns the selectable field types in display order.
pub fn field_types() -> &'static [FieldTypeEntry] {
    &FIELD_TYPES
}

impl FieldType {
    /// The selector label for this type.
    pub fn display_label(self) -> &'static str {
        FIELD_TYPES
            .iter()
            .find(|entry| entry.field_type == self)
            .map_or(self.as_str(), |entry| entry.label)
    }
}

/// The payload a freshly created field of `field_type` starts with.
pub fn default_kind(field_type: FieldType) -> FieldKind {
    match field_type {
        FieldType::Text => FieldKind::Text {
            value: String::new(),
        },
        FieldType::Textarea => FieldKind::Textarea {
            value: String::new(),
        },
        FieldType::Checkbox => FieldKind::Checkbox {
            options: vec![
                CheckboxOption::new("Option 1"),
                CheckboxOption::new("Option 2"),
            ],
        },
        FieldType::Dropdown => FieldKind::Dropdown {
            value: String::new(),
            options: vec!["Option 1".to_string(), "Option 2".to_string()],
        },
        FieldType::Radio => FieldKind::Radio {
            value: String::new(),
            options: vec!["I Agree".to_string(), "I Disagree".to_string()],
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_order_and_labels() {
        let entries: Vec<(&str, FieldType)> = field_types()
            .iter()
            .map(|e| (e.label, e.field_type))
            .collect();
        assert_eq!(
            entries,
            vec![
                ("Text Input", FieldType::Text),
                ("Textarea", FieldType::Textarea),
                ("Checkbox", FieldType::Checkbox),
                ("Dropdown", FieldType::Dropdown),
                ("Radio Button", FieldType::Radio),
            ]
        );
    }

    #[test]
    fn test_catalog_covers_every_type() {
        for t in FieldType::ALL {
            assert!(field_types().iter().any(|e| e.field_type == t));
        }
    }

    #[test]
    fn test_display_label() {
        assert_eq!(FieldType::Radio.display_label(), "Radio Button");
        assert_eq!(FieldType::Text.display_label(), "Text Input");
    }

    #[test]
    fn test_default_kind_matches_type() {
        for t in FieldType::ALL {
            assert_eq!(default_kind(t).field_type(), t);
        }
    }

    #[test]
    fn test_default_radio_choices() {
        let FieldKind::Radio { value, options } = default_kind(FieldType::Radio) else {
            panic!("expected radio payload");
        };
        assert!(value.is_empty());
        assert_eq!(options, vec!["I Agree", "I Disagree"]);
    }

    #[test]
    fn test_catalog_serializes_like_selector_options() {
        let json = serde_json::to_string(&field_types()[4]).unwrap();
        assert_eq!(json, r#"{"label":"Radio Button","value":"radio"}"#);
    }
}
