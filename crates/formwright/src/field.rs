//! The form field model.
//!
//! A [`Field`] pairs a stable [`FieldId`] and an author label with a
//! [`FieldKind`], the per-type payload. Because the payload is a sum type,
//! a checkbox can only ever hold `{label, checked}` options and a dropdown can
//! only ever hold plain string choices.
//!
//! The serialized form of a field is a flat JSON object:
//!
//! ```json
//! {"id":1,"label":"Colour","type":"dropdown","value":"","options":["Red","Blue"]}
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::FormError;

/// Unique identifier of a field within a form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldId(u64);

impl FieldId {
    /// Largest id a configuration may hold.
    ///
    /// Ids above this do not survive a round trip through a JavaScript
    /// number, so they are rejected on load and never allocated.
    pub const MAX: Self = Self(9_007_199_254_740_991);

    /// Wraps a raw id.
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw id.
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for FieldId {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

/// The fixed set of field types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    /// Single-line text input.
    Text,
    /// Multi-line text input.
    Textarea,
    /// A list of independently checked options.
    Checkbox,
    /// A select box with editable choices.
    Dropdown,
    /// A group of mutually exclusive choices.
    Radio,
}

impl FieldType {
    /// All field types in catalog order.
    pub const ALL: [Self; 5] = [
        Self::Text,
        Self::Textarea,
        Self::Checkbox,
        Self::Dropdown,
        Self::Radio,
    ];

    /// The stable tag used in stored configurations.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Textarea => "textarea",
            Self::Checkbox => "checkbox",
            Self::Dropdown => "dropdown",
            Self::Radio => "radio",
        }
    }

    /// Returns true for types whose options are plain string choices.
    pub const fn has_choices(self) -> bool {
        matches!(self, Self::Dropdown | Self::Radio)
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldType {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| FormError::UnknownFieldType(s.to_string()))
    }
}

/// One option of a checkbox field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckboxOption {
    /// Text shown next to the box.
    pub label: String,
    /// Whether the box is ticked.
    #[serde(default)]
    pub checked: bool,
}

impl CheckboxOption {
    /// Creates an unchecked option.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            checked: false,
        }
    }

    /// Sets the checked state.
    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }
}

/// The type-specific payload of a field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum FieldKind {
    /// Single-line text with its current value.
    Text {
        #[serde(default)]
        value: String,
    },
    /// Multi-line text with its current value.
    Textarea {
        #[serde(default)]
        value: String,
    },
    /// Independently checked options. Has no single value.
    Checkbox {
        #[serde(default)]
        options: Vec<CheckboxOption>,
    },
    /// The selected choice and the editable choice list.
    Dropdown {
        #[serde(default, deserialize_with = "choice_value")]
        value: String,
        #[serde(default)]
        options: Vec<String>,
    },
    /// The selected choice and the choice list.
    Radio {
        #[serde(default, deserialize_with = "choice_value")]
        value: String,
        #[serde(default)]
        options: Vec<String>,
    },
}

/// Reads a choice field's `value`.
///
/// Configurations saved by older browser builds hold the option list in
/// `value` after an option was renamed. No choice was made in that case, so
/// the list reads back as an empty value.
fn choice_value<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Stored {
        Choice(String),
        Options(Vec<String>),
    }

    Ok(match Stored::deserialize(deserializer)? {
        Stored::Choice(value) => value,
        Stored::Options(_) => String::new(),
    })
}

impl FieldKind {
    /// The field type this payload belongs to.
    pub const fn field_type(&self) -> FieldType {
        match self {
            Self::Text { .. } => FieldType::Text,
            Self::Textarea { .. } => FieldType::Textarea,
            Self::Checkbox { .. } => FieldType::Checkbox,
            Self::Dropdown { .. } => FieldType::Dropdown,
            Self::Radio { .. } => FieldType::Radio,
        }
    }
}

/// A single field of the form being built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    id: FieldId,
    #[serde(default)]
    label: String,
    #[serde(flatten)]
    kind: FieldKind,
}

impl Field {
    /// Creates a field with an empty label.
    pub fn new(id: FieldId, kind: FieldKind) -> Self {
        Self {
            id,
            label: String::new(),
            kind,
        }
    }

    /// Sets the label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// The field's id.
    pub fn id(&self) -> FieldId {
        self.id
    }

    /// The label shown above the input.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The type-specific payload.
    pub fn kind(&self) -> &FieldKind {
        &self.kind
    }

    pub(crate) fn kind_mut(&mut self) -> &mut FieldKind {
        &mut self.kind
    }

    pub(crate) fn set_label(&mut self, label: String) {
        self.label = label;
    }

    /// The field's type. Fixed at creation.
    pub fn field_type(&self) -> FieldType {
        self.kind.field_type()
    }

    /// The current single value, or `None` for checkbox fields.
    pub fn value(&self) -> Option<&str> {
        match &self.kind {
            FieldKind::Text { value }
            | FieldKind::Textarea { value }
            | FieldKind::Dropdown { value, .. }
            | FieldKind::Radio { value, .. } => Some(value),
            FieldKind::Checkbox { .. } => None,
        }
    }

    /// Checkbox options, or `None` for other types.
    pub fn checkbox_options(&self) -> Option<&[CheckboxOption]> {
        match &self.kind {
            FieldKind::Checkbox { options } => Some(options),
            _ => None,
        }
    }

    /// Dropdown or radio choices, or `None` for other types.
    pub fn choices(&self) -> Option<&[String]> {
        match &self.kind {
            FieldKind::Dropdown { options, .. } | FieldKind::Radio { options, .. } => {
                Some(options)
            }
            _ => None,
        }
    }

    /// Number of options of any shape.
    pub fn option_count(&self) -> usize {
        match &self.kind {
            FieldKind::Checkbox { options } => options.len(),
            FieldKind::Dropdown { options, .. } | FieldKind::Radio { options, .. } => {
                options.len()
            }
            FieldKind::Text { .. } | FieldKind::Textarea { .. } => 0,
        }
    }
}

/// New user input for a field.
///
/// Each field type keeps its input in one payload: a string value for text,
/// textarea, dropdown and radio fields, and the option list for checkboxes.
/// `Choices` replaces the choice list of a dropdown or radio field wholesale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldInput {
    /// A new single value.
    Value(String),
    /// A new checkbox option list.
    Checkboxes(Vec<CheckboxOption>),
    /// A new choice list.
    Choices(Vec<String>),
}

impl From<&str> for FieldInput {
    fn from(value: &str) -> Self {
        Self::Value(value.to_string())
    }
}

impl From<String> for FieldInput {
    fn from(value: String) -> Self {
        Self::Value(value)
    }
}
