//! Field editing operations.
//!
//! List-level functions locate a field by [`FieldId`] and apply one edit.
//! Option edits are also available directly on [`Field`]. Every operation is
//! a deterministic transform of its arguments; the only state is the
//! [`IdGenerator`] the caller owns.

use tracing::debug;

use crate::catalog::default_kind;
use crate::error::{FormError, Result};
use crate::field::{Field, FieldId, FieldInput, FieldKind, FieldType};

// -----------------------------------------------------------------------------
// ID Generation
// -----------------------------------------------------------------------------

/// Hands out field ids that never repeat within a session.
///
/// Ids stay within `1..=FieldId::MAX`. Once that range is used up,
/// allocation fails instead of reusing an id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdGenerator {
    next: u64,
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator {
    /// Creates a generator starting at id 1.
    pub const fn new() -> Self {
        Self { next: 1 }
    }

    /// Allocates the next id.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::IdsExhausted`] once [`FieldId::MAX`] has been
    /// handed out or observed.
    pub fn next_id(&mut self) -> Result<FieldId> {
        if self.next > FieldId::MAX.get() {
            return Err(FormError::IdsExhausted);
        }
        let id = FieldId::new(self.next);
        self.next += 1;
        Ok(id)
    }

    /// Makes sure later allocations are greater than `id`.
    ///
    /// Called for every id that enters the list from outside, such as a
    /// loaded configuration.
    pub fn observe(&mut self, id: FieldId) {
        self.next = self.next.max(id.get().saturating_add(1));
    }

    /// Peeks at the id the next call to [`next_id`](Self::next_id) returns,
    /// or `None` if the ids are used up.
    pub const fn peek(&self) -> Option<FieldId> {
        if self.next > FieldId::MAX.get() {
            None
        } else {
            Some(FieldId::new(self.next))
        }
    }
}

// -----------------------------------------------------------------------------
// Field creation and removal
// -----------------------------------------------------------------------------

/// Creates a field of `field_type` with an empty label and the catalog's
/// default options.
pub fn create_field(ids: &mut IdGenerator, field_type: FieldType) -> Result<Field> {
    Ok(Field::new(ids.next_id()?, default_kind(field_type)))
}

/// Creates a field and appends it to the end of `fields`.
///
/// The list is left unchanged if no id can be allocated.
pub fn add_field(
    fields: &mut Vec<Field>,
    ids: &mut IdGenerator,
    field_type: FieldType,
) -> Result<FieldId> {
    let field = create_field(ids, field_type)?;
    let id = field.id();
    debug!(%id, %field_type, "adding field");
    fields.push(field);
    Ok(id)
}

/// Removes the field with `id`, returning it.
///
/// Unknown ids leave the list unchanged and return `None`.
pub fn remove_field(fields: &mut Vec<Field>, id: FieldId) -> Option<Field> {
    let index = fields.iter().position(|f| f.id() == id)?;
    debug!(%id, "removing field");
    Some(fields.remove(index))
}

/// Finds a field by id.
pub fn find(fields: &[Field], id: FieldId) -> Option<&Field> {
    fields.iter().find(|f| f.id() == id)
}

fn find_mut(fields: &mut [Field], id: FieldId) -> Result<&mut Field> {
    fields
        .iter_mut()
        .find(|f| f.id() == id)
        .ok_or(FormError::FieldNotFound(id))
}

// -----------------------------------------------------------------------------
// List-level edits
// -----------------------------------------------------------------------------

/// Replaces the payload the field uses for user input.
pub fn update_field_value(fields: &mut [Field], id: FieldId, input: FieldInput) -> Result<()> {
    let field = find_mut(fields, id)?;
    debug!(%id, "updating field value");
    field.apply_input(input)
}

/// Replaces the label of the field with `id`.
pub fn set_label(fields: &mut [Field], id: FieldId, label: impl Into<String>) -> Result<()> {
    let field = find_mut(fields, id)?;
    field.set_label(label.into());
    Ok(())
}

/// Flips a checkbox option of the field with `id`. Returns the new state.
pub fn toggle_option(fields: &mut [Field], id: FieldId, index: usize) -> Result<bool> {
    let checked = find_mut(fields, id)?.toggle_option(index)?;
    debug!(%id, index, checked, "toggled option");
    Ok(checked)
}

/// Renames a dropdown option of the field with `id`.
pub fn rename_option(
    fields: &mut [Field],
    id: FieldId,
    index: usize,
    text: impl Into<String>,
) -> Result<()> {
    find_mut(fields, id)?.rename_option(index, text)?;
    debug!(%id, index, "renamed option");
    Ok(())
}

/// Appends an empty option to the dropdown with `id`. Returns its index.
pub fn add_option(fields: &mut [Field], id: FieldId) -> Result<usize> {
    let index = find_mut(fields, id)?.add_option()?;
    debug!(%id, index, "added option");
    Ok(index)
}

// -----------------------------------------------------------------------------
// Field-level edits
// -----------------------------------------------------------------------------

impl Field {
    /// Replaces the input payload. See [`FieldInput`] for which variant each
    /// field type accepts.
    pub fn apply_input(&mut self, input: FieldInput) -> Result<()> {
        let id = self.id();
        let field_type = self.field_type();
        match (self.kind_mut(), input) {
            (
                FieldKind::Text { value }
                | FieldKind::Textarea { value }
                | FieldKind::Dropdown { value, .. }
                | FieldKind::Radio { value, .. },
                FieldInput::Value(new_value),
            ) => *value = new_value,
            (FieldKind::Checkbox { options }, FieldInput::Checkboxes(new_options)) => {
                *options = new_options;
            }
            (
                FieldKind::Dropdown { options, .. } | FieldKind::Radio { options, .. },
                FieldInput::Choices(new_options),
            ) => *options = new_options,
            _ => return Err(FormError::InputMismatch { field: id, field_type }),
        }
        Ok(())
    }

    /// Flips the checked state of a checkbox option and returns the new state.
    pub fn toggle_option(&mut self, index: usize) -> Result<bool> {
        let id = self.id();
        let field_type = self.field_type();
        let FieldKind::Checkbox { options } = self.kind_mut() else {
            return Err(FormError::UnsupportedOperation {
                operation: "toggle option",
                field_type,
            });
        };
        let len = options.len();
        let option = options.get_mut(index).ok_or(FormError::OptionOutOfRange {
            field: id,
            index,
            len,
        })?;
        option.checked = !option.checked;
        Ok(option.checked)
    }

    /// Replaces the text of a dropdown option.
    pub fn rename_option(&mut self, index: usize, text: impl Into<String>) -> Result<()> {
        let id = self.id();
        let field_type = self.field_type();
        let FieldKind::Dropdown { options, .. } = self.kind_mut() else {
            return Err(FormError::UnsupportedOperation {
                operation: "rename option",
                field_type,
            });
        };
        let len = options.len();
        let slot = options.get_mut(index).ok_or(FormError::OptionOutOfRange {
            field: id,
            index,
            len,
        })?;
        *slot = text.into();
        Ok(())
    }

    /// Appends an empty option to a dropdown and returns its index.
    pub fn add_option(&mut self) -> Result<usize> {
        let field_type = self.field_type();
        let FieldKind::Dropdown { options, .. } = self.kind_mut() else {
            return Err(FormError::UnsupportedOperation {
                operation: "add option",
                field_type,
            });
        };
        options.push(String::new());
        Ok(options.len() - 1)
    }
}
