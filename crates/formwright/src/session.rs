//! The form-building session.
//!
//! [`FormBuilder`] owns the field list, the last validation result, the id
//! generator and the configuration store. Hosts drive it either through the
//! named methods or by feeding [`Intent`]s to [`FormBuilder::update`], one at
//! a time, and redraw from [`FormBuilder::view`] afterwards.
//!
//! # Example
//!
//! ```rust
//! use formwright::{FieldType, FormBuilder, Intent, MemoryStore, Notice};
//!
//! let mut builder = FormBuilder::new(MemoryStore::new());
//! builder.update(Intent::AddField(FieldType::Dropdown)).unwrap();
//! let id = builder.fields()[0].id();
//!
//! builder.update(Intent::AddOption(id)).unwrap();
//! builder.update(Intent::OptionRename(id, 2, "Option 3".into())).unwrap();
//! assert_eq!(builder.fields()[0].option_count(), 3);
//!
//! let notice = builder.update(Intent::SaveConfig).unwrap();
//! assert_eq!(notice, Some(Notice::ConfigSaved));
//! ```

use std::fmt;

use tracing::{debug, info, warn};

use crate::editor::{self, IdGenerator};
use crate::error::Result;
use crate::field::{Field, FieldId, FieldInput, FieldType};
use crate::persist::{self, ConfigStore};
use crate::render::FormView;
use crate::settings::Settings;
use crate::validate::{ValidationErrors, validate};

/// A user action coming from the display layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// A field type was picked from the selector.
    AddField(FieldType),
    /// The remove button of a field was pressed.
    RemoveField(FieldId),
    /// The user changed a field's input.
    ValueChange(FieldId, FieldInput),
    /// The author edited a field's label.
    LabelChange(FieldId, String),
    /// A checkbox option was clicked.
    OptionToggle(FieldId, usize),
    /// A dropdown option's text was edited.
    OptionRename(FieldId, usize, String),
    /// "Add Option" was pressed on a dropdown.
    AddOption(FieldId),
    /// The form was submitted.
    Submit,
    /// "Save Configuration" was pressed.
    SaveConfig,
    /// "Load Configuration" was pressed.
    LoadConfig,
}

/// Outcome of an action that the user should be told about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// Every field passed validation.
    Submitted,
    /// Submit was refused; `errors` fields need attention.
    Invalid { errors: usize },
    /// The configuration was written to the store.
    ConfigSaved,
    /// A stored configuration replaced the current fields.
    ConfigLoaded { fields: usize },
    /// The store holds no configuration; nothing changed.
    NothingToLoad,
    /// The stored configuration could not be read; nothing changed.
    LoadFailed { reason: String },
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Submitted => f.write_str("Submitted Successfully!"),
            Self::Invalid { errors: 1 } => f.write_str("1 field needs attention"),
            Self::Invalid { errors } => write!(f, "{errors} fields need attention"),
            Self::ConfigSaved => f.write_str("Configuration saved successfully!"),
            Self::ConfigLoaded { .. } => f.write_str("Configuration loaded successfully!"),
            Self::NothingToLoad => f.write_str("No saved configuration found"),
            Self::LoadFailed { reason } => write!(f, "Could not load configuration: {reason}"),
        }
    }
}

/// A form-building session over a configuration store.
#[derive(Debug)]
pub struct FormBuilder<S> {
    fields: Vec<Field>,
    errors: ValidationErrors,
    ids: IdGenerator,
    settings: Settings,
    store: S,
}

impl<S: ConfigStore> FormBuilder<S> {
    /// Creates an empty session with default settings.
    pub fn new(store: S) -> Self {
        Self::with_settings(store, Settings::default())
    }

    /// Creates an empty session.
    pub fn with_settings(store: S, settings: Settings) -> Self {
        Self {
            fields: Vec::new(),
            errors: ValidationErrors::new(),
            ids: IdGenerator::new(),
            settings,
            store,
        }
    }

    /// Fields in display order.
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Looks up a field.
    pub fn field(&self, id: FieldId) -> Option<&Field> {
        editor::find(&self.fields, id)
    }

    /// Errors from the last validation pass.
    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    /// The settings this session was created with.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// The configuration store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Mutable access to the configuration store.
    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// Ends the session, handing back the store.
    pub fn into_store(self) -> S {
        self.store
    }

    /// Applies one intent and returns the notice it produced, if any.
    pub fn update(&mut self, intent: Intent) -> Result<Option<Notice>> {
        match intent {
            Intent::AddField(field_type) => {
                self.add_field(field_type)?;
            }
            Intent::RemoveField(id) => {
                self.remove_field(id);
            }
            Intent::ValueChange(id, input) => self.update_value(id, input)?,
            Intent::LabelChange(id, label) => self.set_label(id, label)?,
            Intent::OptionToggle(id, index) => {
                self.toggle_option(id, index)?;
            }
            Intent::OptionRename(id, index, text) => self.rename_option(id, index, text)?,
            Intent::AddOption(id) => {
                self.add_option(id)?;
            }
            Intent::Submit => return Ok(Some(self.submit())),
            Intent::SaveConfig => return self.save_config().map(Some),
            Intent::LoadConfig => return self.load_config().map(Some),
        }
        Ok(None)
    }

    /// Appends a new field of `field_type`.
    ///
    /// Fails with [`FormError::IdsExhausted`](crate::FormError::IdsExhausted)
    /// when no id is left.
    pub fn add_field(&mut self, field_type: FieldType) -> Result<FieldId> {
        editor::add_field(&mut self.fields, &mut self.ids, field_type)
    }

    /// Removes a field and its error. Unknown ids are ignored.
    pub fn remove_field(&mut self, id: FieldId) -> Option<Field> {
        let removed = editor::remove_field(&mut self.fields, id);
        if removed.is_some() {
            self.errors.remove(id);
        }
        removed
    }

    /// Replaces the input of a field.
    pub fn update_value(&mut self, id: FieldId, input: FieldInput) -> Result<()> {
        editor::update_field_value(&mut self.fields, id, input)
    }

    /// Replaces the label of a field.
    pub fn set_label(&mut self, id: FieldId, label: impl Into<String>) -> Result<()> {
        editor::set_label(&mut self.fields, id, label)
    }

    /// Flips a checkbox option. Returns the new state.
    pub fn toggle_option(&mut self, id: FieldId, index: usize) -> Result<bool> {
        editor::toggle_option(&mut self.fields, id, index)
    }

    /// Renames a dropdown option.
    pub fn rename_option(&mut self, id: FieldId, index: usize, text: impl Into<String>) -> Result<()> {
        editor::rename_option(&mut self.fields, id, index, text)
    }

    /// Adds an empty option to a dropdown. Returns its index.
    pub fn add_option(&mut self, id: FieldId) -> Result<usize> {
        editor::add_option(&mut self.fields, id)
    }

    /// Recomputes the error map from scratch.
    pub fn validate(&mut self) -> &ValidationErrors {
        self.errors = validate(&self.fields);
        debug!(errors = self.errors.len(), "validated form");
        &self.errors
    }

    /// Validates and reports whether the form may be submitted.
    pub fn submit(&mut self) -> Notice {
        let errors = self.validate().len();
        if errors == 0 {
            info!(fields = ?self.fields, "form submitted");
            Notice::Submitted
        } else {
            info!(errors, "submit refused");
            Notice::Invalid { errors }
        }
    }

    /// Writes the current fields to the store.
    pub fn save_config(&mut self) -> Result<Notice> {
        let text = if self.settings.pretty {
            persist::save_pretty(&self.fields)?
        } else {
            persist::save(&self.fields)?
        };
        self.store.set(&self.settings.storage_key, &text)?;
        info!(
            key = %self.settings.storage_key,
            fields = self.fields.len(),
            "configuration saved"
        );
        Ok(Notice::ConfigSaved)
    }

    /// Replaces the current fields with the stored configuration.
    ///
    /// A missing or unreadable configuration leaves the session untouched and
    /// is reported through the returned [`Notice`]. Only store failures are
    /// returned as errors.
    pub fn load_config(&mut self) -> Result<Notice> {
        let key = &self.settings.storage_key;
        let Some(text) = self.store.get(key)? else {
            info!(%key, "no saved configuration");
            return Ok(Notice::NothingToLoad);
        };

        match persist::load(Some(&text)) {
            Ok(fields) => {
                for field in &fields {
                    self.ids.observe(field.id());
                }
                let count = fields.len();
                self.fields = fields;
                self.errors = ValidationErrors::new();
                info!(%key, fields = count, "configuration loaded");
                Ok(Notice::ConfigLoaded { fields: count })
            }
            Err(err) if err.is_recoverable() => {
                warn!(%key, error = %err, "stored configuration is unreadable, keeping current fields");
                Ok(Notice::LoadFailed {
                    reason: err.to_string(),
                })
            }
            Err(err) => Err(err),
        }
    }

    /// Describes the form for the display layer.
    pub fn view(&self) -> FormView {
        FormView::build(&self.fields, &self.errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FormError;
    use crate::persist::MemoryStore;
    use crate::validate::ValidationError;

    /// A store whose writes always fail.
    struct ReadOnlyStore;

    impl ConfigStore for ReadOnlyStore {
        fn get(&self, _key: &str) -> Result<Option<String>> {
            Ok(None)
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<()> {
            Err(FormError::store("quota exceeded"))
        }
    }

    #[test]
    fn test_notice_messages() {
        assert_eq!(Notice::Submitted.to_string(), "Submitted Successfully!");
        assert_eq!(
            Notice::ConfigSaved.to_string(),
            "Configuration saved successfully!"
        );
        assert_eq!(
            Notice::ConfigLoaded { fields: 3 }.to_string(),
            "Configuration loaded successfully!"
        );
        assert_eq!(Notice::Invalid { errors: 1 }.to_string(), "1 field needs attention");
        assert_eq!(Notice::Invalid { errors: 2 }.to_string(), "2 fields need attention");
    }

    #[test]
    fn test_remove_drops_error() {
        let mut builder = FormBuilder::new(MemoryStore::new());
        let id = builder.add_field(FieldType::Text).unwrap();
        builder.submit();
        assert_eq!(builder.errors().get(id), Some(ValidationError::Required));

        builder.remove_field(id);
        assert!(builder.errors().is_valid());
    }

    #[test]
    fn test_errors_persist_until_next_validation() {
        let mut builder = FormBuilder::new(MemoryStore::new());
        let id = builder.add_field(FieldType::Textarea).unwrap();
        builder.submit();
        builder.update_value(id, "filled".into()).unwrap();
        assert_eq!(builder.errors().len(), 1);

        assert_eq!(builder.submit(), Notice::Submitted);
        assert!(builder.errors().is_valid());
    }

    #[test]
    fn test_save_failure_is_error() {
        let mut builder = FormBuilder::new(ReadOnlyStore);
        builder.add_field(FieldType::Text).unwrap();
        assert_eq!(
            builder.save_config(),
            Err(FormError::Store("quota exceeded".into()))
        );
    }

    #[test]
    fn test_update_dispatch_reports_programming_errors() {
        let mut builder = FormBuilder::new(MemoryStore::new());
        let err = builder
            .update(Intent::OptionToggle(FieldId::new(12), 0))
            .unwrap_err();
        assert_eq!(err, FormError::FieldNotFound(FieldId::new(12)));
    }

    #[test]
    fn test_update_returns_no_notice_for_edits() {
        let mut builder = FormBuilder::new(MemoryStore::new());
        assert_eq!(builder.update(Intent::AddField(FieldType::Radio)).unwrap(), None);
        let id = builder.fields()[0].id();
        assert_eq!(
            builder
                .update(Intent::ValueChange(id, "I Agree".into()))
                .unwrap(),
            None
        );
        assert_eq!(builder.update(Intent::Submit).unwrap(), Some(Notice::Submitted));
    }
}
