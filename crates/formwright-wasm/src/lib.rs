//! # formwright-wasm
//!
//! Browser bindings for the formwright form builder, compiled to WebAssembly.
//!
//! The page owns the widgets; this crate owns the form. Every user action is
//! forwarded to a [`FormApp`], and the page redraws from `view()`.
//!
//! ## Quick Start (JavaScript)
//!
//! ```javascript
//! import init, { FormApp, fieldTypes, initLogging } from 'formwright-wasm';
//!
//! async function main() {
//!     await init();
//!     initLogging("info");
//!
//!     const app = new FormApp();
//!     const id = app.addField("dropdown");
//!     app.addOption(id);
//!     app.renameOption(id, 2, "Option 3");
//!     app.setValue(id, "Option 3");
//!
//!     alert(app.submit());      // "Submitted Successfully!"
//!     alert(app.saveConfig());  // "Configuration saved successfully!"
//!
//!     render(app.view());
//! }
//!
//! main();
//! ```
//!
//! ## Available APIs
//!
//! - `FormApp` - a form-building session persisted to `localStorage`
//! - `fieldTypes()` - entries for the "Select Field Type" selector
//! - `initLogging(level)` - route logs to the browser console
//! - `version()`, `isReady()` - module metadata

#![forbid(unsafe_code)]

// Use wee_alloc for smaller binaries (optional)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

pub mod logging;
pub mod storage;

use formwright::{CheckboxOption, FieldId, FieldInput, FieldType, FormBuilder, Settings};
use wasm_bindgen::prelude::*;

pub use storage::LocalStorageStore;

/// Largest field id, as a JavaScript number. Equals `Number.MAX_SAFE_INTEGER`.
#[allow(clippy::cast_precision_loss)]
const MAX_ID: f64 = FieldId::MAX.get() as f64;

/// Initialize the module.
///
/// Sets up the panic hook for better error messages in the browser console.
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Module version information.
#[must_use]
#[wasm_bindgen(js_name = "version")]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Check if the module is properly initialized.
#[must_use]
#[wasm_bindgen(js_name = "isReady")]
#[allow(clippy::missing_const_for_fn)] // wasm_bindgen doesn't support const fn
pub fn is_ready() -> bool {
    true
}

/// Route `tracing` output to the browser console.
///
/// `level` is one of `trace`, `debug`, `info`, `warn`, `error` and defaults
/// to `info`. Fails if called twice.
#[wasm_bindgen(js_name = "initLogging")]
pub fn init_logging(level: Option<String>) -> Result<(), JsError> {
    let level = logging::parse_level(level.as_deref())
        .ok_or_else(|| JsError::new(&format!("unknown log level: {level:?}")))?;
    logging::install(level).map_err(|e| JsError::new(&e))
}

/// The field type selector entries, as `[{label, value}]`.
#[wasm_bindgen(js_name = "fieldTypes")]
pub fn field_types() -> Result<JsValue, JsError> {
    to_js(formwright::field_types())
}

/// A form-building session whose configuration lives in `localStorage`.
#[wasm_bindgen]
pub struct FormApp {
    builder: FormBuilder<LocalStorageStore>,
}

#[wasm_bindgen]
impl FormApp {
    /// Create a session. `settings` is an optional JSON object such as
    /// `{"storage_key": "my-form", "pretty": false}`.
    #[wasm_bindgen(constructor)]
    pub fn new(settings: Option<String>) -> Result<FormApp, JsError> {
        let settings = match settings {
            Some(json) => Settings::from_json(&json)?,
            None => Settings::default(),
        };
        let store = LocalStorageStore::open()?;
        Ok(Self {
            builder: FormBuilder::with_settings(store, settings),
        })
    }

    /// Number of fields in the form.
    #[wasm_bindgen(getter, js_name = "fieldCount")]
    pub fn field_count(&self) -> usize {
        self.builder.fields().len()
    }

    /// Append a field of the given type tag and return its id.
    #[wasm_bindgen(js_name = "addField")]
    pub fn add_field(&mut self, tag: &str) -> Result<f64, JsError> {
        let field_type: FieldType = tag.parse()?;
        Ok(id_to_js(self.builder.add_field(field_type)?))
    }

    /// Remove a field. Returns false if it did not exist.
    #[wasm_bindgen(js_name = "removeField")]
    pub fn remove_field(&mut self, id: f64) -> Result<bool, JsError> {
        Ok(self.builder.remove_field(id_from_js(id)?).is_some())
    }

    /// Set the value of a text, textarea, dropdown or radio field.
    #[wasm_bindgen(js_name = "setValue")]
    pub fn set_value(&mut self, id: f64, value: String) -> Result<(), JsError> {
        self.builder
            .update_value(id_from_js(id)?, FieldInput::Value(value))?;
        Ok(())
    }

    /// Replace the options of a checkbox field from a JSON array of
    /// `{label, checked}` objects.
    #[wasm_bindgen(js_name = "setCheckboxes")]
    pub fn set_checkboxes(&mut self, id: f64, options: &str) -> Result<(), JsError> {
        let options: Vec<CheckboxOption> = serde_json::from_str(options)?;
        self.builder
            .update_value(id_from_js(id)?, FieldInput::Checkboxes(options))?;
        Ok(())
    }

    /// Set the label of a field.
    #[wasm_bindgen(js_name = "setLabel")]
    pub fn set_label(&mut self, id: f64, label: String) -> Result<(), JsError> {
        self.builder.set_label(id_from_js(id)?, label)?;
        Ok(())
    }

    /// Flip a checkbox option. Returns the new checked state.
    #[wasm_bindgen(js_name = "toggleOption")]
    pub fn toggle_option(&mut self, id: f64, index: usize) -> Result<bool, JsError> {
        Ok(self.builder.toggle_option(id_from_js(id)?, index)?)
    }

    /// Rename a dropdown option.
    #[wasm_bindgen(js_name = "renameOption")]
    pub fn rename_option(&mut self, id: f64, index: usize, text: String) -> Result<(), JsError> {
        self.builder.rename_option(id_from_js(id)?, index, text)?;
        Ok(())
    }

    /// Append an empty option to a dropdown. Returns its index.
    #[wasm_bindgen(js_name = "addOption")]
    pub fn add_option(&mut self, id: f64) -> Result<usize, JsError> {
        Ok(self.builder.add_option(id_from_js(id)?)?)
    }

    /// Validate the form. Returns the message to show the user.
    pub fn submit(&mut self) -> String {
        self.builder.submit().to_string()
    }

    /// True when the last validation pass found no errors.
    #[wasm_bindgen(getter, js_name = "isValid")]
    pub fn is_valid(&self) -> bool {
        self.builder.errors().is_valid()
    }

    /// Save the configuration. Returns the message to show the user.
    #[wasm_bindgen(js_name = "saveConfig")]
    pub fn save_config(&mut self) -> Result<String, JsError> {
        Ok(self.builder.save_config()?.to_string())
    }

    /// Load the saved configuration. Returns the message to show the user.
    #[wasm_bindgen(js_name = "loadConfig")]
    pub fn load_config(&mut self) -> Result<String, JsError> {
        Ok(self.builder.load_config()?.to_string())
    }

    /// The form view: `{fields, field_types, show_submit}`.
    pub fn view(&self) -> Result<JsValue, JsError> {
        to_js(&self.builder.view())
    }

    /// Validation messages keyed by field id.
    pub fn errors(&self) -> Result<JsValue, JsError> {
        to_js(&self.builder.errors().messages())
    }
}

fn to_js<T: serde::Serialize + ?Sized>(value: &T) -> Result<JsValue, JsError> {
    let json = serde_json::to_string(value)?;
    js_sys::JSON::parse(&json).map_err(|_| JsError::new("view is not valid JSON"))
}

/// Exact for every id a session holds, since ids never exceed [`FieldId::MAX`].
#[allow(clippy::cast_precision_loss)]
fn id_to_js(id: FieldId) -> f64 {
    id.get() as f64
}

/// Converts a JavaScript number to a field id when it is a safe integer.
fn parse_id(raw: f64) -> Option<FieldId> {
    (raw.is_finite() && raw >= 0.0 && raw.fract() == 0.0 && raw <= MAX_ID)
        .then(|| FieldId::new(raw as u64))
}

fn id_from_js(raw: f64) -> Result<FieldId, JsError> {
    parse_id(raw).ok_or_else(|| JsError::new(&format!("invalid field id: {raw}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        let v = version();
        assert!(!v.is_empty());
    }

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id(7.0), Some(FieldId::new(7)));
        assert_eq!(parse_id(1_712_000_000_001.0), Some(FieldId::new(1_712_000_000_001)));
        assert_eq!(parse_id(-1.0), None);
        assert_eq!(parse_id(1.5), None);
        assert_eq!(parse_id(f64::NAN), None);
        assert_eq!(parse_id(f64::INFINITY), None);
        assert_eq!(parse_id(MAX_ID), Some(FieldId::MAX));
        assert_eq!(parse_id(MAX_ID + 2.0), None);
    }

    #[test]
    fn test_id_to_js() {
        assert_eq!(id_to_js(FieldId::new(42)), 42.0);
        assert_eq!(parse_id(id_to_js(FieldId::MAX)), Some(FieldId::MAX));
    }
}
