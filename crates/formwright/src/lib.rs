#![forbid(unsafe_code)]
// Allow pedantic lints for early-stage API ergonomics.
#![allow(clippy::nursery)]
#![allow(clippy::pedantic)]

//! # Formwright
//!
//! The core of a dynamic form builder.
//!
//! Formwright provides:
//! - A typed field model where each field type carries its own payload shape
//! - A static catalog of field types and the options they are seeded with
//! - Editing operations for values, labels and option lists
//! - A validator producing a per-field error map
//! - Save/load of the whole field list through an injected key-value store
//! - A session that ties it together and emits render descriptors
//!
//! ## Example
//!
//! ```rust
//! use formwright::{FieldInput, FieldType, FormBuilder, MemoryStore, Notice};
//!
//! let mut builder = FormBuilder::new(MemoryStore::new());
//!
//! let name = builder.add_field(FieldType::Text).unwrap();
//! let terms = builder.add_field(FieldType::Checkbox).unwrap();
//!
//! // Nothing filled in yet.
//! let notice = builder.submit();
//! assert!(matches!(notice, Notice::Invalid { errors: 2 }));
//!
//! builder.update_value(name, FieldInput::Value("Ada".into())).unwrap();
//! builder.toggle_option(terms, 0).unwrap();
//! assert_eq!(builder.submit(), Notice::Submitted);
//!
//! builder.save_config().unwrap();
//! ```

pub mod catalog;
pub mod editor;
pub mod error;
pub mod field;
pub mod persist;
pub mod render;
pub mod session;
pub mod settings;
pub mod validate;

pub use catalog::{FieldTypeEntry, default_kind, field_types};
pub use editor::IdGenerator;
pub use error::{FormError, Result};
pub use field::{CheckboxOption, Field, FieldId, FieldInput, FieldKind, FieldType};
pub use persist::{ConfigStore, DEFAULT_STORAGE_KEY, MemoryStore, load, save, save_pretty};
pub use render::{FieldDescriptor, FormView, OptionDescriptor};
pub use session::{FormBuilder, Intent, Notice};
pub use settings::Settings;
pub use validate::{ValidationError, ValidationErrors, validate};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::editor::IdGenerator;
    pub use crate::error::{FormError, Result};
    pub use crate::field::{CheckboxOption, Field, FieldId, FieldInput, FieldKind, FieldType};
    pub use crate::persist::{ConfigStore, MemoryStore};
    pub use crate::session::{FormBuilder, Intent, Notice};
    pub use crate::settings::Settings;
    pub use crate::validate::{ValidationError, ValidationErrors};
}
