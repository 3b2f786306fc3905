//! Browser-based WASM tests.
//!
//! Run with: wasm-pack test --headless --chrome

#![cfg(target_arch = "wasm32")]

use formwright_wasm::FormApp;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn fresh_app(key: &str) -> FormApp {
    let settings = format!(r#"{{"storage_key":"{key}"}}"#);
    FormApp::new(Some(settings)).expect("localStorage should be available")
}

fn view_json(app: &FormApp) -> String {
    let view = app.view().expect("view should serialize");
    js_sys::JSON::stringify(&view)
        .expect("view should stringify")
        .as_string()
        .expect("stringify returns a string")
}

#[wasm_bindgen_test]
fn test_module_ready() {
    assert!(formwright_wasm::is_ready());
}

#[wasm_bindgen_test]
fn test_version() {
    let version = formwright_wasm::version();
    assert!(!version.is_empty());
    // Version should be semver-like
    assert!(version.contains('.'));
}

#[wasm_bindgen_test]
fn test_field_types_is_array() {
    let types = formwright_wasm::field_types().unwrap();
    assert!(js_sys::Array::is_array(&types));
    assert_eq!(js_sys::Array::from(&types).length(), 5);
}

#[wasm_bindgen_test]
fn test_add_field_returns_increasing_ids() {
    let mut app = fresh_app("web-ids");
    let a = app.add_field("text").unwrap();
    let b = app.add_field("radio").unwrap();
    assert!(b > a);
    assert_eq!(app.field_count(), 2);
}

#[wasm_bindgen_test]
fn test_unknown_type_throws() {
    let mut app = fresh_app("web-unknown");
    assert!(app.add_field("slider").is_err());
    assert_eq!(app.field_count(), 0);
}

#[wasm_bindgen_test]
fn test_submit_messages() {
    let mut app = fresh_app("web-submit");
    let id = app.add_field("checkbox").unwrap();

    assert_eq!(app.submit(), "1 field needs attention");
    assert!(!app.is_valid());

    assert!(app.toggle_option(id, 0).unwrap());
    assert_eq!(app.submit(), "Submitted Successfully!");
    assert!(app.is_valid());
}

#[wasm_bindgen_test]
fn test_dropdown_option_editing() {
    let mut app = fresh_app("web-dropdown");
    let id = app.add_field("dropdown").unwrap();
    assert_eq!(app.add_option(id).unwrap(), 2);
    app.rename_option(id, 2, "Option 3".into()).unwrap();
    app.set_value(id, "Option 3".into()).unwrap();

    let json = view_json(&app);
    assert!(json.contains(r#""options":["Option 1","Option 2","Option 3"]"#));
    assert!(json.contains(r#""value":"Option 3""#));
}

#[wasm_bindgen_test]
fn test_set_checkboxes_from_json() {
    let mut app = fresh_app("web-checkboxes");
    let id = app.add_field("checkbox").unwrap();
    app.set_checkboxes(id, r#"[{"label":"Yes","checked":true}]"#)
        .unwrap();
    assert_eq!(app.submit(), "Submitted Successfully!");
}

#[wasm_bindgen_test]
fn test_invalid_ids_throw() {
    let mut app = fresh_app("web-bad-id");
    assert!(app.remove_field(-1.0).is_err());
    assert!(app.toggle_option(1.5, 0).is_err());
    // A well-formed id that does not exist is a no-op for remove.
    assert!(!app.remove_field(404.0).unwrap());
}

#[wasm_bindgen_test]
fn test_errors_object() {
    let mut app = fresh_app("web-errors");
    let id = app.add_field("text").unwrap();
    app.submit();

    let errors = app.errors().unwrap();
    let message = js_sys::Reflect::get(&errors, &JsValue::from_str(&id.to_string())).unwrap();
    assert_eq!(message.as_string().as_deref(), Some("Field is required"));
}

#[wasm_bindgen_test]
fn test_bad_settings_throw() {
    assert!(FormApp::new(Some("not json".into())).is_err());
}
