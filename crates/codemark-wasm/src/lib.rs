//! WASM bindings for codemark.
//!
//! Exposes `highlight()` to JavaScript via wasm-bindgen.
//! Returns a JS object `{ html, lines, warnings }` or throws on bad settings.

use codemark_config::Config;
use codemark_lexer::Grammar;
use codemark_render::{HighlightedDocument, Highlighter};
use wasm_bindgen::prelude::*;

/// Highlight JavaScript source.
///
/// `config` is an optional settings object, in the same shape the CLI reads
/// from JSON. Returns `{ html: string, lines: string[], warnings: string[] }`.
#[wasm_bindgen]
pub fn highlight(source: &str, config: JsValue, line_numbers: bool) -> Result<JsValue, JsError> {
    let config = if config.is_undefined() || config.is_null() {
        Config::default()
    } else {
        let value: serde_json::Value =
            serde_wasm_bindgen::from_value(config).map_err(|e| JsError::new(&e.to_string()))?;
        Config::new(value)
    };

    let doc = native_highlight(source, &config);

    let lines = js_sys::Array::new();
    for line in &doc.lines {
        lines.push(&JsValue::from_str(line));
    }
    let warnings = js_sys::Array::new();
    for warning in &doc.warnings {
        warnings.push(&JsValue::from_str(&warning.to_string()));
    }

    // Plain JS object { html, lines, warnings }
    let js_obj = js_sys::Object::new();
    js_sys::Reflect::set(&js_obj, &"html".into(), &doc.to_html(line_numbers).into())
        .map_err(|_| JsError::new("Failed to set html property"))?;
    js_sys::Reflect::set(&js_obj, &"lines".into(), &lines)
        .map_err(|_| JsError::new("Failed to set lines property"))?;
    js_sys::Reflect::set(&js_obj, &"warnings".into(), &warnings)
        .map_err(|_| JsError::new("Failed to set warnings property"))?;

    Ok(js_obj.into())
}

/// Get the library version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// The pure part of [`highlight`], usable without a JS host.
fn native_highlight(source: &str, config: &Config) -> HighlightedDocument {
    let grammar = Grammar::javascript();
    Highlighter::new(&grammar, config.pretty()).highlight_document(source)
}
