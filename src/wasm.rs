use crate::codegen::CodegenOptions;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub fn generate_script(statements_json: &str) -> Result<String, JsValue> {
    crate::compile_source_to_script(statements_json, CodegenOptions::default())
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Returns the validation report as JSON: `{"isValid": bool, "errors": [{line, message, code}]}`.
#[wasm_bindgen]
pub fn validate_script(text: &str) -> Result<String, JsValue> {
    let report = crate::validate::validate(text).map_err(|e| JsValue::from_str(&e.to_string()))?;
    serde_json::to_string(&report).map_err(|e| JsValue::from_str(&e.to_string()))
}
