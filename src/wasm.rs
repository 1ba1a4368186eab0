//! WebAssembly bindings for job submission front ends.

use wasm_bindgen::prelude::*;

use crate::ordering::OrderingKeyList;
use crate::priority;

/// Formats an expanded priority, e.g. `2100` → `"Normal+100"`.
#[wasm_bindgen(js_name = formatPriority)]
pub fn format_priority(value: i32) -> Result<String, JsValue> {
    priority::format(value).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Parses expanded-priority text; `undefined` when the text is rejected.
#[wasm_bindgen(js_name = parsePriority)]
pub fn parse_priority(text: &str) -> Option<i32> {
    priority::try_parse(text)
}

/// Parses ordering-key text into its `OrderBy` integer.
#[wasm_bindgen(js_name = parseOrderBy)]
pub fn parse_order_by(text: &str) -> Option<i32> {
    OrderingKeyList::try_parse(text).map(|list| list.to_i32())
}

/// Formats an `OrderBy` integer as ordering-key text.
#[wasm_bindgen(js_name = formatOrderBy)]
pub fn format_order_by(value: i32) -> Result<String, JsValue> {
    OrderingKeyList::from_i32(value)
        .map(|list| list.to_string())
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

#[derive(serde::Serialize)]
struct KeyView {
    attribute: crate::ordering::OrderingAttribute,
    direction: crate::ordering::SortDirection,
}

/// Decodes an `OrderBy` integer to an array of `{ attribute, direction }`.
#[wasm_bindgen(js_name = orderByKeys)]
pub fn order_by_keys(value: i32) -> Result<JsValue, JsValue> {
    let list = OrderingKeyList::from_i32(value).map_err(|e| JsValue::from_str(&e.to_string()))?;
    let keys: Vec<KeyView> = list
        .iter()
        .map(|key| KeyView {
            attribute: key.attribute(),
            direction: key.direction(),
        })
        .collect();
    serde_wasm_bindgen::to_value(&keys).map_err(JsValue::from)
}
