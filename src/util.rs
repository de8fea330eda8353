// Small helpers shared by the components.

use crate::geometry::{Point, distance};

/// Distance label for the measure tool: one decimal place, metres.
pub fn format_distance(a: Point, b: Point) -> String {
    format!("{:.1}m", distance(a, b))
}

pub fn clog(msg: &str) {
    web_sys::console::log_1(&wasm_bindgen::JsValue::from_str(msg));
}
