use crate::attrs::{config_from_pairs, RawOption, DATA_OPTION_KEYS, JS_OPTION_KEYS};
use cyl_core::CarouselConfig;
use wasm_bindgen::JsValue;
use web_sys as web;

fn raw_from_js(value: &JsValue) -> Option<RawOption> {
    if value.is_undefined() || value.is_null() {
        return None;
    }
    if let Some(b) = value.as_bool() {
        return Some(RawOption::Bool(b));
    }
    if let Some(n) = value.as_f64() {
        return Some(RawOption::Number(n));
    }
    value.as_string().map(RawOption::Text)
}

/// Options for one widget: `data-*` attributes on the container first, then
/// the JS options object on top.
pub fn config_for(container: &web::Element, options: &JsValue) -> CarouselConfig {
    let from_data = DATA_OPTION_KEYS.iter().filter_map(|key| {
        container
            .get_attribute(&format!("data-{key}"))
            .map(|v| (*key, RawOption::Text(v)))
    });
    let from_js = JS_OPTION_KEYS
        .iter()
        .filter(|_| options.is_object())
        .filter_map(|key| {
            let v = js_sys::Reflect::get(options, &JsValue::from_str(key)).ok()?;
            raw_from_js(&v).map(|raw| (*key, raw))
        });
    config_from_pairs(from_data.chain(from_js))
}
