pub(crate) mod client;

use api_contract::posted_age;
use wasm_bindgen::JsValue;

/// Label for a posting timestamp: relative age for fresh postings, a locale
/// date once it is thirty days old, the raw string when it does not parse.
pub(crate) fn format_posted(posted: &str) -> String {
    let date = js_sys::Date::new(&JsValue::from_str(posted));
    let millis = date.get_time();
    if millis.is_nan() {
        return posted.to_string();
    }
    let diff_seconds = ((js_sys::Date::now() - millis) / 1000.0) as i64;
    posted_age(diff_seconds).unwrap_or_else(|| {
        String::from(date.to_locale_date_string("en-US", &JsValue::UNDEFINED))
    })
}
