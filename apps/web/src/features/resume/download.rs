//! Browser-side save of résumé bytes via a transient object URL.

use crate::app_lib::AppError;
use api_contract::ExportFormat;
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

/// Wraps the bytes in a Blob and synthesizes an anchor click so the browser
/// offers the file under `{file_name}.{ext}`. The object URL is revoked
/// right after the click; the browser keeps its own reference while the
/// save dialog is open.
pub fn save_bytes(bytes: &[u8], format: ExportFormat, file_name: &str) -> Result<(), AppError> {
    let window = web_sys::window()
        .ok_or_else(|| AppError::Network("No window available.".to_string()))?;
    let document = window
        .document()
        .ok_or_else(|| AppError::Network("No document available.".to_string()))?;

    let array = js_sys::Uint8Array::from(bytes);
    let parts = js_sys::Array::of1(&array);
    let options = BlobPropertyBag::new();
    options.set_type(format.mime_type());
    let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &options)
        .map_err(|_| AppError::Serialization("Failed to build document blob.".to_string()))?;
    let url = Url::create_object_url_with_blob(&blob)
        .map_err(|_| AppError::Serialization("Failed to create download link.".to_string()))?;

    let anchor: HtmlAnchorElement = document
        .create_element("a")
        .map_err(|_| AppError::Serialization("Failed to create download link.".to_string()))?
        .unchecked_into();
    anchor.set_href(&url);
    anchor.set_download(&format!("{file_name}.{}", format.extension()));
    anchor.click();

    let _ = Url::revoke_object_url(&url);
    Ok(())
}
