//! Save downloaded bytes through the browser

#[cfg(feature = "hydrate")]
pub fn save_file(bytes: &[u8], file_name: &str) -> Result<(), String> {
    use wasm_bindgen::JsCast;

    let blob_parts = js_sys::Array::new();
    blob_parts.push(&js_sys::Uint8Array::from(bytes));

    let options = web_sys::BlobPropertyBag::new();
    options.set_type("application/octet-stream");

    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&blob_parts, &options)
        .map_err(|e| format!("{:?}", e))?;
    let url = web_sys::Url::create_object_url_with_blob(&blob).map_err(|e| format!("{:?}", e))?;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or("No document")?;
    let link = document
        .create_element("a")
        .map_err(|e| format!("{:?}", e))?;
    let _ = link.set_attribute("href", &url);
    let _ = link.set_attribute("download", file_name);
    if let Some(el) = link.dyn_ref::<web_sys::HtmlElement>() {
        el.click();
    }

    let _ = web_sys::Url::revoke_object_url(&url);
    Ok(())
}

#[cfg(not(feature = "hydrate"))]
pub fn save_file(_bytes: &[u8], _file_name: &str) -> Result<(), String> {
    Err("Downloads are only available in the browser".to_string())
}
