//! Browser file-save and clipboard helpers.
//!
//! Downloads go through a transient anchor element so the browser's own
//! save flow handles the file; object URLs created for blob payloads are
//! released immediately after the click.

/// Trigger a browser save of `url` under `filename`.
pub fn save_url(url: &str, filename: &str) -> Result<(), String> {
    #[cfg(feature = "csr")]
    {
        click_anchor(url, filename)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (url, filename);
        Err("not available outside the browser".to_owned())
    }
}

/// Wrap `bytes` in a blob, trigger a save, then release the object URL.
pub fn save_bytes(bytes: &[u8], filename: &str) -> Result<(), String> {
    #[cfg(feature = "csr")]
    {
        let parts = js_sys::Array::new();
        parts.push(&js_sys::Uint8Array::from(bytes));
        let blob =
            web_sys::Blob::new_with_u8_array_sequence(&parts).map_err(|_| "blob creation failed".to_owned())?;
        let url = web_sys::Url::create_object_url_with_blob(&blob)
            .map_err(|_| "object url creation failed".to_owned())?;
        let result = click_anchor(&url, filename);
        let _ = web_sys::Url::revoke_object_url(&url);
        result
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (bytes, filename);
        Err("not available outside the browser".to_owned())
    }
}

/// Write `text` to the system clipboard.
pub fn copy_text(text: &str) {
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.navigator().clipboard().write_text(text);
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = text;
    }
}

#[cfg(feature = "csr")]
fn click_anchor(url: &str, filename: &str) -> Result<(), String> {
    use wasm_bindgen::JsCast;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| "no document".to_owned())?;
    let anchor: web_sys::HtmlAnchorElement = document
        .create_element("a")
        .map_err(|_| "anchor creation failed".to_owned())?
        .dyn_into()
        .map_err(|_| "anchor creation failed".to_owned())?;
    anchor.set_href(url);
    anchor.set_download(filename);
    let body = document.body().ok_or_else(|| "no body".to_owned())?;
    let _ = body.append_child(&anchor);
    anchor.click();
    anchor.remove();
    Ok(())
}
