//! Save generated code as a file download.
//!
//! Builds a `Blob` from the text, points a temporary anchor at an object URL
//! and clicks it. Requires a browser environment; SSR returns an error.

#[cfg(test)]
#[path = "download_test.rs"]
mod download_test;

/// MIME type of exported component files.
pub const TEXT_MIME: &str = "text/plain;charset=utf-8";

/// How long the object URL outlives the click that starts the download.
pub const REVOKE_DELAY_MS: u32 = 40_000;

/// Offer `contents` to the user as a download named `filename`.
///
/// # Errors
///
/// Returns a description of the failing browser call.
pub fn save_text(filename: &str, contents: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast as _;

        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| "document unavailable".to_owned())?;

        let parts = js_sys::Array::of1(&wasm_bindgen::JsValue::from_str(contents));
        let options = web_sys::BlobPropertyBag::new();
        options.set_type(TEXT_MIME);
        let blob = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options).map_err(js_error)?;
        let url = web_sys::Url::create_object_url_with_blob(&blob).map_err(js_error)?;

        let anchor = document
            .create_element("a")
            .map_err(js_error)?
            .dyn_into::<web_sys::HtmlAnchorElement>()
            .map_err(|_| "anchor element unavailable".to_owned())?;
        anchor.set_href(&url);
        anchor.set_download(filename);
        anchor.click();

        // Revoking right after the click can cancel the download.
        gloo_timers::callback::Timeout::new(REVOKE_DELAY_MS, move || {
            if let Err(err) = web_sys::Url::revoke_object_url(&url) {
                log::warn!("revoke {url}: {}", js_error(err));
            }
        })
        .forget();
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = contents;
        Err(format!("cannot save {filename} outside the browser"))
    }
}

#[cfg(feature = "hydrate")]
fn js_error(err: wasm_bindgen::JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}
