//! Save generated text as a file through a temporary object URL.

use anyhow::{anyhow, Result};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

fn js_error(e: JsValue) -> anyhow::Error {
    anyhow!("{:?}", e)
}

/// Offer `contents` to the user as a download named `file_name`
pub fn download_text(file_name: &str, mime_type: &str, contents: &str) -> Result<()> {
    let window = web_sys::window().ok_or_else(|| anyhow!("No window available"))?;
    let document = window.document().ok_or_else(|| anyhow!("No document available"))?;

    let parts = js_sys::Array::of1(&JsValue::from_str(contents));
    let options = BlobPropertyBag::new();
    options.set_type(mime_type);
    let blob = Blob::new_with_str_sequence_and_options(&parts, &options).map_err(js_error)?;

    let url = Url::create_object_url_with_blob(&blob).map_err(js_error)?;
    let anchor: HtmlAnchorElement = document
        .create_element("a")
        .map_err(js_error)?
        .dyn_into()
        .map_err(|_| anyhow!("Created element is not an anchor"))?;
    anchor.set_href(&url);
    anchor.set_download(file_name);
    anchor.click();

    Url::revoke_object_url(&url).map_err(js_error)?;
    Ok(())
}
