//! CV download: fetch the static PDF and trigger a client-side save.
//!
//! ERROR HANDLING
//! ==============
//! This is the only fallible user action on the site. Failures are logged
//! and otherwise swallowed: no retry, no timeout, and no user-visible error
//! surface.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "download_test.rs"]
mod download_test;

/// Path of the CV served as a static asset next to the app bundle.
pub const CV_PATH: &str = "/HassanAmagroud.pdf";

/// Filename suggested to the browser's save dialog.
pub const CV_FILENAME: &str = "HassanAmagroud.pdf";

#[cfg(any(test, feature = "hydrate"))]
fn download_failed_message(status: u16) -> String {
    format!("cv download failed: {status}")
}

/// Fetch the CV and hand it to the browser as a file save.
///
/// On the server this is a no-op; the action only exists after hydration.
pub async fn download_cv() {
    #[cfg(feature = "hydrate")]
    {
        if let Err(err) = fetch_and_save(CV_PATH, CV_FILENAME).await {
            log::error!("{err}");
        }
    }
}

#[cfg(feature = "hydrate")]
async fn fetch_and_save(path: &str, filename: &str) -> Result<(), String> {
    let resp = gloo_net::http::Request::get(path)
        .send()
        .await
        .map_err(|err| format!("cv request failed: {err}"))?;
    if !resp.ok() {
        return Err(download_failed_message(resp.status()));
    }
    let bytes = resp
        .binary()
        .await
        .map_err(|err| format!("cv body read failed: {err}"))?;

    let array = js_sys::Uint8Array::from(bytes.as_slice());
    let parts = js_sys::Array::of1(&array.into());
    let options = web_sys::BlobPropertyBag::new();
    options.set_type("application/pdf");
    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options)
        .map_err(|_| "cv blob construction failed".to_owned())?;
    let url =
        web_sys::Url::create_object_url_with_blob(&blob).map_err(|_| "cv object url failed".to_owned())?;

    let save_result = save_via_anchor(&url, filename);
    // Revoke regardless: the blob URL must not outlive the click.
    if web_sys::Url::revoke_object_url(&url).is_err() {
        log::warn!("cv object url was not revoked");
    }
    save_result
}

/// Click a hidden, transient anchor pointing at the blob URL.
#[cfg(feature = "hydrate")]
fn save_via_anchor(url: &str, filename: &str) -> Result<(), String> {
    use wasm_bindgen::JsCast;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| "no document".to_owned())?;
    let body = document.body().ok_or_else(|| "no body".to_owned())?;

    let anchor: web_sys::HtmlAnchorElement = document
        .create_element("a")
        .map_err(|_| "anchor creation failed".to_owned())?
        .dyn_into()
        .map_err(|_| "anchor cast failed".to_owned())?;
    anchor.set_href(url);
    anchor.set_download(filename);
    if anchor.style().set_property("display", "none").is_err() {
        log::warn!("cv anchor could not be hidden");
    }

    body.append_child(&anchor)
        .map_err(|_| "anchor attach failed".to_owned())?;
    anchor.click();
    anchor.remove();
    Ok(())
}
