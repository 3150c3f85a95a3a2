//! Browser-facing helpers for the generator component.
//!
//! - **Request**: posting the form to the generation endpoint with `gloo-net`
//!   and turning the answer into an outcome via `form::resolve_reply`.
//! - **Download**: handing a `CsvExport` to the browser through a hidden
//!   anchor pointing at a `Blob` object URL.
//! - **User Feedback**: short-lived toast notifications.

use common::model::generation::GenerateReply;
use common::requests::GenerateRequest;
use gloo_net::http::Request;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

use super::error::GenerationError;
use super::form::{resolve_reply, CsvExport, GenerationResult};

/// Sends one generation request and waits for the full answer.
///
/// There is no timeout: a server that never answers keeps the future pending.
pub async fn request_generation(
    endpoint: &str,
    request: &GenerateRequest,
) -> Result<GenerationResult, GenerationError> {
    let response = Request::post(endpoint)
        .json(request)
        .map_err(|err| GenerationError::Transport(err.to_string()))?
        .send()
        .await
        .map_err(|err| GenerationError::Transport(err.to_string()))?;

    let status = response.status();
    let ok = response.ok();
    let body = response
        .json::<GenerateReply>()
        .await
        .map_err(|err| err.to_string());

    resolve_reply(request.row, status, ok, body)
}

/// Offers `export` to the user as a file download.
///
/// The object URL is revoked a second later, once the browser has picked it up.
pub fn download_csv(export: &CsvExport) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("no document body"))?;

    let parts = js_sys::Array::of1(&JsValue::from_str(&export.contents));
    let options = BlobPropertyBag::new();
    options.set_type(CsvExport::MIME_TYPE);
    let blob = Blob::new_with_str_sequence_and_options(&parts, &options)?;
    let url = Url::create_object_url_with_blob(&blob)?;

    let link: HtmlAnchorElement = document.create_element("a")?.dyn_into()?;
    link.set_href(&url);
    link.set_download(&export.file_name);
    link.style().set_property("visibility", "hidden")?;

    body.append_child(&link)?;
    link.click();
    body.remove_child(&link)?;

    wasm_bindgen_futures::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(1000).await;
        Url::revoke_object_url(&url).ok();
    });

    Ok(())
}

const TOAST_MILLIS: u32 = 3000;

/// Shows `message` in a `.toast` banner for three seconds.
pub fn show_toast(message: &str) {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return;
    };
    let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) else {
        return;
    };
    toast.set_class_name("toast");
    toast.set_text_content(Some(message));
    if body.append_child(&toast).is_ok() {
        wasm_bindgen_futures::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(TOAST_MILLIS).await;
            toast.remove();
        });
    }
}
