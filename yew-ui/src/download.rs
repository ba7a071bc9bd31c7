/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 *
 * Unless you explicitly state otherwise, any contribution intentionally
 * submitted for inclusion in the work by you, as defined in the Apache-2.0
 * license, shall be dual licensed as above, without any additional terms or
 * conditions.
 */

//! Browser-native file download for exported notes.

use anyhow::anyhow;
use gloo_utils::document;
use js_sys::Array;
use videocode_client::DownloadArtifact;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::HtmlAnchorElement;

/// Hands `artifact` to the browser's save dialog through a temporary object
/// URL and an off-screen anchor.
pub fn trigger_download(artifact: &DownloadArtifact) -> anyhow::Result<()> {
    let blob_parts = Array::new();
    blob_parts.push(&JsValue::from_str(&artifact.contents));

    let blob_options = web_sys::BlobPropertyBag::new();
    blob_options.set_type(artifact.mime_type);

    let blob = web_sys::Blob::new_with_str_sequence_and_options(&blob_parts, &blob_options)
        .map_err(|e| anyhow!("failed to create blob: {e:?}"))?;
    let url = web_sys::Url::create_object_url_with_blob(&blob)
        .map_err(|e| anyhow!("failed to create object URL: {e:?}"))?;

    let result = click_anchor(&url, &artifact.file_name);
    if let Err(e) = web_sys::Url::revoke_object_url(&url) {
        log::debug!("Could not revoke {url}: {e:?}");
    }
    result?;
    log::info!("Downloaded {}", artifact.file_name);
    Ok(())
}

fn click_anchor(url: &str, file_name: &str) -> anyhow::Result<()> {
    let document = document();
    let body = document.body().ok_or_else(|| anyhow!("document has no body"))?;
    let anchor = document
        .create_element("a")
        .map_err(|e| anyhow!("failed to create anchor: {e:?}"))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|_| anyhow!("created element is not an anchor"))?;
    anchor.set_href(url);
    anchor.set_download(file_name);
    body.append_child(&anchor)
        .map_err(|e| anyhow!("failed to attach anchor: {e:?}"))?;
    anchor.click();
    body.remove_child(&anchor)
        .map_err(|e| anyhow!("failed to detach anchor: {e:?}"))?;
    Ok(())
}
