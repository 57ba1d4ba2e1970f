//! Clipboard helper backed by the Web Clipboard API

use wasm_bindgen_futures::spawn_local;

/// Copy text to the system clipboard; failures are only logged
pub fn copy_to_clipboard(text: &str) {
    let text = text.to_owned();
    spawn_local(async move {
        let Some(window) = web_sys::window() else {
            return;
        };
        let clipboard = window.navigator().clipboard();
        if let Err(err) = wasm_bindgen_futures::JsFuture::from(clipboard.write_text(&text)).await {
            log::warn!("Clipboard write failed: {:?}", err);
        }
    });
}
