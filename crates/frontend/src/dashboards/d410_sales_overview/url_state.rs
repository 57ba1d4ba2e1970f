//! Mirrors the dashboard query into the browser URL so views can be shared
//! and survive a reload.

use leptos::prelude::*;
use web_sys::window;

use super::query::{list_query_string, parse_query_string, SalesQuery};

/// Query restored from `location.search`, or the default one
pub fn initial_query() -> SalesQuery {
    let search = window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default();
    parse_query_string(&search)
}

/// Query string for the address bar. Once the server has answered, the page
/// it echoed replaces the requested one, so an out-of-range deep link is
/// rewritten to the page actually shown.
pub fn shareable_query_string(query: &SalesQuery, served_page: Option<u32>) -> String {
    match served_page {
        Some(page) if page > 0 && page != query.pagination.page => {
            let mut shown = query.clone();
            shown.pagination.page = page;
            list_query_string(&shown)
        }
        _ => list_query_string(query),
    }
}

pub fn sync_query_to_url(query: Memo<SalesQuery>, served_page: Signal<Option<u32>>) {
    Effect::new(move |_| {
        let served_page = served_page.get();
        let new_url = format!("?{}", query.with(|q| shareable_query_string(q, served_page)));

        let current_search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();

        // Only update URL if it actually changed
        if current_search != new_url {
            if let Some(w) = window() {
                if let Ok(history) = w.history() {
                    if let Err(err) = history.replace_state_with_url(
                        &wasm_bindgen::JsValue::NULL,
                        "",
                        Some(&new_url),
                    ) {
                        log::warn!("Failed to update URL: {:?}", err);
                    }
                }
            }
        }
    });
}
