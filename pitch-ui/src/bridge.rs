//! Browser glue: local storage as a project slot, file inputs as data URLs,
//! and hash navigation.

use crate::route::Route;
use base64::Engine;
use js_sys::Uint8Array;
use project_store::{SlotError, StorageSlot};
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;

fn js_err(context: &str, e: JsValue) -> String {
    format!("{context}: {e:?}")
}

/// `window.localStorage[key]`, scoped to the page origin.
pub struct LocalStorageSlot {
    storage: web_sys::Storage,
    key: String,
}

impl LocalStorageSlot {
    pub fn open(key: &str) -> Result<Self, SlotError> {
        let window =
            web_sys::window().ok_or_else(|| SlotError::Backend("window not available".into()))?;
        let storage = window
            .local_storage()
            .map_err(|e| SlotError::Backend(js_err("localStorage blocked", e)))?
            .ok_or_else(|| SlotError::Backend("localStorage unavailable".into()))?;
        Ok(Self {
            storage,
            key: key.to_string(),
        })
    }
}

impl StorageSlot for LocalStorageSlot {
    fn read(&self) -> Result<Option<Vec<u8>>, SlotError> {
        self.storage
            .get_item(&self.key)
            .map(|v| v.map(String::into_bytes))
            .map_err(|e| SlotError::Backend(js_err("localStorage read", e)))
    }

    fn write(&mut self, bytes: &[u8]) -> Result<(), SlotError> {
        let value = std::str::from_utf8(bytes).map_err(|e| SlotError::Backend(e.to_string()))?;
        self.storage
            .set_item(&self.key, value)
            .map_err(|e| SlotError::Backend(js_err("localStorage write", e)))
    }
}

/// Reads a picked file into a self-contained `data:` URL.
pub async fn read_file_data_url(file: &web_sys::File) -> Result<String, String> {
    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| js_err("file read failed", e))?;
    let bytes = Uint8Array::new(&buffer).to_vec();

    let mime = match file.type_() {
        t if t.is_empty() => "application/octet-stream".to_string(),
        t => t,
    };
    Ok(format!(
        "data:{mime};base64,{}",
        base64::engine::general_purpose::STANDARD.encode(bytes)
    ))
}

pub fn current_route() -> Route {
    leptos::window()
        .location()
        .hash()
        .map(|h| Route::parse(&h))
        .unwrap_or(Route::Home)
}

pub fn navigate(route: &Route) {
    if let Err(e) = leptos::window().location().set_hash(&route.hash()) {
        tracing::warn!("navigation failed: {e:?}");
    }
}
