//! Thin localStorage adapter. Storage failures (unavailable storage, quota)
//! are logged and swallowed; the in-memory state stays authoritative.

use web_sys::window;

fn local_storage() -> Option<web_sys::Storage> {
    window().and_then(|w| w.local_storage().ok().flatten())
}

pub fn read(key: &str) -> Option<String> {
    local_storage().and_then(|storage| storage.get_item(key).ok().flatten())
}

pub fn write(key: &str, value: &str) {
    let Some(storage) = local_storage() else {
        log::warn!("local storage unavailable; {key} was not persisted");
        return;
    };
    if storage.set_item(key, value).is_err() {
        log::warn!("failed to persist {key}; continuing with in-memory state");
    }
}
