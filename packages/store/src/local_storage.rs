//! # localStorage key-value store: browser-side persistence
//!
//! [`LocalStorageStore`] is the [`KeyValueStore`] implementation used on the
//! **web platform**. Values are written to `window.localStorage` through
//! `web-sys`, which is the same slot the bookmark list has always lived in, so
//! tips saved by earlier builds of the page are picked up unchanged.
//!
//! ## Error handling
//!
//! All trait methods silently swallow errors (returning `None` for reads,
//! doing nothing for writes). Storage can be disabled by the browser (private
//! mode, quota exceeded); that degrades to "nothing saved" rather than
//! breaking the page.

use crate::kv::KeyValueStore;

/// `window.localStorage`-backed KeyValueStore for the web platform.
#[derive(Clone, Debug, Default)]
pub struct LocalStorageStore;

impl LocalStorageStore {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

impl KeyValueStore for LocalStorageStore {
    async fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok()?
    }

    async fn set(&self, key: &str, value: String) {
        let Some(storage) = Self::storage() else {
            return;
        };
        if storage.set_item(key, &value).is_err() {
            tracing::warn!("localStorage write rejected for key {key}");
        }
    }
}
