//! Saved-tips shelf constructor for all platforms.
//!
//! - **Web** (WASM + `web` feature): browser local storage via [`store::LocalStorageStore`],
//!   under the default key
//! - **Desktop** (native): one file per key under `<data_dir>/wellness/` via
//!   [`store::FileStore`]; the key comes from `[storage]` in a `wellness.toml`
//!   in that directory, if there is one

/// Create the platform-appropriate shelf.
pub fn make_shelf() -> store::TipShelf<impl store::KeyValueStore> {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        store::TipShelf::new(store::LocalStorageStore::new())
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        let base = dirs::data_dir()
            .unwrap_or_else(|| std::path::PathBuf::from("."))
            .join("wellness");
        let config = local_config(&base);
        store::TipShelf::with_key(store::FileStore::new(base), &config.storage.saved_tips_key)
    }
}

#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
fn local_config(base: &std::path::Path) -> store::WellnessConfig {
    let path = base.join(store::WellnessConfig::filename());
    let Ok(text) = std::fs::read_to_string(&path) else {
        return store::WellnessConfig::default();
    };
    store::WellnessConfig::from_toml(&text).unwrap_or_else(|e| {
        tracing::warn!("Ignoring invalid {}: {}", path.display(), e);
        store::WellnessConfig::default()
    })
}
