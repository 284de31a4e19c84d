//! # Filesystem-backed key-value store
//!
//! [`FileStore`] is a [`KeyValueStore`] implementation that keeps each key in
//! its own file. It is used on desktop so that saved tips survive restarts.
//!
//! ## Layout
//!
//! ```text
//! <base_dir>/
//! └── savedTips          # file containing the serialised value
//! ```
//!
//! ## Platform data directories
//!
//! The desktop UI uses `dirs::data_dir()` to obtain a platform-appropriate base:
//!
//! | Platform | Path |
//! |----------|------|
//! | macOS | `~/Library/Application Support/wellness/` |
//! | Linux | `~/.local/share/wellness/` |
//! | Windows | `C:\Users\<user>\AppData\Roaming\wellness\` |

use std::path::PathBuf;

use crate::kv::KeyValueStore;

/// Filesystem-backed KeyValueStore for desktop persistence.
#[derive(Clone, Debug)]
pub struct FileStore {
    base: PathBuf,
}

impl FileStore {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    /// Keys map to file names; path separators are flattened so a key can
    /// never escape the base directory.
    fn value_path(&self, key: &str) -> PathBuf {
        let name: String = key
            .chars()
            .map(|c| if c == '/' || c == '\\' || c == '.' { '_' } else { c })
            .collect();
        self.base.join(name)
    }
}

impl KeyValueStore for FileStore {
    async fn get(&self, key: &str) -> Option<String> {
        std::fs::read_to_string(self.value_path(key)).ok()
    }

    async fn set(&self, key: &str, value: String) {
        let path = self.value_path(key);
        if let Some(parent) = path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        if let Err(e) = std::fs::write(&path, value) {
            tracing::warn!("failed to write {}: {}", path.display(), e);
        }
    }
}
