pub mod config;
pub mod kv;
pub mod models;
pub mod shelf;

mod memory;
pub use memory::MemoryStore;

mod file_store;
pub use file_store::FileStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local_storage;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local_storage::LocalStorageStore;

pub use config::{FailurePolicy, WellnessConfig};
pub use kv::KeyValueStore;
pub use models::{Gender, Goal, Profile, ProfileDraft, SavedTip, Tip, TipDetail, TipId};
pub use shelf::{SavedTips, TipShelf, SAVED_TIPS_KEY};
