//! # Saved tips: the bookmark shelf
//!
//! [`SavedTips`] is the in-memory ordered set the UI works with; [`TipShelf`]
//! persists it through any [`KeyValueStore`] as a JSON array under a single
//! key (default [`SAVED_TIPS_KEY`]).
//!
//! The whole list is rewritten on every mutation. Membership is by title: a
//! second tip with the same title toggles the first one off.
//!
//! Records keep whatever detail they were saved with (`explanation`, `steps`,
//! `index`), including records written by earlier builds of the page.
//!
//! A stored value that does not parse is treated as an empty shelf (and
//! logged). [`TipShelf::try_load`] exposes the parse error for callers that
//! would rather stop.

use crate::kv::KeyValueStore;
use crate::models::{SavedTip, Tip};

/// Key the saved list has always been stored under.
pub const SAVED_TIPS_KEY: &str = "savedTips";

/// Ordered set of saved tips, unique by title, insertion order preserved.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SavedTips {
    tips: Vec<SavedTip>,
}

impl SavedTips {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a stored list, dropping later duplicates of a title.
    pub fn from_vec(tips: Vec<SavedTip>) -> Self {
        let mut saved = Self::new();
        saved.extend(tips);
        saved
    }

    fn extend(&mut self, tips: impl IntoIterator<Item = SavedTip>) {
        for tip in tips {
            if !self.contains(&tip.tip) {
                self.tips.push(tip);
            }
        }
    }

    /// Put `stored` first and keep entries added since that are not in it.
    /// Returns `true` if the result differs from `stored`.
    pub fn merge_stored(&mut self, stored: Vec<SavedTip>) -> bool {
        let mut merged = Self::from_vec(stored);
        let stored_len = merged.len();
        merged.extend(std::mem::take(&mut self.tips));
        *self = merged;
        self.len() != stored_len
    }

    pub fn contains(&self, tip: &Tip) -> bool {
        self.tips.iter().any(|t| t.tip.same_title(tip))
    }

    /// Remove the entry with this title if present, otherwise append `tip`.
    /// Returns `true` when the tip ends up saved.
    pub fn toggle(&mut self, tip: SavedTip) -> bool {
        if self.contains(&tip.tip) {
            self.tips.retain(|t| !t.tip.same_title(&tip.tip));
            false
        } else {
            self.tips.push(tip);
            true
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SavedTip> {
        self.tips.iter()
    }

    pub fn len(&self) -> usize {
        self.tips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tips.is_empty()
    }

    pub fn as_slice(&self) -> &[SavedTip] {
        &self.tips
    }

    pub fn to_vec(&self) -> Vec<SavedTip> {
        self.tips.clone()
    }
}

/// Persistent saved-tip list backed by a KeyValueStore.
pub struct TipShelf<S: KeyValueStore> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> TipShelf<S> {
    pub fn new(store: S) -> Self {
        Self::with_key(store, SAVED_TIPS_KEY)
    }

    pub fn with_key(store: S, key: &str) -> Self {
        Self {
            store,
            key: key.to_string(),
        }
    }

    /// Read the saved list, surfacing a corrupt value as an error.
    /// A missing key is an empty list.
    pub async fn try_load(&self) -> Result<Vec<SavedTip>, serde_json::Error> {
        match self.store.get(&self.key).await {
            Some(raw) => serde_json::from_str(&raw),
            None => Ok(Vec::new()),
        }
    }

    /// Read the saved list; a corrupt value reads as empty.
    pub async fn load(&self) -> Vec<SavedTip> {
        match self.try_load().await {
            Ok(tips) => tips,
            Err(e) => {
                tracing::warn!(key = %self.key, "discarding unreadable saved tips: {e}");
                Vec::new()
            }
        }
    }

    /// Overwrite the stored list with `tips`.
    pub async fn save(&self, tips: &[SavedTip]) {
        match serde_json::to_string(tips) {
            Ok(raw) => self.store.set(&self.key, raw).await,
            Err(e) => tracing::error!(key = %self.key, "failed to serialise saved tips: {e}"),
        }
    }

    /// Toggle `tip` by title, persist, and return the new list.
    pub async fn toggle(&self, tip: SavedTip) -> Vec<SavedTip> {
        let mut saved = SavedTips::from_vec(self.load().await);
        saved.toggle(tip);
        self.save(saved.as_slice()).await;
        saved.to_vec()
    }
}
