//! # Key-value persistence trait
//!
//! Saved tips live in a single string slot of a key-value store. The browser
//! build writes to `localStorage`, desktop writes one file per key under the
//! platform data directory, and tests use an in-memory map. All of them go
//! through [`KeyValueStore`] so [`crate::TipShelf`] does not care which one
//! it is talking to.
//!
//! Implementations never fail outwardly: a read that cannot be served returns
//! `None` and a write that cannot be performed is dropped. The shelf treats a
//! missing value as "nothing saved yet".

/// Async interface over a string-valued key-value store.
pub trait KeyValueStore {
    fn get(
        &self,
        key: &str,
    ) -> impl std::future::Future<Output = Option<String>>;
    fn set(
        &self,
        key: &str,
        value: String,
    ) -> impl std::future::Future<Output = ()>;
}
