//! Persistent key-value storage layer for vend.
//!
//! Stores in `vend-commerce` keep their authoritative state in memory and
//! mirror it into a [`KeyValueStore`] backend. The backend contract is
//! deliberately small — string-valued get/set/remove — so that anything from
//! an in-process map to a directory of JSON files can stand behind it.
//!
//! Writes are fire-and-forget from the caller's point of view: a [`Flusher`]
//! owns a background task that drains queued snapshots in order, and
//! [`Flusher::flush`] gives tests a way to wait for the mirror to catch up.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use vend_storage::{Flusher, KeyValueStore, MemoryStore};
//!
//! let storage: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
//! let flusher = Flusher::spawn(storage.clone(), "cart-storage");
//!
//! flusher.write(r#"{"items":[]}"#.to_string());
//! flusher.flush().await;
//!
//! let raw = storage.get_item("cart-storage").await?;
//! ```

mod error;
mod file;
mod flush;
mod kv;

pub use error::StorageError;
pub use file::FileStore;
pub use flush::Flusher;
pub use kv::{KeyValueStore, MemoryStore};
