//! FindIt Common Library
//!
//! Web(WASM)と共有される型とロジック

pub mod types;
pub mod search;
pub mod repository;
pub mod error;

pub use types::{Item, ItemDraft, ItemKind};
pub use search::search;
pub use repository::{allocate_id, ItemRepository, ItemStore, MemoryStore, STORAGE_KEY};
pub use error::{Error, Result};
