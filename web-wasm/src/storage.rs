//! localStorageアダプタ
//!
//! `ItemStore` のブラウザ実装。windowやlocalStorageが取れない
//! 環境では読み出しはNone、書き込みはエラーになる。

use findit_common::{Error, ItemStore, Result};

/// `window.localStorage` 実装のストア
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

fn storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl ItemStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        storage().and_then(|s| s.get_item(key).ok().flatten())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let storage =
            storage().ok_or_else(|| Error::Storage("localStorage unavailable".to_string()))?;
        storage
            .set_item(key, value)
            .map_err(|e| Error::Storage(format!("set_item failed: {e:?}")))
    }
}
