//! アイテムリポジトリ
//!
//! 全アイテムを単一キーのJSON blobとして読み書きする。
//! ストレージ実装は `ItemStore` トレイトで差し替え可能
//! （ブラウザではlocalStorage、テストではインメモリ）。

use std::collections::HashMap;

use crate::error::Result;
use crate::types::{Item, ItemDraft, ItemKind};

/// 保存キー（元の保存形式と互換）
pub const STORAGE_KEY: &str = "findit_items";

/// key-valueストレージの境界
pub trait ItemStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// インメモリストレージ（テスト・ネイティブ用）
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ItemStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// アイテムリポジトリ
///
/// リストは読み出しのたびにストレージから再構築する
/// （操作をまたぐキャッシュは持たない）。
pub struct ItemRepository<S: ItemStore> {
    store: S,
}

impl<S: ItemStore> ItemRepository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// 初回起動時に空リストを書き込む。冪等。
    pub fn initialize(&mut self) -> Result<()> {
        if self.store.get(STORAGE_KEY).is_none() {
            self.store.set(STORAGE_KEY, "[]")?;
        }
        Ok(())
    }

    /// 全アイテムを読み出す
    ///
    /// キーが無い・blobが壊れている場合は空リストを返す
    /// （外にエラーを出さない）。配列として読めるがレコード単位で
    /// 不正な要素は、その要素だけ捨てる。
    pub fn get_all(&self) -> Vec<Item> {
        match self.store.get(STORAGE_KEY) {
            Some(raw) => decode_items(&raw),
            None => Vec::new(),
        }
    }

    /// 全アイテムを書き込む（全置換）
    pub fn save_all(&mut self, items: &[Item]) -> Result<()> {
        let raw = serde_json::to_string(items)?;
        self.store.set(STORAGE_KEY, &raw)
    }

    /// 下書きから新規アイテムを追記する
    ///
    /// `now_ms` は呼び出し側の現在時刻（ミリ秒）。IDは
    /// 既存IDと衝突しないよう採番される。
    pub fn add(&mut self, draft: ItemDraft, kind: ItemKind, now_ms: i64) -> Result<Item> {
        let mut items = self.get_all();
        let id = allocate_id(now_ms, &items);
        let item = draft.into_item(id, kind);
        items.push(item.clone());
        self.save_all(&items)?;
        Ok(item)
    }

    /// フォーム送信を処理する
    ///
    /// 区分が未選択（None）の場合はストレージに何も書かず
    /// `Ok(None)` を返す。検証アラートの表示は呼び出し側が行う。
    pub fn submit(
        &mut self,
        draft: ItemDraft,
        selected: Option<ItemKind>,
        now_ms: i64,
    ) -> Result<Option<Item>> {
        match selected {
            Some(kind) => self.add(draft, kind, now_ms).map(Some),
            None => Ok(None),
        }
    }
}

/// 新規アイテムのIDを採番する
///
/// タイムスタンプ形式を保ちつつ、同一ミリ秒内の連続作成でも
/// 既存IDを追い越すことで衝突を避ける。
pub fn allocate_id(now_ms: i64, items: &[Item]) -> i64 {
    let max_existing = items.iter().map(|i| i.id).max().unwrap_or(0);
    now_ms.max(max_existing + 1)
}

fn decode_items(raw: &str) -> Vec<Item> {
    let Ok(values) = serde_json::from_str::<Vec<serde_json::Value>>(raw) else {
        return Vec::new();
    };
    values
        .into_iter()
        .filter_map(|v| serde_json::from_value(v).ok())
        .collect()
}
