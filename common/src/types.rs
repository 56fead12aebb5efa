//! 掲示アイテムの型定義
//!
//! Web(WASM)と共有される型:
//! - ItemKind: 掲示区分（Lost / Found）
//! - Item: 保存される掲示レコード
//! - ItemDraft: フォーム入力から生成する下書き

use serde::{Deserialize, Serialize};

/// 掲示区分
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemKind {
    Lost,
    Found,
}

impl ItemKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemKind::Lost => "Lost",
            ItemKind::Found => "Found",
        }
    }
}

/// 掲示アイテム
///
/// 作成後は編集・削除されない（追記専用）。
/// `date` / `description` / `image` は省略可能で、欠落時は空文字列になる。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: i64,

    /// 掲示区分（保存形式は "type" キー）
    #[serde(rename = "type")]
    pub kind: ItemKind,

    pub title: String,
    pub place: String,

    #[serde(default)]
    pub date: String,

    #[serde(default)]
    pub description: String,

    pub poster: String,
    pub contact: String,

    /// 画像のdata URL（未設定なら空文字列）
    #[serde(default)]
    pub image: String,
}

/// フォーム入力の下書き
///
/// 必須フィールドのトリムはここで行い、Itemの構築を
/// UI層から切り離す。
#[derive(Debug, Clone, Default)]
pub struct ItemDraft {
    pub title: String,
    pub place: String,
    pub date: String,
    pub description: String,
    pub poster: String,
    pub contact: String,
    pub image: String,
}

impl ItemDraft {
    /// 下書きから掲示アイテムを構築
    pub fn into_item(self, id: i64, kind: ItemKind) -> Item {
        Item {
            id,
            kind,
            title: self.title.trim().to_string(),
            place: self.place.trim().to_string(),
            date: self.date,
            description: self.description.trim().to_string(),
            poster: self.poster.trim().to_string(),
            contact: self.contact.trim().to_string(),
            image: self.image,
        }
    }
}
