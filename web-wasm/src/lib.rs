//! FindIt Web App (Leptos + WASM)

mod app;
mod components;
mod storage;

use findit_common::ItemKind;
use leptos::prelude::*;
use wasm_bindgen::prelude::*;

use crate::app::App;

/// ページ種別
///
/// ホスト側のページがどの一覧を表示するかを明示的に渡す。
/// DOM構造の探索による判定は行わない。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageMode {
    All,
    LostOnly,
    FoundOnly,
}

impl PageMode {
    fn parse(s: &str) -> Self {
        match s {
            "lost" => PageMode::LostOnly,
            "found" => PageMode::FoundOnly,
            // 未知の値は全件表示にフォールバック
            _ => PageMode::All,
        }
    }

    /// このページが扱う掲示区分（Noneなら全件）
    pub(crate) fn scope(&self) -> Option<ItemKind> {
        match self {
            PageMode::All => None,
            PageMode::LostOnly => Some(ItemKind::Lost),
            PageMode::FoundOnly => Some(ItemKind::Found),
        }
    }

    pub(crate) fn heading(&self) -> &'static str {
        match self {
            PageMode::All => "FindIt - Lost & Found Board",
            PageMode::LostOnly => "FindIt - Lost Items",
            PageMode::FoundOnly => "FindIt - Found Items",
        }
    }

    pub(crate) fn search_placeholder(&self) -> &'static str {
        match self {
            PageMode::All => "Search items...",
            PageMode::LostOnly => "Search lost items...",
            PageMode::FoundOnly => "Search found items...",
        }
    }
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
}

/// ホスト側ページから呼ぶエントリポイント
///
/// `page` は "all" / "lost" / "found" のいずれか。
#[wasm_bindgen]
pub fn mount(page: &str) {
    let mode = PageMode::parse(page);
    leptos::mount::mount_to_body(move || view! { <App page=mode /> });
}
