//! メインアプリケーションコンポーネント

use findit_common::{search, Item, ItemDraft, ItemKind, ItemRepository};
use gloo::dialogs::alert;
use leptos::prelude::*;

use crate::components::{
    add_item_modal::AddItemModal, header::Header, item_grid::ItemGrid, search_bar::SearchBar,
};
use crate::storage::LocalStorage;
use crate::PageMode;

fn repository() -> ItemRepository<LocalStorage> {
    ItemRepository::new(LocalStorage)
}

/// メインアプリケーションコンポーネント
#[component]
pub fn App(page: PageMode) -> impl IntoView {
    // アプリケーション状態
    let (items, set_items) = signal(Vec::<Item>::new());
    let (query, set_query) = signal(String::new());
    // Some(区分) = モーダル表示中（開いたボタンの区分が初期選択になる）
    let (modal_preset, set_modal_preset) = signal(None::<ItemKind>);

    // 初回読み込み
    {
        let mut repo = repository();
        if let Err(e) = repo.initialize() {
            gloo::console::warn!(format!("storage initialize failed: {e}"));
        }
        set_items.set(repo.get_all());
    }

    // 表示対象: ページ区分で絞ってから検索
    let visible = Memo::new(move |_| search(&query.get(), &items.get(), page.scope()));

    // 送信ハンドラ
    let on_add = move |draft: ItemDraft, selected: Option<ItemKind>| {
        let mut repo = repository();
        let now_ms = js_sys::Date::now() as i64;
        match repo.submit(draft, selected, now_ms) {
            Ok(Some(_)) => {
                set_items.set(repo.get_all());
                set_modal_preset.set(None);
            }
            // 区分未選択: 何も保存せず、モーダルは開いたまま
            Ok(None) => alert("Please select Lost or Found type."),
            Err(e) => gloo::console::warn!(format!("save failed: {e}")),
        }
    };

    let on_cancel = move |_: ()| set_modal_preset.set(None);

    view! {
        <div class="container">
            <Header heading=page.heading() />

            <div class="toolbar">
                <SearchBar
                    query=query
                    set_query=set_query
                    placeholder=page.search_placeholder()
                />
                <div class="add-buttons">
                    <Show when=move || page.scope() != Some(ItemKind::Found)>
                        <button
                            class="btn btn-primary"
                            on:click=move |_| set_modal_preset.set(Some(ItemKind::Lost))
                        >
                            "+ Add Lost Item"
                        </button>
                    </Show>
                    <Show when=move || page.scope() != Some(ItemKind::Lost)>
                        <button
                            class="btn btn-primary"
                            on:click=move |_| set_modal_preset.set(Some(ItemKind::Found))
                        >
                            "+ Add Found Item"
                        </button>
                    </Show>
                </div>
            </div>

            <ItemGrid items=visible />

            {move || {
                let on_add = on_add.clone();
                let on_cancel = on_cancel.clone();
                modal_preset.get().map(|preset| {
                    view! {
                        <AddItemModal preset=preset on_submit=on_add on_cancel=on_cancel />
                    }
                })
            }}
        </div>
    }
}
