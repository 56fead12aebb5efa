//! アイテム一覧コンポーネント

use findit_common::Item;
use leptos::prelude::*;

use crate::components::item_card::ItemCard;

#[component]
pub fn ItemGrid(items: Memo<Vec<Item>>) -> impl IntoView {
    view! {
        <div class="items-grid">
            <Show
                when=move || !items.get().is_empty()
                fallback=|| view! { <p class="muted">"No items available."</p> }
            >
                <For
                    each=move || items.get()
                    key=|item| item.id
                    children=move |item| {
                        view! { <ItemCard item=item /> }
                    }
                />
            </Show>
        </div>
    }
}

#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use findit_common::ItemKind;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn container() -> web_sys::HtmlElement {
        let document = web_sys::window().unwrap().document().unwrap();
        document
            .create_element("div")
            .unwrap()
            .dyn_into()
            .unwrap()
    }

    fn sample(id: i64, kind: ItemKind, title: &str) -> Item {
        Item {
            id,
            kind,
            title: title.to_string(),
            place: "somewhere".to_string(),
            date: String::new(),
            description: String::new(),
            poster: "poster".to_string(),
            contact: "contact".to_string(),
            image: String::new(),
        }
    }

    #[wasm_bindgen_test]
    fn wasm_empty_list_renders_placeholder_and_no_cards() {
        let target = container();
        let (items, _set_items) = signal(Vec::<Item>::new());
        let visible = Memo::new(move |_| items.get());

        let _handle = leptos::mount::mount_to(target.clone(), move || {
            view! { <ItemGrid items=visible /> }
        });

        let html = target.inner_html();
        assert!(html.contains("No items available."));
        assert!(!html.contains("class=\"card\""));
    }

    #[wasm_bindgen_test]
    fn wasm_items_render_one_card_each_in_order() {
        let target = container();
        let (items, _set_items) = signal(vec![
            sample(1, ItemKind::Lost, "Keys"),
            sample(2, ItemKind::Found, "Phone"),
        ]);
        let visible = Memo::new(move |_| items.get());

        let _handle = leptos::mount::mount_to(target.clone(), move || {
            view! { <ItemGrid items=visible /> }
        });

        let html = target.inner_html();
        assert!(!html.contains("No items available."));
        let keys_pos = html.find("Keys").expect("1件目が描画されていない");
        let phone_pos = html.find("Phone").expect("2件目が描画されていない");
        assert!(keys_pos < phone_pos);
    }
}
