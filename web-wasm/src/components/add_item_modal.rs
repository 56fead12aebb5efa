//! アイテム追加モーダルコンポーネント
//!
//! フォーム状態はこのコンポーネントが持つ。モーダルは開くたびに
//! 生成され、閉じると破棄されるので、キャンセル・登録後の
//! リセットは自動的に行われる。

use findit_common::{ItemDraft, ItemKind};
use leptos::html;
use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::{File, FileReader};

#[component]
pub fn AddItemModal<FS, FC>(preset: ItemKind, on_submit: FS, on_cancel: FC) -> impl IntoView
where
    FS: Fn(ItemDraft, Option<ItemKind>) + 'static + Clone,
    FC: Fn(()) + 'static + Clone,
{
    // モーダルセッションの状態
    let (selected_kind, set_selected_kind) = signal(Some(preset));
    let (title, set_title) = signal(String::new());
    let (place, set_place) = signal(String::new());
    let (date, set_date) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (poster, set_poster) = signal(String::new());
    let (contact, set_contact) = signal(String::new());
    // プレビュー中画像のdata URL（空 = 未選択）
    let (image, set_image) = signal(String::new());

    let image_input: NodeRef<html::Input> = NodeRef::new();

    let modal_title = move || match selected_kind.get() {
        Some(kind) => format!("Add {} Item", kind.as_str()),
        None => "Add Item".to_string(),
    };

    let on_image_change = move |_| {
        let file = image_input
            .get()
            .and_then(|input| input.files())
            .and_then(|files| files.get(0));
        match file {
            Some(file) => read_preview(file, set_image),
            None => set_image.set(String::new()),
        }
    };

    // 区分未選択の検証と保存は呼び出し側（リポジトリのsubmit）が行う
    let submit = {
        let on_submit = on_submit.clone();
        move |ev: web_sys::SubmitEvent| {
            ev.prevent_default();

            let draft = ItemDraft {
                title: title.get(),
                place: place.get(),
                date: date.get(),
                description: description.get(),
                poster: poster.get(),
                contact: contact.get(),
                image: image.get(),
            };
            on_submit(draft, selected_kind.get());
        }
    };

    view! {
        <div class="modal" aria-hidden="false">
            <div class="modal-content">
                <h2 class="modal-title">{modal_title}</h2>

                <div class="type-toggle">
                    <button
                        type="button"
                        class="btn toggle"
                        class:active=move || selected_kind.get() == Some(ItemKind::Lost)
                        on:click=move |_| set_selected_kind.set(Some(ItemKind::Lost))
                    >
                        "Lost"
                    </button>
                    <button
                        type="button"
                        class="btn toggle"
                        class:active=move || selected_kind.get() == Some(ItemKind::Found)
                        on:click=move |_| set_selected_kind.set(Some(ItemKind::Found))
                    >
                        "Found"
                    </button>
                </div>

                <form class="add-form" on:submit=submit>
                    <div class="form-group">
                        <label for="item-title">"Title"</label>
                        <input
                            type="text"
                            id="item-title"
                            required=true
                            prop:value=move || title.get()
                            on:input=move |ev| {
                                set_title.set(event_target_value(&ev));
                            }
                        />
                    </div>

                    <div class="form-group">
                        <label for="item-place">"Place"</label>
                        <input
                            type="text"
                            id="item-place"
                            required=true
                            prop:value=move || place.get()
                            on:input=move |ev| {
                                set_place.set(event_target_value(&ev));
                            }
                        />
                    </div>

                    <div class="form-group">
                        <label for="item-date">"Date"</label>
                        <input
                            type="date"
                            id="item-date"
                            prop:value=move || date.get()
                            on:input=move |ev| {
                                set_date.set(event_target_value(&ev));
                            }
                        />
                    </div>

                    <div class="form-group">
                        <label for="item-desc">"Description"</label>
                        <textarea
                            id="item-desc"
                            prop:value=move || description.get()
                            on:input=move |ev| {
                                set_description.set(event_target_value(&ev));
                            }
                        />
                    </div>

                    <div class="form-group">
                        <label for="poster-name">"Your name"</label>
                        <input
                            type="text"
                            id="poster-name"
                            required=true
                            prop:value=move || poster.get()
                            on:input=move |ev| {
                                set_poster.set(event_target_value(&ev));
                            }
                        />
                    </div>

                    <div class="form-group">
                        <label for="poster-contact">"Contact"</label>
                        <input
                            type="text"
                            id="poster-contact"
                            required=true
                            prop:value=move || contact.get()
                            on:input=move |ev| {
                                set_contact.set(event_target_value(&ev));
                            }
                        />
                    </div>

                    <div class="form-group">
                        <label for="item-image">"Image"</label>
                        <input
                            type="file"
                            id="item-image"
                            accept="image/*"
                            node_ref=image_input
                            on:change=on_image_change
                        />
                        <div class="image-preview">
                            {move || {
                                let url = image.get();
                                if url.is_empty() {
                                    view! { <span class="muted">"No image"</span> }.into_any()
                                } else {
                                    view! {
                                        <img
                                            src=url
                                            alt="preview"
                                            style="max-width:100px;border-radius:8px;"
                                        />
                                    }
                                        .into_any()
                                }
                            }}
                        </div>
                    </div>

                    <div class="form-actions">
                        <button type="submit" class="btn btn-primary">
                            "Add Item"
                        </button>
                        <button
                            type="button"
                            class="btn btn-secondary"
                            on:click={
                                let on_cancel = on_cancel.clone();
                                move |_| on_cancel(())
                            }
                        >
                            "Cancel"
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}

/// 選択された画像をdata URLに変換してプレビューに反映する
///
/// 読み取りは非同期で、UIはブロックしない。連続で選び直した場合は
/// 後に完了した方がプレビューに残る。
fn read_preview(file: File, set_image: WriteSignal<String>) {
    let reader = FileReader::new().unwrap();

    let reader_clone = reader.clone();
    let closure = Closure::wrap(Box::new(move |_: web_sys::ProgressEvent| {
        if let Ok(result) = reader_clone.result() {
            if let Some(data_url) = result.as_string() {
                set_image.set(data_url);
            }
        }
    }) as Box<dyn FnMut(_)>);

    reader.set_onload(Some(closure.as_ref().unchecked_ref()));
    closure.forget();

    let _ = reader.read_as_data_url(&file);
}
