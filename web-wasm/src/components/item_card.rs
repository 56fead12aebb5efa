//! アイテムカードコンポーネント

use findit_common::{Item, ItemKind};
use gloo::dialogs::alert;
use leptos::html;
use leptos::prelude::*;

#[component]
pub fn ItemCard(item: Item) -> impl IntoView {
    let kind_class = match item.kind {
        ItemKind::Lost => "tag lost",
        ItemKind::Found => "tag found",
    };
    let date_text = if item.date.is_empty() {
        "-".to_string()
    } else {
        item.date.clone()
    };
    let posted_by = format!("{} ({})", item.poster, item.contact);
    let has_image = !item.image.is_empty();
    let is_found = item.kind == ItemKind::Found;

    let proof_input: NodeRef<html::Input> = NodeRef::new();

    let on_claim = move |_| {
        alert("Please upload a screenshot (e.g., Amazon bill or receipt) as proof of ownership.");
        if let Some(input) = proof_input.get() {
            input.click();
        }
    };

    // 所有確認はUIスタブ: ファイル内容の読み取り・保存は行わない
    let on_proof_selected = move |_| {
        if let Some(input) = proof_input.get() {
            if let Some(file) = input.files().and_then(|files| files.get(0)) {
                alert(&format!(
                    "Proof image \"{}\" uploaded successfully!",
                    file.name()
                ));
            }
        }
    };

    view! {
        <div class="card">
            <div class="card-img">
                {if has_image {
                    view! { <img src=item.image.clone() alt=item.title.clone() /> }.into_any()
                } else {
                    view! { <div class="muted">"No Image"</div> }.into_any()
                }}
            </div>
            <div class="card-body">
                <h3>{item.title.clone()}</h3>
                <p>{item.description.clone()}</p>
                <p><strong>"Place: "</strong>{item.place.clone()}</p>
                <p><strong>"Date: "</strong>{date_text}</p>
                <p><strong>"Posted by: "</strong>{posted_by}</p>
                <div class="tag-row">
                    <div class=kind_class>{item.kind.as_str()}</div>
                    {is_found.then(|| {
                        view! {
                            <button class="claim-btn" on:click=on_claim>
                                "Claim"
                            </button>
                            <input
                                type="file"
                                class="proof-upload"
                                accept="image/*"
                                style="display:none;"
                                node_ref=proof_input
                                on:change=on_proof_selected
                            />
                        }
                    })}
                </div>
            </div>
        </div>
    }
}
