//! 検索バーコンポーネント

use leptos::prelude::*;

#[component]
pub fn SearchBar(
    query: ReadSignal<String>,
    set_query: WriteSignal<String>,
    placeholder: &'static str,
) -> impl IntoView {
    view! {
        <div class="search-bar">
            <input
                type="text"
                placeholder=placeholder
                prop:value=move || query.get()
                on:input=move |ev| {
                    set_query.set(event_target_value(&ev));
                }
            />
            <button
                class="btn btn-secondary"
                on:click=move |_| set_query.set(String::new())
            >
                "Clear"
            </button>
        </div>
    }
}
