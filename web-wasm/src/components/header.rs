//! ヘッダーコンポーネント

use leptos::prelude::*;

#[component]
pub fn Header(heading: &'static str) -> impl IntoView {
    view! {
        <header class="header">
            <h1>{heading}</h1>
        </header>
    }
}
