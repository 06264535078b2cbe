//! ヘッダーコンポーネント

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <h1>"🚦 Traffic AI Analyzer"</h1>
            <p class="subtitle">"交差点画像から車両台数とCO₂排出量をAIで推定"</p>
        </header>
    }
}
