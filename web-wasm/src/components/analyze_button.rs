//! 解析ボタンコンポーネント

use leptos::prelude::*;

#[component]
pub fn AnalyzeButton<F>(
    enabled: Memo<bool>,
    loading: Memo<bool>,
    on_analyze: F,
) -> impl IntoView
where
    F: Fn(()) + 'static + Clone,
{
    view! {
        <button
            class="btn btn-primary analyze-btn"
            disabled=move || !enabled.get() || loading.get()
            on:click={
                let on_analyze = on_analyze.clone();
                move |_| on_analyze(())
            }
        >
            <Show
                when=move || loading.get()
                fallback=|| view! { <span class="btn-text">"AI解析開始"</span> }
            >
                <span class="btn-loading">
                    <span class="spinner"></span>
                    "解析中..."
                </span>
            </Show>
        </button>
    }
}
