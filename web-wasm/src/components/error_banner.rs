//! エラーパネルコンポーネント

use leptos::prelude::*;

#[component]
pub fn ErrorBanner(message: Memo<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || message.get().is_some()>
            <div class="error-msg">
                <span class="error-icon">"⚠"</span>
                <span class="error-text">{move || message.get().unwrap_or_default()}</span>
            </div>
        </Show>
    }
}
