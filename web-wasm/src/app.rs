//! メインアプリケーションコンポーネント

use leptos::prelude::*;
use traffic_ai_common::{SelectedImage, UiMode, UploadController};
use wasm_bindgen_futures::spawn_local;

use crate::api;
use crate::components::{
    analyze_button::AnalyzeButton, error_banner::ErrorBanner, header::Header,
    results_panel::ResultsPanel, upload_area::UploadArea,
};

#[component]
pub fn App() -> impl IntoView {
    // 対話状態はコントローラ1つに集約し、描画はシグナル経由で導出する
    let controller = RwSignal::new(UploadController::new());

    let mode = Memo::new(move |_| controller.with(|c| c.mode()));
    let preview = Memo::new(move |_| controller.with(|c| c.image().map(|i| i.data_url.clone())));
    let error_text = Memo::new(move |_| controller.with(|c| c.error_text().map(str::to_string)));
    let result = Memo::new(move |_| controller.with(|c| c.result().cloned()));
    let has_image = Memo::new(move |_| controller.with(|c| c.image().is_some()));
    let loading = Memo::new(move |_| mode.get() == UiMode::Loading);

    let on_file = move |image: SelectedImage| {
        controller.update(|c| {
            c.accept_file(image);
        });
    };

    // 解析タスク。begin_analysis が None なら画像なしか飛行中なので何もしない。
    // 完了は成功・失敗どちらの経路でも必ず finish_* を通り loading を抜ける
    let on_analyze = move |_: ()| {
        let Some(image) = controller.try_update(|c| c.begin_analysis()).flatten() else {
            return;
        };
        spawn_local(async move {
            let outcome = api::analyze_image(&image).await;
            controller.update(|c| match outcome {
                Ok(result) => c.finish_success(result),
                Err(message) => {
                    web_sys::console::error_1(&format!("Analysis error: {}", message).into());
                    c.finish_error(message);
                }
            });
        });
    };

    view! {
        <div class="container">
            <Header />
            <UploadArea preview=preview on_file=on_file />
            <AnalyzeButton enabled=has_image loading=loading on_analyze=on_analyze />
            <ErrorBanner message=error_text />
            <ResultsPanel result=result />
        </div>
    }
}
