//! 結果パネルコンポーネント
//!
//! 4つのメトリクスをフレーム駆動のカウンターで表示し、エネルギーバー、
//! ステータスバッジ、車種内訳を描画する。表示のたびにパネルを
//! スクロールで視界に入れる。

use leptos::html::Section;
use leptos::prelude::*;
use traffic_ai_common::{AnalysisResult, ResultView, VehicleBreakdown};
use wasm_bindgen_futures::spawn_local;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use crate::anim::{animate_bar_width, animate_counter, next_frame};

#[component]
pub fn ResultsPanel(result: Memo<Option<AnalysisResult>>) -> impl IntoView {
    let (vehicles_text, set_vehicles_text) = signal("0".to_string());
    let (co2_text, set_co2_text) = signal("0".to_string());
    let (green_text, set_green_text) = signal("0".to_string());
    let (energy_text, set_energy_text) = signal("0".to_string());
    let (bar_percent, set_bar_percent) = signal(0u32);
    let (badge_text, set_badge_text) = signal(String::new());
    let (badge_class, set_badge_class) = signal(None::<&'static str>);
    let (breakdown, set_breakdown) = signal(VehicleBreakdown::default());

    let panel_ref = NodeRef::<Section>::new();

    // 新しい結果が来るたびに描画をやり直す。アニメーションは毎回
    // 0から始まり、同じ結果なら同じ終着値に収束する
    Effect::new(move |_| {
        let Some(result) = result.get() else {
            return;
        };
        let view = ResultView::from_result(&result);

        // カウンター4本（整数表示）
        spawn_local(animate_counter(set_vehicles_text, view.vehicles_detected, 0));
        spawn_local(animate_counter(set_co2_text, view.co2_rate, 0));
        spawn_local(animate_counter(set_green_text, view.green_signal, 0));
        spawn_local(animate_counter(set_energy_text, view.energy_score, 0));

        spawn_local(animate_bar_width(set_bar_percent, view.energy_bar_percent));

        set_badge_text.set(view.badge.text);
        set_badge_class.set(view.badge.css_class);
        set_breakdown.set(view.breakdown);

        // パネルがDOMに入った次のフレームでスクロール
        spawn_local(async move {
            next_frame().await;
            if let Some(el) = panel_ref.get_untracked() {
                let opts = ScrollIntoViewOptions::new();
                opts.set_behavior(ScrollBehavior::Smooth);
                opts.set_block(ScrollLogicalPosition::Nearest);
                el.scroll_into_view_with_scroll_into_view_options(&opts);
            }
        });
    });

    view! {
        <Show when=move || result.get().is_some()>
            <section class="results-section" node_ref=panel_ref>
                <div class="results-header">
                    <h2>"解析結果"</h2>
                    <span class=move || match badge_class.get() {
                        Some(class) => format!("status-badge {}", class),
                        None => "status-badge".to_string(),
                    }>
                        {move || badge_text.get()}
                    </span>
                </div>

                <div class="metrics-grid">
                    <div class="metric-card">
                        <div class="metric-value">{move || vehicles_text.get()}</div>
                        <div class="metric-label">"検出車両数"</div>
                    </div>
                    <div class="metric-card">
                        <div class="metric-value">{move || co2_text.get()}</div>
                        <div class="metric-label">"CO₂排出量 (g/min)"</div>
                    </div>
                    <div class="metric-card">
                        <div class="metric-value">{move || green_text.get()}</div>
                        <div class="metric-label">"推奨青信号時間 (秒)"</div>
                    </div>
                    <div class="metric-card">
                        <div class="metric-value">{move || energy_text.get()}</div>
                        <div class="metric-label">"エネルギースコア"</div>
                    </div>
                </div>

                <div class="energy-bar">
                    <div
                        class="energy-bar-fill"
                        style=move || format!("width: {}%", bar_percent.get())
                    />
                </div>
                <p class="energy-bar-pct">{move || format!("{}%", bar_percent.get())}</p>

                <div class="breakdown-grid">
                    <div class="breakdown-item">
                        <span class="breakdown-count">{move || breakdown.get().car}</span>
                        <span class="breakdown-label">"乗用車"</span>
                    </div>
                    <div class="breakdown-item">
                        <span class="breakdown-count">{move || breakdown.get().motorcycle}</span>
                        <span class="breakdown-label">"二輪車"</span>
                    </div>
                    <div class="breakdown-item">
                        <span class="breakdown-count">{move || breakdown.get().bus}</span>
                        <span class="breakdown-label">"バス"</span>
                    </div>
                    <div class="breakdown-item">
                        <span class="breakdown-count">{move || breakdown.get().truck}</span>
                        <span class="breakdown-label">"トラック"</span>
                    </div>
                </div>
            </section>
        </Show>
    }
}
