//! ターミナル描画
//!
//! ResultView をもとに解析結果のパネルを組み立てる。
//! WASMフロントのカードと同じ導出値（クランプ済みバー率、バッジ語彙、
//! 内訳デフォルト）を使う。

use traffic_ai_common::{AnalysisResult, ResultView};

/// エネルギーバーの文字数
const BAR_WIDTH: usize = 30;

/// 1件分の結果パネルを組み立てる
pub fn render_result(file_name: &str, result: &AnalysisResult) -> String {
    let view = ResultView::from_result(result);
    let mut out = String::new();

    out.push_str(&format!("📷 {}\n", file_name));
    out.push_str(&format!("  ステータス : {}\n", view.badge.text));
    out.push_str(&format!("  検出車両数 : {}台\n", result.vehicles_detected));
    out.push_str(&format!("  CO₂排出量  : {} g/min\n", view.co2_rate));
    out.push_str(&format!("  青信号時間 : {} 秒\n", view.green_signal));
    out.push_str(&format!(
        "  エネルギー : [{}] {}%\n",
        energy_bar(view.energy_bar_percent),
        view.energy_bar_percent
    ));
    out.push_str(&format!(
        "  内訳       : 乗用車 {} / 二輪車 {} / バス {} / トラック {}\n",
        view.breakdown.car, view.breakdown.motorcycle, view.breakdown.bus, view.breakdown.truck
    ));

    out
}

/// 一括解析用の1行サマリ
pub fn render_batch_line(file_name: &str, result: &AnalysisResult) -> String {
    let view = ResultView::from_result(result);
    format!(
        "{:<32} {:>4}台  CO₂ {:>7} g/min  {}",
        file_name, result.vehicles_detected, view.co2_rate, view.badge.text
    )
}

fn energy_bar(percent: u32) -> String {
    let filled = (percent as usize * BAR_WIDTH) / 100;
    let mut bar = "█".repeat(filled);
    bar.push_str(&"░".repeat(BAR_WIDTH - filled));
    bar
}
