//! 結果ビューモデル
//!
//! AnalysisResult から表示用の値を導出する。WASMフロントの描画と
//! CLIのターミナル描画で共有する。

use crate::types::{AnalysisResult, SystemStatus, VehicleBreakdown};

/// ステータスバッジの表示内容
#[derive(Debug, Clone, PartialEq)]
pub struct StatusBadge {
    pub text: String,
    /// 固定語彙に一致したステータスのみ Some
    pub css_class: Option<&'static str>,
}

/// 表示用に導出した結果ビュー
#[derive(Debug, Clone, PartialEq)]
pub struct ResultView {
    /// カウンターの目標値（4メトリクス）
    pub vehicles_detected: f64,
    pub co2_rate: f64,
    pub green_signal: f64,
    pub energy_score: f64,

    /// [0,100] にクランプし整数へ丸めたバー表示率
    pub energy_bar_percent: u32,

    pub badge: StatusBadge,
    pub breakdown: VehicleBreakdown,
}

impl ResultView {
    pub fn from_result(result: &AnalysisResult) -> Self {
        let energy_bar_percent = result.energy_score_percent.clamp(0.0, 100.0).round() as u32;

        // 空ステータスは NORMAL 扱い（バックエンドの既定値）
        let raw_status = if result.system_status.is_empty() {
            "NORMAL"
        } else {
            result.system_status.as_str()
        };
        let badge = match SystemStatus::parse(raw_status) {
            Some(status) => StatusBadge {
                text: status.label().to_string(),
                css_class: Some(status.css_class()),
            },
            None => StatusBadge {
                text: raw_status.to_string(),
                css_class: None,
            },
        };

        Self {
            vehicles_detected: f64::from(result.vehicles_detected),
            co2_rate: result.co2_rate_g_per_min,
            green_signal: result.green_signal_time_seconds,
            energy_score: result.energy_score_percent,
            energy_bar_percent,
            badge,
            breakdown: result.vehicle_breakdown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_result() -> AnalysisResult {
        AnalysisResult {
            vehicles_detected: 42,
            co2_rate_g_per_min: 150.5,
            green_signal_time_seconds: 30.0,
            energy_score_percent: 87.0,
            system_status: "MODERATE".to_string(),
            vehicle_breakdown: VehicleBreakdown {
                car: 30,
                motorcycle: 5,
                bus: 4,
                truck: 3,
            },
        }
    }

    #[test]
    fn test_view_from_sample_result() {
        let view = ResultView::from_result(&sample_result());
        assert_eq!(view.vehicles_detected, 42.0);
        assert_eq!(view.energy_bar_percent, 87);
        assert_eq!(view.badge.text, "MODERATE");
        assert_eq!(view.badge.css_class, Some("status-moderate"));
        assert_eq!(view.breakdown.car, 30);
        assert_eq!(view.breakdown.motorcycle, 5);
        assert_eq!(view.breakdown.bus, 4);
        assert_eq!(view.breakdown.truck, 3);
    }

    #[test]
    fn test_energy_bar_clamped_to_100() {
        let mut result = sample_result();
        result.energy_score_percent = 150.0;
        let view = ResultView::from_result(&result);
        assert_eq!(view.energy_bar_percent, 100);
    }

    #[test]
    fn test_energy_bar_clamped_to_0() {
        let mut result = sample_result();
        result.energy_score_percent = -20.0;
        let view = ResultView::from_result(&result);
        assert_eq!(view.energy_bar_percent, 0);
    }

    #[test]
    fn test_energy_bar_rounds_to_integer() {
        let mut result = sample_result();
        result.energy_score_percent = 87.6;
        let view = ResultView::from_result(&result);
        assert_eq!(view.energy_bar_percent, 88);
    }

    #[test]
    fn test_unknown_status_shows_raw_text_without_class() {
        let mut result = sample_result();
        result.system_status = "unknown_value".to_string();
        let view = ResultView::from_result(&result);
        assert_eq!(view.badge.text, "unknown_value");
        assert_eq!(view.badge.css_class, None);
    }

    #[test]
    fn test_lowercase_status_maps_to_canonical_label() {
        let mut result = sample_result();
        result.system_status = "congested".to_string();
        let view = ResultView::from_result(&result);
        assert_eq!(view.badge.text, "CONGESTED");
        assert_eq!(view.badge.css_class, Some("status-congested"));
    }

    #[test]
    fn test_empty_status_defaults_to_normal() {
        let mut result = sample_result();
        result.system_status = String::new();
        let view = ResultView::from_result(&result);
        assert_eq!(view.badge.text, "NORMAL");
        assert_eq!(view.badge.css_class, Some("status-normal"));
    }

    #[test]
    fn test_missing_breakdown_defaults_to_zero() {
        let result: AnalysisResult =
            serde_json::from_str(r#"{"vehicles_detected": 2, "system_status": "NORMAL"}"#)
                .expect("デシリアライズ失敗");
        let view = ResultView::from_result(&result);
        assert_eq!(view.breakdown, VehicleBreakdown::default());
    }
}
