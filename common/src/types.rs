//! 解析結果の型定義
//!
//! CLIとWeb(WASM)で共有される型:
//! - AnalysisResult: /api/analyze の成功レスポンス
//! - VehicleBreakdown: 車種別の台数内訳
//! - SystemStatus: 渋滞ステータスの固定語彙
//! - ErrorBody: 非2xxレスポンスのエラーボディ

use serde::{Deserialize, Serialize};

/// AI解析結果（1枚の画像に対するメトリクス）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisResult {
    pub vehicles_detected: u32,

    /// CO₂排出量 (g/min)
    pub co2_rate_g_per_min: f64,

    /// 推奨青信号時間 (秒)
    pub green_signal_time_seconds: f64,

    /// エネルギースコア (0-100)
    pub energy_score_percent: f64,

    /// 渋滞ステータス (CLEAR/NORMAL/MODERATE/CONGESTED)
    pub system_status: String,

    pub vehicle_breakdown: VehicleBreakdown,
}

/// 車種別内訳（欠けたカテゴリは0）
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VehicleBreakdown {
    pub car: u32,
    pub motorcycle: u32,
    pub bus: u32,
    pub truck: u32,
}

/// 渋滞ステータスの固定語彙
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SystemStatus {
    Clear,
    Normal,
    Moderate,
    Congested,
}

impl SystemStatus {
    /// 大文字小文字を無視してパース。語彙外は None
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_uppercase().as_str() {
            "CLEAR" => Some(SystemStatus::Clear),
            "NORMAL" => Some(SystemStatus::Normal),
            "MODERATE" => Some(SystemStatus::Moderate),
            "CONGESTED" => Some(SystemStatus::Congested),
            _ => None,
        }
    }

    /// 表示ラベル（正準の大文字表記）
    pub fn label(&self) -> &'static str {
        match self {
            SystemStatus::Clear => "CLEAR",
            SystemStatus::Normal => "NORMAL",
            SystemStatus::Moderate => "MODERATE",
            SystemStatus::Congested => "CONGESTED",
        }
    }

    /// バッジ用CSSクラス
    pub fn css_class(&self) -> &'static str {
        match self {
            SystemStatus::Clear => "status-clear",
            SystemStatus::Normal => "status-normal",
            SystemStatus::Moderate => "status-moderate",
            SystemStatus::Congested => "status-congested",
        }
    }
}

/// 非2xxレスポンスのエラーボディ
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ErrorBody {
    pub error: Option<String>,
    pub details: Option<String>,
}
