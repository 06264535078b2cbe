//! レスポンスパーサー
//!
//! /api/analyze のレスポンスボディを解釈する:
//! - 2xx: AnalysisResult としてパース
//! - 非2xx: error / details フィールドからメッセージを抽出

use crate::error::Result;
use crate::types::{AnalysisResult, ErrorBody};

/// 成功レスポンスのボディをパース
pub fn parse_analysis_response(body: &str) -> Result<AnalysisResult> {
    Ok(serde_json::from_str(body)?)
}

/// 非2xxレスポンスからユーザー向けメッセージを抽出
///
/// error → details → `Server error (<status>)` の順でフォールバック。
/// ボディがJSONとして読めない場合も汎用メッセージに落ちる。
pub fn error_message(status: u16, body: &str) -> String {
    let fallback = format!("Server error ({})", status);
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(parsed) => parsed.error.or(parsed.details).unwrap_or(fallback),
        Err(_) => fallback,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_analysis_response() {
        let body = r#"{
            "vehicles_detected": 12,
            "co2_rate_g_per_min": 828,
            "green_signal_time_seconds": 33,
            "energy_score_percent": 52,
            "system_status": "MODERATE",
            "vehicle_breakdown": {"car": 10, "motorcycle": 0, "bus": 1, "truck": 1}
        }"#;

        let result = parse_analysis_response(body).expect("パース失敗");
        assert_eq!(result.vehicles_detected, 12);
        assert_eq!(result.system_status, "MODERATE");
        assert_eq!(result.vehicle_breakdown.car, 10);
    }

    #[test]
    fn test_parse_analysis_response_invalid() {
        assert!(parse_analysis_response("<html>502</html>").is_err());
        assert!(parse_analysis_response("").is_err());
    }

    #[test]
    fn test_error_message_error_field() {
        let msg = error_message(413, r#"{"error": "File too large"}"#);
        assert_eq!(msg, "File too large");
    }

    #[test]
    fn test_error_message_details_field() {
        // error が無ければ details へフォールバック
        let msg = error_message(500, r#"{"details": "YOLO inference failed"}"#);
        assert_eq!(msg, "YOLO inference failed");
    }

    #[test]
    fn test_error_message_error_takes_precedence() {
        let msg = error_message(500, r#"{"error": "Analysis failed", "details": "stack trace"}"#);
        assert_eq!(msg, "Analysis failed");
    }

    #[test]
    fn test_error_message_unparseable_body() {
        let msg = error_message(502, "<html>Bad Gateway</html>");
        assert_eq!(msg, "Server error (502)");
    }

    #[test]
    fn test_error_message_empty_object() {
        let msg = error_message(404, "{}");
        assert_eq!(msg, "Server error (404)");
    }
}
