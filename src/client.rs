//! 解析エンドポイントへのHTTPクライアント
//!
//! POST {endpoint}/api/analyze に multipart（file フィールド1つ）で
//! 画像を送る。非2xxはボディの error/details からメッセージを抽出する。

use crate::error::{Result, TrafficAiError};
use std::path::Path;
use std::time::Duration;
use traffic_ai_common::{error_message, parse_analysis_response, AnalysisResult};

pub struct AnalyzeClient {
    http: reqwest::Client,
    endpoint: String,
}

impl AnalyzeClient {
    pub fn new(endpoint: &str, timeout_seconds: u64) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_seconds))
            .build()?;
        Ok(Self {
            http,
            endpoint: endpoint.trim_end_matches('/').to_string(),
        })
    }

    pub fn analyze_url(&self) -> String {
        format!("{}/api/analyze", self.endpoint)
    }

    /// 画像1枚をアップロードして解析結果を得る
    pub async fn analyze_file(&self, path: &Path) -> Result<AnalysisResult> {
        if !path.exists() {
            return Err(TrafficAiError::FileNotFound(path.display().to_string()));
        }

        // アップロード前にヘッダだけ読んでデコード可能か確認する
        image::image_dimensions(path)
            .map_err(|e| TrafficAiError::InvalidImage(format!("{}: {}", path.display(), e)))?;

        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "image".to_string());
        let mime = mime_for_extension(path);
        let bytes = tokio::fs::read(path).await?;

        let part = reqwest::multipart::Part::bytes(bytes)
            .file_name(file_name)
            .mime_str(mime)?;
        let form = reqwest::multipart::Form::new().part("file", part);

        let response = self.http.post(self.analyze_url()).multipart(form).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(TrafficAiError::Server(error_message(status.as_u16(), &body)));
        }

        Ok(parse_analysis_response(&body)?)
    }
}

/// 拡張子からMIMEタイプを引く
fn mime_for_extension(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());
    match ext.as_deref() {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("webp") => "image/webp",
        _ => "application/octet-stream",
    }
}
