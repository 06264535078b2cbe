use thiserror::Error;

#[derive(Error, Debug)]
pub enum TrafficAiError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("フォルダが見つかりません: {0}")]
    FolderNotFound(String),

    #[error("画像として読み込めません: {0}")]
    InvalidImage(String),

    #[error("画像が見つかりません: {0}")]
    NoImagesFound(String),

    #[error("解析サーバーエラー: {0}")]
    Server(String),

    #[error("HTTPエラー: {0}")]
    Http(#[from] reqwest::Error),

    #[error("レスポンス解析エラー: {0}")]
    Response(#[from] traffic_ai_common::Error),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, TrafficAiError>;
