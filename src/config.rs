use crate::error::{Result, TrafficAiError};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// CLI設定
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub endpoint: String,
    pub timeout_seconds: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: "http://127.0.0.1:8000".into(),
            timeout_seconds: 120,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| TrafficAiError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("traffic-ai").join("config.json"))
    }

    /// 実際に使うエンドポイントを決める
    ///
    /// CLI引数 → 環境変数 TRAFFIC_AI_ENDPOINT → 設定ファイルの順
    pub fn resolve_endpoint(&self, cli_override: Option<&str>) -> String {
        if let Some(endpoint) = cli_override {
            return endpoint.to_string();
        }
        if let Ok(endpoint) = std::env::var("TRAFFIC_AI_ENDPOINT") {
            if !endpoint.is_empty() {
                return endpoint;
            }
        }
        self.endpoint.clone()
    }

    pub fn set_endpoint(&mut self, endpoint: String) -> Result<()> {
        self.endpoint = endpoint;
        self.save()
    }

    pub fn set_timeout(&mut self, seconds: u64) -> Result<()> {
        self.timeout_seconds = seconds;
        self.save()
    }
}
