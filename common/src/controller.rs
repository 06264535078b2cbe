//! アップロード/解析コントローラの状態機械
//!
//! 画面側の対話状態をすべてこの型に集約する。DOM要素への参照は持たず、
//! UIモードはフィールドから導出する（独立して保持しない）。
//!
//! 遷移:
//! idle --画像受理--> ready --解析開始--> loading --成功--> result
//!                                               --失敗--> error
//! result/error --画像受理--> ready。loading を抜ける遷移は成功か失敗のみ。

use crate::types::AnalysisResult;

/// UIモード（導出状態）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMode {
    Idle,
    Ready,
    Loading,
    Error,
    Result,
}

/// 選択中の画像
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedImage {
    pub file_name: String,
    /// 選択元が宣言したMIMEタイプ
    pub mime_type: String,
    /// プレビュー表示用のData URL
    pub data_url: String,
}

impl SelectedImage {
    /// 宣言されたMIMEタイプが画像かどうか
    pub fn is_image_mime(mime: &str) -> bool {
        mime.starts_with("image/")
    }
}

/// アップロード/解析コントローラ
///
/// リクエストの多重発行は in_flight フラグで構造的に防ぐ。
/// ボタンの無効化は見た目の補助であって排他の根拠ではない。
#[derive(Debug, Clone, Default)]
pub struct UploadController {
    image: Option<SelectedImage>,
    in_flight: bool,
    error: Option<String>,
    result: Option<AnalysisResult>,
}

impl UploadController {
    pub fn new() -> Self {
        Self::default()
    }

    /// 現在のUIモード
    pub fn mode(&self) -> UiMode {
        if self.in_flight {
            UiMode::Loading
        } else if self.error.is_some() {
            UiMode::Error
        } else if self.result.is_some() {
            UiMode::Result
        } else if self.image.is_some() {
            UiMode::Ready
        } else {
            UiMode::Idle
        }
    }

    pub fn image(&self) -> Option<&SelectedImage> {
        self.image.as_ref()
    }

    pub fn error_text(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn result(&self) -> Option<&AnalysisResult> {
        self.result.as_ref()
    }

    /// 画像を受理する
    ///
    /// 非画像MIMEは黙って無視し false を返す（状態は変わらない）。
    /// 受理時は保持中の画像を置き換え、以前のエラー・結果をクリアして
    /// ready に遷移する。リクエスト飛行中は受理しない。
    pub fn accept_file(&mut self, image: SelectedImage) -> bool {
        if self.in_flight || !SelectedImage::is_image_mime(&image.mime_type) {
            return false;
        }
        self.image = Some(image);
        self.error = None;
        self.result = None;
        true
    }

    /// 解析を開始する
    ///
    /// 画像未選択または既に飛行中なら None（no-op）。開始時はエラー・結果を
    /// クリアして loading に入り、アップロード対象の画像を返す。
    pub fn begin_analysis(&mut self) -> Option<SelectedImage> {
        if self.in_flight {
            return None;
        }
        let image = self.image.clone()?;
        self.in_flight = true;
        self.error = None;
        self.result = None;
        Some(image)
    }

    /// 解析成功。loading を抜けて result へ
    pub fn finish_success(&mut self, result: AnalysisResult) {
        if !self.in_flight {
            // 迷子の完了通知は捨てる
            return;
        }
        self.in_flight = false;
        self.result = Some(result);
    }

    /// 解析失敗。loading を抜けて error へ
    pub fn finish_error(&mut self, message: impl Into<String>) {
        if !self.in_flight {
            return;
        }
        self.in_flight = false;
        self.error = Some(message.into());
    }
}
