//! 解析リクエスト
//!
//! 選択中の画像を multipart/form-data（file フィールド1つ）で
//! POST /api/analyze に送る。サーバー報告の失敗も転送層の失敗も、
//! 画面にそのまま出せる1本のメッセージ文字列に落とす。

use base64::Engine;
use js_sys::Uint8Array;
use traffic_ai_common::{error_message, parse_analysis_response, AnalysisResult, SelectedImage};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Blob, BlobPropertyBag, FormData, Request, RequestInit, Response};

use super::{extract_base64_from_data_url, extract_mime_type_from_data_url};

const ANALYZE_URL: &str = "/api/analyze";

/// 画像を解析エンドポイントへ送る
///
/// タイムアウトもキャンセルも行わない。リクエストは解決するか
/// 拒否されるまで待つだけ。
pub async fn analyze_image(image: &SelectedImage) -> Result<AnalysisResult, String> {
    let form = build_form(image)?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_body(form.as_ref());

    let request = Request::new_with_str_and_init(ANALYZE_URL, &opts).map_err(js_error)?;

    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_error)?;
    let resp: Response = resp_value.dyn_into().map_err(js_error)?;

    let status = resp.status();
    let body = JsFuture::from(resp.text().map_err(js_error)?)
        .await
        .map_err(js_error)?
        .as_string()
        .unwrap_or_default();

    if !resp.ok() {
        return Err(error_message(status, &body));
    }

    parse_analysis_response(&body).map_err(|e| e.to_string())
}

/// Data URLをバイト列へ戻してフォームを組む
fn build_form(image: &SelectedImage) -> Result<FormData, String> {
    let encoded = extract_base64_from_data_url(&image.data_url)
        .ok_or_else(|| "Invalid data URL".to_string())?;
    let bytes = base64::engine::general_purpose::STANDARD
        .decode(encoded)
        .map_err(|e| e.to_string())?;

    let mime_type = extract_mime_type_from_data_url(&image.data_url);
    let array = Uint8Array::from(bytes.as_slice());
    let parts = js_sys::Array::of1(&array);
    let options = BlobPropertyBag::new();
    options.set_type(mime_type);
    let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &options).map_err(js_error)?;

    let form = FormData::new().map_err(js_error)?;
    form.append_with_blob_and_filename("file", &blob, &image.file_name)
        .map_err(js_error)?;
    Ok(form)
}

fn js_error(value: JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}
