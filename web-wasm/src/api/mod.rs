//! /api/analyze クライアントとData URLユーティリティ

mod analyze;

pub use analyze::analyze_image;

/// Data URLからBase64データ部分を抽出
///
/// # Arguments
/// * `data_url` - "data:image/jpeg;base64,/9j/4AAQ..." 形式のData URL
pub fn extract_base64_from_data_url(data_url: &str) -> Option<&str> {
    data_url.split(',').nth(1)
}

/// Data URLからMIMEタイプを抽出（抽出失敗時は "image/jpeg"）
pub fn extract_mime_type_from_data_url(data_url: &str) -> &str {
    data_url
        .split(':')
        .nth(1)
        .and_then(|s| s.split(';').next())
        .unwrap_or("image/jpeg")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_base64_from_data_url_png() {
        let data_url = "data:image/png;base64,iVBORw0KGgo=";
        assert_eq!(extract_base64_from_data_url(data_url), Some("iVBORw0KGgo="));
    }

    #[test]
    fn test_extract_base64_from_data_url_invalid() {
        assert_eq!(extract_base64_from_data_url("not a data url"), None);
        assert_eq!(extract_base64_from_data_url(""), None);
    }

    #[test]
    fn test_extract_mime_type_jpeg() {
        let data_url = "data:image/jpeg;base64,/9j/4AAQ";
        assert_eq!(extract_mime_type_from_data_url(data_url), "image/jpeg");
    }

    #[test]
    fn test_extract_mime_type_webp() {
        let data_url = "data:image/webp;base64,UklGR";
        assert_eq!(extract_mime_type_from_data_url(data_url), "image/webp");
    }

    #[test]
    fn test_extract_mime_type_default() {
        // 不正なフォーマットの場合はデフォルト値を返す
        assert_eq!(extract_mime_type_from_data_url("invalid"), "image/jpeg");
    }
}
