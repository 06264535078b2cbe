//! UIコンポーネント

pub mod analyze_button;
pub mod error_banner;
pub mod header;
pub mod results_panel;
pub mod upload_area;
