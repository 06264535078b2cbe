//! Traffic AI Common Library
//!
//! CLIとWeb(WASM)で共有される型とロジック

pub mod animation;
pub mod controller;
pub mod error;
pub mod parser;
pub mod types;
pub mod view;

pub use animation::{ease_out_cubic, CounterAnimation, CounterFrame, COUNTER_DURATION_MS};
pub use controller::{SelectedImage, UiMode, UploadController};
pub use error::{Error, Result};
pub use parser::{error_message, parse_analysis_response};
pub use types::{AnalysisResult, ErrorBody, SystemStatus, VehicleBreakdown};
pub use view::{ResultView, StatusBadge};
