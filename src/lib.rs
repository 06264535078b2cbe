//! Traffic AI Analyzer CLI
//!
//! 交通画像を解析エンドポイント（POST /api/analyze）へ送信し、
//! 返ってきたメトリクスをターミナルに描画する

pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod output;
pub mod scanner;
