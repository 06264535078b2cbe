use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use traffic_ai_rust::{cli, client, config, error, output, scanner};

use cli::{Cli, Commands};
use client::AnalyzeClient;
use config::Config;
use error::Result;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Analyze { image, output: output_path } => {
            println!("🚦 traffic-ai - 画像解析\n");

            let endpoint = config.resolve_endpoint(cli.endpoint.as_deref());
            if cli.verbose {
                println!("エンドポイント: {}", endpoint);
            }
            let client = AnalyzeClient::new(&endpoint, config.timeout_seconds)?;

            let file_name = image
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_else(|| image.display().to_string());

            let spinner = ProgressBar::new_spinner();
            spinner.set_message("解析中...");
            spinner.enable_steady_tick(std::time::Duration::from_millis(100));
            let outcome = client.analyze_file(&image).await;
            spinner.finish_and_clear();

            let result = outcome?;
            println!("{}", output::render_result(&file_name, &result));

            if let Some(path) = output_path {
                let json = serde_json::to_string_pretty(&result)?;
                std::fs::write(&path, json)?;
                println!("✔ 結果を保存: {}", path.display());
            }
        }

        Commands::Batch { folder, output: output_path } => {
            println!("🚦 traffic-ai - 一括解析\n");

            println!("[1/2] 画像をスキャン中...");
            let images = scanner::scan_folder(&folder)?;
            println!("✔ {}枚の画像を検出\n", images.len());

            if images.is_empty() {
                return Err(error::TrafficAiError::NoImagesFound(
                    folder.display().to_string(),
                ));
            }

            let endpoint = config.resolve_endpoint(cli.endpoint.as_deref());
            if cli.verbose {
                println!("エンドポイント: {}", endpoint);
            }
            let client = AnalyzeClient::new(&endpoint, config.timeout_seconds)?;

            println!("[2/2] 解析中...");
            let progress = ProgressBar::new(images.len() as u64);
            progress.set_style(
                ProgressStyle::with_template("{bar:40} {pos}/{len} {msg}")
                    .unwrap_or_else(|_| ProgressStyle::default_bar()),
            );

            // 同時リクエストは1つまで。1枚ずつ順に送る
            let mut results = Vec::new();
            for info in &images {
                progress.set_message(info.file_name.clone());
                match client.analyze_file(&info.path).await {
                    Ok(result) => results.push((info.file_name.clone(), result)),
                    Err(e) => progress.println(format!("✖ {}: {}", info.file_name, e)),
                }
                progress.inc(1);
            }
            progress.finish_and_clear();

            for (name, result) in &results {
                println!("{}", output::render_batch_line(name, result));
            }
            println!("\n✔ 解析完了: {}/{}枚", results.len(), images.len());

            if let Some(path) = output_path {
                let entries: Vec<serde_json::Value> = results
                    .iter()
                    .map(|(name, result)| {
                        serde_json::json!({ "file_name": name, "result": result })
                    })
                    .collect();
                let json = serde_json::to_string_pretty(&entries)?;
                std::fs::write(&path, json)?;
                println!("✔ 結果を保存: {}", path.display());
            }
        }

        Commands::Config { set_endpoint, set_timeout, show } => {
            let mut config = config;

            if let Some(endpoint) = set_endpoint {
                config.set_endpoint(endpoint)?;
                println!("✔ エンドポイントを設定しました");
            }

            if let Some(seconds) = set_timeout {
                config.set_timeout(seconds)?;
                println!("✔ タイムアウトを設定しました");
            }

            if show {
                println!("設定:");
                println!("  エンドポイント: {}", config.endpoint);
                println!("  タイムアウト: {}秒", config.timeout_seconds);
                println!("  設定ファイル: {}", Config::config_path()?.display());
            }
        }
    }

    Ok(())
}
