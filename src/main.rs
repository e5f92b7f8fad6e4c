//! # 站点图标素材生成工具 — 应用入口
//!
//! 本文件仅负责日志初始化、读取设置与输出结果。
//! 业务逻辑见 `asset_generator` 模块。

use std::path::Path;
use std::process::ExitCode;

use linkmap_assets::asset_generator::{AssetGenerator, GenerationReport};
use linkmap_assets::error::AppError;
use linkmap_assets::settings;

fn run() -> Result<GenerationReport, AppError> {
    let config = settings::load_config(Path::new(settings::SETTINGS_FILE_NAME))?;
    let report = AssetGenerator::new(config).generate()?;
    Ok(report)
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run() {
        Ok(report) if report.is_success() => ExitCode::SUCCESS,
        Ok(report) => {
            for (kind, message) in report.failures() {
                log::error!("素材 {} 未生成: {}", kind.as_str(), message);
            }
            ExitCode::FAILURE
        }
        Err(err) => {
            log::error!("素材生成终止: {err}");
            ExitCode::FAILURE
        }
    }
}
