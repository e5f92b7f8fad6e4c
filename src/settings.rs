//! 生成器设置文件模块
//!
//! # 设计思路
//!
//! 工作目录下可选的 `asset-generator.json` 用于覆盖默认路径与资源上限；
//! 文件不存在时直接使用 `GeneratorConfig::default()`。
//!
//! # 实现思路
//!
//! - 所有字段均可缺省，只覆盖出现的字段。
//! - 未知字段直接报错，避免拼写错误被静默忽略。

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::asset_generator::GeneratorConfig;
use crate::error::AppError;

/// 默认设置文件名（相对工作目录）。
pub const SETTINGS_FILE_NAME: &str = "asset-generator.json";

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeneratorSettings {
    pub source_path: Option<PathBuf>,
    pub icon_dir: Option<PathBuf>,
    pub app_dir: Option<PathBuf>,
    pub max_file_size: Option<u64>,
    pub max_decoded_pixels: Option<u64>,
}

impl GeneratorSettings {
    /// 将出现的字段覆盖到配置上。
    pub fn apply_to(self, config: &mut GeneratorConfig) {
        if let Some(source_path) = self.source_path {
            config.source_path = source_path;
        }
        if let Some(icon_dir) = self.icon_dir {
            config.icon_dir = icon_dir;
        }
        if let Some(app_dir) = self.app_dir {
            config.app_dir = app_dir;
        }
        if let Some(max_file_size) = self.max_file_size {
            config.max_file_size = max_file_size;
        }
        if let Some(max_decoded_pixels) = self.max_decoded_pixels {
            config.max_decoded_pixels = max_decoded_pixels;
        }
    }
}

/// 读取设置文件，文件不存在时返回 `Ok(None)`。
pub fn read_settings(path: &Path) -> Result<Option<GeneratorSettings>, AppError> {
    if !path.exists() {
        return Ok(None);
    }

    let content = fs::read_to_string(path)?;
    let parsed = serde_json::from_str::<GeneratorSettings>(&content)
        .map_err(|e| AppError::Settings(format!("解析设置文件 '{}' 失败: {}", path.display(), e)))?;

    Ok(Some(parsed))
}

/// 默认配置叠加可选设置文件。
pub fn load_config(path: &Path) -> Result<GeneratorConfig, AppError> {
    let mut config = GeneratorConfig::default();
    match read_settings(path)? {
        Some(settings) => {
            log::info!("⚙️ 已加载设置文件: {}", path.display());
            settings.apply_to(&mut config);
        }
        None => log::debug!("未找到设置文件 {}，使用默认配置", path.display()),
    }
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let config = load_config(&dir.path().join(SETTINGS_FILE_NAME)).expect("defaults");

        assert_eq!(config.icon_dir, PathBuf::from("img"));
        assert_eq!(config.app_dir, PathBuf::from("src/app"));
    }

    #[test]
    fn partial_settings_override_only_present_fields() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(SETTINGS_FILE_NAME);
        fs::write(&path, r#"{ "source_path": "art/logo.png", "max_decoded_pixels": 1000 }"#).expect("write");

        let config = load_config(&path).expect("settings parse");

        assert_eq!(config.source_path, PathBuf::from("art/logo.png"));
        assert_eq!(config.max_decoded_pixels, 1000);
        assert_eq!(config.icon_dir, PathBuf::from("img"));
    }

    #[test]
    fn unknown_field_is_rejected() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(SETTINGS_FILE_NAME);
        fs::write(&path, r#"{ "icon_dirr": "x" }"#).expect("write");

        assert!(matches!(load_config(&path), Err(AppError::Settings(_))));
    }
}
