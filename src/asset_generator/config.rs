//! # 配置模块
//!
//! ## 设计思路
//!
//! 将源路径、两个输出目录与资源上限集中到 `GeneratorConfig`，
//! 替代脚本里写死的绝对路径，保证运行时行为可观测、可测试。
//! 四类素材的尺寸与文件名是固定表，由 `AssetKind` 承载，不开放配置。
//!
//! ## 实现思路
//!
//! - `Default` 提供与仓库目录结构一致的相对路径。
//! - `destinations` 把素材类型映射为两个目标文件路径（素材目录 + 应用目录）。
//! - 尺寸常量与 OpenGraph 画布参数集中在本文件顶部。

use std::path::PathBuf;

use image::Rgba;
use image::imageops::FilterType;

/// favicon 内嵌的各帧边长。
pub const FAVICON_SIZES: [u32; 3] = [16, 32, 48];
/// Apple touch icon 边长。
pub const APPLE_TOUCH_ICON_SIZE: u32 = 180;
/// Web / manifest 图标边长。
pub const WEB_ICON_SIZE: u32 = 192;
/// OpenGraph 画布宽度。
pub const OG_CANVAS_WIDTH: u32 = 1200;
/// OpenGraph 画布高度。
pub const OG_CANVAS_HEIGHT: u32 = 630;
/// OpenGraph 画布上图标的固定高度。
pub const OG_ICON_HEIGHT: u32 = 400;
/// OpenGraph 画布背景色（不透明白）。
pub const OG_BACKGROUND: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// 素材生成配置。
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// 源图标路径。
    pub source_path: PathBuf,
    /// 素材源目录（带 `linkmap_` 前缀的文件名）。
    pub icon_dir: PathBuf,
    /// 应用静态资源目录（框架约定的文件名）。
    pub app_dir: PathBuf,
    /// 缩放滤镜。
    pub resize_filter: FilterType,
    /// 读取源文件时允许的最大体积（字节）。
    pub max_file_size: u64,
    /// 解码前按 header 校验的像素上限（`width * height`）。
    pub max_decoded_pixels: u64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            source_path: PathBuf::from("img/linkmap icon.png"),
            icon_dir: PathBuf::from("img"),
            app_dir: PathBuf::from("src/app"),
            resize_filter: FilterType::Lanczos3,
            max_file_size: 50 * 1024 * 1024,
            max_decoded_pixels: 40_000_000,
        }
    }
}

impl GeneratorConfig {
    /// 以指定源路径与输出目录构建配置，其余字段取默认值。
    pub fn with_paths(
        source_path: impl Into<PathBuf>,
        icon_dir: impl Into<PathBuf>,
        app_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            source_path: source_path.into(),
            icon_dir: icon_dir.into(),
            app_dir: app_dir.into(),
            ..Self::default()
        }
    }

    /// 某类素材的两个目标文件路径：`[素材目录, 应用目录]`。
    pub fn destinations(&self, kind: AssetKind) -> [PathBuf; 2] {
        let (icon_name, app_name) = kind.file_names();
        [self.icon_dir.join(icon_name), self.app_dir.join(app_name)]
    }
}

/// 素材类型，按固定顺序处理。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    Favicon,
    AppleTouchIcon,
    WebIcon,
    OpenGraph,
}

impl AssetKind {
    /// 全部素材类型（处理顺序）。
    pub const ALL: [AssetKind; 4] = [
        AssetKind::Favicon,
        AssetKind::AppleTouchIcon,
        AssetKind::WebIcon,
        AssetKind::OpenGraph,
    ];

    /// 稳定字符串，用于日志与报告。
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Favicon => "favicon",
            Self::AppleTouchIcon => "apple-touch-icon",
            Self::WebIcon => "web-icon",
            Self::OpenGraph => "opengraph",
        }
    }

    /// `(素材目录文件名, 应用目录文件名)`
    pub fn file_names(self) -> (&'static str, &'static str) {
        match self {
            Self::Favicon => ("linkmap_favicon.ico", "favicon.ico"),
            Self::AppleTouchIcon => ("linkmap_apple_icon.png", "apple-icon.png"),
            Self::WebIcon => ("linkmap_web_icon.png", "icon.png"),
            Self::OpenGraph => ("linkmap_og_image.png", "opengraph-image.png"),
        }
    }

    /// 输出图像的像素尺寸。
    ///
    /// favicon 返回最大的一帧。
    pub fn target_size(self) -> (u32, u32) {
        match self {
            Self::Favicon => (FAVICON_SIZES[2], FAVICON_SIZES[2]),
            Self::AppleTouchIcon => (APPLE_TOUCH_ICON_SIZE, APPLE_TOUCH_ICON_SIZE),
            Self::WebIcon => (WEB_ICON_SIZE, WEB_ICON_SIZE),
            Self::OpenGraph => (OG_CANVAS_WIDTH, OG_CANVAS_HEIGHT),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn destinations_split_between_icon_and_app_dirs() {
        let config = GeneratorConfig::with_paths("in.png", "out/img", "out/app");
        let [icon, app] = config.destinations(AssetKind::OpenGraph);

        assert_eq!(icon, Path::new("out/img/linkmap_og_image.png"));
        assert_eq!(app, Path::new("out/app/opengraph-image.png"));
    }

    #[test]
    fn every_kind_has_distinct_file_names() {
        let mut names: Vec<&str> = AssetKind::ALL
            .iter()
            .flat_map(|kind| {
                let (a, b) = kind.file_names();
                [a, b]
            })
            .collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 8);
    }

    #[test]
    fn default_uses_lanczos3() {
        let config = GeneratorConfig::default();
        assert!(matches!(config.resize_filter, FilterType::Lanczos3));
        assert_eq!(config.source_path, Path::new("img/linkmap icon.png"));
    }
}
