//! # 数据源与中间模型
//!
//! ## 设计思路
//!
//! 将“加载后的源图”和“编码后的素材”解耦：
//! - `SourceImage` 表示已转换为 RGBA 的规范工作副本
//! - `DerivedAsset` 表示可直接落盘的编码字节

use image::{DynamicImage, RgbaImage};

use super::AssetKind;

/// 加载阶段输出：RGBA 源图。
///
/// 加载后不再修改，各类素材都从同一份只读副本派生。
pub struct SourceImage {
    pub(crate) rgba: RgbaImage,
    /// 解码前的原始像素格式是否带 alpha（用于日志与诊断）。
    pub(crate) had_alpha: bool,
}

impl SourceImage {
    /// 从已解码图像构建，非 RGBA 格式会被转换。
    pub fn from_dynamic(image: DynamicImage) -> Self {
        let had_alpha = image.color().has_alpha();
        let rgba = match image {
            DynamicImage::ImageRgba8(rgba) => rgba,
            other => other.to_rgba8(),
        };
        Self { rgba, had_alpha }
    }

    pub fn width(&self) -> u32 {
        self.rgba.width()
    }

    pub fn height(&self) -> u32 {
        self.rgba.height()
    }

    pub fn had_alpha(&self) -> bool {
        self.had_alpha
    }

    pub fn as_rgba(&self) -> &RgbaImage {
        &self.rgba
    }
}

/// 输出容器格式。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetFormat {
    /// 多分辨率 ICO 容器。
    Ico,
    /// 单帧 PNG。
    Png,
}

/// 编码阶段输出：某类素材的最终字节。
pub struct DerivedAsset {
    pub kind: AssetKind,
    /// 像素宽度（favicon 为最大帧）。
    pub width: u32,
    /// 像素高度（favicon 为最大帧）。
    pub height: u32,
    pub format: AssetFormat,
    pub bytes: Vec<u8>,
}
