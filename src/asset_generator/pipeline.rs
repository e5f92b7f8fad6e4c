//! # 缩放与编码流水线模块
//!
//! ## 设计思路
//!
//! 每类素材都由同一份只读 RGBA 源图派生，彼此之间不共享中间结果。
//! 缩放优先走 `fast_image_resize`，失败时回退到 `image` 自带的 `resize`，
//! 两条路径都是确定性的，重复运行得到逐字节一致的输出。
//!
//! ## 实现思路
//!
//! - favicon：逐帧缩放为 16/32/48，编码为 PNG 帧后写入同一个 ICO 容器
//! - apple touch icon / web icon：单次缩放后编码 PNG，保留透明通道
//! - OpenGraph：按高度 400 等比缩放，以图标自身 alpha 混合到 1200x630 白色画布中心

use std::io::Cursor;

use fast_image_resize as fr;
use image::codecs::ico::{IcoEncoder, IcoFrame};
use image::codecs::png::PngEncoder;
use image::imageops::FilterType;
use image::{ExtendedColorType, ImageEncoder, RgbaImage};

use super::config::{
    APPLE_TOUCH_ICON_SIZE, FAVICON_SIZES, OG_BACKGROUND, OG_CANVAS_HEIGHT, OG_CANVAS_WIDTH,
    OG_ICON_HEIGHT, WEB_ICON_SIZE,
};
use super::source::{AssetFormat, DerivedAsset, SourceImage};
use super::{AssetError, AssetGenerator, AssetKind, GeneratorConfig};

/// OpenGraph 图标宽度：`floor(400 * 源宽 / 源高)`，至少 1 像素。
pub fn og_icon_width(source_width: u32, source_height: u32) -> u32 {
    if source_height == 0 {
        return 1;
    }
    let width = OG_ICON_HEIGHT as u64 * source_width as u64 / source_height as u64;
    width.clamp(1, u32::MAX as u64) as u32
}

/// 把长度为 `item` 的对象居中放进长度为 `canvas` 的区域时的起始偏移（向下取整）。
///
/// 对象比画布大时结果为负，超出部分由画布裁剪。
pub fn centered_offset(canvas: u32, item: u32) -> i64 {
    (canvas as i64 - item as i64).div_euclid(2)
}

/// 以 `overlay` 的 alpha 作为蒙版把它贴到不透明画布上。
///
/// 颜色通道按 `src * a + dst * (255 - a)` 混合（四舍五入），画布 alpha 保持不变，
/// 超出画布的部分直接丢弃。
pub(crate) fn paste_with_alpha_mask(canvas: &mut RgbaImage, overlay: &RgbaImage, x: i64, y: i64) {
    let (canvas_width, canvas_height) = (canvas.width() as i64, canvas.height() as i64);

    for (ox, oy, src) in overlay.enumerate_pixels() {
        let cx = x + ox as i64;
        let cy = y + oy as i64;
        if cx < 0 || cy < 0 || cx >= canvas_width || cy >= canvas_height {
            continue;
        }

        let alpha = src.0[3] as u32;
        if alpha == 0 {
            continue;
        }

        let dst = canvas.get_pixel_mut(cx as u32, cy as u32);
        for channel in 0..3 {
            let mixed = src.0[channel] as u32 * alpha + dst.0[channel] as u32 * (255 - alpha);
            dst.0[channel] = ((mixed + 127) / 255) as u8;
        }
    }
}

impl AssetGenerator {
    /// 生成某类素材的编码字节。
    pub fn render(
        source: &SourceImage,
        kind: AssetKind,
        config: &GeneratorConfig,
    ) -> Result<DerivedAsset, AssetError> {
        let filter = config.resize_filter;
        let (width, height) = kind.target_size();
        let (format, bytes) = match kind {
            AssetKind::Favicon => (AssetFormat::Ico, Self::encode_favicon(source, filter)?),
            AssetKind::AppleTouchIcon => {
                let icon = Self::resize_rgba(source.as_rgba(), APPLE_TOUCH_ICON_SIZE, APPLE_TOUCH_ICON_SIZE, filter)?;
                (AssetFormat::Png, Self::encode_png(&icon)?)
            }
            AssetKind::WebIcon => {
                let icon = Self::resize_rgba(source.as_rgba(), WEB_ICON_SIZE, WEB_ICON_SIZE, filter)?;
                (AssetFormat::Png, Self::encode_png(&icon)?)
            }
            AssetKind::OpenGraph => {
                let canvas = Self::compose_open_graph(source, config)?;
                (AssetFormat::Png, Self::encode_png(&canvas)?)
            }
        };

        Ok(DerivedAsset {
            kind,
            width,
            height,
            format,
            bytes,
        })
    }

    /// 多分辨率 favicon：每一帧都直接从源图缩放，避免二次采样。
    fn encode_favicon(source: &SourceImage, filter: FilterType) -> Result<Vec<u8>, AssetError> {
        let mut pngs = Vec::with_capacity(FAVICON_SIZES.len());
        for size in FAVICON_SIZES {
            let frame = Self::resize_rgba(source.as_rgba(), size, size, filter)?;
            pngs.push((size, Self::encode_png(&frame)?));
        }

        let frames = pngs
            .iter()
            .map(|(size, png)| {
                IcoFrame::with_encoded(png.as_slice(), *size, *size, ExtendedColorType::Rgba8)
            })
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| AssetError::Encode(format!("构建 ICO 帧失败：{}", e)))?;

        let mut buffer = Vec::new();
        IcoEncoder::new(Cursor::new(&mut buffer))
            .encode_images(&frames)
            .map_err(|e| AssetError::Encode(format!("ICO 编码失败：{}", e)))?;

        log::debug!("🧩 favicon 帧：{:?}（{} bytes）", FAVICON_SIZES, buffer.len());
        Ok(buffer)
    }

    /// 等比缩放图标并居中混合到不透明白色画布上。
    ///
    /// 缩放后的图标整体先在内存中生成再裁剪，像素数超过 `max_decoded_pixels` 时直接拒绝。
    pub(crate) fn compose_open_graph(
        source: &SourceImage,
        config: &GeneratorConfig,
    ) -> Result<RgbaImage, AssetError> {
        let icon_width = og_icon_width(source.width(), source.height());

        let icon_pixels = icon_width as u64 * OG_ICON_HEIGHT as u64;
        if icon_pixels > config.max_decoded_pixels {
            return Err(AssetError::ResourceLimit(format!(
                "OpenGraph 图标过大：{}x{} = {} 像素（限制：{} 像素），源图宽高比 {}x{} 过于极端",
                icon_width,
                OG_ICON_HEIGHT,
                icon_pixels,
                config.max_decoded_pixels,
                source.width(),
                source.height()
            )));
        }

        let icon = Self::resize_rgba(source.as_rgba(), icon_width, OG_ICON_HEIGHT, config.resize_filter)?;

        let x = centered_offset(OG_CANVAS_WIDTH, icon_width);
        let y = centered_offset(OG_CANVAS_HEIGHT, OG_ICON_HEIGHT);

        if icon_width > OG_CANVAS_WIDTH {
            log::warn!(
                "⚠️ OpenGraph 图标宽度 {} 超出画布宽度 {}，两侧将被裁剪",
                icon_width,
                OG_CANVAS_WIDTH
            );
        }

        let mut canvas = RgbaImage::from_pixel(OG_CANVAS_WIDTH, OG_CANVAS_HEIGHT, OG_BACKGROUND);
        paste_with_alpha_mask(&mut canvas, &icon, x, y);

        log::debug!(
            "🖼️ OpenGraph 合成：图标 {}x{} 偏移 ({}, {})",
            icon_width,
            OG_ICON_HEIGHT,
            x,
            y
        );

        Ok(canvas)
    }

    /// 缩放到精确尺寸，`fast_image_resize` 失败时回退 `image::imageops::resize`。
    pub(crate) fn resize_rgba(
        source: &RgbaImage,
        target_width: u32,
        target_height: u32,
        filter: FilterType,
    ) -> Result<RgbaImage, AssetError> {
        if target_width == 0 || target_height == 0 {
            return Err(AssetError::Resize(format!(
                "目标尺寸无效：{}x{}",
                target_width, target_height
            )));
        }

        match Self::resize_with_fast_image_resize(source, target_width, target_height, filter) {
            Ok(resized) => Ok(resized),
            Err(err) => {
                log::warn!(
                    "⚠️ fast_image_resize 缩放失败，回退 image::imageops::resize：{}",
                    err
                );
                Ok(image::imageops::resize(source, target_width, target_height, filter))
            }
        }
    }

    fn resize_with_fast_image_resize(
        source: &RgbaImage,
        target_width: u32,
        target_height: u32,
        filter: FilterType,
    ) -> Result<RgbaImage, AssetError> {
        let src_image = fr::images::ImageRef::new(
            source.width(),
            source.height(),
            source.as_raw(),
            fr::PixelType::U8x4,
        )
        .map_err(|e| AssetError::Resize(format!("构建源图像缓冲失败：{}", e)))?;

        let mut dst_image = fr::images::Image::new(target_width, target_height, fr::PixelType::U8x4);

        let mut resizer = fr::Resizer::new();
        let options = fr::ResizeOptions::new()
            .resize_alg(fr::ResizeAlg::Convolution(Self::to_fast_filter(filter)));

        resizer
            .resize(&src_image, &mut dst_image, Some(&options))
            .map_err(|e| AssetError::Resize(format!("fast_image_resize 执行失败：{}", e)))?;

        RgbaImage::from_raw(target_width, target_height, dst_image.into_vec())
            .ok_or_else(|| AssetError::Resize("fast_image_resize 输出缓冲长度异常".to_string()))
    }

    fn to_fast_filter(filter: FilterType) -> fr::FilterType {
        match filter {
            FilterType::Nearest => fr::FilterType::Box,
            FilterType::Triangle => fr::FilterType::Bilinear,
            FilterType::CatmullRom => fr::FilterType::CatmullRom,
            FilterType::Gaussian => fr::FilterType::Mitchell,
            FilterType::Lanczos3 => fr::FilterType::Lanczos3,
        }
    }

    pub(crate) fn encode_png(image: &RgbaImage) -> Result<Vec<u8>, AssetError> {
        let mut buffer = Vec::new();
        PngEncoder::new(&mut buffer)
            .write_image(
                image.as_raw(),
                image.width(),
                image.height(),
                ExtendedColorType::Rgba8,
            )
            .map_err(|e| AssetError::Encode(format!("PNG 编码失败：{}", e)))?;
        Ok(buffer)
    }
}
