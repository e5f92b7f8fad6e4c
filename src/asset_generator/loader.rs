//! # 源图加载模块
//!
//! ## 设计思路
//!
//! 源图是整条链路唯一的输入，任何一步失败都直接终止本次生成，不产生输出文件。
//! 先做存在性、体积、文件签名与 header 尺寸检查，再进行完整解码，
//! 降低损坏或超大输入触发高内存开销的风险。
//!
//! ## 实现思路
//!
//! 1. 路径不存在 → `MissingSource`
//! 2. 按 metadata 体积快速拒绝
//! 3. 读取字节，magic bytes 明确识别为非图片时拒绝
//! 4. 由 `image` 识别格式并读取 header 尺寸，按像素上限拒绝
//! 5. 完整解码并转换为 RGBA

use std::io::Cursor;
use std::path::Path;

use image::ImageReader;

use super::source::SourceImage;
use super::{AssetError, AssetGenerator, GeneratorConfig};

impl AssetGenerator {
    /// 从本地路径加载源图标。
    pub fn load_source(path: &Path, config: &GeneratorConfig) -> Result<SourceImage, AssetError> {
        log::info!("📁 开始读取源图标 - 路径: {}", path.display());

        if !path.exists() {
            return Err(AssetError::MissingSource(path.to_path_buf()));
        }

        let metadata = std::fs::metadata(path)
            .map_err(|e| AssetError::FileSystem(format!("无法读取文件信息：{}", e)))?;

        if metadata.len() > config.max_file_size {
            return Err(AssetError::ResourceLimit(format!(
                "文件过大：{:.2} MB（限制：{:.2} MB）",
                metadata.len() as f64 / 1024.0 / 1024.0,
                config.max_file_size as f64 / 1024.0 / 1024.0
            )));
        }

        let bytes = std::fs::read(path)
            .map_err(|e| AssetError::FileSystem(format!("无法读取图片文件：{}", e)))?;
        Self::validate_image_signature(&bytes)?;

        let (header_width, header_height) = Self::inspect_dimensions_from_memory(&bytes)?;
        Self::validate_pixel_limits(config, header_width, header_height)?;

        let decoded = image::load_from_memory(&bytes)
            .map_err(|e| AssetError::Decode(format!("图片解码失败：{}", e)))?;
        let color = decoded.color();

        let source = SourceImage::from_dynamic(decoded);
        if source.width() == 0 || source.height() == 0 {
            return Err(AssetError::Decode(format!(
                "源图尺寸无效：{}x{}",
                source.width(),
                source.height()
            )));
        }

        log::info!(
            "✅ 源图标解码成功 - 尺寸: {}x{} 像素格式: {:?}{}",
            source.width(),
            source.height(),
            color,
            if source.had_alpha() { "" } else { "（已转换为 RGBA）" }
        );

        Ok(source)
    }

    /// 通过文件签名（magic bytes）拒绝明确不是图片的输入。
    ///
    /// `infer` 不认识的签名（如 PNM）放行，交给 `image` 的格式识别判断。
    fn validate_image_signature(bytes: &[u8]) -> Result<(), AssetError> {
        if bytes.is_empty() {
            return Err(AssetError::InvalidFormat("图片内容为空".to_string()));
        }

        let Some(kind) = infer::get(bytes) else {
            log::debug!("文件签名未被 infer 识别，交由 image 判断格式");
            return Ok(());
        };

        if kind.matcher_type() != infer::MatcherType::Image {
            return Err(AssetError::InvalidFormat(format!(
                "文件签名不是图片类型：{}",
                kind.mime_type()
            )));
        }

        Ok(())
    }

    /// 仅通过内存中的图片头信息读取宽高。
    fn inspect_dimensions_from_memory(bytes: &[u8]) -> Result<(u32, u32), AssetError> {
        let reader = ImageReader::new(Cursor::new(bytes))
            .with_guessed_format()
            .map_err(|e| AssetError::InvalidFormat(format!("无法识别图片格式：{}", e)))?;

        reader
            .into_dimensions()
            .map_err(|e| AssetError::InvalidFormat(format!("无法读取图片尺寸：{}", e)))
    }

    fn validate_pixel_limits(
        config: &GeneratorConfig,
        width: u32,
        height: u32,
    ) -> Result<(), AssetError> {
        let pixels = (width as u64)
            .checked_mul(height as u64)
            .ok_or_else(|| AssetError::ResourceLimit("图片像素数溢出".to_string()))?;

        if pixels > config.max_decoded_pixels {
            return Err(AssetError::ResourceLimit(format!(
                "图片像素过大：{} 像素（限制：{} 像素）",
                pixels, config.max_decoded_pixels
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, ImageBuffer, ImageFormat, Rgb};

    fn write_rgb_png(path: &Path, width: u32, height: u32) {
        let img = ImageBuffer::from_fn(width, height, |x, y| Rgb([(x % 255) as u8, (y % 255) as u8, 90]));
        DynamicImage::ImageRgb8(img)
            .save_with_format(path, ImageFormat::Png)
            .expect("failed to write test png");
    }

    #[test]
    fn missing_source_reports_path() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nope.png");

        let result = AssetGenerator::load_source(&path, &GeneratorConfig::default());

        match result {
            Err(AssetError::MissingSource(missing)) => assert_eq!(missing, path),
            other => panic!("expected MissingSource, got {:?}", other.err()),
        }
    }

    #[test]
    fn rgb_source_is_converted_to_rgba() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("rgb.png");
        write_rgb_png(&path, 40, 20);

        let source = AssetGenerator::load_source(&path, &GeneratorConfig::default())
            .expect("rgb source should load");

        assert!(!source.had_alpha());
        assert_eq!((source.width(), source.height()), (40, 20));
        assert_eq!(source.as_rgba().get_pixel(0, 0).0[3], 255);
    }

    #[test]
    fn text_file_is_rejected_as_unknown_format() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("fake.png");
        std::fs::write(&path, b"definitely not an image").expect("write");

        let result = AssetGenerator::load_source(&path, &GeneratorConfig::default());
        assert!(matches!(result, Err(AssetError::InvalidFormat(_))));
    }

    #[test]
    fn zip_archive_is_rejected_by_signature() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("icon.png");
        std::fs::write(&path, b"PK\x03\x04\x14\x00\x00\x00\x08\x00").expect("write");

        let result = AssetGenerator::load_source(&path, &GeneratorConfig::default());
        assert!(matches!(result, Err(AssetError::InvalidFormat(_))));
    }

    #[test]
    fn pnm_source_unknown_to_infer_still_loads() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("icon.ppm");
        let img = ImageBuffer::from_fn(24, 12, |x, _| Rgb([(x * 10) as u8, 40, 200]));
        DynamicImage::ImageRgb8(img)
            .save_with_format(&path, ImageFormat::Pnm)
            .expect("failed to write test ppm");

        let source = AssetGenerator::load_source(&path, &GeneratorConfig::default())
            .expect("ppm source should load");

        assert_eq!((source.width(), source.height()), (24, 12));
        assert!(!source.had_alpha());
    }

    #[test]
    fn truncated_png_fails_to_decode() {
        let dir = tempfile::tempdir().expect("tempdir");
        let full = dir.path().join("full.png");
        write_rgb_png(&full, 64, 64);
        let bytes = std::fs::read(&full).expect("read");

        let truncated = dir.path().join("truncated.png");
        std::fs::write(&truncated, &bytes[..bytes.len() / 2]).expect("write");

        let result = AssetGenerator::load_source(&truncated, &GeneratorConfig::default());
        assert!(matches!(result, Err(AssetError::Decode(_))));
    }

    #[test]
    fn rejects_too_many_pixels_before_decode() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("big.png");
        write_rgb_png(&path, 200, 200);

        let mut config = GeneratorConfig::default();
        config.max_decoded_pixels = 10_000;

        let result = AssetGenerator::load_source(&path, &config);
        assert!(matches!(result, Err(AssetError::ResourceLimit(_))));
    }

    #[test]
    fn rejects_oversized_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("src.png");
        write_rgb_png(&path, 32, 32);

        let mut config = GeneratorConfig::default();
        config.max_file_size = 16;

        let result = AssetGenerator::load_source(&path, &config);
        assert!(matches!(result, Err(AssetError::ResourceLimit(_))));
    }
}
