//! # 落盘模块
//!
//! 将编码好的素材字节依次写入各目标路径，父目录不存在时自动创建。
//! 同一份字节写两次，保证两个目录中的文件逐字节一致。

use std::fs;
use std::path::PathBuf;

use super::source::DerivedAsset;
use super::{AssetError, AssetGenerator};

impl AssetGenerator {
    /// 写入所有目标路径，返回已写入的路径。
    ///
    /// 中途失败时已写入的文件保留在磁盘上，不做回滚。
    pub fn write_asset(
        asset: &DerivedAsset,
        destinations: &[PathBuf],
    ) -> Result<Vec<PathBuf>, AssetError> {
        let mut written = Vec::with_capacity(destinations.len());

        for path in destinations {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() && !parent.exists() {
                    fs::create_dir_all(parent).map_err(|e| {
                        AssetError::FileSystem(format!("创建目录 '{}' 失败：{}", parent.display(), e))
                    })?;
                }
            }

            fs::write(path, &asset.bytes).map_err(|e| {
                AssetError::FileSystem(format!("写入 '{}' 失败：{}", path.display(), e))
            })?;

            log::debug!(
                "💾 已写入 {} - {} ({} bytes)",
                asset.kind.as_str(),
                path.display(),
                asset.bytes.len()
            );
            written.push(path.clone());
        }

        Ok(written)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::asset_generator::AssetKind;
    use crate::asset_generator::source::AssetFormat;

    fn sample_asset() -> DerivedAsset {
        DerivedAsset {
            kind: AssetKind::WebIcon,
            width: 192,
            height: 192,
            format: AssetFormat::Png,
            bytes: vec![1, 2, 3, 4],
        }
    }

    #[test]
    fn creates_missing_directories_and_writes_identical_bytes() {
        let dir = tempfile::tempdir().expect("tempdir");
        let targets = vec![
            dir.path().join("img").join("linkmap_web_icon.png"),
            dir.path().join("src").join("app").join("icon.png"),
        ];

        let written = AssetGenerator::write_asset(&sample_asset(), &targets).expect("write should succeed");

        assert_eq!(written, targets);
        for path in &targets {
            assert_eq!(fs::read(path).expect("read back"), vec![1, 2, 3, 4]);
        }
    }

    #[test]
    fn keeps_earlier_file_when_later_destination_fails() {
        let dir = tempfile::tempdir().expect("tempdir");
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, b"file, not a dir").expect("write blocker");

        let first = dir.path().join("ok.png");
        let targets = vec![first.clone(), blocker.join("icon.png")];

        let result = AssetGenerator::write_asset(&sample_asset(), &targets);

        assert!(matches!(result, Err(AssetError::FileSystem(_))));
        assert!(first.exists());
    }
}
