//! # 核心编排模块
//!
//! ## 设计思路
//!
//! `AssetGenerator` 只负责流程编排，不关心配置从哪里来。
//! 处理链路固定为：
//! 1. 加载源图（失败则整体终止，不产生任何输出）
//! 2. 按 `AssetKind::ALL` 顺序逐类渲染
//! 3. 每类写入两个目标路径
//!
//! ## 实现思路
//!
//! - 每类素材独立成功/失败，结果汇总到 `GenerationReport`。
//! - 记录 `load/render/write/total` 阶段耗时，便于排查慢步骤。

use std::path::PathBuf;
use std::time::Instant;

use super::report::GenerationReport;
use super::source::SourceImage;
use super::{AssetError, AssetKind, GeneratorConfig};

/// 素材生成器。
pub struct AssetGenerator {
    pub(super) config: GeneratorConfig,
}

impl AssetGenerator {
    /// # 示例
    /// ```rust,ignore
    /// use linkmap_assets::asset_generator::{AssetGenerator, GeneratorConfig};
    ///
    /// let generator = AssetGenerator::new(GeneratorConfig::default());
    /// let report = generator.generate()?;
    /// assert!(report.is_success());
    /// # Ok::<(), linkmap_assets::asset_generator::AssetError>(())
    /// ```
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// 处理主入口：加载源图并生成全部素材。
    ///
    /// 源图加载失败返回 `Err`；单类素材失败只记录在报告中。
    pub fn generate(&self) -> Result<GenerationReport, AssetError> {
        let total_start = Instant::now();

        let load_start = Instant::now();
        let source = Self::load_source(&self.config.source_path, &self.config)?;
        let load_elapsed = load_start.elapsed();

        let mut report = GenerationReport::default();
        for kind in AssetKind::ALL {
            match self.generate_kind(&source, kind) {
                Ok(paths) => {
                    log::info!(
                        "✅ 已生成 {} - {}",
                        kind.as_str(),
                        paths
                            .iter()
                            .map(|p| p.display().to_string())
                            .collect::<Vec<_>>()
                            .join(" , ")
                    );
                    report.push(kind, Ok(paths));
                }
                Err(err) => {
                    log::error!("❌ 生成 {} 失败：{}", kind.as_str(), err);
                    report.push(kind, Err(err.into()));
                }
            }
        }

        log::info!(
            "📦 素材生成结束 - 成功 {}/{} load={}ms total={}ms",
            report.outcomes.iter().filter(|o| o.is_success()).count(),
            report.outcomes.len(),
            load_elapsed.as_millis(),
            total_start.elapsed().as_millis()
        );

        Ok(report)
    }

    /// 渲染并写入单类素材。
    pub fn generate_kind(
        &self,
        source: &SourceImage,
        kind: AssetKind,
    ) -> Result<Vec<PathBuf>, AssetError> {
        let render_start = Instant::now();
        let asset = Self::render(source, kind, &self.config)?;
        let render_elapsed = render_start.elapsed();

        let write_start = Instant::now();
        let written = Self::write_asset(&asset, &self.config.destinations(kind))?;

        log::debug!(
            "⏱️ {} {}x{} render={}ms write={}ms",
            kind.as_str(),
            asset.width,
            asset.height,
            render_elapsed.as_millis(),
            write_start.elapsed().as_millis()
        );

        Ok(written)
    }
}
