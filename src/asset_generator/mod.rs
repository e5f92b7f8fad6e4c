//! # 站点图标素材生成模块（asset_generator）
//!
//! ## 设计思路
//!
//! 该模块将“源图加载 → 缩放/合成 → 编码 → 双目录落盘”按职责拆分为多个子模块，
//! 每类素材（favicon / apple touch icon / web icon / OpenGraph）是独立的工作单元。
//!
//! - `config`：源路径、输出目录、资源上限与固定素材表
//! - `loader`：存在性、体积、签名校验与解码
//! - `pipeline`：缩放、ICO 多帧编码、OpenGraph 合成
//! - `writer`：写入两个目标目录
//! - `handler`：编排整条流水线并汇总报告
//! - `error/source/report`：错误、中间数据模型、生成报告
//!
//! ## 新同事快速上手
//!
//! ```text
//! main.rs（读取设置 + 初始化日志）
//!    ↓
//! handler.rs（统一编排 + 阶段耗时日志）
//!    ├─ loader.rs（源图加载 + 校验）
//!    ├─ pipeline.rs（缩放 + 合成 + 编码）
//!    └─ writer.rs（素材目录 / 应用目录）
//!    ↓
//! GenerationReport
//! ```
//!
//! ## 输出一览
//!
//! | 素材 | 尺寸 | 素材目录 | 应用目录 |
//! |------|------|----------|----------|
//! | favicon | 16/32/48 | `linkmap_favicon.ico` | `favicon.ico` |
//! | apple touch icon | 180 | `linkmap_apple_icon.png` | `apple-icon.png` |
//! | web icon | 192 | `linkmap_web_icon.png` | `icon.png` |
//! | OpenGraph | 1200x630 | `linkmap_og_image.png` | `opengraph-image.png` |

mod config;
mod error;
mod handler;
mod loader;
mod pipeline;
mod report;
mod source;
mod writer;

pub use config::{
    APPLE_TOUCH_ICON_SIZE, AssetKind, FAVICON_SIZES, GeneratorConfig, OG_BACKGROUND,
    OG_CANVAS_HEIGHT, OG_CANVAS_WIDTH, OG_ICON_HEIGHT, WEB_ICON_SIZE,
};
pub use error::AssetError;
pub use handler::AssetGenerator;
pub use pipeline::{centered_offset, og_icon_width};
pub use report::{AssetOutcome, GenerationReport};
pub use source::{AssetFormat, DerivedAsset, SourceImage};
