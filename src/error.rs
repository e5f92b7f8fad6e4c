//! 统一错误类型模块
//!
//! # 设计思路
//!
//! 二进制入口只面对一个 `AppError`，素材链路的 `AssetError`、
//! 设置文件解析与 I/O 错误都通过 `From` 上转，无需手动 map。

use crate::asset_generator::AssetError;

/// 应用级统一错误类型
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// 素材生成链路错误（加载 / 缩放 / 编码 / 写入）
    #[error("{0}")]
    Asset(#[from] AssetError),

    /// 文件系统 I/O 错误
    #[error("文件系统错误: {0}")]
    Io(#[from] std::io::Error),

    /// 设置文件不可用
    #[error("设置错误: {0}")]
    Settings(String),
}
