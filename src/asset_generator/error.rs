//! # 错误模型模块
//!
//! ## 设计思路
//!
//! 使用单一错误枚举承载素材生成链路中的所有错误来源，避免字符串拼接式错误处理。
//! 通过 `thiserror` 保持人类可读错误，同时让调用侧可按分支匹配。

use std::path::PathBuf;

/// 素材生成统一错误类型。
///
/// 该类型会在二进制入口被上转为 `AppError`。
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("源图片不存在：{}", .0.display())]
    MissingSource(PathBuf),

    #[error("格式错误：{0}")]
    InvalidFormat(String),

    #[error("解码错误：{0}")]
    Decode(String),

    #[error("资源限制：{0}")]
    ResourceLimit(String),

    #[error("缩放错误：{0}")]
    Resize(String),

    #[error("编码错误：{0}")]
    Encode(String),

    #[error("文件错误：{0}")]
    FileSystem(String),
}

impl From<AssetError> for String {
    /// 报告中按字符串记录单项失败原因。
    fn from(error: AssetError) -> Self {
        error.to_string()
    }
}
