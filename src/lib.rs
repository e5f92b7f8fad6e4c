//! # 站点图标素材生成工具 — 库入口
//!
//! 从一张源图标生成 favicon、apple touch icon、web icon 与 OpenGraph 预览图，
//! 每类素材同时写入素材目录与应用静态资源目录。
//!
//! ## 模块职责
//!
//! | 模块 | 职责 |
//! |------|------|
//! | [`error`] | 统一错误类型 `AppError`，二进制入口的返回类型 |
//! | [`asset_generator`] | 源图加载、缩放合成、编码与落盘 |
//! | [`settings`] | 可选的 `asset-generator.json` 设置文件 |

pub mod error;
pub mod asset_generator;
pub mod settings;
