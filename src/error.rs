//! 统一错误类型模块
//!
//! # 设计思路
//!
//! 命令行入口同时会遇到图片来源错误与输出文件的 I/O 错误，
//! 定义 `AppError` 汇总两者，`main` 只需一个 `?`。
//!
//! # 实现思路
//!
//! - 使用 `thiserror` 派生可读错误消息。
//! - 为 `ImageError` 与 `std::io::Error` 提供 `From` 转换，无需手动 map。

use crate::image_source::ImageError;

/// 应用级统一错误类型
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// 图片来源识别或读取失败
    #[error("{0}")]
    Image(#[from] ImageError),

    /// 读取图片流或写出结果失败
    #[error("文件系统错误: {0}")]
    Io(#[from] std::io::Error),
}
