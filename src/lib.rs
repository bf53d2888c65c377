//! # lgtm — 图片来源库入口
//!
//! ## 架构总览
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │  lgtm-image (main.rs)   参数解析 + 日志初始化  │
//! └───────────────┬──────────────────────────────┘
//!                 ↓ Result<_, AppError>
//! ┌───────────────┼──────────────────────────────┐
//! │  ┌─ error ──────── AppError（命令行层错误）     │
//! │  └─ image_source ─ 来源识别 + 字节读取          │
//! │      ├─ Local    本地文件                       │
//! │      ├─ Remote   HTTP(S) URL                    │
//! │      └─ Keyword  loremflicker 占位图            │
//! └──────────────────────────────────────────────┘
//! ```
//!
//! ## 模块职责
//!
//! | 模块 | 职责 |
//! |------|------|
//! | [`error`] | 命令行层统一错误类型 `AppError` |
//! | [`image_source`] | 从本地文件 / URL / 关键词获取图片原始字节 |

pub mod error;
pub mod image_source;

pub use image_source::{ImageSource, ImageStream, get_image};
