//! # 图片来源模块（image_source）
//!
//! ## 设计思路
//!
//! 该模块把“输入字符串 → 图片字节”拆成两步：先识别来源（纯构造，永不失败），
//! 再读取字节（唯一可能失败的步骤）。三种来源统一返回可读的 `ImageStream`。
//!
//! - `source`：来源数据模型（`ImageSource` 及三个分支结构体）
//! - `selector`：来源识别规则
//! - `loader`：各来源的读取实现
//! - `fetcher`：HTTP 传输抽象与 `reqwest` 实现
//! - `stream`：统一字节流
//! - `handler`：编排器与便捷入口
//! - `config/error`：配置、错误
//!
//! ## 新同事快速上手
//!
//! ```text
//! get_image(input)
//!    ↓
//! selector.rs（URL？已存在的文件？否则关键词）
//!    ↓
//! loader.rs
//!    ├─ Local   → File::open
//!    ├─ Remote  → fetcher.rs（一次 GET，缓冲响应体）
//!    └─ Keyword → 模板拼 URL → 同 Remote
//!    ↓
//! ImageStream（实现 Read）
//! ```

mod config;
mod error;
mod fetcher;
mod handler;
mod loader;
mod selector;
mod source;
mod stream;

pub use config::{ImageConfig, PlaceholderTemplate};
pub use error::{ImageError, ImageErrorKind};
pub use fetcher::{HttpFetch, ReqwestFetcher};
pub use handler::{ImageHandler, get_image, image_source};
pub use selector::is_url;
pub use source::{ImageSource, KeywordImage, LocalImage, RemoteImage, SourceKind};
pub use stream::ImageStream;
