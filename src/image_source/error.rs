//! # 错误模型模块
//!
//! ## 设计思路
//!
//! 图片来源链路只有两类失败：本地资源打不开、网络请求没完成。
//! 使用单一错误枚举承载，通过 `thiserror` 保持人类可读错误，并保留底层 `source()` 链，
//! 调用侧既可以按分支匹配，也可以通过 `kind()` 只关心错误类别。
//!
//! 本模块不做任何恢复：错误原样向上传递。

use std::io;

/// 错误类别。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageErrorKind {
    /// 本地路径不存在或不可读。
    NotFound,
    /// 网络请求未能完成（DNS / 连接 / TLS / 可选的非 2xx 状态）。
    Transport,
}

/// 图片来源统一错误类型。
#[derive(Debug, thiserror::Error)]
pub enum ImageError {
    #[error("文件错误：无法打开 {path}：{source}")]
    FileSystem {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("网络错误：请求 {url} 失败：{source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("网络错误：{url} 返回状态码 {status}")]
    HttpStatus { url: String, status: u16 },

    #[error("网络错误：无法创建 HTTP 客户端：{0}")]
    Client(#[source] reqwest::Error),
}

impl ImageError {
    pub fn kind(&self) -> ImageErrorKind {
        match self {
            Self::FileSystem { .. } => ImageErrorKind::NotFound,
            Self::Network { .. } | Self::HttpStatus { .. } | Self::Client(_) => {
                ImageErrorKind::Transport
            }
        }
    }

    /// 底层 I/O 错误类别，仅本地文件错误存在。
    pub fn io_kind(&self) -> Option<io::ErrorKind> {
        match self {
            Self::FileSystem { source, .. } => Some(source.kind()),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.kind() == ImageErrorKind::NotFound
    }
}
