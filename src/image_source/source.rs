//! # 数据源模型
//!
//! ## 设计思路
//!
//! 图片来源是一个封闭集合：本地文件、远程 URL、占位图关键词。
//! 使用枚举 `ImageSource` 表达，调用侧可以穷尽匹配；每个分支对应一个独立结构体，
//! 构造永远成功，所有可能失败的工作都推迟到 `get_image()`（见 `loader`）。
//!
//! `KeywordImage` 本质上就是一个地址由模板推导出来的 `RemoteImage`，因此直接持有一个
//! `RemoteImage`，读取时整体委托给它。

use std::fmt;
use std::path::{Path, PathBuf};

use super::PlaceholderTemplate;

/// 本地文件来源。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalImage {
    path: PathBuf,
}

impl LocalImage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// 远程 URL 来源。URL 按原样保存，不做解析或规范化。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteImage {
    url: String,
}

impl RemoteImage {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

/// 占位图关键词来源。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordImage {
    keyword: String,
    remote: RemoteImage,
}

impl KeywordImage {
    /// 使用默认模板（`https://loremflicker.com/800/600/<keyword>`）。
    pub fn new(keyword: impl Into<String>) -> Self {
        Self::with_template(keyword, &PlaceholderTemplate::default())
    }

    pub fn with_template(keyword: impl Into<String>, template: &PlaceholderTemplate) -> Self {
        let keyword = keyword.into();
        let remote = RemoteImage::new(template.url_for(&keyword));
        Self { keyword, remote }
    }

    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    /// 由模板推导出的图片地址。
    pub fn url(&self) -> &str {
        self.remote.url()
    }

    pub fn as_remote(&self) -> &RemoteImage {
        &self.remote
    }
}

/// 来源类别，便于日志与断言。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    Local,
    Remote,
    Keyword,
}

impl SourceKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Local => "local",
            Self::Remote => "remote",
            Self::Keyword => "keyword",
        }
    }
}

/// 图片来源。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    Local(LocalImage),
    Remote(RemoteImage),
    Keyword(KeywordImage),
}

impl ImageSource {
    pub fn kind(&self) -> SourceKind {
        match self {
            Self::Local(_) => SourceKind::Local,
            Self::Remote(_) => SourceKind::Remote,
            Self::Keyword(_) => SourceKind::Keyword,
        }
    }
}

impl From<LocalImage> for ImageSource {
    fn from(image: LocalImage) -> Self {
        Self::Local(image)
    }
}

impl From<RemoteImage> for ImageSource {
    fn from(image: RemoteImage) -> Self {
        Self::Remote(image)
    }
}

impl From<KeywordImage> for ImageSource {
    fn from(image: KeywordImage) -> Self {
        Self::Keyword(image)
    }
}

impl fmt::Display for ImageSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Local(image) => write!(f, "local:{}", image.path().display()),
            Self::Remote(image) => write!(f, "remote:{}", redact_url_for_log(image.url())),
            Self::Keyword(image) => write!(f, "keyword:{}", image.keyword()),
        }
    }
}

/// 去掉 query 与 fragment，避免签名参数等敏感信息进入日志。
pub(crate) fn redact_url_for_log(url: &str) -> String {
    let Ok(parsed) = reqwest::Url::parse(url) else {
        return "<invalid-url>".to_string();
    };

    let host = parsed.host_str().unwrap_or("<unknown-host>");
    let port = parsed.port().map(|p| format!(":{}", p)).unwrap_or_default();
    let path = parsed.path();

    format!("{}://{}{}{}", parsed.scheme(), host, port, path)
}
