//! # 来源识别模块
//!
//! ## 实现思路
//!
//! 按顺序判定，命中即返回：
//! 1. 以 `http://` / `https://` 开头 → 远程 URL（优先级最高，即使同名本地文件存在）
//! 2. 作为路径指向一个已存在的文件 → 本地文件
//! 3. 其余一律视为占位图关键词
//!
//! 识别阶段不做任何 I/O 之外的校验，也没有错误分支；输入是否可用要到读取时才知道。

use std::path::Path;

use super::{ImageSource, KeywordImage, LocalImage, PlaceholderTemplate, RemoteImage};

const URL_SCHEMES: [&str; 2] = ["http://", "https://"];

/// 输入是否以 HTTP(S) 协议前缀开头（协议名不区分大小写）。
pub fn is_url(input: &str) -> bool {
    URL_SCHEMES.iter().any(|scheme| {
        input
            .get(..scheme.len())
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case(scheme))
    })
}

impl ImageSource {
    /// 使用默认占位图模板识别输入。
    ///
    /// # 示例
    /// ```rust
    /// use lgtm::image_source::{ImageSource, SourceKind};
    ///
    /// assert_eq!(ImageSource::from_input("https://example.com").kind(), SourceKind::Remote);
    /// assert_eq!(ImageSource::from_input("dog").kind(), SourceKind::Keyword);
    /// ```
    pub fn from_input(input: &str) -> Self {
        Self::select(input, &PlaceholderTemplate::default())
    }

    /// 识别输入并构造对应来源，关键词来源使用给定模板。
    pub fn select(input: &str, template: &PlaceholderTemplate) -> Self {
        if is_url(input) {
            return Self::Remote(RemoteImage::new(input));
        }

        if Path::new(input).is_file() {
            return Self::Local(LocalImage::new(input));
        }

        Self::Keyword(KeywordImage::with_template(input, template))
    }
}
