//! # 配置模块
//!
//! ## 设计思路
//!
//! 图片来源本身几乎没有可调参数，唯一需要集中管理的是占位图服务的 URL 模板，
//! 以及“是否把非 2xx 状态码视为错误”这一传输策略开关。
//!
//! ## 实现思路
//!
//! - `Default` 提供与 loremflicker 一致的 800x600 模板。
//! - 派生 `serde`，外层工具可以直接从自己的配置文件反序列化，缺省字段回落到默认值。

use serde::{Deserialize, Serialize};

pub const DEFAULT_PLACEHOLDER_BASE_URL: &str = "https://loremflicker.com";
pub const DEFAULT_PLACEHOLDER_WIDTH: u32 = 800;
pub const DEFAULT_PLACEHOLDER_HEIGHT: u32 = 600;

/// 占位图服务 URL 模板：`{base_url}/{width}/{height}/{keyword}`。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaceholderTemplate {
    pub base_url: String,
    pub width: u32,
    pub height: u32,
}

impl Default for PlaceholderTemplate {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_PLACEHOLDER_BASE_URL.to_string(),
            width: DEFAULT_PLACEHOLDER_WIDTH,
            height: DEFAULT_PLACEHOLDER_HEIGHT,
        }
    }
}

impl PlaceholderTemplate {
    /// 生成关键词对应的图片地址。
    ///
    /// 关键词原样拼接，不做任何转义。
    ///
    /// # 示例
    /// ```rust
    /// use lgtm::image_source::PlaceholderTemplate;
    ///
    /// let url = PlaceholderTemplate::default().url_for("dog");
    /// assert_eq!(url, "https://loremflicker.com/800/600/dog");
    /// ```
    pub fn url_for(&self, keyword: &str) -> String {
        format!(
            "{}/{}/{}/{}",
            self.base_url.trim_end_matches('/'),
            self.width,
            self.height,
            keyword
        )
    }
}

/// 图片来源配置。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageConfig {
    /// 关键词来源使用的占位图模板。
    pub placeholder: PlaceholderTemplate,
    /// 为 `true` 时非 2xx 响应返回 `ImageError::HttpStatus`；默认直接返回响应体。
    pub reject_http_errors: bool,
}
