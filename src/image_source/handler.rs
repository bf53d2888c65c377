//! # 编排模块
//!
//! ## 设计思路
//!
//! `ImageHandler` 把“识别来源 → 读取字节”串成一次调用，并持有一份配置与可复用的传输。
//! 顶层的 `image_source()` / `get_image()` 是不需要中间对象时的便捷入口，
//! 行为与 `ImageSource::from_input(input).get_image()` 完全一致。
//!
//! ## 实现思路
//!
//! - 传输通过 `HttpFetch` 注入，默认使用 `ReqwestFetcher`，测试可替换。
//! - 记录识别结果与读取耗时，便于诊断；错误不做任何改写。

use std::time::Instant;

use super::{HttpFetch, ImageConfig, ImageError, ImageSource, ImageStream, ReqwestFetcher};

/// 识别输入对应的图片来源（默认配置）。
pub fn image_source(input: &str) -> ImageSource {
    ImageSource::from_input(input)
}

/// 识别输入并读取图片字节流（默认配置）。
///
/// # 示例
/// ```rust,no_run
/// let bytes = lgtm::image_source::get_image("https://example.com/test.png")?.into_bytes()?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn get_image(input: &str) -> Result<ImageStream, ImageError> {
    image_source(input).get_image()
}

/// 图片来源处理器。
pub struct ImageHandler {
    config: ImageConfig,
    fetcher: Box<dyn HttpFetch>,
}

impl ImageHandler {
    /// 根据配置创建处理器，同时构建复用型 HTTP 客户端。
    ///
    /// # 示例
    /// ```rust,ignore
    /// use lgtm::image_source::{ImageConfig, ImageHandler};
    ///
    /// let handler = ImageHandler::new(ImageConfig::default())?;
    /// let stream = handler.get_image("dog")?;
    /// # Ok::<(), lgtm::image_source::ImageError>(())
    /// ```
    pub fn new(config: ImageConfig) -> Result<Self, ImageError> {
        let fetcher = ReqwestFetcher::new(&config)?;
        Ok(Self::with_fetcher(config, fetcher))
    }

    pub fn with_fetcher(config: ImageConfig, fetcher: impl HttpFetch + 'static) -> Self {
        Self {
            config,
            fetcher: Box::new(fetcher),
        }
    }

    pub fn config(&self) -> &ImageConfig {
        &self.config
    }

    /// 按当前配置的占位图模板识别输入。
    pub fn select(&self, input: &str) -> ImageSource {
        ImageSource::select(input, &self.config.placeholder)
    }

    /// 识别并读取。
    pub fn get_image(&self, input: &str) -> Result<ImageStream, ImageError> {
        let source = self.select(input);
        log::info!("🖼️ 识别图片来源 - {}", source);

        let started = Instant::now();
        let stream = source.get_image_with(self.fetcher.as_ref())?;
        log::info!(
            "✅ 图片读取完成 - 来源: {}，耗时: {} ms",
            source.kind().as_str(),
            started.elapsed().as_millis()
        );

        Ok(stream)
    }
}
