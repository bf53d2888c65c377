//! # 读取模块
//!
//! ## 设计思路
//!
//! 每种来源各自实现 `get_image()`，统一返回 `ImageStream`：
//! - 本地：只读打开文件，直接把句柄交给调用方。
//! - 远程：一次 GET，完整缓冲响应体后包装为内存流。
//! - 关键词：委托给内部的 `RemoteImage`。
//!
//! ## 实现思路
//!
//! 远程读取有两个入口：`get_image()` 临时创建默认 `ReqwestFetcher`，
//! `get_image_with()` 接收外部传入的 `HttpFetch`，供 `ImageHandler` 复用客户端或测试注入。
//! 所有错误都用 `?` 原样上抛，这里不做任何兜底。

use std::fs::File;

use super::{
    HttpFetch, ImageConfig, ImageError, ImageSource, ImageStream, KeywordImage, LocalImage,
    RemoteImage, ReqwestFetcher,
};

impl LocalImage {
    /// 以只读方式打开文件。
    ///
    /// 路径不存在或不可读时返回 `ImageError::FileSystem`（`kind()` 为 `NotFound`）。
    pub fn get_image(&self) -> Result<ImageStream, ImageError> {
        log::debug!("📁 打开本地图片 - 路径: {}", self.path().display());

        let file = File::open(self.path()).map_err(|source| ImageError::FileSystem {
            path: self.path().display().to_string(),
            source,
        })?;

        Ok(ImageStream::File(file))
    }
}

impl RemoteImage {
    /// 使用默认传输发起一次 GET。
    pub fn get_image(&self) -> Result<ImageStream, ImageError> {
        let fetcher = ReqwestFetcher::new(&ImageConfig::default())?;
        self.get_image_with(&fetcher)
    }

    pub fn get_image_with(&self, fetcher: &dyn HttpFetch) -> Result<ImageStream, ImageError> {
        let bytes = fetcher.fetch(self.url())?;
        Ok(ImageStream::from_bytes(bytes))
    }
}

impl KeywordImage {
    pub fn get_image(&self) -> Result<ImageStream, ImageError> {
        self.as_remote().get_image()
    }

    pub fn get_image_with(&self, fetcher: &dyn HttpFetch) -> Result<ImageStream, ImageError> {
        self.as_remote().get_image_with(fetcher)
    }
}

impl ImageSource {
    /// 读取图片字节流。
    ///
    /// # 示例
    /// ```rust,no_run
    /// use std::io::Read;
    /// use lgtm::image_source::ImageSource;
    ///
    /// let mut stream = ImageSource::from_input("dog").get_image()?;
    /// let mut bytes = Vec::new();
    /// stream.read_to_end(&mut bytes)?;
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn get_image(&self) -> Result<ImageStream, ImageError> {
        match self {
            Self::Local(image) => image.get_image(),
            Self::Remote(image) => image.get_image(),
            Self::Keyword(image) => image.get_image(),
        }
    }

    /// 使用指定传输读取；本地来源不会触碰 `fetcher`。
    pub fn get_image_with(&self, fetcher: &dyn HttpFetch) -> Result<ImageStream, ImageError> {
        match self {
            Self::Local(image) => image.get_image(),
            Self::Remote(image) => image.get_image_with(fetcher),
            Self::Keyword(image) => image.get_image_with(fetcher),
        }
    }
}
