//! # HTTP 传输模块
//!
//! ## 设计思路
//!
//! 远程来源与关键词来源只依赖“对某个 URL 发一次 GET 并拿到完整响应体”这一能力，
//! 因此抽象为 `HttpFetch` trait：生产环境使用基于 `reqwest::blocking` 的 `ReqwestFetcher`，
//! 测试可以注入记录请求的替身实现，无需真实网络。
//!
//! ## 实现思路
//!
//! - 每次调用恰好一次请求：不重试、不改超时、不加自定义请求头。
//! - 默认不解释状态码，直接返回响应体；`reject_http_errors` 打开后非 2xx 返回错误。
//! - 响应体完整读入内存后再返回。

use super::source::redact_url_for_log;
use super::{ImageConfig, ImageError};

/// 单次 HTTP GET 能力。
pub trait HttpFetch: Send + Sync {
    /// 对 `url`（逐字节原样）发起一次 GET，返回完整响应体。
    fn fetch(&self, url: &str) -> Result<Vec<u8>, ImageError>;
}

/// 基于阻塞式 `reqwest` 客户端的默认实现。
#[derive(Debug, Clone)]
pub struct ReqwestFetcher {
    client: reqwest::blocking::Client,
    reject_http_errors: bool,
}

impl ReqwestFetcher {
    /// 使用传输层默认参数创建客户端。
    pub fn new(config: &ImageConfig) -> Result<Self, ImageError> {
        let client = reqwest::blocking::Client::builder()
            .build()
            .map_err(ImageError::Client)?;

        Ok(Self {
            client,
            reject_http_errors: config.reject_http_errors,
        })
    }
}

impl HttpFetch for ReqwestFetcher {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, ImageError> {
        let redacted = redact_url_for_log(url);
        log::debug!("📡 发送 HTTP 请求 - URL: {}", redacted);

        let network_error = |source: reqwest::Error| ImageError::Network {
            url: redacted.clone(),
            source,
        };

        let response = self.client.get(url).send().map_err(network_error)?;
        let status = response.status();

        if !status.is_success() {
            if self.reject_http_errors {
                return Err(ImageError::HttpStatus {
                    url: redacted.clone(),
                    status: status.as_u16(),
                });
            }
            log::warn!("⚠️ 响应状态码非 2xx：{}（URL: {}），仍返回响应体", status, redacted);
        }

        let bytes = response.bytes().map_err(network_error)?;
        log::debug!("📦 响应体读取完成 - {} 字节", bytes.len());

        Ok(bytes.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread;

    /// 启动只应答一次的本地 HTTP 服务，返回根地址与收到的请求行。
    fn serve_once(status_line: &'static str, body: &'static [u8]) -> (String, thread::JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind test server failed");
        let addr = listener.local_addr().expect("read local addr failed");

        let server = thread::spawn(move || {
            let (mut stream, _) = listener.accept().expect("accept failed");

            let mut req_buf = [0u8; 2048];
            let read = stream.read(&mut req_buf).expect("read request failed");
            let request = String::from_utf8_lossy(&req_buf[..read]).to_string();

            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: image/png\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
                status_line,
                body.len()
            );

            stream
                .write_all(response.as_bytes())
                .expect("write headers failed");
            stream.write_all(body).expect("write body failed");
            stream.flush().expect("flush failed");

            request.lines().next().unwrap_or_default().to_string()
        });

        (format!("http://127.0.0.1:{}", addr.port()), server)
    }

    #[test]
    fn fetch_returns_response_body() {
        let (base, server) = serve_once("200 OK", b"url-image");
        let fetcher = ReqwestFetcher::new(&ImageConfig::default()).expect("fetcher init failed");

        let body = fetcher.fetch(&format!("{base}/test.png")).expect("fetch failed");
        let request_line = server.join().expect("server thread failed");

        assert_eq!(body, b"url-image");
        assert_eq!(request_line, "GET /test.png HTTP/1.1");
    }

    #[test]
    fn fetch_returns_body_of_error_status_by_default() {
        let (base, server) = serve_once("404 Not Found", b"missing");
        let fetcher = ReqwestFetcher::new(&ImageConfig::default()).expect("fetcher init failed");

        let body = fetcher.fetch(&format!("{base}/nope.png")).expect("fetch failed");
        server.join().expect("server thread failed");

        assert_eq!(body, b"missing");
    }

    #[test]
    fn fetch_rejects_error_status_when_enabled() {
        let (base, server) = serve_once("404 Not Found", b"missing");
        let config = ImageConfig {
            reject_http_errors: true,
            ..ImageConfig::default()
        };
        let fetcher = ReqwestFetcher::new(&config).expect("fetcher init failed");

        let result = fetcher.fetch(&format!("{base}/nope.png?token=secret"));
        server.join().expect("server thread failed");

        match result {
            Err(ImageError::HttpStatus { url, status }) => {
                assert_eq!(status, 404);
                assert!(!url.contains("secret"));
            }
            other => panic!("expected HttpStatus error, got {other:?}"),
        }
    }

    #[test]
    fn fetch_reports_connection_failure_as_network_error() {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind test server failed");
        let port = listener.local_addr().expect("read local addr failed").port();
        drop(listener);

        let fetcher = ReqwestFetcher::new(&ImageConfig::default()).expect("fetcher init failed");
        let result = fetcher.fetch(&format!("http://127.0.0.1:{port}/gone.png"));

        assert!(matches!(result, Err(ImageError::Network { .. })));
    }
}
