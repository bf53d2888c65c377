//! # lgtm — 命令行入口
//!
//! 本文件仅负责参数解析、日志初始化与结果输出。
//! 来源识别与读取逻辑详见 `image_source` 模块。

use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;
use lgtm::error::AppError;
use lgtm::image_source::{ImageConfig, ImageHandler};

#[derive(Parser)]
#[command(name = "lgtm-image")]
#[command(about = "Fetch image bytes from a local file, a URL or a placeholder keyword.")]
struct CommandLine {
    /// Local path, http(s) URL, or keyword for a placeholder image
    input: String,
    /// Write the image here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// Treat non-2xx HTTP responses as errors
    #[arg(long)]
    reject_http_errors: bool,
}

fn main() -> Result<(), AppError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = CommandLine::parse();
    let config = ImageConfig {
        reject_http_errors: args.reject_http_errors,
        ..ImageConfig::default()
    };

    let handler = ImageHandler::new(config)?;
    let placeholder = &handler.config().placeholder;
    log::debug!(
        "⚙️ 占位图模板：{}/{}/{}/<keyword>，reject_http_errors={}",
        placeholder.base_url,
        placeholder.width,
        placeholder.height,
        handler.config().reject_http_errors
    );
    let mut stream = handler.get_image(&args.input)?;

    // 日志走 stderr，stdout 只写图片字节
    let written = match &args.output {
        Some(path) => {
            let mut file = File::create(path)?;
            let written = io::copy(&mut stream, &mut file)?;
            file.flush()?;
            log::info!("💾 已写入 {} - {} 字节", path.display(), written);
            written
        }
        None => {
            let mut stdout = io::stdout().lock();
            let written = io::copy(&mut stream, &mut stdout)?;
            stdout.flush()?;
            written
        }
    };

    log::debug!("done: {} bytes", written);
    Ok(())
}
