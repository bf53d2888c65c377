//! # 字节流模块
//!
//! 三种来源统一返回 `ImageStream`：本地来源是打开的文件句柄，远程来源是已完整缓冲的内存游标。
//! 调用方拥有该值，丢弃即释放（文件句柄随 `Drop` 关闭）。

use std::fs::File;
use std::io::{self, Cursor, Read};

/// 可读取的图片字节流。
#[derive(Debug)]
pub enum ImageStream {
    /// 本地文件句柄（只读）。
    File(File),
    /// 已完整下载的响应体。
    Memory(Cursor<Vec<u8>>),
}

impl ImageStream {
    pub(crate) fn from_bytes(bytes: Vec<u8>) -> Self {
        Self::Memory(Cursor::new(bytes))
    }

    /// 内容是否已完整位于内存中。
    pub fn is_buffered(&self) -> bool {
        matches!(self, Self::Memory(_))
    }

    /// 读取剩余全部字节并释放流。
    pub fn into_bytes(mut self) -> io::Result<Vec<u8>> {
        let mut bytes = Vec::new();
        self.read_to_end(&mut bytes)?;
        Ok(bytes)
    }
}

impl Read for ImageStream {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self {
            Self::File(file) => file.read(buf),
            Self::Memory(cursor) => cursor.read(buf),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_stream_reads_back_payload() {
        let mut stream = ImageStream::from_bytes(b"url-image".to_vec());
        let mut buf = Vec::new();

        stream.read_to_end(&mut buf).expect("read memory stream");

        assert!(stream.is_buffered());
        assert_eq!(buf, b"url-image");
    }

    #[test]
    fn into_bytes_returns_only_unread_remainder() {
        let mut stream = ImageStream::from_bytes(b"abcdef".to_vec());
        let mut head = [0u8; 2];
        stream.read_exact(&mut head).expect("read head");

        assert_eq!(&head, b"ab");
        assert_eq!(stream.into_bytes().expect("read rest"), b"cdef");
    }

    #[test]
    fn file_stream_is_not_buffered() {
        let file = tempfile::tempfile().expect("create temp file");
        let stream = ImageStream::File(file);

        assert!(!stream.is_buffered());
        assert!(stream.into_bytes().expect("read empty file").is_empty());
    }
}
