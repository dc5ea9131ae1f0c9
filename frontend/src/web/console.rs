//! 把 tracing 日志输出到浏览器开发者控制台
//!
//! WASM 中没有系统时钟，因此关闭时间戳；控制台不解析 ANSI，因此关闭颜色。

use std::io;

use tracing::{Level, Metadata};
use wasm_bindgen::JsValue;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::MakeWriter;

/// 缓冲一条日志，drop 时按级别写入对应的 console 方法
pub struct ConsoleWriter {
    level: Level,
    buffer: Vec<u8>,
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        let line = String::from_utf8_lossy(&self.buffer);
        let line = line.trim_end();
        if line.is_empty() {
            return;
        }
        let value = JsValue::from_str(line);
        match self.level {
            Level::ERROR => web_sys::console::error_1(&value),
            Level::WARN => web_sys::console::warn_1(&value),
            Level::INFO => web_sys::console::info_1(&value),
            _ => web_sys::console::debug_1(&value),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MakeConsoleWriter;

impl<'a> MakeWriter<'a> for MakeConsoleWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter {
            level: Level::INFO,
            buffer: Vec::new(),
        }
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter {
            level: *meta.level(),
            buffer: Vec::new(),
        }
    }
}

/// 安装全局订阅者；过滤规则无效时回退到 `info`
pub fn init(level: &str) {
    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"));
    let installed = tracing_subscriber::fmt()
        .with_writer(MakeConsoleWriter)
        .with_env_filter(filter)
        .without_time()
        .with_ansi(false)
        .with_target(false)
        .try_init();
    if installed.is_err() {
        web_sys::console::warn_1(&"tracing subscriber already installed".into());
    }
}
