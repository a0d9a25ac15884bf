//! 控制台输入输出
//!
//! `Console` 是 `print` / `read_line` 的唯一入口，输入输出可以是任意
//! `BufRead` 与 `Write`；[`Console::stdio`] 绑定进程的标准输入输出。

use super::error::ConsoleError;
use super::format::Renderer;
use super::value::Value;
use cnlang_config::{ConsoleConfig, FormatConfig};
use std::io::{self, BufRead, StdinLock, Stdout, Write};
use tracing::{trace, warn};

/// 控制台
pub struct Console<R, W> {
    input: R,
    output: W,
    renderer: Renderer,
    config: ConsoleConfig,
}

impl Console<StdinLock<'static>, Stdout> {
    /// 标准输入输出
    pub fn stdio(format: &FormatConfig, config: ConsoleConfig) -> Self {
        Self::with_config(io::stdin().lock(), io::stdout(), format, config)
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self::with_config(input, output, &FormatConfig::default(), ConsoleConfig::default())
    }

    pub fn with_config(input: R, output: W, format: &FormatConfig, config: ConsoleConfig) -> Self {
        Self {
            input,
            output,
            renderer: Renderer::new(format),
            config,
        }
    }

    /// 输出一个值，恰好带一个结尾换行，并立即 flush
    pub fn print(&mut self, value: &Value) -> Result<(), ConsoleError> {
        let line = self.renderer.render_line(value);
        self.output.write_all(line.as_bytes())?;
        self.output.flush()?;
        Ok(())
    }

    /// 输出一个值，失败只记录日志
    pub fn print_or_log(&mut self, value: &Value) {
        if let Err(err) = self.print(value) {
            warn!(target: "cnlang::io", %err, "print failed");
        }
    }

    /// 读取一行，去掉结尾换行
    ///
    /// 输入结束时返回 `Ok(None)`。非法 UTF-8 字节替换为 U+FFFD。
    pub fn try_read_line(&mut self) -> Result<Option<String>, ConsoleError> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        if buf.last() == Some(&b'\n') {
            buf.pop();
            if self.config.strip_carriage_return && buf.last() == Some(&b'\r') {
                buf.pop();
            }
        }
        Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
    }

    /// 读取一行为 String 值，输入结束或读取失败返回 Null
    pub fn read_line(&mut self) -> Value {
        match self.try_read_line() {
            Ok(Some(line)) => Value::String(line),
            Ok(None) => {
                trace!(target: "cnlang::io", "end of input");
                Value::Null
            }
            Err(err) => {
                warn!(target: "cnlang::io", %err, "read failed");
                Value::Null
            }
        }
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
