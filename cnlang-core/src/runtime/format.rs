//! 值的文本渲染
//!
//! - Number: 定点小数，默认 6 位（`%f` 风格，NaN/无穷为 `nan`/`inf`）
//! - String: 原样输出
//! - Boolean: `true` / `false`
//! - Null: `null`
//! - Array: `[e1, e2, ...]`，元素递归渲染，以 `", "` 分隔

use super::value::Value;
use cnlang_config::FormatConfig;
use std::fmt::{self, Write};

/// 值渲染器
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Renderer {
    /// 数字小数位数
    pub precision: usize,
    /// 每个嵌套元素后追加换行（旧版输出）
    pub legacy_nested_newlines: bool,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(&FormatConfig::default())
    }
}

impl Renderer {
    pub fn new(config: &FormatConfig) -> Self {
        Self {
            precision: config.precision,
            legacy_nested_newlines: config.legacy_nested_newlines,
        }
    }

    /// 将值写入任意 `fmt::Write`
    pub fn write_value<W: Write>(&self, out: &mut W, value: &Value) -> fmt::Result {
        match value {
            Value::Number(n) => write_number(out, *n, self.precision),
            Value::String(s) => out.write_str(s),
            Value::Boolean(b) => out.write_str(if *b { "true" } else { "false" }),
            Value::Null => out.write_str("null"),
            Value::Array(array) => {
                out.write_char('[')?;
                for (i, element) in array.iter().enumerate() {
                    if i > 0 {
                        out.write_str(", ")?;
                    }
                    self.write_value(out, element)?;
                    if self.legacy_nested_newlines {
                        out.write_char('\n')?;
                    }
                }
                out.write_char(']')
            }
        }
    }

    /// 渲染为字符串（不含结尾换行）
    pub fn render(&self, value: &Value) -> String {
        let mut out = String::new();
        // 写入 String 不会失败
        let _ = self.write_value(&mut out, value);
        out
    }

    /// 渲染为一行（恰好一个结尾换行）
    pub fn render_line(&self, value: &Value) -> String {
        let mut out = self.render(value);
        out.push('\n');
        out
    }
}

fn write_number<W: Write>(out: &mut W, n: f64, precision: usize) -> fmt::Result {
    if n.is_nan() {
        out.write_str(if n.is_sign_negative() { "-nan" } else { "nan" })
    } else if n.is_infinite() {
        out.write_str(if n < 0.0 { "-inf" } else { "inf" })
    } else {
        write!(out, "{:.*}", precision, n)
    }
}

/// 以 `print` 的格式显示（无结尾换行）
///
/// 格式化参数中的精度（`{:.2}`）是数字的小数位数，不截断字符串；
/// 宽度、填充与对齐（`{:*>12}`）作用于整个渲染结果，默认左对齐。
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let renderer = Renderer {
            precision: f.precision().unwrap_or(FormatConfig::default().precision),
            legacy_nested_newlines: false,
        };
        let Some(width) = f.width() else {
            return renderer.write_value(f, self);
        };

        let text = renderer.render(self);
        let padding = width.saturating_sub(text.chars().count());
        let (before, after) = match f.align() {
            Some(fmt::Alignment::Right) => (padding, 0),
            Some(fmt::Alignment::Center) => (padding / 2, padding - padding / 2),
            Some(fmt::Alignment::Left) | None => (0, padding),
        };
        let fill = f.fill();
        for _ in 0..before {
            f.write_char(fill)?;
        }
        f.write_str(&text)?;
        for _ in 0..after {
            f.write_char(fill)?;
        }
        Ok(())
    }
}
