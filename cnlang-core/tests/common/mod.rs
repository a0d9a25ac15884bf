//! 测试辅助工具
//!
//! 提供内存控制台和数组构造等辅助函数

#![allow(dead_code)]

use cnlang_core::runtime::{Builtin, Console};
use cnlang_core::{FormatConfig, Value};
use std::io::Cursor;

pub type MemoryConsole = Console<Cursor<Vec<u8>>, Vec<u8>>;

/// 以给定内容为标准输入的内存控制台
pub fn console_with_input(input: &str) -> MemoryConsole {
    Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
}

/// 没有输入的内存控制台
pub fn console() -> MemoryConsole {
    console_with_input("")
}

/// 使用指定渲染配置的内存控制台
pub fn console_with_format(format: FormatConfig) -> MemoryConsole {
    Console::with_config(
        Cursor::new(Vec::new()),
        Vec::new(),
        &format,
        Default::default(),
    )
}

/// 取出控制台已输出的全部内容
pub fn stdout_of(console: MemoryConsole) -> String {
    String::from_utf8(console.into_output()).expect("output is UTF-8")
}

/// 依次打印这些值，返回标准输出内容
pub fn printed(values: &[Value]) -> String {
    let mut console = console();
    for value in values {
        console.print(value).expect("in-memory print");
    }
    stdout_of(console)
}

/// 数字数组
pub fn numbers(values: &[f64]) -> Value {
    values.iter().copied().map(Value::from).collect()
}

/// 按源码名调用内置函数
pub fn call(console: &mut MemoryConsole, name: &str, args: &mut [Value]) -> Value {
    let builtin = Builtin::from_name(name).unwrap_or_else(|| panic!("unknown builtin {name}"));
    builtin.call(console, args)
}
