//! 内置函数
//!
//! CNLang 源码中的内置函数（`打印`、`创建数组` 等）在这里解析为 [`Builtin`]，
//! 同一个函数也可以用英文别名查找。
//!
//! 所有内置函数都是全函数：参数个数或类型不对时返回 Null。

use crate::runtime::array::{
    array_get, array_length, array_push, array_remove, create_array, index_of_value,
};
use crate::runtime::io::Console;
use crate::runtime::Value;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::io::{BufRead, Write};
use tracing::warn;

/// 内置函数枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Builtin {
    /// `打印(value)`
    Print,
    /// `输入()`
    Input,
    /// `创建数组()`
    CreateArray,
    /// `数组长度(array)`
    ArrayLength,
    /// `数组添加(array, value)`
    ArrayPush,
    /// `数组删除(array, index)`
    ArrayRemove,
    /// `数组索引(array, index)`
    ArrayGet,
}

/// 名称 -> 内置函数（中文源码名与英文别名）
static BUILTIN_NAMES: Lazy<HashMap<&'static str, Builtin>> = Lazy::new(|| {
    let mut names = HashMap::new();
    for builtin in Builtin::ALL {
        names.insert(builtin.source_name(), builtin);
        names.insert(builtin.name(), builtin);
    }
    names
});

impl Builtin {
    pub const ALL: [Builtin; 7] = [
        Builtin::Print,
        Builtin::Input,
        Builtin::CreateArray,
        Builtin::ArrayLength,
        Builtin::ArrayPush,
        Builtin::ArrayRemove,
        Builtin::ArrayGet,
    ];

    /// 英文名
    pub fn name(&self) -> &'static str {
        match self {
            Builtin::Print => "print",
            Builtin::Input => "input",
            Builtin::CreateArray => "create_array",
            Builtin::ArrayLength => "array_length",
            Builtin::ArrayPush => "array_push",
            Builtin::ArrayRemove => "array_remove",
            Builtin::ArrayGet => "array_get",
        }
    }

    /// CNLang 源码中的名字
    pub fn source_name(&self) -> &'static str {
        match self {
            Builtin::Print => "打印",
            Builtin::Input => "输入",
            Builtin::CreateArray => "创建数组",
            Builtin::ArrayLength => "数组长度",
            Builtin::ArrayPush => "数组添加",
            Builtin::ArrayRemove => "数组删除",
            Builtin::ArrayGet => "数组索引",
        }
    }

    /// 按中文名或英文名查找
    pub fn from_name(name: &str) -> Option<Self> {
        BUILTIN_NAMES.get(name).copied()
    }

    /// 参数个数
    pub fn arity(&self) -> usize {
        match self {
            Builtin::Input | Builtin::CreateArray => 0,
            Builtin::Print | Builtin::ArrayLength => 1,
            Builtin::ArrayPush | Builtin::ArrayRemove | Builtin::ArrayGet => 2,
        }
    }

    /// 调用内置函数
    ///
    /// `数组添加` 与 `数组删除` 原地修改 `args[0]`；`数组添加` 会取走 `args[1]`。
    pub fn call<R: BufRead, W: Write>(&self, console: &mut Console<R, W>, args: &mut [Value]) -> Value {
        if args.len() != self.arity() {
            warn!(
                target: "cnlang::value",
                builtin = self.source_name(),
                expected = self.arity(),
                got = args.len(),
                "wrong number of arguments"
            );
            return Value::Null;
        }

        match self {
            Builtin::Print => {
                console.print_or_log(&args[0]);
                Value::Null
            }
            Builtin::Input => console.read_line(),
            Builtin::CreateArray => create_array(),
            Builtin::ArrayLength => Value::Number(array_length(&args[0]) as f64),
            Builtin::ArrayPush => {
                let value = std::mem::take(&mut args[1]);
                array_push(&mut args[0], value);
                Value::Null
            }
            Builtin::ArrayRemove => {
                if let Some(index) = index_of_value(&args[1]) {
                    array_remove(&mut args[0], index);
                }
                Value::Null
            }
            Builtin::ArrayGet => match index_of_value(&args[1]) {
                Some(index) => array_get(&args[0], index),
                None => Value::Null,
            },
        }
    }
}
