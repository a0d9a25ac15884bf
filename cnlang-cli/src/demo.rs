//! 示例程序
//!
//! 在运行时上执行 CNLang 示例程序编译后的等价逻辑：
//! 算术、字符串、数组、条件分支、循环和用户函数。

use cnlang_core::runtime::{add, apply_binary, Builtin, Console, ConsoleError, Operator, Value};
use std::io::{BufRead, Write};
use tracing::info;

/// 用户函数 `测试函数(a, b)`
fn test_function(a: Value, b: Value) -> Value {
    add(a, b)
}

pub fn run<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<(), ConsoleError> {
    info!(target: "cnlang::cli", "running demo program");

    let x = Value::from(10);
    let y = Value::from(20);
    console.print(&add(x.clone(), y))?;
    console.print(&Value::from("Hello, World!"))?;

    let mut args = [Builtin::CreateArray.call(console, &mut []), Value::Null];
    for n in 1..=5 {
        args[1] = Value::from(n);
        Builtin::ArrayPush.call(console, &mut args);
    }
    let length = Builtin::ArrayLength.call(console, &mut args[..1]);
    args[1] = Value::from(0);
    let first = Builtin::ArrayGet.call(console, &mut args);

    // 字符串 + 数字 得到 null
    console.print(&add(Value::from("数组长度: "), length))?;
    console.print(&add(Value::from("第一个元素: "), first))?;

    let branch = if apply_binary(Operator::Gt, x, Value::from(5)).is_truthy() {
        "x 大于 5"
    } else {
        "x 小于等于 5"
    };
    console.print(&Value::from(branch))?;

    let mut i = Value::from(0);
    while apply_binary(Operator::Lt, i.clone(), Value::from(3)).is_truthy() {
        console.print(&add(Value::from("循环次数: "), i.clone()))?;
        i = add(i, Value::from(1));
    }

    let first = Builtin::ArrayGet.call(console, &mut args);
    console.print(&test_function(first, Value::from(5)))?;
    Ok(())
}
