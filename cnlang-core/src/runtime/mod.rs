//! CNLang 运行时
//!
//! 编译后的 CNLang 程序依赖的全部值语义：
//! - `Value` 动态值与 `Array` 存储
//! - 真值判断、弱比较与算术
//! - 运算符与内置函数分派
//! - 控制台输入输出

/// 动态值
pub mod value;

/// 数组存储
pub mod array;

/// 错误类型
pub mod error;

/// 值运算
pub mod ops;

/// 运算符
pub mod operators;

/// 文本渲染
pub mod format;

/// 控制台
pub mod io;

/// 内置函数
pub mod builtins;

// ==================== 重新导出 ====================

pub use array::{
    array_get, array_length, array_push, array_remove, create_array, expect_array,
    index_of_value, Array, INITIAL_CAPACITY,
};
pub use error::{ConsoleError, ValueError, ValueResult};
pub use format::Renderer;
pub use io::Console;
pub use operators::{apply_binary, apply_unary, Operator};
pub use ops::{
    add, checked_add, checked_div, checked_mul, checked_neg, checked_sub, compare_values, divide,
    is_truthy, multiply, negate, subtract,
};
pub use builtins::Builtin;
pub use value::Value;
