//! 运行时错误类型
//!
//! 全函数 API（`add`、`array_get` 等）从不返回错误，失败时给出 Null；
//! 这里的错误只由 `checked_*` 系列和 [`Console`](super::io::Console) 产生。

use thiserror::Error;

/// 值操作错误
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValueError {
    /// 二元运算的操作数类型不受支持
    #[error("cannot apply '{op}' to {left} and {right}")]
    TypeMismatch {
        op: &'static str,
        left: &'static str,
        right: &'static str,
    },

    /// 一元运算的操作数类型不受支持
    #[error("cannot apply unary '{op}' to {operand}")]
    UnsupportedOperand {
        op: &'static str,
        operand: &'static str,
    },

    #[error("division by zero")]
    DivisionByZero,

    #[error("index {index} out of range for array of length {len}")]
    IndexOutOfRange { index: i64, len: usize },

    #[error("expected array, found {found}")]
    NotAnArray { found: &'static str },
}

pub type ValueResult<T> = Result<T, ValueError>;

/// 控制台错误
#[derive(Error, Debug)]
pub enum ConsoleError {
    #[error("console I/O failed: {0}")]
    Io(#[from] std::io::Error),
}
