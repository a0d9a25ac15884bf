//! 运算符定义与分派
//!
//! 源语言的每个运算符都映射到一个值运算：算术运算走 [`ops`](super::ops)，
//! 比较运算走 `compare_values`，逻辑运算走真值判断。

use super::ops::{add, compare_values, divide, multiply, negate, subtract};
use super::value::Value;
use std::fmt;
use tracing::trace;

/// 运算符枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    // ===== 二元算术运算符 =====
    /// 加法: `a + b`
    Add,
    /// 减法: `a - b`
    Sub,
    /// 乘法: `a * b`
    Mul,
    /// 除法: `a / b`
    Div,

    // ===== 一元运算符 =====
    /// 一元负号: `-a`
    Neg,
    /// 逻辑非: `!a`
    Not,

    // ===== 比较运算符 =====
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,

    // ===== 逻辑运算符 =====
    /// `a && b`（两边都会求值）
    And,
    /// `a || b`（两边都会求值）
    Or,
}

impl Operator {
    pub const ALL: [Operator; 14] = [
        Operator::Add,
        Operator::Sub,
        Operator::Mul,
        Operator::Div,
        Operator::Neg,
        Operator::Not,
        Operator::Eq,
        Operator::Ne,
        Operator::Lt,
        Operator::Le,
        Operator::Gt,
        Operator::Ge,
        Operator::And,
        Operator::Or,
    ];

    /// 运算符名（用于日志与 Display）
    pub fn method_name(&self) -> &'static str {
        match self {
            Operator::Add => "add",
            Operator::Sub => "sub",
            Operator::Mul => "mul",
            Operator::Div => "div",
            Operator::Neg => "neg",
            Operator::Not => "not",
            Operator::Eq => "eq",
            Operator::Ne => "ne",
            Operator::Lt => "lt",
            Operator::Le => "le",
            Operator::Gt => "gt",
            Operator::Ge => "ge",
            Operator::And => "and",
            Operator::Or => "or",
        }
    }

    /// 获取运算符的符号表示
    pub fn symbol(&self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Sub | Operator::Neg => "-",
            Operator::Mul => "*",
            Operator::Div => "/",
            Operator::Not => "!",
            Operator::Eq => "==",
            Operator::Ne => "!=",
            Operator::Lt => "<",
            Operator::Le => "<=",
            Operator::Gt => ">",
            Operator::Ge => ">=",
            Operator::And => "&&",
            Operator::Or => "||",
        }
    }

    /// 从符号解析二元运算符（`-` 解析为减法）
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(Operator::Add),
            "-" => Some(Operator::Sub),
            "*" => Some(Operator::Mul),
            "/" => Some(Operator::Div),
            "==" => Some(Operator::Eq),
            "!=" => Some(Operator::Ne),
            "<" => Some(Operator::Lt),
            "<=" => Some(Operator::Le),
            ">" => Some(Operator::Gt),
            ">=" => Some(Operator::Ge),
            "&&" => Some(Operator::And),
            "||" => Some(Operator::Or),
            _ => None,
        }
    }

    /// 从符号解析一元运算符
    pub fn from_unary_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "-" => Some(Operator::Neg),
            "!" => Some(Operator::Not),
            _ => None,
        }
    }

    /// 是否是一元运算符
    pub fn is_unary(&self) -> bool {
        matches!(self, Operator::Neg | Operator::Not)
    }

    /// 是否是二元运算符
    pub fn is_binary(&self) -> bool {
        !self.is_unary()
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "operator {}", self.method_name())
    }
}

// ==================== 分派 ====================

/// 执行二元运算
///
/// 比较运算基于弱比较，因此不同类型的值 `==` 为真。
/// 一元运算符出现在二元位置时返回 Null。
pub fn apply_binary(op: Operator, a: Value, b: Value) -> Value {
    match op {
        Operator::Add => add(a, b),
        Operator::Sub => subtract(a, b),
        Operator::Mul => multiply(a, b),
        Operator::Div => divide(a, b),
        Operator::Eq => Value::Boolean(compare_values(&a, &b).is_eq()),
        Operator::Ne => Value::Boolean(compare_values(&a, &b).is_ne()),
        Operator::Lt => Value::Boolean(compare_values(&a, &b).is_lt()),
        Operator::Le => Value::Boolean(compare_values(&a, &b).is_le()),
        Operator::Gt => Value::Boolean(compare_values(&a, &b).is_gt()),
        Operator::Ge => Value::Boolean(compare_values(&a, &b).is_ge()),
        Operator::And => Value::Boolean(a.is_truthy() && b.is_truthy()),
        Operator::Or => Value::Boolean(a.is_truthy() || b.is_truthy()),
        Operator::Neg | Operator::Not => {
            trace!(target: "cnlang::ops", %op, "unary operator in binary position");
            Value::Null
        }
    }
}

/// 执行一元运算，二元运算符返回 Null
pub fn apply_unary(op: Operator, v: Value) -> Value {
    match op {
        Operator::Neg => negate(v),
        Operator::Not => Value::Boolean(!v.is_truthy()),
        _ => {
            trace!(target: "cnlang::ops", %op, "binary operator in unary position");
            Value::Null
        }
    }
}
