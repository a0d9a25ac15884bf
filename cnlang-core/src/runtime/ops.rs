//! 值运算 (truthiness, compare_values, add, subtract 等)
//!
//! 每个算术运算都有两个版本：
//! - `checked_*` 返回 [`ValueResult`]，类型不匹配和除零都是错误
//! - 全函数版本把所有错误映射为 Null，从不 panic

use super::error::{ValueError, ValueResult};
use super::value::Value;
use std::cmp::Ordering;
use std::ops::{Add, Div, Mul, Neg, Sub};
use tracing::trace;

/// 真值判断，见 [`Value::is_truthy`]
#[inline]
pub fn is_truthy(value: &Value) -> bool {
    value.is_truthy()
}

/// 三路比较（弱比较）
///
/// 不同类型的值比较结果为 Equal，这是语言的既定行为而不是错误。
/// NaN 参与的数字比较同样为 Equal。
pub fn compare_values(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => x.partial_cmp(y).unwrap_or(Ordering::Equal),
        (Value::String(x), Value::String(y)) => x.as_bytes().cmp(y.as_bytes()),
        (Value::Boolean(x), Value::Boolean(y)) => x.cmp(y),
        _ => Ordering::Equal,
    }
}

fn mismatch(op: &'static str, a: &Value, b: &Value) -> ValueError {
    ValueError::TypeMismatch {
        op,
        left: a.type_name(),
        right: b.type_name(),
    }
}

// ==================== 检查版本 ====================

/// 加法：数字相加，字符串拼接
pub fn checked_add(a: Value, b: Value) -> ValueResult<Value> {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => Ok(Value::Number(x + y)),
        (Value::String(mut x), Value::String(y)) => {
            // 复用左操作数的缓冲区
            x.push_str(&y);
            Ok(Value::String(x))
        }
        (a, b) => Err(mismatch("+", &a, &b)),
    }
}

pub fn checked_sub(a: Value, b: Value) -> ValueResult<Value> {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => Ok(Value::Number(x - y)),
        (a, b) => Err(mismatch("-", &a, &b)),
    }
}

pub fn checked_mul(a: Value, b: Value) -> ValueResult<Value> {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => Ok(Value::Number(x * y)),
        (a, b) => Err(mismatch("*", &a, &b)),
    }
}

/// 除法：除数为 0（含 -0）时报错
pub fn checked_div(a: Value, b: Value) -> ValueResult<Value> {
    match (a, b) {
        (Value::Number(_), Value::Number(y)) if y == 0.0 => Err(ValueError::DivisionByZero),
        (Value::Number(x), Value::Number(y)) => Ok(Value::Number(x / y)),
        (a, b) => Err(mismatch("/", &a, &b)),
    }
}

pub fn checked_neg(v: Value) -> ValueResult<Value> {
    match v {
        Value::Number(n) => Ok(Value::Number(-n)),
        other => Err(ValueError::UnsupportedOperand {
            op: "-",
            operand: other.type_name(),
        }),
    }
}

// ==================== 全函数版本 ====================

fn or_null(result: ValueResult<Value>) -> Value {
    result.unwrap_or_else(|err| {
        trace!(target: "cnlang::ops", %err, "operation yields null");
        Value::Null
    })
}

/// 加法，不支持的组合返回 Null
pub fn add(a: Value, b: Value) -> Value {
    or_null(checked_add(a, b))
}

pub fn subtract(a: Value, b: Value) -> Value {
    or_null(checked_sub(a, b))
}

pub fn multiply(a: Value, b: Value) -> Value {
    or_null(checked_mul(a, b))
}

/// 除法，除零返回 Null
pub fn divide(a: Value, b: Value) -> Value {
    or_null(checked_div(a, b))
}

pub fn negate(v: Value) -> Value {
    or_null(checked_neg(v))
}

impl Add for Value {
    type Output = Value;

    fn add(self, rhs: Value) -> Value {
        add(self, rhs)
    }
}

impl Sub for Value {
    type Output = Value;

    fn sub(self, rhs: Value) -> Value {
        subtract(self, rhs)
    }
}

impl Mul for Value {
    type Output = Value;

    fn mul(self, rhs: Value) -> Value {
        multiply(self, rhs)
    }
}

impl Div for Value {
    type Output = Value;

    fn div(self, rhs: Value) -> Value {
        divide(self, rhs)
    }
}

impl Neg for Value {
    type Output = Value;

    fn neg(self) -> Value {
        negate(self)
    }
}
