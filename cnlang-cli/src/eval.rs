//! `eval` 子命令：对两个字面量求值一个运算符

use crate::config::CliError;
use cnlang_core::runtime::{apply_binary, apply_unary, Operator, Value};
use tracing::debug;

/// 解析字面量：数字、`true`、`false`、`null`，其余视为字符串
pub fn parse_literal(text: &str) -> Value {
    match text {
        "true" => Value::from(true),
        "false" => Value::from(false),
        "null" => Value::Null,
        _ => text
            .parse::<f64>()
            .map(Value::from)
            .unwrap_or_else(|_| Value::from(text)),
    }
}

/// `[OP, OPERAND]` 或 `[LEFT, OP, RIGHT]`
pub fn eval(args: &[String]) -> Result<Value, CliError> {
    match args {
        [op, operand] => {
            let op = Operator::from_unary_symbol(op)
                .ok_or_else(|| CliError::UnknownOperator(op.clone()))?;
            debug!(target: "cnlang::cli", %op, "eval unary");
            Ok(apply_unary(op, parse_literal(operand)))
        }
        [left, op, right] => {
            let op = Operator::from_symbol(op)
                .ok_or_else(|| CliError::UnknownOperator(op.clone()))?;
            debug!(target: "cnlang::cli", %op, "eval binary");
            Ok(apply_binary(op, parse_literal(left), parse_literal(right)))
        }
        _ => Err(CliError::EvalUsage),
    }
}
