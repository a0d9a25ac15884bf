//! 动态值类型
//!
//! `Value` 是运行时唯一的数据类型，五个变体互斥：
//! Number / String / Boolean / Array / Null。
//!
//! String 与 Array 独占自己的堆数据。复制一个 `Value`（`clone`）总是深拷贝，
//! 因此两个 `Value` 之间永远不会共享缓冲区。
//!
//! 数组的释放是迭代的；`clone` 与 `==` 按嵌套层数递归，深度受调用栈限制。

use super::array::Array;

/// 运行时值
///
/// 派生的 `PartialEq` 是结构相等（`NaN != NaN`，数组逐元素比较），
/// 与语言层面的弱比较 [`compare_values`](super::ops::compare_values) 不同。
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// 64 位浮点数
    Number(f64),
    /// 独占的字符串
    String(String),
    /// 布尔值
    Boolean(bool),
    /// 可增长数组
    Array(Array),
    /// 空值，也是所有失败操作的返回值
    #[default]
    Null,
}

impl Value {
    // ==================== 构造方法 ====================

    /// 创建数字
    #[inline]
    pub fn number(n: f64) -> Self {
        Value::Number(n)
    }

    /// 创建字符串（接管所有权）
    #[inline]
    pub fn string(s: impl Into<String>) -> Self {
        Value::String(s.into())
    }

    /// 创建布尔值
    #[inline]
    pub fn boolean(b: bool) -> Self {
        Value::Boolean(b)
    }

    /// 创建 null
    #[inline]
    pub fn null() -> Self {
        Value::Null
    }

    /// 创建空数组（容量 8）
    #[inline]
    pub fn array() -> Self {
        Value::Array(Array::new())
    }

    // ==================== 类型判断 ====================

    /// 类型名（用于错误信息和日志）
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Boolean(_) => "boolean",
            Value::Array(_) => "array",
            Value::Null => "null",
        }
    }

    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    #[inline]
    pub fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    /// 是否为真值
    ///
    /// - Boolean: 自身
    /// - Number: 非零（NaN 也算非零）
    /// - String: 非空
    /// - Array: 元素个数 > 0
    /// - Null: 永远为假
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Boolean(b) => *b,
            Value::Number(n) => *n != 0.0,
            Value::String(s) => !s.is_empty(),
            Value::Array(array) => !array.is_empty(),
            Value::Null => false,
        }
    }

    // ==================== 解包方法 ====================

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&Array> {
        match self {
            Value::Array(array) => Some(array),
            _ => None,
        }
    }

    pub fn as_array_mut(&mut self) -> Option<&mut Array> {
        match self {
            Value::Array(array) => Some(array),
            _ => None,
        }
    }

    /// 取出内部数组，非数组返回 None
    pub fn into_array(self) -> Option<Array> {
        match self {
            Value::Array(array) => Some(array),
            _ => None,
        }
    }
}

// ==================== 类型转换 ====================

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(f64::from(n))
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Array> for Value {
    fn from(array: Array) -> Self {
        Value::Array(array)
    }
}

impl From<Vec<Value>> for Value {
    fn from(values: Vec<Value>) -> Self {
        Value::Array(Array::from(values))
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

impl FromIterator<Value> for Value {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Value::Array(iter.into_iter().collect())
    }
}

// ==================== 测试 ====================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors_set_single_tag() {
        assert_eq!(Value::number(1.5).as_number(), Some(1.5));
        assert_eq!(Value::string("hi").as_str(), Some("hi"));
        assert_eq!(Value::boolean(true).as_bool(), Some(true));
        assert!(Value::null().is_null());
        assert!(Value::array().is_array());

        assert_eq!(Value::number(1.0).as_str(), None);
        assert_eq!(Value::string("1").as_number(), None);
        assert!(Value::boolean(false).as_array().is_none());
    }

    #[test]
    fn test_type_name() {
        assert_eq!(Value::number(0.0).type_name(), "number");
        assert_eq!(Value::string("").type_name(), "string");
        assert_eq!(Value::boolean(true).type_name(), "boolean");
        assert_eq!(Value::array().type_name(), "array");
        assert_eq!(Value::Null.type_name(), "null");
    }

    #[test]
    fn test_truthiness_table() {
        assert!(!Value::number(0.0).is_truthy());
        assert!(!Value::number(-0.0).is_truthy());
        assert!(Value::number(-1.0).is_truthy());
        assert!(Value::number(f64::NAN).is_truthy());
        assert!(!Value::string("").is_truthy());
        assert!(Value::string("0").is_truthy());
        assert!(!Value::array().is_truthy());
        assert!(Value::from(vec![Value::Null]).is_truthy());
        assert!(!Value::boolean(false).is_truthy());
        assert!(Value::boolean(true).is_truthy());
        assert!(!Value::Null.is_truthy());
    }

    #[test]
    fn test_default_is_null() {
        assert!(Value::default().is_null());
    }

    #[test]
    fn test_from_conversions() {
        assert_eq!(Value::from(3), Value::Number(3.0));
        assert_eq!(Value::from(2.5), Value::Number(2.5));
        assert_eq!(Value::from(true), Value::Boolean(true));
        assert_eq!(Value::from("a"), Value::String("a".to_string()));
        assert_eq!(Value::from(None::<f64>), Value::Null);
        assert_eq!(Value::from(Some("x")), Value::string("x"));
    }

    #[test]
    fn test_clone_is_deep_for_strings() {
        let mut original = Value::string("abc");
        let copy = original.clone();
        if let Value::String(s) = &mut original {
            s.push_str("def");
        }
        assert_eq!(copy.as_str(), Some("abc"));
        assert_eq!(original.as_str(), Some("abcdef"));
    }

    #[test]
    fn test_into_array() {
        let value: Value = (1..=3).map(Value::from).collect();
        let array = value.into_array().unwrap();
        assert_eq!(array.len(), 3);
        assert!(Value::Null.into_array().is_none());
    }
}
