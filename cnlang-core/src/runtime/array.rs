//! 可增长数组存储
//!
//! 容量按 8, 16, 32, ... 增长：初始 8，满了翻倍，从不收缩。
//! 所有按索引访问的操作把负数和 `>= len` 一视同仁地当作越界：
//! 读取返回 Null，删除静默忽略。
//!
//! 释放是迭代的，任意深度的嵌套都安全；`clone`、`==` 与渲染仍按嵌套层数递归，
//! 深度受调用栈限制（主线程默认栈下约数万层）。

use super::error::{ValueError, ValueResult};
use super::value::Value;
use tracing::{debug, warn};

/// 新数组的初始容量
pub const INITIAL_CAPACITY: usize = 8;

/// 数组存储，独占所有元素
#[derive(Debug)]
pub struct Array {
    values: Vec<Value>,
    /// 逻辑容量，始终在 8·2ⁿ 序列上
    capacity: usize,
}

/// 能容纳 `len` 个元素的最小调度容量
fn scheduled_capacity(len: usize) -> usize {
    let mut capacity = INITIAL_CAPACITY;
    while capacity < len {
        capacity *= 2;
    }
    capacity
}

impl Array {
    /// 创建空数组（容量 8，长度 0）
    pub fn new() -> Self {
        Self::with_scheduled_capacity(INITIAL_CAPACITY)
    }

    fn with_scheduled_capacity(capacity: usize) -> Self {
        Self {
            values: Vec::with_capacity(capacity),
            capacity,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// 追加元素；满了先翻倍容量
    pub fn push(&mut self, value: Value) {
        if self.values.len() == self.capacity {
            self.grow();
        }
        self.values.push(value);
    }

    fn grow(&mut self) {
        let old = self.capacity;
        self.capacity = old * 2;
        self.values.reserve_exact(self.capacity - self.values.len());
        debug!(target: "cnlang::array", from = old, to = self.capacity, "array storage grown");
    }

    /// 索引转换为槽位，越界返回 None
    #[inline]
    fn slot(&self, index: i64) -> Option<usize> {
        usize::try_from(index)
            .ok()
            .filter(|&slot| slot < self.values.len())
    }

    /// 读取元素的独立副本，越界返回 Null
    pub fn get(&self, index: i64) -> Value {
        self.get_ref(index).cloned().unwrap_or(Value::Null)
    }

    /// 借用元素
    pub fn get_ref(&self, index: i64) -> Option<&Value> {
        self.slot(index).map(|slot| &self.values[slot])
    }

    /// 借用元素，越界时返回错误
    pub fn checked_get(&self, index: i64) -> ValueResult<&Value> {
        self.get_ref(index).ok_or(ValueError::IndexOutOfRange {
            index,
            len: self.len(),
        })
    }

    /// 删除元素并左移后续元素；越界时什么也不做
    pub fn remove(&mut self, index: i64) -> Option<Value> {
        let slot = self.slot(index)?;
        Some(self.values.remove(slot))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.values.iter()
    }

    pub fn as_slice(&self) -> &[Value] {
        &self.values
    }
}

impl Default for Array {
    fn default() -> Self {
        Self::new()
    }
}

/// 深拷贝，保留逻辑容量
impl Clone for Array {
    fn clone(&self) -> Self {
        let mut copy = Self::with_scheduled_capacity(self.capacity);
        copy.values.extend(self.values.iter().cloned());
        copy
    }
}

/// 只比较元素，容量不参与
impl PartialEq for Array {
    fn eq(&self, other: &Self) -> bool {
        self.values == other.values
    }
}

impl From<Vec<Value>> for Array {
    fn from(values: Vec<Value>) -> Self {
        let capacity = scheduled_capacity(values.len());
        let mut values = values;
        values.reserve_exact(capacity - values.len());
        Self { values, capacity }
    }
}

impl FromIterator<Value> for Array {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Array::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl Extend<Value> for Array {
    fn extend<I: IntoIterator<Item = Value>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl IntoIterator for Array {
    type Item = Value;
    type IntoIter = std::vec::IntoIter<Value>;

    fn into_iter(mut self) -> Self::IntoIter {
        std::mem::take(&mut self.values).into_iter()
    }
}

/// 逐层展开释放，嵌套再深也不会耗尽调用栈
impl Drop for Array {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.values);
        while let Some(value) = pending.pop() {
            if let Value::Array(mut nested) = value {
                pending.append(&mut nested.values);
            }
        }
    }
}

impl<'a> IntoIterator for &'a Array {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

// ==================== Value 层包装 ====================
//
// 与内置函数一一对应。作用在非数组值上时同样是全函数：
// push / remove 不做任何事，get 返回 Null，length 返回 0。

/// 创建空数组值
pub fn create_array() -> Value {
    Value::Array(Array::new())
}

/// 追加元素到数组值
pub fn array_push(array: &mut Value, value: Value) {
    match array {
        Value::Array(storage) => storage.push(value),
        other => warn!(target: "cnlang::array", found = other.type_name(), "push on non-array ignored"),
    }
}

/// 读取数组值的元素，越界或非数组返回 Null
pub fn array_get(array: &Value, index: i64) -> Value {
    match array {
        Value::Array(storage) => storage.get(index),
        other => {
            warn!(target: "cnlang::array", found = other.type_name(), "index on non-array yields null");
            Value::Null
        }
    }
}

/// 数组值的长度，非数组为 0
pub fn array_length(array: &Value) -> usize {
    match array {
        Value::Array(storage) => storage.len(),
        other => {
            warn!(target: "cnlang::array", found = other.type_name(), "length of non-array is 0");
            0
        }
    }
}

/// 删除数组值的元素，被删除的元素随即释放
pub fn array_remove(array: &mut Value, index: i64) {
    match array {
        Value::Array(storage) => {
            if storage.remove(index).is_none() {
                debug!(target: "cnlang::array", index, len = storage.len(), "remove out of range ignored");
            }
        }
        other => warn!(target: "cnlang::array", found = other.type_name(), "remove on non-array ignored"),
    }
}

/// 严格版本的数组访问：非数组时返回错误
pub fn expect_array(value: &Value) -> ValueResult<&Array> {
    value.as_array().ok_or(ValueError::NotAnArray {
        found: value.type_name(),
    })
}

/// 把数字值转换为索引（向零截断）
///
/// 非数字、NaN 以及超出 i64 范围的数字都视为越界，返回 None。
pub fn index_of_value(index: &Value) -> Option<i64> {
    match index {
        Value::Number(n) if n.is_finite() && n.trunc().abs() < i64::MAX as f64 => Some(n.trunc() as i64),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbers(count: usize) -> Array {
        (0..count).map(|n| Value::Number(n as f64)).collect()
    }

    #[test]
    fn test_new_array() {
        let array = Array::new();
        assert_eq!(array.len(), 0);
        assert_eq!(array.capacity(), INITIAL_CAPACITY);
        assert!(array.is_empty());
    }

    #[test]
    fn test_capacity_doubles_on_overflow() {
        let mut array = Array::new();
        for n in 0..8 {
            array.push(Value::Number(n as f64));
        }
        assert_eq!(array.capacity(), 8);

        array.push(Value::Number(8.0));
        assert_eq!(array.capacity(), 16);
        assert_eq!(array.len(), 9);

        for n in 9..17 {
            array.push(Value::Number(n as f64));
        }
        assert_eq!(array.capacity(), 32);
        assert!(array.len() <= array.capacity());
    }

    #[test]
    fn test_capacity_never_shrinks() {
        let mut array = numbers(9);
        assert_eq!(array.capacity(), 16);
        while array.remove(0).is_some() {}
        assert!(array.is_empty());
        assert_eq!(array.capacity(), 16);
    }

    #[test]
    fn test_get_out_of_range() {
        let array = numbers(3);
        assert_eq!(array.get(0), Value::Number(0.0));
        assert_eq!(array.get(2), Value::Number(2.0));
        assert_eq!(array.get(3), Value::Null);
        assert_eq!(array.get(-1), Value::Null);
        assert_eq!(array.get(i64::MIN), Value::Null);
        assert!(array.get_ref(3).is_none());
    }

    #[test]
    fn test_checked_get() {
        let array = numbers(2);
        assert_eq!(array.checked_get(1), Ok(&Value::Number(1.0)));
        assert_eq!(
            array.checked_get(5),
            Err(ValueError::IndexOutOfRange { index: 5, len: 2 })
        );
    }

    #[test]
    fn test_remove_shifts_left() {
        let mut array = numbers(3);
        assert_eq!(array.remove(1), Some(Value::Number(1.0)));
        assert_eq!(array.as_slice(), &[Value::Number(0.0), Value::Number(2.0)]);
    }

    #[test]
    fn test_remove_out_of_range_is_noop() {
        let mut array = numbers(3);
        assert_eq!(array.remove(3), None);
        assert_eq!(array.remove(-1), None);
        assert_eq!(array, numbers(3));
    }

    #[test]
    fn test_from_vec_uses_schedule() {
        assert_eq!(Array::from(Vec::new()).capacity(), 8);
        assert_eq!(numbers(8).capacity(), 8);
        assert_eq!(numbers(9).capacity(), 16);
        assert_eq!(numbers(33).capacity(), 64);
    }

    #[test]
    fn test_clone_keeps_capacity_and_is_independent() {
        let mut original = numbers(9);
        let copy = original.clone();
        assert_eq!(copy.capacity(), 16);

        original.push(Value::string("new"));
        assert_eq!(copy.len(), 9);
        assert_eq!(original.len(), 10);
    }

    #[test]
    fn test_equality_ignores_capacity() {
        let mut grown = numbers(9);
        while grown.len() > 2 {
            grown.remove(2);
        }
        assert_eq!(grown.capacity(), 16);
        assert_eq!(grown, numbers(2));
    }

    #[test]
    fn test_value_wrappers_on_non_array() {
        let mut not_array = Value::Number(1.0);
        array_push(&mut not_array, Value::Null);
        array_remove(&mut not_array, 0);
        assert_eq!(not_array, Value::Number(1.0));
        assert_eq!(array_get(&not_array, 0), Value::Null);
        assert_eq!(array_length(&not_array), 0);
        assert_eq!(
            expect_array(&not_array),
            Err(ValueError::NotAnArray { found: "number" })
        );
    }

    #[test]
    fn test_index_of_value() {
        assert_eq!(index_of_value(&Value::Number(2.0)), Some(2));
        assert_eq!(index_of_value(&Value::Number(2.9)), Some(2));
        assert_eq!(index_of_value(&Value::Number(-1.5)), Some(-1));
        assert_eq!(index_of_value(&Value::Number(f64::NAN)), None);
        assert_eq!(index_of_value(&Value::Number(f64::INFINITY)), None);
        assert_eq!(index_of_value(&Value::string("1")), None);
    }

    #[test]
    fn test_deeply_nested_array_drops() {
        let mut value = Value::Null;
        for _ in 0..200_000 {
            let mut wrapper = Array::new();
            wrapper.push(value);
            value = Value::Array(wrapper);
        }
        drop(value);
    }

    #[test]
    fn test_into_iter_after_drop_impl() {
        let values: Vec<Value> = numbers(3).into_iter().collect();
        assert_eq!(values, vec![Value::Number(0.0), Value::Number(1.0), Value::Number(2.0)]);
    }

    #[test]
    fn test_extend_pushes() {
        let mut array = Array::new();
        array.extend((0..10).map(|n| Value::Number(n as f64)));
        assert_eq!(array.len(), 10);
        assert_eq!(array.capacity(), 16);
        assert_eq!(array.get(9), Value::Number(9.0));
    }
}
