//! 字段值的校验与线上格式转换
//!
//! 每种字段类型通过 [`WireField`] 与线上值互相转换；数组、嵌套对象和枚举的
//! 元素通过 [`WireElement`] 转换。读取方向上的所有类型检查都集中在
//! `ensure_*` 系列函数中，错误信息总是包含出错的键名。

use serde_json::Value;

use super::Array;
use crate::error::{Error, Result, ValidationError};

/// 可以作为线上值元素的类型
///
/// 字符串、整数、布尔值、数组、DTO 以及枚举都实现了该 trait。
pub trait WireElement: Sized {
    /// 转换为线上值
    fn to_element(&self) -> Value;

    /// 从线上值读取
    ///
    /// 返回 `Ok(None)` 表示值的类型正确但无法识别（例如未知的枚举值），
    /// 调用方将其视为未设置。
    fn from_element(key: &str, value: &Value) -> Result<Option<Self>>;
}

/// DTO 字段的存储类型
///
/// `Option<T>` 缺失或为 `null` 时读取为 `None`；`i64`/`bool` 缺失时读取为
/// 类型默认值。
pub trait WireField: Sized {
    /// 转换为线上值，未设置时为 `null`
    fn to_wire(&self) -> Value;

    /// 从数组中按键读取的值转换，`value` 为 `None` 表示键不存在
    fn from_wire(key: &str, value: Option<&Value>) -> Result<Self>;
}

// ============================================================================
// 校验函数
// ============================================================================

/// 要求值为字符串
pub fn ensure_string<'a>(key: &str, value: &'a Value) -> Result<&'a str> {
    value
        .as_str()
        .ok_or_else(|| Error::invalid_type(key, "a string", value))
}

/// 要求值为可以放入 `i64` 的整数
///
/// 浮点数与字符串形式的数字都会被拒绝，不做隐式转换。
pub fn ensure_integer(key: &str, value: &Value) -> Result<i64> {
    match value {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(i)
            } else if n.is_u64() {
                Err(ValidationError::OutOfRange {
                    key: key.to_string(),
                    value: n.to_string(),
                }
                .into())
            } else {
                Err(Error::invalid_type(key, "an integer", value))
            }
        }
        _ => Err(Error::invalid_type(key, "an integer", value)),
    }
}

/// 要求值为布尔值
pub fn ensure_boolean(key: &str, value: &Value) -> Result<bool> {
    value
        .as_bool()
        .ok_or_else(|| Error::invalid_type(key, "a boolean", value))
}

/// 要求值为数组
pub fn ensure_array<'a>(key: &str, value: &'a Value) -> Result<&'a Vec<Value>> {
    value
        .as_array()
        .ok_or_else(|| Error::invalid_type(key, "an array", value))
}

/// 要求值为对象
pub fn ensure_object<'a>(key: &str, value: &'a Value) -> Result<&'a Array> {
    value
        .as_object()
        .ok_or_else(|| Error::invalid_type(key, "an object", value))
}

// ============================================================================
// WireElement 实现
// ============================================================================

impl WireElement for String {
    fn to_element(&self) -> Value {
        Value::String(self.clone())
    }

    fn from_element(key: &str, value: &Value) -> Result<Option<Self>> {
        ensure_string(key, value).map(|s| Some(s.to_string()))
    }
}

impl WireElement for i64 {
    fn to_element(&self) -> Value {
        Value::from(*self)
    }

    fn from_element(key: &str, value: &Value) -> Result<Option<Self>> {
        ensure_integer(key, value).map(Some)
    }
}

impl WireElement for bool {
    fn to_element(&self) -> Value {
        Value::Bool(*self)
    }

    fn from_element(key: &str, value: &Value) -> Result<Option<Self>> {
        ensure_boolean(key, value).map(Some)
    }
}

impl<T: WireElement> WireElement for Vec<T> {
    fn to_element(&self) -> Value {
        Value::Array(self.iter().map(WireElement::to_element).collect())
    }

    fn from_element(key: &str, value: &Value) -> Result<Option<Self>> {
        let items = ensure_array(key, value)?;
        let mut elements = Vec::with_capacity(items.len());

        for (index, item) in items.iter().enumerate() {
            // 无法识别的元素被跳过，其余元素保持原有顺序
            if let Some(element) = T::from_element(&format!("{key}[{index}]"), item)? {
                elements.push(element);
            }
        }

        Ok(Some(elements))
    }
}

// ============================================================================
// WireField 实现
// ============================================================================

impl<T: WireElement> WireField for Option<T> {
    fn to_wire(&self) -> Value {
        match self {
            Some(v) => v.to_element(),
            None => Value::Null,
        }
    }

    fn from_wire(key: &str, value: Option<&Value>) -> Result<Self> {
        match value {
            None | Some(Value::Null) => Ok(None),
            Some(v) => T::from_element(key, v),
        }
    }
}

impl WireField for i64 {
    fn to_wire(&self) -> Value {
        Value::from(*self)
    }

    fn from_wire(key: &str, value: Option<&Value>) -> Result<Self> {
        match value {
            None | Some(Value::Null) => Ok(0),
            Some(v) => ensure_integer(key, v),
        }
    }
}

impl WireField for bool {
    fn to_wire(&self) -> Value {
        Value::Bool(*self)
    }

    fn from_wire(key: &str, value: Option<&Value>) -> Result<Self> {
        match value {
            None | Some(Value::Null) => Ok(false),
            Some(v) => ensure_boolean(key, v),
        }
    }
}
