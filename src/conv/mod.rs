//! 数组与 JSON 转换约定
//!
//! 本库中的每个 DTO 都遵循同一套约定：
//!
//! - **数组形式** ([`Arrayable`]): DTO 可以展开为按键排序的映射
//!   ([`Array`])，键为线上字段名；也可以从这样的映射恢复。嵌套 DTO 递归展开，
//!   枚举输出其线上值，未设置的字段输出 `null`。
//! - **JSON 形式** ([`Jsonable`]): 严格建立在数组形式之上，序列化时先生成数组
//!   再编码，反序列化时先解码再填充。
//!
//! 读取时的类型检查由 [`value`] 模块中的 `ensure_*` 函数完成，类型不符时
//! 返回指明键名的 [`ValidationError`](crate::error::ValidationError)。
//!
//! ## 示例
//!
//! ```rust
//! use authlete_dto::conv::{Arrayable, Jsonable};
//! use authlete_dto::dto::token::{TokenFailReason, TokenFailRequest};
//!
//! let mut request = TokenFailRequest::new();
//! request
//!     .set_ticket("T1".to_string())
//!     .set_reason(TokenFailReason::InvalidTarget);
//!
//! let array = request.to_array();
//! assert_eq!(array["reason"], "invalid_target");
//!
//! let json = request.to_json();
//! assert_eq!(TokenFailRequest::from_json(&json).unwrap(), request);
//! ```

mod macros;
pub mod time;
pub mod value;

use serde_json::Value;

use crate::error::Result;

pub use value::{
    WireElement, WireField, ensure_array, ensure_boolean, ensure_integer, ensure_object,
    ensure_string,
};

/// 数组形式：保持插入顺序的键值映射
pub type Array = serde_json::Map<String, Value>;

/// 数组转换约定
///
/// 由 [`dto!`](crate::dto) 宏为每个 DTO 生成实现；少数带有构造默认值的
/// DTO 手写实现。
pub trait Arrayable: Default {
    /// 将所有字段按线上键名写入 `array`
    fn copy_to_array(&self, array: &mut Array);

    /// 从 `array` 读取所有字段
    ///
    /// 缺失的键视为未设置。任何字段类型不符时返回错误，且不修改 `self`。
    fn copy_from_array(&mut self, array: &Array) -> Result<()>;

    /// 生成新的数组形式
    fn to_array(&self) -> Array {
        let mut array = Array::new();
        self.copy_to_array(&mut array);
        array
    }

    /// 从数组形式创建新实例
    fn from_array(array: &Array) -> Result<Self> {
        let mut instance = Self::default();
        instance.copy_from_array(array)?;
        Ok(instance)
    }
}

/// JSON 转换约定，对所有 [`Arrayable`] 类型自动实现
pub trait Jsonable: Arrayable {
    /// 编码为紧凑的 JSON 文本
    fn to_json(&self) -> String {
        Value::Object(self.to_array()).to_string()
    }

    /// 编码为带缩进的 JSON 文本
    fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&Value::Object(
            self.to_array(),
        ))?)
    }

    /// 从 JSON 文本解码
    ///
    /// 顶层必须是 JSON 对象。
    fn from_json(json: &str) -> Result<Self> {
        tracing::trace!(length = json.len(), "decoding dto from json");
        let value: Value = serde_json::from_str(json)?;
        let array = ensure_object("(root)", &value)?;
        Self::from_array(array)
    }
}

impl<T: Arrayable> Jsonable for T {}
