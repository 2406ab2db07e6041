//! 统一错误类型模块
//!
//! 提供 authlete-dto 库中所有操作的错误类型定义。
//!
//! 本库只做数据映射，因此错误只有几类：
//!
//! - **类型校验错误** ([`ValidationError`]): 从数组/JSON 读取字段时值的类型不符
//! - **JSON 错误**: JSON 文本无法解析
//! - **配置错误** ([`ConfigError`]): 连接配置缺失或不合法
//! - **凭证错误** ([`CredentialsError`]): `Authorization` 头无法解码

use serde_json::Value;
use thiserror::Error;

/// authlete-dto 库的统一结果类型
pub type Result<T> = std::result::Result<T, Error>;

/// authlete-dto 库的错误类型
#[derive(Debug, Error)]
pub enum Error {
    /// 类型校验错误
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// JSON 解析或编码错误
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// 配置错误
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// 凭证解码错误
    #[error("Credentials error: {0}")]
    Credentials(#[from] CredentialsError),
}

impl Error {
    /// 创建一个类型不匹配错误
    ///
    /// `found` 取自实际收到的 JSON 值。
    pub fn invalid_type(key: impl Into<String>, expected: &'static str, found: &Value) -> Self {
        Error::Validation(ValidationError::InvalidType {
            key: key.into(),
            expected,
            found: kind_of(found),
        })
    }

    /// 创建一个未知枚举值错误
    pub fn unknown_enum_value(kind: &'static str, value: impl Into<String>) -> Self {
        Error::Validation(ValidationError::UnknownEnumValue {
            kind,
            value: value.into(),
        })
    }

    /// 若为校验错误，返回出错字段的键名
    pub fn key(&self) -> Option<&str> {
        match self {
            Error::Validation(e) => e.key(),
            _ => None,
        }
    }

    /// 将嵌套对象中的错误键名加上外层前缀
    ///
    /// 例如 `client` 中的 `redirectUris[1]` 变为 `client.redirectUris[1]`。
    #[doc(hidden)]
    pub fn nested_in(self, outer: &str) -> Self {
        match self {
            Error::Validation(e) => Error::Validation(e.nested_in(outer)),
            other => other,
        }
    }
}

/// 校验相关错误
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// 字段值的类型与声明不符
    #[error("'{key}' must be {expected}, got {found}")]
    InvalidType {
        /// 线上格式中的键名（嵌套时为路径）
        key: String,
        /// 期望的类型
        expected: &'static str,
        /// 实际收到的 JSON 类型
        found: &'static str,
    },

    /// 枚举值不在已知集合内
    #[error("unknown {kind} value: {value}")]
    UnknownEnumValue {
        /// 枚举类型名
        kind: &'static str,
        /// 收到的线上值
        value: String,
    },

    /// 整数超出 `i64` 范围
    #[error("'{key}' is out of range: {value}")]
    OutOfRange {
        /// 线上格式中的键名
        key: String,
        /// 收到的数值文本
        value: String,
    },
}

impl ValidationError {
    /// 出错字段的键名；未知枚举值错误没有键名
    pub fn key(&self) -> Option<&str> {
        match self {
            ValidationError::InvalidType { key, .. } | ValidationError::OutOfRange { key, .. } => {
                Some(key)
            }
            ValidationError::UnknownEnumValue { .. } => None,
        }
    }

    fn nested_in(self, outer: &str) -> Self {
        let join = |key: String| {
            if key.starts_with('[') {
                format!("{outer}{key}")
            } else {
                format!("{outer}.{key}")
            }
        };

        match self {
            ValidationError::InvalidType {
                key,
                expected,
                found,
            } => ValidationError::InvalidType {
                key: join(key),
                expected,
                found,
            },
            ValidationError::OutOfRange { key, value } => ValidationError::OutOfRange {
                key: join(key),
                value,
            },
            other => other,
        }
    }
}

/// 配置相关错误
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// 缺少必需的配置
    #[error("missing required configuration: {0}")]
    MissingRequired(String),

    /// 无效的配置值
    #[error("invalid configuration value for '{key}': {message}")]
    InvalidValue {
        /// 配置项名称
        key: String,
        /// 原因
        message: String,
    },
}

/// `Authorization` 头凭证相关错误
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CredentialsError {
    /// Base64 解码失败
    #[error("invalid base64 in credentials: {0}")]
    InvalidBase64(String),

    /// 解码结果不是 UTF-8
    #[error("credentials are not valid UTF-8")]
    InvalidUtf8,
}

/// 返回 JSON 值的类型名，用于错误信息
pub(crate) fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_f64() => "float",
        Value::Number(_) => "integer",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
