//! 多个端点共用的小型 DTO

use crate::dto;
use crate::types::Sns;

dto! {
    /// API 响应的公共部分
    ///
    /// 所有响应 DTO 都以这两个字段开头。
    pub struct ApiResponse {
        /// 结果代码
        result_code: string => "resultCode",
        /// 结果消息
        result_message: string => "resultMessage",
    }
}

dto! {
    /// 字符串键值对
    pub struct Pair {
        key: string => "key",
        value: string => "value",
    }
}

impl Pair {
    /// 以键和值创建
    pub fn of(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new().with_key(key).with_value(value)
    }
}

dto! {
    /// 附加在访问令牌上的属性
    ///
    /// `hidden` 为 `true` 的属性不会出现在内省等响应中。
    pub struct Property {
        key: string => "key",
        value: string => "value",
        /// 是否对客户端隐藏
        hidden: bool => "hidden",
    }
}

impl Property {
    /// 以键和值创建一个可见属性
    pub fn of(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new().with_key(key).with_value(value)
    }
}

dto! {
    /// 带语言标签的值，例如 `("ja", "...")`
    pub struct TaggedValue {
        /// BCP 47 语言标签
        tag: string => "tag",
        value: string => "value",
    }
}

impl TaggedValue {
    /// 以标签和值创建
    pub fn of(tag: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new().with_tag(tag).with_value(value)
    }
}

dto! {
    /// 带名称的 URI
    pub struct NamedUri {
        name: string => "name",
        uri: string => "uri",
    }
}

dto! {
    /// 权限范围定义
    pub struct Scope {
        /// 范围名称
        name: string => "name",
        /// 授权请求未指定 `scope` 时是否默认包含
        default_entry: bool => "defaultEntry",
        /// 描述
        description: string => "description",
        /// 本地化描述
        descriptions: objects<TaggedValue> => "descriptions",
        /// 任意属性
        attributes: objects<Pair> => "attributes",
    }
}

impl Scope {
    /// 以名称创建
    pub fn of(name: impl Into<String>) -> Self {
        Self::new().with_name(name)
    }

    /// 按语言标签查找本地化描述，没有时回退到默认描述
    pub fn description_for(&self, tag: &str) -> Option<&str> {
        self.descriptions
            .iter()
            .flatten()
            .find(|d| d.tag() == Some(tag))
            .and_then(TaggedValue::value)
            .or_else(|| self.description())
    }
}

dto! {
    /// 动态权限范围，例如 `payment:123` 中的名称与值
    pub struct DynamicScope {
        name: string => "name",
        value: string => "value",
    }
}

dto! {
    /// 社交网络的 API 凭证
    pub struct SnsCredentials {
        sns: enumeration<Sns> => "sns",
        api_key: string => "apiKey",
        api_secret: string => "apiSecret",
    }
}
