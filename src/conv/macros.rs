//! DTO 与枚举的声明宏
//!
//! - [`dto!`](crate::dto) 声明一个 DTO：生成结构体、getter、流式 setter、
//!   构建器方法，以及数组/JSON/serde 转换。
//! - [`wire_enum!`](crate::wire_enum) 声明一个带显式线上值的封闭枚举。
//!
//! 字段类型关键字：
//!
//! | 关键字 | 存储类型 | 线上形式 |
//! |---|---|---|
//! | `string` | `Option<String>` | 字符串 / `null` |
//! | `int` | `i64` | 数字 |
//! | `bool` | `bool` | 布尔值 |
//! | `strings` | `Option<Vec<String>>` | 字符串数组 / `null` |
//! | `object<T>` | `Option<T>` | 对象 / `null` |
//! | `objects<T>` | `Option<Vec<T>>` | 对象数组 / `null` |
//! | `enumeration<E>` | `Option<E>` | 线上值 / `null` |
//! | `enums<E>` | `Option<Vec<E>>` | 线上值数组 / `null` |

/// 声明一个 DTO
///
/// ```rust
/// use authlete_dto::conv::Arrayable;
/// use authlete_dto::dto;
///
/// dto! {
///     /// 示例
///     pub struct Example {
///         /// 票据
///         ticket: string => "ticket",
///         max_age: int => "maxAge",
///     }
/// }
///
/// let mut example = Example::new();
/// example.set_ticket("abc".to_string()).set_max_age(30);
/// assert_eq!(example.ticket(), Some("abc"));
/// assert_eq!(example.to_array()["maxAge"], 30);
/// ```
///
/// 写作 `pub struct Name : ApiResponse { ... }` 时，会在最前面加入
/// `resultCode`/`resultMessage` 两个字段并实现
/// [`ApiResult`](crate::dto::ApiResult)。
#[macro_export]
macro_rules! dto {
    (
        $(#[$meta:meta])*
        pub struct $name:ident : ApiResponse {
            $($body:tt)*
        }
    ) => {
        $crate::dto! {
            $(#[$meta])*
            pub struct $name {
                /// API 调用的结果代码，例如 `A004001`
                result_code: string => "resultCode",
                /// API 调用的结果消息
                result_message: string => "resultMessage",
                $($body)*
            }
        }

        impl $crate::dto::ApiResult for $name {
            fn result_code(&self) -> ::std::option::Option<&str> {
                self.result_code.as_deref()
            }

            fn result_message(&self) -> ::std::option::Option<&str> {
                self.result_message.as_deref()
            }
        }
    };

    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            $(
                $(#[$fmeta:meta])*
                $field:ident : $kind:ident $(<$inner:ident>)? => $key:literal
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Eq)]
        pub struct $name {
            $(
                $(#[$fmeta])*
                $field: $crate::__dto_field_type!($kind $(<$inner>)?),
            )*
        }

        impl $name {
            /// 创建一个所有字段均未设置的实例
            pub fn new() -> Self {
                Self::default()
            }

            $(
                $crate::__dto_accessors!($(#[$fmeta])* $field : $kind $(<$inner>)?);
            )*
        }

        impl $crate::conv::Arrayable for $name {
            fn copy_to_array(&self, array: &mut $crate::conv::Array) {
                $(
                    array.insert(
                        ::std::string::String::from($key),
                        $crate::conv::WireField::to_wire(&self.$field),
                    );
                )*
            }

            fn copy_from_array(&mut self, array: &$crate::conv::Array) -> $crate::Result<()> {
                $(
                    let $field: $crate::__dto_field_type!($kind $(<$inner>)?) =
                        $crate::conv::WireField::from_wire($key, array.get($key))?;
                )*
                $(
                    self.$field = $field;
                )*
                ::std::result::Result::Ok(())
            }
        }

        $crate::__impl_array_conversions!($name);
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __dto_field_type {
    (string) => { ::std::option::Option<::std::string::String> };
    (int) => { i64 };
    (bool) => { bool };
    (strings) => { ::std::option::Option<::std::vec::Vec<::std::string::String>> };
    (object<$t:ident>) => { ::std::option::Option<$t> };
    (objects<$t:ident>) => { ::std::option::Option<::std::vec::Vec<$t>> };
    (enumeration<$t:ident>) => { ::std::option::Option<$t> };
    (enums<$t:ident>) => { ::std::option::Option<::std::vec::Vec<$t>> };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __dto_accessors {
    ($(#[$fmeta:meta])* $field:ident : string) => {
        $crate::__private::paste! {
            $(#[$fmeta])*
            pub fn $field(&self) -> ::std::option::Option<&str> {
                self.$field.as_deref()
            }

            /// 设置该字段，传入 `None` 表示清除。
            pub fn [<set_ $field>](
                &mut self,
                $field: impl ::std::convert::Into<::std::option::Option<::std::string::String>>,
            ) -> &mut Self {
                self.$field = $field.into();
                self
            }

            /// 以构建器方式设置该字段。
            pub fn [<with_ $field>](
                mut self,
                $field: impl ::std::convert::Into<::std::string::String>,
            ) -> Self {
                self.$field = ::std::option::Option::Some($field.into());
                self
            }
        }
    };

    ($(#[$fmeta:meta])* $field:ident : int) => {
        $crate::__private::paste! {
            $(#[$fmeta])*
            pub fn $field(&self) -> i64 {
                self.$field
            }

            /// 设置该字段。
            pub fn [<set_ $field>](&mut self, $field: i64) -> &mut Self {
                self.$field = $field;
                self
            }

            /// 以构建器方式设置该字段。
            pub fn [<with_ $field>](mut self, $field: i64) -> Self {
                self.$field = $field;
                self
            }
        }
    };

    ($(#[$fmeta:meta])* $field:ident : bool) => {
        $crate::__private::paste! {
            $(#[$fmeta])*
            pub fn $field(&self) -> bool {
                self.$field
            }

            /// 设置该字段。
            pub fn [<set_ $field>](&mut self, $field: bool) -> &mut Self {
                self.$field = $field;
                self
            }

            /// 以构建器方式设置该字段。
            pub fn [<with_ $field>](mut self, $field: bool) -> Self {
                self.$field = $field;
                self
            }
        }
    };

    ($(#[$fmeta:meta])* $field:ident : strings) => {
        $crate::__private::paste! {
            $(#[$fmeta])*
            pub fn $field(&self) -> ::std::option::Option<&[::std::string::String]> {
                self.$field.as_deref()
            }

            /// 设置该字段，传入 `None` 表示清除。
            pub fn [<set_ $field>](
                &mut self,
                $field: impl ::std::convert::Into<
                    ::std::option::Option<::std::vec::Vec<::std::string::String>>,
                >,
            ) -> &mut Self {
                self.$field = $field.into();
                self
            }

            /// 以构建器方式设置该字段。
            pub fn [<with_ $field>](
                mut self,
                $field: ::std::vec::Vec<::std::string::String>,
            ) -> Self {
                self.$field = ::std::option::Option::Some($field);
                self
            }
        }
    };

    ($(#[$fmeta:meta])* $field:ident : object<$t:ident>) => {
        $crate::__private::paste! {
            $(#[$fmeta])*
            pub fn $field(&self) -> ::std::option::Option<&$t> {
                self.$field.as_ref()
            }

            /// 设置该字段，传入 `None` 表示清除。
            pub fn [<set_ $field>](
                &mut self,
                $field: impl ::std::convert::Into<::std::option::Option<$t>>,
            ) -> &mut Self {
                self.$field = $field.into();
                self
            }

            /// 以构建器方式设置该字段。
            pub fn [<with_ $field>](mut self, $field: $t) -> Self {
                self.$field = ::std::option::Option::Some($field);
                self
            }
        }
    };

    ($(#[$fmeta:meta])* $field:ident : objects<$t:ident>) => {
        $crate::__dto_accessors!($(#[$fmeta])* $field : __list<$t>);
    };

    ($(#[$fmeta:meta])* $field:ident : enums<$t:ident>) => {
        $crate::__dto_accessors!($(#[$fmeta])* $field : __list<$t>);
    };

    ($(#[$fmeta:meta])* $field:ident : __list<$t:ident>) => {
        $crate::__private::paste! {
            $(#[$fmeta])*
            pub fn $field(&self) -> ::std::option::Option<&[$t]> {
                self.$field.as_deref()
            }

            /// 设置该字段，传入 `None` 表示清除。
            pub fn [<set_ $field>](
                &mut self,
                $field: impl ::std::convert::Into<::std::option::Option<::std::vec::Vec<$t>>>,
            ) -> &mut Self {
                self.$field = $field.into();
                self
            }

            /// 以构建器方式设置该字段。
            pub fn [<with_ $field>](mut self, $field: ::std::vec::Vec<$t>) -> Self {
                self.$field = ::std::option::Option::Some($field);
                self
            }
        }
    };

    ($(#[$fmeta:meta])* $field:ident : enumeration<$t:ident>) => {
        $crate::__private::paste! {
            $(#[$fmeta])*
            pub fn $field(&self) -> ::std::option::Option<$t> {
                self.$field
            }

            /// 设置该字段，传入 `None` 表示清除。
            pub fn [<set_ $field>](
                &mut self,
                $field: impl ::std::convert::Into<::std::option::Option<$t>>,
            ) -> &mut Self {
                self.$field = $field.into();
                self
            }

            /// 以构建器方式设置该字段。
            pub fn [<with_ $field>](mut self, $field: $t) -> Self {
                self.$field = ::std::option::Option::Some($field);
                self
            }
        }
    };
}

/// 为实现了 [`Arrayable`](crate::conv::Arrayable) 的类型生成元素转换与
/// serde 实现
///
/// `dto!` 会自动调用；手写 `Arrayable` 的类型需要显式调用。
#[doc(hidden)]
#[macro_export]
macro_rules! __impl_array_conversions {
    ($name:ident) => {
        impl $crate::conv::WireElement for $name {
            fn to_element(&self) -> $crate::__private::serde_json::Value {
                $crate::__private::serde_json::Value::Object(
                    $crate::conv::Arrayable::to_array(self),
                )
            }

            fn from_element(
                key: &str,
                value: &$crate::__private::serde_json::Value,
            ) -> $crate::Result<::std::option::Option<Self>> {
                let array = $crate::conv::ensure_object(key, value)?;
                <Self as $crate::conv::Arrayable>::from_array(array)
                    .map(::std::option::Option::Some)
                    .map_err(|e| e.nested_in(key))
            }
        }

        impl $crate::__private::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
            where
                S: $crate::__private::serde::Serializer,
            {
                $crate::__private::serde::Serialize::serialize(
                    &$crate::conv::Arrayable::to_array(self),
                    serializer,
                )
            }
        }

        impl<'de> $crate::__private::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
            where
                D: $crate::__private::serde::Deserializer<'de>,
            {
                let array =
                    <$crate::conv::Array as $crate::__private::serde::Deserialize>::deserialize(
                        deserializer,
                    )?;
                <Self as $crate::conv::Arrayable>::from_array(&array)
                    .map_err(<D::Error as $crate::__private::serde::de::Error>::custom)
            }
        }
    };
}

/// 声明一个带显式线上值的封闭枚举
///
/// ```rust
/// use authlete_dto::wire_enum;
///
/// wire_enum! {
///     /// 示例
///     pub enum Color {
///         Red => "RED",
///         Green => "green",
///     }
/// }
///
/// assert_eq!(Color::value_of("green"), Some(Color::Green));
/// assert_eq!(Color::value_of("GREEN"), None);
/// assert_eq!(Color::Red.wire_value(), "RED");
/// ```
#[macro_export]
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident => $wire:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                $variant,
            )+
        }

        impl $name {
            /// 按声明顺序排列的全部变体
            pub const VALUES: &'static [$name] = &[$($name::$variant,)+];

            /// 按线上值精确查找变体，未知值返回 `None`
            pub fn value_of(value: &str) -> ::std::option::Option<Self> {
                match value {
                    $($wire => ::std::option::Option::Some($name::$variant),)+
                    _ => ::std::option::Option::None,
                }
            }

            /// 变体的线上值
            pub const fn wire_value(self) -> &'static str {
                match self {
                    $($name::$variant => $wire,)+
                }
            }

            /// 将可能为空的变体转换为线上值
            pub fn to_wire_value(value: ::std::option::Option<Self>) -> ::std::option::Option<&'static str> {
                value.map(Self::wire_value)
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.wire_value())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::Error;

            fn from_str(s: &str) -> $crate::Result<Self> {
                Self::value_of(s)
                    .ok_or_else(|| $crate::Error::unknown_enum_value(stringify!($name), s))
            }
        }

        impl $crate::conv::WireElement for $name {
            fn to_element(&self) -> $crate::__private::serde_json::Value {
                $crate::__private::serde_json::Value::String(self.wire_value().to_string())
            }

            fn from_element(
                key: &str,
                value: &$crate::__private::serde_json::Value,
            ) -> $crate::Result<::std::option::Option<Self>> {
                let wire = $crate::conv::ensure_string(key, value)?;
                let found = Self::value_of(wire);
                if found.is_none() {
                    $crate::__private::tracing::warn!(
                        key,
                        value = wire,
                        kind = stringify!($name),
                        "dropping unrecognized enum value"
                    );
                }
                ::std::result::Result::Ok(found)
            }
        }

        impl $crate::__private::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error>
            where
                S: $crate::__private::serde::Serializer,
            {
                serializer.serialize_str(self.wire_value())
            }
        }

        impl<'de> $crate::__private::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::std::result::Result<Self, D::Error>
            where
                D: $crate::__private::serde::Deserializer<'de>,
            {
                let wire = <::std::string::String as $crate::__private::serde::Deserialize>::deserialize(
                    deserializer,
                )?;
                wire.parse::<Self>()
                    .map_err(<D::Error as $crate::__private::serde::de::Error>::custom)
            }
        }
    };
}
