//! 授权流程相关的代码集合

use crate::wire_enum;

wire_enum! {
    /// 授权类型
    pub enum GrantType {
        /// 授权码模式 (RFC 6749 Section 4.1)
        AuthorizationCode => "AUTHORIZATION_CODE",
        /// 隐式授权 (RFC 6749 Section 4.2)
        Implicit => "IMPLICIT",
        /// 资源所有者密码凭证 (RFC 6749 Section 4.3)
        Password => "PASSWORD",
        /// 客户端凭证模式 (RFC 6749 Section 4.4)
        ClientCredentials => "CLIENT_CREDENTIALS",
        /// 刷新令牌 (RFC 6749 Section 6)
        RefreshToken => "REFRESH_TOKEN",
        /// Client Initiated Backchannel Authentication
        Ciba => "CIBA",
        /// 设备授权 (RFC 8628)
        DeviceCode => "DEVICE_CODE",
        /// 令牌交换 (RFC 8693)
        TokenExchange => "TOKEN_EXCHANGE",
        /// JWT 授权 (RFC 7523)
        JwtBearer => "JWT_BEARER",
    }
}

impl GrantType {
    /// 令牌请求 `grant_type` 参数的取值
    ///
    /// `Implicit` 没有对应的 `grant_type` 取值，返回 `"implicit"` 仅用于显示。
    pub fn parameter_value(self) -> &'static str {
        match self {
            GrantType::AuthorizationCode => "authorization_code",
            GrantType::Implicit => "implicit",
            GrantType::Password => "password",
            GrantType::ClientCredentials => "client_credentials",
            GrantType::RefreshToken => "refresh_token",
            GrantType::Ciba => "urn:openid:params:grant-type:ciba",
            GrantType::DeviceCode => "urn:ietf:params:oauth:grant-type:device_code",
            GrantType::TokenExchange => "urn:ietf:params:oauth:grant-type:token-exchange",
            GrantType::JwtBearer => "urn:ietf:params:oauth:grant-type:jwt-bearer",
        }
    }

    /// 按 `grant_type` 参数值查找
    pub fn from_parameter_value(value: &str) -> Option<Self> {
        Self::VALUES
            .iter()
            .copied()
            .find(|g| g.parameter_value() == value)
    }
}

wire_enum! {
    /// 响应类型 (`response_type`) 组合
    pub enum ResponseType {
        None => "NONE",
        Code => "CODE",
        Token => "TOKEN",
        IdToken => "ID_TOKEN",
        CodeToken => "CODE_TOKEN",
        CodeIdToken => "CODE_ID_TOKEN",
        IdTokenToken => "ID_TOKEN_TOKEN",
        CodeIdTokenToken => "CODE_ID_TOKEN_TOKEN",
    }
}

impl ResponseType {
    /// 以空格分隔的 `response_type` 参数值（规范顺序）
    pub fn parameter_value(self) -> &'static str {
        match self {
            ResponseType::None => "none",
            ResponseType::Code => "code",
            ResponseType::Token => "token",
            ResponseType::IdToken => "id_token",
            ResponseType::CodeToken => "code token",
            ResponseType::CodeIdToken => "code id_token",
            ResponseType::IdTokenToken => "id_token token",
            ResponseType::CodeIdTokenToken => "code id_token token",
        }
    }

    /// 按 `response_type` 参数值查找
    ///
    /// 参数值是以空格分隔的集合，元素顺序无关；重复元素视为无效。
    pub fn from_parameter_value(value: &str) -> Option<Self> {
        let mut requested: Vec<&str> = value.split_whitespace().collect();
        requested.sort_unstable();

        let original_len = requested.len();
        requested.dedup();
        if requested.len() != original_len {
            return None;
        }

        Self::VALUES.iter().copied().find(|rt| {
            let mut parts: Vec<&str> = rt.parameter_value().split(' ').collect();
            parts.sort_unstable();
            parts == requested
        })
    }
}

wire_enum! {
    /// `prompt` 请求参数的取值
    pub enum Prompt {
        None => "NONE",
        Login => "LOGIN",
        Consent => "CONSENT",
        SelectAccount => "SELECT_ACCOUNT",
        /// Initiating User Registration via OpenID Connect
        Create => "CREATE",
    }
}

wire_enum! {
    /// `display` 请求参数的取值
    pub enum Display {
        /// 完整页面（默认值）
        Page => "PAGE",
        Popup => "POPUP",
        Touch => "TOUCH",
        Wap => "WAP",
    }
}

wire_enum! {
    /// 声明类型 (OpenID Connect Core Section 5.6)
    pub enum ClaimType {
        Normal => "NORMAL",
        Aggregated => "AGGREGATED",
        Distributed => "DISTRIBUTED",
    }
}

wire_enum! {
    /// CIBA 令牌交付模式
    pub enum DeliveryMode {
        /// 客户端被通知后再到令牌端点取令牌
        Ping => "PING",
        /// 客户端轮询令牌端点
        Poll => "POLL",
        /// 令牌直接推送到客户端通知端点
        Push => "PUSH",
    }
}

wire_enum! {
    /// 设备流程中用户码使用的字符集
    pub enum UserCodeCharset {
        /// `BCDFGHJKLMNPQRSTVWXZ`（无元音）
        Base20 => "BASE20",
        /// `0123456789`
        Numeric => "NUMERIC",
    }
}

impl UserCodeCharset {
    /// 字符集中的字符
    pub fn characters(self) -> &'static str {
        match self {
            UserCodeCharset::Base20 => "BCDFGHJKLMNPQRSTVWXZ",
            UserCodeCharset::Numeric => "0123456789",
        }
    }
}
