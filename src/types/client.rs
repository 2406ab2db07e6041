//! 客户端元数据相关的代码集合

use crate::wire_enum;

wire_enum! {
    /// 客户端应用类型（OpenID Connect Dynamic Client Registration `application_type`）
    pub enum ApplicationType {
        /// Web 应用（默认值）
        Web => "WEB",
        /// 原生应用
        Native => "NATIVE",
    }
}

wire_enum! {
    /// OAuth 客户端类型 (RFC 6749 Section 2.1)
    pub enum ClientType {
        /// 公开客户端（无法安全保存密钥，如 SPA、移动 App）
        Public => "PUBLIC",
        /// 机密客户端（可以安全保存密钥的服务端应用）
        Confidential => "CONFIDENTIAL",
    }
}

wire_enum! {
    /// 令牌端点的客户端认证方式
    pub enum ClientAuthMethod {
        /// 不认证（公开客户端）
        None => "NONE",
        /// HTTP Basic 认证
        ClientSecretBasic => "CLIENT_SECRET_BASIC",
        /// 在请求体中携带 `client_secret`
        ClientSecretPost => "CLIENT_SECRET_POST",
        /// 用 `client_secret` 签名的 JWT
        ClientSecretJwt => "CLIENT_SECRET_JWT",
        /// 用私钥签名的 JWT
        PrivateKeyJwt => "PRIVATE_KEY_JWT",
        /// 基于 PKI 的双向 TLS (RFC 8705)
        TlsClientAuth => "TLS_CLIENT_AUTH",
        /// 基于自签名证书的双向 TLS (RFC 8705)
        SelfSignedTlsClientAuth => "SELF_SIGNED_TLS_CLIENT_AUTH",
    }
}

impl ClientAuthMethod {
    /// 客户端元数据 `token_endpoint_auth_method` 中使用的名称
    pub fn name(self) -> &'static str {
        match self {
            ClientAuthMethod::None => "none",
            ClientAuthMethod::ClientSecretBasic => "client_secret_basic",
            ClientAuthMethod::ClientSecretPost => "client_secret_post",
            ClientAuthMethod::ClientSecretJwt => "client_secret_jwt",
            ClientAuthMethod::PrivateKeyJwt => "private_key_jwt",
            ClientAuthMethod::TlsClientAuth => "tls_client_auth",
            ClientAuthMethod::SelfSignedTlsClientAuth => "self_signed_tls_client_auth",
        }
    }

    /// 按元数据名称查找
    pub fn from_name(name: &str) -> Option<Self> {
        Self::VALUES.iter().copied().find(|m| m.name() == name)
    }
}

wire_enum! {
    /// 主体标识符类型 (OpenID Connect Core Section 8)
    pub enum SubjectType {
        Public => "PUBLIC",
        Pairwise => "PAIRWISE",
    }
}
