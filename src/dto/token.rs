//! 令牌端点 (`/auth/token` 及相关 API)
//!
//! - `/auth/token`: 处理令牌请求
//! - `/auth/token/fail`、`/auth/token/issue`: 密码模式下认证用户后的后续调用
//! - `/auth/token/create`、`/auth/token/update`: 直接创建或更新访问令牌
//!
//! ## 示例
//!
//! ```rust
//! use authlete_dto::conv::Jsonable;
//! use authlete_dto::dto::token::{TokenFailReason, TokenFailRequest};
//!
//! let request = TokenFailRequest::new()
//!     .with_ticket("T1")
//!     .with_reason(TokenFailReason::InvalidTarget);
//!
//! assert_eq!(request.to_json(), r#"{"ticket":"T1","reason":"invalid_target"}"#);
//! ```

use chrono::{DateTime, Utc};

use crate::conv::time::{datetime_to_millis, millis_to_datetime};
use crate::dto::common::Property;
use crate::types::GrantType;
use crate::{dto, wire_enum};

// ============================================================================
// /auth/token
// ============================================================================

dto! {
    /// 令牌请求
    pub struct TokenRequest {
        /// 令牌请求的原始参数
        parameters: string => "parameters",
        /// 通过 Basic 认证取得的客户端 ID
        client_id: string => "clientId",
        /// 通过 Basic 认证取得的客户端密钥
        client_secret: string => "clientSecret",
        client_certificate: string => "clientCertificate",
        client_certificate_path: strings => "clientCertificatePath",
        /// 附加到新访问令牌上的属性
        properties: objects<Property> => "properties",
        dpop: string => "dpop",
        htm: string => "htm",
        htu: string => "htu",
    }
}

wire_enum! {
    /// 令牌响应后应采取的动作
    pub enum TokenAction {
        /// 客户端认证失败，返回 401 Unauthorized
        InvalidClient => "INVALID_CLIENT",
        InternalServerError => "INTERNAL_SERVER_ERROR",
        BadRequest => "BAD_REQUEST",
        /// 密码模式：需要验证 `username`/`password` 后调用 issue 或 fail API
        Password => "PASSWORD",
        /// 返回 200 OK，`responseContent` 为令牌响应 JSON
        Ok => "OK",
    }
}

dto! {
    /// 令牌响应
    pub struct TokenResponse : ApiResponse {
        action: enumeration<TokenAction> => "action",
        response_content: string => "responseContent",
        /// 密码模式下的用户名
        username: string => "username",
        /// 密码模式下的密码
        password: string => "password",
        ticket: string => "ticket",
        access_token: string => "accessToken",
        /// 访问令牌过期时间（毫秒时间戳）
        access_token_expires_at: int => "accessTokenExpiresAt",
        /// 访问令牌有效期（秒）
        access_token_duration: int => "accessTokenDuration",
        refresh_token: string => "refreshToken",
        /// 刷新令牌过期时间（毫秒时间戳）
        refresh_token_expires_at: int => "refreshTokenExpiresAt",
        refresh_token_duration: int => "refreshTokenDuration",
        id_token: string => "idToken",
        grant_type: enumeration<GrantType> => "grantType",
        client_id: int => "clientId",
        client_id_alias: string => "clientIdAlias",
        client_id_alias_used: bool => "clientIdAliasUsed",
        subject: string => "subject",
        scopes: strings => "scopes",
        properties: objects<Property> => "properties",
        jwt_access_token: string => "jwtAccessToken",
        resources: strings => "resources",
        access_token_resources: strings => "accessTokenResources",
    }
}

impl TokenResponse {
    /// 访问令牌过期时间
    pub fn access_token_expiry(&self) -> Option<DateTime<Utc>> {
        millis_to_datetime(self.access_token_expires_at)
    }

    /// 刷新令牌过期时间
    pub fn refresh_token_expiry(&self) -> Option<DateTime<Utc>> {
        millis_to_datetime(self.refresh_token_expires_at)
    }

    /// 以空格连接的权限范围，对应 OAuth `scope` 参数
    pub fn scope_string(&self) -> Option<String> {
        self.scopes.as_ref().map(|scopes| scopes.join(" "))
    }
}

// ============================================================================
// /auth/token/fail
// ============================================================================

wire_enum! {
    /// 令牌请求失败的原因
    ///
    /// 与其他枚举不同，线上值为小写。
    pub enum TokenFailReason {
        Unknown => "unknown",
        /// 资源所有者凭证无效
        InvalidResourceOwnerCredentials => "invalid_resource_owner_credentials",
        /// 请求的资源无效 (RFC 8707)
        InvalidTarget => "invalid_target",
    }
}

dto! {
    /// 令牌失败请求
    pub struct TokenFailRequest {
        ticket: string => "ticket",
        reason: enumeration<TokenFailReason> => "reason",
    }
}

wire_enum! {
    /// 令牌失败响应后应采取的动作
    pub enum TokenFailAction {
        InternalServerError => "INTERNAL_SERVER_ERROR",
        BadRequest => "BAD_REQUEST",
    }
}

dto! {
    /// 令牌失败响应
    pub struct TokenFailResponse : ApiResponse {
        action: enumeration<TokenFailAction> => "action",
        response_content: string => "responseContent",
    }
}

// ============================================================================
// /auth/token/issue
// ============================================================================

dto! {
    /// 令牌签发请求
    pub struct TokenIssueRequest {
        ticket: string => "ticket",
        /// 已认证的资源所有者
        subject: string => "subject",
        properties: objects<Property> => "properties",
    }
}

wire_enum! {
    /// 令牌签发响应后应采取的动作
    pub enum TokenIssueAction {
        InternalServerError => "INTERNAL_SERVER_ERROR",
        Ok => "OK",
    }
}

dto! {
    /// 令牌签发响应
    pub struct TokenIssueResponse : ApiResponse {
        action: enumeration<TokenIssueAction> => "action",
        response_content: string => "responseContent",
        access_token: string => "accessToken",
        access_token_expires_at: int => "accessTokenExpiresAt",
        access_token_duration: int => "accessTokenDuration",
        refresh_token: string => "refreshToken",
        refresh_token_expires_at: int => "refreshTokenExpiresAt",
        refresh_token_duration: int => "refreshTokenDuration",
        client_id: int => "clientId",
        client_id_alias: string => "clientIdAlias",
        client_id_alias_used: bool => "clientIdAliasUsed",
        subject: string => "subject",
        scopes: strings => "scopes",
        properties: objects<Property> => "properties",
        jwt_access_token: string => "jwtAccessToken",
    }
}

// ============================================================================
// /auth/token/create
// ============================================================================

dto! {
    /// 令牌创建请求
    pub struct TokenCreateRequest {
        grant_type: enumeration<GrantType> => "grantType",
        client_id: int => "clientId",
        subject: string => "subject",
        scopes: strings => "scopes",
        /// 访问令牌有效期（秒），`0` 表示使用服务设置
        access_token_duration: int => "accessTokenDuration",
        refresh_token_duration: int => "refreshTokenDuration",
        properties: objects<Property> => "properties",
        client_id_alias_used: bool => "clientIdAliasUsed",
        /// 指定访问令牌的值而不是由服务生成
        access_token: string => "accessToken",
        refresh_token: string => "refreshToken",
        /// 访问令牌永不过期
        access_token_persistent: bool => "accessTokenPersistent",
        certificate_thumbprint: string => "certificateThumbprint",
        dpop_key_thumbprint: string => "dpopKeyThumbprint",
        resources: strings => "resources",
    }
}

wire_enum! {
    /// 令牌创建响应后应采取的动作
    pub enum TokenCreateAction {
        InternalServerError => "INTERNAL_SERVER_ERROR",
        BadRequest => "BAD_REQUEST",
        Forbidden => "FORBIDDEN",
        Ok => "OK",
    }
}

dto! {
    /// 令牌创建响应
    pub struct TokenCreateResponse : ApiResponse {
        action: enumeration<TokenCreateAction> => "action",
        grant_type: enumeration<GrantType> => "grantType",
        client_id: int => "clientId",
        subject: string => "subject",
        scopes: strings => "scopes",
        access_token: string => "accessToken",
        /// 通常为 `Bearer`
        token_type: string => "tokenType",
        /// 有效期（秒）
        expires_in: int => "expiresIn",
        /// 过期时间（毫秒时间戳）
        expires_at: int => "expiresAt",
        refresh_token: string => "refreshToken",
        properties: objects<Property> => "properties",
        jwt_access_token: string => "jwtAccessToken",
    }
}

// ============================================================================
// /auth/token/update
// ============================================================================

dto! {
    /// 令牌更新请求
    pub struct TokenUpdateRequest {
        access_token: string => "accessToken",
        /// 新的过期时间（毫秒时间戳），`0` 表示不修改
        access_token_expires_at: int => "accessTokenExpiresAt",
        scopes: strings => "scopes",
        properties: objects<Property> => "properties",
        /// 更新权限范围时是否同时重新计算过期时间
        access_token_expires_at_updated_on_scope_update: bool => "accessTokenExpiresAtUpdatedOnScopeUpdate",
    }
}

impl TokenUpdateRequest {
    /// 以 `DateTime<Utc>` 设置新的过期时间
    pub fn with_access_token_expiry(self, expiry: DateTime<Utc>) -> Self {
        self.with_access_token_expires_at(datetime_to_millis(expiry))
    }

    /// 新的过期时间，未设置时为 `None`
    pub fn access_token_expiry(&self) -> Option<DateTime<Utc>> {
        millis_to_datetime(self.access_token_expires_at)
    }
}

wire_enum! {
    /// 令牌更新响应后应采取的动作
    pub enum TokenUpdateAction {
        InternalServerError => "INTERNAL_SERVER_ERROR",
        BadRequest => "BAD_REQUEST",
        Forbidden => "FORBIDDEN",
        /// 访问令牌不存在
        NotFound => "NOT_FOUND",
        Ok => "OK",
    }
}

dto! {
    /// 令牌更新响应
    pub struct TokenUpdateResponse : ApiResponse {
        action: enumeration<TokenUpdateAction> => "action",
        access_token: string => "accessToken",
        access_token_expires_at: int => "accessTokenExpiresAt",
        scopes: strings => "scopes",
        properties: objects<Property> => "properties",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conv::{Arrayable, Jsonable};
    use serde_json::{Value, json};

    #[test]
    fn test_token_fail_request_json() {
        let mut request = TokenFailRequest::new();
        request
            .set_ticket("T1".to_string())
            .set_reason(TokenFailReason::InvalidTarget);

        let json = request.to_json();
        let value: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value, json!({"ticket": "T1", "reason": "invalid_target"}));

        let restored = TokenFailRequest::from_json(r#"{"ticket":"T1","reason":"invalid_target"}"#).unwrap();
        assert_eq!(restored, request);
    }

    #[test]
    fn test_token_fail_reason_is_lower_case() {
        assert_eq!(TokenFailReason::value_of("INVALID_TARGET"), None);
        assert_eq!(
            TokenFailReason::value_of("invalid_resource_owner_credentials"),
            Some(TokenFailReason::InvalidResourceOwnerCredentials)
        );
    }

    #[test]
    fn test_token_response_password_flow() {
        let json = json!({
            "resultCode": "A053001",
            "action": "PASSWORD",
            "username": "alice",
            "password": "secret",
            "ticket": "tk",
            "grantType": "PASSWORD"
        });
        let response = TokenResponse::from_json(&json.to_string()).unwrap();

        assert_eq!(response.action(), Some(TokenAction::Password));
        assert_eq!(response.username(), Some("alice"));
        assert_eq!(response.grant_type(), Some(GrantType::Password));
        assert_eq!(response.access_token_duration(), 0);
        assert!(response.access_token_expiry().is_none());
    }

    #[test]
    fn test_token_response_expiry() {
        let response = TokenResponse::new()
            .with_access_token_expires_at(1_700_000_000_000)
            .with_refresh_token_expires_at(1_700_086_400_000)
            .with_scopes(vec!["openid".to_string(), "email".to_string()]);

        assert_eq!(response.access_token_expiry().unwrap().timestamp(), 1_700_000_000);
        assert_eq!(response.refresh_token_expiry().unwrap().timestamp(), 1_700_086_400);
        assert_eq!(response.scope_string().as_deref(), Some("openid email"));
    }

    #[test]
    fn test_token_create_request_roundtrip() {
        let request = TokenCreateRequest::new()
            .with_grant_type(GrantType::ClientCredentials)
            .with_client_id(57)
            .with_scopes(vec!["api".to_string()])
            .with_access_token_persistent(true)
            .with_properties(vec![Property::of("tenant", "a")]);

        let array = request.to_array();
        assert_eq!(array["grantType"], json!("CLIENT_CREDENTIALS"));
        assert_eq!(TokenCreateRequest::from_array(&array).unwrap(), request);
    }

    #[test]
    fn test_unknown_action_is_absent() {
        let response = TokenUpdateResponse::from_json(r#"{"action":"GONE"}"#).unwrap();
        assert_eq!(response.action(), None);
    }

    #[test]
    fn test_client_id_must_be_integer() {
        let err = TokenIssueResponse::from_json(r#"{"clientId":"57"}"#).unwrap_err();
        assert_eq!(err.key(), Some("clientId"));
        assert!(err.to_string().contains("an integer"));
    }

    #[test]
    fn test_update_request_expiry_in_millis() {
        let expiry = DateTime::from_timestamp(1_700_000_000, 0).unwrap();
        let request = TokenUpdateRequest::new()
            .with_access_token("at")
            .with_access_token_expiry(expiry);

        assert_eq!(request.to_array()["accessTokenExpiresAt"], json!(1_700_000_000_000_i64));
        assert_eq!(request.access_token_expiry(), Some(expiry));
        assert!(TokenUpdateRequest::new().access_token_expiry().is_none());
    }
}
