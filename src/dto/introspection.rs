//! 令牌内省
//!
//! - `/auth/introspection`: 资源服务器校验访问令牌（Authlete 专有格式）
//! - `/auth/introspection/standard`: RFC 7662 标准内省端点的实现支持

use chrono::{DateTime, Utc};

use crate::conv::time::millis_to_datetime;
use crate::dto::common::Property;
use crate::{dto, wire_enum};

// ============================================================================
// /auth/introspection
// ============================================================================

dto! {
    /// 内省请求
    pub struct IntrospectionRequest {
        /// 要内省的访问令牌
        token: string => "token",
        /// 访问受保护资源所需的权限范围
        scopes: strings => "scopes",
        /// 访问令牌必须关联的主体
        subject: string => "subject",
        client_certificate: string => "clientCertificate",
        dpop: string => "dpop",
        htm: string => "htm",
        htu: string => "htu",
    }
}

wire_enum! {
    /// 内省响应后资源服务器应采取的动作
    pub enum IntrospectionAction {
        InternalServerError => "INTERNAL_SERVER_ERROR",
        /// 请求中没有访问令牌，返回 400
        BadRequest => "BAD_REQUEST",
        /// 令牌不存在或已过期，返回 401
        Unauthorized => "UNAUTHORIZED",
        /// 权限范围不足或主体不符，返回 403
        Forbidden => "FORBIDDEN",
        /// 令牌有效
        Ok => "OK",
    }
}

dto! {
    /// 内省响应
    pub struct IntrospectionResponse : ApiResponse {
        action: enumeration<IntrospectionAction> => "action",
        /// 出错时 `WWW-Authenticate` 头的值
        response_content: string => "responseContent",
        client_id: int => "clientId",
        client_id_alias: string => "clientIdAlias",
        client_id_alias_used: bool => "clientIdAliasUsed",
        /// 过期时间（毫秒时间戳）
        expires_at: int => "expiresAt",
        subject: string => "subject",
        scopes: strings => "scopes",
        /// 令牌是否存在
        existent: bool => "existent",
        /// 令牌是否可用（存在且未过期）
        usable: bool => "usable",
        /// 令牌是否覆盖请求的全部权限范围
        sufficient: bool => "sufficient",
        /// 是否可以刷新
        refreshable: bool => "refreshable",
        properties: objects<Property> => "properties",
        certificate_thumbprint: string => "certificateThumbprint",
        resources: strings => "resources",
        access_token_resources: strings => "accessTokenResources",
    }
}

impl IntrospectionResponse {
    /// 过期时间
    pub fn expiry(&self) -> Option<DateTime<Utc>> {
        millis_to_datetime(self.expires_at)
    }

    /// 令牌是否具有指定的权限范围
    pub fn has_scope(&self, scope: &str) -> bool {
        self.scopes
            .iter()
            .flatten()
            .any(|s| s == scope)
    }

    /// 按键查找令牌属性
    pub fn property(&self, key: &str) -> Option<&str> {
        self.properties
            .iter()
            .flatten()
            .find(|p| p.key() == Some(key))
            .and_then(Property::value)
    }
}

// ============================================================================
// /auth/introspection/standard
// ============================================================================

dto! {
    /// 标准内省请求
    pub struct StandardIntrospectionRequest {
        /// RFC 7662 内省请求的原始参数
        parameters: string => "parameters",
        /// 响应中是否包含隐藏属性
        with_hidden_properties: bool => "withHiddenProperties",
    }
}

wire_enum! {
    /// 标准内省响应后应采取的动作
    pub enum StandardIntrospectionAction {
        InternalServerError => "INTERNAL_SERVER_ERROR",
        BadRequest => "BAD_REQUEST",
        /// 返回 200 OK，`responseContent` 为 RFC 7662 响应 JSON
        Ok => "OK",
    }
}

dto! {
    /// 标准内省响应
    pub struct StandardIntrospectionResponse : ApiResponse {
        action: enumeration<StandardIntrospectionAction> => "action",
        response_content: string => "responseContent",
    }
}
