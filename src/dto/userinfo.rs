//! UserInfo 端点 (`/auth/userinfo` 与 `/auth/userinfo/issue`)

use crate::dto::common::Property;
use crate::{dto, wire_enum};

// ============================================================================
// /auth/userinfo
// ============================================================================

dto! {
    /// UserInfo 请求
    pub struct UserInfoRequest {
        /// 客户端出示的访问令牌
        token: string => "token",
        client_certificate: string => "clientCertificate",
        dpop: string => "dpop",
        htm: string => "htm",
        htu: string => "htu",
    }
}

wire_enum! {
    /// UserInfo 响应后应采取的动作
    pub enum UserInfoAction {
        InternalServerError => "INTERNAL_SERVER_ERROR",
        BadRequest => "BAD_REQUEST",
        Unauthorized => "UNAUTHORIZED",
        Forbidden => "FORBIDDEN",
        /// 令牌有效，收集声明后调用 `/auth/userinfo/issue`
        Ok => "OK",
    }
}

dto! {
    /// UserInfo 响应
    pub struct UserInfoResponse : ApiResponse {
        action: enumeration<UserInfoAction> => "action",
        client_id: int => "clientId",
        subject: string => "subject",
        scopes: strings => "scopes",
        /// 需要返回的声明名称
        claims: strings => "claims",
        token: string => "token",
        response_content: string => "responseContent",
        properties: objects<Property> => "properties",
        client_id_alias: string => "clientIdAlias",
        client_id_alias_used: bool => "clientIdAliasUsed",
        /// `claims` 请求参数中 `userinfo` 部分（JSON 文本）
        user_info_claims: string => "userInfoClaims",
    }
}

// ============================================================================
// /auth/userinfo/issue
// ============================================================================

dto! {
    /// UserInfo 签发请求
    pub struct UserInfoIssueRequest {
        token: string => "token",
        /// 声明值（JSON 文本）
        claims: string => "claims",
        /// 覆盖 `sub` 声明的值
        sub: string => "sub",
    }
}

wire_enum! {
    /// UserInfo 签发响应后应采取的动作
    pub enum UserInfoIssueAction {
        InternalServerError => "INTERNAL_SERVER_ERROR",
        BadRequest => "BAD_REQUEST",
        Unauthorized => "UNAUTHORIZED",
        Forbidden => "FORBIDDEN",
        /// 以 `application/json` 返回
        Json => "JSON",
        /// 以 `application/jwt` 返回
        Jwt => "JWT",
    }
}

dto! {
    /// UserInfo 签发响应
    pub struct UserInfoIssueResponse : ApiResponse {
        action: enumeration<UserInfoIssueAction> => "action",
        response_content: string => "responseContent",
    }
}
