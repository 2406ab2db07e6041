//! Grant Management for OAuth 2.0 (`/gm`)

use crate::{dto, wire_enum};

dto! {
    /// 授权中的一组权限范围及其适用的资源
    pub struct GrantScope {
        /// 以空格分隔的权限范围
        scope: string => "scope",
        resource: strings => "resource",
    }
}

dto! {
    /// 授权 (grant) 的内容
    pub struct Grant {
        scopes: objects<GrantScope> => "scopes",
        claims: strings => "claims",
        /// RAR `authorization_details`（JSON 文本）
        authorization_details: string => "authorizationDetails",
    }
}

wire_enum! {
    /// Grant Management 请求的操作
    ///
    /// 线上值为小写，与 Grant Management 规范保持一致。
    pub enum GrantManagementAction {
        /// 查询授权
        Query => "query",
        /// 撤销授权
        Revoke => "revoke",
    }
}

dto! {
    /// Grant Management 请求
    pub struct GrantManagementRequest {
        access_token: string => "accessToken",
        gm_action: enumeration<GrantManagementAction> => "gmAction",
        grant_id: string => "grantId",
        scopes: strings => "scopes",
        client_certificate: string => "clientCertificate",
        dpop: string => "dpop",
        htm: string => "htm",
        htu: string => "htu",
    }
}

wire_enum! {
    /// Grant Management 响应后应采取的动作
    pub enum GrantManagementResponseAction {
        /// 返回 200 OK 与授权内容
        Ok => "OK",
        /// 撤销成功，返回 204 No Content
        NoContent => "NO_CONTENT",
        Unauthorized => "UNAUTHORIZED",
        Forbidden => "FORBIDDEN",
        NotFound => "NOT_FOUND",
        /// 调用方的请求有误
        CallerError => "CALLER_ERROR",
        /// Authlete 内部错误
        AuthleteError => "AUTHLETE_ERROR",
    }
}

dto! {
    /// Grant Management 响应
    pub struct GrantManagementResponse : ApiResponse {
        action: enumeration<GrantManagementResponseAction> => "action",
        response_content: string => "responseContent",
    }
}
